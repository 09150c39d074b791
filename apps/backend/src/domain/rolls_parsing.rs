//! Roll parsing from and rendering to the symbol alphabet ("0"-"9", "X", "/", "-")

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use super::rolls_types::{PinCount, Roll};
use crate::errors::domain::DomainError;

pub const STRIKE_SYMBOL: &str = "X";
pub const SPARE_SYMBOL: &str = "/";
pub const EMPTY_SYMBOL: &str = "-";

const PIN_SYMBOLS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl Roll {
    pub fn symbol(self) -> &'static str {
        match self {
            Roll::Empty => EMPTY_SYMBOL,
            Roll::Pins(p) => PIN_SYMBOLS[usize::from(p.get())],
            Roll::Strike => STRIKE_SYMBOL,
            Roll::Spare => SPARE_SYMBOL,
        }
    }
}

impl Display for Roll {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.symbol())
    }
}

impl FromStr for Roll {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | EMPTY_SYMBOL => Ok(Roll::Empty),
            STRIKE_SYMBOL => Ok(Roll::Strike),
            SPARE_SYMBOL => Ok(Roll::Spare),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => {
                        // '0'..='9' always fits a PinCount
                        PinCount::new(c as u8 - b'0').map(Roll::Pins)
                    }
                    _ => Err(DomainError::illegal_roll(format!("Parse roll: {s:?}"))),
                }
            }
        }
    }
}

/// Parse an optional stored symbol; `None` is an empty slot.
pub fn parse_optional_roll(symbol: Option<&str>) -> Result<Roll, DomainError> {
    symbol.map_or(Ok(Roll::Empty), str::parse)
}

//! Core roll types: Roll, PinCount

use crate::domain::rules::PINS_PER_RACK;
use crate::errors::domain::DomainError;

/// Pins knocked down by a single ball that did not clear the rack.
///
/// Always 0..=9; ten pins are recorded as a strike or a spare.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PinCount(u8);

impl PinCount {
    pub const MAX: u8 = PINS_PER_RACK - 1;

    pub fn new(pins: u8) -> Result<Self, DomainError> {
        if pins > Self::MAX {
            return Err(DomainError::illegal_roll(format!(
                "pin count {pins} out of range 0-{}",
                Self::MAX
            )));
        }
        Ok(Self(pins))
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Every pin count from 0 up to and including `max` (clamped to 9).
    pub fn up_to(max: u8) -> impl Iterator<Item = PinCount> {
        (0..=max.min(Self::MAX)).map(PinCount)
    }
}

impl TryFrom<u8> for PinCount {
    type Error = DomainError;

    fn try_from(pins: u8) -> Result<Self, Self::Error> {
        Self::new(pins)
    }
}

/// A single roll slot of a frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Roll {
    /// Not thrown yet, or not applicable.
    #[default]
    Empty,
    Pins(PinCount),
    Strike,
    Spare,
}

impl Roll {
    pub fn pins(pins: u8) -> Result<Self, DomainError> {
        PinCount::new(pins).map(Roll::Pins)
    }

    pub fn is_set(self) -> bool {
        !matches!(self, Roll::Empty)
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Roll::Empty)
    }

    pub fn is_strike(self) -> bool {
        matches!(self, Roll::Strike)
    }

    pub fn is_spare(self) -> bool {
        matches!(self, Roll::Spare)
    }

    /// Numeric contribution of this roll on its own.
    ///
    /// A spare counts 0 here; its ten is realised by the frame that owns it.
    pub fn value(self) -> u16 {
        match self {
            Roll::Empty | Roll::Spare => 0,
            Roll::Pins(p) => u16::from(p.get()),
            Roll::Strike => u16::from(PINS_PER_RACK),
        }
    }

    /// Full alphabet in display order: empty, 0-9, strike, spare.
    pub fn alphabet() -> Vec<Roll> {
        let mut out = Vec::with_capacity(13);
        out.push(Roll::Empty);
        out.extend(PinCount::up_to(PinCount::MAX).map(Roll::Pins));
        out.push(Roll::Strike);
        out.push(Roll::Spare);
        out
    }
}

impl From<PinCount> for Roll {
    fn from(p: PinCount) -> Self {
        Roll::Pins(p)
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::rolls_parsing::parse_optional_roll;
use crate::domain::rules::FrameNumber;
use crate::domain::{Frame, Roll};
use crate::errors::domain::DomainError;

/// A stored frame row with its rolls still as raw symbols.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameRecord {
    pub frame_number: FrameNumber,
    #[serde(default)]
    pub first_roll: Option<String>,
    #[serde(default)]
    pub second_roll: Option<String>,
    #[serde(default)]
    pub bonus_roll: Option<String>,
}

impl FrameRecord {
    pub fn empty(frame_number: FrameNumber) -> Self {
        Self {
            frame_number,
            first_roll: None,
            second_roll: None,
            bonus_roll: None,
        }
    }
}

impl TryFrom<&FrameRecord> for Frame {
    type Error = DomainError;

    fn try_from(rec: &FrameRecord) -> Result<Self, Self::Error> {
        Ok(Frame::new(
            rec.frame_number,
            parse_optional_roll(rec.first_roll.as_deref())?,
            parse_optional_roll(rec.second_roll.as_deref())?,
            parse_optional_roll(rec.bonus_roll.as_deref())?,
        ))
    }
}

fn symbol_or_none(roll: Roll) -> Option<String> {
    roll.is_set().then(|| roll.to_string())
}

impl From<&Frame> for FrameRecord {
    fn from(frame: &Frame) -> Self {
        Self {
            frame_number: frame.frame_number,
            first_roll: symbol_or_none(frame.first_roll),
            second_roll: symbol_or_none(frame.second_roll),
            bonus_roll: symbol_or_none(frame.bonus_roll),
        }
    }
}

/// All stored frames of one player in one game, in storage order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerFramesRecord {
    pub player: String,
    pub frames: Vec<FrameRecord>,
}

/// Partial frame update: fields left out keep their stored value.
///
/// An explicit `"-"` clears a slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_roll: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_roll: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus_roll: Option<String>,
}

impl FrameUpdateRequest {
    /// Overlay this request on `frame`, parsing every provided symbol.
    pub fn merge_into(&self, frame: &Frame) -> Result<Frame, DomainError> {
        let pick = |update: &Option<String>, current: Roll| match update {
            Some(symbol) => symbol.parse::<Roll>(),
            None => Ok(current),
        };
        Ok(Frame::new(
            frame.frame_number,
            pick(&self.first_roll, frame.first_roll)?,
            pick(&self.second_roll, frame.second_roll)?,
            pick(&self.bonus_roll, frame.bonus_roll)?,
        ))
    }

    pub fn is_empty(&self) -> bool {
        self.first_roll.is_none() && self.second_roll.is_none() && self.bonus_roll.is_none()
    }
}

/// What a client may enter next for one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollOptionsResponse {
    pub frame_number: FrameNumber,
    pub complete: bool,
    pub first_roll: Vec<String>,
    pub second_roll: Vec<String>,
    pub bonus_roll: Vec<String>,
}

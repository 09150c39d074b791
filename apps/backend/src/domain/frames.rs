//! Frame and per-player frame sequence types.

use serde::{Deserialize, Serialize};

use crate::domain::rolls_types::Roll;
use crate::domain::rules::{frame_numbers, is_last_frame, FrameNumber, FRAMES_PER_GAME};
use crate::domain::validator::check_frame;
use crate::errors::domain::DomainError;

/// One player's turn: up to two balls, three in frame 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub frame_number: FrameNumber,
    #[serde(default)]
    pub first_roll: Roll,
    #[serde(default)]
    pub second_roll: Roll,
    #[serde(default)]
    pub bonus_roll: Roll,
}

impl Frame {
    /// A frame as created at game start: nothing thrown.
    pub fn empty(frame_number: FrameNumber) -> Self {
        Self {
            frame_number,
            first_roll: Roll::Empty,
            second_roll: Roll::Empty,
            bonus_roll: Roll::Empty,
        }
    }

    pub fn new(frame_number: FrameNumber, first: Roll, second: Roll, bonus: Roll) -> Self {
        Self {
            frame_number,
            first_roll: first,
            second_roll: second,
            bonus_roll: bonus,
        }
    }

    pub fn is_last(&self) -> bool {
        is_last_frame(self.frame_number)
    }

    pub fn rolls(&self) -> [Roll; 3] {
        [self.first_roll, self.second_roll, self.bonus_roll]
    }
}

/// Exactly ten frames for one player in one game, frame 1 first.
///
/// Construction is the scoring boundary: anything that gets through
/// `PlayerFrames::new` can be scored without further checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PlayerFrames([Frame; FRAMES_PER_GAME as usize]);

impl PlayerFrames {
    pub fn new(frames: Vec<Frame>) -> Result<Self, DomainError> {
        let count = frames.len();
        let frames: [Frame; FRAMES_PER_GAME as usize] = frames.try_into().map_err(|_| {
            DomainError::malformed_sequence(format!(
                "expected {FRAMES_PER_GAME} frames, got {count}"
            ))
        })?;

        for (frame, expected) in frames.iter().zip(frame_numbers()) {
            if frame.frame_number != expected {
                return Err(DomainError::malformed_sequence(format!(
                    "frame at position {expected} is numbered {}",
                    frame.frame_number
                )));
            }
            check_frame(frame)?;
        }

        Ok(Self(frames))
    }

    /// Ten untouched frames.
    pub fn fresh() -> Self {
        let mut frames = [Frame::empty(1); FRAMES_PER_GAME as usize];
        for (frame, n) in frames.iter_mut().zip(frame_numbers()) {
            frame.frame_number = n;
        }
        Self(frames)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.0
    }

    pub fn frame(&self, frame_number: FrameNumber) -> Option<&Frame> {
        let idx = usize::from(frame_number).checked_sub(1)?;
        self.0.get(idx)
    }

    pub fn last(&self) -> &Frame {
        &self.0[self.0.len() - 1]
    }

    /// Copy with one frame swapped out; the replacement is checked first.
    pub fn with_frame(&self, frame: Frame) -> Result<Self, DomainError> {
        let idx = usize::from(frame.frame_number)
            .checked_sub(1)
            .filter(|i| *i < self.0.len())
            .ok_or_else(|| {
                DomainError::malformed_sequence(format!(
                    "frame number {} out of range",
                    frame.frame_number
                ))
            })?;
        check_frame(&frame)?;
        let mut next = self.0;
        next[idx] = frame;
        Ok(Self(next))
    }
}

impl<'de> Deserialize<'de> for PlayerFrames {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let frames = Vec::<Frame>::deserialize(deserializer)?;
        PlayerFrames::new(frames).map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}

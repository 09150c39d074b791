//! Frame completeness and roll legality.
//!
//! Everything here is a pure function of a single frame. Cross-frame
//! numbering is checked by `PlayerFrames::new`.

use serde::{Deserialize, Serialize};

use crate::domain::frames::Frame;
use crate::domain::rolls_types::{PinCount, Roll};
use crate::domain::rules::frame_numbers;
use crate::errors::domain::DomainError;

/// The three roll slots of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RollSlot {
    First,
    Second,
    Bonus,
}

/// True once no further balls are expected in this frame.
///
/// Frames 1-9 finish on a strike or after two balls. Frame 10 finishes
/// after two balls when they leave pins standing; a strike or spare
/// there always needs its fill ball(s) first.
pub fn is_complete(frame: &Frame) -> bool {
    let (first, second, bonus) = (frame.first_roll, frame.second_roll, frame.bonus_roll);

    if !frame.is_last() {
        return first.is_strike() || (first.is_set() && second.is_set());
    }

    match (first, second) {
        (Roll::Empty, _) => false,
        (Roll::Strike, _) => second.is_set() && bonus.is_set(),
        (_, Roll::Spare) => bonus.is_set(),
        _ => second.is_set(),
    }
}

/// First ball alphabet: empty, 0-9, strike. A spare is never a first ball.
pub fn legal_first_roll_options() -> Vec<Roll> {
    let mut out = vec![Roll::Empty];
    out.extend(PinCount::up_to(PinCount::MAX).map(Roll::Pins));
    out.push(Roll::Strike);
    out
}

/// Second balls that may follow the frame's current first ball.
///
/// Empty when there is no first ball yet, or when a strike already
/// decided a frame before the 10th.
pub fn legal_second_roll_options(frame: &Frame) -> Vec<Roll> {
    match frame.first_roll {
        Roll::Empty | Roll::Spare => Vec::new(),
        Roll::Strike if frame.is_last() => Roll::alphabet(),
        Roll::Strike => Vec::new(),
        Roll::Pins(first) => {
            let standing = PinCount::MAX - first.get();
            let mut out = vec![Roll::Empty];
            out.extend(PinCount::up_to(standing).map(Roll::Pins));
            if frame.is_last() {
                out.push(Roll::Strike);
            }
            out.push(Roll::Spare);
            out
        }
    }
}

/// Fill balls for frame 10, offered only after a strike (with its
/// second ball recorded) or a spare.
pub fn legal_bonus_roll_options(frame: &Frame) -> Vec<Roll> {
    if !frame.is_last() {
        return Vec::new();
    }
    let earned = (frame.first_roll.is_strike() && frame.second_roll.is_set())
        || frame.second_roll.is_spare();
    if earned {
        Roll::alphabet()
    } else {
        Vec::new()
    }
}

pub fn legal_options(frame: &Frame, slot: RollSlot) -> Vec<Roll> {
    match slot {
        RollSlot::First => legal_first_roll_options(),
        RollSlot::Second => legal_second_roll_options(frame),
        RollSlot::Bonus => legal_bonus_roll_options(frame),
    }
}

/// Reject frames whose rolls could not have been entered one ball at a
/// time through the legal option lists.
pub fn check_frame(frame: &Frame) -> Result<(), DomainError> {
    let n = frame.frame_number;
    if !frame_numbers().contains(&n) {
        return Err(DomainError::malformed_sequence(format!(
            "frame number {n} out of range 1-10"
        )));
    }

    if frame.first_roll.is_spare() {
        return Err(DomainError::inconsistent(format!(
            "frame {n}: a spare cannot be the first ball"
        )));
    }

    if frame.second_roll.is_set() {
        if frame.first_roll.is_empty() {
            return Err(DomainError::inconsistent(format!(
                "frame {n}: second ball recorded without a first ball"
            )));
        }
        if !legal_second_roll_options(frame).contains(&frame.second_roll) {
            return Err(DomainError::inconsistent(format!(
                "frame {n}: second ball {} cannot follow {}",
                frame.second_roll, frame.first_roll
            )));
        }
    }

    if frame.bonus_roll.is_set() && !legal_bonus_roll_options(frame).contains(&frame.bonus_roll)
    {
        return Err(DomainError::inconsistent(format!(
            "frame {n}: fill ball {} not allowed after {} {}",
            frame.bonus_roll, frame.first_roll, frame.second_roll
        )));
    }

    Ok(())
}

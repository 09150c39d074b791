//! Frame update service: merge a partial roll update into a player's sheet.

use tracing::{debug, warn};

use crate::domain::rules::FrameNumber;
use crate::domain::{is_complete, legal_options, Frame, PlayerFrames, RollSlot};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::protocol::{FrameUpdateRequest, RollOptionsResponse};

/// Apply `request` to frame `frame_number` and return the updated sheet.
///
/// Either the whole update lands or nothing does: on any error the
/// caller's `frames` are untouched.
pub fn apply_update(
    frames: &PlayerFrames,
    frame_number: FrameNumber,
    request: &FrameUpdateRequest,
) -> Result<PlayerFrames, AppError> {
    let current = frames.frame(frame_number).ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Frame, format!("frame {frame_number} not found"))
    })?;

    if request.is_empty() {
        debug!(frame_number, "empty frame update ignored");
        return Ok(frames.clone());
    }

    let merged = request.merge_into(current)?;
    match frames.with_frame(merged) {
        Ok(next) => {
            debug!(
                frame_number,
                first = %merged.first_roll,
                second = %merged.second_roll,
                bonus = %merged.bonus_roll,
                complete = is_complete(&merged),
                "frame updated"
            );
            Ok(next)
        }
        Err(e) => {
            warn!(frame_number, error = %e, "frame update rejected");
            Err(e.into())
        }
    }
}

fn symbols(frame: &Frame, slot: RollSlot) -> Vec<String> {
    legal_options(frame, slot)
        .into_iter()
        .map(|r| r.to_string())
        .collect()
}

/// Option lists a client should offer for `frame` in its current state.
pub fn roll_options(frame: &Frame) -> RollOptionsResponse {
    RollOptionsResponse {
        frame_number: frame.frame_number,
        complete: is_complete(frame),
        first_roll: symbols(frame, RollSlot::First),
        second_roll: symbols(frame, RollSlot::Second),
        bonus_roll: symbols(frame, RollSlot::Bonus),
    }
}

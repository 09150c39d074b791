//! Domain layer: pure bowling types, frame rules and scoring.

pub mod frames;
pub mod rolls_parsing;
pub mod rolls_serde;
pub mod rolls_types;
pub mod rules;
pub mod scoring;
pub mod validator;

#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_validator;

// Re-exports for ergonomics
pub use frames::{Frame, PlayerFrames};
pub use rolls_parsing::parse_optional_roll;
pub use rolls_types::{PinCount, Roll};
pub use rules::{FrameNumber, FRAMES_PER_GAME, MIN_PLAYERS};
pub use scoring::{
    format_frame, frame_scores, running_totals, score_card, score_lines, total_score, ScoreCard,
    ScoreLine,
};
pub use validator::{
    check_frame, is_complete, legal_bonus_roll_options, legal_first_roll_options, legal_options,
    legal_second_roll_options, RollSlot,
};

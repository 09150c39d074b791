//! Frame display strings and score totals.
//!
//! Each frame's contribution comes from its own rolls plus at most two
//! frames of lookahead, using each roll's standalone value.

use serde::{Deserialize, Serialize};

use crate::domain::frames::{Frame, PlayerFrames};
use crate::domain::rolls_parsing::EMPTY_SYMBOL;
use crate::domain::rolls_types::Roll;
use crate::domain::rules::{FrameNumber, FRAMES_PER_GAME, PINS_PER_RACK};

const CLEARED: u16 = PINS_PER_RACK as u16;

/// Display entry for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreLine {
    pub frame_number: FrameNumber,
    pub score_input: String,
}

/// Formatted frames plus the total for one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCard {
    pub frames: Vec<ScoreLine>,
    pub total_score: u16,
}

/// Render a frame's rolls the way a score sheet shows them, e.g. `"X"`,
/// `"7 /"`, `"X 7 2"`, or `"-"` before the first ball.
pub fn format_frame(first: Roll, second: Roll, bonus: Roll) -> String {
    let with_bonus = |head: String| {
        if bonus.is_set() {
            format!("{head} {bonus}")
        } else {
            head
        }
    };

    match (first, second) {
        (Roll::Empty, _) => EMPTY_SYMBOL.to_string(),
        (Roll::Strike, _) => [first, second, bonus]
            .iter()
            .filter(|r| r.is_set())
            .map(|r| r.symbol())
            .collect::<Vec<_>>()
            .join(" "),
        (_, Roll::Spare) => with_bonus(format!("{first} {second}")),
        (_, Roll::Empty) => first.to_string(),
        _ => with_bonus(format!("{first} {second}")),
    }
}

/// Contribution of the frame at `idx`, looking at most two frames ahead.
///
/// Missing lookahead rolls count 0. An open frame with only its first
/// ball contributes nothing until the second ball is in.
fn frame_score(frames: &[Frame], idx: usize) -> u16 {
    let frame = &frames[idx];
    let next = frames.get(idx + 1);

    match (frame.first_roll, frame.second_roll) {
        (Roll::Empty, _) => 0,
        (Roll::Strike, _) if frame.is_last() => {
            CLEARED + frame.second_roll.value() + frame.bonus_roll.value()
        }
        (Roll::Strike, _) => {
            let Some(next) = next else {
                return CLEARED;
            };
            // Back-to-back strikes before frame 10 borrow the first ball
            // of the frame after next; frame 10 supplies both of its own.
            let second_ball = if next.first_roll.is_strike() && !next.is_last() {
                frames.get(idx + 2).map_or(0, |f| f.first_roll.value())
            } else {
                next.second_roll.value()
            };
            CLEARED + next.first_roll.value() + second_ball
        }
        (_, Roll::Spare) if frame.is_last() => CLEARED + frame.bonus_roll.value(),
        (_, Roll::Spare) => CLEARED + next.map_or(0, |f| f.first_roll.value()),
        (_, Roll::Empty) => 0,
        (first, second) => {
            let fill = if frame.is_last() {
                frame.bonus_roll.value()
            } else {
                0
            };
            first.value() + second.value() + fill
        }
    }
}

/// Per-frame contributions, frame 1 first.
pub fn frame_scores(frames: &PlayerFrames) -> [u16; FRAMES_PER_GAME as usize] {
    let frames = frames.frames();
    let mut out = [0u16; FRAMES_PER_GAME as usize];
    for (idx, slot) in out.iter_mut().enumerate() {
        *slot = frame_score(frames, idx);
    }
    out
}

/// Cumulative score after each frame.
pub fn running_totals(frames: &PlayerFrames) -> [u16; FRAMES_PER_GAME as usize] {
    let mut acc = 0u16;
    frame_scores(frames).map(|s| {
        acc += s;
        acc
    })
}

pub fn total_score(frames: &PlayerFrames) -> u16 {
    frame_scores(frames).iter().sum()
}

pub fn score_lines(frames: &PlayerFrames) -> Vec<ScoreLine> {
    frames
        .frames()
        .iter()
        .map(|f| ScoreLine {
            frame_number: f.frame_number,
            score_input: format_frame(f.first_roll, f.second_roll, f.bonus_roll),
        })
        .collect()
}

pub fn score_card(frames: &PlayerFrames) -> ScoreCard {
    ScoreCard {
        frames: score_lines(frames),
        total_score: total_score(frames),
    }
}

//! Scoreboard service: score every player of a game from stored frame rows.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{is_complete, score_card, Frame, PlayerFrames, ScoreLine};
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::protocol::PlayerFramesRecord;

/// Badge for the top scorer(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Standing {
    /// Highest total and every player has finished frame 10.
    Winner,
    /// Highest total so far; the game is still going.
    Leading,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScoreboard {
    pub player: String,
    pub frames: Vec<ScoreLine>,
    pub total_score: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standing: Option<Standing>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scoreboard {
    pub players: Vec<PlayerScoreboard>,
    pub game_complete: bool,
    pub top_score: u16,
}

/// Turn one player's stored rows into a scoring-ready sheet.
///
/// Rows may arrive in any order; they are sorted by frame number first.
pub fn player_frames_from_record(record: &PlayerFramesRecord) -> Result<PlayerFrames, DomainError> {
    let mut rows: Vec<_> = record.frames.iter().collect();
    rows.sort_by_key(|r| r.frame_number);
    let frames = rows
        .into_iter()
        .map(Frame::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    PlayerFrames::new(frames)
}

/// Score a game given every player's stored frame rows.
pub fn build_scoreboard(records: &[PlayerFramesRecord]) -> Result<Scoreboard, AppError> {
    let mut sheets = Vec::with_capacity(records.len());
    for record in records {
        match player_frames_from_record(record) {
            Ok(frames) => sheets.push((record.player.as_str(), frames)),
            Err(e) => {
                warn!(player = %record.player, error = %e, "rejected frame records");
                return Err(e.into());
            }
        }
    }
    Ok(scoreboard_for(sheets.iter().map(|(name, frames)| (*name, frames))))
}

/// Score already-validated sheets, in the order given.
pub fn scoreboard_for<'a, I>(sheets: I) -> Scoreboard
where
    I: IntoIterator<Item = (&'a str, &'a PlayerFrames)>,
{
    let mut game_complete = true;
    let mut players: Vec<PlayerScoreboard> = sheets
        .into_iter()
        .map(|(name, frames)| {
            game_complete &= is_complete(frames.last());
            let card = score_card(frames);
            PlayerScoreboard {
                player: name.to_string(),
                frames: card.frames,
                total_score: card.total_score,
                standing: None,
            }
        })
        .collect();

    game_complete &= !players.is_empty();
    let top_score = players.iter().map(|p| p.total_score).max().unwrap_or(0);
    let badge = if game_complete {
        Standing::Winner
    } else {
        Standing::Leading
    };
    for p in players.iter_mut().filter(|p| p.total_score == top_score) {
        p.standing = Some(badge);
    }

    debug!(
        players = players.len(),
        top_score, game_complete, "scoreboard built"
    );

    Scoreboard {
        players,
        game_complete,
        top_score,
    }
}

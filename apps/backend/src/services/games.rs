//! Game sheet service: players, their frames, and roll recording.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::rules::{frame_numbers, FrameNumber, MIN_PLAYERS};
use crate::domain::{is_complete, Frame, PlayerFrames};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::protocol::{FrameRecord, FrameUpdateRequest, PlayerFramesRecord};
use crate::services::frames::apply_update;
use crate::services::scoreboard::{scoreboard_for, Scoreboard};

pub type PlayerId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamePlayer {
    pub id: PlayerId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSheet {
    pub player: GamePlayer,
    pub frames: PlayerFrames,
}

/// One game in progress: every player with their ten frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSheet {
    players: Vec<PlayerSheet>,
}

impl GameSheet {
    /// Start a game: every player gets ten empty frames.
    pub fn start(players: Vec<GamePlayer>) -> Result<Self, AppError> {
        if players.len() < MIN_PLAYERS {
            return Err(DomainError::validation(
                ValidationKind::NotEnoughPlayers,
                format!(
                    "a game needs at least {MIN_PLAYERS} players, got {}",
                    players.len()
                ),
            )
            .into());
        }

        let mut seen = HashSet::new();
        for p in &players {
            if p.name.trim().is_empty() {
                return Err(DomainError::validation(
                    ValidationKind::InvalidPlayerName,
                    format!("player {} has a blank name", p.id),
                )
                .into());
            }
            if !seen.insert(p.id) {
                return Err(DomainError::validation(
                    ValidationKind::DuplicatePlayer,
                    format!("player {} listed more than once", p.id),
                )
                .into());
            }
        }

        info!(players = players.len(), "game started");
        Ok(Self {
            players: players
                .into_iter()
                .map(|player| PlayerSheet {
                    player,
                    frames: PlayerFrames::fresh(),
                })
                .collect(),
        })
    }

    pub fn players(&self) -> &[PlayerSheet] {
        &self.players
    }

    pub fn player(&self, player_id: PlayerId) -> Result<&PlayerSheet, AppError> {
        self.players
            .iter()
            .find(|s| s.player.id == player_id)
            .ok_or_else(|| player_not_found(player_id))
    }

    /// Record rolls for one player's frame. On error the sheet is unchanged.
    pub fn record(
        &mut self,
        player_id: PlayerId,
        frame_number: FrameNumber,
        request: &FrameUpdateRequest,
    ) -> Result<&Frame, AppError> {
        let sheet = self
            .players
            .iter_mut()
            .find(|s| s.player.id == player_id)
            .ok_or_else(|| player_not_found(player_id))?;

        sheet.frames = apply_update(&sheet.frames, frame_number, request)?;
        debug!(player_id, frame_number, "rolls recorded");

        sheet
            .frames
            .frame(frame_number)
            .ok_or_else(|| AppError::internal(format!("frame {frame_number} vanished")))
    }

    /// Lowest frame some player has not finished; `None` once the game is over.
    pub fn current_frame(&self) -> Option<FrameNumber> {
        frame_numbers().find(|&n| {
            self.players
                .iter()
                .any(|s| s.frames.frame(n).is_some_and(|f| !is_complete(f)))
        })
    }

    pub fn is_finished(&self) -> bool {
        self.players.iter().all(|s| is_complete(s.frames.last()))
    }

    pub fn scoreboard(&self) -> Scoreboard {
        scoreboard_for(
            self.players
                .iter()
                .map(|s| (s.player.name.as_str(), &s.frames)),
        )
    }

    /// Frame rows as the owning store would persist them.
    pub fn records(&self) -> Vec<PlayerFramesRecord> {
        self.players
            .iter()
            .map(|s| PlayerFramesRecord {
                player: s.player.name.clone(),
                frames: s.frames.frames().iter().map(FrameRecord::from).collect(),
            })
            .collect()
    }
}

fn player_not_found(player_id: PlayerId) -> AppError {
    DomainError::not_found(
        NotFoundKind::Player,
        format!("player {player_id} is not in this game"),
    )
    .into()
}

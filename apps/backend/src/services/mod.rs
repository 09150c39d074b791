pub mod frames;
pub mod games;
pub mod scoreboard;

pub use frames::{apply_update, roll_options};
pub use games::{GamePlayer, GameSheet, PlayerId, PlayerSheet};
pub use scoreboard::{build_scoreboard, scoreboard_for, PlayerScoreboard, Scoreboard, Standing};

#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod error;
pub mod errors;
pub mod protocol;
pub mod services;


// Re-exports for public API
pub use domain::{Frame, PlayerFrames, Roll, ScoreCard, ScoreLine};
pub use error::{AppError, ProblemDetails};
pub use errors::{DomainError, ErrorCode};
pub use services::{GamePlayer, GameSheet, Scoreboard};

// Prelude for test convenience
pub mod prelude {
    pub use super::domain::*;
    pub use super::error::*;
    pub use super::errors::*;
    pub use super::protocol::*;
    pub use super::services::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}

//! Scorekeeper test support utilities
//!
//! Shared, crate-agnostic helpers for integration tests: currently the
//! unified logging initialization.

pub mod logging;

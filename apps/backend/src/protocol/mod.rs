//! Boundary records exchanged with the owning service.

pub mod frames;

pub use frames::{FrameRecord, FrameUpdateRequest, PlayerFramesRecord, RollOptionsResponse};

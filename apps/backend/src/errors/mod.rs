//! Error handling for the scorekeeper crate.

pub mod domain;
pub mod error_code;

pub use domain::{DomainError, NotFoundKind, ValidationKind};
pub use error_code::ErrorCode;

#[cfg(test)]
mod tests_error_mapping;

//! Domain-level error type used across the scoring core and services.
//!
//! This error type is transport- and storage-agnostic. Services return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation failures raised at the scoring boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Not exactly frames 1..=10, in order, once each.
    MalformedFrameSequence,
    /// A roll symbol outside `0`-`9`, `X`, `/`, or empty.
    IllegalRollValue,
    /// Rolls that cannot occur together in one frame.
    InconsistentRollState,
    NotEnoughPlayers,
    DuplicatePlayer,
    InvalidPlayerName,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Player,
    Frame,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation or bowling rule violation
    Validation(ValidationKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    pub fn malformed_sequence(detail: impl Into<String>) -> Self {
        Self::validation(ValidationKind::MalformedFrameSequence, detail)
    }
    pub fn illegal_roll(detail: impl Into<String>) -> Self {
        Self::validation(ValidationKind::IllegalRollValue, detail)
    }
    pub fn inconsistent(detail: impl Into<String>) -> Self {
        Self::validation(ValidationKind::InconsistentRollState, detail)
    }

    /// The validation kind, if this is a validation failure.
    pub fn validation_kind(&self) -> Option<&ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(kind),
            DomainError::NotFound(..) => None,
        }
    }
}

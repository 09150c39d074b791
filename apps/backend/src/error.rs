use serde::Serialize;
use thiserror::Error;

use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::errors::ErrorCode;

/// Structured failure handed back to whoever called into the services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub detail: String,
    pub code: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::BadRequest { code, .. } => *code,
            AppError::Internal { .. } => ErrorCode::Internal,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            AppError::Validation { detail, .. }
            | AppError::NotFound { detail, .. }
            | AppError::BadRequest { detail, .. }
            | AppError::Internal { detail }
            | AppError::Config { detail } => detail,
        }
    }

    pub fn invalid(code: ErrorCode, detail: String) -> Self {
        Self::Validation { code, detail }
    }

    pub fn not_found(code: ErrorCode, detail: String) -> Self {
        Self::NotFound { code, detail }
    }

    pub fn bad_request(code: ErrorCode, detail: String) -> Self {
        Self::BadRequest { code, detail }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    pub fn problem(&self) -> ProblemDetails {
        let code = self.code().as_str();
        ProblemDetails {
            type_: format!("urn:scorekeeper:error:{}", code.to_lowercase()),
            title: Self::humanize_code(code),
            detail: self.detail().to_string(),
            code: code.to_string(),
        }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(kind, detail) => {
                let code = match kind {
                    ValidationKind::MalformedFrameSequence => ErrorCode::MalformedFrameSequence,
                    ValidationKind::IllegalRollValue => ErrorCode::IllegalRollValue,
                    ValidationKind::InconsistentRollState => ErrorCode::InconsistentRollState,
                    ValidationKind::NotEnoughPlayers => ErrorCode::NotEnoughPlayers,
                    ValidationKind::DuplicatePlayer => ErrorCode::DuplicatePlayer,
                    ValidationKind::InvalidPlayerName => ErrorCode::InvalidPlayerName,
                    _ => ErrorCode::ValidationError,
                };
                AppError::invalid(code, detail)
            }
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::Player => ErrorCode::PlayerNotFound,
                    NotFoundKind::Frame => ErrorCode::FrameNotFound,
                    _ => ErrorCode::NotFound,
                };
                AppError::not_found(code, detail)
            }
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::bad_request(ErrorCode::InvalidInput, format!("invalid JSON: {e}"))
    }
}

// Unit tests for error mapping, from the domain layer out to ProblemDetails
use crate::domain::{Frame, PlayerFrames, Roll};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::{AppError, ErrorCode};

#[test]
fn roster_kinds_keep_their_codes() {
    let cases = [
        (ValidationKind::NotEnoughPlayers, ErrorCode::NotEnoughPlayers),
        (ValidationKind::DuplicatePlayer, ErrorCode::DuplicatePlayer),
        (ValidationKind::InvalidPlayerName, ErrorCode::InvalidPlayerName),
    ];
    for (kind, code) in cases {
        let app: AppError = DomainError::validation(kind, "roster").into();
        assert_eq!(app.code(), code);
        assert_eq!(app.detail(), "roster");
    }
}

#[test]
fn parse_failure_surfaces_as_illegal_roll() {
    let err = "10".parse::<Roll>().unwrap_err();
    assert_eq!(
        err.validation_kind(),
        Some(&ValidationKind::IllegalRollValue)
    );
    let app: AppError = err.into();
    assert_eq!(app.problem().code, "ILLEGAL_ROLL_VALUE");
}

#[test]
fn short_sheet_surfaces_as_malformed() {
    let frames = (1..=9).map(Frame::empty).collect();
    let app: AppError = PlayerFrames::new(frames).unwrap_err().into();
    assert_eq!(app.code(), ErrorCode::MalformedFrameSequence);
    assert_eq!(app.problem().title, "Malformed Frame Sequence");
}

#[test]
fn display_carries_the_detail() {
    let app: AppError = DomainError::inconsistent("frame 2: 7 then 8").into();
    assert_eq!(app.to_string(), "Validation error: frame 2: 7 then 8");

    let app = AppError::config("SCOREKEEPER_LOG_FORMAT must be set".into());
    assert_eq!(app.code(), ErrorCode::ConfigError);
    assert!(app.to_string().starts_with("Configuration error"));
}

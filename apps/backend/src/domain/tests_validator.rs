use crate::domain::rolls_types::Roll;
use crate::domain::test_frame_helpers::{frame, roll};
use crate::domain::validator::{
    check_frame, is_complete, legal_bonus_roll_options, legal_first_roll_options, legal_options,
    legal_second_roll_options, RollSlot,
};
use crate::errors::domain::ValidationKind;

fn symbols(rolls: &[Roll]) -> Vec<String> {
    rolls.iter().map(|r| r.to_string()).collect()
}

#[test]
fn early_frames_complete_on_strike_or_two_balls() {
    assert!(is_complete(&frame(3, "X", "", "")));
    assert!(is_complete(&frame(3, "4", "5", "")));
    assert!(is_complete(&frame(3, "4", "/", "")));
    assert!(!is_complete(&frame(3, "4", "", "")));
    assert!(!is_complete(&frame(3, "", "", "")));
}

#[test]
fn tenth_frame_open_completes_after_two_balls() {
    assert!(is_complete(&frame(10, "3", "4", "")));
    assert!(is_complete(&frame(10, "0", "0", "")));
    assert!(!is_complete(&frame(10, "3", "", "")));
}

#[test]
fn tenth_frame_strike_or_spare_needs_fill_balls() {
    assert!(!is_complete(&frame(10, "X", "", "")));
    assert!(!is_complete(&frame(10, "X", "7", "")));
    assert!(is_complete(&frame(10, "X", "7", "2")));
    assert!(is_complete(&frame(10, "X", "X", "X")));

    assert!(!is_complete(&frame(10, "6", "/", "")));
    assert!(is_complete(&frame(10, "6", "/", "8")));
}

#[test]
fn first_roll_options_exclude_spare() {
    let opts = legal_first_roll_options();
    assert_eq!(
        symbols(&opts),
        ["-", "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "X"]
    );
    assert_eq!(legal_options(&frame(1, "", "", ""), RollSlot::First), opts);
}

#[test]
fn second_roll_options_capped_by_first_ball() {
    let opts = legal_second_roll_options(&frame(2, "6", "", ""));
    assert_eq!(symbols(&opts), ["-", "0", "1", "2", "3", "/"]);

    // Over the rack: 6 then 5 is never offered
    assert!(!opts.contains(&roll("5")));

    let opts = legal_second_roll_options(&frame(2, "9", "", ""));
    assert_eq!(symbols(&opts), ["-", "0", "/"]);

    let opts = legal_second_roll_options(&frame(2, "0", "", ""));
    assert_eq!(opts.len(), 12);
}

#[test]
fn no_second_roll_after_early_strike_or_before_first_ball() {
    assert!(legal_second_roll_options(&frame(5, "X", "", "")).is_empty());
    assert!(legal_second_roll_options(&frame(5, "", "", "")).is_empty());
    assert!(legal_second_roll_options(&frame(10, "", "", "")).is_empty());
}

#[test]
fn tenth_frame_second_roll_after_strike_is_full_range() {
    let opts = legal_second_roll_options(&frame(10, "X", "", ""));
    assert_eq!(opts, Roll::alphabet());
}

#[test]
fn tenth_frame_second_roll_after_pins_keeps_sum_cap() {
    let opts = legal_second_roll_options(&frame(10, "6", "", ""));
    assert_eq!(symbols(&opts), ["-", "0", "1", "2", "3", "X", "/"]);
}

#[test]
fn bonus_roll_only_after_tenth_frame_strike_or_spare() {
    assert!(legal_bonus_roll_options(&frame(9, "5", "/", "")).is_empty());
    assert!(legal_bonus_roll_options(&frame(10, "5", "4", "")).is_empty());
    assert!(legal_bonus_roll_options(&frame(10, "X", "", "")).is_empty());

    assert_eq!(
        legal_bonus_roll_options(&frame(10, "X", "3", "")),
        Roll::alphabet()
    );
    assert_eq!(
        legal_bonus_roll_options(&frame(10, "5", "/", "")),
        Roll::alphabet()
    );
    assert_eq!(
        legal_options(&frame(10, "5", "/", ""), RollSlot::Bonus),
        Roll::alphabet()
    );
}

#[test]
fn check_frame_accepts_legal_frames() {
    for f in [
        frame(1, "", "", ""),
        frame(1, "X", "", ""),
        frame(4, "3", "6", ""),
        frame(4, "3", "/", ""),
        frame(10, "X", "X", "X"),
        frame(10, "X", "7", "2"),
        frame(10, "8", "/", "X"),
        frame(10, "8", "1", ""),
    ] {
        assert!(check_frame(&f).is_ok(), "{f:?} should be legal");
    }
}

#[test]
fn check_frame_rejects_inconsistent_frames() {
    for f in [
        frame(1, "", "5", ""),
        frame(1, "X", "3", ""),
        frame(1, "6", "5", ""),
        frame(1, "5", "5", ""),
        frame(1, "5", "X", ""),
        frame(2, "5", "/", "3"),
        frame(10, "5", "4", "3"),
        frame(10, "X", "", "3"),
        frame(10, "", "", "X"),
        frame(10, "7", "3", ""),
    ] {
        let err = check_frame(&f).unwrap_err();
        assert_eq!(
            err.validation_kind(),
            Some(&ValidationKind::InconsistentRollState),
            "{f:?}"
        );
    }

    let spare_first = crate::domain::frames::Frame::new(3, Roll::Spare, Roll::Empty, Roll::Empty);
    assert!(check_frame(&spare_first).is_err());
}

#[test]
fn check_frame_rejects_out_of_range_numbers() {
    for n in [0u8, 11, 200] {
        let err = check_frame(&frame(n, "", "", "")).unwrap_err();
        assert_eq!(
            err.validation_kind(),
            Some(&ValidationKind::MalformedFrameSequence)
        );
    }
}

/// Property-based tests for score computation and frame legality
use proptest::prelude::*;

use crate::domain::frames::{Frame, PlayerFrames};
use crate::domain::rules::FRAMES_PER_GAME;
use crate::domain::scoring::{format_frame, frame_scores, running_totals, total_score};
use crate::domain::validator::{check_frame, is_complete};
use crate::domain::{test_gens, test_prelude};

/// Keep `base` up to and including `keep_through` (0-based), then take the
/// rest from `tail`.
fn splice(base: &PlayerFrames, tail: &PlayerFrames, keep_through: usize) -> PlayerFrames {
    let frames: Vec<Frame> = base.frames()[..=keep_through]
        .iter()
        .chain(&tail.frames()[keep_through + 1..])
        .copied()
        .collect();
    PlayerFrames::new(frames).expect("spliced frames stay legal")
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: scoring is a pure function of its input.
    #[test]
    fn prop_total_is_deterministic(pf in test_gens::player_frames()) {
        let before = pf.clone();
        prop_assert_eq!(total_score(&pf), total_score(&pf));
        prop_assert_eq!(&pf, &before);
    }

    /// Property: total equals the sum of contributions and the last running total.
    #[test]
    fn prop_total_matches_parts(pf in test_gens::player_frames()) {
        let parts: u16 = frame_scores(&pf).iter().sum();
        prop_assert_eq!(total_score(&pf), parts);
        prop_assert_eq!(running_totals(&pf)[usize::from(FRAMES_PER_GAME) - 1], parts);
    }

    /// Property: no frame is worth more than 30 and no game more than 300.
    #[test]
    fn prop_scores_bounded(pf in test_gens::player_frames()) {
        for s in frame_scores(&pf) {
            prop_assert!(s <= 30, "frame contribution {} above 30", s);
        }
        prop_assert!(total_score(&pf) <= 300);
    }

    /// Property: frames after the lookahead window never change a frame's
    /// contribution (two frames for a strike, one for a spare, none otherwise).
    #[test]
    fn prop_lookahead_window(
        base in test_gens::complete_game(),
        tail in test_gens::complete_game(),
    ) {
        let base_scores = frame_scores(&base);
        for idx in 0..usize::from(FRAMES_PER_GAME) {
            let f = &base.frames()[idx];
            let window = if f.is_last() {
                0
            } else if f.first_roll.is_strike() {
                2
            } else if f.second_roll.is_spare() {
                1
            } else {
                0
            };
            let keep = (idx + window).min(usize::from(FRAMES_PER_GAME) - 1);
            let spliced = splice(&base, &tail, keep);
            prop_assert_eq!(
                frame_scores(&spliced)[idx],
                base_scores[idx],
                "frame {} changed beyond its window",
                idx + 1
            );
        }
    }

    /// Property: generated complete frames are complete and shown with rolls.
    #[test]
    fn prop_complete_frames_render(pf in test_gens::complete_game()) {
        for f in pf.frames() {
            prop_assert!(is_complete(f), "{:?} should be complete", f);
            prop_assert_ne!(format_frame(f.first_roll, f.second_roll, f.bonus_roll), "-");
        }
    }

    /// Property: open frames 1-9 never hold more than nine numeric pins.
    #[test]
    fn prop_open_frames_stay_in_rack(f in (1u8..=9).prop_flat_map(test_gens::frame)) {
        prop_assert!(check_frame(&f).is_ok());
        if let (Some(a), Some(b)) = (pins(f.first_roll), pins(f.second_roll)) {
            prop_assert!(a + b <= 9, "{:?}", f);
        }
    }
}

fn pins(r: crate::domain::rolls_types::Roll) -> Option<u8> {
    match r {
        crate::domain::rolls_types::Roll::Pins(p) => Some(p.get()),
        _ => None,
    }
}

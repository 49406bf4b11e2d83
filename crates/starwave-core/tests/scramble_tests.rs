// Host-side tests for the nav label scramble state machine.

use rand::rngs::StdRng;
use rand::SeedableRng;
use starwave_core::constants::{DEFAULT_NAV_LABELS, SCRAMBLE_ALPHABET, SCRAMBLE_STEPS};
use starwave_core::{scramble_frame, NavLabels, ScrambleStep};

fn labels() -> NavLabels {
    NavLabels::new(DEFAULT_NAV_LABELS)
}

#[test]
fn labels_start_canonical() {
    let nav = labels();
    assert_eq!(nav.len(), 6);
    for (i, l) in DEFAULT_NAV_LABELS.iter().enumerate() {
        assert_eq!(nav.display(i), Some(*l));
        assert_eq!(nav.canonical(i), Some(*l));
    }
}

#[test]
fn leave_restores_canonical_after_any_step_count() {
    let mut rng = StdRng::seed_from_u64(1);
    for k in 0..=SCRAMBLE_STEPS {
        let mut nav = labels();
        let token = nav.enter(1).expect("item exists");
        for _ in 0..k {
            nav.advance(token, &mut rng);
        }
        assert_eq!(nav.leave(1), Some("Technology"));
        assert_eq!(nav.display(1), Some("Technology"), "after {k} steps");
        assert!(!nav.is_animating(1));
    }
}

#[test]
fn stale_token_cannot_write_after_leave() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut nav = labels();
    let token = nav.enter(0).expect("item exists");
    nav.advance(token, &mut rng);
    nav.leave(0);
    for _ in 0..SCRAMBLE_STEPS {
        assert_eq!(nav.advance(token, &mut rng), ScrambleStep::Stale);
    }
    assert_eq!(nav.display(0), Some("Solutions"));
}

#[test]
fn reentering_invalidates_previous_run() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut nav = labels();
    let first = nav.enter(2).expect("item exists");
    nav.advance(first, &mut rng);
    let second = nav.enter(2).expect("item exists");
    assert_eq!(nav.advance(first, &mut rng), ScrambleStep::Stale);
    assert!(matches!(nav.advance(second, &mut rng), ScrambleStep::Running(_)));
}

#[test]
fn animation_finishes_on_canonical_text() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut nav = labels();
    let token = nav.enter(4).expect("item exists");
    let mut last = ScrambleStep::Stale;
    for k in 1..=SCRAMBLE_STEPS {
        last = nav.advance(token, &mut rng);
        if k < SCRAMBLE_STEPS {
            assert!(matches!(last, ScrambleStep::Running(_)), "step {k}");
        }
    }
    assert_eq!(last, ScrambleStep::Done("Resources".to_string()));
    assert_eq!(nav.advance(token, &mut rng), ScrambleStep::Stale);
}

#[test]
fn items_animate_independently() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut nav = labels();
    let a = nav.enter(0).expect("item exists");
    let b = nav.enter(5).expect("item exists");
    nav.leave(0);
    assert_eq!(nav.advance(a, &mut rng), ScrambleStep::Stale);
    assert!(matches!(nav.advance(b, &mut rng), ScrambleStep::Running(_)));
    assert!(nav.is_animating(5));
}

#[test]
fn frame_reveals_prefix_and_scrambles_rest() {
    let mut rng = StdRng::seed_from_u64(6);
    // 10 chars at step 12 of 24: indices 0..5 revealed
    let text = scramble_frame("Technology", 12, 24, &mut rng);
    assert_eq!(text.chars().count(), 10);
    assert!(text.starts_with("Techn"));
    assert!(text.bytes().all(|b| SCRAMBLE_ALPHABET.contains(&b)));
    assert_eq!(scramble_frame("Technology", 24, 24, &mut rng), "Technology");
}

#[test]
fn out_of_range_items_are_ignored() {
    let mut nav = labels();
    assert!(nav.enter(99).is_none());
    assert!(nav.leave(99).is_none());
    assert!(nav.display(99).is_none());
}

#[test]
fn begin_shows_first_frame_immediately() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut nav = labels();
    let (token, first) = nav.begin(1, &mut rng).expect("item exists");
    let ScrambleStep::Running(text) = first else {
        panic!("expected a running frame, got {first:?}");
    };
    assert_eq!(nav.display(1), Some(text.as_str()));
    assert_eq!(text.chars().count(), "Technology".len());
    // Step 1 of 24 on a 10-char label reveals only the first character
    assert!(text.starts_with('T'));
    assert!(nav.is_animating(1));
    assert_eq!(token.index(), 1);

    // The remaining frames finish on the canonical label
    let mut last = ScrambleStep::Stale;
    for _ in 1..SCRAMBLE_STEPS {
        last = nav.advance(token, &mut rng);
    }
    assert_eq!(last, ScrambleStep::Done("Technology".to_string()));
    assert!(nav.begin(99, &mut rng).is_none());
}

// Host-side tests for the scroll cutoff fraction.

use starwave_core::{cut_css_value, cut_fraction, ScrollCutoff};

#[test]
fn top_of_page_is_zero() {
    let mut cut = ScrollCutoff::default();
    cut.update(0.0, 800.0);
    assert_eq!(cut.fraction(), 0.0);
    assert_eq!(cut.css_value(), "0%");
}

#[test]
fn two_viewports_down_is_full() {
    let mut cut = ScrollCutoff::default();
    assert!(cut.update(1600.0, 800.0));
    assert_eq!(cut.fraction(), 1.0);
    assert_eq!(cut.css_value(), "100%");
}

#[test]
fn fraction_is_always_clamped() {
    for scroll_y in [-500.0, -0.5, 0.0, 10.0, 799.0, 800.0, 1e9, f64::INFINITY, f64::NAN] {
        for vh in [0.0, 1.0, 800.0, f64::NAN] {
            let f = cut_fraction(scroll_y, vh);
            assert!((0.0..=1.0).contains(&f), "scroll {scroll_y} vh {vh} -> {f}");
        }
    }
}

#[test]
fn zero_viewport_height_is_treated_as_one() {
    assert_eq!(cut_fraction(0.5, 0.0), 0.5);
}

#[test]
fn halfway_is_fifty_percent() {
    let f = cut_fraction(400.0, 800.0);
    assert_eq!(f, 0.5);
    assert_eq!(cut_css_value(f), "50%");
}

#[test]
fn update_reports_changes_only() {
    let mut cut = ScrollCutoff::default();
    assert!(!cut.update(0.0, 800.0));
    assert!(cut.update(200.0, 800.0));
    assert!(!cut.update(200.0, 800.0));
    // Past one viewport the value saturates
    assert!(cut.update(900.0, 800.0));
    assert!(!cut.update(5000.0, 800.0));
}

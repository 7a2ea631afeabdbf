// Host-side tests for wheel smoothing and scroll-linked progress.

use card_core::scroll::{stagger_progress, Anchor, ElementBox, Scrub, SmoothScroll, TriggerRange};
use card_core::tween::Pose;
use proptest::prelude::*;

fn settle(s: &mut SmoothScroll) -> usize {
    let mut frames = 0;
    while s.tick(1.0 / 60.0).is_some() {
        frames += 1;
        assert!(frames < 1000, "smooth scroll never settled");
    }
    frames
}

#[test]
fn wheel_moves_target_and_eases_toward_it() {
    let mut s = SmoothScroll::new(0.0, 2000.0);
    s.scroll_by(300.0);
    assert!(s.is_animating());
    assert_eq!(s.target(), 300.0);

    let first = s.tick(0.1).unwrap_or_default();
    assert!(first > 0.0 && first < 300.0);
    let mut prev = first;
    while let Some(p) = s.tick(0.05) {
        assert!(p >= prev);
        prev = p;
    }
    assert_eq!(s.position(), 300.0);
    assert!(!s.is_animating());
}

#[test]
fn settles_after_the_configured_duration() {
    let mut s = SmoothScroll::new(0.0, 2000.0).with_duration(1.0);
    s.scroll_by(500.0);
    assert!(s.tick(0.5).is_some());
    assert!(s.is_animating());
    assert_eq!(s.tick(0.5), Some(500.0));
    assert!(!s.is_animating());
    assert_eq!(s.tick(0.5), None);
}

#[test]
fn target_is_clamped_to_the_scroll_range() {
    let mut s = SmoothScroll::new(100.0, 400.0);
    s.scroll_by(10_000.0);
    assert_eq!(s.target(), 400.0);
    settle(&mut s);
    assert_eq!(s.position(), 400.0);

    s.scroll_by(-10_000.0);
    assert_eq!(s.target(), 0.0);
}

#[test]
fn no_op_wheel_at_the_edge_does_not_animate() {
    let mut s = SmoothScroll::new(0.0, 400.0);
    s.scroll_by(-120.0);
    assert!(!s.is_animating());
    assert_eq!(s.tick(0.016), None);
}

#[test]
fn wheel_deltas_accumulate_on_the_target() {
    let mut s = SmoothScroll::new(0.0, 2000.0);
    s.scroll_by(100.0);
    s.tick(0.1);
    s.scroll_by(100.0);
    assert_eq!(s.target(), 200.0);
    settle(&mut s);
    assert_eq!(s.position(), 200.0);
}

#[test]
fn native_scroll_resyncs_only_when_idle() {
    let mut s = SmoothScroll::new(0.0, 2000.0);
    s.sync(750.0);
    assert_eq!(s.position(), 750.0);
    assert_eq!(s.target(), 750.0);

    s.scroll_by(100.0);
    s.sync(10.0);
    assert_eq!(s.target(), 850.0);
}

#[test]
fn zoom_and_horizontal_wheel_stay_with_the_browser() {
    // Plain vertical wheel, both directions.
    assert!(SmoothScroll::accepts_wheel(false, 0.0, 120.0));
    assert!(SmoothScroll::accepts_wheel(false, 0.0, -3.0));
    // Ctrl+wheel and trackpad pinch zoom the page.
    assert!(!SmoothScroll::accepts_wheel(true, 0.0, -3.0));
    assert!(!SmoothScroll::accepts_wheel(true, 0.0, 120.0));
    // Horizontal-only and mostly horizontal swipes.
    assert!(!SmoothScroll::accepts_wheel(false, 40.0, 0.0));
    assert!(!SmoothScroll::accepts_wheel(false, -80.0, 10.0));
    assert!(SmoothScroll::accepts_wheel(false, 10.0, -80.0));
    assert!(!SmoothScroll::accepts_wheel(false, 0.0, 0.0));
}

#[test]
fn shrinking_the_limit_clamps_positions() {
    let mut s = SmoothScroll::new(900.0, 1000.0);
    s.set_limit(500.0);
    assert_eq!(s.position(), 500.0);
    assert_eq!(s.limit(), 500.0);
    s.set_limit(-10.0);
    assert_eq!(s.limit(), 0.0);
}

#[test]
fn trigger_range_resolves_anchor_pairs() {
    let el = ElementBox {
        top: 1000.0,
        height: 600.0,
    };
    let vh = 800.0;

    let r = TriggerRange::resolve(el, vh, Anchor::TOP_TOP, Anchor::BOTTOM_TOP);
    assert_eq!((r.start, r.end), (1000.0, 1600.0));

    let r = TriggerRange::resolve(el, vh, Anchor::TOP_BOTTOM, Anchor::BOTTOM_TOP);
    assert_eq!((r.start, r.end), (200.0, 1600.0));

    let r = TriggerRange::resolve(el, vh, Anchor::top_at(70.0), Anchor::CENTER_CENTER);
    assert!((r.start - 440.0).abs() < 1e-9);
    assert!((r.end - 900.0).abs() < 1e-9);
}

#[test]
fn self_triggered_box_ignores_its_reveal_offset() {
    let natural = ElementBox {
        top: 1200.0,
        height: 80.0,
    };
    let vh = 800.0;
    let expected = TriggerRange::resolve(natural, vh, Anchor::top_at(90.0), Anchor::BOTTOM_TOP);

    // Measured halfway through a 40 px rise and at the start of it.
    for offset in [Pose::rise(40.0).translate_y_px, 20.0, 0.0] {
        let measured = ElementBox {
            top: natural.top + offset as f64,
            ..natural
        };
        let r = TriggerRange::resolve(
            measured.without_translate(offset as f64),
            vh,
            Anchor::top_at(90.0),
            Anchor::BOTTOM_TOP,
        );
        assert_eq!(r, expected);
    }
}

#[test]
fn trigger_progress_is_clamped() {
    let r = TriggerRange {
        start: 100.0,
        end: 300.0,
    };
    assert_eq!(r.progress(0.0), 0.0);
    assert_eq!(r.progress(200.0), 0.5);
    assert_eq!(r.progress(10_000.0), 1.0);
    assert!(!r.has_started(99.0));
    assert!(r.has_started(100.0));

    let empty = TriggerRange {
        start: 50.0,
        end: 50.0,
    };
    assert_eq!(empty.progress(49.0), 0.0);
    assert_eq!(empty.progress(50.0), 1.0);
}

#[test]
fn scrub_lags_then_catches_up() {
    let mut s = Scrub::default();
    s.set_target(1.0);
    let early = s.tick(0.1);
    assert!(early > 0.0 && early < 0.5);
    for _ in 0..60 {
        s.tick(1.0 / 60.0);
    }
    assert!(s.value() > 0.95);
    for _ in 0..600 {
        s.tick(1.0 / 60.0);
    }
    assert_eq!(s.value(), 1.0);
}

#[test]
fn scrub_snap_skips_the_lag() {
    let mut s = Scrub::default();
    assert_eq!(s.snap(1.0), 1.0);
    assert_eq!(s.value(), 1.0);
    // Stays put on the next frame.
    assert_eq!(s.tick(1.0 / 60.0), 1.0);
    assert_eq!(s.snap(7.0), 1.0);
    assert_eq!(s.snap(-1.0), 0.0);
}

#[test]
fn scrub_without_lag_jumps() {
    let mut s = Scrub::new(0.0);
    s.set_target(0.4);
    assert_eq!(s.tick(0.0), 0.4);
}

#[test]
fn stagger_orders_items() {
    let n = 10;
    let p = 0.5;
    let values: Vec<f32> = (0..n).map(|i| stagger_progress(p, i, n, 0.02, 0.5)).collect();
    for pair in values.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
    assert_eq!(stagger_progress(0.0, 0, n, 0.02, 0.5), 0.0);
    assert!(stagger_progress(1.0, n - 1, n, 0.02, 0.5) > 0.999);
    assert_eq!(stagger_progress(1.0, n, n, 0.02, 0.5), 0.0);
    assert_eq!(stagger_progress(1.0, 0, 0, 0.02, 0.5), 0.0);
}

proptest! {
    #[test]
    fn scrub_stays_in_unit_range(
        targets in proptest::collection::vec(-2.0f32..3.0, 1..40),
        dt in 0.0f32..0.5,
    ) {
        let mut s = Scrub::default();
        for t in targets {
            s.set_target(t);
            let v = s.tick(dt);
            prop_assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn smooth_position_stays_in_range(
        deltas in proptest::collection::vec(-3000.0f64..3000.0, 1..20),
        limit in 0.0f64..5000.0,
    ) {
        let mut s = SmoothScroll::new(0.0, limit);
        for d in deltas {
            s.scroll_by(d);
            for _ in 0..10 {
                s.tick(0.05);
                prop_assert!(s.position() >= -1e-6 && s.position() <= limit + 1e-6);
            }
        }
    }
}

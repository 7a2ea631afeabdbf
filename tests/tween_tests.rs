// Host-side tests for easing curves, entrance tweens and toggle reveals.

use card_core::content::{HERO_TITLE_CHAR, HERO_TITLE_STAGGER, REVEAL_RISE, WELCOME_STAR};
use card_core::ease::Ease;
use card_core::tween::{Entrance, Pose, Reveal, Tween};

const ALL: [Ease; 7] = [
    Ease::Linear,
    Ease::Power2In,
    Ease::Power2InOut,
    Ease::Power3Out,
    Ease::Power4InOut,
    Ease::BACK_OUT,
    Ease::ExpoSettle,
];

#[test]
fn easing_end_points_are_exact() {
    for ease in ALL {
        assert_eq!(ease.apply(1.0), 1.0, "{:?} at 1", ease);
        assert_eq!(ease.apply(5.0), 1.0, "{:?} past 1", ease);
    }
    for ease in ALL.iter().filter(|e| **e != Ease::ExpoSettle) {
        assert!(ease.apply(0.0).abs() < 1e-6, "{:?} at 0", ease);
    }
    // Starts with a tiny head start so the first frame already moves.
    assert!((Ease::ExpoSettle.apply(0.0) - 0.001).abs() < 1e-6);
}

#[test]
fn in_out_curves_pass_through_the_middle() {
    assert!((Ease::Power2InOut.apply(0.5) - 0.5).abs() < 1e-6);
    assert!((Ease::Power4InOut.apply(0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn monotonic_curves_never_decrease() {
    for ease in ALL.iter().filter(|e| !matches!(e, Ease::BackOut(_))) {
        let mut prev = ease.apply(0.0);
        for i in 1..=100 {
            let v = ease.apply(i as f32 / 100.0);
            assert!(v >= prev, "{:?} decreased at {}", ease, i);
            prev = v;
        }
    }
}

#[test]
fn back_out_overshoots_then_settles() {
    let peak = (1..100)
        .map(|i| Ease::BACK_OUT.apply(i as f32 / 100.0))
        .fold(0.0f32, f32::max);
    assert!(peak > 1.0);
}

#[test]
fn tween_respects_delay_and_duration() {
    let t = Tween::new(0.5, 1.0, Ease::Linear);
    assert_eq!(t.progress(0.0), 0.0);
    assert_eq!(t.progress(0.5), 0.0);
    assert!((t.progress(1.0) - 0.5).abs() < 1e-6);
    assert_eq!(t.progress(1.5), 1.0);
    assert_eq!(t.end(), 1.5);

    let instant = Tween::new(0.2, 0.0, Ease::Linear);
    assert_eq!(instant.progress(0.1), 0.0);
    assert_eq!(instant.progress(0.2), 1.0);
}

#[test]
fn stagger_shifts_each_item() {
    let third = HERO_TITLE_CHAR.nth(3, HERO_TITLE_STAGGER);
    assert!((third.tween.delay - (0.8 + 3.0 * 0.08)).abs() < 1e-6);
    assert_eq!(third.tween.duration, HERO_TITLE_CHAR.tween.duration);
    let later = REVEAL_RISE.after(0.3);
    assert!((later.tween.delay - 0.3).abs() < 1e-6);
}

#[test]
fn entrance_starts_at_its_offset_and_ends_at_rest() {
    let start = WELCOME_STAR.pose_at(0.0);
    assert!(start.scale.abs() < 1e-6);
    assert!(start.opacity.abs() < 1e-6);
    assert!((start.rotate_deg - 180.0).abs() < 1e-4);
    assert_eq!(WELCOME_STAR.pose_at(10.0), Pose::IDENTITY);
}

#[test]
fn pose_renders_css() {
    assert_eq!(
        Pose::IDENTITY.css_transform(),
        "translateY(0.00px) scale(1.0000)"
    );
    let p = Pose {
        rotate_deg: 90.0,
        rotate_x_deg: -45.0,
        ..Pose::rise(10.0)
    };
    assert_eq!(
        p.css_transform(),
        "translateY(10.00px) scale(1.0000) rotate(90.00deg) rotateX(-45.00deg)"
    );
}

#[test]
fn reveal_plays_forward_and_reverses() {
    let mut r = Reveal::new(REVEAL_RISE);
    assert_eq!(r.progress(), 0.0);
    r.tick(1.0);
    assert_eq!(r.progress(), 0.0, "inactive reveal must not advance");

    r.set_active(true);
    assert!(r.is_active());
    r.tick(0.4);
    let mid = r.progress();
    assert!(mid > 0.0 && mid < 1.0);
    r.tick(1.0);
    assert_eq!(r.progress(), 1.0);
    assert_eq!(r.pose(), Pose::IDENTITY);

    r.set_active(false);
    r.tick(0.4);
    let back = r.progress();
    assert!(back < 1.0 && back > 0.0);
    r.tick(1.0);
    assert_eq!(r.progress(), 0.0);
    assert_eq!(r.pose(), REVEAL_RISE.from);
}

#[test]
fn reversing_skips_the_delay() {
    let delayed = Entrance::new(Pose::rise(20.0), Tween::new(0.4, 0.8, Ease::Power3Out));
    let mut r = Reveal::new(delayed);
    r.set_active(true);
    r.tick(0.6);
    assert!(r.progress() > 0.0);
    r.set_active(false);
    r.tick(0.3);
    assert_eq!(r.progress(), 0.0);
}

#[test]
fn finished_reveal_rests_without_frames() {
    let mut r = Reveal::new(REVEAL_RISE.after(0.3));
    r.finish();
    assert!(r.is_active());
    assert_eq!(r.progress(), 1.0);
    assert_eq!(r.pose(), Pose::IDENTITY);
    r.tick(0.016);
    assert_eq!(r.pose(), Pose::IDENTITY);
}

#[test]
fn reveal_progress_stays_in_unit_range() {
    let mut r = Reveal::new(REVEAL_RISE);
    for i in 0..200 {
        r.set_active((i / 25) % 2 == 0);
        r.tick(0.033);
        let p = r.progress();
        assert!((0.0..=1.0).contains(&p));
    }
}

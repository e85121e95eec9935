/// Unit tests for gorilla dances.
///
/// `pose_at` is a pure function of elapsed time, so tests require no GPU or
/// window.
use gorillas::animation::*;
use gorillas::sprite::Arms;

// ── Victory dance ────────────────────────────────────────────────────────────

/// Four rounds of two quick poses.
#[test]
fn victory_lasts_eight_quick_steps() {
    let dance = Dance::victory();
    assert!((dance.duration() - 8.0 * QUICK_STEP).abs() < 1e-5);
}

#[test]
fn victory_alternates_starting_left() {
    let mut dance = Dance::victory();
    assert_eq!(dance.pose(), Some(Arms::LeftUp));
    dance.advance(0.31);
    assert_eq!(dance.pose(), Some(Arms::RightUp));
    dance.advance(0.3);
    assert_eq!(dance.pose(), Some(Arms::LeftUp));
}

/// A keyframe's end belongs to the next keyframe.
#[test]
fn keyframe_boundary_is_half_open() {
    let frames = [
        Keyframe { arms: Arms::LeftUp, duration: 1.0 },
        Keyframe { arms: Arms::RightUp, duration: 1.0 },
    ];
    assert_eq!(pose_at(&frames, 0.999), Some(Arms::LeftUp));
    assert_eq!(pose_at(&frames, 1.0), Some(Arms::RightUp));
    assert_eq!(pose_at(&frames, 2.0), None);
}

#[test]
fn dance_finishes_after_its_duration() {
    let mut dance = Dance::victory();
    dance.advance(2.3);
    assert!(!dance.is_finished());
    dance.advance(0.2);
    assert!(dance.is_finished());
    assert_eq!(dance.pose(), None);
    assert!((dance.elapsed() - 2.5).abs() < 1e-5);
}

// ── Intro dance ──────────────────────────────────────────────────────────────

#[test]
fn intro_opens_with_two_slow_waves() {
    let frames_at = |t: f32| {
        let mut d = Dance::intro();
        d.advance(t);
        d.pose()
    };
    assert_eq!(frames_at(0.0), Some(Arms::RightUp));
    assert_eq!(frames_at(1.9), Some(Arms::RightUp));
    assert_eq!(frames_at(2.5), Some(Arms::LeftUp));
    assert_eq!(frames_at(3.5), Some(Arms::RightUp));
    assert_eq!(frames_at(5.5), Some(Arms::LeftUp));
}

#[test]
fn intro_ends_with_four_quick_waves() {
    let frames_at = |t: f32| {
        let mut d = Dance::intro();
        d.advance(t);
        d.pose()
    };
    assert_eq!(frames_at(6.1), Some(Arms::LeftUp));
    assert_eq!(frames_at(6.4), Some(Arms::RightUp));
    assert_eq!(frames_at(8.3), Some(Arms::RightUp));
    assert_eq!(frames_at(8.5), None);
    assert!((Dance::intro().duration() - 8.4).abs() < 1e-4);
}

/// Stepping at 30 Hz reaches the end in the expected number of ticks.
#[test]
fn fixed_step_playback_ends_on_time() {
    let mut dance = Dance::victory();
    let mut ticks = 0;
    while !dance.is_finished() {
        dance.advance(1.0 / 30.0);
        ticks += 1;
        assert!(ticks < 1000);
    }
    assert!((72..=73).contains(&ticks), "took {ticks} ticks");
}

#[test]
fn empty_dance_is_already_over() {
    let dance = Dance::new(Vec::new());
    assert!(dance.is_finished());
    assert_eq!(dance.duration(), 0.0);
}

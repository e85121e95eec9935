//! Gorilla dances: timed sequences of arm poses.
//!
//! A `Dance` is a list of keyframes, each holding a pose for a fixed time.
//! `pose` is a pure lookup on elapsed time, so the schedule can be tested
//! without a window.

use crate::sprite::Arms;

/// Seconds each pose is held in the quick alternating dance.
pub const QUICK_STEP: f32 = 0.3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Keyframe {
    pub arms: Arms,
    pub duration: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dance {
    frames: Vec<Keyframe>,
    elapsed: f32,
}

impl Dance {
    pub fn new(frames: Vec<Keyframe>) -> Self {
        Self { frames, elapsed: 0.0 }
    }

    /// Four rounds of left arm up, right arm up. Played by the gorilla that
    /// scored a point.
    pub fn victory() -> Self {
        Self::new(alternate(Arms::LeftUp, 4, QUICK_STEP, QUICK_STEP))
    }

    /// Intro routine for the left gorilla: two slow waves, then four quick
    /// ones. The right gorilla mirrors it with `Arms::flip`.
    pub fn intro() -> Self {
        let mut frames = alternate(Arms::RightUp, 2, 2.0, 1.0);
        frames.extend(alternate(Arms::LeftUp, 4, QUICK_STEP, QUICK_STEP));
        Self::new(frames)
    }

    pub fn duration(&self) -> f32 {
        self.frames.iter().map(|f| f.duration).sum()
    }

    pub fn elapsed(&self) -> f32 { self.elapsed }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    pub fn is_finished(&self) -> bool {
        self.pose().is_none()
    }

    /// Pose at the current time, `None` once the last keyframe has ended.
    pub fn pose(&self) -> Option<Arms> {
        pose_at(&self.frames, self.elapsed)
    }
}

/// `rounds` pairs of `first` then its mirror.
fn alternate(first: Arms, rounds: usize, first_hold: f32, second_hold: f32) -> Vec<Keyframe> {
    (0..rounds)
        .flat_map(|_| {
            [
                Keyframe { arms: first, duration: first_hold },
                Keyframe { arms: first.flip(), duration: second_hold },
            ]
        })
        .collect()
}

/// Keyframe lookup. A keyframe covers `[start, start + duration)`.
pub fn pose_at(frames: &[Keyframe], elapsed: f32) -> Option<Arms> {
    let mut start = 0.0;
    for frame in frames {
        let end = start + frame.duration;
        if elapsed < end {
            return Some(frame.arms);
        }
        start = end;
    }
    None
}

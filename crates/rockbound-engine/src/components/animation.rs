//! Sprite animation clips.
//!
//! A clip is a run of cells in one atlas row played at a fixed frame time.
//! An `Animator` holds named clips and the playback cursor of the current one.

use std::collections::HashMap;
use std::ops::RangeInclusive;

/// A single animation sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    /// Frame cells as (col, row) pairs in the atlas.
    pub frames: Vec<(f32, f32)>,
    /// Seconds per frame.
    pub frame_duration: f32,
    /// Whether to loop when reaching the end.
    pub looping: bool,
}

impl AnimationClip {
    /// Looping clip over an inclusive column range of one sprite sheet row,
    /// `frame_ms` milliseconds per frame.
    pub fn strip(row: u32, cols: RangeInclusive<u32>, frame_ms: u32) -> Self {
        Self {
            frames: cols.map(|col| (col as f32, row as f32)).collect(),
            frame_duration: frame_ms as f32 / 1000.0,
            looping: true,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Playback state for an entity's named clips.
#[derive(Debug, Clone, Default)]
pub struct Animator {
    clips: HashMap<String, AnimationClip>,
    current: String,
    frame_index: usize,
    frame_timer: f32,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a clip under `name`. The first registered clip becomes current.
    pub fn add(&mut self, name: impl Into<String>, clip: AnimationClip) {
        let name = name.into();
        if self.current.is_empty() {
            self.current = name.clone();
        }
        self.clips.insert(name, clip);
    }

    pub fn with_clip(mut self, name: impl Into<String>, clip: AnimationClip) -> Self {
        self.add(name, clip);
        self
    }

    pub fn has_clip(&self, name: &str) -> bool {
        self.clips.contains_key(name)
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Switch to `name` and restart it. Unknown names are ignored.
    pub fn play(&mut self, name: &str) {
        if self.clips.contains_key(name) {
            self.current = name.to_string();
            self.frame_index = 0;
            self.frame_timer = 0.0;
        }
    }

    /// Switch to `name` unless it is already playing.
    pub fn play_if_different(&mut self, name: &str) {
        if self.current != name {
            self.play(name);
        }
    }

    /// Current frame (col, row) for sprite rendering.
    pub fn current_frame(&self) -> Option<(f32, f32)> {
        self.clips
            .get(&self.current)
            .and_then(|clip| clip.frames.get(self.frame_index).copied())
    }

    /// Advance by `dt` seconds. Returns true if the frame changed.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(clip) = self.clips.get(&self.current) else {
            return false;
        };
        if clip.frames.is_empty() || clip.frame_duration <= 0.0 {
            return false;
        }

        self.frame_timer += dt;
        let mut changed = false;
        while self.frame_timer >= clip.frame_duration {
            self.frame_timer -= clip.frame_duration;
            if self.frame_index + 1 < clip.frames.len() {
                self.frame_index += 1;
                changed = true;
            } else if clip.looping {
                self.frame_index = 0;
                changed = true;
            } else {
                self.frame_timer = 0.0;
                break;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_covers_inclusive_range() {
        let clip = AnimationClip::strip(2, 1..=9, 100);
        assert_eq!(clip.frame_count(), 9);
        assert_eq!(clip.frames[0], (1.0, 2.0));
        assert_eq!(clip.frames[8], (9.0, 2.0));
        assert!((clip.frame_duration - 0.1).abs() < 1e-6);
    }

    #[test]
    fn first_clip_is_current() {
        let anim = Animator::new()
            .with_clip("idle", AnimationClip::strip(0, 0..=1, 100))
            .with_clip("walk", AnimationClip::strip(1, 0..=3, 100));
        assert_eq!(anim.current(), "idle");
    }

    #[test]
    fn tick_advances_and_loops() {
        let mut anim = Animator::new().with_clip("walk", AnimationClip::strip(0, 0..=3, 100));
        anim.tick(0.15);
        assert_eq!(anim.frame_index(), 1);
        assert_eq!(anim.current_frame(), Some((1.0, 0.0)));

        anim.tick(0.3);
        assert_eq!(anim.frame_index(), 0);
    }

    #[test]
    fn play_if_different_keeps_cursor() {
        let mut anim = Animator::new()
            .with_clip("idle", AnimationClip::strip(0, 0..=3, 100))
            .with_clip("run", AnimationClip::strip(1, 0..=3, 100));
        anim.tick(0.15);
        anim.play_if_different("idle");
        assert_eq!(anim.frame_index(), 1);

        anim.play_if_different("run");
        assert_eq!(anim.current(), "run");
        assert_eq!(anim.frame_index(), 0);
    }

    #[test]
    fn unknown_clip_is_ignored() {
        let mut anim = Animator::new().with_clip("idle", AnimationClip::strip(0, 0..=1, 100));
        anim.play("fly");
        assert_eq!(anim.current(), "idle");
    }
}

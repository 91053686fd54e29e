use bevy::math::curve::EaseFunction;

use crate::anim::eased;
use crate::core::config::LoaderConfig;

/// Starting scale of the brand mark.
const LOGO_SCALE_FROM: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineStage {
    /// Brand mark fades and scales in.
    Entrance,
    /// Progress fill grows.
    Fill,
    Complete,
}

/// Fixed two-stage splash sequence. Progress is a function of playback time
/// only; asset state never feeds back into it.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    entrance_secs: f32,
    fill_secs: f32,
    elapsed: f32,
    done: bool,
}

impl Timeline {
    pub fn new(entrance_secs: f32, fill_secs: f32) -> Self {
        Self {
            entrance_secs: entrance_secs.max(0.0),
            fill_secs: fill_secs.max(0.0),
            elapsed: 0.0,
            done: false,
        }
    }

    pub fn from_config(cfg: &LoaderConfig) -> Self {
        Self::new(cfg.logo_entrance_secs, cfg.fill_secs)
    }

    pub fn total_secs(&self) -> f32 {
        self.entrance_secs + self.fill_secs
    }

    /// Advance playback. Returns true only on the tick that completes the sequence.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.done {
            return false;
        }
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.total_secs());
        if self.elapsed >= self.total_secs() {
            self.done = true;
            return true;
        }
        false
    }

    pub fn stage(&self) -> TimelineStage {
        if self.done {
            TimelineStage::Complete
        } else if self.elapsed < self.entrance_secs {
            TimelineStage::Entrance
        } else {
            TimelineStage::Fill
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Elapsed playback over the whole sequence, in `[0, 1]`, non-decreasing.
    pub fn fraction(&self) -> f32 {
        if self.done {
            return 1.0;
        }
        let total = self.total_secs();
        if total <= 0.0 {
            return 0.0;
        }
        (self.elapsed / total).clamp(0.0, 1.0)
    }

    fn entrance_progress(&self) -> f32 {
        if self.entrance_secs <= 0.0 {
            return 1.0;
        }
        eased(EaseFunction::QuadraticOut, self.elapsed / self.entrance_secs)
    }

    pub fn logo_alpha(&self) -> f32 {
        self.entrance_progress()
    }

    pub fn logo_scale(&self) -> f32 {
        LOGO_SCALE_FROM + (1.0 - LOGO_SCALE_FROM) * self.entrance_progress()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeline_runs_entrance_then_fill() {
        let mut tl = Timeline::from_config(&LoaderConfig::default());
        assert!((tl.total_secs() - 3.1).abs() < 1e-6);
        assert_eq!(tl.stage(), TimelineStage::Entrance);
        tl.advance(0.3);
        assert_eq!(tl.stage(), TimelineStage::Entrance);
        assert!(tl.logo_alpha() > 0.0 && tl.logo_alpha() < 1.0);
        tl.advance(0.4);
        assert_eq!(tl.stage(), TimelineStage::Fill);
        assert_eq!(tl.logo_alpha(), 1.0);
        assert_eq!(tl.logo_scale(), 1.0);
    }

    #[test]
    fn completes_exactly_once() {
        let mut tl = Timeline::new(0.5, 1.0);
        let mut completions = 0;
        for _ in 0..40 {
            if tl.advance(0.1) {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
        assert!(tl.is_done());
        assert_eq!(tl.fraction(), 1.0);
        assert_eq!(tl.stage(), TimelineStage::Complete);
    }

    #[test]
    fn fraction_tracks_elapsed_time_monotonically() {
        let mut tl = Timeline::new(0.6, 2.5);
        let mut last = tl.fraction();
        for _ in 0..31 {
            tl.advance(0.1);
            let f = tl.fraction();
            assert!(f >= last);
            last = f;
        }
        let mut half = Timeline::new(0.6, 2.5);
        half.advance(1.55);
        assert!((half.fraction() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn zero_length_timeline_completes_on_first_tick() {
        let mut tl = Timeline::new(0.0, 0.0);
        assert_eq!(tl.fraction(), 0.0);
        assert!(tl.advance(0.0));
        assert_eq!(tl.fraction(), 1.0);
    }
}

use bevy::math::curve::{Curve, EaseFunction};

/// Sample an easing curve at `t`, clamped to `[0, 1]`.
pub fn eased(ease: EaseFunction, t: f32) -> f32 {
    ease.sample_clamped(t.clamp(0.0, 1.0))
}

/// Scalar tween advanced by frame delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration: f32,
    pub elapsed: f32,
    pub ease: EaseFunction,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, ease: EaseFunction) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            ease,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
    }

    /// Linear completion in `[0, 1]`; zero-length tweens are complete immediately.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn value(&self) -> f32 {
        self.from + (self.to - self.from) * eased(self.ease, self.progress())
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_match_from_and_to() {
        let mut t = Tween::new(0.8, 1.0, 0.6, EaseFunction::QuadraticOut);
        assert!((t.value() - 0.8).abs() < 1e-6);
        t.advance(10.0);
        assert!(t.is_finished());
        assert!((t.value() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn quadratic_out_leads_linear() {
        let mut t = Tween::new(0.0, 1.0, 1.0, EaseFunction::QuadraticOut);
        t.advance(0.5);
        assert!(t.value() > 0.5, "ease-out should be ahead at midpoint: {}", t.value());
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let t = Tween::new(0.0, 1.0, 0.0, EaseFunction::QuadraticInOut);
        assert!(t.is_finished());
        assert_eq!(t.value(), 1.0);
    }

    #[test]
    fn negative_dt_does_not_rewind() {
        let mut t = Tween::new(0.0, 1.0, 1.0, EaseFunction::Linear);
        t.advance(0.4);
        t.advance(-1.0);
        assert!((t.progress() - 0.4).abs() < 1e-6);
    }
}

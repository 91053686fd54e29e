//! Readiness gate: a two-input join deciding when the splash may go.
//!
//! ```text
//! timeline_ready = floor_elapsed && (timeline_done || document_loaded)
//! ready          = assets_ready && timeline_ready
//! ```
//!
//! Inputs are latches; they may arrive in any order and repeated marks are no-ops.
//! Phases only move forward: `Waiting -> Ready -> Dismissing -> Dismissed`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    Waiting,
    Ready,
    Dismissing,
    Dismissed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadinessGate {
    assets_ready: bool,
    timeline_done: bool,
    floor_elapsed: bool,
    document_loaded: bool,
    phase: GatePhase,
    fade_out_secs: f32,
    fade_elapsed: f32,
}

impl ReadinessGate {
    pub fn new(fade_out_secs: f32) -> Self {
        Self {
            assets_ready: false,
            timeline_done: false,
            floor_elapsed: false,
            document_loaded: false,
            phase: GatePhase::Waiting,
            fade_out_secs: fade_out_secs.max(0.0),
            fade_elapsed: 0.0,
        }
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    pub fn assets_ready(&self) -> bool {
        self.assets_ready
    }

    pub fn timeline_ready(&self) -> bool {
        self.floor_elapsed && (self.timeline_done || self.document_loaded)
    }

    pub fn mark_assets_ready(&mut self) -> bool {
        self.assets_ready = true;
        self.check()
    }

    pub fn mark_timeline_done(&mut self) -> bool {
        self.timeline_done = true;
        self.check()
    }

    pub fn mark_floor_elapsed(&mut self) -> bool {
        self.floor_elapsed = true;
        self.check()
    }

    /// Host signal; latches once true.
    pub fn set_document_loaded(&mut self, loaded: bool) -> bool {
        self.document_loaded |= loaded;
        self.check()
    }

    /// `Waiting -> Ready` once both inputs hold. Returns true only for the caller that
    /// performs the transition; every other call is a no-op.
    pub fn check(&mut self) -> bool {
        if self.phase != GatePhase::Waiting || !(self.assets_ready && self.timeline_ready()) {
            return false;
        }
        self.phase = GatePhase::Ready;
        true
    }

    /// `Ready -> Dismissing`: start the fade-out.
    pub fn begin_dismiss(&mut self) -> bool {
        if self.phase != GatePhase::Ready {
            return false;
        }
        self.phase = GatePhase::Dismissing;
        self.fade_elapsed = 0.0;
        true
    }

    /// Advance the fade-out. Returns true exactly once, on `Dismissing -> Dismissed`.
    pub fn advance_fade(&mut self, dt: f32) -> bool {
        if self.phase != GatePhase::Dismissing {
            return false;
        }
        self.fade_elapsed = (self.fade_elapsed + dt.max(0.0)).min(self.fade_out_secs);
        if self.fade_elapsed >= self.fade_out_secs {
            self.phase = GatePhase::Dismissed;
            return true;
        }
        false
    }

    /// Opacity of the whole splash, 1 until dismissal starts.
    pub fn loader_opacity(&self) -> f32 {
        match self.phase {
            GatePhase::Waiting | GatePhase::Ready => 1.0,
            GatePhase::Dismissing if self.fade_out_secs > 0.0 => {
                1.0 - (self.fade_elapsed / self.fade_out_secs).clamp(0.0, 1.0)
            }
            GatePhase::Dismissing | GatePhase::Dismissed => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline_side(gate: &mut ReadinessGate) -> bool {
        let a = gate.mark_floor_elapsed();
        let b = gate.mark_timeline_done();
        a || b
    }

    #[test]
    fn assets_then_timeline() {
        let mut gate = ReadinessGate::new(0.5);
        assert!(!gate.mark_assets_ready());
        assert_eq!(gate.phase(), GatePhase::Waiting);
        assert!(timeline_side(&mut gate));
        assert_eq!(gate.phase(), GatePhase::Ready);
    }

    #[test]
    fn timeline_then_assets() {
        let mut gate = ReadinessGate::new(0.5);
        assert!(!timeline_side(&mut gate));
        assert_eq!(gate.phase(), GatePhase::Waiting);
        assert!(gate.mark_assets_ready());
        assert_eq!(gate.phase(), GatePhase::Ready);
    }

    #[test]
    fn only_first_observer_transitions() {
        let mut gate = ReadinessGate::new(0.5);
        gate.mark_floor_elapsed();
        gate.mark_timeline_done();
        // Both completion paths race to check after the last input lands.
        let first = gate.mark_assets_ready();
        let second = gate.check();
        let third = gate.mark_timeline_done();
        assert!(first);
        assert!(!second && !third);
    }

    #[test]
    fn check_is_side_effect_free_while_waiting() {
        let mut gate = ReadinessGate::new(0.5);
        gate.mark_timeline_done();
        let before = gate.clone();
        for _ in 0..5 {
            assert!(!gate.check());
        }
        assert_eq!(gate, before);
    }

    #[test]
    fn floor_gates_timeline_completion() {
        let mut gate = ReadinessGate::new(0.5);
        gate.mark_assets_ready();
        gate.mark_timeline_done();
        assert!(!gate.timeline_ready());
        assert_eq!(gate.phase(), GatePhase::Waiting);
        assert!(gate.mark_floor_elapsed());
    }

    #[test]
    fn floor_with_loaded_document_stands_in_for_timeline() {
        let mut gate = ReadinessGate::new(0.5);
        gate.mark_assets_ready();
        gate.mark_floor_elapsed();
        assert!(!gate.timeline_ready());
        assert!(gate.set_document_loaded(true));
        assert!(gate.timeline_ready());
    }

    #[test]
    fn floor_alone_never_dismisses_without_assets() {
        let mut gate = ReadinessGate::new(0.5);
        gate.mark_floor_elapsed();
        gate.set_document_loaded(true);
        gate.mark_timeline_done();
        assert_eq!(gate.phase(), GatePhase::Waiting);
    }

    #[test]
    fn document_signal_latches() {
        let mut gate = ReadinessGate::new(0.5);
        gate.set_document_loaded(true);
        gate.set_document_loaded(false);
        gate.mark_floor_elapsed();
        assert!(gate.timeline_ready());
    }

    #[test]
    fn fade_out_dismisses_exactly_once() {
        let mut gate = ReadinessGate::new(0.5);
        assert!(!gate.begin_dismiss());
        gate.mark_assets_ready();
        timeline_side(&mut gate);
        assert!(gate.begin_dismiss());
        assert!(!gate.begin_dismiss());
        assert_eq!(gate.loader_opacity(), 1.0);
        assert!(!gate.advance_fade(0.25));
        assert!((gate.loader_opacity() - 0.5).abs() < 1e-6);
        assert!(gate.advance_fade(0.25));
        assert_eq!(gate.phase(), GatePhase::Dismissed);
        assert!(!gate.advance_fade(1.0));
        assert_eq!(gate.loader_opacity(), 0.0);
    }

    #[test]
    fn zero_fade_dismisses_on_next_advance() {
        let mut gate = ReadinessGate::new(0.0);
        gate.mark_assets_ready();
        timeline_side(&mut gate);
        gate.begin_dismiss();
        assert!(gate.advance_fade(0.0));
    }
}

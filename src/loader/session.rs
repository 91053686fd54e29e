use std::time::Duration;

use bevy::prelude::*;

use super::gate::{GatePhase, ReadinessGate};
use super::manifest::AssetManifest;
use super::preload::{AssetSettled, MountId, Preloader};
use super::progress::DisplayProgress;
use super::timeline::Timeline;
use crate::core::config::LandingConfig;

/// All splash state for one mount. Inserted on mount, removed on unmount; nothing
/// outlives it except the events it has already written.
#[derive(Resource, Debug)]
pub struct LoaderSession {
    mount: MountId,
    preloader: Preloader,
    timeline: Timeline,
    floor: Timer,
    gate: ReadinessGate,
    progress: DisplayProgress,
}

impl LoaderSession {
    pub fn new(mount: MountId, cfg: &LandingConfig) -> Self {
        let loader = &cfg.loader;
        let mut gate = ReadinessGate::new(loader.fade_out_secs);
        let floor_secs = loader.min_display_secs.max(0.0);
        if floor_secs == 0.0 {
            gate.mark_floor_elapsed();
        }
        Self {
            mount,
            preloader: Preloader::new(
                AssetManifest::from_config(&cfg.manifest),
                loader.asset_timeout_secs,
            ),
            timeline: Timeline::from_config(loader),
            floor: Timer::new(
                Duration::try_from_secs_f32(floor_secs).unwrap_or(Duration::MAX),
                TimerMode::Once,
            ),
            gate,
            progress: DisplayProgress::default(),
        }
    }

    pub fn mount(&self) -> MountId {
        self.mount
    }

    pub fn preloader(&self) -> &Preloader {
        &self.preloader
    }

    pub fn preloader_mut(&mut self) -> &mut Preloader {
        &mut self.preloader
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn gate(&self) -> &ReadinessGate {
        &self.gate
    }

    pub fn progress(&self) -> DisplayProgress {
        self.progress
    }

    /// Fold one load completion in. Completions from another mount are dropped.
    pub fn on_asset_settled(&mut self, ev: &AssetSettled) -> bool {
        if ev.mount != self.mount {
            debug!(target: "preload", "dropping completion from stale mount {:?}", ev.mount);
            return false;
        }
        if !self.preloader.apply(ev.slot, ev.outcome) {
            return false;
        }
        let state = self.preloader.state();
        debug!(
            target: "preload",
            "{}/{} settled ({:?})",
            state.loaded_count(),
            state.total(),
            ev.slot
        );
        if state.all_done() {
            info!(
                target: "preload",
                "all {} slots settled ({} failed)",
                state.total(),
                state.failed_count()
            );
            if self.gate.mark_assets_ready() {
                info!(target: "gate", "ready (assets settled last)");
            }
        }
        self.recompute_progress();
        true
    }

    /// Advance timeline, floor and fade-out by `dt`. Returns true exactly once per
    /// session: on the tick the fade-out finishes.
    pub fn tick(&mut self, dt: f32, document_loaded: bool) -> bool {
        let dt = dt.max(0.0);
        let mut dismissed = self.gate.advance_fade(dt);

        if self.timeline.advance(dt) {
            debug!(target: "loader", "timeline complete after {:.2}s", self.timeline.total_secs());
            if self.gate.mark_timeline_done() {
                info!(target: "gate", "ready (timeline finished last)");
            }
        }
        let step = Duration::try_from_secs_f32(dt).unwrap_or(Duration::ZERO);
        if self.floor.tick(step).just_finished()
            && self.gate.mark_floor_elapsed()
        {
            info!(target: "gate", "ready (minimum display time elapsed)");
        }
        if self.gate.set_document_loaded(document_loaded) {
            info!(target: "gate", "ready (document load signal)");
        }

        if self.gate.phase() == GatePhase::Ready && self.gate.begin_dismiss() {
            info!(target: "gate", "fading out splash");
            dismissed |= self.gate.advance_fade(0.0);
        }
        if dismissed {
            info!(target: "gate", "splash dismissed");
        }
        self.recompute_progress();
        dismissed
    }

    fn recompute_progress(&mut self) {
        let state = self.preloader.state();
        self.progress = DisplayProgress::compute(
            state.loaded_count(),
            state.total(),
            self.timeline.fraction(),
        );
    }
}

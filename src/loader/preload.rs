use bevy::asset::{LoadState as AssetLoadState, UntypedHandle};
use bevy::prelude::*;

use super::manifest::{AssetManifest, ManifestSlot};

/// Identifies one loader lifetime. Events carrying a stale id are ignored, which is
/// how completions arriving after unmount are detached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MountId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetOutcome {
    Loaded,
    Failed,
}

/// Terminal callback for one manifest slot.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetSettled {
    pub mount: MountId,
    pub slot: ManifestSlot,
    pub outcome: AssetOutcome,
}

/// Preloaded brand faces by `manifest.fonts` index; `None` for faces that failed.
#[derive(Resource, Debug, Clone, Default)]
pub struct BrandFonts(pub Vec<Option<Handle<Font>>>);

/// Completion counters. Failures count exactly like successes; each slot counts once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadState {
    settled: Vec<Option<AssetOutcome>>,
    loaded_count: usize,
}

impl LoadState {
    pub fn new(total: usize) -> Self {
        Self {
            settled: vec![None; total],
            loaded_count: 0,
        }
    }

    /// Returns true if this call accounted for a previously pending slot.
    pub fn settle(&mut self, index: usize, outcome: AssetOutcome) -> bool {
        match self.settled.get_mut(index) {
            Some(slot @ None) => {
                *slot = Some(outcome);
                self.loaded_count += 1;
                true
            }
            _ => false,
        }
    }

    pub fn loaded_count(&self) -> usize {
        self.loaded_count
    }

    pub fn total(&self) -> usize {
        self.settled.len()
    }

    pub fn failed_count(&self) -> usize {
        self.settled
            .iter()
            .filter(|s| **s == Some(AssetOutcome::Failed))
            .count()
    }

    pub fn all_done(&self) -> bool {
        self.loaded_count >= self.total()
    }

    pub fn fraction(&self) -> f32 {
        if self.total() == 0 {
            1.0
        } else {
            self.loaded_count as f32 / self.total() as f32
        }
    }
}

/// Issues one load per manifest entry and turns terminal asset-server states into
/// [`AssetSettled`] events. Owns the [`LoadState`] those events are folded into.
#[derive(Debug)]
pub struct Preloader {
    manifest: AssetManifest,
    state: LoadState,
    images: Vec<UntypedHandle>,
    fonts: Vec<Handle<Font>>,
    /// Slots already reported (by polling or timeout), indexed like `state`.
    reported: Vec<bool>,
    requested: bool,
    elapsed: f32,
    timeout_secs: f32,
}

impl Preloader {
    pub fn new(manifest: AssetManifest, timeout_secs: f32) -> Self {
        let total = manifest.total();
        Self {
            manifest,
            state: LoadState::new(total),
            images: Vec::new(),
            fonts: Vec::new(),
            reported: vec![false; total],
            requested: false,
            elapsed: 0.0,
            timeout_secs: timeout_secs.max(0.0),
        }
    }

    pub fn manifest(&self) -> &AssetManifest {
        &self.manifest
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn font_handles(&self) -> &[Handle<Font>] {
        &self.fonts
    }

    /// Start every load. Handles are held until the loader unmounts.
    pub fn request(&mut self, asset_server: &AssetServer) {
        if self.requested {
            return;
        }
        self.images = self
            .manifest
            .images()
            .iter()
            .map(|path| asset_server.load::<Image>(path.clone()).untyped())
            .collect();
        self.fonts = self
            .manifest
            .fonts()
            .iter()
            .map(|path| asset_server.load::<Font>(path.clone()))
            .collect();
        self.requested = true;
        info!(
            target: "preload",
            "requested {} images + {} fonts ({} slots)",
            self.images.len(),
            self.fonts.len(),
            self.manifest.total()
        );
    }

    /// Fold one terminal callback into the counters.
    pub fn apply(&mut self, slot: ManifestSlot, outcome: AssetOutcome) -> bool {
        let Some(index) = self.manifest.index_of(slot) else {
            warn!(target: "preload", "ignoring completion for unknown slot {slot:?}");
            return false;
        };
        if let Some(r) = self.reported.get_mut(index) {
            *r = true;
        }
        let counted = self.state.settle(index, outcome);
        if counted && outcome == AssetOutcome::Failed {
            warn!(
                target: "preload",
                "asset '{}' failed to load; counting it as done",
                self.manifest.describe(slot)
            );
        }
        counted
    }

    /// Newly terminal slots according to the asset server.
    pub fn poll(&mut self, asset_server: &AssetServer) -> Vec<(ManifestSlot, AssetOutcome)> {
        let mut out = Vec::new();
        if !self.requested {
            return out;
        }
        for (i, handle) in self.images.iter().enumerate() {
            if self.reported[i] {
                continue;
            }
            if let Some(outcome) = terminal(asset_server.load_state(handle.id())) {
                self.reported[i] = true;
                out.push((ManifestSlot::Image(i), outcome));
            }
        }
        let font_index = self.images.len();
        if !self.reported[font_index] {
            let states: Vec<Option<AssetOutcome>> = self
                .fonts
                .iter()
                .map(|h| terminal(asset_server.load_state(h.id())))
                .collect();
            if states.iter().all(Option::is_some) {
                self.reported[font_index] = true;
                let outcome = if states.iter().all(|s| *s == Some(AssetOutcome::Loaded)) {
                    AssetOutcome::Loaded
                } else {
                    AssetOutcome::Failed
                };
                out.push((ManifestSlot::Fonts, outcome));
            }
        }
        out
    }

    /// Slots still unreported once the timeout has elapsed. Disabled when timeout is 0.
    pub fn expire(&mut self, dt: f32) -> Vec<ManifestSlot> {
        if self.timeout_secs <= 0.0 {
            return Vec::new();
        }
        self.elapsed += dt.max(0.0);
        if self.elapsed < self.timeout_secs {
            return Vec::new();
        }
        let slots: Vec<ManifestSlot> = self.manifest.slots().collect();
        let mut out = Vec::new();
        for (index, slot) in slots.into_iter().enumerate() {
            if !self.reported[index] {
                self.reported[index] = true;
                out.push(slot);
            }
        }
        out
    }
}

fn terminal(state: AssetLoadState) -> Option<AssetOutcome> {
    match state {
        AssetLoadState::Loaded => Some(AssetOutcome::Loaded),
        AssetLoadState::Failed(_) => Some(AssetOutcome::Failed),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(n: usize) -> AssetManifest {
        AssetManifest::new((0..n).map(|i| format!("img{i}.png")).collect(), vec!["f.ttf".into()])
    }

    #[test]
    fn all_done_only_after_every_slot() {
        let mut p = Preloader::new(manifest(10), 0.0);
        let slots: Vec<_> = p.manifest().slots().collect();
        assert_eq!(slots.len(), 11);
        for (i, slot) in slots.iter().enumerate() {
            assert!(!p.state().all_done(), "done early after {i} completions");
            let outcome = if i % 3 == 0 { AssetOutcome::Failed } else { AssetOutcome::Loaded };
            assert!(p.apply(*slot, outcome));
        }
        assert!(p.state().all_done());
        assert_eq!(p.state().loaded_count(), 11);
        assert_eq!(p.state().failed_count(), 4);
    }

    #[test]
    fn duplicate_completion_is_not_double_counted() {
        let mut p = Preloader::new(manifest(2), 0.0);
        assert!(p.apply(ManifestSlot::Image(0), AssetOutcome::Loaded));
        assert!(!p.apply(ManifestSlot::Image(0), AssetOutcome::Failed));
        assert!(!p.apply(ManifestSlot::Image(7), AssetOutcome::Loaded));
        assert_eq!(p.state().loaded_count(), 1);
        assert!(p.state().loaded_count() <= p.state().total());
    }

    #[test]
    fn failures_count_like_successes() {
        let mut all_failed = LoadState::new(3);
        let mut all_loaded = LoadState::new(3);
        for i in 0..3 {
            all_failed.settle(i, AssetOutcome::Failed);
            all_loaded.settle(i, AssetOutcome::Loaded);
        }
        assert_eq!(all_failed.loaded_count(), all_loaded.loaded_count());
        assert_eq!(all_failed.fraction(), 1.0);
        assert!(all_failed.all_done());
    }

    #[test]
    fn expire_reports_pending_slots_once() {
        let mut p = Preloader::new(manifest(2), 1.0);
        p.apply(ManifestSlot::Image(1), AssetOutcome::Loaded);
        assert!(p.expire(0.5).is_empty());
        let expired = p.expire(0.6);
        assert_eq!(expired, vec![ManifestSlot::Image(0), ManifestSlot::Fonts]);
        assert!(p.expire(5.0).is_empty());
    }

    #[test]
    fn expire_disabled_by_default() {
        let mut p = Preloader::new(manifest(1), 0.0);
        assert!(p.expire(1_000.0).is_empty());
    }
}

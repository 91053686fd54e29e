/// Share of the displayed percentage owned by asset loading.
pub const ASSET_WEIGHT: f32 = 70.0;
/// Cap on the timeline's share, in percentage points.
pub const TIMELINE_CAP: f32 = 30.0;

/// Integer percentage shown on the splash; the fill bar uses the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct DisplayProgress(pub u8);

impl DisplayProgress {
    /// Blend asset completion and timeline playback:
    /// `min(round(min(70 * loaded / total, 70) + min(timeline%, 30)), 100)`
    /// where `timeline%` is the timeline fraction in percentage points.
    /// Recomputed from scratch every call; no monotonicity is enforced here.
    pub fn compute(loaded: usize, total: usize, timeline_fraction: f32) -> Self {
        let asset_fraction = if total == 0 {
            1.0
        } else {
            loaded as f32 / total as f32
        };
        let assets = (asset_fraction * ASSET_WEIGHT).min(ASSET_WEIGHT);
        let timeline = (timeline_fraction.max(0.0) * 100.0).min(TIMELINE_CAP);
        Self((assets + timeline).round().clamp(0.0, 100.0) as u8)
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    pub fn label(self) -> String {
        format!("{}%", self.0)
    }
}

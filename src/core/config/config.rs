use anyhow::Context;
use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

/// Default config shipped with the binary; wasm builds have no filesystem to read it from.
pub const EMBEDDED_LANDING_RON: &str = include_str!("../../../assets/config/landing.ron");

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            title: "Cocktail Bar".into(),
            auto_close: 0.0,
        }
    }
}

/// Splash-screen timings (seconds).
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoaderConfig {
    /// Floor on how long the splash stays up; also the fallback trigger for the timeline side.
    pub min_display_secs: f32,
    /// Stage 1: brand mark fade/scale in.
    pub logo_entrance_secs: f32,
    /// Stage 2: progress fill.
    pub fill_secs: f32,
    pub fade_out_secs: f32,
    /// Settle still-pending assets as failed after this long. 0 disables.
    pub asset_timeout_secs: f32,
}
impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            min_display_secs: 2.0,
            logo_entrance_secs: 0.6,
            fill_secs: 2.5,
            fade_out_secs: 0.5,
            asset_timeout_secs: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ManifestConfig {
    pub images: Vec<String>,
    /// Index 0 is the display face, index 1 the body face.
    pub fonts: Vec<String>,
}
impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            images: [
                "images/noise.png",
                "images/logo.png",
                "images/hero-left-leaf.png",
                "images/hero-right-leaf.png",
                "images/cocktail-left-leaf.png",
                "images/cocktail-right-leaf.png",
                "images/abt1.png",
                "images/abt2.png",
                "images/under-img.jpg",
                "images/drink1.png",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            fonts: vec![
                "fonts/ModernNegra.ttf".into(),
                "fonts/MonaSans.ttf".into(),
            ],
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
    pub fade_in_secs: f32,
    pub section_fade_secs: f32,
    /// Fraction of the viewport height a section's top must cross before it fades in.
    pub trigger_ratio: f32,
}
impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            fade_in_secs: 0.5,
            section_fade_secs: 0.8,
            trigger_ratio: 0.8,
        }
    }
}

/// What happened while loading the config; logged once the app (and its logger) is up.
#[derive(Resource, Debug, Clone, Default)]
pub struct ConfigReport {
    pub used: Vec<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct LandingConfig {
    pub window: WindowConfig,
    pub loader: LoaderConfig,
    pub manifest: ManifestConfig,
    pub reveal: RevealConfig,
}

impl LandingConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        ron::from_str(&data).with_context(|| format!("parse RON {}", path.display()))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(format!("{e:#}"))),
        }
    }

    pub fn embedded() -> anyhow::Result<Self> {
        ron::from_str(EMBEDDED_LANDING_RON).context("parse embedded landing.ron")
    }

    /// Deep-merge RON files in order; later files override earlier keys.
    /// Returns the config, the paths that were applied and any per-file errors.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        if let Some((_, existing)) = bm.iter_mut().find(|(ek, _)| **ek == k) {
                            if let Some(val) = incoming.take() {
                                merge_value(existing, val);
                            }
                        }
                        if let Some(val) = incoming {
                            bm.insert(k, val);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(val) = merged else {
            return (Self::default(), used, errors);
        };
        match val.into_rust::<LandingConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (Self::default(), used, errors)
            }
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        let l = &self.loader;
        for (label, v) in [
            ("loader.min_display_secs", l.min_display_secs),
            ("loader.logo_entrance_secs", l.logo_entrance_secs),
            ("loader.fill_secs", l.fill_secs),
            ("loader.fade_out_secs", l.fade_out_secs),
            ("loader.asset_timeout_secs", l.asset_timeout_secs),
        ] {
            if !v.is_finite() {
                w.push(format!("{label} {v} is not a finite number of seconds"));
            } else if v < 0.0 {
                w.push(format!("{label} {v} negative -> treated as 0"));
            }
        }
        let timeline = l.logo_entrance_secs.max(0.0) + l.fill_secs.max(0.0);
        if l.min_display_secs > timeline {
            w.push(format!(
                "loader.min_display_secs {} longer than the whole timeline ({timeline}s); splash holds on a full bar",
                l.min_display_secs
            ));
        }
        if l.asset_timeout_secs > 0.0 && l.asset_timeout_secs < l.min_display_secs {
            w.push(format!(
                "loader.asset_timeout_secs {} shorter than min_display_secs {}; slow assets will be abandoned early",
                l.asset_timeout_secs, l.min_display_secs
            ));
        }
        if self.manifest.images.is_empty() && self.manifest.fonts.is_empty() {
            w.push("manifest is empty; only the font slot gates the splash".into());
        }
        if self.manifest.fonts.len() > 2 {
            w.push(format!(
                "manifest.fonts has {} entries; only the first two are used by the page",
                self.manifest.fonts.len()
            ));
        }
        let r = &self.reveal;
        if r.fade_in_secs < 0.0 || r.section_fade_secs < 0.0 {
            w.push("reveal fade durations must be >= 0".into());
        }
        if !(0.0..=1.0).contains(&r.trigger_ratio) {
            w.push(format!(
                "reveal.trigger_ratio {} outside 0..1",
                r.trigger_ratio
            ));
        }
        w
    }
}

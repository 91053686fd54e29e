// This file is part of Cocktail Landing.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use super::host::HostPlugin;
use super::state::AppState;
use crate::anim::FadePlugin;
use crate::core::config::{ConfigReport, LandingConfig};
use crate::debug::DebugPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::loader::LoaderPlugin;
use crate::page::PagePlugin;

/// Everything below `DefaultPlugins`: splash, host, page and tooling.
/// Falls back to the default `LandingConfig` when none was inserted beforehand.
pub struct LandingPlugin;

impl Plugin for LandingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LandingConfig>()
            .init_state::<AppState>()
            .add_systems(Startup, (spawn_camera, report_config))
            .add_plugins((
                FadePlugin,
                LoaderPlugin,
                HostPlugin,
                PagePlugin,
                AutoClosePlugin,
                DebugPlugin,
            ));
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn report_config(report: Option<Res<ConfigReport>>) {
    let Some(report) = report else { return; };
    for path in &report.used {
        info!(target: "config", "loaded {path}");
    }
    for e in &report.errors {
        warn!(target: "config", "{e}");
    }
    for w in &report.warnings {
        warn!(target: "config", "validation: {w}");
    }
}

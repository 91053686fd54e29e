//! Host side of the splash: owns the loading flag (as `AppState`), scroll
//! suppression and the main-content reveal.
use bevy::math::curve::EaseFunction;
use bevy::prelude::*;

use super::state::AppState;
use crate::anim::{FadeFinished, FadeTo};
use crate::core::components::MainContent;
use crate::core::config::LandingConfig;
use crate::core::system::system_order::LoaderAdvanceSet;
#[cfg(target_arch = "wasm32")]
use crate::core::system::system_order::LoaderCollectSet;
use crate::loader::LoadingComplete;
#[cfg(target_arch = "wasm32")]
use crate::loader::DocumentSignal;

/// Page scrolling is suppressed while locked.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollLock {
    pub locked: bool,
}

impl Default for ScrollLock {
    fn default() -> Self {
        Self { locked: true }
    }
}

pub struct HostPlugin;

impl Plugin for HostPlugin {
    fn build(&self, app: &mut App) {
        #[cfg(target_arch = "wasm32")]
        app.add_systems(Update, sync_document_signal.in_set(LoaderCollectSet));
        app.init_resource::<ScrollLock>()
            .add_systems(OnEnter(AppState::Loading), lock_scroll)
            .add_systems(OnEnter(AppState::Revealed), reveal_main_content)
            .add_systems(
                Update,
                (
                    on_loading_complete
                        .after(LoaderAdvanceSet)
                        .run_if(in_state(AppState::Loading)),
                    log_main_visible.run_if(in_state(AppState::Revealed)),
                ),
            );
    }
}

fn lock_scroll(mut lock: ResMut<ScrollLock>) {
    lock.locked = true;
}

/// `document.readyState` values are `"loading"`, `"interactive"` and `"complete"`.
pub fn document_complete(ready_state: &str) -> bool {
    ready_state == "complete"
}

/// Mirrors `document.readyState == "complete"`. Natively there is no document and
/// the signal stays false unless something else raises it.
#[cfg(target_arch = "wasm32")]
pub fn sync_document_signal(mut signal: ResMut<DocumentSignal>) {
    if signal.loaded {
        return;
    }
    let complete = web_sys::window()
        .and_then(|w| w.document())
        .is_some_and(|d| document_complete(&d.ready_state()));
    if complete {
        info!(target: "host", "document readyState complete");
        signal.loaded = true;
    }
}

/// `setLoading(false)`: flips the page to `Revealed` on the first completion only.
pub fn on_loading_complete(
    mut events: EventReader<LoadingComplete>,
    mut next: ResMut<NextState<AppState>>,
    mut requested: Local<bool>,
) {
    for ev in events.read() {
        if *requested {
            debug!(target: "host", "ignoring repeated completion from {:?}", ev.mount);
            continue;
        }
        *requested = true;
        info!(target: "host", "loading finished ({:?}); revealing page", ev.mount);
        next.set(AppState::Revealed);
    }
}

pub fn reveal_main_content(
    mut commands: Commands,
    cfg: Res<LandingConfig>,
    mut lock: ResMut<ScrollLock>,
    mut q_main: Query<(Entity, &mut Visibility), With<MainContent>>,
) {
    lock.locked = false;
    for (e, mut vis) in &mut q_main {
        *vis = Visibility::Inherited;
        commands.entity(e).insert(FadeTo::new(
            0.0,
            1.0,
            cfg.reveal.fade_in_secs,
            EaseFunction::QuadraticInOut,
        ));
    }
}

fn log_main_visible(
    mut events: EventReader<FadeFinished>,
    q_main: Query<(), With<MainContent>>,
) {
    for ev in events.read() {
        if q_main.contains(ev.group) {
            info!(target: "host", "main content visible");
        }
    }
}

//! Splash screen: asset preloading + scripted timeline joined by a readiness gate.
//!
//! Mount happens on `OnEnter(AppState::Loading)`, unmount on `OnExit`. While mounted
//! the loader emits a single [`LoadingComplete`] once the splash has faded out.

pub mod gate;
pub mod manifest;
pub mod preload;
pub mod progress;
pub mod session;
pub mod timeline;
pub mod ui;

use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::components::LoaderUiRoot;
use crate::core::config::LandingConfig;
use crate::core::system::system_order::{
    LoaderAdvanceSet, LoaderApplySet, LoaderCollectSet, PresentationSet,
};

pub use gate::{GatePhase, ReadinessGate};
pub use manifest::{AssetManifest, ManifestSlot};
pub use preload::{AssetOutcome, AssetSettled, BrandFonts, LoadState, MountId, Preloader};
pub use progress::DisplayProgress;
pub use session::LoaderSession;
pub use timeline::{Timeline, TimelineStage};

/// The host's `setLoading(false)`: written at most once per loader lifetime.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingComplete {
    pub mount: MountId,
}

/// "Document fully loaded" as reported by the host environment. Only consulted
/// as the secondary trigger for the minimum-display fallback.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentSignal {
    pub loaded: bool,
}

/// Monotonic mount counter; each mount gets a fresh [`MountId`].
#[derive(Resource, Debug, Default)]
pub struct LoaderMounts {
    next: u32,
}

pub struct LoaderPlugin;

impl Plugin for LoaderPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<AssetSettled>()
            .add_event::<LoadingComplete>()
            .init_resource::<DocumentSignal>()
            .init_resource::<LoaderMounts>()
            .init_resource::<BrandFonts>()
            .configure_sets(
                Update,
                (
                    LoaderCollectSet,
                    LoaderApplySet,
                    LoaderAdvanceSet,
                    PresentationSet,
                )
                    .chain(),
            )
            .add_systems(
                OnEnter(AppState::Loading),
                (mount_loader, ui::spawn_loader_ui).chain(),
            )
            .add_systems(OnExit(AppState::Loading), unmount_loader)
            .add_systems(
                Update,
                (
                    (
                        poll_asset_server.run_if(resource_exists::<AssetServer>),
                        expire_stalled_assets,
                    )
                        .in_set(LoaderCollectSet),
                    apply_settled_assets.in_set(LoaderApplySet),
                    advance_loader.in_set(LoaderAdvanceSet),
                    ui::update_loader_ui
                        .in_set(PresentationSet)
                        .before(crate::anim::fade::apply_fade_groups),
                )
                    .run_if(resource_exists::<LoaderSession>),
            );
    }
}

pub fn mount_loader(
    mut commands: Commands,
    cfg: Res<LandingConfig>,
    mut mounts: ResMut<LoaderMounts>,
    asset_server: Option<Res<AssetServer>>,
) {
    mounts.next += 1;
    let mount = MountId(mounts.next);
    let mut session = LoaderSession::new(mount, &cfg);
    if let Some(server) = asset_server {
        session.preloader_mut().request(&server);
    }
    info!(
        target: "loader",
        "mounted {:?}: {} slots, floor {:.1}s, timeline {:.1}s",
        mount,
        session.preloader().manifest().total(),
        cfg.loader.min_display_secs,
        session.timeline().total_secs()
    );
    commands.insert_resource(session);
}

/// Drop all splash state and UI. Completions still in flight carry the old mount
/// id and are discarded by whichever session (if any) sees them.
pub fn unmount_loader(
    mut commands: Commands,
    session: Option<Res<LoaderSession>>,
    roots: Query<Entity, With<LoaderUiRoot>>,
) {
    if let Some(session) = session {
        info!(
            target: "loader",
            "unmounting {:?} in phase {:?}",
            session.mount(),
            session.gate().phase()
        );
    }
    commands.remove_resource::<LoaderSession>();
    for e in &roots {
        commands.entity(e).despawn();
    }
}

pub fn poll_asset_server(
    asset_server: Res<AssetServer>,
    mut session: ResMut<LoaderSession>,
    mut brand_fonts: ResMut<BrandFonts>,
    mut settled: EventWriter<AssetSettled>,
) {
    let mount = session.mount();
    let preloader = session.preloader_mut();
    for (slot, outcome) in preloader.poll(&asset_server) {
        if slot == ManifestSlot::Fonts {
            brand_fonts.0 = preloader
                .font_handles()
                .iter()
                .map(|h| asset_server.is_loaded(h.id()).then(|| h.clone()))
                .collect();
        }
        settled.write(AssetSettled { mount, slot, outcome });
    }
}

pub fn expire_stalled_assets(
    time: Res<Time>,
    mut session: ResMut<LoaderSession>,
    mut settled: EventWriter<AssetSettled>,
) {
    let mount = session.mount();
    let preloader = session.preloader_mut();
    for slot in preloader.expire(time.delta_secs()) {
        warn!(
            target: "preload",
            "'{}' never completed; giving up on it",
            preloader.manifest().describe(slot)
        );
        settled.write(AssetSettled {
            mount,
            slot,
            outcome: AssetOutcome::Failed,
        });
    }
}

pub fn apply_settled_assets(
    mut events: EventReader<AssetSettled>,
    mut session: ResMut<LoaderSession>,
) {
    for ev in events.read() {
        session.on_asset_settled(ev);
    }
}

pub fn advance_loader(
    time: Res<Time>,
    signal: Res<DocumentSignal>,
    mut session: ResMut<LoaderSession>,
    mut complete: EventWriter<LoadingComplete>,
) {
    if session.tick(time.delta_secs(), signal.loaded) {
        complete.write(LoadingComplete {
            mount: session.mount(),
        });
    }
}

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use cocktail_landing::core::components::{LoaderUiRoot, MainContent};
use cocktail_landing::loader::{AssetOutcome, AssetSettled, MountId};
use cocktail_landing::{AppState, DocumentSignal, LandingConfig, LandingPlugin, LoaderSession, LoadingComplete, ScrollLock};

const STEP_MS: u64 = 50;

#[derive(Resource, Default)]
struct Completions(Vec<(MountId, f32)>);

fn record_completions(
    time: Res<Time>,
    mut events: EventReader<LoadingComplete>,
    mut seen: ResMut<Completions>,
) {
    for ev in events.read() {
        seen.0.push((ev.mount, time.elapsed_secs()));
    }
}

fn landing_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(STEP_MS)));
    app.insert_resource(LandingConfig::default());
    app.add_plugins(LandingPlugin);
    app.init_resource::<Completions>();
    app.add_systems(Last, record_completions);
    app
}

fn run_for(app: &mut App, secs: f32) {
    let frames = (secs * 1000.0 / STEP_MS as f32).round() as usize;
    for _ in 0..frames {
        app.update();
    }
}

fn elapsed(app: &App) -> f32 {
    app.world().resource::<Time>().elapsed_secs()
}

fn settle_everything(app: &mut App, outcome: AssetOutcome) -> MountId {
    let session = app.world().resource::<LoaderSession>();
    let mount = session.mount();
    let slots: Vec<_> = session.preloader().manifest().slots().collect();
    for slot in slots {
        app.world_mut().send_event(AssetSettled { mount, slot, outcome });
    }
    mount
}

fn state(app: &App) -> AppState {
    *app.world().resource::<State<AppState>>().get()
}

#[test]
fn loader_mounts_with_page_hidden_and_scroll_locked() {
    let mut app = landing_app();
    app.update();
    assert_eq!(state(&app), AppState::Loading);
    assert!(app.world().contains_resource::<LoaderSession>());
    assert!(app.world().resource::<ScrollLock>().locked);
    let mut q = app.world_mut().query_filtered::<&Visibility, With<MainContent>>();
    let vis: Vec<_> = q.iter(app.world()).copied().collect();
    assert_eq!(vis, vec![Visibility::Hidden]);
    let mut roots = app.world_mut().query_filtered::<Entity, With<LoaderUiRoot>>();
    assert_eq!(roots.iter(app.world()).count(), 1);
}

#[test]
fn slow_assets_hold_the_splash_until_they_settle() {
    let mut app = landing_app();
    app.update();
    run_for(&mut app, 5.0);
    assert_eq!(state(&app), AppState::Loading);
    assert!(app.world().resource::<Completions>().0.is_empty());

    let mount = settle_everything(&mut app, AssetOutcome::Loaded);
    let settled_at = elapsed(&app);
    run_for(&mut app, 1.5);

    let completions = &app.world().resource::<Completions>().0;
    assert_eq!(completions.len(), 1, "{completions:?}");
    let (m, at) = completions[0];
    assert_eq!(m, mount);
    // fade-out only
    assert!(at - settled_at < 0.8, "dismissed {:.2}s after settling", at - settled_at);
    assert_eq!(state(&app), AppState::Revealed);
}

#[test]
fn fast_assets_wait_for_the_timeline_and_dismiss_once() {
    let mut app = landing_app();
    app.update();
    settle_everything(&mut app, AssetOutcome::Failed);
    run_for(&mut app, 6.0);

    let completions = &app.world().resource::<Completions>().0;
    assert_eq!(completions.len(), 1, "{completions:?}");
    let at = completions[0].1;
    // 3.1s timeline + 0.5s fade-out
    assert!((3.5..3.9).contains(&at), "dismissed at {at:.2}s");

    assert_eq!(state(&app), AppState::Revealed);
    assert!(!app.world().contains_resource::<LoaderSession>());
    assert!(!app.world().resource::<ScrollLock>().locked);
    let mut roots = app.world_mut().query_filtered::<Entity, With<LoaderUiRoot>>();
    assert_eq!(roots.iter(app.world()).count(), 0);
    let mut q = app.world_mut().query_filtered::<&Visibility, With<MainContent>>();
    let vis: Vec<_> = q.iter(app.world()).copied().collect();
    assert_eq!(vis, vec![Visibility::Inherited]);
}

#[test]
fn loaded_document_lets_the_floor_end_the_splash_early() {
    let mut app = landing_app();
    app.world_mut().resource_mut::<DocumentSignal>().loaded = true;
    app.update();
    settle_everything(&mut app, AssetOutcome::Loaded);
    run_for(&mut app, 6.0);

    let completions = &app.world().resource::<Completions>().0;
    assert_eq!(completions.len(), 1, "{completions:?}");
    let at = completions[0].1;
    // 2.0s floor + 0.5s fade-out
    assert!((2.4..2.8).contains(&at), "dismissed at {at:.2}s");
}

#[test]
fn eleven_assets_at_100ms_then_timeline() {
    let mut app = landing_app();
    app.update();
    run_for(&mut app, 0.1);
    settle_everything(&mut app, AssetOutcome::Loaded);
    app.update();
    let early = app.world().resource::<LoaderSession>().progress().percent();
    // 70 from assets plus a few points of timeline
    assert!((70..=76).contains(&early), "progress {early}");

    run_for(&mut app, 2.5);
    let late = app.world().resource::<LoaderSession>().progress().percent();
    assert_eq!(late, 100);
    assert!(app.world().resource::<Completions>().0.is_empty());

    run_for(&mut app, 2.0);
    let completions = &app.world().resource::<Completions>().0;
    assert_eq!(completions.len(), 1, "{completions:?}");
    let at = completions[0].1;
    assert!((3.5..3.9).contains(&at), "dismissed at {at:.2}s");
}

#[test]
fn completions_after_unmount_are_ignored() {
    let mut app = landing_app();
    app.update();
    run_for(&mut app, 1.0);
    let mount = app.world().resource::<LoaderSession>().mount();
    let slots: Vec<_> = app
        .world()
        .resource::<LoaderSession>()
        .preloader()
        .manifest()
        .slots()
        .collect();

    // Host tears the splash down early.
    app.world_mut()
        .resource_mut::<NextState<AppState>>()
        .set(AppState::Revealed);
    app.update();
    assert!(!app.world().contains_resource::<LoaderSession>());

    for slot in slots {
        app.world_mut().send_event(AssetSettled {
            mount,
            slot,
            outcome: AssetOutcome::Loaded,
        });
    }
    run_for(&mut app, 5.0);
    assert!(app.world().resource::<Completions>().0.is_empty());
    assert_eq!(state(&app), AppState::Revealed);
}

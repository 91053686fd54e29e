//! Exits after `window.autoClose` seconds when > 0. Used for smoke runs of the splash.

use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::config::LandingConfig;

#[derive(Resource, Debug, Deref, DerefMut)]
pub struct AutoCloseTimer(pub Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_auto_close).add_systems(
            Update,
            tick_auto_close.run_if(resource_exists::<AutoCloseTimer>),
        );
    }
}

fn arm_auto_close(mut commands: Commands, cfg: Res<LandingConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(target: "host", seconds = secs, "auto-close armed");
        commands.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn tick_auto_close(
    mut commands: Commands,
    time: Res<Time>,
    state: Option<Res<State<AppState>>>,
    mut timer: ResMut<AutoCloseTimer>,
    mut exit: EventWriter<AppExit>,
) {
    if timer.tick(time.delta()).just_finished() {
        let phase = state.map(|s| *s.get());
        info!(target: "host", "auto-close elapsed in {phase:?}; exiting");
        exit.write(AppExit::Success);
        commands.remove_resource::<AutoCloseTimer>();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    #[derive(Resource, Default)]
    struct Exits(usize);

    fn count_exits(mut ev: EventReader<AppExit>, mut n: ResMut<Exits>) {
        n.0 += ev.read().count();
    }

    fn app(auto_close: f32) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)));
        let mut cfg = LandingConfig::default();
        cfg.window.auto_close = auto_close;
        app.insert_resource(cfg);
        app.init_resource::<Exits>();
        app.add_plugins(AutoClosePlugin);
        app.add_systems(Last, count_exits);
        app
    }

    #[test]
    fn disabled_by_default() {
        let mut app = app(0.0);
        for _ in 0..20 {
            app.update();
        }
        assert!(!app.world().contains_resource::<AutoCloseTimer>());
        assert_eq!(app.world().resource::<Exits>().0, 0);
    }

    #[test]
    fn exits_once_after_timeout() {
        let mut app = app(0.5);
        for _ in 0..20 {
            app.update();
        }
        assert_eq!(app.world().resource::<Exits>().0, 1);
        assert!(!app.world().contains_resource::<AutoCloseTimer>());
    }
}

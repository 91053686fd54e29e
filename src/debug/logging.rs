use bevy::prelude::*;

use crate::loader::LoaderSession;

#[derive(Resource, Debug)]
pub struct DebugLogState {
    pub log_interval: f32,
    pub time_accum: f32,
    pub frame_counter: u64,
}

impl Default for DebugLogState {
    fn default() -> Self {
        Self {
            log_interval: 0.5,
            time_accum: 0.0,
            frame_counter: 0,
        }
    }
}

pub fn loader_status_line(session: &LoaderSession) -> String {
    let state = session.preloader().state();
    format!(
        "LOADER {:?} phase={:?} stage={:?} assets={}/{} failed={} timeline={:.2} progress={}",
        session.mount(),
        session.gate().phase(),
        session.timeline().stage(),
        state.loaded_count(),
        state.total(),
        state.failed_count(),
        session.timeline().fraction(),
        session.progress().label(),
    )
}

pub fn loader_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugLogState>,
    session: Res<LoaderSession>,
) {
    state.frame_counter += 1;
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        info!(
            target: "loader",
            "frame={} t={:.3}s {}",
            state.frame_counter,
            time.elapsed_secs(),
            loader_status_line(&session)
        );
    }
}

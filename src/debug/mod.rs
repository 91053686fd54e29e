//! Debug module: periodic splash logging.
//! Systems are only registered when compiled with `--features debug`.

#[cfg(feature = "debug")]
mod logging;

#[cfg(feature = "debug")]
pub use logging::{loader_status_line, DebugLogState};

use bevy::prelude::*;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    #[cfg(feature = "debug")]
    fn build(&self, app: &mut App) {
        use crate::core::system::system_order::LoaderAdvanceSet;
        use crate::loader::LoaderSession;

        app.init_resource::<DebugLogState>().add_systems(
            Update,
            logging::loader_logging_system
                .after(LoaderAdvanceSet)
                .run_if(resource_exists::<LoaderSession>),
        );
    }

    #[cfg(not(feature = "debug"))]
    fn build(&self, _app: &mut App) {}
}

use bevy::prelude::*;

/// High-level page lifecycle.
/// Loading -> Revealed (one way; the splash never comes back)
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    /// Splash is mounted; page is hidden and scrolling is locked.
    #[default]
    Loading,
    /// Splash gone; page visible and interactive.
    Revealed,
}

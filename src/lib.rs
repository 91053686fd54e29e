pub mod anim;
pub mod app;
pub mod core;
pub mod debug;
pub mod interaction;
pub mod loader;
pub mod page;

// Curated re-exports
pub use app::host::{HostPlugin, ScrollLock};
pub use app::landing::LandingPlugin;
pub use app::state::AppState;
pub use core::config::{ConfigReport, LandingConfig};
pub use loader::{DocumentSignal, LoaderPlugin, LoaderSession, LoadingComplete};

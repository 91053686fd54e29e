pub mod config;

pub use config::{
    ConfigReport, LandingConfig, LoaderConfig, ManifestConfig, RevealConfig, WindowConfig,
};

use bevy::prelude::*;
use cocktail_landing::{ConfigReport, LandingConfig, LandingPlugin};

#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(name = "cocktail_landing", about = "Cocktail bar landing page with preloading splash")]
struct Cli {
    /// Config layers, later files override earlier ones.
    #[arg(long = "config", value_name = "PATH")]
    configs: Vec<std::path::PathBuf>,
    /// Exit after this many seconds (0 disables).
    #[arg(long)]
    auto_close: Option<f32>,
    /// Override the splash's minimum display time.
    #[arg(long)]
    min_display: Option<f32>,
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> (LandingConfig, ConfigReport) {
    let mut report = ConfigReport::default();
    let cfg = match LandingConfig::embedded() {
        Ok(cfg) => {
            report.used.push("embedded landing.ron".into());
            cfg
        }
        Err(e) => {
            report.errors.push(format!("{e:#}; using defaults"));
            LandingConfig::default()
        }
    };
    (cfg, report)
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> (LandingConfig, ConfigReport) {
    use clap::Parser;

    let cli = Cli::parse();
    let layers = if cli.configs.is_empty() {
        vec![
            std::path::PathBuf::from("assets/config/landing.ron"),
            std::path::PathBuf::from("assets/config/landing.local.ron"),
        ]
    } else {
        cli.configs
    };
    let (mut cfg, used, errors) = LandingConfig::load_layered(&layers);
    if let Some(secs) = cli.auto_close {
        cfg.window.auto_close = secs;
    }
    if let Some(secs) = cli.min_display {
        cfg.loader.min_display_secs = secs;
    }
    let report = ConfigReport {
        used,
        errors,
        warnings: Vec::new(),
    };
    (cfg, report)
}

fn main() -> anyhow::Result<()> {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
    }

    let (cfg, mut report) = load_config();
    report.warnings = cfg.validate();

    let window = Window {
        title: cfg.window.title.clone(),
        resolution: (cfg.window.width, cfg.window.height).into(),
        resizable: true,
        #[cfg(target_arch = "wasm32")]
        canvas: Some("#bevy".into()),
        #[cfg(target_arch = "wasm32")]
        fit_canvas_to_parent: true,
        ..default()
    };

    let exit = App::new()
        .insert_resource(cfg)
        .insert_resource(report)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        .add_plugins(LandingPlugin)
        .run();
    if let AppExit::Error(code) = exit {
        anyhow::bail!("app exited with code {code}");
    }
    Ok(())
}

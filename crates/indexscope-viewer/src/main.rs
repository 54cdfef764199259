mod app;
mod render;
mod trend;
mod ui;
mod util;

use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use tracing_subscriber::EnvFilter;

use crate::app::IndexScopeViewerPlugin;
use crate::util::config;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = config::parse_args()?;

    let mut cfg = config::load_or_default();
    cfg.apply_args(&args);
    if args.save_config {
        config::save(&cfg)?;
        tracing::info!("viewer config saved");
    }

    let exit = App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "IndexScope".into(),
                        ..default()
                    }),
                    ..default()
                })
                .disable::<bevy::log::LogPlugin>(),
        )
        .add_plugins(EguiPlugin)
        .add_plugins(IndexScopeViewerPlugin { cfg })
        .run();
    if let AppExit::Error(code) = exit {
        anyhow::bail!("viewer exited with code {code}");
    }
    Ok(())
}

//! Gorillas: two players throw exploding bananas at each other across a
//! city skyline.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use gorillas::config::GameConfig;
use gorillas::engine::Engine;
use gorillas::logging;
use gorillas::scene::SceneManager;
use gorillas::scenes::StartScene;
use gorillas::window::WindowMode;

#[derive(Parser)]
#[command(name = "gorillas")]
#[command(about = "Throw exploding bananas across a city skyline")]
struct Args {
    /// TOML config file; missing keys keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for skyline, placement and wind
    #[arg(long)]
    seed: Option<u64>,

    /// Start in borderless fullscreen
    #[arg(long)]
    fullscreen: bool,
}

fn main() -> Result<()> {
    logging::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.match_rules.seed = Some(seed);
    }
    if args.fullscreen {
        config.screen.window_mode = WindowMode::Borderless;
    }
    config.validate()?;

    info!("Gorillas {} starting", env!("CARGO_PKG_VERSION"));
    info!(
        width = config.screen.width,
        height = config.screen.height,
        seed = ?config.match_rules.seed,
        "Screen configured"
    );

    Engine::builder()
        .with_title("Gorillas")
        .with_config(config)
        .run(SceneManager::new(Box::new(StartScene::new())))?;

    info!("Gorillas shut down");
    Ok(())
}

//! navpad - gamepad menu navigation demo
//!
//! Drives the main menu screen against an in-memory surface, with input
//! from the first connected gamepad (degrading to idle input when none is
//! present).

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use navpad::clock::SystemClock;
use navpad::config::AppConfig;
use navpad::input::gamepad;
use navpad::menu::MainMenu;
use navpad::registry::LayoutRegistry;
use navpad::surface::{BufferSurface, DrawSurface};

/// Navpad - gamepad-navigable main menu demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Print gamepad diagnostics and exit
    #[arg(long)]
    list_gamepads: bool,
}

// Placeholder art dimensions, matching the original button frames.
const BUTTON_WIDTH: i32 = 26;
const BUTTON_HEIGHT: i32 = 26;

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_logging(&args.log_level)?;

    if args.list_gamepads {
        gamepad::print_gamepad_diagnostics();
        return Ok(());
    }

    let config = AppConfig::load_or_default(Path::new(&args.config))?;
    info!("Configuration loaded");

    let source = gamepad::init(&config.gamepad);
    let mut registry = LayoutRegistry::new(
        source,
        Box::new(SystemClock::new()),
        config.nav.clone(),
    );

    // Flat-color placeholder art; a real front-end supplies decoded frames.
    let normal = vec![1u8; (BUTTON_WIDTH * BUTTON_HEIGHT) as usize];
    let hover = vec![2u8; (BUTTON_WIDTH * BUTTON_HEIGHT) as usize];

    let mut surface = BufferSurface::new(640, 480);
    let menu = MainMenu::build(
        &mut registry,
        &config.menu,
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
        &normal,
        &hover,
    );

    info!("Entering main menu loop (select with the gamepad, B exits)");
    let action = menu.run(
        &mut registry,
        &config.menu,
        &mut surface,
        |surface: &mut dyn DrawSurface| {
            // Headless presentation: drop the dirty regions and pace the loop.
            let _ = surface.take_dirty();
            std::thread::sleep(std::time::Duration::from_millis(16));
        },
    );

    info!("Main menu outcome: {:?}", action);
    registry.destroy_layout(menu.layout());
    Ok(())
}

fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .init();

    Ok(())
}

//! Missile Commander entry point
//!
//! Runs the simulation headless against a scripted defender and logs the
//! outcome. Set `RUST_LOG=debug` to see individual launches and hits.

use glam::Vec2;

use missile_commander::{LauncherOrigin, Settings};
use missile_commander::platform::{HeadlessPlatform, run};

/// Settings file read from the working directory
const SETTINGS_FILE: &str = "settings.json";
/// Overrides `SETTINGS_FILE`
const SETTINGS_ENV: &str = "MISSILE_COMMANDER_SETTINGS";
/// Overrides the launcher origin from the settings file
const LAUNCHER_ENV: &str = "MISSILE_COMMANDER_LAUNCHER";

/// One minute of play at the target frame rate
const DEMO_SECONDS: u64 = 60;
/// Frames between scripted defensive shots
const VOLLEY_EVERY: u64 = 45;

fn main() {
    env_logger::init();
    log::info!("Missile Commander (headless) starting...");

    let path = std::env::var(SETTINGS_ENV).unwrap_or_else(|_| SETTINGS_FILE.to_string());
    let mut settings = Settings::load_from(&path);

    if let Ok(value) = std::env::var(LAUNCHER_ENV) {
        match LauncherOrigin::from_str(&value) {
            Some(launcher) => settings.launcher = launcher,
            None => log::warn!("Unknown launcher origin '{}', keeping {}", value, settings.launcher.as_str()),
        }
    }
    log::info!("Launching from {}", settings.launcher.as_str());

    // Shots spread across the sky above the skyline
    let w = settings.screen_width;
    let h = settings.screen_height;
    let targets = [
        Vec2::new(w * 0.2, h * 0.45),
        Vec2::new(w * 0.5, h * 0.35),
        Vec2::new(w * 0.8, h * 0.45),
        Vec2::new(w * 0.35, h * 0.6),
        Vec2::new(w * 0.65, h * 0.6),
    ];

    let budget = DEMO_SECONDS * settings.target_fps as u64;
    let mut platform =
        HeadlessPlatform::new(budget, settings.frame_time()).with_volleys(VOLLEY_EVERY, &targets);

    match run(&mut platform, &settings) {
        Ok(summary) => match serde_json::to_string(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => log::warn!("Could not encode summary: {}", e),
        },
        Err(e) => {
            log::error!("Setup failed: {}", e);
            std::process::exit(1);
        }
    }
}

//! PawTrack — ops entry point.
//!
//! Boots the care engine against a roster file (first argument) or the
//! built-in sample roster, then dumps every animal's alert status as
//! JSON. The real transport layer embeds [`CareService`] the same way;
//! this binary doubles as a smoke check and a status CLI for ops.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use pawtrack::app::service::CareService;
use pawtrack::config::Roster;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("PawTrack v{}", env!("CARGO_PKG_VERSION"));

    let roster = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            info!("loading roster from {}", path.display());
            Roster::load(&path).with_context(|| format!("roster {}", path.display()))?
        }
        None => {
            info!("no roster file given, using the built-in sample roster");
            Roster::sample()
        }
    };

    let service = CareService::with_system_clock(&roster);
    info!("tracking {} animal(s)", service.pet_ids().len());

    let statuses = service.all_statuses();
    println!("{}", serde_json::to_string_pretty(&statuses)?);

    Ok(())
}

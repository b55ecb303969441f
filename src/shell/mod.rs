//! Interactive command shell around the player

mod command;
mod config;
mod session;

pub use command::{Command, CommandError, HELP_TEXT};
pub use config::{ShellConfig, DEFAULT_PROMPT};
pub use session::{Flow, Session, FAREWELL, GREETING};

use crate::catalog::parse_catalog;
use crate::player::VideoPlayer;
use anyhow::Result;

/// Load the configured catalog and build a player over it
pub fn load_player(config: &ShellConfig) -> Result<VideoPlayer> {
    let library = parse_catalog(&config.catalog_path)?;
    let player = match config.seed {
        Some(seed) => {
            log::info!("Random playback seeded with {}", seed);
            VideoPlayer::with_seed(library, seed)
        }
        None => VideoPlayer::new(library),
    };
    Ok(player)
}

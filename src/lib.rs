//! Video Player - in-memory video catalog command interpreter
//!
//! This library loads a fixed video catalog and drives a single playback
//! slot and a set of named playlists from text commands.

pub mod catalog;
pub mod model;
pub mod player;
pub mod shell;

pub use player::VideoPlayer;
pub use shell::{Session, ShellConfig};

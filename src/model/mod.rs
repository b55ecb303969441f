//! Data model for the video catalog and playlists
//!
//! These types are independent of the catalog file format and of the
//! command shell that drives the player.

mod library;
mod playlist;
mod video;

pub use library::{Library, VideoCatalog};
pub use playlist::Playlist;
pub use video::Video;

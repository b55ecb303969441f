//! Player state shared by every operation

use super::playback::PlaybackState;
use crate::model::{Library, Playlist, Video, VideoCatalog};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

/// Playlists are keyed by their uppercased name
pub(super) fn playlist_key(name: &str) -> String {
    name.to_uppercase()
}

/// Playback slot, playlists and the catalog they reference
pub struct VideoPlayer<C: VideoCatalog = Library> {
    pub(super) catalog: C,

    pub(super) playback: PlaybackState,

    /// Playlists by uppercased name
    pub(super) playlists: HashMap<String, Playlist>,

    /// Original-case playlist names, sorted by lowercase
    pub(super) display_names: Vec<String>,

    pub(super) rng: StdRng,
}

impl<C: VideoCatalog> VideoPlayer<C> {
    /// Create a player over a populated catalog
    pub fn new(catalog: C) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }

    /// Create a player whose random picks are reproducible
    pub fn with_seed(catalog: C, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: C, rng: StdRng) -> Self {
        Self {
            catalog,
            playback: PlaybackState::default(),
            playlists: HashMap::new(),
            display_names: Vec::new(),
            rng,
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    /// The video in the playback slot, paused or not
    pub fn now_playing(&self) -> Option<&Video> {
        self.playback
            .video_id()
            .and_then(|id| self.catalog.get_video(id))
    }

    /// Look up a playlist by name, ignoring case
    pub fn playlist(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&playlist_key(name))
    }

    /// Playlist names as created, in display order
    pub fn playlist_names(&self) -> &[String] {
        &self.display_names
    }
}

//! Playlist management
//!
//! Playlists are addressed case-insensitively. Messages echo the name as the
//! user typed it, except the `show_playlist` header which uses the name the
//! playlist was created with.

use super::error::{Action, PlayerError, Reason, Result};
use super::report::Report;
use super::state::{playlist_key, VideoPlayer};
use crate::model::{Playlist, VideoCatalog};

impl<C: VideoCatalog> VideoPlayer<C> {
    pub fn create_playlist(&mut self, name: &str) -> Result<Report> {
        let key = playlist_key(name);
        if self.playlists.contains_key(&key) {
            return Err(PlayerError::new(
                Action::CreatePlaylist,
                Reason::PlaylistAlreadyExists,
            ));
        }

        self.playlists.insert(key, Playlist::new(name.to_string()));
        self.display_names.push(name.to_string());
        self.display_names.sort_by_key(|n| n.to_lowercase());

        log::debug!("Created playlist {:?} ({} total)", name, self.playlists.len());
        Ok(Report::line(format!("Successfully created new playlist: {}", name)))
    }

    /// Append a video. The duplicate check runs before the catalog check.
    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> Result<Report> {
        let reject = |reason| PlayerError::new(Action::AddToPlaylist(name.to_string()), reason);

        let playlist = self
            .playlists
            .get_mut(&playlist_key(name))
            .ok_or_else(|| reject(Reason::PlaylistDoesNotExist))?;
        if playlist.contains(video_id) {
            return Err(reject(Reason::VideoAlreadyAdded));
        }
        let video = self
            .catalog
            .get_video(video_id)
            .ok_or_else(|| reject(Reason::VideoDoesNotExist))?;

        playlist.add_video(video.id.clone());
        Ok(Report::line(format!("Added video to {}: {}", name, video.title)))
    }

    pub fn remove_from_playlist(&mut self, name: &str, video_id: &str) -> Result<Report> {
        let reject =
            |reason| PlayerError::new(Action::RemoveFromPlaylist(name.to_string()), reason);

        let playlist = self
            .playlists
            .get_mut(&playlist_key(name))
            .ok_or_else(|| reject(Reason::PlaylistDoesNotExist))?;
        let video = self.catalog.get_video(video_id);

        if playlist.remove_video(video_id) {
            let title = video.map_or(video_id, |v| v.title.as_str());
            Ok(Report::line(format!("Removed video from {}: {}", name, title)))
        } else if video.is_some() {
            Err(reject(Reason::VideoNotInPlaylist))
        } else {
            Err(reject(Reason::VideoDoesNotExist))
        }
    }

    /// Empty a playlist. The playlist itself stays listed.
    pub fn clear_playlist(&mut self, name: &str) -> Result<Report> {
        let playlist = self.playlists.get_mut(&playlist_key(name)).ok_or_else(|| {
            PlayerError::new(
                Action::ClearPlaylist(name.to_string()),
                Reason::PlaylistDoesNotExist,
            )
        })?;

        playlist.clear();
        Ok(Report::line(format!("Successfully removed all videos from {}", name)))
    }

    pub fn delete_playlist(&mut self, name: &str) -> Result<Report> {
        let key = playlist_key(name);
        if self.playlists.remove(&key).is_none() {
            return Err(PlayerError::new(
                Action::DeletePlaylist(name.to_string()),
                Reason::PlaylistDoesNotExist,
            ));
        }

        self.display_names.retain(|n| playlist_key(n) != key);
        log::debug!("Deleted playlist {:?} ({} left)", name, self.playlists.len());
        Ok(Report::line(format!("Deleted playlist: {}", name)))
    }

    pub fn show_all_playlists(&self) -> Report {
        if self.display_names.is_empty() {
            return Report::line("No playlists exist yet");
        }

        let mut report = Report::line("Showing all playlists:");
        report.extend(self.display_names.iter().map(|name| format!("  {}", name)));
        report
    }

    pub fn show_playlist(&self, name: &str) -> Result<Report> {
        let playlist = self.playlist(name).ok_or_else(|| {
            PlayerError::new(
                Action::ShowPlaylist(name.to_string()),
                Reason::PlaylistDoesNotExist,
            )
        })?;

        let mut report = Report::line(format!("Showing playlist: {}", playlist.name));
        if playlist.is_empty() {
            report.push("  No videos here yet");
        } else {
            report.extend(
                playlist
                    .video_ids()
                    .iter()
                    .filter_map(|id| self.catalog.get_video(id))
                    .map(|video| format!("  {}", video)),
            );
        }
        Ok(report)
    }
}

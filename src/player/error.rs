//! Error types for player operations

use std::fmt;
use thiserror::Error;

/// A rejected player command.
///
/// Renders as the single user-facing line `Cannot <action>: <reason>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot {action}: {reason}")]
pub struct PlayerError {
    pub action: Action,
    pub reason: Reason,
}

impl PlayerError {
    pub fn new(action: Action, reason: Reason) -> Self {
        Self { action, reason }
    }
}

/// The command that was attempted, with its target where the message names one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    PlayVideo,
    StopVideo,
    PauseVideo,
    ContinueVideo,
    CreatePlaylist,
    AddToPlaylist(String),
    RemoveFromPlaylist(String),
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowPlaylist(String),
    SearchVideosWithTag,
    FlagVideo,
    AllowVideo,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::PlayVideo => f.write_str("play video"),
            Action::StopVideo => f.write_str("stop video"),
            Action::PauseVideo => f.write_str("pause video"),
            Action::ContinueVideo => f.write_str("continue video"),
            Action::CreatePlaylist => f.write_str("create playlist"),
            Action::AddToPlaylist(name) => write!(f, "add video to {}", name),
            Action::RemoveFromPlaylist(name) => write!(f, "remove video from {}", name),
            Action::ClearPlaylist(name) => write!(f, "clear playlist {}", name),
            Action::DeletePlaylist(name) => write!(f, "delete playlist {}", name),
            Action::ShowPlaylist(name) => write!(f, "show playlist {}", name),
            Action::SearchVideosWithTag => f.write_str("search videos with tag"),
            Action::FlagVideo => f.write_str("flag video"),
            Action::AllowVideo => f.write_str("allow video"),
        }
    }
}

/// Why a command was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Reason {
    #[error("Video does not exist")]
    VideoDoesNotExist,

    #[error("No video is currently playing")]
    NoVideoPlaying,

    #[error("Video is not paused")]
    VideoNotPaused,

    #[error("No videos available")]
    NoVideosAvailable,

    #[error("A playlist with the same name already exists")]
    PlaylistAlreadyExists,

    #[error("Playlist does not exist")]
    PlaylistDoesNotExist,

    #[error("Video already added")]
    VideoAlreadyAdded,

    #[error("Video is not in playlist")]
    VideoNotInPlaylist,

    #[error("Not implemented")]
    NotImplemented,
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_action_target_and_reason() {
        let err = PlayerError::new(
            Action::AddToPlaylist("my_PLAYlist".to_string()),
            Reason::VideoAlreadyAdded,
        );
        assert_eq!(err.to_string(), "Cannot add video to my_PLAYlist: Video already added");

        let err = PlayerError::new(Action::ContinueVideo, Reason::VideoNotPaused);
        assert_eq!(err.to_string(), "Cannot continue video: Video is not paused");

        let err = PlayerError::new(
            Action::ShowPlaylist("rock".to_string()),
            Reason::PlaylistDoesNotExist,
        );
        assert_eq!(err.to_string(), "Cannot show playlist rock: Playlist does not exist");
    }
}

//! Command line parsing for the interactive shell

use thiserror::Error;

/// Usage table printed by `HELP`
pub const HELP_TEXT: &str = "Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, video_id, video tags and paused status of the video that is currently playing (or paused).
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist
    CLEAR_PLAYLIST <playlist_name> - Removes all the videos from the playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.
    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.
    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.
    ALLOW_VIDEO <video_id> - Removes a flag from a video.
    HELP - Displays help.
    EXIT - Terminates the program execution.";

/// One parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist { playlist: String, video_id: String },
    RemoveFromPlaylist { playlist: String, video_id: String },
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowPlaylist(String),
    ShowAllPlaylists,
    SearchVideos(String),
    SearchVideosWithTag(String),
    FlagVideo { video_id: String, reason: Option<String> },
    AllowVideo(String),
    Help,
    Exit,
}

/// A line that could not be turned into a command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    Unknown(String),

    #[error("Invalid number of arguments for {0}, type HELP for usage.")]
    WrongArguments(String),
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    ///
    /// The keyword is case-insensitive; arguments are whitespace separated
    /// and passed through unchanged.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(keyword) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();
        let keyword = keyword.to_uppercase();

        let command = match (keyword.as_str(), args.as_slice()) {
            ("NUMBER_OF_VIDEOS", []) => Command::NumberOfVideos,
            ("SHOW_ALL_VIDEOS", []) => Command::ShowAllVideos,
            ("PLAY", [video_id]) => Command::Play(video_id.to_string()),
            ("PLAY_RANDOM", []) => Command::PlayRandom,
            ("STOP", []) => Command::Stop,
            ("PAUSE", []) => Command::Pause,
            ("CONTINUE", []) => Command::Continue,
            ("SHOW_PLAYING", []) => Command::ShowPlaying,
            ("CREATE_PLAYLIST", [name]) => Command::CreatePlaylist(name.to_string()),
            ("ADD_TO_PLAYLIST", [name, video_id]) => Command::AddToPlaylist {
                playlist: name.to_string(),
                video_id: video_id.to_string(),
            },
            ("REMOVE_FROM_PLAYLIST", [name, video_id]) => Command::RemoveFromPlaylist {
                playlist: name.to_string(),
                video_id: video_id.to_string(),
            },
            ("CLEAR_PLAYLIST", [name]) => Command::ClearPlaylist(name.to_string()),
            ("DELETE_PLAYLIST", [name]) => Command::DeletePlaylist(name.to_string()),
            ("SHOW_PLAYLIST", [name]) => Command::ShowPlaylist(name.to_string()),
            ("SHOW_ALL_PLAYLISTS", []) => Command::ShowAllPlaylists,
            ("SEARCH_VIDEOS", [term]) => Command::SearchVideos(term.to_string()),
            ("SEARCH_VIDEOS_WITH_TAG", [tag]) => Command::SearchVideosWithTag(tag.to_string()),
            ("FLAG_VIDEO", [video_id, reason @ ..]) => Command::FlagVideo {
                video_id: video_id.to_string(),
                reason: (!reason.is_empty()).then(|| reason.join(" ")),
            },
            ("ALLOW_VIDEO", [video_id]) => Command::AllowVideo(video_id.to_string()),
            ("HELP", []) => Command::Help,
            ("EXIT", []) => Command::Exit,

            (
                "NUMBER_OF_VIDEOS" | "SHOW_ALL_VIDEOS" | "PLAY" | "PLAY_RANDOM" | "STOP"
                | "PAUSE" | "CONTINUE" | "SHOW_PLAYING" | "CREATE_PLAYLIST" | "ADD_TO_PLAYLIST"
                | "REMOVE_FROM_PLAYLIST" | "CLEAR_PLAYLIST" | "DELETE_PLAYLIST" | "SHOW_PLAYLIST"
                | "SHOW_ALL_PLAYLISTS" | "SEARCH_VIDEOS" | "SEARCH_VIDEOS_WITH_TAG" | "FLAG_VIDEO"
                | "ALLOW_VIDEO" | "HELP" | "EXIT",
                _,
            ) => return Err(CommandError::WrongArguments(keyword.clone())),
            _ => return Err(CommandError::Unknown(keyword.clone())),
        };

        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line() {
        assert_eq!(Command::parse(""), Ok(None));
        assert_eq!(Command::parse("   \t "), Ok(None));
    }

    #[test]
    fn test_keywords_ignore_case() {
        assert_eq!(
            Command::parse("play amazing_cats_video_id"),
            Ok(Some(Command::Play("amazing_cats_video_id".to_string())))
        );
        assert_eq!(Command::parse("Show_Playing"), Ok(Some(Command::ShowPlaying)));
    }

    #[test]
    fn test_arguments_keep_case() {
        assert_eq!(
            Command::parse("ADD_TO_PLAYLIST My_Mix  funny_dogs_video_id"),
            Ok(Some(Command::AddToPlaylist {
                playlist: "My_Mix".to_string(),
                video_id: "funny_dogs_video_id".to_string(),
            }))
        );
    }

    #[test]
    fn test_flag_reason_is_optional() {
        assert_eq!(
            Command::parse("FLAG_VIDEO v1"),
            Ok(Some(Command::FlagVideo {
                video_id: "v1".to_string(),
                reason: None,
            }))
        );
        assert_eq!(
            Command::parse("FLAG_VIDEO v1 not for kids"),
            Ok(Some(Command::FlagVideo {
                video_id: "v1".to_string(),
                reason: Some("not for kids".to_string()),
            }))
        );
    }

    #[test]
    fn test_unknown_command() {
        let err = Command::parse("REWIND").unwrap_err();
        assert_eq!(err, CommandError::Unknown("REWIND".to_string()));
        assert_eq!(
            err.to_string(),
            "Please enter a valid command, type HELP for a list of available commands."
        );
    }

    #[test]
    fn test_wrong_argument_count() {
        let err = Command::parse("play").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid number of arguments for PLAY, type HELP for usage."
        );
        assert!(Command::parse("STOP now").is_err());
        assert!(Command::parse("ADD_TO_PLAYLIST mix").is_err());
        assert!(Command::parse("FLAG_VIDEO").is_err());
    }
}

//! The video player: playback slot, playlists and search
//!
//! Every operation either returns a [`Report`] of output lines or a
//! [`PlayerError`] describing why the command was rejected. Rejected
//! commands leave the state untouched.

mod error;
mod listing;
mod playback;
mod playlists;
mod report;
mod search;
mod state;

pub use error::{Action, PlayerError, Reason, Result};
pub use playback::PlaybackState;
pub use report::Report;
pub use search::{SearchResults, SELECTION_PROMPT};
pub use state::VideoPlayer;

#[cfg(test)]
pub(crate) mod test_support {
    use super::VideoPlayer;
    use crate::model::{Library, Video};

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    pub fn sample_library() -> Library {
        [
            Video::new("funny_dogs_video_id", "Funny Dogs", tags(&["#dog", "#animal"])),
            Video::new("amazing_cats_video_id", "Amazing Cats", tags(&["#cat", "#animal"])),
            Video::new("another_cat_video_id", "Another Cat Video", tags(&["#cat", "#animal"])),
            Video::new("life_at_sea_video_id", "Life at Sea", tags(&["#ocean", "#career"])),
            Video::new("nothing_video_id", "Video about nothing", Vec::new()),
        ]
        .into_iter()
        .collect()
    }

    pub fn sample_player() -> VideoPlayer {
        VideoPlayer::new(sample_library())
    }

    pub fn sample_player_with_seed(seed: u64) -> VideoPlayer {
        VideoPlayer::with_seed(sample_library(), seed)
    }
}

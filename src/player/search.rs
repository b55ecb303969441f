//! Title search and the follow-up selection
//!
//! Searching is pure; reading the user's answer is left to the caller, which
//! hands it back through [`VideoPlayer::play_selection`].

use super::error::{Action, PlayerError, Reason, Result};
use super::report::Report;
use super::state::VideoPlayer;
use crate::model::{Video, VideoCatalog};

/// Prompt shown after a non-empty result list
pub const SELECTION_PROMPT: [&str; 2] = [
    "Would you like to play any of the above? If yes, specify the number of the video.",
    "If your answer is not a valid number, we will assume it's a no.",
];

/// Videos matching a search term, ranked from 1 in title order
#[derive(Debug, Clone)]
pub struct SearchResults {
    term: String,
    videos: Vec<Video>,
}

impl SearchResults {
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Result at a 1-based rank
    pub fn get(&self, rank: usize) -> Option<&Video> {
        rank.checked_sub(1).and_then(|i| self.videos.get(i))
    }

    /// Interpret a typed answer. Anything that is not a valid rank is `None`.
    pub fn select(&self, answer: &str) -> Option<&Video> {
        answer
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|rank| self.get(rank))
    }

    /// The result listing, without the selection prompt
    pub fn report(&self) -> Report {
        if self.videos.is_empty() {
            return Report::line(format!("No search results for {}", self.term));
        }

        let mut report = Report::line(format!("Here are the results for {}:", self.term));
        report.extend(
            self.videos
                .iter()
                .enumerate()
                .map(|(i, video)| format!("  {}) {}", i + 1, video)),
        );
        report
    }
}

impl<C: VideoCatalog> VideoPlayer<C> {
    /// Case-insensitive substring search over titles
    pub fn search_videos(&self, term: &str) -> SearchResults {
        let needle = term.to_uppercase();
        let mut videos: Vec<Video> = self
            .catalog
            .videos()
            .iter()
            .filter(|video| video.title.to_uppercase().contains(&needle))
            .cloned()
            .collect();
        videos.sort_by(|a, b| a.title.cmp(&b.title));

        log::debug!("Search {:?}: {} results", term, videos.len());
        SearchResults {
            term: term.to_string(),
            videos,
        }
    }

    /// Play the result the user picked. An invalid answer plays nothing and
    /// yields an empty report.
    pub fn play_selection(&mut self, results: &SearchResults, answer: &str) -> Result<Report> {
        match results.select(answer) {
            Some(video) => self.play(&video.id),
            None => {
                log::debug!("No search selection from answer {:?}", answer);
                Ok(Report::new())
            }
        }
    }

    pub fn search_videos_with_tag(&self, video_tag: &str) -> Result<Report> {
        log::debug!("Tag search for {:?} requested", video_tag);
        Err(PlayerError::new(Action::SearchVideosWithTag, Reason::NotImplemented))
    }

    pub fn flag_video(&mut self, video_id: &str, flag_reason: Option<&str>) -> Result<Report> {
        log::debug!("Flag requested for {:?} (reason {:?})", video_id, flag_reason);
        Err(PlayerError::new(Action::FlagVideo, Reason::NotImplemented))
    }

    pub fn allow_video(&mut self, video_id: &str) -> Result<Report> {
        log::debug!("Allow requested for {:?}", video_id);
        Err(PlayerError::new(Action::AllowVideo, Reason::NotImplemented))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Library;
    use crate::player::test_support::sample_player;

    fn law_player() -> VideoPlayer {
        let library: Library = [
            Video::new("mower_id", "Lawnmower", vec!["#garden".to_string()]),
            Video::new("cats_id", "Cats", Vec::new()),
            Video::new("order_id", "Law & Order", vec!["#tv".to_string()]),
        ]
        .into_iter()
        .collect();
        VideoPlayer::new(library)
    }

    #[test]
    fn test_search_ranks_by_title() {
        let player = law_player();
        let results = player.search_videos("law");

        assert_eq!(results.len(), 2);
        assert_eq!(results.get(1).unwrap().id, "order_id");
        assert_eq!(results.get(2).unwrap().id, "mower_id");
        assert!(results.get(0).is_none());
        assert!(results.get(3).is_none());
        assert_eq!(
            results.report().lines(),
            [
                "Here are the results for law:",
                "  1) Law & Order (order_id) [#tv]",
                "  2) Lawnmower (mower_id) [#garden]",
            ]
        );
    }

    #[test]
    fn test_selection_plays_ranked_video() {
        let mut player = law_player();
        let results = player.search_videos("LAW");

        let report = player.play_selection(&results, "2").unwrap();
        assert_eq!(report.lines(), ["Playing video: Lawnmower"]);
        assert_eq!(player.playback().video_id(), Some("mower_id"));
    }

    #[test]
    fn test_invalid_selection_is_ignored() {
        let mut player = law_player();
        let results = player.search_videos("law");

        for answer in ["", "no", "0", "3", "-1", "1.5"] {
            let report = player.play_selection(&results, answer).unwrap();
            assert!(report.is_empty(), "answer {:?} should be ignored", answer);
        }
        assert!(player.playback().video_id().is_none());

        assert!(results.select(" 1 \n").is_some());
    }

    #[test]
    fn test_no_results() {
        let player = sample_player();
        let results = player.search_videos("blah");
        assert!(results.is_empty());
        assert_eq!(results.term(), "blah");
        assert_eq!(results.report().lines(), ["No search results for blah"]);
    }

    #[test]
    fn test_stubs_change_nothing() {
        let mut player = sample_player();
        player.play("funny_dogs_video_id").unwrap();

        assert_eq!(
            player.search_videos_with_tag("#cat").unwrap_err().to_string(),
            "Cannot search videos with tag: Not implemented"
        );
        assert_eq!(
            player
                .flag_video("funny_dogs_video_id", Some("dont_like_dogs"))
                .unwrap_err()
                .to_string(),
            "Cannot flag video: Not implemented"
        );
        assert_eq!(
            player.allow_video("funny_dogs_video_id").unwrap_err().reason,
            Reason::NotImplemented
        );
        assert_eq!(player.playback().video_id(), Some("funny_dogs_video_id"));
    }
}

//! Catalog-wide listings

use super::report::Report;
use super::state::VideoPlayer;
use crate::model::VideoCatalog;

impl<C: VideoCatalog> VideoPlayer<C> {
    pub fn number_of_videos(&self) -> Report {
        Report::line(format!("{} videos in the library", self.catalog.videos().len()))
    }

    /// Every video, sorted by its full `title (id) [tags]` rendering
    pub fn show_all_videos(&self) -> Report {
        let mut lines: Vec<String> = self
            .catalog
            .videos()
            .iter()
            .map(|video| video.to_string())
            .collect();
        lines.sort();

        let mut report = Report::line("Here's a list of all available videos:");
        report.extend(lines);
        report
    }
}

//! Playback control: play, stop, pause and continue

use super::error::{Action, PlayerError, Reason, Result};
use super::report::Report;
use super::state::VideoPlayer;
use crate::model::VideoCatalog;
use rand::seq::SliceRandom;

/// What the playback slot holds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing(String),
    Paused(String),
}

impl PlaybackState {
    /// ID of the loaded video, if any
    pub fn video_id(&self) -> Option<&str> {
        match self {
            PlaybackState::Stopped => None,
            PlaybackState::Playing(id) | PlaybackState::Paused(id) => Some(id),
        }
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, PlaybackState::Paused(_))
    }

    /// Playing -> Paused. Returns false from any other state.
    fn pause(&mut self) -> bool {
        if let PlaybackState::Playing(id) = self {
            *self = PlaybackState::Paused(std::mem::take(id));
            true
        } else {
            false
        }
    }

    /// Paused -> Playing. Returns false from any other state.
    fn resume(&mut self) -> bool {
        if let PlaybackState::Paused(id) = self {
            *self = PlaybackState::Playing(std::mem::take(id));
            true
        } else {
            false
        }
    }
}

impl<C: VideoCatalog> VideoPlayer<C> {
    /// Play a video, stopping whatever is loaded first.
    ///
    /// Playing the video that is already loaded restarts it.
    pub fn play(&mut self, video_id: &str) -> Result<Report> {
        let video = self
            .catalog
            .get_video(video_id)
            .ok_or_else(|| PlayerError::new(Action::PlayVideo, Reason::VideoDoesNotExist))?;

        let mut report = Report::new();
        if let Some(current) = self.now_playing() {
            report.push(format!("Stopping video: {}", current.title));
        }
        report.push(format!("Playing video: {}", video.title));

        log::debug!("Playback {:?} -> Playing({})", self.playback, video.id);
        self.playback = PlaybackState::Playing(video.id.clone());
        Ok(report)
    }

    /// Stop the loaded video
    pub fn stop(&mut self) -> Result<Report> {
        let title = self.loaded_title(Action::StopVideo)?;
        log::debug!("Playback {:?} -> Stopped", self.playback);
        self.playback = PlaybackState::Stopped;
        Ok(Report::line(format!("Stopping video: {}", title)))
    }

    /// Play a video picked uniformly at random from the whole catalog
    pub fn play_random(&mut self) -> Result<Report> {
        let video_id = self
            .catalog
            .videos()
            .choose(&mut self.rng)
            .map(|video| video.id.clone())
            .ok_or_else(|| PlayerError::new(Action::PlayVideo, Reason::NoVideosAvailable))?;
        self.play(&video_id)
    }

    /// Pause the loaded video. Pausing twice is reported but harmless.
    pub fn pause(&mut self) -> Result<Report> {
        let title = self.loaded_title(Action::PauseVideo)?;
        if self.playback.pause() {
            log::debug!("Playback paused");
            Ok(Report::line(format!("Pausing video: {}", title)))
        } else {
            Ok(Report::line(format!("Video already paused: {}", title)))
        }
    }

    /// Continue a paused video
    pub fn resume(&mut self) -> Result<Report> {
        let title = self.loaded_title(Action::ContinueVideo)?;
        if self.playback.resume() {
            log::debug!("Playback resumed");
            Ok(Report::line(format!("Continuing video: {}", title)))
        } else {
            Err(PlayerError::new(Action::ContinueVideo, Reason::VideoNotPaused))
        }
    }

    pub fn show_playing(&self) -> Report {
        match self.now_playing() {
            Some(video) if self.playback.is_paused() => {
                Report::line(format!("Currently playing: {} - PAUSED", video))
            }
            Some(video) => Report::line(format!("Currently playing: {}", video)),
            None => Report::line("No video is currently playing"),
        }
    }

    fn loaded_title(&self, action: Action) -> Result<String> {
        self.now_playing()
            .map(|video| video.title.clone())
            .ok_or(PlayerError::new(action, Reason::NoVideoPlaying))
    }
}

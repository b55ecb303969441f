use super::Video;
use std::collections::HashMap;

/// Read-only source of videos consumed by the player
pub trait VideoCatalog {
    /// All videos, in a stable order across calls
    fn videos(&self) -> &[Video];

    /// Look up a video by ID
    fn get_video(&self, id: &str) -> Option<&Video>;
}

/// In-memory video catalog, populated once at startup
#[derive(Debug, Clone, Default)]
pub struct Library {
    /// Videos in load order
    videos: Vec<Video>,

    /// Position of each video in `videos`, keyed by ID
    index: HashMap<String, usize>,
}

impl Library {
    /// Create a new empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a video to the library.
    ///
    /// IDs are unique: if the ID is already present the video is rejected
    /// and `false` is returned.
    pub fn add_video(&mut self, video: Video) -> bool {
        if self.index.contains_key(&video.id) {
            return false;
        }
        self.index.insert(video.id.clone(), self.videos.len());
        self.videos.push(video);
        true
    }

    /// Total number of videos
    pub fn video_count(&self) -> usize {
        self.videos.len()
    }

    /// Check if the library holds no videos
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

impl VideoCatalog for Library {
    fn videos(&self) -> &[Video] {
        &self.videos
    }

    fn get_video(&self, id: &str) -> Option<&Video> {
        self.index.get(id).map(|&i| &self.videos[i])
    }
}

impl FromIterator<Video> for Library {
    fn from_iter<I: IntoIterator<Item = Video>>(iter: I) -> Self {
        let mut library = Library::new();
        for video in iter {
            library.add_video(video);
        }
        library
    }
}

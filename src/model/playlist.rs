use serde::{Deserialize, Serialize};

/// A named, ordered, duplicate-free list of video references
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name exactly as first supplied
    pub name: String,

    /// Video IDs in insertion order (references Video::id)
    video_ids: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: String) -> Self {
        Self {
            name,
            video_ids: Vec::new(),
        }
    }

    /// Whether the playlist already holds this video
    pub fn contains(&self, video_id: &str) -> bool {
        self.video_ids.iter().any(|id| id == video_id)
    }

    /// Append a video. Returns false if it was already present.
    pub fn add_video(&mut self, video_id: String) -> bool {
        if self.contains(&video_id) {
            return false;
        }
        self.video_ids.push(video_id);
        true
    }

    /// Remove a video. Returns false if it was not present.
    pub fn remove_video(&mut self, video_id: &str) -> bool {
        match self.video_ids.iter().position(|id| id == video_id) {
            Some(index) => {
                self.video_ids.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drop every entry, keeping the playlist itself
    pub fn clear(&mut self) {
        self.video_ids.clear();
    }

    /// Video IDs in insertion order
    pub fn video_ids(&self) -> &[String] {
        &self.video_ids
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.video_ids.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_rejects_duplicates() {
        let mut playlist = Playlist::new("Mix".to_string());
        assert!(playlist.add_video("a".to_string()));
        assert!(playlist.add_video("b".to_string()));
        assert!(!playlist.add_video("a".to_string()));
        assert_eq!(playlist.video_ids(), ["a", "b"]);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut playlist = Playlist::new("Mix".to_string());
        for id in ["a", "b", "c"] {
            playlist.add_video(id.to_string());
        }
        assert!(playlist.remove_video("b"));
        assert!(!playlist.remove_video("b"));
        assert_eq!(playlist.video_ids(), ["a", "c"]);
    }

    #[test]
    fn test_clear() {
        let mut playlist = Playlist::new("Mix".to_string());
        playlist.add_video("a".to_string());
        playlist.clear();
        assert!(playlist.is_empty());
        assert_eq!(playlist.name, "Mix");
    }
}

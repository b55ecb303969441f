//! Intermediate catalog records, before validation

use crate::model::Video;

/// A video entry as read from a catalog file
#[derive(Debug, Clone, Default)]
pub struct CatalogEntry {
    pub id: Option<String>,
    pub title: Option<String>,
    pub tags: Vec<String>,
}

impl CatalogEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert to a Video. Needs at minimum a non-empty id and a title.
    pub fn into_video(self) -> Option<Video> {
        let id = self.id.filter(|id| !id.is_empty())?;
        let title = self.title?;
        Some(Video::new(id, title, self.tags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_requires_id_and_title() {
        let mut entry = CatalogEntry::new();
        entry.title = Some("Untitled".to_string());
        assert!(entry.clone().into_video().is_none());

        entry.id = Some(String::new());
        assert!(entry.clone().into_video().is_none());

        entry.id = Some("v1".to_string());
        let video = entry.into_video().unwrap();
        assert_eq!(video.id, "v1");
        assert!(video.tags.is_empty());
    }
}

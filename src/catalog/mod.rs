//! Catalog file loading
//!
//! Builds the in-memory video library from either a pipe-delimited text
//! file or an XML file, chosen by extension.

mod model;
mod text;
mod xml;

pub use text::{parse_text, parse_text_file};
pub use xml::{parse_xml, parse_xml_file};

use crate::model::{Library, Video};
use anyhow::Result;
use std::path::Path;

/// Supported catalog file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// `title | id | tag1, tag2` per line
    Text,

    /// `<catalog><video id="..">..</video></catalog>`
    Xml,
}

impl CatalogFormat {
    /// Pick the format from a file extension (`.xml` or text)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("xml") => CatalogFormat::Xml,
            _ => CatalogFormat::Text,
        }
    }
}

/// Load a complete video library from a catalog file
pub fn parse_catalog(path: &Path) -> Result<Library> {
    let format = CatalogFormat::from_path(path);
    log::info!("Parsing {:?} catalog from {:?}", format, path);

    let videos = match format {
        CatalogFormat::Text => parse_text_file(path)?,
        CatalogFormat::Xml => parse_xml_file(path)?,
    };

    let library = build_library(videos);
    log::info!("Loaded library: {} videos", library.video_count());
    Ok(library)
}

/// Collect parsed videos into a library, keeping the first of any duplicate IDs
pub fn build_library(videos: Vec<Video>) -> Library {
    let mut library = Library::new();
    for video in videos {
        let id = video.id.clone();
        if !library.add_video(video) {
            log::warn!("Duplicate video id {:?} in catalog, keeping the first", id);
        }
    }
    library
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VideoCatalog;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(CatalogFormat::from_path(Path::new("videos.xml")), CatalogFormat::Xml);
        assert_eq!(CatalogFormat::from_path(Path::new("VIDEOS.XML")), CatalogFormat::Xml);
        assert_eq!(CatalogFormat::from_path(Path::new("videos.txt")), CatalogFormat::Text);
        assert_eq!(CatalogFormat::from_path(Path::new("videos")), CatalogFormat::Text);
    }

    #[test]
    fn test_parse_catalog_text_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("videos.txt");
        fs::write(&path, "A | a_id | #x\nB | b_id |\nA again | a_id | #y\n").unwrap();

        let library = parse_catalog(&path).unwrap();
        assert_eq!(library.video_count(), 2);
        assert_eq!(library.get_video("a_id").unwrap().title, "A");
    }

    #[test]
    fn test_parse_catalog_xml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("videos.xml");
        fs::write(
            &path,
            r#"<catalog><video id="a_id"><title>A</title><tag>#x</tag></video></catalog>"#,
        )
        .unwrap();

        let library = parse_catalog(&path).unwrap();
        assert_eq!(library.video_count(), 1);
        assert_eq!(library.get_video("a_id").unwrap().tags, ["#x"]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = parse_catalog(&dir.path().join("missing.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to open catalog"));
    }
}

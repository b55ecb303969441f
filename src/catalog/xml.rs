//! XML catalog parser
//!
//! ```xml
//! <catalog>
//!   <video id="amazing_cats_video_id">
//!     <title>Amazing Cats</title>
//!     <tag>#cat</tag>
//!     <tag>#animal</tag>
//!   </video>
//! </catalog>
//! ```

use super::model::CatalogEntry;
use crate::model::Video;
use anyhow::{Context, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse an XML catalog file
pub fn parse_xml_file(path: &Path) -> Result<Vec<Video>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open catalog: {:?}", path))?;
    parse_xml(BufReader::new(file))
}

/// Parse an XML catalog from any reader
pub fn parse_xml<R: BufRead>(source: R) -> Result<Vec<Video>> {
    let mut reader = Reader::from_reader(source);
    reader.config_mut().trim_text(true);

    let mut videos = Vec::new();
    let mut current_entry: Option<CatalogEntry> = None;
    let mut current_element = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = e.name();
                match name.as_ref() {
                    b"video" => {
                        // New entry; the id lives in an attribute
                        let mut entry = CatalogEntry::new();
                        for attr in e.attributes().flatten() {
                            if attr.key.as_ref() == b"id" {
                                entry.id = Some(attr.unescape_value()?.trim().to_string());
                            }
                        }
                        current_entry = Some(entry);
                    }
                    _ => {
                        // Track element name for text content
                        if current_entry.is_some() {
                            current_element = String::from_utf8_lossy(name.as_ref()).to_string();
                        }
                    }
                }
            }

            Ok(Event::Empty(e)) => {
                // Self-closing <video/> can't carry a title
                if e.name().as_ref() == b"video" {
                    log::warn!("Skipping empty <video/> element without a title");
                }
            }

            Ok(Event::Text(e)) => {
                if let Some(ref mut entry) = current_entry {
                    let text = e.unescape().unwrap_or_default().to_string();

                    // Populate entry based on current element name

                    match current_element.as_str() {
                        "title" => match entry.title {
                            Some(ref mut title) => title.push_str(&text),
                            None => entry.title = Some(text),
                        },
                        "tag" => entry.tags.push(text),
                        _ => {}
                    }
                }
            }

            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"video" {
                    // Entry complete, convert to Video
                    if let Some(entry) = current_entry.take() {
                        let id = entry.id.clone();
                        match entry.into_video() {
                            Some(video) => videos.push(video),
                            None => log::warn!("Skipping catalog entry {:?}: missing id or title", id),
                        }
                    }
                }
                // End of element, clear current element name
                current_element.clear();
            }

            Ok(Event::Eof) => break,
            Err(e) => {
                anyhow::bail!(
                    "XML parsing error at position {}: {:?}",
                    reader.buffer_position(),
                    e
                );
            }
            _ => {}
        }

        buf.clear();
    }

    log::info!("Parsed {} videos from XML catalog", videos.len());
    Ok(videos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_catalog() {
        let input = r#"<?xml version="1.0"?>
<catalog>
  <video id="law_id">
    <title>Law &amp; Order</title>
    <tag>#tv</tag>
    <tag>#crime</tag>
  </video>
  <video id="nothing_video_id">
    <title>Video about nothing</title>
  </video>
</catalog>"#;

        let videos = parse_xml(Cursor::new(input)).unwrap();
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].title, "Law & Order");
        assert_eq!(videos[0].tags, ["#tv", "#crime"]);
        assert_eq!(videos[1].id, "nothing_video_id");
        assert!(videos[1].tags.is_empty());
    }

    #[test]
    fn test_entries_without_id_or_title_skipped() {
        let input = r#"<catalog>
  <video><title>No id</title></video>
  <video id="untitled"><tag>#x</tag></video>
  <video id="empty"/>
  <video id="ok"><title>Ok</title></video>
</catalog>"#;

        let videos = parse_xml(Cursor::new(input)).unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].id, "ok");
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        let input = "<catalog><video id=\"a\"><title>A</video></catalog>";
        assert!(parse_xml(Cursor::new(input)).is_err());
    }
}

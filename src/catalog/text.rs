//! Pipe-delimited catalog parser
//!
//! One video per line: `title | id | tag1, tag2`. The tag field may be
//! empty or missing.

use super::model::CatalogEntry;
use crate::model::Video;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse a pipe-delimited catalog file
pub fn parse_text_file(path: &Path) -> Result<Vec<Video>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open catalog: {:?}", path))?;
    parse_text(BufReader::new(file))
}

/// Parse pipe-delimited catalog lines from any reader
pub fn parse_text<R: BufRead>(reader: R) -> Result<Vec<Video>> {
    let mut videos = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read catalog line {}", line_no + 1))?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(&line).and_then(CatalogEntry::into_video) {
            Some(video) => videos.push(video),
            None => log::warn!("Skipping malformed catalog line {}: {:?}", line_no + 1, line),
        }
    }

    log::info!("Parsed {} videos from text catalog", videos.len());
    Ok(videos)
}

fn parse_line(line: &str) -> Option<CatalogEntry> {
    let fields: Vec<&str> = line.split('|').map(str::trim).collect();
    let (title, id, tags) = match fields.as_slice() {
        [title, id] => (*title, *id, ""),
        [title, id, tags] => (*title, *id, *tags),
        _ => return None,
    };

    let mut entry = CatalogEntry::new();
    entry.title = Some(title.to_string());
    entry.id = Some(id.to_string());
    if !tags.is_empty() {
        entry.tags = tags.split(',').map(|tag| tag.trim().to_string()).collect();
    }
    Some(entry)
}

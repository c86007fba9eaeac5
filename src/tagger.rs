//! Metadata tagging — writes descriptive tags into a recorded container.

use lofty::config::WriteOptions;
use lofty::file::{AudioFile, TaggedFileExt};
use lofty::tag::{Accessor, ItemKey, Tag};
use std::path::Path;

use crate::error::TagError;
use crate::program::Metadata;

/// Anything that can write descriptive tags into a finished recording.
/// `broadcast_date` is an 8-digit `YYYYMMDD` stamp.
pub trait MetadataTagger {
    fn write_tags(
        &self,
        path: &Path,
        metadata: &Metadata,
        broadcast_date: &str,
    ) -> Result<(), TagError>;
}

/// Tagger backed by lofty, working on the container's primary tag.
/// Fails if the file is not a well-formed audio container.
pub struct LoftyTagger;

/// Convert an 8-digit `YYYYMMDD` stamp into `YYYY-MM-DD`.
pub fn format_release_date(broadcast_date: &str) -> String {
    if broadcast_date.len() == 8 && broadcast_date.chars().all(|c| c.is_ascii_digit()) {
        format!(
            "{}-{}-{}",
            &broadcast_date[..4],
            &broadcast_date[4..6],
            &broadcast_date[6..8]
        )
    } else {
        broadcast_date.to_string()
    }
}

impl MetadataTagger for LoftyTagger {
    fn write_tags(
        &self,
        path: &Path,
        metadata: &Metadata,
        broadcast_date: &str,
    ) -> Result<(), TagError> {
        let mut tagged = lofty::read_from_path(path).map_err(|e| TagError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;

        let date = format_release_date(broadcast_date);

        let mut tag = match tagged.primary_tag() {
            Some(existing) => existing.clone(),
            None => Tag::new(tagged.primary_tag_type()),
        };

        if let Some(title) = &metadata.title {
            // Title carries the broadcast date so recurring episodes stay distinct
            tag.set_title(format!("{title} ({date})"));
        }
        if let Some(artist) = &metadata.artist {
            tag.set_artist(artist.clone());
        }
        if let Some(album) = &metadata.album {
            tag.set_album(album.clone());
        }
        if let Some(genre) = &metadata.genre {
            tag.set_genre(genre.clone());
        }
        // Release date is always stamped, even with no other metadata
        tag.insert_text(ItemKey::RecordingDate, date);

        tagged.insert_tag(tag);
        tagged
            .save_to_path(path, WriteOptions::default())
            .map_err(|e| TagError::Write {
                path: path.to_path_buf(),
                source: e,
            })?;
        Ok(())
    }
}

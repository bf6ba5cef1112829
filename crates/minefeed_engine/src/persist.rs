use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use minefeed_core::VersionFeed;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Atom output filename under the static directory.
pub const FEED_ATOM: &str = "feed.atom";
/// RSS output filename under the static directory.
pub const FEED_RSS: &str = "feed.rss";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure the output directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    }
    // Writability probe: try creating a temp file.
    NamedTempFile::new_in(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    Ok(())
}

/// Publishes both feed serializations into the static directory.
///
/// Each file is written to a temp file and renamed over the target, so the
/// HTTP server can never observe a half-written feed; on failure the
/// previous output stays in place.
pub struct FeedWriter {
    dir: PathBuf,
}

impl FeedWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn publish(&self, feed: &VersionFeed) -> Result<(), PersistError> {
        self.replace(FEED_ATOM, &feed.to_atom())?;
        self.replace(FEED_RSS, &feed.to_rss())?;
        Ok(())
    }

    fn replace(&self, filename: &str, content: &str) -> Result<(), PersistError> {
        ensure_output_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;
        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(())
    }
}

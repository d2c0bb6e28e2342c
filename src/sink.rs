//! Output sink: keyed, create-or-overwrite flat-file writes.
//!
//! Keys are file names carrying their extension; values are full file
//! contents. No read-back, no versioning, no atomic-rename guarantee: a
//! re-run simply overwrites.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {name}: {source}")]
    Write {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// Key-value write capability the batch driver targets.
pub trait OutputSink: Send + Sync {
    fn write(&self, name: &str, contents: &str) -> Result<(), SinkError>;
}

/// Sink writing flat files under a single directory.
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    /// Create the directory tree if absent and return the sink.
    pub fn create(root: impl AsRef<Path>) -> Result<Self, SinkError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|source| SinkError::CreateDir {
            path: root.clone(),
            source,
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl OutputSink for DirectorySink {
    fn write(&self, name: &str, contents: &str) -> Result<(), SinkError> {
        let path = self.root.join(name);
        fs::write(&path, contents).map_err(|source| SinkError::Write {
            name: name.to_string(),
            source,
        })
    }
}

//! Persisting rendered artifacts
//!
//! Writers perform no locking. Appends to a shared routes file from
//! concurrent runs may interleave; callers that run generation concurrently
//! must serialize access themselves.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::{Result, ScaffoldError};
use crate::paths::{OutputTarget, WriteMode};

/// Destination for rendered artifacts
pub trait ArtifactWriter {
    /// Persist `content` at `target` according to its write mode
    ///
    /// # Errors
    ///
    /// Returns an error if the target cannot be created, written, or appended to.
    fn write(&mut self, target: &OutputTarget, content: &str) -> Result<()>;
}

/// Writes artifacts to the local filesystem
///
/// Missing parent directories are created for every write mode, so an empty
/// project tree can be scaffolded.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsWriter;

impl FsWriter {
    fn ensure_parent(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
        }
        Ok(())
    }

    /// Replace the file at `path` with `content`
    fn overwrite(path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).map_err(|e| ScaffoldError::io(path, e))
    }

    /// Append `content` to `path`, creating the file if it is missing
    fn append(path: &Path, content: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| ScaffoldError::io(path, e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| ScaffoldError::io(path, e))
    }
}

impl ArtifactWriter for FsWriter {
    fn write(&mut self, target: &OutputTarget, content: &str) -> Result<()> {
        let path = target.path.as_path();
        Self::ensure_parent(path)?;

        match target.mode {
            WriteMode::CreateOrOverwrite | WriteMode::CreateDirThenFiles => {
                Self::overwrite(path, content)
            }
            WriteMode::AppendOnly => Self::append(path, content),
        }
    }
}

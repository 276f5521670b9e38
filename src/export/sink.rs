//! Destinations for exported artifacts.

use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Where a saved artifact ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedArtifact {
    /// File name handed to the sink
    pub filename: String,
    /// Full path, for sinks that write to the filesystem
    pub path: Option<PathBuf>,
    /// Artifact size in bytes
    pub size: usize,
}

/// The platform save mechanism.
///
/// A sink receives the finished artifact exactly once per successful
/// export. Implementations must not leave a partial artifact behind when
/// they fail.
pub trait ArtifactSink {
    /// Persist `bytes` under `filename`.
    fn save(&mut self, filename: &str, bytes: &[u8]) -> Result<SavedArtifact>;
}

impl<S: ArtifactSink + ?Sized> ArtifactSink for &mut S {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> Result<SavedArtifact> {
        (**self).save(filename, bytes)
    }
}

/// Saves artifacts into a directory.
///
/// Bytes are written to a temporary file in the same directory and renamed
/// into place only once fully written.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Create a sink writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactSink for DirectorySink {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> Result<SavedArtifact> {
        if filename.is_empty() || filename.contains(['/', '\\']) {
            return Err(Error::Save(format!("invalid file name: {:?}", filename)));
        }

        let path = self.dir.join(filename);
        let mut temp = NamedTempFile::new_in(&self.dir)?;
        temp.write_all(bytes)?;
        temp.as_file().sync_all()?;
        temp.persist(&path)?;

        debug!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(SavedArtifact {
            filename: filename.to_string(),
            path: Some(path),
            size: bytes.len(),
        })
    }
}

/// Keeps artifacts in memory, for hosts that hand bytes to a browser
/// download themselves.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    artifacts: Vec<(String, Vec<u8>)>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Artifacts saved so far, oldest first.
    pub fn artifacts(&self) -> &[(String, Vec<u8>)] {
        &self.artifacts
    }

    /// Most recent artifact.
    pub fn last(&self) -> Option<(&str, &[u8])> {
        self.artifacts
            .last()
            .map(|(name, bytes)| (name.as_str(), bytes.as_slice()))
    }

    /// Remove and return every saved artifact.
    pub fn take(&mut self) -> Vec<(String, Vec<u8>)> {
        std::mem::take(&mut self.artifacts)
    }
}

impl ArtifactSink for MemorySink {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> Result<SavedArtifact> {
        self.artifacts.push((filename.to_string(), bytes.to_vec()));
        Ok(SavedArtifact {
            filename: filename.to_string(),
            path: None,
            size: bytes.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directory_sink_writes_file() {
        let dir = TempDir::new().unwrap();
        let mut sink = DirectorySink::new(dir.path());
        let saved = sink.save("plan.pdf", b"%PDF-1.4 test").unwrap();

        assert_eq!(saved.size, 13);
        let path = saved.path.unwrap();
        assert_eq!(path, dir.path().join("plan.pdf"));
        assert_eq!(std::fs::read(path).unwrap(), b"%PDF-1.4 test");
        // only the final file remains
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_directory_sink_rejects_path_names() {
        let dir = TempDir::new().unwrap();
        let mut sink = DirectorySink::new(dir.path());
        assert!(matches!(sink.save("../plan.pdf", b"x"), Err(Error::Save(_))));
        assert!(matches!(sink.save("", b"x"), Err(Error::Save(_))));
    }

    #[test]
    fn test_directory_sink_missing_dir() {
        let dir = TempDir::new().unwrap();
        let mut sink = DirectorySink::new(dir.path().join("missing"));
        assert!(matches!(sink.save("plan.pdf", b"x"), Err(Error::Io(_))));
    }

    #[test]
    fn test_memory_sink() {
        let mut sink = MemorySink::new();
        sink.save("a.pdf", b"one").unwrap();
        sink.save("b.pdf", b"two").unwrap();
        assert_eq!(sink.artifacts().len(), 2);
        assert_eq!(sink.last(), Some(("b.pdf", &b"two"[..])));
        assert_eq!(sink.take().len(), 2);
        assert!(sink.artifacts().is_empty());
    }
}

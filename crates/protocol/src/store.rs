//! Where encoded artifacts are kept between the two roles

use std::io;

use xverify_api::{Error, Result};

/// Storage collaborator for one encoded artifact
///
/// Paths, permissions and link handling belong to the implementation; the
/// protocol only hands over and takes back UTF-8 text.
pub trait ArtifactStore {
    /// Persist the encoded artifact, replacing any previous one
    fn write_artifact(&mut self, text: &str) -> Result<()>;

    /// Load the encoded artifact
    fn read_artifact(&self) -> Result<String>;
}

/// In-process store, for tests and for running both roles in one process
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    text: Option<String>,
}

impl MemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with `text`
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

impl ArtifactStore for MemoryStore {
    fn write_artifact(&mut self, text: &str) -> Result<()> {
        self.text = Some(text.to_owned());
        Ok(())
    }

    fn read_artifact(&self) -> Result<String> {
        self.text.clone().ok_or_else(|| Error::StorageFailure {
            context: "memory store",
            kind: io::ErrorKind::NotFound,
            message: "no artifact has been written".into(),
        })
    }
}

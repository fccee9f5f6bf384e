use std::path::{Path, PathBuf};

use uuid::Uuid;

const SCRATCH_EXTENSION: &str = "wav";

/// Process-local temporary file holding one uploaded audio stream.
#[derive(Debug, PartialEq, Eq)]
pub struct ScratchFile {
    id: Uuid,
    path: PathBuf,
}

impl ScratchFile {
    /// Allocates a fresh, uniquely named scratch location inside `dir`.
    ///
    /// The name is a random v4 UUID, so concurrent requests never collide.
    /// Nothing is created on disk here.
    pub fn allocate(dir: &Path) -> Self {
        let id = Uuid::new_v4();
        let path = dir.join(format!("{}.{}", id, SCRATCH_EXTENSION));
        Self { id, path }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

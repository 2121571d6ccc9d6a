//! Byte-level load/store primitives backing a [`VehicleStore`](crate::VehicleStore)

use garage_types::Result;
use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Whole-snapshot storage: every write replaces the previous contents
pub trait Storage {
    /// Read everything stored so far. `Ok(None)` when nothing exists yet.
    fn load(&self) -> Result<Option<Vec<u8>>>;

    /// Overwrite the stored contents with `bytes`
    fn store(&self, bytes: &[u8]) -> Result<()>;
}

/// Storage in a single file on disk
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn load(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn store(&self, bytes: &[u8]) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(bytes)?;
        writer.flush()?;
        Ok(())
    }
}

/// In-process storage, mainly for tests and dry runs
#[derive(Debug, Default)]
pub struct MemoryStorage {
    contents: RefCell<Option<Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: RefCell::new(Some(bytes.into())),
        }
    }

    /// Copy of the current contents
    pub fn contents(&self) -> Option<Vec<u8>> {
        self.contents.borrow().clone()
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.contents())
    }

    fn store(&self, bytes: &[u8]) -> Result<()> {
        *self.contents.borrow_mut() = Some(bytes.to_vec());
        Ok(())
    }
}

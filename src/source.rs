//! Where the current workbook lives.
//!
//! Readers must see either the complete previous workbook or the complete new one, so
//! [`FileSourceStore::replace`] writes a uniquely named sibling temp file and renames it over
//! the target. Concurrent replaces never share a temp file; the last rename wins.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{SchoolsError, SchoolsResult};

/// Storage for the single current workbook.
pub trait SourceStore: Send + Sync {
    /// Bytes of the current workbook, or [`SchoolsError::SourceNotFound`].
    fn current(&self) -> SchoolsResult<Vec<u8>>;

    /// Atomically replace the current workbook.
    fn replace(&self, bytes: &[u8]) -> SchoolsResult<()>;

    /// Whether a workbook is currently present.
    fn exists(&self) -> bool;

    /// Human-readable location, used in logs and errors.
    fn describe(&self) -> String;
}

/// A workbook stored at a fixed filesystem path.
#[derive(Debug, Clone)]
pub struct FileSourceStore {
    path: PathBuf,
}

impl FileSourceStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory that holds the workbook; temp files are created here so the rename stays on
    /// one filesystem.
    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn temp_prefix(&self) -> String {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "source".to_string());
        format!(".{name}.")
    }
}

impl SourceStore for FileSourceStore {
    fn current(&self) -> SchoolsResult<Vec<u8>> {
        read_source(&self.path)
    }

    fn replace(&self, bytes: &[u8]) -> SchoolsResult<()> {
        let dir = self.dir();
        fs::create_dir_all(dir)?;

        // Dropping the temp file on an early return removes it.
        let mut tmp = tempfile::Builder::new()
            .prefix(&self.temp_prefix())
            .suffix(".tmp")
            .tempfile_in(dir)?;
        tmp.write_all(bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| SchoolsError::Io(e.error))?;
        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Read a workbook file, mapping "not found" to [`SchoolsError::SourceNotFound`].
pub fn read_source(path: &Path) -> SchoolsResult<Vec<u8>> {
    fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SchoolsError::SourceNotFound {
            location: path.display().to_string(),
        },
        _ => SchoolsError::Io(e),
    })
}

/// Only `.xlsx` uploads are accepted (case-insensitive).
pub fn accepts_upload_name(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"))
}

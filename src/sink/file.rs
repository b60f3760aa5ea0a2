//! Append-mode log file, opened once at setup and held for the logger's lifetime.

use super::Sink;
use crate::internal;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    /// The lock keeps each record's bytes contiguous when threads share the sink.
    file: Mutex<File>,
}

impl FileSink {
    /// Opens `path` for appending, creating it if missing. The parent directory must exist.
    ///
    /// # Errors
    /// [`crate::Error::OpenFile`] when the file cannot be created or opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, crate::Error> {
        let path = path.as_ref().to_path_buf();
        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        match options.open(&path) {
            Ok(file) => {
                internal::debug("FILE", &format!("Opened log file: {}", path.display()));
                Ok(Self {
                    path,
                    file: Mutex::new(file),
                })
            }
            Err(source) => Err(crate::Error::OpenFile { path, source }),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write(&self, bytes: &[u8]) -> io::Result<()> {
        // A panicking writer cannot leave the file in a state we need to reject.
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        file.write_all(bytes)
    }

    fn flush(&self) -> io::Result<()> {
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        file.flush()
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let file = self.file.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = file.sync_data() {
            internal::warn(
                "FILE",
                &format!("Failed to sync {} on close: {e}", self.path.display()),
            );
        }
    }
}

//! Size-rotated log file.
//!
//! [`FileWriter`] is a cloneable handle to one log file. Every write checks the
//! current file size first; once it passes the limit the file is renamed to
//! `<name>.<unix-seconds>` and a fresh file is started. Only the newest
//! backups are retained.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Rotate once the log passes 10 MB.
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Rotated files kept besides the live one.
const MAX_BACKUP_FILES: usize = 3;

#[derive(Debug)]
struct Inner {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    /// Opened on first write.
    file: Mutex<Option<File>>,
}

/// Cloneable handle to a rotating log file.
///
/// Suitable as a `tracing-subscriber` writer: each formatted event arrives as
/// one `write_all`, so an event never straddles two files.
#[derive(Debug, Clone)]
pub struct FileWriter {
    inner: Arc<Inner>,
}

impl FileWriter {
    /// Creates a writer with the default limits (10 MB, 3 backups).
    #[must_use]
    pub fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Creates a writer with explicit rotation limits.
    #[must_use]
    pub fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            inner: Arc::new(Inner {
                file_path,
                max_bytes,
                max_backups,
                file: Mutex::new(None),
            }),
        }
    }

    /// Path of the live log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.inner.file_path
    }

    fn rotate_if_needed(&self, file: &mut Option<File>) -> io::Result<()> {
        let Ok(metadata) = fs::metadata(&self.inner.file_path) else {
            return Ok(());
        };
        if metadata.len() <= self.inner.max_bytes {
            return Ok(());
        }

        *file = None;
        let backup = backup_path(&self.inner.file_path, chrono::Utc::now().timestamp());
        fs::rename(&self.inner.file_path, backup)?;
        self.prune_backups()
    }

    fn prune_backups(&self) -> io::Result<()> {
        let path = &self.inner.file_path;
        let (Some(dir), Some(name)) = (path.parent(), path.file_name().and_then(|n| n.to_str()))
        else {
            return Ok(());
        };
        let prefix = format!("{name}.");

        let mut backups: Vec<(u64, PathBuf)> = fs::read_dir(dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter_map(|p| {
                let stamp = p
                    .file_name()
                    .and_then(|n| n.to_str())
                    .and_then(|n| n.strip_prefix(&prefix))
                    .and_then(|suffix| suffix.parse::<u64>().ok())?;
                Some((stamp, p))
            })
            .collect();

        backups.sort_unstable_by(|a, b| b.0.cmp(&a.0));
        for (_, stale) in backups.iter().skip(self.inner.max_backups) {
            let _ = fs::remove_file(stale);
        }
        Ok(())
    }
}

fn backup_path(path: &Path, timestamp: i64) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".{timestamp}"));
    PathBuf::from(name)
}

impl Write for FileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .inner
            .file
            .lock()
            .map_err(|e| io::Error::other(format!("log file lock poisoned: {e}")))?;

        self.rotate_if_needed(&mut *file)?;

        if file.is_none() {
            *file = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.inner.file_path)?,
            );
        }
        if let Some(handle) = file.as_mut() {
            handle.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .inner
            .file
            .lock()
            .map_err(|e| io::Error::other(format!("log file lock poisoned: {e}")))?;
        file.as_mut().map_or(Ok(()), |handle| handle.flush())
    }
}

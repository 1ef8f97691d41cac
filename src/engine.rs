//! Engine Module
//!
//! The storage engine: an append-only record log plus an in-memory index.
//!
//! ## Responsibilities
//! - Append one record per write, never rewrite the log
//! - Answer point lookups through the index
//! - Persist the index to the snapshot file on close
//! - Rebuild the index from the snapshot on open
//!
//! ## Known limitations
//! - Deleted and overwritten records stay in the log (no compaction)
//! - The index only survives a restart through [`Store::close`]; records
//!   written after the last snapshot are unreachable after reopening
//! - Two processes opening the same log is unsupported

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::config::Config;
use crate::error::{BoxerError, Result};
use crate::protocol::Command;
use crate::store::{encode_record, parse_record, Index, IndexEntry};

/// Suffix appended to the log path to name the snapshot file
pub const SNAPSHOT_SUFFIX: &str = ".snapshot";

/// Snapshot file path for a given log path: `<path>.snapshot`
pub fn snapshot_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(SNAPSHOT_SUFFIX);
    PathBuf::from(name)
}

/// The storage engine handle
///
/// ## Concurrency Model: Shared Read / Exclusive Write
///
/// - **Reads** (read, len, keys): share the index read lock, and read the
///   log with positional I/O so readers never move a shared cursor
/// - **Writes** (write, delete): hold the index write lock for the whole
///   append + index update, so no reader sees a half-written record
///
/// Both files are owned by the handle and closed when it is dropped or
/// consumed by [`Store::close`].
pub struct Store {
    /// Path of the record log
    log_path: PathBuf,

    /// Path of the index snapshot
    snapshot_path: PathBuf,

    /// Record log, opened in append mode
    log: File,

    /// Index snapshot, rewritten on close
    snapshot: File,

    /// Key → newest record location
    index: RwLock<Index>,
}

impl Store {
    /// Create a store with an empty index
    ///
    /// Creates the log and snapshot files if needed. Existing log content
    /// is kept but not indexed; use [`Store::open`] to recover a store.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let log_path = path.as_ref().to_path_buf();
        let snapshot_path = snapshot_path_for(&log_path);

        let log = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&log_path)?;

        let snapshot = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(&snapshot_path)?;

        tracing::debug!("Created store at {}", log_path.display());

        Ok(Self {
            log_path,
            snapshot_path,
            log,
            snapshot,
            index: RwLock::new(Index::new()),
        })
    }

    /// Recover a store from an existing log and snapshot pair
    ///
    /// Fails with:
    /// - `FileNotFound` if the log file does not exist
    /// - `SnapshotNotFound` if the snapshot file does not exist
    /// - `Decode` if the snapshot cannot be deserialized, or an entry points
    ///   outside the log
    ///
    /// There is no fallback to scanning the log.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let log_path = path.as_ref().to_path_buf();
        if !log_path.exists() {
            return Err(BoxerError::FileNotFound(log_path));
        }

        let snapshot_path = snapshot_path_for(&log_path);
        if !snapshot_path.exists() {
            return Err(BoxerError::SnapshotNotFound(snapshot_path));
        }

        let log = OpenOptions::new().read(true).append(true).open(&log_path)?;
        let mut snapshot = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&snapshot_path)?;

        let mut bytes = Vec::new();
        snapshot.read_to_end(&mut bytes)?;
        let index = Index::from_snapshot(&bytes)?;
        index.check_bounds(log.metadata()?.len())?;

        tracing::debug!(
            "Opened store at {} with {} indexed keys",
            log_path.display(),
            index.len()
        );

        Ok(Self {
            log_path,
            snapshot_path,
            log,
            snapshot,
            index: RwLock::new(index),
        })
    }

    /// Create a store at the configured data path
    pub fn with_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Self::create(&config.data_path)
    }

    /// Recover the store at the configured data path
    pub fn open_with_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Self::open(&config.data_path)
    }

    /// Append a record and point the key's index entry at it
    ///
    /// The previous record for the key, if any, stays in the log
    /// unreachable. A failed append may leave partial bytes at the end of
    /// the log with no index entry.
    pub fn write(&self, key: &str, value: &str) -> Result<()> {
        let record = encode_record(key, value)?;

        let mut index = self.index.write();

        let mut log = &self.log;
        log.write_all(&record)?;
        let offset = log.seek(SeekFrom::End(0))?;

        index.insert(
            key.to_string(),
            IndexEntry::new(offset, record.len() as u64),
        );

        tracing::trace!("Wrote key {} ({} bytes, ends at {})", key, record.len(), offset);
        Ok(())
    }

    /// Read the newest value for a key
    ///
    /// Returns `KeyNotFound` for an unindexed key and `IncorrectKey` when
    /// the indexed record holds a different key.
    pub fn read(&self, key: &str) -> Result<String> {
        let index = self.index.read();

        let entry = *index
            .get(key)
            .ok_or_else(|| BoxerError::KeyNotFound(key.to_string()))?;

        let mut buffer = vec![0u8; entry.length as usize];
        read_exact_at(&self.log, &mut buffer, entry.start()?)?;
        drop(index);

        let (found, value) = parse_record(&buffer)?;
        if found != key {
            tracing::warn!(
                "Index points key {} at a record for key {} in {}",
                key,
                found,
                self.log_path.display()
            );
            return Err(BoxerError::IncorrectKey {
                expected: key.to_string(),
                found,
            });
        }

        Ok(value)
    }

    /// Remove a key from the index
    ///
    /// The log is untouched: no tombstone is written.
    pub fn delete(&self, key: &str) -> Result<()> {
        let mut index = self.index.write();

        index
            .remove(key)
            .ok_or_else(|| BoxerError::KeyNotFound(key.to_string()))?;

        tracing::trace!("Deleted key {}", key);
        Ok(())
    }

    /// Execute a command
    ///
    /// Routes commands to appropriate handlers
    pub fn execute(&self, command: Command) -> Result<Option<String>> {
        match command {
            Command::Set { key, value } => {
                self.write(&key, &value)?;
                Ok(None)
            }
            Command::Get { key } => self.read(&key).map(Some),
            Command::Del { key } => {
                self.delete(&key)?;
                Ok(None)
            }
            Command::Ping => Ok(Some("PONG".to_string())),
        }
    }

    /// Write the index to the snapshot file and release both files
    ///
    /// The files are closed on every path out of this method, including a
    /// failed serialization.
    pub fn close(self) -> Result<()> {
        let Store {
            log_path,
            log,
            mut snapshot,
            index,
            ..
        } = self;

        let index = index.into_inner();
        let bytes = index.to_snapshot()?;

        snapshot.set_len(0)?;
        snapshot.seek(SeekFrom::Start(0))?;
        snapshot.write_all(&bytes)?;
        snapshot.sync_all()?;
        log.sync_all()?;

        tracing::debug!(
            "Closed store at {} ({} keys in snapshot)",
            log_path.display(),
            index.len()
        );
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of live keys
    pub fn len(&self) -> usize {
        self.index.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.read().is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.read().contains(key)
    }

    /// Live keys in sorted order
    pub fn keys(&self) -> Vec<String> {
        self.index.read().sorted_keys()
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }
}

/// Positional read that leaves the file cursor alone
#[cfg(unix)]
fn read_exact_at(file: &File, buffer: &mut [u8], offset: u64) -> std::io::Result<()> {
    use std::os::unix::fs::FileExt;
    file.read_exact_at(buffer, offset)
}

#[cfg(windows)]
fn read_exact_at(file: &File, mut buffer: &mut [u8], mut offset: u64) -> std::io::Result<()> {
    use std::os::windows::fs::FileExt;
    while !buffer.is_empty() {
        match file.seek_read(buffer, offset) {
            Ok(0) => {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "failed to fill whole buffer",
                ))
            }
            Ok(n) => {
                let rest = buffer;
                buffer = &mut rest[n..];
                offset += n as u64;
            }
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

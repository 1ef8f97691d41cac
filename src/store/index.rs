//! In-memory index
//!
//! Maps every live key to the byte range of its newest record in the log.
//! The whole index is written to the snapshot file on close and read back
//! on open.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{BoxerError, Result};

/// Location of one record in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Byte position immediately after the record
    pub offset: u64,

    /// Total record length in bytes, terminator included
    pub length: u64,
}

impl IndexEntry {
    pub fn new(offset: u64, length: u64) -> Self {
        Self { offset, length }
    }

    /// Byte position where the record starts
    pub fn start(&self) -> Result<u64> {
        self.offset.checked_sub(self.length).ok_or_else(|| {
            BoxerError::Decode(format!(
                "index entry length {} exceeds offset {}",
                self.length, self.offset
            ))
        })
    }
}

/// Key → newest record location
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    entries: HashMap<String, IndexEntry>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for a key
    pub fn insert(&mut self, key: String, entry: IndexEntry) -> Option<IndexEntry> {
        self.entries.insert(key, entry)
    }

    pub fn get(&self, key: &str) -> Option<&IndexEntry> {
        self.entries.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<IndexEntry> {
        self.entries.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in sorted order
    pub fn sorted_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Check that every entry addresses a byte range inside a log of
    /// `log_len` bytes
    pub fn check_bounds(&self, log_len: u64) -> Result<()> {
        for (key, entry) in &self.entries {
            entry.start()?;
            if entry.offset > log_len {
                return Err(BoxerError::Decode(format!(
                    "index entry for key {} ends at {} past log end {}",
                    key, entry.offset, log_len
                )));
            }
        }
        Ok(())
    }

    // =========================================================================
    // Snapshot encoding
    // =========================================================================

    /// Serialize the whole index for the snapshot file
    pub fn to_snapshot(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| BoxerError::Serialization(e.to_string()))
    }

    /// Rebuild an index from snapshot bytes
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes)
            .map_err(|e| BoxerError::Decode(format!("malformed index snapshot: {}", e)))
    }
}

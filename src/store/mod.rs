//! Store Module
//!
//! Building blocks of the storage engine: the on-disk record format and the
//! in-memory index over it.
//!
//! ## Log File Format
//! ```text
//! ┌──────────────────────────────┐
//! │ key:::value\n                │  ← record 1
//! ├──────────────────────────────┤
//! │ key:::value\n                │  ← record 2 (may orphan record 1)
//! ├──────────────────────────────┤
//! │ ...                          │
//! └──────────────────────────────┘
//! ```
//!
//! The log is not self-describing: record boundaries live only in the
//! index, which is persisted to `<log>.snapshot` on close.

mod index;
mod record;

pub use index::{Index, IndexEntry};
pub use record::{encode_record, parse_record, DELIMITER, LINE_TERMINATOR};

//! # Boxer
//!
//! A minimal single-node key-value store with:
//! - An append-only record log
//! - An in-memory index persisted as a snapshot on close
//! - Shared-read / exclusive-write concurrency
//! - A RESP-style command codec
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────┐   frame    ┌──────────────────────────────┐
//! │    Client    │ ─────────► │   Server (not in this crate) │
//! │ (codec enc.) │ ◄───────── │  decode → dispatch → reply   │
//! └──────────────┘   reply    └──────────────┬───────────────┘
//!                                            │
//!                                            ▼
//!                                   ┌─────────────────┐
//!                                   │      Store      │
//!                                   │  (RwLock index) │
//!                                   └────────┬────────┘
//!                                            │
//!                              ┌─────────────┴─────────────┐
//!                              ▼                           ▼
//!                       ┌─────────────┐            ┌──────────────┐
//!                       │  Record log │            │   Snapshot   │
//!                       │  (append)   │            │ (on close)   │
//!                       └─────────────┘            └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod network;
pub mod protocol;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{BoxerError, Result};
pub use config::Config;
pub use engine::Store;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Boxer
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

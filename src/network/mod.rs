//! Network Module
//!
//! Client side of the wire protocol.
//!
//! ## Request Lifecycle
//! - Connect to the server
//! - Write one encoded frame
//! - Read one reply line
//! - Close the connection
//!
//! Listening and dispatch belong to the server, which is not part of this
//! crate.

mod client;

pub use client::Client;

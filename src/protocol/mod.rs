//! Protocol Module
//!
//! Defines the wire protocol for client-server communication.
//!
//! ## Request Format (array of bulk strings)
//! ```text
//! *3\r\n
//! $3\r\nSET\r\n
//! $5\r\nhello\r\n
//! $5\r\nworld\r\n
//! ```
//!
//! ### Commands
//! - `SET key value`
//! - `GET key`
//! - `DEL key`
//! - `PING`
//!
//! ### Response Format
//! One reply per request:
//! - `+OK`, `+PONG` status lines
//! - `$<len>\r\n<value>` for values, carried verbatim
//! - `-NOTFOUND <key>` when the key is absent
//! - `-ERR <message>` for anything else
//!
//! The codec is stateless and safe to call from any thread.

mod codec;
mod command;
mod response;

pub use codec::{decode, encode, FrameDecoder, PositionalDecoder, TERMINATOR, TYPE_PREFIXES};
pub use command::{Command, CommandType};
pub use response::Response;

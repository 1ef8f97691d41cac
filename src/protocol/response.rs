//! Response definitions
//!
//! Represents the replies sent back to clients.
//!
//! ## Reply Format
//! ```text
//! +OK\r\n                 status
//! +PONG\r\n               status
//! $<len>\r\n<value>\r\n   value, len = value byte length
//! -NOTFOUND <key>\r\n     absent key
//! -ERR <message>\r\n      any other failure
//! ```

use std::fmt;

use crate::error::{BoxerError, Result};

use super::{CommandType, TERMINATOR};

/// A response to send to client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Mutation accepted
    Ok,

    /// Reply to PING
    Pong,

    /// Value for GET
    Value(String),

    /// Key is absent
    NotFound(String),

    /// Any other failure, including index/log corruption
    Error(String),
}

impl Response {
    /// Map an engine result onto a response
    ///
    /// `KeyNotFound` stays distinct from every other error.
    pub fn from_result(result: Result<Option<String>>) -> Self {
        match result {
            Ok(Some(value)) => Response::Value(value),
            Ok(None) => Response::Ok,
            Err(BoxerError::KeyNotFound(key)) => Response::NotFound(key),
            Err(e) => Response::Error(e.to_string()),
        }
    }

    /// Map the result of executing a command of the given type
    ///
    /// A successful PING answers with the `PONG` status rather than a value.
    pub fn for_command(command_type: CommandType, result: Result<Option<String>>) -> Self {
        match (command_type, result) {
            (CommandType::Ping, Ok(_)) => Response::Pong,
            (_, result) => Response::from_result(result),
        }
    }

    /// Encode for the wire
    ///
    /// Values are length-prefixed and carried verbatim. Status and error
    /// lines have line breaks replaced by spaces so they stay on one line.
    pub fn encode(&self) -> String {
        match self {
            Response::Ok => format!("+OK{}", TERMINATOR),
            Response::Pong => format!("+PONG{}", TERMINATOR),
            Response::Value(value) => {
                format!("${}{}{}{}", value.len(), TERMINATOR, value, TERMINATOR)
            }
            Response::NotFound(key) => {
                format!("-NOTFOUND {}{}", single_line(key), TERMINATOR)
            }
            Response::Error(message) => {
                format!("-ERR {}{}", single_line(message), TERMINATOR)
            }
        }
    }

    /// Parse a complete reply (trailing terminator optional)
    pub fn parse(reply: &str) -> Result<Self> {
        if let Some(rest) = reply.strip_prefix('$') {
            return parse_value(rest);
        }

        let line = reply.strip_suffix(TERMINATOR).unwrap_or(reply);
        let line = line.strip_suffix('\n').unwrap_or(line);

        if let Some(status) = line.strip_prefix('+') {
            return match status {
                "OK" => Ok(Response::Ok),
                "PONG" => Ok(Response::Pong),
                _ => Err(BoxerError::Protocol(format!(
                    "unknown status reply: {:?}",
                    status
                ))),
            };
        }

        if let Some(body) = line.strip_prefix('-') {
            if let Some(key) = body.strip_prefix("NOTFOUND ") {
                return Ok(Response::NotFound(key.to_string()));
            }
            let message = body.strip_prefix("ERR ").unwrap_or(body);
            return Ok(Response::Error(message.to_string()));
        }

        Err(BoxerError::Protocol(format!("unrecognized reply: {:?}", line)))
    }

    /// Whether the response reports a failure
    pub fn is_error(&self) -> bool {
        matches!(self, Response::NotFound(_) | Response::Error(_))
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Ok => write!(f, "OK"),
            Response::Pong => write!(f, "PONG"),
            Response::Value(value) => write!(f, "{:?}", value),
            Response::NotFound(key) => write!(f, "(not found) {}", key),
            Response::Error(message) => write!(f, "(error) {}", message),
        }
    }
}

/// Parse `<len>\r\n<value>\r\n`, taking exactly `len` bytes of value
fn parse_value(rest: &str) -> Result<Response> {
    let (header, body) = rest
        .split_once(TERMINATOR)
        .ok_or_else(|| BoxerError::Protocol("value reply without length header".to_string()))?;

    let len: usize = header
        .parse()
        .map_err(|_| BoxerError::Protocol(format!("invalid value length: {:?}", header)))?;

    if body.len() < len || !body.is_char_boundary(len) {
        return Err(BoxerError::Protocol(format!(
            "value reply truncated: expected {} bytes, got {}",
            len,
            body.len()
        )));
    }

    let (value, trailer) = body.split_at(len);
    if !trailer.is_empty() && trailer != TERMINATOR {
        return Err(BoxerError::Protocol(format!(
            "unexpected bytes after value: {:?}",
            trailer
        )));
    }

    Ok(Response::Value(value.to_string()))
}

fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

//! Client
//!
//! Sends commands to a server, one TCP connection per request.

use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::net::TcpStream;
use std::time::Duration;

use crate::config::Config;
use crate::error::{BoxerError, Result};
use crate::protocol::{encode, Command, Response, TERMINATOR};

/// Talks to a server at a fixed address
///
/// Every request opens a fresh connection, writes one frame, reads one
/// reply and closes the connection. A reply is a single line (up to `\r\n`
/// or end of stream), or for values a `$<len>` line followed by exactly
/// `len` bytes and a terminator.
#[derive(Debug, Clone)]
pub struct Client {
    /// Server address (host:port)
    addr: String,

    /// Read timeout, `None` blocks forever
    read_timeout: Option<Duration>,

    /// Write timeout, `None` blocks forever
    write_timeout: Option<Duration>,
}

impl Client {
    /// Create a client without timeouts
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            read_timeout: None,
            write_timeout: None,
        }
    }

    /// Create a client from the network section of a config
    pub fn from_config(config: &Config) -> Self {
        Self {
            addr: config.server_addr.clone(),
            read_timeout: timeout_from_ms(config.read_timeout_ms),
            write_timeout: timeout_from_ms(config.write_timeout_ms),
        }
    }

    /// Send raw command parts and return the reply exactly as received
    pub fn send<S: AsRef<str>>(&self, command: &[S]) -> Result<String> {
        let frame = encode(command);

        let stream = TcpStream::connect(&self.addr).map_err(|e| {
            BoxerError::Network(format!("can't connect to {}: {}", self.addr, e))
        })?;
        stream.set_nodelay(true)?;
        stream.set_read_timeout(self.read_timeout)?;
        stream.set_write_timeout(self.write_timeout)?;

        tracing::debug!("Sending {} byte frame to {}", frame.len(), self.addr);

        let mut writer = BufWriter::new(stream.try_clone()?);
        writer.write_all(frame.as_bytes())?;
        writer.flush()?;

        let mut reader = BufReader::new(stream);
        let reply = read_reply(&mut reader)?;

        tracing::trace!("Reply from {}: {:?}", self.addr, reply);
        Ok(reply)
    }

    /// Send a typed command and classify the reply
    pub fn execute(&self, command: &Command) -> Result<Response> {
        let reply = self.send(&command.to_parts())?;
        Response::parse(&reply)
    }

    /// Get the server address
    pub fn addr(&self) -> &str {
        &self.addr
    }
}

/// Read one reply: a status line, or a value header plus its body
fn read_reply<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut reply = String::new();
    reader.read_line(&mut reply)?;

    let len = match reply.strip_prefix('$') {
        Some(header) => {
            let header = header.trim_end_matches(['\r', '\n']);
            header.parse::<u64>().map_err(|_| {
                BoxerError::Protocol(format!("invalid value length: {:?}", header))
            })?
        }
        None => return Ok(reply),
    };

    // Body plus terminator; stops early at end of stream
    let mut body = Vec::new();
    reader
        .take(len + TERMINATOR.len() as u64)
        .read_to_end(&mut body)?;

    let body = String::from_utf8(body)
        .map_err(|e| BoxerError::Protocol(format!("value reply is not valid UTF-8: {}", e)))?;
    reply.push_str(&body);

    Ok(reply)
}

fn timeout_from_ms(ms: u64) -> Option<Duration> {
    if ms > 0 {
        Some(Duration::from_millis(ms))
    } else {
        None
    }
}

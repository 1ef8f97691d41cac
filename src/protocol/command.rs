//! Command definitions
//!
//! Represents commands from clients.

use std::mem;

use crate::error::{BoxerError, Result};

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Set,
    Get,
    Del,
    Ping,
}

impl CommandType {
    /// Canonical wire name
    pub fn name(&self) -> &'static str {
        match self {
            CommandType::Set => "SET",
            CommandType::Get => "GET",
            CommandType::Del => "DEL",
            CommandType::Ping => "PING",
        }
    }

    /// Number of arguments after the command name
    pub fn arity(&self) -> usize {
        match self {
            CommandType::Set => 2,
            CommandType::Get | CommandType::Del => 1,
            CommandType::Ping => 0,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "SET" => Some(CommandType::Set),
            "GET" => Some(CommandType::Get),
            "DEL" => Some(CommandType::Del),
            "PING" => Some(CommandType::Ping),
            _ => None,
        }
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set a key-value pair
    Set { key: String, value: String },

    /// Get a value by key
    Get { key: String },

    /// Delete a key
    Del { key: String },

    /// Ping (health check)
    Ping,
}

impl Command {
    /// Build a command from decoded wire parts
    ///
    /// The command name is case-insensitive; argument counts are exact.
    pub fn parse(parts: Vec<String>) -> Result<Self> {
        let mut parts = parts.into_iter();
        let name = parts
            .next()
            .ok_or_else(|| BoxerError::Protocol("empty command".to_string()))?;

        let command_type = CommandType::from_name(&name)
            .ok_or_else(|| BoxerError::Protocol(format!("unknown command '{}'", name)))?;

        let mut args: Vec<String> = parts.collect();
        let command = match (command_type, args.as_mut_slice()) {
            (CommandType::Set, [key, value]) => Command::Set {
                key: mem::take(key),
                value: mem::take(value),
            },
            (CommandType::Get, [key]) => Command::Get { key: mem::take(key) },
            (CommandType::Del, [key]) => Command::Del { key: mem::take(key) },
            (CommandType::Ping, []) => Command::Ping,
            (command_type, args) => {
                return Err(BoxerError::Protocol(format!(
                    "wrong number of arguments for '{}': expected {}, got {}",
                    command_type.name(),
                    command_type.arity(),
                    args.len()
                )))
            }
        };

        Ok(command)
    }

    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Set { .. } => CommandType::Set,
            Command::Get { .. } => CommandType::Get,
            Command::Del { .. } => CommandType::Del,
            Command::Ping => CommandType::Ping,
        }
    }

    /// Wire parts, ready for [`encode`](super::encode)
    pub fn to_parts(&self) -> Vec<String> {
        let name = self.command_type().name().to_string();
        match self {
            Command::Set { key, value } => vec![name, key.clone(), value.clone()],
            Command::Get { key } | Command::Del { key } => vec![name, key.clone()],
            Command::Ping => vec![name],
        }
    }
}

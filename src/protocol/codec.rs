//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//!
//! ### Request (Command) Format
//! ```text
//! *<N>\r\n                  array header, N = element count
//! $<len>\r\n<element>\r\n   repeated N times, len = element byte length
//! ```
//!
//! `SET hello world` travels as
//! `*3\r\n$3\r\nSET\r\n$5\r\nhello\r\n$5\r\nworld\r\n`.

/// Field separator used by every frame
pub const TERMINATOR: &str = "\r\n";

/// Leading characters that mark a field as a type header, not data
pub const TYPE_PREFIXES: [char; 5] = ['+', '-', ':', '$', '*'];

// =============================================================================
// Encoding
// =============================================================================

/// Encode a command into a frame
///
/// No escaping is performed: elements are written verbatim after their
/// byte-length header. An empty command encodes to `*0\r\n`.
pub fn encode<S: AsRef<str>>(command: &[S]) -> String {
    let body_len: usize = command
        .iter()
        .map(|element| element.as_ref().len() + 16)
        .sum();
    let mut frame = String::with_capacity(16 + body_len);

    frame.push_str(&format!("*{}{}", command.len(), TERMINATOR));
    for element in command {
        let element = element.as_ref();
        frame.push_str(&format!("${}{}", element.len(), TERMINATOR));
        frame.push_str(element);
        frame.push_str(TERMINATOR);
    }

    frame
}

// =============================================================================
// Decoding
// =============================================================================

/// Turns a frame back into the strings it carries
///
/// Callers go through this trait (or [`decode`]) so the positional decoder
/// can later be replaced by a stricter parser.
pub trait FrameDecoder: Send + Sync {
    fn decode(&self, frame: &str) -> Vec<String>;
}

/// Positional frame decoder
///
/// Splits the frame on `\r\n`, drops the first two fields (the array header
/// and the first length header) by position, then keeps every field that
/// is longer than one character and does not start with a type prefix.
///
/// Consequences worth knowing:
/// - empty and single-character elements are dropped
/// - an element starting with `+ - : $ *` is dropped
/// - nested arrays are not understood
#[derive(Debug, Default, Clone, Copy)]
pub struct PositionalDecoder;

impl FrameDecoder for PositionalDecoder {
    fn decode(&self, frame: &str) -> Vec<String> {
        frame
            .split(TERMINATOR)
            .skip(2)
            .filter(|field| is_data_field(field))
            .map(str::to_string)
            .collect()
    }
}

/// Decode a frame with the default positional decoder
pub fn decode(frame: &str) -> Vec<String> {
    PositionalDecoder.decode(frame)
}

fn is_data_field(field: &str) -> bool {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(_)) => !TYPE_PREFIXES.contains(&first),
        _ => false,
    }
}

//! Log record encoding
//!
//! One record per write: `<key>:::<value>\n`. Records carry no length
//! prefix; the index remembers where each one ends and how long it is.

use crate::error::{BoxerError, Result};

/// Separator between key and value inside a record
pub const DELIMITER: &str = ":::";

/// Terminator appended after every record
pub const LINE_TERMINATOR: char = '\n';

/// Serialize a key/value pair into record bytes
///
/// Keys containing the delimiter are rejected, since the key could not be
/// recovered from the record afterwards.
pub fn encode_record(key: &str, value: &str) -> Result<Vec<u8>> {
    if key.contains(DELIMITER) {
        return Err(BoxerError::InvalidRecord(format!(
            "key {:?} contains the record delimiter {:?}",
            key, DELIMITER
        )));
    }

    let mut record = Vec::with_capacity(key.len() + DELIMITER.len() + value.len() + 1);
    record.extend_from_slice(key.as_bytes());
    record.extend_from_slice(DELIMITER.as_bytes());
    record.extend_from_slice(value.as_bytes());
    record.push(LINE_TERMINATOR as u8);

    Ok(record)
}

/// Parse record bytes back into `(key, value)`
///
/// Splits at the first delimiter and strips one trailing line terminator
/// from the value.
pub fn parse_record(bytes: &[u8]) -> Result<(String, String)> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| BoxerError::Decode(format!("record is not valid UTF-8: {}", e)))?;

    let (key, value) = text
        .split_once(DELIMITER)
        .ok_or_else(|| BoxerError::Decode("can't decode entry from file".to_string()))?;

    let value = value.strip_suffix(LINE_TERMINATOR).unwrap_or(value);

    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_layout() {
        let record = encode_record("hello", "world").unwrap();
        assert_eq!(record, b"hello:::world\n");
    }

    #[test]
    fn test_encode_rejects_delimiter_in_key() {
        let result = encode_record("a:::b", "value");
        assert!(matches!(result, Err(BoxerError::InvalidRecord(_))));
    }

    #[test]
    fn test_parse_strips_single_terminator() {
        let (key, value) = parse_record(b"k:::line\n\n").unwrap();
        assert_eq!(key, "k");
        assert_eq!(value, "line\n");
    }

    #[test]
    fn test_parse_value_may_contain_delimiter() {
        let (key, value) = parse_record(b"k:::a:::b\n").unwrap();
        assert_eq!(key, "k");
        assert_eq!(value, "a:::b");
    }

    #[test]
    fn test_parse_without_delimiter_fails() {
        let result = parse_record(b"garbage\n");
        assert!(matches!(result, Err(BoxerError::Decode(_))));
    }

    #[test]
    fn test_parse_invalid_utf8_fails() {
        let result = parse_record(&[0xff, 0xfe, b':', b':', b':', b'x']);
        assert!(matches!(result, Err(BoxerError::Decode(_))));
    }

    #[test]
    fn test_empty_value() {
        let record = encode_record("k", "").unwrap();
        let (key, value) = parse_record(&record).unwrap();
        assert_eq!(key, "k");
        assert_eq!(value, "");
    }
}

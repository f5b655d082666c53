use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::error::{InvalidInputError, Result};

/// Parses a JSON file into a given type `T`.
///
/// Errors are converted into `crate::error::Error` variants:
/// - `Error::IoError` if the file cannot be read.
/// - `Error::DeserializationError` if the JSON is malformed.
pub fn parse_json_file<T: DeserializeOwned>(file_path: impl AsRef<Path>) -> Result<T> {
    let data = fs::read_to_string(file_path)?;
    let parsed_data: T = serde_json::from_str(&data)?;

    Ok(parsed_data)
}

/// Parses the initial head position from free text, ignoring surrounding whitespace.
pub fn parse_head_position(text: &str) -> std::result::Result<i64, InvalidInputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InvalidInputError::MissingHeadPosition);
    }

    trimmed.parse::<i64>().map_err(|_| InvalidInputError::NonNumericHeadPosition(trimmed.to_string()))
}

/// Parses a comma separated request list such as `"98, 183, 37"`.
///
/// Every token must be an integer; an empty token (`"5,,6"`) is rejected as well.
pub fn parse_requests(text: &str) -> std::result::Result<Vec<i64>, InvalidInputError> {
    if text.trim().is_empty() {
        return Err(InvalidInputError::MissingRequests);
    }

    text.split(',')
        .enumerate()
        .map(|(i, token)| {
            let token = token.trim();
            token.parse::<i64>().map_err(|_| InvalidInputError::NonNumericRequest {
                position: i + 1,
                token: token.to_string(),
            })
        })
        .collect()
}

pub fn parse_disk_size(text: &str) -> std::result::Result<i64, InvalidInputError> {
    let trimmed = text.trim();
    trimmed.parse::<i64>().map_err(|_| InvalidInputError::NonNumericDiskSize(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_requests_trims_tokens() {
        assert_eq!(parse_requests(" 98,183 , 37,-4 "), Ok(vec![98, 183, 37, -4]));
    }

    #[test]
    fn test_parse_requests_reports_first_bad_token() {
        assert_eq!(
            parse_requests("5, abc, 10"),
            Err(InvalidInputError::NonNumericRequest { position: 2, token: "abc".to_string() })
        );
    }

    #[test]
    fn test_parse_requests_rejects_empty_token() {
        assert_eq!(
            parse_requests("5,,6"),
            Err(InvalidInputError::NonNumericRequest { position: 2, token: String::new() })
        );
    }

    #[test]
    fn test_parse_requests_rejects_blank_input() {
        assert_eq!(parse_requests("   "), Err(InvalidInputError::MissingRequests));
    }

    #[test]
    fn test_parse_head_position() {
        assert_eq!(parse_head_position(" 53 "), Ok(53));
        assert_eq!(parse_head_position(""), Err(InvalidInputError::MissingHeadPosition));
        assert_eq!(parse_head_position("5x"), Err(InvalidInputError::NonNumericHeadPosition("5x".to_string())));
    }

    #[test]
    fn test_parse_disk_size() {
        assert_eq!(parse_disk_size("200"), Ok(200));
        assert_eq!(parse_disk_size("big"), Err(InvalidInputError::NonNumericDiskSize("big".to_string())));
    }
}

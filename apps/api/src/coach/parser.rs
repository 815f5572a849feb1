//! Response Parser: pulls a JSON object out of free-form model output.
//!
//! Best-effort extraction, fail closed: the first balanced `{...}` region is
//! deserialized into the expected payload and shape-checked. Anything else is a
//! `ParseError`, which sends the caller down the fallback path.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::coach::models::ShapeCheck;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no balanced JSON object found in model output")]
    NoJsonObject,

    #[error("embedded JSON did not match the expected payload: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("payload failed shape check: {0}")]
    ShapeMismatch(String),
}

/// Returns the first balanced `{...}` region of `text`.
///
/// Braces inside JSON string literals are ignored. If the first `{` never closes,
/// later opening braces are tried in turn.
pub fn extract_json_object(text: &str) -> Option<&str> {
    text.char_indices()
        .filter(|&(_, c)| c == '{')
        .find_map(|(start, _)| balanced_end(&text[start..]).map(|end| &text[start..start + end]))
}

/// Byte length of the balanced object at the start of `s`, if it closes.
fn balanced_end(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// Extracts, deserializes and shape-checks a payload from model output.
pub fn parse_structured<T>(text: &str) -> Result<T, ParseError>
where
    T: DeserializeOwned + ShapeCheck,
{
    let json = extract_json_object(text).ok_or(ParseError::NoJsonObject)?;
    let payload: T = serde_json::from_str(json)?;
    payload.check_shape().map_err(ParseError::ShapeMismatch)?;
    Ok(payload)
}

//! Utility functions and helpers.

pub mod http;

use url::Url;

use crate::error::Result;

/// Join an API path onto the base URL.
pub fn endpoint(base: &Url, path: &str) -> Result<Url> {
    Ok(base.join(path)?)
}

/// Replace characters that are unsafe in a file name with `_`.
pub fn sanitize_file_component(text: &str) -> String {
    let cleaned: String = text
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        "_".to_string()
    } else {
        cleaned
    }
}

//! Env file parsing.
//!
//! Parses dotenv-style files in the exact dialect the Android build step
//! expects: one `KEY=VALUE` pair per line, split at the first `=`, both
//! sides trimmed. No quote stripping and no variable interpolation — values
//! are taken verbatim after trimming, so `KEY="x"` keeps its quotes.

use crate::error::{EnvStitchError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Parse env file content into a map of properties.
///
/// Skipped without diagnostics: blank lines, lines whose first
/// non-whitespace character is `#`, and lines containing no `=`.
/// A repeated key overwrites the earlier value.
///
/// # Example
///
/// ```
/// use envstitch::env::parse_env_file;
///
/// let content = "# auth config\nAUTH0_DOMAIN = example.auth0.com\nFOO=bar=baz";
///
/// let props = parse_env_file(content);
/// assert_eq!(props.get("AUTH0_DOMAIN").map(String::as_str), Some("example.auth0.com"));
/// assert_eq!(props.get("FOO").map(String::as_str), Some("bar=baz"));
/// ```
pub fn parse_env_file(content: &str) -> HashMap<String, String> {
    let mut properties = HashMap::new();

    for line in content.lines() {
        let line = line.trim();

        // Skip blank lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Split KEY=VALUE at the first `=`; lines without one are skipped
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim().to_string();
            let value = line[eq_pos + 1..].trim().to_string();
            properties.insert(key, value);
        }
    }

    properties
}

/// Load and parse an env file from a path.
///
/// # Errors
///
/// Returns [`EnvStitchError::EnvFileRead`] if the file cannot be read.
/// Callers check existence first, so any read failure here is fatal.
pub fn load_env_file(path: &Path) -> Result<HashMap<String, String>> {
    let content = fs::read_to_string(path).map_err(|source| EnvStitchError::EnvFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_env_file(&content))
}

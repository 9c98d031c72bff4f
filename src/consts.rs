//! Project-wide constants.

use std::path::PathBuf;

/// Default Gemini model when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variable holding the Gemini API key.
pub const GEMINI_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable holding the remote analysis service URL.
pub const REMOTE_URL_ENV: &str = "SAFESCAN_REMOTE_URL";

/// Config store keys.
pub const KEY_GEMINI_API_KEY: &str = "gemini_api_key";
pub const KEY_REMOTE_URL: &str = "remote_url";
pub const KEY_MODEL: &str = "model";

/// Default config database path: `~/.safescan/safescan.db`.
pub fn default_db_path() -> PathBuf {
    dirs::home_dir()
        .expect("cannot determine home directory")
        .join(".safescan")
        .join("safescan.db")
}

/// Format a number with comma separators (e.g. 1,234,567).
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consts_are_non_empty() {
        assert!(!DEFAULT_MODEL.is_empty());
        assert!(!GEMINI_KEY_ENV.is_empty());
        assert!(!REMOTE_URL_ENV.is_empty());
    }

    #[test]
    fn config_keys_are_distinct() {
        assert_ne!(KEY_GEMINI_API_KEY, KEY_REMOTE_URL);
        assert_ne!(KEY_REMOTE_URL, KEY_MODEL);
    }

    #[test]
    fn format_number_small() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
    }

    #[test]
    fn format_number_thousands() {
        assert_eq!(format_number(1_000), "1,000");
        assert_eq!(format_number(12_345), "12,345");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }
}

//! Config module - line-oriented `key: value` parser
//!
//! Game parameters (surface size, speeds, colors, layout) live in small text
//! files with one `key: value` pair per line:
//!
//! ```text
//! # Breakout
//! width: 96
//! paddle_speed: 60
//! foreground: #0095DD
//! ```
//!
//! The parser is tolerant and best-effort, not validating:
//!
//! - blank lines and `#` comment lines are ignored
//! - only the FIRST colon separates key from value; later colons belong to
//!   the value (`url: http://x:80` keeps the port)
//! - lines without a colon are silently skipped
//! - keys and values are trimmed; everything stays a string
//! - a duplicated key keeps the last value
//!
//! There are no parse errors. The typed getters extend the same ethos: a
//! missing or unparsable value reads as `None` and the caller falls back to
//! its default.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use tui_arcade_types::Rgb;

/// A flat string-to-string configuration mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    entries: HashMap<String, String>,
}

impl Config {
    /// Parse config text. Never fails; malformed lines are dropped.
    pub fn parse(text: &str) -> Self {
        let mut entries = HashMap::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            entries.insert(key.trim().to_string(), value.trim().to_string());
        }
        Self { entries }
    }

    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Ok(Self::parse(&text))
    }

    /// Overlay `other` on top of this config; entries in `other` win.
    ///
    /// Games ship complete defaults; a user file only needs the keys it
    /// changes.
    pub fn merge(&mut self, other: Config) {
        self.entries.extend(other.entries);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn get_u16(&self, key: &str) -> Option<u16> {
        self.get(key)?.parse().ok()
    }

    pub fn get_u32(&self, key: &str) -> Option<u32> {
        self.get(key)?.parse().ok()
    }

    pub fn get_f32(&self, key: &str) -> Option<f32> {
        self.get(key)?.parse().ok()
    }

    pub fn get_color(&self, key: &str) -> Option<Rgb> {
        Rgb::from_hex(self.get(key)?)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_one_entry_per_valid_line() {
        let config = Config::parse("width: 800\n# comment\nheight:600\nbad line\n");
        assert_eq!(config.len(), 2);
        assert_eq!(config.get("width"), Some("800"));
        assert_eq!(config.get("height"), Some("600"));
        assert_eq!(config.get("bad line"), None);
    }

    #[test]
    fn test_merge_overlays_entries() {
        let mut base = Config::parse("width: 96\nheight: 32\nfg: #0095DD\n");
        base.merge(Config::parse("width: 120\nball_speed: 80\n"));

        assert_eq!(base.get("width"), Some("120"));
        assert_eq!(base.get("height"), Some("32"));
        assert_eq!(base.get("ball_speed"), Some("80"));
        assert_eq!(base.len(), 4);
    }

    #[test]
    fn test_only_first_colon_splits() {
        let config = Config::parse("url: http://x:80\n");
        assert_eq!(config.get("url"), Some("http://x:80"));
    }

    #[test]
    fn test_blank_lines_and_comments_ignored() {
        let config = Config::parse("\n\n   \n# a: 1\n  # b: 2\nreal: 3\n");
        assert_eq!(config.len(), 1);
        assert_eq!(config.get("real"), Some("3"));
    }

    #[test]
    fn test_keys_and_values_are_trimmed() {
        let config = Config::parse("  padded key  :   padded value  \n");
        assert_eq!(config.get("padded key"), Some("padded value"));
    }

    #[test]
    fn test_duplicate_key_keeps_last_value() {
        let config = Config::parse("speed: 10\nspeed: 20\n");
        assert_eq!(config.get("speed"), Some("20"));
        assert_eq!(config.len(), 1);
    }

    #[test]
    fn test_empty_value_is_kept() {
        let config = Config::parse("title:\n");
        assert_eq!(config.get("title"), Some(""));
    }

    #[test]
    fn test_typed_getters_fall_back_to_none() {
        let config = Config::parse("width: 96\nspeed: 60.5\ncolor: #0095DD\nbad: fast\n");
        assert_eq!(config.get_u16("width"), Some(96));
        assert_eq!(config.get_f32("speed"), Some(60.5));
        assert_eq!(config.get_color("color"), Some(Rgb::new(0x00, 0x95, 0xDD)));
        assert_eq!(config.get_u16("bad"), None);
        assert_eq!(config.get_f32("missing"), None);
        assert_eq!(config.get_color("bad"), None);
    }

    #[test]
    fn test_get_color_tolerates_multibyte_values() {
        let config = Config::parse("ball_color: €abc\n");
        assert_eq!(config.get("ball_color"), Some("€abc"));
        assert_eq!(config.get_color("ball_color"), None);
    }

    #[test]
    fn test_empty_input_yields_empty_config() {
        assert!(Config::parse("").is_empty());
    }
}

//! Runtime settings read from the environment (and `.env` via dotenv).

use crate::models::MAX_LENGTH;
use crate::output::OutputFormat;
use std::error::Error;

/// Calculator settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prefix used when the mask length prompt is left blank.
    pub default_prefix: u8,
    pub output: OutputFormat,
    /// Force colored output on or off; None leaves it to terminal detection.
    pub color: Option<bool>,
    /// Require masks to be one run of 1s across all 32 bits, not just per octet.
    pub strict_mask: bool,
    /// Cap on subnet rows printed; None prints all.
    pub max_rows: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_prefix: 24,
            output: OutputFormat::Table,
            color: None,
            strict_mask: false,
            max_rows: None,
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, Box<dyn Error>> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("{key}: expected a boolean, got '{other}'").into()),
    }
}

impl Config {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from a key lookup, falling back to defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup("IPCALC_DEFAULT_PREFIX") {
            let prefix: u8 = value
                .trim()
                .parse()
                .map_err(|e| format!("IPCALC_DEFAULT_PREFIX: '{value}' {e}"))?;
            if prefix > MAX_LENGTH {
                return Err(format!("IPCALC_DEFAULT_PREFIX: {prefix} is above {MAX_LENGTH}").into());
            }
            config.default_prefix = prefix;
        }
        if let Some(value) = lookup("IPCALC_OUTPUT") {
            config.output = value
                .parse::<OutputFormat>()
                .map_err(|e| format!("IPCALC_OUTPUT: {e}"))?;
        }
        if let Some(value) = lookup("IPCALC_COLOR") {
            config.color = Some(parse_bool("IPCALC_COLOR", &value)?);
        }
        if let Some(value) = lookup("IPCALC_STRICT_MASK") {
            config.strict_mask = parse_bool("IPCALC_STRICT_MASK", &value)?;
        }
        if let Some(value) = lookup("IPCALC_MAX_ROWS") {
            let rows: usize = value
                .trim()
                .parse()
                .map_err(|e| format!("IPCALC_MAX_ROWS: '{value}' {e}"))?;
            config.max_rows = Some(rows);
        }

        log::debug!("config: {config:?}");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_prefix, 24);
    }

    #[test]
    fn test_all_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("IPCALC_DEFAULT_PREFIX", "16"),
            ("IPCALC_OUTPUT", "csv"),
            ("IPCALC_COLOR", "no"),
            ("IPCALC_STRICT_MASK", "true"),
            ("IPCALC_MAX_ROWS", "10"),
        ]))
        .unwrap();
        assert_eq!(
            config,
            Config {
                default_prefix: 16,
                output: OutputFormat::Csv,
                color: Some(false),
                strict_mask: true,
                max_rows: Some(10),
            }
        );
    }

    #[test]
    fn test_color_forced_on() {
        let config = Config::from_lookup(lookup_from(&[("IPCALC_COLOR", "true")])).unwrap();
        assert_eq!(config.color, Some(true));
        assert_eq!(Config::from_lookup(|_| None).unwrap().color, None);
    }

    #[test]
    fn test_invalid_values() {
        assert!(Config::from_lookup(lookup_from(&[("IPCALC_DEFAULT_PREFIX", "33")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("IPCALC_DEFAULT_PREFIX", "x")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("IPCALC_OUTPUT", "xml")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("IPCALC_COLOR", "maybe")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("IPCALC_MAX_ROWS", "-1")])).is_err());
    }
}

//! User configuration — carousel timing and layout knobs, with persistence.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/farmstay/config.toml` (default
//! `~/.config/farmstay/config.toml`).

use std::path::PathBuf;
use std::time::Duration;

use crate::core::carousel::{Timing, TimingError};

/// Frame cadence of the animation tick task.
pub const TICK_RATE: Duration = Duration::from_millis(50);

/// Application configuration.
///
/// `slide_ms` deliberately serves double duty: it is both the glide time
/// the renderer animates with and the engine's settle delay.  Deriving
/// both from one knob is what keeps the wrap rewrite aligned with the
/// visible motion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Pause between auto-advance steps.
    pub advance_interval_ms: u64,
    /// Card glide time — and therefore the settle delay.
    pub slide_ms: u64,
    /// Pause before transitions re-enable after a wrap rewrite.
    pub rearm_ms: u64,
    /// How long a suggestion batch stays fresh.
    pub suggestion_ttl_secs: u64,
    /// Column count at which four cards are shown.
    pub wide_cols: u32,
    /// Column count at which two cards are shown.
    pub medium_cols: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            advance_interval_ms: 4000,
            slide_ms: 700,
            rearm_ms: 50,
            suggestion_ttl_secs: 90,
            wide_cols: 120,
            medium_cols: 80,
        }
    }
}

impl AppConfig {
    /// Engine timing derived from the configured values.
    pub fn timing(&self) -> Result<Timing, TimingError> {
        Timing::new(
            Duration::from_millis(self.advance_interval_ms),
            self.slide_duration(),
            Duration::from_millis(self.rearm_ms),
        )
    }

    pub fn slide_duration(&self) -> Duration {
        Duration::from_millis(self.slide_ms)
    }

    pub fn suggestion_ttl(&self) -> Duration {
        Duration::from_secs(self.suggestion_ttl_secs)
    }

    pub fn tick_rate(&self) -> Duration {
        TICK_RATE
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        if path.exists() {
            if let Ok(contents) = std::fs::read_to_string(&path) {
                return Self::parse_config(&contents);
            }
        }
        Self::default()
    }

    /// Persist current config to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        Ok(())
    }

    fn parse_config(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            match key {
                "advance_interval_ms" => {
                    if let Ok(v) = value.parse::<u64>() {
                        config.advance_interval_ms = v.clamp(500, 60_000);
                    }
                }
                "slide_ms" => {
                    if let Ok(v) = value.parse::<u64>() {
                        config.slide_ms = v.clamp(100, 3_000);
                    }
                }
                "rearm_ms" => {
                    if let Ok(v) = value.parse::<u64>() {
                        config.rearm_ms = v.clamp(10, 500);
                    }
                }
                "suggestion_ttl_secs" => {
                    if let Ok(v) = value.parse::<u64>() {
                        config.suggestion_ttl_secs = v.clamp(5, 3_600);
                    }
                }
                "wide_cols" => {
                    if let Ok(v) = value.parse::<u32>() {
                        config.wide_cols = v.clamp(60, 500);
                    }
                }
                "medium_cols" => {
                    if let Ok(v) = value.parse::<u32>() {
                        config.medium_cols = v.clamp(40, 400);
                    }
                }
                _ => {}
            }
        }

        // The wide band must sit above the medium band.
        if config.wide_cols <= config.medium_cols {
            config.wide_cols = config.medium_cols + 1;
        }

        config
    }

    fn serialise(&self) -> String {
        [
            "# farmstay configuration".to_string(),
            String::new(),
            "# Carousel timing (milliseconds)".to_string(),
            format!("advance_interval_ms = {}", self.advance_interval_ms),
            format!("slide_ms = {}", self.slide_ms),
            format!("rearm_ms = {}", self.rearm_ms),
            String::new(),
            "# Suggestion feed".to_string(),
            format!("suggestion_ttl_secs = {}", self.suggestion_ttl_secs),
            String::new(),
            "# Card window breakpoints (terminal columns)".to_string(),
            format!("wide_cols = {}", self.wide_cols),
            format!("medium_cols = {}", self.medium_cols),
            String::new(),
        ]
        .join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/farmstay/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("farmstay").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialise_parse_round_trips() {
        let config = AppConfig {
            advance_interval_ms: 2500,
            slide_ms: 400,
            rearm_ms: 80,
            suggestion_ttl_secs: 30,
            wide_cols: 140,
            medium_cols: 90,
        };
        assert_eq!(AppConfig::parse_config(&config.serialise()), config);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let parsed = AppConfig::parse_config(
            "advance_interval_ms = 10\nslide_ms = 99999\nrearm_ms = 1\nsuggestion_ttl_secs = 0\n",
        );
        assert_eq!(parsed.advance_interval_ms, 500);
        assert_eq!(parsed.slide_ms, 3_000);
        assert_eq!(parsed.rearm_ms, 10);
        assert_eq!(parsed.suggestion_ttl_secs, 5);
    }

    #[test]
    fn junk_lines_and_unknown_keys_fall_back_to_defaults() {
        let parsed = AppConfig::parse_config(
            "# comment\n[section]\nnot a pair\nmystery_knob = 9\nslide_ms = abc\n",
        );
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn wide_band_always_sits_above_medium() {
        let parsed = AppConfig::parse_config("wide_cols = 80\nmedium_cols = 200\n");
        assert!(parsed.wide_cols > parsed.medium_cols);
    }

    #[test]
    fn derived_timing_matches_the_slide_duration() {
        let config = AppConfig::default();
        let timing = config.timing().unwrap();
        assert!(timing.validate_transition(config.slide_duration()).is_ok());
    }
}

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::gallery::autoplay::DEFAULT_INTERVAL_MS;
use crate::gallery::Breakpoints;

/// Rough pixel width of one terminal cell, used to map columns to breakpoints
pub const DEFAULT_CELL_WIDTH_PX: u32 = 8;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Start in dark mode
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,

    /// Delay between automatic photo advances
    #[serde(default = "default_interval_ms")]
    pub autoplay_interval_ms: u64,

    /// Approximate pixel width of a terminal cell
    #[serde(default = "default_cell_width")]
    pub cell_width_px: u32,

    /// Portfolio content file (built-in sample content when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_path: Option<PathBuf>,

    /// Accent colour override, `#RRGGBB` or `#RGB`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,

    /// Viewport widths where project pages grow to 2 and 3 cards
    #[serde(default)]
    pub breakpoints: Breakpoints,
}

fn default_dark_mode() -> bool {
    true
}

fn default_interval_ms() -> u64 {
    DEFAULT_INTERVAL_MS
}

fn default_cell_width() -> u32 {
    DEFAULT_CELL_WIDTH_PX
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dark_mode: default_dark_mode(),
            autoplay_interval_ms: default_interval_ms(),
            cell_width_px: default_cell_width(),
            content_path: None,
            accent: None,
            breakpoints: Breakpoints::default(),
        }
    }
}

impl AppConfig {
    /// Config directory, created on demand
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("folio");

        if let Err(e) = std::fs::create_dir_all(&config_dir) {
            tracing::warn!("Could not create config directory: {}", e);
        }

        Ok(config_dir)
    }

    /// Get the config file path
    fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = match Self::config_path() {
            Ok(p) => p,
            Err(_) => return Ok(AppConfig::default()),
        };

        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(content) => match Self::parse(&content) {
                    Ok(config) => return Ok(config),
                    Err(e) => tracing::warn!("Failed to parse config: {}", e),
                },
                Err(e) => tracing::warn!("Failed to read config: {}", e),
            }
            // Leave a broken file alone so the user can fix it
            return Ok(AppConfig::default());
        }

        let config = AppConfig::default();
        if let Err(e) = config.save() {
            tracing::warn!("Could not write default config: {}", e);
        }
        Ok(config)
    }

    /// Parse and sanitize config text
    pub fn parse(content: &str) -> Result<Self> {
        let mut config: AppConfig = toml::from_str(content)?;
        config.sanitize();
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn sanitize(&mut self) {
        if self.autoplay_interval_ms == 0 {
            tracing::warn!("autoplay_interval_ms must be positive, using {}", DEFAULT_INTERVAL_MS);
            self.autoplay_interval_ms = DEFAULT_INTERVAL_MS;
        }

        if self.cell_width_px == 0 {
            self.cell_width_px = DEFAULT_CELL_WIDTH_PX;
        }

        if self.breakpoints.medium > self.breakpoints.large {
            tracing::warn!(
                "Breakpoint medium ({}) is above large ({}), swapping",
                self.breakpoints.medium,
                self.breakpoints.large
            );
            std::mem::swap(&mut self.breakpoints.medium, &mut self.breakpoints.large);
        }

        if self.content_path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            self.content_path = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serialization() {
        let config = AppConfig {
            dark_mode: false,
            autoplay_interval_ms: 3000,
            cell_width_px: 9,
            content_path: Some(PathBuf::from("/tmp/portfolio.toml")),
            accent: Some("#ffc107".to_string()),
            breakpoints: Breakpoints {
                medium: 600,
                large: 900,
            },
        };

        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized = AppConfig::parse(&serialized).unwrap();

        assert_eq!(config.autoplay_interval_ms, deserialized.autoplay_interval_ms);
        assert_eq!(config.content_path, deserialized.content_path);
        assert_eq!(config.breakpoints, deserialized.breakpoints);
        assert!(!deserialized.dark_mode);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::parse("").unwrap();
        assert!(config.dark_mode);
        assert_eq!(config.autoplay_interval_ms, 5000);
        assert_eq!(config.cell_width_px, DEFAULT_CELL_WIDTH_PX);
        assert_eq!(config.breakpoints, Breakpoints::default());
    }

    #[test]
    fn test_sanitize_fixes_bad_values() {
        let config = AppConfig::parse(
            r#"
autoplay_interval_ms = 0
cell_width_px = 0
content_path = ""

[breakpoints]
medium = 1200
large = 700
"#,
        )
        .unwrap();

        assert_eq!(config.autoplay_interval_ms, DEFAULT_INTERVAL_MS);
        assert_eq!(config.cell_width_px, DEFAULT_CELL_WIDTH_PX);
        assert!(config.content_path.is_none());
        assert_eq!(config.breakpoints.medium, 700);
        assert_eq!(config.breakpoints.large, 1200);
    }
}

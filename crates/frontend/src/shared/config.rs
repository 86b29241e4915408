//! UI configuration: breakpoint thresholds, initial viewport and layout sizes.
//!
//! The defaults are embedded in the binary. A TOML override can be stored in
//! `localStorage` under [`CONFIG_STORAGE_KEY`]; an invalid override is logged
//! and ignored.

use serde::Deserialize;
use thiserror::Error;
use web_sys::window;

pub const CONFIG_STORAGE_KEY: &str = "ui-config";

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[breakpoints]
sm = 640
md = 768
lg = 1024
xl = 1280
xxl = 1536

[viewport]
width = 1024
height = 768

[layout]
sidebar_width = 256
sheet_max_height_pct = 90
"#;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("breakpoint thresholds must be strictly increasing, got {0:?}")]
    Thresholds([u32; 5]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BreakpointThresholds {
    pub sm: u32,
    pub md: u32,
    pub lg: u32,
    pub xl: u32,
    pub xxl: u32,
}

impl BreakpointThresholds {
    pub fn as_array(&self) -> [u32; 5] {
        [self.sm, self.md, self.lg, self.xl, self.xxl]
    }
}

impl Default for BreakpointThresholds {
    fn default() -> Self {
        Self {
            sm: 640,
            md: 768,
            lg: 1024,
            xl: 1280,
            xxl: 1536,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LayoutConfig {
    pub sidebar_width: u32,
    pub sheet_max_height_pct: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct UiConfig {
    pub breakpoints: BreakpointThresholds,
    pub viewport: ViewportConfig,
    pub layout: LayoutConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        // Mirrors DEFAULT_CONFIG.
        parse_config(DEFAULT_CONFIG).unwrap_or(Self {
            breakpoints: BreakpointThresholds::default(),
            viewport: ViewportConfig {
                width: 1024,
                height: 768,
            },
            layout: LayoutConfig {
                sidebar_width: 256,
                sheet_max_height_pct: 90,
            },
        })
    }
}

/// Parses and checks a TOML config.
pub fn parse_config(contents: &str) -> Result<UiConfig, ConfigError> {
    let config: UiConfig = toml::from_str(contents)?;
    let thresholds = config.breakpoints.as_array();
    if thresholds.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(ConfigError::Thresholds(thresholds));
    }
    Ok(config)
}

/// Loads configuration from `localStorage`, falling back to the defaults.
pub fn load_config() -> UiConfig {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten());

    match stored {
        Some(contents) => match parse_config(&contents) {
            Ok(config) => {
                log::info!("Loaded UI config override from localStorage");
                config
            }
            Err(e) => {
                log::warn!("Ignoring UI config override: {}", e);
                UiConfig::default()
            }
        },
        None => {
            log::info!("Using default embedded UI configuration");
            UiConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.breakpoints, BreakpointThresholds::default());
        assert_eq!(config.viewport.width, 1024);
        assert_eq!(config.viewport.height, 768);
        assert_eq!(config.layout.sidebar_width, 256);
        assert_eq!(config.layout.sheet_max_height_pct, 90);
    }

    #[test]
    fn test_rejects_unordered_thresholds() {
        let bad = DEFAULT_CONFIG.replace("lg = 1024", "lg = 700");
        assert!(matches!(parse_config(&bad), Err(ConfigError::Thresholds(_))));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(matches!(
            parse_config("[breakpoints\nsm = 1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_section_is_error() {
        assert!(parse_config("[viewport]\nwidth = 1\nheight = 1").is_err());
    }
}

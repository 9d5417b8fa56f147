//! Window and log panel configuration parsing from environment variables.

use anyhow::{Context, Result};

/// UI environment configuration
#[derive(Debug, Clone, PartialEq)]
pub struct UiEnvConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub log_panel_lines: usize,
}

impl Default for UiEnvConfig {
    fn default() -> Self {
        Self {
            window_width: 1200.0,
            window_height: 800.0,
            log_panel_lines: 200,
        }
    }
}

impl UiEnvConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let window_width = match lookup("WINDOW_WIDTH") {
            Some(v) => v
                .parse::<f32>()
                .with_context(|| format!("Invalid WINDOW_WIDTH: {}", v))?,
            None => defaults.window_width,
        };
        let window_height = match lookup("WINDOW_HEIGHT") {
            Some(v) => v
                .parse::<f32>()
                .with_context(|| format!("Invalid WINDOW_HEIGHT: {}", v))?,
            None => defaults.window_height,
        };
        let log_panel_lines = match lookup("LOG_PANEL_LINES") {
            Some(v) => v
                .parse::<usize>()
                .with_context(|| format!("Invalid LOG_PANEL_LINES: {}", v))?,
            None => defaults.log_panel_lines,
        };

        if window_width <= 0.0 || window_height <= 0.0 {
            anyhow::bail!(
                "Window size must be positive, got {}x{}",
                window_width,
                window_height
            );
        }

        Ok(Self {
            window_width,
            window_height,
            log_panel_lines,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_config_defaults() {
        let config = UiEnvConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, UiEnvConfig::default());
    }

    #[test]
    fn test_ui_config_rejects_garbage() {
        let res = UiEnvConfig::from_lookup(|key| {
            (key == "WINDOW_WIDTH").then(|| "wide".to_string())
        });
        let err = res.unwrap_err().to_string();
        assert!(err.contains("WINDOW_WIDTH"));
    }

    #[test]
    fn test_ui_config_rejects_zero_size() {
        let res = UiEnvConfig::from_lookup(|key| {
            (key == "WINDOW_HEIGHT").then(|| "0".to_string())
        });
        assert!(res.is_err());
    }
}

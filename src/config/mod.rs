//! Configuration module for Salescast.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: Data sources and UI.

mod data_config;
mod ui_config;

pub use data_config::DataEnvConfig;
pub use ui_config::UiEnvConfig;

use anyhow::Result;
use std::env;

/// Main application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data: DataEnvConfig,
    pub ui: UiEnvConfig,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup (used by tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            data: DataEnvConfig::from_lookup(&lookup),
            ui: UiEnvConfig::from_lookup(&lookup)?,
        })
    }
}

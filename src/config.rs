//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Simulated delivery delay when not configured
const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;
/// How long the success banner stays up before the form resets
const DEFAULT_RESET_WINDOW_MS: u64 = 5000;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Simulated delivery delay, in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// Post-success observation window, in milliseconds
    pub reset_window_ms: Option<u64>,
    /// Make the simulated client reject every submission
    pub simulate_failure: Option<bool>,
    /// Label shown for where submissions go
    pub recipient: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "contact-tui", "contact-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms.unwrap_or(DEFAULT_SUBMIT_DELAY_MS))
    }

    pub fn reset_window(&self) -> Duration {
        Duration::from_millis(self.reset_window_ms.unwrap_or(DEFAULT_RESET_WINDOW_MS))
    }

    pub fn simulate_failure(&self) -> bool {
        self.simulate_failure.unwrap_or(false)
    }

    pub fn recipient(&self) -> &str {
        self.recipient.as_deref().unwrap_or("hello@example.com")
    }
}

//! Configuration handling for the TUI

use crate::state::{ToastDurations, DEFAULT_ERROR_TOAST, DEFAULT_SUCCESS_TOAST};
use crate::submit::SimulatedSubmitter;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Simulated submission latency in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// How long the success toast stays up
    pub success_toast_ms: Option<u64>,
    /// How long each validation error toast stays up
    pub error_toast_ms: Option<u64>,
    /// Render the password as bullets
    pub mask_password: Option<bool>,
}

impl AppConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dev", "signup", "signup-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Log file under the data directory
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join("signup-tui.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: AppConfig = serde_json::from_str(&content)?;
                tracing::debug!(path = %path.display(), "loaded config");
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn submit_delay(&self) -> Duration {
        self.submit_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(SimulatedSubmitter::DEFAULT_LATENCY)
    }

    pub fn toast_durations(&self) -> ToastDurations {
        ToastDurations {
            success: self
                .success_toast_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_SUCCESS_TOAST),
            error: self
                .error_toast_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_ERROR_TOAST),
        }
    }

    pub fn mask_password(&self) -> bool {
        self.mask_password.unwrap_or(true)
    }
}

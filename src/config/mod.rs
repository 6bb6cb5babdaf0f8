// SPDX-License-Identifier: MPL-2.0
//! This module handles the check-in configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use goalsy_checkin::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.settle_delay_ms = Some(2000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.settle_delay_ms, Some(2000));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::diagnostics::BufferCapacity;
use crate::domain::capture::{PartialCapturePolicy, SettleDelay};
use crate::domain::interaction::{LongPressDuration, RestDuration};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Goalsy";

/// Persisted form of [`PartialCapturePolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartialCapture {
    DiscardAll,
    KeepBack,
}

impl From<PartialCapture> for PartialCapturePolicy {
    fn from(value: PartialCapture) -> Self {
        match value {
            PartialCapture::DiscardAll => PartialCapturePolicy::DiscardAll,
            PartialCapture::KeepBack => PartialCapturePolicy::KeepBack,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settle_delay_ms: Option<u64>,
    #[serde(default)]
    pub long_press_ms: Option<u64>,
    #[serde(default)]
    pub rest_animation_ms: Option<u64>,
    #[serde(default)]
    pub partial_capture: Option<PartialCapture>,
    #[serde(default)]
    pub diagnostics_capacity: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settle_delay_ms: Some(DEFAULT_SETTLE_DELAY_MS),
            long_press_ms: Some(DEFAULT_LONG_PRESS_MS),
            rest_animation_ms: Some(DEFAULT_REST_ANIMATION_MS),
            partial_capture: Some(PartialCapture::DiscardAll),
            diagnostics_capacity: Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
        }
    }
}

/// Validated settings consumed by the check-in screen.
///
/// Built from a [`Config`]; every out-of-range value is clamped by its newtype.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CheckInSettings {
    pub settle_delay: SettleDelay,
    pub long_press: LongPressDuration,
    pub rest_animation: RestDuration,
    pub partial_capture: PartialCapturePolicy,
    pub diagnostics_capacity: BufferCapacity,
}

impl From<&Config> for CheckInSettings {
    fn from(config: &Config) -> Self {
        Self {
            settle_delay: config
                .settle_delay_ms
                .map(SettleDelay::new)
                .unwrap_or_default(),
            long_press: config
                .long_press_ms
                .map(LongPressDuration::new)
                .unwrap_or_default(),
            rest_animation: config
                .rest_animation_ms
                .map(RestDuration::new)
                .unwrap_or_default(),
            partial_capture: config
                .partial_capture
                .map(PartialCapturePolicy::from)
                .unwrap_or_default(),
            diagnostics_capacity: config
                .diagnostics_capacity
                .map(BufferCapacity::new)
                .unwrap_or_default(),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("Ignoring invalid settings file {}: {err}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

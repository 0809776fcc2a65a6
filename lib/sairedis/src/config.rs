// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Configuration for the removal path.

use std::path::PathBuf;
use std::time::Duration;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

pub const DEFAULT_RECORD_FILE: &str = "sairedis.rec";

/// Default bound on a single completion wait.
pub const DEFAULT_RESPONSE_TIMEOUT: Duration = Duration::from_secs(60);

fn env_flag(name: &str) -> Option<bool> {
    std::env::var(name)
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

/// Recording sink settings.
///
/// # Example
/// ```ignore
/// let config = RecordConfig::builder()
///     .location("/var/log/swss".into())
///     .build()?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct RecordConfig {
    /// Whether operations are recorded at all. Fixed for the process lifetime.
    #[builder(default = "true")]
    pub enabled: bool,

    /// Directory holding the recording file.
    #[builder(default = "PathBuf::from(\".\")")]
    pub location: PathBuf,

    #[builder(default = "DEFAULT_RECORD_FILE.to_string()")]
    pub file_name: String,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            location: PathBuf::from("."),
            file_name: DEFAULT_RECORD_FILE.to_string(),
        }
    }
}

impl RecordConfig {
    pub fn builder() -> RecordConfigBuilder {
        RecordConfigBuilder::default()
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Full path of the recording file.
    pub fn path(&self) -> PathBuf {
        self.location.join(&self.file_name)
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaiRedisConfig {
    pub record: RecordConfig,

    /// When disabled every completion is reported as success without
    /// waiting for the remote executor.
    pub sync_mode: bool,

    /// How long a completion wait may block before it fails.
    pub response_timeout: Duration,
}

impl Default for SaiRedisConfig {
    fn default() -> Self {
        Self {
            record: RecordConfig::default(),
            sync_mode: false,
            response_timeout: DEFAULT_RESPONSE_TIMEOUT,
        }
    }
}

impl SaiRedisConfig {
    /// Create config from environment variables.
    ///
    /// Environment variables:
    /// - `SAIREDIS_RECORD_ENABLE`: "1" or "true" to record (default: true)
    /// - `SAIREDIS_RECORD_LOCATION`: recording directory (default: ".")
    /// - `SAIREDIS_RECORD_FILE`: recording file name (default: "sairedis.rec")
    /// - `SAIREDIS_SYNC_MODE`: "1" or "true" to wait for responses (default: false)
    /// - `SAIREDIS_RESPONSE_TIMEOUT_MS`: response timeout in ms (default: 60000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            record: RecordConfig {
                enabled: env_flag("SAIREDIS_RECORD_ENABLE").unwrap_or(defaults.record.enabled),
                location: std::env::var("SAIREDIS_RECORD_LOCATION")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.record.location),
                file_name: std::env::var("SAIREDIS_RECORD_FILE")
                    .unwrap_or(defaults.record.file_name),
            },
            sync_mode: env_flag("SAIREDIS_SYNC_MODE").unwrap_or(defaults.sync_mode),
            response_timeout: std::env::var("SAIREDIS_RESPONSE_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.response_timeout),
        }
    }

    pub fn with_record(mut self, record: RecordConfig) -> Self {
        self.record = record;
        self
    }

    pub fn with_sync_mode(mut self, sync_mode: bool) -> Self {
        self.sync_mode = sync_mode;
        self
    }

    pub fn with_response_timeout(mut self, timeout: Duration) -> Self {
        self.response_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = SaiRedisConfig::default();
        assert!(config.record.enabled);
        assert!(!config.sync_mode);
        assert_eq!(config.response_timeout, Duration::from_secs(60));
        assert_eq!(config.record.path(), PathBuf::from("./sairedis.rec"));
    }

    #[test]
    fn test_record_config_builder() {
        let config = RecordConfig::builder()
            .location(PathBuf::from("/var/log/swss"))
            .file_name("test.rec".to_string())
            .build()
            .unwrap();
        assert!(config.enabled);
        assert_eq!(config.path(), PathBuf::from("/var/log/swss/test.rec"));

        let config = RecordConfig::builder().enabled(false).build().unwrap();
        assert_eq!(config, RecordConfig::disabled());
    }

    #[test]
    fn test_config_setters() {
        let config = SaiRedisConfig::default()
            .with_sync_mode(true)
            .with_response_timeout(Duration::from_millis(250))
            .with_record(RecordConfig::disabled());

        assert!(config.sync_mode);
        assert_eq!(config.response_timeout, Duration::from_millis(250));
        assert!(!config.record.enabled);
    }
}

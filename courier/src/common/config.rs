/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::actor::SupervisorStrategy;

/// Configuration for a Courier actor system.
///
/// Loaded from TOML files in XDG-compliant directories. Every field has a
/// default, so a partial file only overrides what it names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourierConfig {
    /// Timeout configuration
    pub timeouts: TimeoutConfig,
    /// Default values configuration
    pub defaults: DefaultsConfig,
}

/// Timeout-related configuration values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// How long `stop_future` and `poison_future` wait for termination, in milliseconds
    pub stop_future_timeout_ms: u64,
    /// Timeout offered to callers that do not pick their own, in milliseconds
    pub default_request_timeout_ms: u64,
}

/// Default configuration values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Name prefix for future processes
    pub future_name_prefix: String,
    /// Name prefix for guardian processes
    pub guardian_name_prefix: String,
    /// Restart budget of the default supervisor strategy
    pub default_max_retries: u32,
    /// Restart window of the default supervisor strategy, in milliseconds
    pub default_retry_window_ms: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            stop_future_timeout_ms: 10_000,
            default_request_timeout_ms: 5_000,
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            future_name_prefix: "future".to_string(),
            guardian_name_prefix: "guardian".to_string(),
            default_max_retries: 10,
            default_retry_window_ms: 10_000,
        }
    }
}

impl CourierConfig {
    #[must_use]
    pub const fn stop_future_timeout(&self) -> Duration {
        Duration::from_millis(self.timeouts.stop_future_timeout_ms)
    }

    #[must_use]
    pub const fn default_request_timeout(&self) -> Duration {
        Duration::from_millis(self.timeouts.default_request_timeout_ms)
    }

    /// The one-for-one strategy described by the `defaults` section.
    #[must_use]
    pub const fn default_supervisor_strategy(&self) -> SupervisorStrategy {
        SupervisorStrategy::one_for_one(
            self.defaults.default_max_retries,
            Duration::from_millis(self.defaults.default_retry_window_ms),
        )
    }

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the parser's error if `source` is not valid TOML for this shape.
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Load configuration from XDG-compliant locations
    ///
    /// Looks for `courier/config.toml` under the XDG config directories
    /// (`$XDG_CONFIG_HOME`, then `$XDG_CONFIG_DIRS`). A missing file yields the
    /// defaults; a malformed one is logged and also yields the defaults.
    #[must_use]
    pub fn load() -> Self {
        let xdg_dirs = match xdg::BaseDirectories::with_prefix("courier") {
            Ok(dirs) => dirs,
            Err(e) => {
                error!("Failed to initialize XDG directories: {}", e);
                return Self::default();
            }
        };

        match xdg_dirs.find_config_file("config.toml") {
            Some(path) => Self::load_from(&path),
            None => {
                info!("No configuration file found, using defaults");
                Self::default()
            }
        }
    }

    /// Load configuration from an explicit file, falling back to defaults on error.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        info!("Loading configuration from: {}", path.display());
        match std::fs::read_to_string(path) {
            Ok(config_str) => match Self::from_toml_str(&config_str) {
                Ok(config) => {
                    info!("Successfully loaded configuration");
                    config
                }
                Err(e) => {
                    error!("Failed to parse configuration file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                error!("Failed to read configuration file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

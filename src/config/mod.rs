// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file and the command
//! line arguments that override it.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use clap::Parser;
use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "playview";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// Catalog snapshot to display instead of the built-in playlist.
    pub catalog: Option<PathBuf>,
    pub tick_rate_ms: u64,
    pub image_timeout_secs: u64,
    pub log_dir: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            catalog: None,
            tick_rate_ms: 250,
            image_timeout_secs: 10,
            log_dir: None,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    pub fn image_timeout(&self) -> Duration {
        Duration::from_secs(self.image_timeout_secs.max(1))
    }

    /// Applies command line overrides on top of the stored configuration.
    pub fn merge(mut self, args: Args) -> Self {
        if args.catalog.is_some() {
            self.catalog = args.catalog;
        }
        if args.log_dir.is_some() {
            self.log_dir = args.log_dir;
        }
        self
    }

    /// Directory for the log file: the configured one, else the directory
    /// holding the configuration file, else the system temp directory.
    pub fn resolved_log_dir(&self) -> PathBuf {
        if let Some(dir) = &self.log_dir {
            return dir.clone();
        }

        confy::get_configuration_file_path(CONFIG_NAME, None)
            .ok()
            .and_then(|path| path.parent().map(Path::to_path_buf))
            .unwrap_or_else(std::env::temp_dir)
    }
}

/// Terminal playlist viewer.
#[derive(Parser, Debug, Default)]
#[command(version, about)]
pub struct Args {
    /// Catalog snapshot (TOML) to display
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Directory for the log file
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

/// Loads the stored configuration, creating it with defaults on first run.
pub fn load_config() -> Result<AppConfig, confy::ConfyError> {
    confy::load(CONFIG_NAME, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_overrides_config() {
        let config = AppConfig {
            catalog: Some(PathBuf::from("stored.toml")),
            ..AppConfig::default()
        };

        let merged = config.merge(Args {
            catalog: Some(PathBuf::from("cli.toml")),
            log_dir: Some(PathBuf::from("/tmp/logs")),
        });

        assert_eq!(merged.catalog, Some(PathBuf::from("cli.toml")));
        assert_eq!(merged.resolved_log_dir(), PathBuf::from("/tmp/logs"));
    }

    #[test]
    fn absent_arguments_keep_config_values() {
        let config = AppConfig {
            catalog: Some(PathBuf::from("stored.toml")),
            ..AppConfig::default()
        };

        let merged = config.clone().merge(Args::default());
        assert_eq!(merged, config);
    }

    #[test]
    fn partial_config_files_use_defaults() {
        let config: AppConfig = toml::from_str("tick_rate_ms = 100\n").unwrap();

        assert_eq!(config.tick_rate(), Duration::from_millis(100));
        assert_eq!(config.image_timeout(), Duration::from_secs(10));
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.catalog, None);
    }

    #[test]
    fn zero_durations_are_raised_to_a_usable_minimum() {
        let config: AppConfig = toml::from_str("tick_rate_ms = 0\nimage_timeout_secs = 0\n").unwrap();

        assert_eq!(config.tick_rate(), Duration::from_millis(1));
        assert_eq!(config.image_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn args_parse_from_command_line() {
        let args = Args::parse_from(["playview", "--catalog", "mix.toml"]);
        assert_eq!(args.catalog, Some(PathBuf::from("mix.toml")));
        assert_eq!(args.log_dir, None);
    }
}

// ABOUTME: Fleet settings and configuration-blob handling.
// ABOUTME: Settings come from fleetctl.yml (or built-in defaults); blobs are JSON files pushed to workers.

mod blob;
mod files;

pub use blob::{ConfigBlob, split_message};
pub use files::{list_config_files, resolve_config_path};

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const SETTINGS_FILENAME: &str = "fleetctl.yml";
pub const SETTINGS_FILENAME_ALT: &str = "fleetctl.yaml";
pub const SETTINGS_FILENAME_DIR: &str = ".fleetctl/config.yml";

/// Immutable fleet settings, built once at startup and passed by reference.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FleetConfig {
    #[serde(default = "default_ip_address")]
    pub ip_address: String,

    #[serde(default = "default_start_port")]
    pub start_port: u16,

    #[serde(default = "default_end_port")]
    pub end_port: u16,

    #[serde(default = "default_fleet_size")]
    pub fleet_size: u16,

    /// Two-line `{remark}\n{cookie}` records used by the login command.
    #[serde(default = "default_credentials_file")]
    pub credentials_file: PathBuf,

    /// Directory searched for configuration blobs.
    #[serde(default = "default_config_dir")]
    pub config_dir: PathBuf,

    /// Blob pushed after the wait window and on interrupt.
    #[serde(default = "default_idle_config")]
    pub idle_config: PathBuf,

    /// Blob whose `advert` section is rewritten for the message command.
    #[serde(default = "default_advert_template")]
    pub advert_template: PathBuf,

    #[serde(default = "default_rooms_file")]
    pub rooms_file: PathBuf,

    /// Delay between an advert being shown and retracted.
    #[serde(default = "default_advert_window", with = "humantime_serde")]
    pub advert_window: Duration,

    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,

    /// How long in-flight requests are awaited after an interrupt.
    #[serde(default = "default_interrupt_grace", with = "humantime_serde")]
    pub interrupt_grace: Duration,

    /// Optional cap on concurrent HTTP calls within one phase.
    #[serde(default)]
    pub max_parallel: Option<usize>,
}

fn default_ip_address() -> String {
    "127.0.0.1".to_string()
}

fn default_start_port() -> u16 {
    23330
}

fn default_end_port() -> u16 {
    23353
}

fn default_fleet_size() -> u16 {
    8
}

fn default_credentials_file() -> PathBuf {
    PathBuf::from("cookies.txt")
}

fn default_config_dir() -> PathBuf {
    PathBuf::from("./config")
}

fn default_idle_config() -> PathBuf {
    PathBuf::from("set-default-idle.json")
}

fn default_advert_template() -> PathBuf {
    PathBuf::from("set-custom-ad-template.json")
}

fn default_rooms_file() -> PathBuf {
    PathBuf::from("room_ids.json")
}

fn default_advert_window() -> Duration {
    Duration::from_secs(5)
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_interrupt_grace() -> Duration {
    Duration::from_secs(2)
}

impl Default for FleetConfig {
    fn default() -> Self {
        FleetConfig {
            ip_address: default_ip_address(),
            start_port: default_start_port(),
            end_port: default_end_port(),
            fleet_size: default_fleet_size(),
            credentials_file: default_credentials_file(),
            config_dir: default_config_dir(),
            idle_config: default_idle_config(),
            advert_template: default_advert_template(),
            rooms_file: default_rooms_file(),
            advert_window: default_advert_window(),
            request_timeout: default_request_timeout(),
            interrupt_grace: default_interrupt_grace(),
            max_parallel: None,
        }
    }
}

impl FleetConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: FleetConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::SettingsNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Look for a settings file in `dir`, falling back to the built-in defaults.
    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(SETTINGS_FILENAME),
            dir.join(SETTINGS_FILENAME_ALT),
            dir.join(SETTINGS_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                tracing::debug!("loading settings from {}", path.display());
                return Self::load(path);
            }
        }

        tracing::debug!("no settings file in {}, using defaults", dir.display());
        Ok(Self::default())
    }

    fn validate(&self) -> Result<()> {
        if self.ip_address.trim().is_empty() {
            return Err(Error::InvalidConfig("ip_address cannot be empty".to_string()));
        }
        if self.fleet_size == 0 {
            return Err(Error::InvalidConfig("fleet_size must be at least 1".to_string()));
        }
        if self.start_port == 0 {
            return Err(Error::InvalidConfig("start_port must be positive".to_string()));
        }
        if self.start_port > self.end_port {
            return Err(Error::InvalidConfig(format!(
                "start_port {} is greater than end_port {}",
                self.start_port, self.end_port
            )));
        }
        if self.max_parallel == Some(0) {
            return Err(Error::InvalidConfig("max_parallel must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Number of ports in the configured range.
    pub fn port_count(&self) -> u32 {
        u32::from(self.end_port) - u32::from(self.start_port) + 1
    }

    /// Number of whole fleets; a trailing partial fleet is not counted.
    pub fn total_fleets(&self) -> u32 {
        self.port_count() / u32::from(self.fleet_size)
    }

    /// Whether the port range leaves a partial fleet at the end.
    pub fn has_partial_fleet(&self) -> bool {
        self.port_count() % u32::from(self.fleet_size) != 0
    }

    pub fn idle_config_path(&self) -> PathBuf {
        self.config_dir.join(&self.idle_config)
    }

    pub fn advert_template_path(&self) -> PathBuf {
        self.config_dir.join(&self.advert_template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_fleet() {
        let config = FleetConfig::default();
        assert_eq!(config.ip_address, "127.0.0.1");
        assert_eq!(config.start_port, 23330);
        assert_eq!(config.end_port, 23353);
        assert_eq!(config.fleet_size, 8);
        assert_eq!(config.total_fleets(), 3);
        assert!(!config.has_partial_fleet());
        assert_eq!(config.advert_window, Duration::from_secs(5));
    }

    #[test]
    fn partial_fleet_is_truncated() {
        let config = FleetConfig {
            start_port: 100,
            end_port: 109,
            fleet_size: 4,
            ..FleetConfig::default()
        };
        assert_eq!(config.port_count(), 10);
        assert_eq!(config.total_fleets(), 2);
        assert!(config.has_partial_fleet());
    }

    #[test]
    fn rejects_zero_fleet_size() {
        let err = FleetConfig::from_yaml("fleet_size: 0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn rejects_inverted_port_range() {
        let err = FleetConfig::from_yaml("start_port: 200\nend_port: 100\n").unwrap_err();
        assert!(err.to_string().contains("greater than end_port"));
    }

    #[test]
    fn blob_paths_live_under_config_dir() {
        let config = FleetConfig {
            config_dir: PathBuf::from("/srv/fleet"),
            ..FleetConfig::default()
        };
        assert_eq!(
            config.idle_config_path(),
            PathBuf::from("/srv/fleet/set-default-idle.json")
        );
        assert_eq!(
            config.advert_template_path(),
            PathBuf::from("/srv/fleet/set-custom-ad-template.json")
        );
    }
}

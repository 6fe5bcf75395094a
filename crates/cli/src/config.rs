//! On-disk CLI configuration (`<data-dir>/config.json`).

use addrkit_core::{AddressKind, Network};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub network: Network,
}

impl Config {
    pub fn for_network(network: Network) -> Self {
        Self { network }
    }

    /// Version byte for addresses of `kind` on the configured network.
    pub fn address_version(&self, kind: AddressKind) -> u8 {
        kind.version(self.network)
    }

    /// Load the config from `data_dir`, falling back to mainnet when the
    /// file does not exist.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = config_path(data_dir);
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using mainnet defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save(&self, data_dir: &Path) -> Result<PathBuf> {
        let path = config_path(data_dir);
        fs::write(&path, serde_json::to_string_pretty(self)?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::for_network(Network::Mainnet)
    }
}

fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_defaults_to_mainnet() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.network, Network::Mainnet);
        assert_eq!(config.address_version(AddressKind::PubkeyHash), 76);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let config = Config::for_network(Network::Testnet);
        config.save(dir.path()).unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.address_version(AddressKind::ScriptHash), 19);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "not json").unwrap();
        assert!(Config::load(dir.path()).is_err());
    }
}

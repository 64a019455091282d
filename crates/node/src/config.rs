//! Node configuration loaded from a TOML file.
//!
//! Every section and field has a default, so an empty file (or no file
//! at all) yields a runnable node.

use anyhow::Context;
use ledgerview_api::ApiConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level node configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// HTTP api listener settings.
    pub api: ApiConfig,
    /// Peer bootstrap settings.
    pub peers: PeerSeedConfig,
}

/// Peer addresses seeded into the known-peer table at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PeerSeedConfig {
    /// `host:port` entries for peers known ahead of discovery.
    pub known: Vec<String>,
}

impl NodeConfig {
    /// Parse a configuration file from disk.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config: NodeConfig = toml::from_str("").unwrap();
        assert_eq!(config.api.listen_port, ledgerview_api::ApiConfig::default().listen_port);
        assert!(config.peers.known.is_empty());
    }

    #[test]
    fn test_load_round_trip() {
        let config = NodeConfig {
            api: ApiConfig {
                listen_port: 31000,
                ..ApiConfig::default()
            },
            peers: PeerSeedConfig {
                known: vec!["10.0.0.1:30303".to_string()],
            },
        };

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml::to_string(&config).unwrap().as_bytes())
            .unwrap();

        let loaded = NodeConfig::load(file.path()).unwrap();
        assert_eq!(loaded.api.listen_port, 31000);
        assert_eq!(loaded.peers.known, vec!["10.0.0.1:30303"]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(NodeConfig::load(Path::new("/nonexistent/ledgerview.toml")).is_err());
    }
}

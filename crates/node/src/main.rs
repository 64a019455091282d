//! Node daemon.
//!
//! Wires the in-memory chain store and data bus together, registers the
//! peer producers, and serves the read-only HTTP api until interrupted.

mod config;
mod peers;

use clap::Parser;
use config::NodeConfig;
use ledgerview_api::ApiService;
use ledgerview_bus::{
    DataBus, InMemoryDataBus, CONNECTED_PEER_ADDRESSES, KNOWN_PEER_ADDRESSES,
};
use ledgerview_store::{ChainStore, InMemoryChainStore};
use peers::{ConnectedPeersProducer, KnownPeersProducer, PeerTable};
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "ledgerview-node", version, about = "LedgerView node daemon")]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, env = "LEDGERVIEW_CONFIG")]
    config: Option<PathBuf>,

    /// Override the api listen host.
    #[arg(long, env = "LEDGERVIEW_LISTEN_HOST")]
    listen_host: Option<IpAddr>,

    /// Override the api listen port.
    #[arg(long, env = "LEDGERVIEW_LISTEN_PORT")]
    listen_port: Option<u16>,

    /// Log filter, e.g. `info` or `ledgerview_api=debug`.
    #[arg(long, env = "LEDGERVIEW_LOG", default_value = "info")]
    log_level: String,
}

impl Cli {
    /// Resolve the effective configuration: file (or defaults), then
    /// command-line overrides on top.
    fn resolve_config(&self) -> anyhow::Result<NodeConfig> {
        let mut config = match &self.config {
            Some(path) => NodeConfig::load(path)?,
            None => NodeConfig::default(),
        };
        if let Some(host) = self.listen_host {
            config.api.listen_host = host;
        }
        if let Some(port) = self.listen_port {
            config.api.listen_port = port;
        }
        Ok(config)
    }
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = cli.resolve_config()?;
    info!(
        listen = %config.api.socket_addr(),
        known_seeds = config.peers.known.len(),
        "starting ledgerview node"
    );

    let store = Arc::new(InMemoryChainStore::new());
    let bus = Arc::new(InMemoryDataBus::new());

    let peer_table = Arc::new(PeerTable::new());
    peer_table.seed_known(&config.peers.known);
    bus.register(
        CONNECTED_PEER_ADDRESSES,
        Arc::new(ConnectedPeersProducer::new(Arc::clone(&peer_table))),
    );
    bus.register(
        KNOWN_PEER_ADDRESSES,
        Arc::new(KnownPeersProducer::new(Arc::clone(&peer_table))),
    );

    let service = ApiService::new(
        config.api.clone(),
        Arc::clone(&store) as Arc<dyn ChainStore>,
        Arc::clone(&bus) as Arc<dyn DataBus>,
    )?;
    let server = service.start().await?;

    tokio::signal::ctrl_c().await?;
    info!("shutdown signal received");
    server.abort();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerview_api::ApiConfig;

    #[test]
    fn test_cli_overrides_config_file() {
        let cli = Cli {
            config: None,
            listen_host: Some("0.0.0.0".parse().unwrap()),
            listen_port: Some(40000),
            log_level: "info".to_string(),
        };
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.api.socket_addr().to_string(), "0.0.0.0:40000");
    }

    #[test]
    fn test_defaults_without_config_file() {
        let cli = Cli {
            config: None,
            listen_host: None,
            listen_port: None,
            log_level: "info".to_string(),
        };
        let config = cli.resolve_config().unwrap();
        assert_eq!(
            config.api.listen_port,
            ApiConfig::default().listen_port
        );
    }
}

//! Provider construction from the process environment
//!
//! Mirrors the Anchor CLI convention: `ANCHOR_PROVIDER_URL` selects the
//! cluster (a moniker or a custom RPC URL) and `ANCHOR_WALLET` points at the
//! signing keypair file.

use crate::{Result, SdkError};
use anchor_client::Cluster;
use solana_sdk::signature::{read_keypair_file, Keypair};

pub const PROVIDER_URL_ENV: &str = "ANCHOR_PROVIDER_URL";
pub const WALLET_ENV: &str = "ANCHOR_WALLET";

const DEFAULT_WALLET: &str = "~/.config/solana/id.json";

/// Cluster endpoint plus signing identity for one run
#[derive(Clone, Debug)]
pub struct Provider {
    pub cluster: Cluster,
    pub wallet_path: String,
}

impl Provider {
    /// Build a provider from the process environment.
    ///
    /// `ANCHOR_PROVIDER_URL` is required. `ANCHOR_WALLET` falls back to the
    /// default Solana CLI keypair location, tilde-expanded.
    pub fn env() -> Result<Self> {
        let url = std::env::var(PROVIDER_URL_ENV)
            .map_err(|_| SdkError::MissingEnv(PROVIDER_URL_ENV))?;
        let wallet =
            std::env::var(WALLET_ENV).unwrap_or_else(|_| DEFAULT_WALLET.to_string());

        Ok(Self {
            cluster: parse_cluster(&url),
            wallet_path: shellexpand::tilde(&wallet).to_string(),
        })
    }

    /// Load the signing keypair from the wallet file
    pub fn keypair(&self) -> Result<Keypair> {
        read_keypair_file(&self.wallet_path)
            .map_err(|_| SdkError::WalletUnreadable(self.wallet_path.clone()))
    }
}

/// Map a provider URL to a cluster.
///
/// Monikers select the well-known endpoints; anything else is treated as a
/// custom RPC URL with the websocket endpoint derived from it.
pub fn parse_cluster(url: &str) -> Cluster {
    match url {
        "localnet" | "localhost" => Cluster::Localnet,
        "devnet" => Cluster::Devnet,
        "testnet" => Cluster::Testnet,
        "mainnet" | "mainnet-beta" => Cluster::Mainnet,
        custom => Cluster::Custom(custom.to_string(), ws_url_for(custom)),
    }
}

/// Derive a websocket URL from an HTTP RPC URL.
///
/// Scheme flips to ws/wss and the default RPC port moves to the default
/// pubsub port, matching solana-test-validator's layout.
fn ws_url_for(rpc_url: &str) -> String {
    let (scheme, rest) = if let Some(rest) = rpc_url.strip_prefix("https://") {
        ("wss://", rest)
    } else if let Some(rest) = rpc_url.strip_prefix("http://") {
        ("ws://", rest)
    } else {
        ("ws://", rpc_url)
    };

    // Rewrite the port only where it ends the authority; hosts or paths
    // that merely contain "8899" stay untouched
    let (authority, path) = match rest.find('/') {
        Some(i) => rest.split_at(i),
        None => (rest, ""),
    };
    match authority.strip_suffix(":8899") {
        Some(host) => format!("{scheme}{host}:8900{path}"),
        None => format!("{scheme}{authority}{path}"),
    }
}

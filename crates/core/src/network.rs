//! Address version bytes per network.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The network an address belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    /// Version byte of pubkey-hash addresses.
    pub fn pubkey_address_version(self) -> u8 {
        match self {
            Network::Mainnet => 76,
            Network::Testnet => 140,
        }
    }

    /// Version byte of script-hash addresses.
    pub fn script_address_version(self) -> u8 {
        match self {
            Network::Mainnet => 16,
            Network::Testnet => 19,
        }
    }

    /// Which network and address kind a version byte belongs to, if any.
    pub fn from_version(version: u8) -> Option<(Network, AddressKind)> {
        [Network::Mainnet, Network::Testnet]
            .into_iter()
            .find_map(|network| {
                if version == network.pubkey_address_version() {
                    Some((network, AddressKind::PubkeyHash))
                } else if version == network.script_address_version() {
                    Some((network, AddressKind::ScriptHash))
                } else {
                    None
                }
            })
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Ok(Network::Mainnet),
            "testnet" | "test" => Ok(Network::Testnet),
            other => Err(format!("unknown network: {}", other)),
        }
    }
}

/// What an address hash commits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    PubkeyHash,
    ScriptHash,
}

impl AddressKind {
    pub fn version(self, network: Network) -> u8 {
        match self {
            AddressKind::PubkeyHash => network.pubkey_address_version(),
            AddressKind::ScriptHash => network.script_address_version(),
        }
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressKind::PubkeyHash => write!(f, "pubkey-hash"),
            AddressKind::ScriptHash => write!(f, "script-hash"),
        }
    }
}

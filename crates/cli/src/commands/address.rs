//! Address command.

use crate::config::Config;
use addrkit_core::check::{address_from_hash160, decode_versioned};
use addrkit_core::{AddressKind, Network, UInt160};
use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing::warn;

#[derive(Args)]
pub struct AddressArgs {
    #[command(subcommand)]
    command: AddressCommand,
}

#[derive(Subcommand)]
enum AddressCommand {
    /// Build an address from a 20-byte pubkey or script hash
    FromHash {
        /// Directory to store addrkit data
        #[arg(short, long, default_value = "./data")]
        data_dir: PathBuf,

        /// hash160 of the public key or script (hex format)
        hash: String,

        /// Use the script-hash version byte
        #[arg(short, long)]
        script: bool,
    },
    /// Verify an address and show what it encodes
    Parse {
        /// Directory to store addrkit data
        #[arg(short, long, default_value = "./data")]
        data_dir: PathBuf,

        /// Base58Check address
        address: String,
    },
}

pub fn run(args: AddressArgs) -> Result<()> {
    match args.command {
        AddressCommand::FromHash {
            data_dir,
            hash,
            script,
        } => from_hash(data_dir, hash, script),
        AddressCommand::Parse { data_dir, address } => parse_address(data_dir, address),
    }
}

fn from_hash(data_dir: PathBuf, hash_str: String, script: bool) -> Result<()> {
    let config = Config::load(&data_dir)?;
    let hash = UInt160::from_hex(&hash_str)
        .with_context(|| format!("Invalid hash160 (expected 40 hex characters): {}", hash_str))?;

    let version = config.address_version(address_kind(script));
    println!("{}", address_from_hash160(version, &hash));
    Ok(())
}

fn address_kind(script: bool) -> AddressKind {
    if script {
        AddressKind::ScriptHash
    } else {
        AddressKind::PubkeyHash
    }
}

fn parse_address(data_dir: PathBuf, address: String) -> Result<()> {
    let config = Config::load(&data_dir)?;
    let (version, payload) = decode_versioned(&address)
        .with_context(|| format!("Invalid address: {}", address))?;

    let hash = UInt160::from_bytes(&payload).context("Address payload is not a 20-byte hash")?;

    let (network, kind) = match Network::from_version(version) {
        Some(found) => found,
        None => bail!("Unknown address version byte: {}", version),
    };
    if network != config.network {
        warn!(%network, configured = %config.network, "address belongs to another network");
    }

    println!();
    println!("  Address:  {}", address.bright_yellow());
    println!("  Network:  {}", network.to_string().bright_cyan());
    println!("  Kind:     {}", kind.to_string().bright_cyan());
    println!("  Version:  {}", version.to_string().bright_cyan());
    println!("  Hash:     {}", hash.to_hex().bright_black());
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use addrkit_core::check::hash160_from_address;

    #[test]
    fn test_configured_versions_build_addresses() {
        let config = Config::for_network(Network::Testnet);
        let hash = UInt160([0x11; 20]);
        let version = config.address_version(address_kind(true));
        assert_eq!(version, 19);
        let address = address_from_hash160(version, &hash);

        let (version, _) = decode_versioned(&address).unwrap();
        assert_eq!(
            Network::from_version(version),
            Some((Network::Testnet, AddressKind::ScriptHash))
        );
        assert_eq!(
            hash160_from_address(&address, version).unwrap(),
            hash
        );
    }

    #[test]
    fn test_address_kind_selects_version() {
        let config = Config::for_network(Network::Mainnet);
        assert_eq!(config.address_version(address_kind(false)), 76);
        assert_eq!(config.address_version(address_kind(true)), 16);

        let hash = UInt160([0x42; 20]);
        let address = address_from_hash160(config.address_version(address_kind(false)), &hash);
        assert!(address.starts_with('X'));
    }
}

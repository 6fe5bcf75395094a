//! Initialize data directory command.

use crate::config::Config;
use addrkit_core::{AddressKind, Network};
use addrkit_storage::Storage;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args)]
pub struct InitArgs {
    /// Directory to store addrkit data
    #[arg(short, long, default_value = "./data")]
    data_dir: PathBuf,

    /// Network whose address versions to use (mainnet or testnet)
    #[arg(short, long, default_value = "mainnet")]
    network: String,
}

pub fn run(args: InitArgs) -> Result<()> {
    let network: Network = args.network.parse().map_err(anyhow::Error::msg)?;

    println!("{}", "Initializing addrkit...".bold().cyan());
    println!();

    fs::create_dir_all(&args.data_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", args.data_dir))?;
    println!("{}  Created data directory", "✓".green().bold());

    let config = Config::for_network(network);
    let config_path = config.save(&args.data_dir)?;
    println!(
        "{}  Wrote config: {}",
        "✓".green().bold(),
        config_path.display().to_string().bright_black()
    );

    let storage = Storage::open(&args.data_dir).with_context(|| "Failed to open storage")?;
    storage.flush()?;
    println!("{}  Opened field store", "✓".green().bold());
    info!(data_dir = ?args.data_dir, %network, "initialized data directory");

    println!();
    println!("  Network:         {}", network.to_string().bright_yellow());
    println!(
        "  Pubkey version:  {}",
        config
            .address_version(AddressKind::PubkeyHash)
            .to_string().bright_cyan()
    );
    println!(
        "  Script version:  {}",
        config
            .address_version(AddressKind::ScriptHash)
            .to_string().bright_cyan()
    );
    println!();

    Ok(())
}

//! 256-bit value command.

use addrkit_core::UInt256;
use addrkit_storage::Storage;
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct Uint256Args {
    #[command(subcommand)]
    command: Uint256Command,
}

#[derive(Subcommand)]
enum Uint256Command {
    /// Show the hex, reversed and Base58 forms of a value
    Show {
        /// 64 hex characters
        value: String,
    },
    /// Store a value under a label
    Put {
        /// Directory to store addrkit data
        #[arg(short, long, default_value = "./data")]
        data_dir: PathBuf,

        /// Field label
        label: String,

        /// 64 hex characters
        value: String,
    },
    /// Load the value stored under a label
    Get {
        /// Directory to store addrkit data
        #[arg(short, long, default_value = "./data")]
        data_dir: PathBuf,

        /// Field label
        label: String,
    },
    /// List stored labels
    List {
        /// Directory to store addrkit data
        #[arg(short, long, default_value = "./data")]
        data_dir: PathBuf,
    },
}

pub fn run(args: Uint256Args) -> Result<()> {
    match args.command {
        Uint256Command::Show { value } => show(value),
        Uint256Command::Put {
            data_dir,
            label,
            value,
        } => put(data_dir, label, value),
        Uint256Command::Get { data_dir, label } => get(data_dir, label),
        Uint256Command::List { data_dir } => list(data_dir),
    }
}

fn parse_value(value: &str) -> Result<UInt256> {
    UInt256::from_hex(value)
        .with_context(|| format!("Invalid 256-bit value (expected 64 hex characters): {}", value))
}

fn open_storage(data_dir: &Path) -> Result<Storage> {
    Storage::open(data_dir)
        .with_context(|| "Failed to open storage. Did you run 'addrkit init'?")
}

fn show(value: String) -> Result<()> {
    let value = parse_value(&value)?;

    println!();
    println!("  Hex:       {}", value.to_hex().bright_yellow());
    println!("  Reversed:  {}", value.reversed().to_hex().bright_black());
    println!("  Short:     {}", value.short_hex().bright_cyan());
    println!("  Base58:    {}", value.to_base58().bright_cyan());
    println!("  Tx key:    {}", Storage::tx_key(&value).bright_black());
    println!();

    Ok(())
}

fn put(data_dir: PathBuf, label: String, value: String) -> Result<()> {
    let value = parse_value(&value)?;
    let mut storage = open_storage(&data_dir)?;

    storage.put_uint256(&label, &value)?;
    storage.flush()?;

    println!(
        "{}  Stored {} = {}",
        "✓".green().bold(),
        label.bright_yellow(),
        value.to_hex().bright_black()
    );
    Ok(())
}

fn get(data_dir: PathBuf, label: String) -> Result<()> {
    let storage = open_storage(&data_dir)?;

    let value = storage.require_uint256(&label)?;
    println!("{}", value);
    Ok(())
}

fn list(data_dir: PathBuf) -> Result<()> {
    let storage = open_storage(&data_dir)?;
    let labels = storage.field_labels()?;

    if labels.is_empty() {
        println!("{}", "No stored values.".yellow());
        return Ok(());
    }

    println!("{}", "Stored Values:".bold().cyan());
    println!();
    for label in labels {
        if let Some(value) = storage.get_uint256(&label)? {
            println!(
                "  {} {}",
                format!("{}:", label).bright_black(),
                value.short_hex().bright_yellow()
            );
        }
    }
    println!();

    Ok(())
}

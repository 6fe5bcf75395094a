//! Plain Base58 command.

use addrkit_core::{base58, decode_hex, encode_hex};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};

#[derive(Args)]
pub struct Base58Args {
    #[command(subcommand)]
    command: Base58Command,
}

#[derive(Subcommand)]
enum Base58Command {
    /// Encode hex bytes as Base58
    Encode {
        /// Payload bytes (hex format)
        hex: String,
    },
    /// Decode Base58 to hex bytes
    Decode {
        /// Base58 string
        value: String,
    },
}

pub fn run(args: Base58Args) -> Result<()> {
    let output = match args.command {
        Base58Command::Encode { hex } => encode_hex_input(&hex)?,
        Base58Command::Decode { value } => decode_to_hex(&value)?,
    };
    println!("{}", output);
    Ok(())
}

fn encode_hex_input(hex: &str) -> Result<String> {
    let data = decode_hex(hex).with_context(|| format!("Invalid hex input: {}", hex))?;
    Ok(base58::encode(&data))
}

fn decode_to_hex(value: &str) -> Result<String> {
    let data =
        base58::decode(value).with_context(|| format!("Failed to decode Base58: {}", value))?;
    Ok(encode_hex(&data))
}

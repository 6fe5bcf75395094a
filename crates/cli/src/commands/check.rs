//! Base58Check command.

use addrkit_core::{base58check_to_hex, hex_to_base58check};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};

#[derive(Args)]
pub struct CheckArgs {
    #[command(subcommand)]
    command: CheckCommand,
}

#[derive(Subcommand)]
enum CheckCommand {
    /// Encode a hex payload as Base58Check
    Encode {
        /// Payload bytes (hex format)
        hex: String,
    },
    /// Verify a Base58Check string and print its payload as hex
    Decode {
        /// Base58Check string
        value: String,
    },
}

pub fn run(args: CheckArgs) -> Result<()> {
    let output = match args.command {
        CheckCommand::Encode { hex } => encode_payload(&hex)?,
        CheckCommand::Decode { value } => decode_payload(&value)?,
    };
    println!("{}", output);
    Ok(())
}

fn encode_payload(hex: &str) -> Result<String> {
    hex_to_base58check(hex).with_context(|| format!("Invalid hex input: {}", hex))
}

fn decode_payload(value: &str) -> Result<String> {
    base58check_to_hex(value).with_context(|| format!("Failed to decode Base58Check: {}", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use addrkit_core::CodecError;

    const PAYLOAD: &str = "00010966776006953d5567439e5e39f86a0d273bee";
    const ADDRESS: &str = "16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM";

    #[test]
    fn test_encode_decode_roundtrip() {
        assert_eq!(encode_payload(PAYLOAD).unwrap(), ADDRESS);
        assert_eq!(decode_payload(ADDRESS).unwrap(), PAYLOAD);
    }

    #[test]
    fn test_decode_reports_checksum_mismatch() {
        let corrupted = format!("{}N", &ADDRESS[..ADDRESS.len() - 1]);
        let err = decode_payload(&corrupted).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CodecError>(),
            Some(CodecError::ChecksumMismatch { .. })
        ));
    }
}

//! Digest command.

use addrkit_core::{decode_hex, encode_hex, hash160, sha256, sha256d};
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Algorithm {
    Sha256,
    Sha256d,
    Hash160,
}

#[derive(Args)]
pub struct HashArgs {
    /// Digest to compute
    #[arg(value_enum)]
    algorithm: Algorithm,

    /// Input bytes as hex (or text with --text)
    input: String,

    /// Treat the input as UTF-8 text instead of hex
    #[arg(short, long)]
    text: bool,
}

pub fn run(args: HashArgs) -> Result<()> {
    let data = input_bytes(&args.input, args.text)?;
    println!("{}", digest_hex(args.algorithm, &data));
    Ok(())
}

fn input_bytes(input: &str, text: bool) -> Result<Vec<u8>> {
    if text {
        return Ok(input.as_bytes().to_vec());
    }
    decode_hex(input).with_context(|| format!("Invalid hex input: {}", input))
}

fn digest_hex(algorithm: Algorithm, data: &[u8]) -> String {
    match algorithm {
        Algorithm::Sha256 => encode_hex(&sha256(data)),
        Algorithm::Sha256d => encode_hex(&sha256d(data)),
        Algorithm::Hash160 => encode_hex(&hash160(data)),
    }
}

//! CLI commands module.

use anyhow::Result;
use clap::Subcommand;

mod address;
mod base58;
mod check;
mod hash;
mod init;
mod uint256;

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a data directory and its config
    Init(init::InitArgs),
    /// Compute SHA-256, double SHA-256 or hash160 digests
    Hash(hash::HashArgs),
    /// Plain Base58 encoding (no checksum)
    Base58(base58::Base58Args),
    /// Base58Check encoding with checksum verification
    Check(check::CheckArgs),
    /// Build and parse network addresses
    Address(address::AddressArgs),
    /// Inspect and persist 256-bit values
    Uint256(uint256::Uint256Args),
}

pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Init(args) => init::run(args),
        Commands::Hash(args) => hash::run(args),
        Commands::Base58(args) => base58::run(args),
        Commands::Check(args) => check::run(args),
        Commands::Address(args) => address::run(args),
        Commands::Uint256(args) => uint256::run(args),
    }
}

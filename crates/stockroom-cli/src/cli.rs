use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "stockroom",
    about = "Stockroom — warehouse inventory service",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the Stockroom API server
    Serve(ServeArgs),
    /// Mint a bearer token for the configured secret
    Token(TokenArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Bind address, overriding the config file
    #[arg(long)]
    pub bind: Option<SocketAddr>,

    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct TokenArgs {
    /// Token subject (who the token acts as)
    pub subject: String,

    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Validity window in seconds, overriding the config default
    #[arg(long)]
    pub ttl_secs: Option<u64>,

    /// Shared secret, overriding the config file
    #[arg(long)]
    pub secret: Option<String>,
}

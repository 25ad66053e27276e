use std::path::PathBuf;

use anyhow::Context;
use chrono::{Duration, Utc};
use colored::Colorize;
use stockroom_engine::InventoryService;
use stockroom_server::{ServerConfig, StockroomServer, TokenSigner};

use crate::cli::{Cli, Command, ServeArgs, TokenArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => serve(args),
        Command::Token(args) => token(args),
    }
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<ServerConfig> {
    match path {
        Some(path) => ServerConfig::load(&path)
            .with_context(|| format!("could not load config from {}", path.display())),
        None => Ok(ServerConfig::default()),
    }
}

fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config)?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    println!(
        "{} serving on {}",
        "stockroom".bold(),
        config.bind_addr.to_string().green()
    );
    let server = StockroomServer::new(config, InventoryService::in_memory());
    tokio::runtime::Runtime::new()?.block_on(server.serve())?;
    Ok(())
}

fn token(args: TokenArgs) -> anyhow::Result<()> {
    let config = load_config(args.config)?;
    let secret = args
        .secret
        .or(config.token_secret)
        .context("no token secret configured; pass --secret or set token_secret in the config")?;
    let ttl_secs = args.ttl_secs.unwrap_or(config.token_ttl_secs);
    let expires_at = Utc::now() + Duration::seconds(ttl_secs as i64);
    let token = TokenSigner::new(&secret).issue(&args.subject, expires_at);
    println!("{token}");
    Ok(())
}

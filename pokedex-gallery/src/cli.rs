//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use pokedex_common::config::CliOverrides;

/// Command-line arguments for pokedex-gallery
#[derive(Parser, Debug)]
#[command(name = "pokedex-gallery")]
#[command(about = "Searchable Pokédex card gallery")]
#[command(version)]
pub struct Args {
    /// Address to listen on (default 127.0.0.1:5780)
    #[arg(short, long, env = "POKEDEX_BIND")]
    pub bind: Option<String>,

    /// JSON record file (default: bundled data)
    #[arg(short, long, env = "POKEDEX_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Tracing directive, e.g. "debug" or "pokedex_gallery=trace"
    #[arg(short, long, env = "POKEDEX_LOG")]
    pub log_level: Option<String>,

    /// Config file (default: <config dir>/pokedex/config.toml)
    #[arg(short, long, env = "POKEDEX_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            bind_address: self.bind.clone(),
            data_file: self.data_file.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

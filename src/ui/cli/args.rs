// Wed Jan 15 2026 - Alex

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jumpchain")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Recovers handler addresses from x86-64 JNE jump chains", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode the jump chain and print the handler table
    Build(BuildArgs),
    /// Only locate the chain preamble
    Scan(ScanArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct SourceArgs {
    /// ELF or Mach-O file containing the chain function
    #[arg(short, long)]
    pub binary: Option<PathBuf>,

    /// Symbol of the chain function inside --binary
    #[arg(short, long)]
    pub symbol: Option<String>,

    /// Raw code dump starting at the chain function
    #[arg(long)]
    pub raw: Option<PathBuf>,

    /// Virtual address of the first byte of --raw
    #[arg(long, value_parser = parse_address)]
    pub base: Option<u64>,

    /// JSON chain configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Anchor bytes, e.g. "b8 63 6a 78 6a 48 31 c0"
    #[arg(long)]
    pub anchor: Option<String>,

    #[arg(long)]
    pub scan_limit: Option<usize>,
}

#[derive(ClapArgs, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Number of handlers in the chain
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Write the table as JSON
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct ScanArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

impl SourceArgs {
    pub fn validate(&self) -> Result<(), String> {
        match (&self.binary, &self.raw) {
            (None, None) => return Err("Either --binary or --raw must be specified".to_string()),
            (Some(_), Some(_)) => return Err("Cannot specify both --binary and --raw".to_string()),
            _ => {}
        }
        if self.binary.is_some() && self.symbol.is_none() {
            return Err("--binary requires --symbol".to_string());
        }
        if self.raw.is_some() && self.base.is_none() {
            return Err("--raw requires --base".to_string());
        }
        if let Some(config) = &self.config {
            if !config.exists() {
                return Err(format!("Config file does not exist: {:?}", config));
            }
        }
        Ok(())
    }
}

/// Accepts `0x`-prefixed hex or plain decimal.
pub fn parse_address(s: &str) -> Result<u64, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse::<u64>(),
    };
    parsed.map_err(|e| format!("invalid address '{}': {}", s, e))
}

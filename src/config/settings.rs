//! Command line arguments and environment variable handling

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

// Configuration constants
pub const DEFAULT_RPC_URL: &str = "https://api.zq2-mainnet.zilliqa.com";
pub const RPC_URL_ENV: &str = "ZQ2_RPC";
pub const LOG_DIR_ENV: &str = "LST_PRICES_LOG_DIR";
pub const RPC_TIMEOUT_SECS: u64 = 30;

/// Searched in order when no pools are given explicitly.
pub const POOL_FILE_CANDIDATES: &[&str] = &[
    "pools.json",
    "public/pools.json",
    "src/data/pools.json",
    "src/shared/constants/pools.json",
];

#[derive(Parser, Debug, Clone)]
#[command(name = "lst-prices", version)]
#[command(about = "Fetch ZQ2 LST prices (1 LST ≃ X ZIL) from delegation proxies.", long_about = None)]
pub struct Cli {
    /// RPC URL
    #[arg(long, env = RPC_URL_ENV, default_value = DEFAULT_RPC_URL)]
    pub rpc: String,

    /// JSON file: [{"name": "Amazing Pool", "proxy": "0x..."}, ...]
    #[arg(long)]
    pub pools_json: Option<PathBuf>,

    /// Output JSON instead of table
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v=info, -vv=debug, -vvv=trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Also write logs to a daily file in this directory
    #[arg(long, env = LOG_DIR_ENV)]
    pub log_dir: Option<PathBuf>,

    /// Delegation proxy addresses (0x...)
    #[arg(value_name = "PROXY")]
    pub proxies: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Table,
    Json,
}

/// Where the pool list comes from, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolSource {
    File(PathBuf),
    Addresses(Vec<String>),
    Discover,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub rpc_url: String,
    pub rpc_timeout: Duration,
    pub pool_source: PoolSource,
    pub output: OutputMode,
    pub verbosity: u8,
    pub log_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        let pool_source = match (cli.pools_json, cli.proxies.is_empty()) {
            (Some(path), _) => PoolSource::File(path),
            (None, false) => PoolSource::Addresses(cli.proxies),
            (None, true) => PoolSource::Discover,
        };

        Self {
            rpc_url: cli.rpc,
            rpc_timeout: Duration::from_secs(RPC_TIMEOUT_SECS),
            pool_source,
            output: if cli.json { OutputMode::Json } else { OutputMode::Table },
            verbosity: cli.verbose,
            log_dir: cli.log_dir,
        }
    }

    /// Default stderr filter directive for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

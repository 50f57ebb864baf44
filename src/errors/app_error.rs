//! Fatal errors that abort the whole run

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for every fatal error that is not an RPC failure.
pub const EXIT_FAILURE: u8 = 1;
/// Exit code for an RPC endpoint that cannot be reached.
pub const EXIT_RPC: u8 = 2;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid RPC URL {url}")]
    InvalidRpcUrl {
        url: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("cannot connect to RPC {url}")]
    RpcUnreachable {
        url: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to read {}: {source:#}", .path.display())]
    PoolsFile {
        path: PathBuf,
        source: anyhow::Error,
    },

    #[error("No pools provided. Use --pools-json or pass proxy addresses.")]
    NoPools,

    #[error("failed to render results: {0}")]
    Render(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::InvalidRpcUrl { .. } | AppError::RpcUnreachable { .. } => EXIT_RPC,
            AppError::PoolsFile { .. } | AppError::NoPools | AppError::Render(_) => EXIT_FAILURE,
        }
    }
}

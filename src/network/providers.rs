//! Network provider setup

use alloy::{
    providers::{Provider, ProviderBuilder},
    rpc::client::RpcClient,
    transports::http::Http,
};
use anyhow::Context;
use std::sync::Arc;
use tracing::{debug, info};
use crate::{
    config::Config,
    errors::{AppError, AppResult},
    ConcreteProvider,
};

/// Build the HTTP provider and make one round trip to prove the endpoint answers.
pub async fn setup_provider(config: &Config) -> AppResult<Arc<ConcreteProvider>> {
    let url: reqwest::Url = config.rpc_url.parse().map_err(|e| AppError::InvalidRpcUrl {
        url: config.rpc_url.clone(),
        source: anyhow::anyhow!("{}", e),
    })?;

    let client = reqwest::Client::builder()
        .timeout(config.rpc_timeout)
        .build()
        .map_err(|e| AppError::RpcUnreachable {
            url: config.rpc_url.clone(),
            source: anyhow::Error::new(e).context("Failed to build HTTP client"),
        })?;

    let rpc_client = RpcClient::new(Http::with_client(client, url), false);
    let provider: Arc<ConcreteProvider> = Arc::new(
        ProviderBuilder::new()
            .on_client(rpc_client)
            .boxed()
    );

    debug!(rpc = %config.rpc_url, timeout_secs = config.rpc_timeout.as_secs(), "Connecting to RPC");
    let block = provider.get_block_number().await
        .context("Failed to get block number")
        .map_err(|source| AppError::RpcUnreachable {
            url: config.rpc_url.clone(),
            source,
        })?;

    info!(rpc = %config.rpc_url, block, "Connected to RPC");
    Ok(provider)
}

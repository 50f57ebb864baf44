//! One complete run: connect, resolve, probe, render

use tracing::info;
use crate::{
    config::{Config, OutputMode},
    errors::{AppError, AppResult},
    network::setup_provider,
    pools::resolve_pools,
    probe::probe_pools,
    types::ProbeResult,
    utils::{render_json, render_table_now},
};

/// Connect to the RPC endpoint, then probe every resolved pool.
///
/// The endpoint is checked before the pool list so an unreachable RPC is
/// reported even when the pools file is also broken.
pub async fn collect_results(config: &Config) -> AppResult<Vec<ProbeResult>> {
    let provider = setup_provider(config).await?;
    let pools = resolve_pools(&config.pool_source)?;

    let results = probe_pools(provider.as_ref(), &pools).await;
    let failed = results.iter().filter(|r| r.error().is_some()).count();
    info!(pools = results.len(), failed, "Probing complete");

    Ok(results)
}

pub fn render(results: &[ProbeResult], output: OutputMode) -> AppResult<String> {
    match output {
        OutputMode::Json => render_json(results).map_err(AppError::Render),
        OutputMode::Table => Ok(render_table_now(results)),
    }
}

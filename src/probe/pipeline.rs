//! Turn pool descriptors into probe results, one pool at a time

use alloy::primitives::Address;
use std::str::FromStr;
use tracing::{info, warn};
use crate::{
    contracts::{detect_lst, fetch_rate, fetch_token_metadata},
    network::ContractCaller,
    types::{PoolDescriptor, ProbeResult},
};

/// Probe every pool in order. A failing pool yields an error record, never
/// an early return, so the output always has one entry per pool.
pub async fn probe_pools<C: ContractCaller>(caller: &C, pools: &[PoolDescriptor]) -> Vec<ProbeResult> {
    let mut results = Vec::with_capacity(pools.len());

    for (index, pool) in pools.iter().enumerate() {
        info!(pool = %pool.name, proxy = %pool.proxy, "Probing pool {}/{}", index + 1, pools.len());
        results.push(probe_pool(caller, pool).await);
    }

    results
}

pub async fn probe_pool<C: ContractCaller>(caller: &C, pool: &PoolDescriptor) -> ProbeResult {
    let proxy = match Address::from_str(pool.proxy.trim()) {
        Ok(proxy) => proxy,
        Err(e) => {
            warn!(pool = %pool.name, proxy = %pool.proxy, "Invalid proxy address: {}", e);
            return ProbeResult::invalid_proxy(&pool.name, &pool.proxy, &e.to_string());
        }
    };

    let Some(lst) = detect_lst(caller, proxy).await else {
        warn!(pool = %pool.name, proxy = %proxy, "No LST detected");
        return ProbeResult::no_lst(&pool.name, proxy);
    };

    let rate = fetch_rate(caller, proxy)
        .await
        .inspect_err(|e| warn!(pool = %pool.name, proxy = %proxy, "getPrice failed: {}", e))
        .ok();
    let meta = fetch_token_metadata(caller, lst).await;

    info!(
        pool = %pool.name,
        lst = %lst,
        symbol = %meta.symbol,
        token_name = %meta.name,
        decimals = meta.decimals,
        rate = ?rate,
        "Pool probed"
    );

    ProbeResult::with_token(&pool.name, proxy, lst, &meta, rate)
}

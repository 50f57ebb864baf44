//! Pools file parsing and pool source resolution

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use crate::{
    config::{PoolSource, POOL_FILE_CANDIDATES},
    errors::{AppError, AppResult},
    types::PoolDescriptor,
};

const NAME_KEYS: &[&str] = &["name", "title"];
const PROXY_KEYS: &[&str] = &["proxy", "delegation", "delegationProxy", "address"];

/// Produce the pool list for a run, relative to the current directory.
pub fn resolve_pools(source: &PoolSource) -> AppResult<Vec<PoolDescriptor>> {
    resolve_pools_in(source, Path::new("."))
}

/// Like [`resolve_pools`], but discovery searches under `root`.
pub fn resolve_pools_in(source: &PoolSource, root: &Path) -> AppResult<Vec<PoolDescriptor>> {
    let pools = match source {
        PoolSource::File(path) => load_pools_from_json(path).map_err(|e| AppError::PoolsFile {
            path: path.clone(),
            source: e,
        })?,
        PoolSource::Addresses(addresses) => addresses
            .iter()
            .enumerate()
            .map(|(i, proxy)| PoolDescriptor::new(PoolDescriptor::default_name(i), proxy.clone()))
            .collect(),
        PoolSource::Discover => discover_pools(root),
    };

    if pools.is_empty() {
        return Err(AppError::NoPools);
    }

    info!(count = pools.len(), "Resolved pools");
    Ok(pools)
}

pub fn load_pools_from_json(path: &Path) -> Result<Vec<PoolDescriptor>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Can not read pools file {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("Can not parse pools file {}", path.display()))?;

    parse_pools(&value)
}

/// Extract pool descriptors from a JSON array, keeping input order.
///
/// Entries that are not objects or carry no recognised proxy key are skipped;
/// default names count every entry, skipped or not.
pub fn parse_pools(value: &Value) -> Result<Vec<PoolDescriptor>> {
    let entries = value
        .as_array()
        .ok_or_else(|| anyhow::anyhow!("expected a JSON array of pools"))?;

    let pools = entries
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            let Some(object) = entry.as_object() else {
                debug!(index = i, "Skipping non-object pool entry");
                return None;
            };
            let Some(proxy) = first_text(object, PROXY_KEYS) else {
                debug!(index = i, "Skipping pool entry without proxy");
                return None;
            };
            let name = first_text(object, NAME_KEYS)
                .map(str::to_string)
                .unwrap_or_else(|| PoolDescriptor::default_name(i));

            Some(PoolDescriptor::new(name, proxy))
        })
        .collect();

    Ok(pools)
}

fn first_text<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| object.get(*key).and_then(Value::as_str))
        .find(|text| !text.is_empty())
}

/// Use the first conventional pools file under `root` that parses.
pub fn discover_pools(root: &Path) -> Vec<PoolDescriptor> {
    for candidate in POOL_FILE_CANDIDATES {
        let path = root.join(candidate);
        if !path.is_file() {
            continue;
        }

        match load_pools_from_json(&path) {
            Ok(pools) => {
                info!(path = %path.display(), count = pools.len(), "Discovered pools file");
                return pools;
            }
            Err(e) => warn!(path = %path.display(), "Ignoring pools file: {:#}", e),
        }
    }

    Vec::new()
}

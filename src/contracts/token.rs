//! LST token metadata reads

use alloy::{
    primitives::{Address, Bytes},
    sol_types::{sol_data, SolType},
};
use tracing::debug;
use crate::{
    contracts::abi::{decode_error, decode_text, TextAbi, DECIMALS, NAME, SYMBOL},
    errors::CallResult,
    network::ContractCaller,
    types::{TokenMetadata, DEFAULT_DECIMALS, DEFAULT_SYMBOL},
};

/// Read `symbol()`, `name()` and `decimals()`, each independently.
///
/// A failed or empty field falls back to its default without affecting the
/// other two.
pub async fn fetch_token_metadata<C: ContractCaller>(caller: &C, token: Address) -> TokenMetadata {
    let symbol = read_text(caller, token, "symbol", SYMBOL.clone()).await;
    let name = read_text(caller, token, "name", NAME.clone()).await;
    let decimals = read_decimals(caller, token).await;

    combine_metadata(token, symbol, name, decimals)
}

async fn read_text<C: ContractCaller>(
    caller: &C,
    token: Address,
    method: &'static str,
    selector: Bytes,
) -> CallResult<Option<String>> {
    let data = caller.eth_call(token, method, selector).await?;

    Ok(decode_text(token, method, &data)?.map(|(shape, text)| {
        if shape == TextAbi::Bytes32 {
            debug!(token = %token, method, "Decoded bytes32 metadata");
        }
        text
    }))
}

async fn read_decimals<C: ContractCaller>(caller: &C, token: Address) -> CallResult<u8> {
    let data = caller.eth_call(token, "decimals", DECIMALS.clone()).await?;
    <sol_data::Uint<8> as SolType>::abi_decode(&data, true).map_err(|e| decode_error(token, "decimals", e))
}

fn combine_metadata(
    token: Address,
    symbol: CallResult<Option<String>>,
    name: CallResult<Option<String>>,
    decimals: CallResult<u8>,
) -> TokenMetadata {
    let symbol = symbol
        .inspect_err(|e| debug!(token = %token, "symbol unavailable: {}", e))
        .ok()
        .flatten()
        .unwrap_or_else(|| DEFAULT_SYMBOL.to_string());
    let name = name
        .inspect_err(|e| debug!(token = %token, "name unavailable: {}", e))
        .ok()
        .flatten()
        .unwrap_or_default();
    let decimals = decimals
        .inspect_err(|e| debug!(token = %token, "decimals unavailable: {}", e))
        .unwrap_or(DEFAULT_DECIMALS);

    TokenMetadata { symbol, name, decimals }
}

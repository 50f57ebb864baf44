//! Delegation proxy reads: LST lookup and exchange rate

use alloy::{
    primitives::{Address, Bytes, U256},
    sol_types::SolValue,
};
use rust_decimal::Decimal;
use tracing::debug;
use crate::{
    contracts::abi::{decode_error, GET_LST, GET_PRICE, LST},
    errors::{CallError, CallResult},
    network::ContractCaller,
    utils::from_fixed_point,
};

/// `getPrice()` is scaled by 10^18.
pub const PRICE_DECIMALS: u32 = 18;

/// Find the LST behind a proxy.
///
/// Newer proxies expose `getLST()`, older ones `lst()`. The first call that
/// returns a non-zero address wins.
pub async fn detect_lst<C: ContractCaller>(caller: &C, proxy: Address) -> Option<Address> {
    let getters: [(&'static str, &Bytes); 2] = [("getLST", &*GET_LST), ("lst", &*LST)];

    for (method, selector) in getters {
        match read_address(caller, proxy, method, selector.clone()).await {
            Ok(lst) => {
                debug!(proxy = %proxy, method, lst = %lst, "LST detected");
                return Some(lst);
            }
            Err(e) => debug!(proxy = %proxy, method, "LST lookup failed: {}", e),
        }
    }

    None
}

async fn read_address<C: ContractCaller>(
    caller: &C,
    contract: Address,
    method: &'static str,
    selector: Bytes,
) -> CallResult<Address> {
    let data = caller.eth_call(contract, method, selector).await?;
    let address = Address::abi_decode(&data, true)
        .map_err(|e| decode_error(contract, method, e))?;

    if address == Address::ZERO {
        return Err(CallError::ZeroAddress { contract, method });
    }
    Ok(address)
}

/// Native coin per LST, as an exact decimal.
pub async fn fetch_rate<C: ContractCaller>(caller: &C, proxy: Address) -> CallResult<Decimal> {
    const METHOD: &str = "getPrice";

    let data = caller.eth_call(proxy, METHOD, GET_PRICE.clone()).await?;
    let raw = U256::abi_decode(&data, true)
        .map_err(|e| decode_error(proxy, METHOD, e))?;

    from_fixed_point(raw, PRICE_DECIMALS).ok_or_else(|| CallError::OutOfRange {
        contract: proxy,
        method: METHOD,
        value: raw.to_string(),
    })
}

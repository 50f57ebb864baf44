//! Raw `eth_call` seam between contract readers and the RPC provider

use alloy::{
    primitives::{Address, Bytes},
    providers::Provider,
    rpc::types::eth::TransactionRequest,
};
use crate::{
    errors::{CallError, CallResult},
    ConcreteProvider,
};

/// Issues read-only calls against deployed contracts.
///
/// The provider implementation is the only one used at runtime; the trait
/// exists so the probing pipeline can run against an in-memory chain.
#[allow(async_fn_in_trait)]
pub trait ContractCaller {
    async fn eth_call(&self, contract: Address, method: &'static str, calldata: Bytes)
        -> CallResult<Bytes>;
}

impl ContractCaller for ConcreteProvider {
    async fn eth_call(
        &self,
        contract: Address,
        method: &'static str,
        calldata: Bytes,
    ) -> CallResult<Bytes> {
        let tx = TransactionRequest::default()
            .to(contract)
            .input(calldata.into());

        Provider::call(self, &tx).await.map_err(|e| CallError::Rpc {
            contract,
            method,
            message: e.to_string(),
        })
    }
}

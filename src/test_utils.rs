//! In-memory chain used to exercise contract readers without an RPC endpoint

use alloy::{
    primitives::{Address, Bytes, U256},
    sol_types::SolValue,
};
use std::cell::RefCell;
use std::collections::HashMap;
use crate::{
    errors::{CallError, CallResult},
    network::ContractCaller,
};

/// Answers `eth_call` from a table keyed by contract and selector.
///
/// Anything not registered reverts, which is what a proxy without the
/// method does on chain.
#[derive(Default)]
pub struct FakeChain {
    responses: HashMap<(Address, Vec<u8>), Bytes>,
    calls: RefCell<Vec<(Address, &'static str)>>,
}

impl FakeChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, contract: Address, selector: &Bytes, data: Vec<u8>) -> Self {
        self.responses.insert((contract, selector.to_vec()), Bytes::from(data));
        self
    }

    pub fn with_address(self, contract: Address, selector: &Bytes, value: Address) -> Self {
        self.respond(contract, selector, value.abi_encode())
    }

    pub fn with_uint(self, contract: Address, selector: &Bytes, value: U256) -> Self {
        self.respond(contract, selector, value.abi_encode())
    }

    pub fn with_string(self, contract: Address, selector: &Bytes, value: &str) -> Self {
        self.respond(contract, selector, value.to_string().abi_encode())
    }

    /// Methods called so far, in order.
    pub fn calls(&self) -> Vec<(Address, &'static str)> {
        self.calls.borrow().clone()
    }
}

impl ContractCaller for FakeChain {
    async fn eth_call(
        &self,
        contract: Address,
        method: &'static str,
        calldata: Bytes,
    ) -> CallResult<Bytes> {
        self.calls.borrow_mut().push((contract, method));
        self.responses
            .get(&(contract, calldata.to_vec()))
            .cloned()
            .ok_or_else(|| CallError::Rpc {
                contract,
                method,
                message: "execution reverted".to_string(),
            })
    }
}

/// Right-padded bytes32 word holding `text`.
pub fn bytes32_word(text: &[u8]) -> Vec<u8> {
    let mut word = [0u8; 32];
    word[..text.len()].copy_from_slice(text);
    word.to_vec()
}

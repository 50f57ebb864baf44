//! JSON-RPC endpoint stand-in backed by mockito

use alloy::{
    primitives::{hex, keccak256, Address},
    sol_types::SolValue,
};
use lst_prices::{Cli, Config};
use clap::Parser;
use serde_json::{json, Value};
use std::collections::HashMap;

/// ABI-encoded return data for `signature` on `contract`.
pub struct Reply {
    pub contract: Address,
    pub signature: &'static str,
    pub data: Vec<u8>,
}

impl Reply {
    pub fn address(contract: Address, signature: &'static str, value: Address) -> Self {
        Self { contract, signature, data: value.abi_encode() }
    }

    pub fn value<T: SolValue>(contract: Address, signature: &'static str, value: T) -> Self {
        Self { contract, signature, data: value.abi_encode() }
    }

    pub fn raw(contract: Address, signature: &'static str, data: Vec<u8>) -> Self {
        Self { contract, signature, data }
    }
}

pub struct MockRpc {
    pub server: mockito::ServerGuard,
    _mock: mockito::Mock,
}

impl MockRpc {
    /// Serve `eth_blockNumber` and the given `eth_call` replies; any other call reverts.
    pub async fn start(replies: Vec<Reply>) -> Self {
        let table: HashMap<(String, String), String> = replies
            .into_iter()
            .map(|reply| {
                let key = (
                    format!("0x{}", hex::encode(reply.contract)),
                    hex::encode(&keccak256(reply.signature)[..4]),
                );
                (key, format!("0x{}", hex::encode(reply.data)))
            })
            .collect();

        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body_from_request(move |request| {
                let body: Value = serde_json::from_slice(request.body().unwrap()).unwrap();
                serde_json::to_vec(&answer(&table, &body)).unwrap()
            })
            .create_async()
            .await;

        Self { server, _mock: mock }
    }

    pub fn url(&self) -> String {
        self.server.url()
    }
}

fn answer(table: &HashMap<(String, String), String>, request: &Value) -> Value {
    let id = request["id"].clone();

    match request["method"].as_str() {
        Some("eth_blockNumber") => json!({"jsonrpc": "2.0", "id": id, "result": "0x1a2b3c"}),
        Some("eth_call") => {
            let tx = &request["params"][0];
            let to = tx["to"].as_str().unwrap_or_default().to_lowercase();
            let input = tx["input"]
                .as_str()
                .or_else(|| tx["data"].as_str())
                .unwrap_or_default()
                .trim_start_matches("0x")
                .to_lowercase();
            let selector = input.get(..8).unwrap_or_default().to_string();

            match table.get(&(to, selector)) {
                Some(result) => json!({"jsonrpc": "2.0", "id": id, "result": result}),
                None => json!({
                    "jsonrpc": "2.0",
                    "id": id,
                    "error": {"code": 3, "message": "execution reverted"}
                }),
            }
        }
        _ => json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": {"code": -32601, "message": "method not found"}
        }),
    }
}

pub fn config(args: &[&str]) -> Config {
    let cli = Cli::try_parse_from(std::iter::once("lst-prices").chain(args.iter().copied())).unwrap();
    Config::from_cli(cli)
}

/// Right-padded bytes32 word holding `text`.
pub fn bytes32_word(text: &[u8]) -> Vec<u8> {
    let mut word = [0u8; 32];
    word[..text.len()].copy_from_slice(text);
    word.to_vec()
}

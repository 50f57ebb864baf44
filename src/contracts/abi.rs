//! Function selectors and return-value decoding

use alloy::{
    primitives::{keccak256, Address, Bytes, FixedBytes},
    sol_types::SolValue,
};
use lazy_static::lazy_static;
use crate::errors::{CallError, CallResult};

fn selector(signature: &str) -> Bytes {
    Bytes::copy_from_slice(&keccak256(signature)[..4])
}

lazy_static! {
    pub static ref GET_PRICE: Bytes = selector("getPrice()");
    pub static ref GET_LST: Bytes = selector("getLST()");
    pub static ref LST: Bytes = selector("lst()");
    pub static ref SYMBOL: Bytes = selector("symbol()");
    pub static ref NAME: Bytes = selector("name()");
    pub static ref DECIMALS: Bytes = selector("decimals()");
}

/// Return shapes seen for ERC-20 text getters, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAbi {
    String,
    Bytes32,
}

impl TextAbi {
    pub const FALLBACK_ORDER: [TextAbi; 2] = [TextAbi::String, TextAbi::Bytes32];

    pub fn decode(self, data: &[u8]) -> Result<String, alloy::sol_types::Error> {
        match self {
            TextAbi::String => String::abi_decode(data, true),
            TextAbi::Bytes32 => {
                FixedBytes::<32>::abi_decode(data, true).map(|word| decode_bytes32(word.as_slice()))
            }
        }
    }
}

/// Trailing NULs are padding; invalid UTF-8 is replaced rather than rejected.
pub fn decode_bytes32(word: &[u8]) -> String {
    let end = word.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);
    String::from_utf8_lossy(&word[..end]).into_owned()
}

/// Decode a text getter result with the first shape that accepts the data.
///
/// `Ok(None)` means the data decoded cleanly to an empty string.
pub fn decode_text(
    contract: Address,
    method: &'static str,
    data: &[u8],
) -> CallResult<Option<(TextAbi, String)>> {
    let mut last_error = None;

    for shape in TextAbi::FALLBACK_ORDER {
        match shape.decode(data) {
            Ok(text) if text.is_empty() => return Ok(None),
            Ok(text) => return Ok(Some((shape, text))),
            Err(e) => last_error = Some(e),
        }
    }

    match last_error {
        Some(e) => Err(decode_error(contract, method, e)),
        None => Ok(None),
    }
}

pub fn decode_error(contract: Address, method: &'static str, e: alloy::sol_types::Error) -> CallError {
    CallError::Decode {
        contract,
        method,
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::bytes32_word;
    use alloy::primitives::{address, hex};

    const TOKEN: Address = address!("9e4e0f7a06e50da13c78cf8c83e907f792de54fd");

    #[test]
    fn selectors_match_known_signatures() {
        assert_eq!(SYMBOL.to_vec(), hex!("95d89b41").to_vec());
        assert_eq!(NAME.to_vec(), hex!("06fdde03").to_vec());
        assert_eq!(DECIMALS.to_vec(), hex!("313ce567").to_vec());
    }

    #[test]
    fn bytes32_trims_trailing_zeros() {
        assert_eq!(decode_bytes32(&bytes32_word(b"wZIL")), "wZIL");
        assert_eq!(decode_bytes32(&[0u8; 32]), "");
    }

    #[test]
    fn bytes32_replaces_invalid_utf8() {
        assert_eq!(decode_bytes32(&bytes32_word(&[b'a', 0xff, b'b'])), "a\u{fffd}b");
    }

    #[test]
    fn string_abi_is_preferred() {
        let data = "stZIL".to_string().abi_encode();
        let decoded = decode_text(TOKEN, "symbol", &data).unwrap();
        assert_eq!(decoded, Some((TextAbi::String, "stZIL".to_string())));
    }

    #[test]
    fn bytes32_is_used_when_string_decoding_fails() {
        let decoded = decode_text(TOKEN, "symbol", &bytes32_word(b"wZIL")).unwrap();
        assert_eq!(decoded, Some((TextAbi::Bytes32, "wZIL".to_string())));
    }

    #[test]
    fn empty_string_is_unresolved() {
        let data = String::new().abi_encode();
        assert_eq!(decode_text(TOKEN, "name", &data).unwrap(), None);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = decode_text(TOKEN, "symbol", &[1, 2, 3]).unwrap_err();
        assert!(matches!(err, CallError::Decode { method: "symbol", .. }));
    }
}

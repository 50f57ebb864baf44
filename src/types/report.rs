//! Per-pool probe results

use alloy::primitives::Address;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use super::TokenMetadata;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeErrorKind {
    /// The proxy text is not a 20-byte hex address.
    InvalidProxy,
    /// Neither `getLST()` nor `lst()` produced a token address.
    NoLst,
    /// The LST was found but `getPrice()` failed.
    PriceUnavailable,
}

impl ProbeErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            ProbeErrorKind::InvalidProxy => "Invalid proxy address",
            ProbeErrorKind::NoLst => "No LST detected (getLST/lst reverted)",
            ProbeErrorKind::PriceUnavailable => "getPrice reverted/failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PoolKind {
    #[serde(rename = "non-liquid-or-unknown")]
    NonLiquidOrUnknown,
}

/// Either a rate or the reason there is none, never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RateOutcome {
    Rate {
        rate_zil_per_lst: Decimal,
    },
    Failed {
        error: String,
        error_kind: ProbeErrorKind,
    },
}

impl RateOutcome {
    pub fn failed(kind: ProbeErrorKind) -> Self {
        RateOutcome::Failed {
            error: kind.message().to_string(),
            error_kind: kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeResult {
    pub pool: String,
    pub proxy: String,
    #[serde(serialize_with = "serialize_checksummed")]
    pub lst: Option<Address>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<PoolKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,
    #[serde(flatten)]
    pub outcome: RateOutcome,
}

impl ProbeResult {
    /// Record for a proxy whose text could not be parsed as an address.
    pub fn invalid_proxy(pool: &str, raw_proxy: &str, reason: &str) -> Self {
        Self {
            pool: pool.to_string(),
            proxy: raw_proxy.to_string(),
            lst: None,
            kind: None,
            symbol: None,
            decimals: None,
            outcome: RateOutcome::Failed {
                error: format!("{}: {}", ProbeErrorKind::InvalidProxy.message(), reason),
                error_kind: ProbeErrorKind::InvalidProxy,
            },
        }
    }

    pub fn no_lst(pool: &str, proxy: Address) -> Self {
        Self {
            pool: pool.to_string(),
            proxy: proxy.to_checksum(None),
            lst: None,
            kind: Some(PoolKind::NonLiquidOrUnknown),
            symbol: None,
            decimals: None,
            outcome: RateOutcome::failed(ProbeErrorKind::NoLst),
        }
    }

    pub fn with_token(
        pool: &str,
        proxy: Address,
        lst: Address,
        meta: &TokenMetadata,
        rate: Option<Decimal>,
    ) -> Self {
        let outcome = match rate {
            Some(rate_zil_per_lst) => RateOutcome::Rate { rate_zil_per_lst },
            None => RateOutcome::failed(ProbeErrorKind::PriceUnavailable),
        };

        Self {
            pool: pool.to_string(),
            proxy: proxy.to_checksum(None),
            lst: Some(lst),
            kind: None,
            symbol: Some(meta.symbol.clone()),
            decimals: Some(meta.decimals),
            outcome,
        }
    }

    pub fn rate(&self) -> Option<Decimal> {
        match &self.outcome {
            RateOutcome::Rate { rate_zil_per_lst } => Some(*rate_zil_per_lst),
            RateOutcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            RateOutcome::Rate { .. } => None,
            RateOutcome::Failed { error, .. } => Some(error),
        }
    }

    pub fn error_kind(&self) -> Option<ProbeErrorKind> {
        match &self.outcome {
            RateOutcome::Rate { .. } => None,
            RateOutcome::Failed { error_kind, .. } => Some(*error_kind),
        }
    }
}

fn serialize_checksummed<S: Serializer>(
    address: &Option<Address>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match address {
        Some(address) => serializer.serialize_str(&address.to_checksum(None)),
        None => serializer.serialize_none(),
    }
}

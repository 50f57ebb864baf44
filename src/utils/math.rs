//! Mathematical utility functions

use alloy::primitives::U256;
use rust_decimal::prelude::*;
use std::str::FromStr;

/// Interpret `raw` as a fixed-point value with `decimals` fractional digits.
///
/// Returns `None` when the integer does not fit a 96-bit decimal mantissa
/// or `decimals` exceeds the supported scale of 28.
pub fn from_fixed_point(raw: U256, decimals: u32) -> Option<Decimal> {
    let mut value = Decimal::from_str(&raw.to_string()).ok()?;
    value.set_scale(decimals).ok()?;
    Some(value.normalize())
}

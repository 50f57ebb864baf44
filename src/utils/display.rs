//! Table and JSON rendering of probe results

use chrono::Local;
use rust_decimal::RoundingStrategy;
use crate::types::{ProbeResult, RateOutcome};

const POOL_HEADER: &str = "Pool";
const SYMBOL_HEADER: &str = "Symbol";
const RATE_HEADER: &str = "Rate (1 LST ≃ X ZIL)";
const PROXY_HEADER: &str = "Proxy";
const MIN_RATE_WIDTH: usize = 24;
const ADDRESS_WIDTH: usize = 42;
const MISSING_SYMBOL: &str = "?";
const RATE_DECIMALS: u32 = 6;

/// Pretty JSON array; non-ASCII text is written as-is.
pub fn render_json(results: &[ProbeResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

pub fn render_table_now(results: &[ProbeResult]) -> String {
    let now = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    render_table(results, &now)
}

/// Column-aligned table. Columns grow to fit their widest cell.
pub fn render_table(results: &[ProbeResult], timestamp: &str) -> String {
    let rows: Vec<[String; 4]> = results.iter().map(table_row).collect();

    let width = |column: usize, minimum: usize| {
        rows.iter()
            .map(|row| row[column].chars().count())
            .fold(minimum, usize::max)
    };
    let pool_w = width(0, POOL_HEADER.len());
    let symbol_w = width(1, SYMBOL_HEADER.len());
    let rate_w = width(2, MIN_RATE_WIDTH);

    let mut out = format!("Time: {}\n\n", timestamp);
    out.push_str(&format!(
        "{:<pool_w$}  {:<symbol_w$}  {:<rate_w$}  {}\n",
        POOL_HEADER, SYMBOL_HEADER, RATE_HEADER, PROXY_HEADER
    ));
    out.push_str(&"-".repeat(pool_w + 2 + symbol_w + 2 + rate_w + 2 + ADDRESS_WIDTH));
    out.push('\n');

    for [pool, symbol, rate, proxy] in &rows {
        out.push_str(&format!("{:<pool_w$}  {:<symbol_w$}  {:<rate_w$}  {}\n", pool, symbol, rate, proxy));
    }

    out
}

fn table_row(result: &ProbeResult) -> [String; 4] {
    let rate = match &result.outcome {
        RateOutcome::Rate { rate_zil_per_lst } => {
            let rounded = rate_zil_per_lst
                .round_dp_with_strategy(RATE_DECIMALS, RoundingStrategy::MidpointNearestEven);
            format!("{:.6}", rounded)
        }
        RateOutcome::Failed { error, .. } => error.clone(),
    };

    [
        result.pool.clone(),
        result.symbol.clone().unwrap_or_else(|| MISSING_SYMBOL.to_string()),
        rate,
        result.proxy.clone(),
    ]
}

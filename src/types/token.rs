//! LST token metadata

pub const DEFAULT_SYMBOL: &str = "LST";
pub const DEFAULT_DECIMALS: u8 = 18;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMetadata {
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
}

impl Default for TokenMetadata {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_SYMBOL.to_string(),
            name: String::new(),
            decimals: DEFAULT_DECIMALS,
        }
    }
}

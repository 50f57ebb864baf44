//! Pool-related types and structures

/// A staking pool as named by the user, before any chain access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolDescriptor {
    pub name: String,
    /// Proxy address exactly as supplied; parsed when the pool is probed.
    pub proxy: String,
}

impl PoolDescriptor {
    pub fn new(name: impl Into<String>, proxy: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            proxy: proxy.into(),
        }
    }

    /// Name given to the pool at `index` when the source carries none.
    pub fn default_name(index: usize) -> String {
        format!("Pool {}", index + 1)
    }
}

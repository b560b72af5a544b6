//! Network configuration.

use serde::{Deserialize, Serialize};

/// Identifies which Ethereum network transactions are built for.
///
/// The chain id feeds the legacy replay-protection convention
/// (`v = chain_id * 2 + 35 + parity`) and the leading slot of typed
/// envelopes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub chain_id: u64,
}

impl NetworkConfig {
    /// Ethereum mainnet, chain id 1.
    pub fn mainnet() -> Self {
        Self { chain_id: 1 }
    }

    /// Sepolia test network.
    pub fn sepolia() -> Self {
        Self { chain_id: 11_155_111 }
    }

    pub fn custom(chain_id: u64) -> Self {
        Self { chain_id }
    }

    /// Human-readable name for known networks.
    pub fn name(&self) -> &'static str {
        match self.chain_id {
            1 => "mainnet",
            11_155_111 => "sepolia",
            _ => "custom",
        }
    }
}

//! Injected contract capabilities
//!
//! Transport lives outside this crate. Implementations of these traits
//! adapt a concrete RPC client or contract binding; everything here is
//! expressed in raw contract values (`u8` statuses, packed `u128` words)
//! which the wrappers decode.

use alloy_primitives::{Address, B256};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use quarrel_core::{ClaimData, GameMetadata};

/// Read access to one fault dispute game contract.
#[async_trait]
pub trait GameSource: Send + Sync {
    /// Number of claims made so far. Grows while the game is in progress.
    async fn claim_count(&self) -> anyhow::Result<u64>;

    /// The claim record at `index`.
    async fn claim_at(&self, index: u64) -> anyhow::Result<ClaimData>;

    /// The root claim commitment. Immutable.
    async fn root_claim(&self) -> anyhow::Result<B256>;

    /// L1 block hash the game was anchored to. Immutable.
    async fn l1_head(&self) -> anyhow::Result<B256>;

    /// Raw resolution status discriminant.
    async fn status(&self) -> anyhow::Result<u8>;

    /// Maximum chess-clock duration, in seconds. Immutable.
    async fn max_clock_duration(&self) -> anyhow::Result<u64>;

    /// Whether the root claim's block number has been challenged.
    async fn l2_block_number_challenged(&self) -> anyhow::Result<bool>;

    /// Who challenged the root claim's block number.
    async fn l2_block_number_challenger(&self) -> anyhow::Result<Address>;

    /// Tree depths and block range needed to interpret claim positions.
    /// Immutable.
    async fn metadata(&self) -> anyhow::Result<GameMetadata>;
}

/// Read access to the dispute game factory contract.
#[async_trait]
pub trait FactorySource: Send + Sync {
    /// Game handle type produced by [`Self::connect`].
    type Game: GameSource;

    /// Number of games the factory has created.
    async fn game_count(&self) -> anyhow::Result<u64>;

    /// The factory's enumeration record for the game at `index`.
    async fn game_at(&self, index: u64) -> anyhow::Result<GameSummary>;

    /// Open a handle to the game contract at `address`.
    async fn connect(&self, address: Address) -> anyhow::Result<Self::Game>;
}

/// Factory enumeration record for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Position in the factory's game list.
    pub index: u64,
    /// Game type discriminant (0 = fault, 1 = permissioned, ...).
    pub game_type: u32,
    /// Address of the game contract.
    pub address: Address,
    /// Creation time, seconds since the epoch.
    pub timestamp: u64,
}

//! Dispute game wrapper

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use alloy_primitives::{Address, B256};
use async_trait::async_trait;
use futures::Stream;
use tokio::sync::OnceCell;

use quarrel_core::{Claim, GameMetadata, GameStatus};
use quarrel_fetch::{fetch_ordered_slice, ElementSource, FetchError, OrderedSliceOptions};

use crate::source::{GameSource, GameSummary};

/// One fault dispute game.
///
/// Wraps an injected [`GameSource`] and memoizes the contract values that
/// never change after creation (root claim, l1 head, metadata, ...). Live
/// values — the resolution status and the claim count — always hit the
/// source.
pub struct DisputeGame<S> {
    source: S,
    summary: GameSummary,
    root_claim: OnceCell<B256>,
    l1_head: OnceCell<B256>,
    max_clock_duration: OnceCell<u64>,
    metadata: OnceCell<GameMetadata>,
    l2_block_number_challenged: OnceCell<bool>,
    l2_block_number_challenger: OnceCell<Address>,
}

impl<S: GameSource> DisputeGame<S> {
    pub fn new(source: S, summary: GameSummary) -> Self {
        Self {
            source,
            summary,
            root_claim: OnceCell::new(),
            l1_head: OnceCell::new(),
            max_clock_duration: OnceCell::new(),
            metadata: OnceCell::new(),
            l2_block_number_challenged: OnceCell::new(),
            l2_block_number_challenger: OnceCell::new(),
        }
    }

    /// Position in the factory's game list.
    pub fn index(&self) -> u64 {
        self.summary.index
    }

    pub fn game_type(&self) -> u32 {
        self.summary.game_type
    }

    pub fn address(&self) -> Address {
        self.summary.address
    }

    /// Creation time, seconds since the epoch.
    pub fn timestamp(&self) -> u64 {
        self.summary.timestamp
    }

    pub fn created_at(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(self.summary.timestamp)
    }

    pub async fn root_claim(&self) -> anyhow::Result<B256> {
        self.root_claim
            .get_or_try_init(|| self.source.root_claim())
            .await
            .copied()
    }

    pub async fn l1_head(&self) -> anyhow::Result<B256> {
        self.l1_head
            .get_or_try_init(|| self.source.l1_head())
            .await
            .copied()
    }

    pub async fn max_clock_duration(&self) -> anyhow::Result<u64> {
        self.max_clock_duration
            .get_or_try_init(|| self.source.max_clock_duration())
            .await
            .copied()
    }

    pub async fn metadata(&self) -> anyhow::Result<GameMetadata> {
        self.metadata
            .get_or_try_init(|| self.source.metadata())
            .await
            .copied()
    }

    pub async fn l2_block_number_challenged(&self) -> anyhow::Result<bool> {
        self.l2_block_number_challenged
            .get_or_try_init(|| self.source.l2_block_number_challenged())
            .await
            .copied()
    }

    pub async fn l2_block_number_challenger(&self) -> anyhow::Result<Address> {
        self.l2_block_number_challenger
            .get_or_try_init(|| self.source.l2_block_number_challenger())
            .await
            .copied()
    }

    /// Current resolution status. Never cached.
    pub async fn status(&self) -> anyhow::Result<GameStatus> {
        let raw = self.source.status().await?;
        Ok(GameStatus::try_from(raw)?)
    }

    /// Number of claims made so far. Never cached.
    pub async fn claim_count(&self) -> anyhow::Result<u64> {
        self.source.claim_count().await
    }

    /// Fetch and interpret the claim at `index`.
    pub async fn claim(&self, index: u64) -> anyhow::Result<Claim> {
        let metadata = self.metadata().await?;
        let data = self.source.claim_at(index).await?;
        Ok(Claim::new(index, data, metadata))
    }

    /// Stream the game's claims as ordered batches, newest first.
    ///
    /// The explorer surface renders claims top-down from the latest, so
    /// descending traversal is forced here regardless of `options`.
    pub fn claims(
        &self,
        options: OrderedSliceOptions,
    ) -> impl Stream<Item = Result<Vec<Claim>, FetchError>> + '_ {
        fetch_ordered_slice(
            ClaimSlice { game: self },
            OrderedSliceOptions {
                descending: true,
                ..options
            },
        )
    }
}

/// Adapts a game's claim list to the fetch engine.
struct ClaimSlice<'g, S> {
    game: &'g DisputeGame<S>,
}

#[async_trait]
impl<'g, S: GameSource> ElementSource for ClaimSlice<'g, S> {
    type Item = Claim;

    async fn total_items(&self) -> anyhow::Result<u64> {
        self.game.claim_count().await
    }

    async fn element(&self, index: u64) -> anyhow::Result<Claim> {
        self.game.claim(index).await
    }
}

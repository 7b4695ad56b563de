//! Dispute game factory wrapper

use async_trait::async_trait;
use futures::Stream;

use quarrel_fetch::{fetch_ordered_slice, ElementSource, FetchError, OrderedSliceOptions};

use crate::game::DisputeGame;
use crate::source::FactorySource;

/// The dispute game factory: enumerates games and opens handles to them.
pub struct GameFactory<F> {
    source: F,
}

impl<F: FactorySource> GameFactory<F> {
    pub fn new(source: F) -> Self {
        Self { source }
    }

    /// Number of games the factory has created. Never cached.
    pub async fn game_count(&self) -> anyhow::Result<u64> {
        self.source.game_count().await
    }

    /// Load the game at `index`.
    pub async fn game(&self, index: u64) -> anyhow::Result<DisputeGame<F::Game>> {
        let summary = self.source.game_at(index).await?;
        let handle = self.source.connect(summary.address).await?;
        tracing::debug!(index, address = %summary.address, game_type = summary.game_type, "loaded dispute game");
        let game = DisputeGame::new(handle, summary);
        // Warm the root claim so list views render without another round
        // trip per game.
        game.root_claim().await?;
        Ok(game)
    }

    /// Stream games from the factory list as ordered batches.
    ///
    /// The game count is queried once per call; pass `descending: true` to
    /// walk from the newest game down, the way the explorer's landing page
    /// loads.
    pub fn games(
        &self,
        options: OrderedSliceOptions,
    ) -> impl Stream<Item = Result<Vec<DisputeGame<F::Game>>, FetchError>> + '_ {
        fetch_ordered_slice(GameSlice { factory: self }, options)
    }
}

/// Adapts the factory's game list to the fetch engine.
struct GameSlice<'f, F> {
    factory: &'f GameFactory<F>,
}

#[async_trait]
impl<'f, F: FactorySource> ElementSource for GameSlice<'f, F> {
    type Item = DisputeGame<F::Game>;

    async fn total_items(&self) -> anyhow::Result<u64> {
        self.factory.game_count().await
    }

    async fn element(&self, index: u64) -> anyhow::Result<DisputeGame<F::Game>> {
        self.factory.game(index).await
    }
}

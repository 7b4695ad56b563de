//! Capabilities a remote indexed collection must provide

use async_trait::async_trait;

/// A remote collection that can be sized and read one element at a time.
///
/// Implementations typically wrap a contract or RPC handle; the engine only
/// ever asks for the total count (once per fetch) and for individual
/// elements by index. The transport, and whatever the element actually is,
/// stay on the implementor's side of the seam.
#[async_trait]
pub trait ElementSource: Send + Sync {
    type Item: Send;

    /// Total number of elements currently in the collection.
    async fn total_items(&self) -> anyhow::Result<u64>;

    /// Fetch the element at `index`. Indices passed in are always within
    /// `0..total_items()` as reported by this source.
    async fn element(&self, index: u64) -> anyhow::Result<Self::Item>;
}

#[async_trait]
impl<S: ElementSource + ?Sized> ElementSource for &S {
    type Item = S::Item;

    async fn total_items(&self) -> anyhow::Result<u64> {
        (**self).total_items().await
    }

    async fn element(&self, index: u64) -> anyhow::Result<Self::Item> {
        (**self).element(index).await
    }
}

//! Contiguous-prefix draining of an ordered in-flight window

use futures::{FutureExt, Stream, StreamExt};

use crate::error::Result;

/// Wait for the head of `window` to settle, then drain every operation
/// behind it that has already settled, preserving dispatch order.
///
/// `window` is an ordered stream of in-flight fetches (in practice a
/// `FuturesOrdered`): it yields results in dispatch order regardless of
/// completion order, so everything this function pulls out without
/// blocking is by construction a contiguous prefix.
///
/// Semantics:
/// - An empty window yields an empty batch immediately.
/// - The head failing while we block on it propagates the error; the
///   caller's stream terminates.
/// - A failure found among the already-settled operations behind the head
///   is logged and dropped; the scan continues. Surviving operations keep
///   their order.
///
/// The caller invokes this repeatedly until the window is empty, which
/// streams results as soon as each contiguous run completes instead of
/// waiting for the slowest fetch in the window.
pub async fn next_settled_batch<T, W>(window: &mut W) -> Result<Vec<T>>
where
    W: Stream<Item = Result<T>> + Unpin,
{
    let mut batch = Vec::new();

    match window.next().await {
        None => return Ok(batch),
        Some(Ok(item)) => batch.push(item),
        Some(Err(err)) => return Err(err),
    }

    // Take whatever has already settled behind the head, without waiting.
    loop {
        match window.next().now_or_never() {
            Some(Some(Ok(item))) => batch.push(item),
            Some(Some(Err(err))) => {
                tracing::warn!(error = %err, index = err.index(), "dropping failed fetch from batch");
            }
            Some(None) | None => break,
        }
    }

    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use futures::channel::oneshot;
    use futures::future::{self, BoxFuture};
    use futures::stream::FuturesOrdered;

    type Window = FuturesOrdered<BoxFuture<'static, Result<&'static str>>>;

    fn settled(value: &'static str) -> BoxFuture<'static, Result<&'static str>> {
        Box::pin(future::ready(Ok(value)))
    }

    fn failed(index: u64) -> BoxFuture<'static, Result<&'static str>> {
        Box::pin(future::ready(Err(FetchError::Element {
            index,
            source: anyhow::anyhow!("transport error"),
        })))
    }

    fn never() -> BoxFuture<'static, Result<&'static str>> {
        Box::pin(future::pending())
    }

    #[tokio::test]
    async fn test_empty_window_yields_empty_batch() {
        let mut window: Window = FuturesOrdered::new();
        let batch = next_settled_batch(&mut window).await.unwrap();
        assert!(batch.is_empty());
    }

    #[tokio::test]
    async fn test_single_settled_operation() {
        let mut window: Window = [settled("a")].into_iter().collect();
        let batch = next_settled_batch(&mut window).await.unwrap();
        assert_eq!(batch, vec!["a"]);
        assert!(window.is_empty());
    }

    #[tokio::test]
    async fn test_drains_settled_prefix_in_order() {
        let mut window: Window = [settled("a"), settled("b"), settled("c")].into_iter().collect();
        let batch = next_settled_batch(&mut window).await.unwrap();
        assert_eq!(batch, vec!["a", "b", "c"]);
        assert!(window.is_empty());
    }

    #[tokio::test]
    async fn test_stops_at_first_pending_operation() {
        let mut window: Window = [settled("a"), never(), settled("c")].into_iter().collect();
        let batch = next_settled_batch(&mut window).await.unwrap();
        assert_eq!(batch, vec!["a"]);
        // The pending fetch and everything behind it stay in the window.
        assert_eq!(window.len(), 2);
    }

    #[tokio::test]
    async fn test_drops_failures_found_during_drain() {
        let mut window: Window = [settled("a"), failed(1), settled("b"), never(), settled("c")]
            .into_iter()
            .collect();
        let batch = next_settled_batch(&mut window).await.unwrap();
        assert_eq!(batch, vec!["a", "b"]);
        assert_eq!(window.len(), 2);
    }

    #[tokio::test]
    async fn test_head_failure_propagates() {
        let mut window: Window = [failed(7), settled("a")].into_iter().collect();
        let err = next_settled_batch(&mut window).await.unwrap_err();
        assert_eq!(err.index(), Some(7));
    }

    #[tokio::test]
    async fn test_blocks_on_head_then_drains_behind_it() {
        let (tx, rx) = oneshot::channel();
        let mut window: Window = FuturesOrdered::new();
        window.push_back(Box::pin(async move {
            rx.await.map_err(|err| FetchError::Element {
                index: 0,
                source: anyhow::Error::new(err),
            })
        }));
        window.push_back(settled("a"));

        // Nothing settles until the head does.
        assert!(next_settled_batch(&mut window).now_or_never().is_none());

        tx.send("delayed").unwrap();
        let batch = next_settled_batch(&mut window).await.unwrap();
        assert_eq!(batch, vec!["delayed", "a"]);
        assert!(window.is_empty());
    }
}

//! Ordered slice enumeration over a remote indexed collection

use async_stream::try_stream;
use futures::stream::FuturesOrdered;
use futures::{Stream, StreamExt};
use serde::{Deserialize, Serialize};

use crate::batch::next_settled_batch;
use crate::cancel::CancelToken;
use crate::error::{FetchError, Result};
use crate::source::ElementSource;

pub const DEFAULT_BATCH_SIZE: usize = 100;
pub const DEFAULT_CONCURRENCY: usize = 5;

/// Options controlling an ordered slice fetch.
///
/// Indices follow slice semantics: non-negative values count from the
/// start of the collection, negative values from its end, so the default
/// `(0, -1)` covers everything. `descending` flips traversal direction but
/// not which bound is which.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderedSliceOptions {
    /// One bound of the slice; negative counts back from the end.
    pub from_index: i64,
    /// The other bound, inclusive; negative counts back from the end.
    pub to_index: i64,
    /// Target elements per yielded batch.
    pub batch_size: usize,
    /// Batches worth of fetches kept in flight at once.
    pub concurrency: usize,
    /// Walk the normalized range from high to low.
    pub descending: bool,
    /// Cooperative cancellation, checked at chunk boundaries.
    #[serde(skip)]
    pub cancel: Option<CancelToken>,
}

impl Default for OrderedSliceOptions {
    fn default() -> Self {
        Self {
            from_index: 0,
            to_index: -1,
            batch_size: DEFAULT_BATCH_SIZE,
            concurrency: DEFAULT_CONCURRENCY,
            descending: false,
            cancel: None,
        }
    }
}

impl OrderedSliceOptions {
    /// Number of indices dispatched concurrently in one round.
    pub fn chunk_size(&self) -> u64 {
        self.batch_size.max(1) as u64 * self.concurrency.max(1) as u64
    }

    fn canceled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|token| token.is_canceled())
    }
}

/// Stream ordered batches of elements from `source` over the requested
/// slice.
///
/// The total item count is queried exactly once; the normalized range is
/// then walked in chunks of [`OrderedSliceOptions::chunk_size`] concurrent
/// fetches, and every contiguous run of settled fetches is yielded as soon
/// as it completes. Within and across batches, elements appear in strict
/// traversal order.
///
/// A fired [`CancelToken`] ends the stream at the next chunk boundary with
/// no error; fetch failures that race with cancellation are swallowed. Any
/// other failure of the size query, or of a fetch reaching the head of the
/// in-flight window, terminates the stream with a [`FetchError`].
///
/// The stream is not restartable; call again for a fresh pass.
pub fn fetch_ordered_slice<S>(
    source: S,
    options: OrderedSliceOptions,
) -> impl Stream<Item = Result<Vec<S::Item>>>
where
    S: ElementSource,
{
    try_stream! {
        let total = source.total_items().await.map_err(FetchError::TotalItems)?;
        if total > 0 {
            let (lo, hi) = normalize_bounds(options.from_index, options.to_index, total);
            let descending = options.descending;
            tracing::debug!(lo, hi, descending, total, "starting ordered slice fetch");

            'chunks: for (first, last) in Chunks::new(lo, hi, options.chunk_size(), descending) {
                if options.canceled() {
                    tracing::debug!("slice fetch canceled at chunk boundary");
                    break 'chunks;
                }

                let mut window: FuturesOrdered<_> = FuturesOrdered::new();
                if descending {
                    for index in (last..=first).rev() {
                        window.push_back(fetch_element(&source, index));
                    }
                } else {
                    for index in first..=last {
                        window.push_back(fetch_element(&source, index));
                    }
                }
                tracing::debug!(first, last, in_flight = window.len(), "dispatched chunk");

                loop {
                    let batch = match next_settled_batch(&mut window).await {
                        Ok(batch) => batch,
                        Err(err) => {
                            if options.canceled() {
                                break 'chunks;
                            }
                            Err(err)?
                        }
                    };
                    if batch.is_empty() {
                        break;
                    }
                    tracing::debug!(len = batch.len(), "yielding batch");
                    yield batch;
                }
            }
        }
    }
}

/// Drain a whole slice into one vector. Convenience over
/// [`fetch_ordered_slice`] for callers that don't need streaming.
pub async fn collect_ordered_slice<S>(
    source: S,
    options: OrderedSliceOptions,
) -> Result<Vec<S::Item>>
where
    S: ElementSource,
{
    let stream = fetch_ordered_slice(source, options);
    futures::pin_mut!(stream);

    let mut items = Vec::new();
    while let Some(batch) = stream.next().await {
        items.extend(batch?);
    }
    Ok(items)
}

async fn fetch_element<S: ElementSource>(source: &S, index: u64) -> Result<S::Item> {
    source
        .element(index)
        .await
        .map_err(|err| FetchError::Element { index, source: err })
}

/// Resolve possibly-negative bounds against `total`, clamp into
/// `[0, total - 1]`, and order them low-to-high.
fn normalize_bounds(from_index: i64, to_index: i64, total: u64) -> (u64, u64) {
    debug_assert!(total > 0);
    let resolve = |index: i64| -> u64 {
        let absolute = if index < 0 {
            total as i128 + index as i128
        } else {
            index as i128
        };
        absolute.clamp(0, total as i128 - 1) as u64
    };

    let (from, to) = (resolve(from_index), resolve(to_index));
    if to < from {
        (to, from)
    } else {
        (from, to)
    }
}

/// Splits `[lo, hi]` into inclusive sub-ranges of at most `size` indices,
/// yielded in traversal order as `(first, last)` pairs. For a descending
/// walk `first >= last`.
struct Chunks {
    lo: u64,
    hi: u64,
    size: u64,
    descending: bool,
    cursor: u64,
    done: bool,
}

impl Chunks {
    fn new(lo: u64, hi: u64, size: u64, descending: bool) -> Self {
        debug_assert!(size > 0 && lo <= hi);
        Self {
            lo,
            hi,
            size,
            descending,
            cursor: if descending { hi } else { lo },
            done: false,
        }
    }
}

impl Iterator for Chunks {
    type Item = (u64, u64);

    fn next(&mut self) -> Option<(u64, u64)> {
        if self.done {
            return None;
        }
        let first = self.cursor;
        if self.descending {
            let last = first.saturating_sub(self.size - 1).max(self.lo);
            if last == self.lo {
                self.done = true;
            } else {
                self.cursor = last - 1;
            }
            Some((first, last))
        } else {
            let last = first.saturating_add(self.size - 1).min(self.hi);
            if last == self.hi {
                self.done = true;
            } else {
                self.cursor = last + 1;
            }
            Some((first, last))
        }
    }
}

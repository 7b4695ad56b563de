//! quarrel-fetch: ordered, concurrency-bounded, cancelable batch fetching
//!
//! The engine enumerates a remote indexed collection — anything offering a
//! size query and random access by index (see [`ElementSource`]) — and
//! streams the elements back as ordered batches:
//!
//! - The requested slice is walked in chunks of `batch_size * concurrency`
//!   indices; every fetch in a chunk is dispatched at once.
//! - As soon as a contiguous run of fetches (in traversal order) has
//!   settled, it is yielded as a batch. A slow fetch delays only the
//!   elements behind it, never the whole chunk.
//! - Batches never contain gaps and never arrive out of order.
//! - Cancellation is cooperative: a [`CancelToken`] is checked at chunk
//!   boundaries, and a fired token ends the stream silently.
//!
//! ```ignore
//! let stream = fetch_ordered_slice(&source, OrderedSliceOptions {
//!     from_index: -300,
//!     descending: true,
//!     ..Default::default()
//! });
//! futures::pin_mut!(stream);
//! while let Some(batch) = stream.next().await {
//!     render(batch?);
//! }
//! ```

mod batch;
mod cancel;
mod error;
mod slice;
mod source;

pub use batch::next_settled_batch;
pub use cancel::CancelToken;
pub use error::{FetchError, Result};
pub use slice::{
    collect_ordered_slice, fetch_ordered_slice, OrderedSliceOptions, DEFAULT_BATCH_SIZE,
    DEFAULT_CONCURRENCY,
};
pub use source::ElementSource;

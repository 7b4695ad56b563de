//! quarrel-core: value types for fault dispute game data
//!
//! This crate holds the pure, transport-free half of the workspace:
//!
//! - [`TreePosition`]: generalized-index arithmetic for navigating the
//!   bisection tree a dispute game is played over
//! - [`Clock`]: the packed 128-bit chess clock attached to each claim
//! - [`ClaimData`] / [`Claim`]: raw claim records and their interpreted
//!   form (which L2 block and trace index a claim is about)
//! - [`GameStatus`]: resolution state of a game
//!
//! Everything here is an immutable value object constructed from raw
//! integers read off a contract. Fetching those integers is the job of
//! `quarrel-games`, which injects the transport.

mod claim;
mod clock;
mod error;
mod position;
mod status;

pub use claim::{Claim, ClaimData, GameMetadata};
pub use clock::Clock;
pub use error::Error;
pub use position::TreePosition;
pub use status::GameStatus;

pub type Result<T> = std::result::Result<T, Error>;

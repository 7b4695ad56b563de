//! quarrel-games: dispute game wrappers over injected contract access
//!
//! This crate binds the fetch engine to the fault-dispute-game domain. It
//! owns no transport: applications implement [`FactorySource`] and
//! [`GameSource`] over whatever RPC client they use, and get back
//! ergonomic wrappers:
//!
//! - [`GameFactory`]: enumerates games registered with the factory as an
//!   ordered stream of [`DisputeGame`]s.
//! - [`DisputeGame`]: caches immutable contract reads, exposes live ones,
//!   and streams the game's claims (newest first) as interpreted
//!   [`quarrel_core::Claim`]s.

mod factory;
mod game;
mod source;

pub use factory::GameFactory;
pub use game::DisputeGame;
pub use source::{FactorySource, GameSource, GameSummary};

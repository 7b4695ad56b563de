//! Error types for quarrel-core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown game status: {0}")]
    UnknownGameStatus(u8),
}

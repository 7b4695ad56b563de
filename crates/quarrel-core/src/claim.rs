//! Claim records and their interpretation

use alloy_primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};

use crate::{Clock, TreePosition};

/// Raw claim record as stored by a fault dispute game contract.
///
/// `position` and `clock` are the packed `uint128` words straight off the
/// wire; [`Claim`] decodes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimData {
    pub parent_index: u32,
    pub countered_by: Address,
    pub claimant: Address,
    pub bond: U256,
    pub claim: B256,
    pub position: u128,
    pub clock: u128,
}

/// Game-level parameters needed to interpret a claim's tree position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMetadata {
    /// Depth of the full game tree.
    pub max_depth: u32,
    /// Depth at which the game switches from output bisection to
    /// execution-trace bisection.
    pub split_depth: u32,
    /// L2 block number the game's claimed range starts after.
    pub starting_block_number: u64,
    /// L2 block number the root claim commits to.
    pub l2_block_number: u64,
}

/// A claim with its position and clock decoded and its derived coordinates
/// precomputed.
///
/// `block_number` and `trace_index` are pure functions of the position and
/// game metadata, so they are computed once at construction.
#[derive(Debug, Clone)]
pub struct Claim {
    index: u64,
    data: ClaimData,
    position: TreePosition,
    clock: Clock,
    metadata: GameMetadata,
    block_number: u64,
    trace_index: u128,
}

impl Claim {
    pub fn new(index: u64, data: ClaimData, metadata: GameMetadata) -> Self {
        let position = TreePosition::from_g_index(data.position);
        let clock = Clock::from_packed(data.clock);
        let block_number = derive_block_number(position, &metadata);
        let trace_index = derive_trace_index(position, &metadata);
        Self {
            index,
            data,
            position,
            clock,
            metadata,
            block_number,
            trace_index,
        }
    }

    /// Index of this claim in the game's claim list.
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Index of the claim this one counters.
    pub fn parent_index(&self) -> u32 {
        self.data.parent_index
    }

    pub fn countered_by(&self) -> Address {
        self.data.countered_by
    }

    pub fn claimant(&self) -> Address {
        self.data.claimant
    }

    pub fn bond(&self) -> U256 {
        self.data.bond
    }

    /// The claimed output root or trace commitment.
    pub fn claim(&self) -> B256 {
        self.data.claim
    }

    pub fn position(&self) -> TreePosition {
        self.position
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    pub fn max_depth(&self) -> u32 {
        self.metadata.max_depth
    }

    pub fn split_depth(&self) -> u32 {
        self.metadata.split_depth
    }

    pub fn l2_block_number(&self) -> u64 {
        self.metadata.l2_block_number
    }

    /// The L2 block this claim is about.
    pub fn block_number(&self) -> u64 {
        self.block_number
    }

    /// This claim's offset within the execution trace of its block,
    /// re-based below the split depth.
    pub fn trace_index(&self) -> u128 {
        self.trace_index
    }
}

/// Project the position onto the split depth and offset the game's starting
/// block by the resulting index, clamped to the claimed head block.
fn derive_block_number(position: TreePosition, meta: &GameMetadata) -> u64 {
    let at_split = position
        .ancestor_at(meta.split_depth)
        .rightmost_descendant_at(meta.split_depth);
    let candidate = meta.starting_block_number as u128 + at_split.index() + 1;
    candidate.min(meta.l2_block_number as u128) as u64
}

fn derive_trace_index(position: TreePosition, meta: &GameMetadata) -> u128 {
    position
        .rightmost_descendant_at(meta.max_depth)
        .subtree_rooted_at(meta.split_depth + 1)
        .index()
}

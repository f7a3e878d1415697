//! The "what hurts most without a spec?" poll.
//!
//! Each browser may vote once. The voted flag and the tally live behind
//! [`TallyStore`], so the same [`PollMachine`] runs over `localStorage`, an
//! in-memory map, or a remote tally document.

mod backend;
mod machine;
mod option;
mod remote;
mod store;
mod tally;

use thiserror::Error;

pub use backend::{KvTallyStore, TallyStore};
pub use machine::{PollMachine, PollState, VoteOutcome};
pub use option::PollOption;
pub use remote::{HttpTallyTransport, RemoteTallyStore, TallyTransport};
pub use store::{BrowserStorage, KeyValueStore, MemoryStore, StoreError};
pub use tally::{percentage, PollTally, PollView, ResultRow};

/// Value stored under the voted key once this browser has voted.
pub const VOTED_SENTINEL: &str = "true";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PollError {
    #[error(transparent)]
    Storage(#[from] StoreError),
    #[error("unknown poll option: {0}")]
    UnknownOption(String),
    #[error("poll results have not loaded yet")]
    NotLoaded,
    #[error("remote tally request failed: {0}")]
    Remote(String),
}

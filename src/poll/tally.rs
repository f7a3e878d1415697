use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::poll::PollOption;

/// Vote counts keyed by option id, stored as a plain JSON object.
///
/// Ids outside [`PollOption::ALL`] are kept so that writing the tally back
/// never drops data, but they are not counted by [`PollTally::total`] and
/// never displayed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PollTally(BTreeMap<String, u64>);

impl PollTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a stored tally. Anything unparseable counts as an empty tally.
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<Self>(raw) {
            Ok(tally) => tally.checked(),
            Err(e) => {
                warn!("Ignoring unparseable poll tally: {}", e);
                Self::default()
            }
        }
    }

    /// Drops a tally whose declared counts cannot be summed.
    pub fn checked(self) -> Self {
        if self.checked_total().is_none() {
            warn!("Ignoring poll tally with out-of-range counts");
            return Self::default();
        }
        self
    }

    pub fn checked_total(&self) -> Option<u64> {
        PollOption::ALL
            .iter()
            .try_fold(0u64, |sum, option| sum.checked_add(self.count(*option)))
    }

    pub fn to_json(&self) -> String {
        // a map of string keys to integers always serializes
        serde_json::to_string(&self.0).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn count(&self, option: PollOption) -> u64 {
        self.0.get(option.id()).copied().unwrap_or(0)
    }

    pub fn increment(&mut self, option: PollOption) {
        let count = self.0.entry(option.id().to_string()).or_insert(0);
        *count = count.saturating_add(1);
    }

    /// Sum over the declared options only.
    pub fn total(&self) -> u64 {
        self.checked_total().unwrap_or(u64::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }
}

impl<const N: usize> From<[(&str, u64); N]> for PollTally {
    fn from(entries: [(&str, u64); N]) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(id, count)| (id.to_string(), count))
                .collect(),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRow {
    pub option: PollOption,
    pub label: &'static str,
    pub percentage: u64,
    pub votes: u64,
}

/// What the results area shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PollView {
    Loading,
    NoVotes,
    Breakdown(Vec<ResultRow>),
    Unavailable,
}

impl PollView {
    pub const NO_VOTES_MESSAGE: &'static str = "No votes have been cast yet.";
    pub const UNAVAILABLE_MESSAGE: &'static str = "Could not load poll results.";
    pub const LOADING_MESSAGE: &'static str = "Loading results...";

    pub fn from_tally(tally: &PollTally) -> Self {
        let total = tally.total();
        if total == 0 {
            return PollView::NoVotes;
        }

        let rows = PollOption::ALL
            .iter()
            .map(|option| {
                let votes = tally.count(*option);
                ResultRow {
                    option: *option,
                    label: option.label(),
                    percentage: percentage(votes, total),
                    votes,
                }
            })
            .collect();
        PollView::Breakdown(rows)
    }
}

/// `round(100 * count / total)` with ties rounded up, in integer arithmetic.
pub fn percentage(count: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    let (count, total) = (u128::from(count), u128::from(total));
    ((200 * count + total) / (2 * total)) as u64
}

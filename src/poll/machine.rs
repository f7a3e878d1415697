use log::{error, info};

use crate::poll::{PollError, PollOption, PollTally, PollView, TallyStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollState {
    NotVoted,
    Voted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteOutcome {
    Recorded(PollOption),
    AlreadyVoted,
}

/// One browser's view of the poll: vote once, then see the results.
pub struct PollMachine<T> {
    store: T,
    state: PollState,
}

impl<T: TallyStore> PollMachine<T> {
    /// Starts in `Voted` when the flag survived from an earlier visit.
    pub fn load(store: T) -> Result<Self, PollError> {
        let state = if store.has_voted()? {
            PollState::Voted
        } else {
            PollState::NotVoted
        };
        Ok(Self { store, state })
    }

    pub fn state(&self) -> PollState {
        self.state
    }

    /// Whether vote buttons should still accept clicks.
    pub fn accepts_votes(&self) -> bool {
        self.state == PollState::NotVoted
    }

    pub fn has_voted(&self) -> Result<bool, PollError> {
        self.store.has_voted()
    }

    pub fn tally(&self) -> Result<PollTally, PollError> {
        self.store.tally()
    }

    /// Records one vote for this browser.
    ///
    /// The flag is claimed before the tally is touched, so a second call, or
    /// a call from another page sharing the storage, is a no-op. A storage
    /// failure after the claim leaves the flag set without a counted vote.
    pub fn record_vote(&mut self, option: PollOption) -> Result<VoteOutcome, PollError> {
        if self.state == PollState::Voted {
            return Ok(VoteOutcome::AlreadyVoted);
        }

        let claimed = self.store.claim_vote()?;
        self.state = PollState::Voted;
        if !claimed {
            info!("Poll already answered from this browser");
            return Ok(VoteOutcome::AlreadyVoted);
        }

        self.store.increment(option)?;
        info!("Vote recorded for {}", option);
        Ok(VoteOutcome::Recorded(option))
    }

    pub fn record_vote_by_id(&mut self, id: &str) -> Result<VoteOutcome, PollError> {
        let option = id.parse::<PollOption>()?;
        self.record_vote(option)
    }

    pub fn results(&self) -> PollView {
        match self.store.tally() {
            Ok(tally) => PollView::from_tally(&tally),
            Err(PollError::NotLoaded) => PollView::Loading,
            Err(e) => {
                error!("Could not load poll results: {}", e);
                PollView::Unavailable
            }
        }
    }
}

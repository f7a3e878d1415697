use std::cell::RefCell;

use gloo_net::http::Request;
use log::{error, info};
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;

use crate::config::PollConfig;
use crate::poll::backend::{claim_flag, flag_is_set};
use crate::poll::{KeyValueStore, PollError, PollOption, PollTally, TallyStore};

/// Sends increments to wherever the shared tally document lives.
pub trait TallyTransport {
    fn push_increment(&self, option: PollOption);
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Snapshot {
    Loading,
    Loaded(PollTally),
    Failed(String),
}

/// Tally kept in a remote document that applies increments transactionally.
///
/// The voted flag stays in local storage; the page holds a snapshot of the
/// document and updates it optimistically after each vote. Votes cast
/// before the document arrives are applied to it once it does.
pub struct RemoteTallyStore<S, T> {
    flags: S,
    voted_key: String,
    transport: T,
    snapshot: RefCell<Snapshot>,
    pending: RefCell<Vec<PollOption>>,
}

impl<S: KeyValueStore, T: TallyTransport> RemoteTallyStore<S, T> {
    pub fn new(flags: S, config: &PollConfig, transport: T) -> Self {
        Self {
            flags,
            voted_key: config.voted_key.clone(),
            transport,
            snapshot: RefCell::new(Snapshot::Loading),
            pending: RefCell::new(Vec::new()),
        }
    }

    /// Replaces the snapshot with the outcome of a document fetch.
    pub fn load(&self, result: Result<PollTally, PollError>) {
        let snapshot = match result {
            Ok(tally) => {
                let mut tally = tally.checked();
                for option in self.pending.borrow_mut().drain(..) {
                    tally.increment(option);
                }
                Snapshot::Loaded(tally)
            }
            Err(e) => {
                error!("Error getting poll results: {}", e);
                Snapshot::Failed(e.to_string())
            }
        };
        *self.snapshot.borrow_mut() = snapshot;
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<S: KeyValueStore, T: TallyTransport> TallyStore for RemoteTallyStore<S, T> {
    fn has_voted(&self) -> Result<bool, PollError> {
        Ok(flag_is_set(&self.flags, &self.voted_key)?)
    }

    fn claim_vote(&self) -> Result<bool, PollError> {
        Ok(claim_flag(&self.flags, &self.voted_key)?)
    }

    fn tally(&self) -> Result<PollTally, PollError> {
        match &*self.snapshot.borrow() {
            Snapshot::Loading => Err(PollError::NotLoaded),
            Snapshot::Loaded(tally) => Ok(tally.clone()),
            Snapshot::Failed(reason) => Err(PollError::Remote(reason.clone())),
        }
    }

    fn increment(&self, option: PollOption) -> Result<(), PollError> {
        self.transport.push_increment(option);
        match &mut *self.snapshot.borrow_mut() {
            Snapshot::Loaded(tally) => tally.increment(option),
            _ => self.pending.borrow_mut().push(option),
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct IncrementRequest<'a> {
    option: &'a str,
}

/// JSON-over-HTTP tally document: `GET <endpoint>` returns the tally,
/// `POST <endpoint>/increment` with `{"option": id}` adds one vote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpTallyTransport {
    endpoint: String,
}

impl HttpTallyTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn increment_url(&self) -> String {
        format!("{}/increment", self.endpoint)
    }

    /// Fetches the whole document. A missing document means nobody voted yet.
    pub async fn fetch(&self) -> Result<PollTally, PollError> {
        let response = Request::get(&self.endpoint)
            .send()
            .await
            .map_err(|e| PollError::Remote(e.to_string()))?;

        if response.status() == 404 {
            return Ok(PollTally::new());
        }
        if !response.ok() {
            return Err(PollError::Remote(format!(
                "unexpected status {}",
                response.status()
            )));
        }
        response
            .json::<PollTally>()
            .await
            .map_err(|e| PollError::Remote(e.to_string()))
    }
}

impl TallyTransport for HttpTallyTransport {
    fn push_increment(&self, option: PollOption) {
        let url = self.increment_url();
        spawn_local(async move {
            let request = match Request::post(&url).json(&IncrementRequest { option: option.id() }) {
                Ok(req) => req,
                Err(e) => {
                    error!("Failed to build vote request: {}", e);
                    return;
                }
            };
            match request.send().await {
                Ok(response) if response.ok() => info!("Vote recorded!"),
                Ok(response) => error!("Transaction failed: status {}", response.status()),
                Err(e) => error!("Transaction failed: {}", e),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poll::MemoryStore;

    #[derive(Default)]
    struct RecordingTransport {
        sent: RefCell<Vec<PollOption>>,
    }

    impl TallyTransport for RecordingTransport {
        fn push_increment(&self, option: PollOption) {
            self.sent.borrow_mut().push(option);
        }
    }

    fn store() -> RemoteTallyStore<MemoryStore, RecordingTransport> {
        RemoteTallyStore::new(
            MemoryStore::new(),
            &PollConfig::default(),
            RecordingTransport::default(),
        )
    }

    #[test]
    fn tally_is_pending_until_loaded() {
        let remote = store();
        assert_eq!(remote.tally(), Err(PollError::NotLoaded));
        remote.load(Ok(PollTally::from([("clarity", 2)])));
        assert_eq!(remote.tally().unwrap().count(PollOption::Clarity), 2);
    }

    #[test]
    fn failed_load_is_reported() {
        let remote = store();
        remote.load(Err(PollError::Remote("offline".to_string())));
        assert!(matches!(remote.tally(), Err(PollError::Remote(_))));
    }

    #[test]
    fn increment_is_sent_and_applied_to_snapshot() {
        let remote = store();
        remote.load(Ok(PollTally::new()));
        remote.increment(PollOption::Ambiguity).unwrap();
        assert_eq!(*remote.transport().sent.borrow(), vec![PollOption::Ambiguity]);
        assert_eq!(remote.tally().unwrap().count(PollOption::Ambiguity), 1);
    }

    #[test]
    fn increment_before_load_is_still_sent() {
        let remote = store();
        remote.increment(PollOption::Onboarding).unwrap();
        assert_eq!(remote.transport().sent.borrow().len(), 1);
        assert_eq!(remote.tally(), Err(PollError::NotLoaded));
    }

    #[test]
    fn vote_cast_while_loading_shows_up_after_load() {
        let remote = store();
        remote.increment(PollOption::Clarity).unwrap();
        remote.load(Ok(PollTally::from([("clarity", 4)])));
        assert_eq!(remote.tally().unwrap().count(PollOption::Clarity), 5);

        remote.load(Ok(PollTally::from([("clarity", 5)])));
        assert_eq!(remote.tally().unwrap().count(PollOption::Clarity), 5);
    }

    #[test]
    fn out_of_range_document_loads_empty() {
        let remote = store();
        remote.load(Ok(PollTally::from([("clarity", u64::MAX), ("ambiguity", 1)])));
        assert!(remote.tally().unwrap().is_empty());
    }

    #[test]
    fn voted_flag_stays_local() {
        let flags = MemoryStore::new();
        let remote = RemoteTallyStore::new(
            flags.clone(),
            &PollConfig::default(),
            RecordingTransport::default(),
        );
        assert!(remote.claim_vote().unwrap());
        assert!(remote.has_voted().unwrap());
        assert_eq!(flags.get("votedInPoll").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn http_transport_urls() {
        let transport = HttpTallyTransport::new("https://example.test/api/poll/");
        assert_eq!(transport.endpoint(), "https://example.test/api/poll");
        assert_eq!(transport.increment_url(), "https://example.test/api/poll/increment");
    }
}

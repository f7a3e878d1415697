use std::rc::Rc;

use crate::config::PollConfig;
use crate::poll::{KeyValueStore, PollError, PollOption, PollTally, StoreError, VOTED_SENTINEL};

/// How many times an increment is retried when another writer changed the
/// tally between our read and our write.
const MAX_INCREMENT_ATTEMPTS: usize = 8;

/// Where the voted flag and the tally are kept.
pub trait TallyStore {
    fn has_voted(&self) -> Result<bool, PollError>;

    /// Sets the voted flag. `Ok(false)` means it was already set, by this
    /// page or another one sharing the storage.
    fn claim_vote(&self) -> Result<bool, PollError>;

    fn tally(&self) -> Result<PollTally, PollError>;

    fn increment(&self, option: PollOption) -> Result<(), PollError>;
}

impl<T: TallyStore + ?Sized> TallyStore for Rc<T> {
    fn has_voted(&self) -> Result<bool, PollError> {
        (**self).has_voted()
    }

    fn claim_vote(&self) -> Result<bool, PollError> {
        (**self).claim_vote()
    }

    fn tally(&self) -> Result<PollTally, PollError> {
        (**self).tally()
    }

    fn increment(&self, option: PollOption) -> Result<(), PollError> {
        (**self).increment(option)
    }
}

/// Reads the voted flag out of any key-value store.
pub(crate) fn flag_is_set<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Result<bool, StoreError> {
    Ok(store.get(key)?.as_deref() == Some(VOTED_SENTINEL))
}

/// Sets the voted flag with compare-and-swap so only one caller wins.
pub(crate) fn claim_flag<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Result<bool, StoreError> {
    let current = store.get(key)?;
    if current.as_deref() == Some(VOTED_SENTINEL) {
        return Ok(false);
    }
    store.compare_and_swap(key, current.as_deref(), VOTED_SENTINEL)
}

/// Flag and tally kept in a [`KeyValueStore`] under the configured keys.
#[derive(Clone, Debug)]
pub struct KvTallyStore<S> {
    store: S,
    voted_key: String,
    results_key: String,
}

impl<S: KeyValueStore> KvTallyStore<S> {
    pub fn new(store: S, config: &PollConfig) -> Self {
        Self {
            store,
            voted_key: config.voted_key.clone(),
            results_key: config.results_key.clone(),
        }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> TallyStore for KvTallyStore<S> {
    fn has_voted(&self) -> Result<bool, PollError> {
        Ok(flag_is_set(&self.store, &self.voted_key)?)
    }

    fn claim_vote(&self) -> Result<bool, PollError> {
        Ok(claim_flag(&self.store, &self.voted_key)?)
    }

    fn tally(&self) -> Result<PollTally, PollError> {
        Ok(self
            .store
            .get(&self.results_key)?
            .map(|raw| PollTally::parse(&raw))
            .unwrap_or_default())
    }

    fn increment(&self, option: PollOption) -> Result<(), PollError> {
        for _ in 0..MAX_INCREMENT_ATTEMPTS {
            let raw = self.store.get(&self.results_key)?;
            let mut tally = raw.as_deref().map(PollTally::parse).unwrap_or_default();
            tally.increment(option);
            if self
                .store
                .compare_and_swap(&self.results_key, raw.as_deref(), &tally.to_json())?
            {
                return Ok(());
            }
        }
        Err(StoreError::Write(format!(
            "tally under {} kept changing during the update",
            self.results_key
        ))
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poll::MemoryStore;

    fn store() -> KvTallyStore<MemoryStore> {
        KvTallyStore::new(MemoryStore::new(), &PollConfig::default())
    }

    #[test]
    fn flag_requires_exact_sentinel() {
        let tally_store = store();
        assert!(!tally_store.has_voted().unwrap());
        tally_store.inner().set("votedInPoll", "yes").unwrap();
        assert!(!tally_store.has_voted().unwrap());
        tally_store.inner().set("votedInPoll", "true").unwrap();
        assert!(tally_store.has_voted().unwrap());
    }

    #[test]
    fn claim_succeeds_once() {
        let tally_store = store();
        assert!(tally_store.claim_vote().unwrap());
        assert!(!tally_store.claim_vote().unwrap());
        assert_eq!(
            tally_store.inner().get("votedInPoll").unwrap().as_deref(),
            Some("true")
        );
    }

    #[test]
    fn claim_overwrites_a_stale_value() {
        let tally_store = store();
        tally_store.inner().set("votedInPoll", "false").unwrap();
        assert!(tally_store.claim_vote().unwrap());
        assert!(tally_store.has_voted().unwrap());
    }

    #[test]
    fn increment_writes_json_under_results_key() {
        let tally_store = store();
        tally_store.increment(PollOption::Clarity).unwrap();
        tally_store.increment(PollOption::Clarity).unwrap();
        tally_store.increment(PollOption::Ambiguity).unwrap();
        assert_eq!(
            tally_store.inner().get("pollResults").unwrap().as_deref(),
            Some(r#"{"ambiguity":1,"clarity":2}"#)
        );
    }

    #[test]
    fn increment_replaces_corrupt_tally() {
        let tally_store = store();
        tally_store.inner().set("pollResults", "{oops").unwrap();
        assert!(tally_store.tally().unwrap().is_empty());
        tally_store.increment(PollOption::Onboarding).unwrap();
        assert_eq!(tally_store.tally().unwrap().count(PollOption::Onboarding), 1);
    }

    #[test]
    fn increment_keeps_unknown_keys() {
        let tally_store = store();
        tally_store.inner().set("pollResults", r#"{"legacy":4}"#).unwrap();
        tally_store.increment(PollOption::Onboarding).unwrap();
        let tally = tally_store.tally().unwrap();
        assert!(tally.contains("legacy"));
        assert_eq!(tally.count(PollOption::Onboarding), 1);
    }

    #[test]
    fn increment_surfaces_write_failures() {
        let tally_store = store();
        tally_store.inner().set_read_only(true);
        let err = tally_store.increment(PollOption::Clarity).unwrap_err();
        assert!(matches!(err, PollError::Storage(StoreError::Write(_))));
    }

    /// Lets another "tab" bump the tally right before our first swap.
    struct ContendedStore {
        inner: MemoryStore,
        interfered: std::cell::Cell<bool>,
    }

    impl KeyValueStore for ContendedStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StoreError> {
            self.inner.remove(key)
        }

        fn compare_and_swap(
            &self,
            key: &str,
            expected: Option<&str>,
            new: &str,
        ) -> Result<bool, StoreError> {
            if !self.interfered.replace(true) {
                self.inner.set(key, r#"{"clarity":1}"#)?;
            }
            self.inner.compare_and_swap(key, expected, new)
        }
    }

    #[test]
    fn increment_retries_after_a_concurrent_write() {
        let shared = MemoryStore::new();
        let contended = ContendedStore {
            inner: shared.clone(),
            interfered: std::cell::Cell::new(false),
        };
        let tally_store = KvTallyStore::new(contended, &PollConfig::default());
        tally_store.increment(PollOption::Clarity).unwrap();
        assert_eq!(
            shared.get("pollResults").unwrap().as_deref(),
            Some(r#"{"clarity":2}"#)
        );
    }

    #[test]
    fn custom_keys_are_honoured() {
        let config = PollConfig {
            voted_key: "v".to_string(),
            results_key: "r".to_string(),
            ..PollConfig::default()
        };
        let tally_store = KvTallyStore::new(MemoryStore::new(), &config);
        tally_store.claim_vote().unwrap();
        tally_store.increment(PollOption::Clarity).unwrap();
        assert!(tally_store.inner().has("v").unwrap());
        assert!(tally_store.inner().has("r").unwrap());
        assert!(!tally_store.inner().has("pollResults").unwrap());
    }
}

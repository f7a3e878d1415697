#![cfg(target_arch = "wasm32")]

use specpage::config::PollConfig;
use specpage::poll::{
    BrowserStorage, KeyValueStore, KvTallyStore, PollMachine, PollOption, PollView, VoteOutcome,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_storage(config: &PollConfig) -> BrowserStorage {
    let storage = BrowserStorage::local().expect("localStorage should exist in the test browser");
    storage.remove(&config.voted_key).unwrap();
    storage.remove(&config.results_key).unwrap();
    storage
}

fn test_config(prefix: &str) -> PollConfig {
    PollConfig {
        voted_key: format!("{}-votedInPoll", prefix),
        results_key: format!("{}-pollResults", prefix),
        ..PollConfig::default()
    }
}

#[wasm_bindgen_test]
fn local_storage_round_trips_strings() {
    let config = test_config("kv");
    let storage = fresh_storage(&config);
    assert!(!storage.has(&config.voted_key).unwrap());
    storage.set(&config.voted_key, "true").unwrap();
    assert_eq!(storage.get(&config.voted_key).unwrap().as_deref(), Some("true"));
    assert!(storage.compare_and_swap(&config.voted_key, Some("true"), "again").unwrap());
    storage.remove(&config.voted_key).unwrap();
}

#[wasm_bindgen_test]
fn vote_persists_across_machines() {
    let config = test_config("machine");
    let storage = fresh_storage(&config);

    let mut poll = PollMachine::load(KvTallyStore::new(storage.clone(), &config)).unwrap();
    assert_eq!(
        poll.record_vote(PollOption::Misalignment).unwrap(),
        VoteOutcome::Recorded(PollOption::Misalignment)
    );
    assert_eq!(
        storage.get(&config.results_key).unwrap().as_deref(),
        Some(r#"{"misalignment":1}"#)
    );

    let mut reloaded = PollMachine::load(KvTallyStore::new(storage.clone(), &config)).unwrap();
    assert!(!reloaded.accepts_votes());
    assert_eq!(
        reloaded.record_vote(PollOption::Clarity).unwrap(),
        VoteOutcome::AlreadyVoted
    );
    match reloaded.results() {
        PollView::Breakdown(rows) => assert_eq!(rows[2].percentage, 100),
        other => panic!("expected a breakdown, got {:?}", other),
    }

    storage.remove(&config.voted_key).unwrap();
    storage.remove(&config.results_key).unwrap();
}

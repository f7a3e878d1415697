use std::cell::RefCell;
use std::rc::Rc;

use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::{PollBackend, PollConfig};
use crate::poll::{
    BrowserStorage, HttpTallyTransport, KvTallyStore, PollError, PollMachine, PollOption,
    PollView, RemoteTallyStore, TallyStore,
};

type RemoteStore = RemoteTallyStore<BrowserStorage, HttpTallyTransport>;

struct OpenPoll {
    machine: PollMachine<Rc<dyn TallyStore>>,
    /// Set when the tally lives in a remote document that still has to be fetched.
    remote: Option<Rc<RemoteStore>>,
}

fn open_poll(config: &PollConfig) -> Result<OpenPoll, PollError> {
    let storage = BrowserStorage::local()?;
    let mut remote = None;
    let store: Rc<dyn TallyStore> = match &config.backend {
        PollBackend::Local => {
            let local: Rc<dyn TallyStore> = Rc::new(KvTallyStore::new(storage, config));
            local
        }
        PollBackend::Remote { endpoint } => {
            let shared = Rc::new(RemoteTallyStore::new(
                storage,
                config,
                HttpTallyTransport::new(endpoint.clone()),
            ));
            remote = Some(shared.clone());
            let shared: Rc<dyn TallyStore> = shared;
            shared
        }
    };
    Ok(OpenPoll {
        machine: PollMachine::load(store)?,
        remote,
    })
}

#[derive(Properties, PartialEq)]
pub struct PollWidgetProps {
    pub config: PollConfig,
}

#[function_component(PollWidget)]
pub fn poll_widget(props: &PollWidgetProps) -> Html {
    let poll: Rc<RefCell<Option<OpenPoll>>> = {
        let config = props.config.clone();
        use_mut_ref(move || match open_poll(&config) {
            Ok(poll) => Some(poll),
            Err(e) => {
                error!("Poll unavailable: {}", e);
                None
            }
        })
    };
    let voted = {
        let poll = poll.clone();
        use_state(move || {
            poll.borrow()
                .as_ref()
                .map_or(false, |open| !open.machine.accepts_votes())
        })
    };
    let view = {
        let poll = poll.clone();
        use_state(move || {
            poll.borrow()
                .as_ref()
                .map_or(PollView::Unavailable, |open| open.machine.results())
        })
    };

    // Restore the voted state on load and fetch a remote tally if there is one.
    {
        let poll = poll.clone();
        let voted = voted.clone();
        let view = view.clone();
        use_effect_with_deps(
            move |_| {
                let remote = match &*poll.borrow() {
                    Some(open) => {
                        let has_voted = !open.machine.accepts_votes();
                        voted.set(has_voted);
                        view.set(open.machine.results());
                        open.remote.clone()
                    }
                    None => {
                        view.set(PollView::Unavailable);
                        None
                    }
                };

                if let Some(remote) = remote {
                    let poll = poll.clone();
                    spawn_local(async move {
                        let result = remote.transport().fetch().await;
                        remote.load(result);
                        if let Some(open) = &*poll.borrow() {
                            view.set(open.machine.results());
                        }
                    });
                }
                || ()
            },
            (),
        );
    }

    let on_vote = {
        let poll = poll.clone();
        let voted = voted.clone();
        let view = view.clone();
        Callback::from(move |option: PollOption| {
            let mut slot = poll.borrow_mut();
            let Some(open) = slot.as_mut() else {
                return;
            };
            match open.machine.record_vote(option) {
                Ok(outcome) => info!("Poll vote handled: {:?}", outcome),
                Err(e) => error!("Failed to record vote: {}", e),
            }
            voted.set(!open.machine.accepts_votes());
            view.set(open.machine.results());
        })
    };

    let available = poll.borrow().is_some();

    html! {
        <div class="poll-widget">
            if available && !*voted {
                <div id="poll-options" class="poll-options">
                    {
                        for PollOption::ALL.iter().map(|option| {
                            let option = *option;
                            let on_vote = on_vote.clone();
                            let onclick = Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_vote.emit(option);
                            });
                            html! {
                                <button
                                    class="poll-option"
                                    data-option={option.id()}
                                    {onclick}
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                    }
                </div>
            } else {
                <div id="poll-results-container" class="poll-results">
                    { render_results(&*view) }
                </div>
            }
            <style>
                {r#"
                .poll-widget {
                    max-width: 640px;
                    margin: 0 auto;
                }
                .poll-options {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 0.75rem;
                }
                .poll-option {
                    padding: 1rem;
                    border-radius: 10px;
                    border: 1px solid #fcd34d;
                    background: #fffbeb;
                    font-weight: 600;
                    cursor: pointer;
                }
                .poll-option:hover {
                    background: #fde68a;
                }
                .poll-result {
                    margin-bottom: 1rem;
                }
                .poll-result-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 0.25rem;
                }
                .poll-result-percentage {
                    font-weight: 700;
                    color: #b45309;
                }
                .poll-result-bar {
                    background: #f5f5f4;
                    border-radius: 6px;
                    overflow: hidden;
                }
                .poll-result-fill {
                    background: #d97706;
                    color: #ffffff;
                    font-size: 0.8rem;
                    padding: 0.2rem 0.5rem;
                    white-space: nowrap;
                    min-width: fit-content;
                }
                "#}
            </style>
        </div>
    }
}

fn render_results(view: &PollView) -> Html {
    match view {
        PollView::Loading => html! { <p>{PollView::LOADING_MESSAGE}</p> },
        PollView::NoVotes => html! { <p>{PollView::NO_VOTES_MESSAGE}</p> },
        PollView::Unavailable => html! { <p>{PollView::UNAVAILABLE_MESSAGE}</p> },
        PollView::Breakdown(rows) => html! {
            <>
                {
                    for rows.iter().map(|row| html! {
                        <div class="poll-result">
                            <div class="poll-result-header">
                                <span class="poll-result-label">{row.label}</span>
                                <span class="poll-result-percentage">{format!("{}%", row.percentage)}</span>
                            </div>
                            <div class="poll-result-bar">
                                <div class="poll-result-fill" style={format!("width: {}%;", row.percentage)}>
                                    {format!("{} votes", row.votes)}
                                </div>
                            </div>
                        </div>
                    })
                }
            </>
        },
    }
}

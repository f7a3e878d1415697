use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::{ContentCatalog, ContentPanel};

#[derive(Clone, Copy, PartialEq)]
pub enum PanelLayout {
    /// Grid of cards, details below.
    Cards,
    /// Left-to-right flow with arrows between the nodes.
    Flow,
}

#[derive(Properties, PartialEq)]
pub struct ContentPanelProps {
    pub catalog: ContentCatalog,
    pub layout: PanelLayout,
    pub placeholder: &'static str,
}

#[function_component(ContentPanelView)]
pub fn content_panel_view(props: &ContentPanelProps) -> Html {
    let panel = use_state(|| ContentPanel::new(props.catalog));

    let (item_class, list_class, details_class) = match props.layout {
        PanelLayout::Cards => ("component-card", "component-grid", "component-details"),
        PanelLayout::Flow => ("flow-node", "flow-row", "flow-details"),
    };
    let entries = panel.catalog().entries();

    let items = entries.iter().enumerate().map(|(i, entry)| {
        let onclick = {
            let panel = panel.clone();
            let key = entry.key;
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                let mut next = (*panel).clone();
                if next.select(key) {
                    panel.set(next);
                }
            })
        };
        let arrow = props.layout == PanelLayout::Flow && i + 1 < entries.len();

        html! {
            <>
                <button
                    class={classes!(item_class, panel.is_active(entry.key).then(|| "active"))}
                    data-key={entry.key}
                    {onclick}
                >
                    {entry.title}
                </button>
                if arrow {
                    <span class="flow-arrow">{"→"}</span>
                }
            </>
        }
    });

    html! {
        <div class="content-panel">
            <div class={list_class}>
                { for items }
            </div>
            <div class={details_class}>
                {
                    match panel.selected() {
                        Some(entry) => html! {
                            <div class="text-left">
                                <h4 class="details-title">{entry.title}</h4>
                                <p class="details-text">{entry.text}</p>
                            </div>
                        },
                        None => html! {
                            <p class="details-placeholder">{props.placeholder}</p>
                        },
                    }
                }
            </div>
            <style>
                {r#"
                .content-panel {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .component-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 1rem;
                }
                .flow-row {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    flex-wrap: wrap;
                }
                .component-card, .flow-node {
                    background: #fffbeb;
                    border: 1px solid #fcd34d;
                    border-radius: 12px;
                    padding: 1.25rem;
                    font-weight: 600;
                    color: #44403c;
                    cursor: pointer;
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }
                .component-card:hover, .flow-node:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 6px 16px rgba(217, 119, 6, 0.15);
                }
                .component-card.active, .flow-node.active {
                    background: #d97706;
                    border-color: #d97706;
                    color: #ffffff;
                }
                .flow-arrow {
                    font-size: 1.5rem;
                    color: #d97706;
                }
                .component-details, .flow-details {
                    min-height: 140px;
                    background: #ffffff;
                    border-radius: 12px;
                    padding: 1.5rem;
                    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.05);
                }
                .details-title {
                    font-weight: 700;
                    font-size: 1.25rem;
                    margin-bottom: 0.5rem;
                    color: #b45309;
                }
                .details-text {
                    color: #374151;
                    line-height: 1.6;
                }
                .details-placeholder {
                    color: #9ca3af;
                    text-align: center;
                }
                "#}
            </style>
        </div>
    }
}

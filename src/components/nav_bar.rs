use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::nav::{NavHighlighter, NavLink};
use crate::Route;

/// One visibility report from the intersection observer.
pub struct SectionSeen {
    pub id: String,
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl Reducible for NavHighlighter {
    type Action = SectionSeen;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.observe(&action.id, action.ratio, action.is_intersecting) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub links: &'static [NavLink],
    pub threshold: f64,
    /// Route of the sibling page variant, shown as an extra link.
    pub other_page: Option<(Route, &'static str)>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let highlighter = use_reducer_eq(|| NavHighlighter::new(props.links, props.threshold));
    let menu_open = use_state(|| false);

    {
        let dispatcher = highlighter.dispatcher();
        let threshold = props.threshold;
        use_effect_with_deps(
            move |_| {
                let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        dispatcher.dispatch(SectionSeen {
                            id: entry.target().id(),
                            ratio: entry.intersection_ratio(),
                            is_intersecting: entry.is_intersecting(),
                        });
                    }
                }) as Box<dyn FnMut(Array, IntersectionObserver)>);

                let observer = observe_sections(&callback, threshold);
                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"codespec"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        for highlighter.links().iter().map(|link| html! {
                            <a
                                href={link.href}
                                class={classes!("nav-link", highlighter.is_active(link).then(|| "active"))}
                                onclick={close_menu.clone()}
                            >
                                {link.label}
                            </a>
                        })
                    }
                    {
                        if let Some((route, label)) = props.other_page.clone() {
                            html! {
                                <div onclick={close_menu.clone()}>
                                    <Link<Route> to={route} classes="nav-page-link">
                                        {label}
                                    </Link<Route>>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 10;
                    background: rgba(255, 251, 235, 0.95);
                    border-bottom: 1px solid #fde68a;
                }
                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0.75rem 1.5rem;
                }
                .nav-logo {
                    font-weight: 800;
                    color: #b45309;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    gap: 1.25rem;
                    align-items: center;
                }
                .nav-link, .nav-page-link {
                    color: #57534e;
                    text-decoration: none;
                    padding-bottom: 2px;
                    border-bottom: 2px solid transparent;
                }
                .nav-link.active {
                    color: #b45309;
                    border-bottom-color: #d97706;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    flex-direction: column;
                    gap: 4px;
                }
                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #57534e;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        right: 0;
                        left: 0;
                        background: #fffbeb;
                        padding: 1rem;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

/// Starts observing every `<section>` on the page.
fn observe_sections(
    callback: &Closure<dyn FnMut(Array, IntersectionObserver)>,
    threshold: f64,
) -> Option<IntersectionObserver> {
    let document = web_sys::window()?.document()?;

    let mut options = IntersectionObserverInit::new();
    options.root_margin("0px");
    options.threshold(&JsValue::from_f64(threshold));

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(e) => {
            warn!("IntersectionObserver unavailable: {:?}", e);
            return None;
        }
    };

    let sections = document.query_selector_all("section").ok()?;
    for i in 0..sections.length() {
        if let Some(section) = sections.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&section);
        }
    }
    info!("Observing {} page sections", sections.length());
    Some(observer)
}

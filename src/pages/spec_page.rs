use yew::prelude::*;

use crate::components::benefits_chart::BenefitsChartView;
use crate::components::content_panel::{ContentPanelView, PanelLayout};
use crate::components::nav_bar::NavBar;
use crate::components::poll_widget::PollWidget;
use crate::config::PageConfig;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct SpecPageProps {
    pub config: PageConfig,
}

#[function_component(SpecPage)]
pub fn spec_page(props: &SpecPageProps) -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let config = &props.config;
    let other_page = if config.poll.is_some() {
        Some((Route::Overview, "Overview"))
    } else {
        Some((Route::Home, "Take the poll"))
    };

    html! {
        <div class="spec-page">
            <NavBar
                links={config.nav_links}
                threshold={config.nav_threshold}
                {other_page}
            />

            <section id="intro" class="page-section hero">
                <h1>{"The Code Spec"}</h1>
                <p class="hero-subtitle">
                    {"One document between the idea and the implementation. Requirements and designs go in, an unambiguous plan comes out, and the code is built against it."}
                </p>
            </section>

            <section id="components" class="page-section">
                <h2>{"What Goes Into a Spec"}</h2>
                <p class="section-lead">{"Click a component to see what it covers."}</p>
                <ContentPanelView
                    catalog={config.components}
                    layout={PanelLayout::Cards}
                    placeholder="Select a component above to learn more."
                />
            </section>

            <section id="flow" class="page-section">
                <h2>{"Where the Spec Fits"}</h2>
                <p class="section-lead">{"Follow the flow from inputs to shipped code."}</p>
                <ContentPanelView
                    catalog={config.flow}
                    layout={PanelLayout::Flow}
                    placeholder="Click a step in the flow to see its role."
                />
            </section>

            <section id="benefits" class="page-section">
                <h2>{"The Impact"}</h2>
                <p class="section-lead">{"Toggle between life before and after adopting a spec."}</p>
                <BenefitsChartView data={config.chart.clone()} />
            </section>

            {
                if let Some(poll) = config.poll.clone() {
                    html! {
                        <section id="poll" class="page-section">
                            <h2>{"What Hurts Most Without a Spec?"}</h2>
                            <p class="section-lead">{"One vote per browser. Results appear after you vote."}</p>
                            <PollWidget config={poll} />
                        </section>
                    }
                } else {
                    html! {}
                }
            }

            <footer class="page-footer">
                <p>{"Build from the spec, review against the spec."}</p>
            </footer>

            <style>
                {r#"
                .spec-page {
                    min-height: 100vh;
                    background: #fafaf9;
                    color: #1c1917;
                    font-family: 'Inter', sans-serif;
                }
                .page-section {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                    scroll-margin-top: 64px;
                }
                .page-section h2 {
                    font-size: 2rem;
                    font-weight: 800;
                    text-align: center;
                    margin-bottom: 0.5rem;
                }
                .section-lead {
                    text-align: center;
                    color: #57534e;
                    margin-bottom: 2rem;
                }
                .hero {
                    text-align: center;
                    padding-top: 7rem;
                }
                .hero h1 {
                    font-size: 3rem;
                    font-weight: 900;
                    color: #b45309;
                }
                .hero-subtitle {
                    max-width: 680px;
                    margin: 1rem auto 0;
                    font-size: 1.2rem;
                    color: #44403c;
                    line-height: 1.6;
                }
                .page-footer {
                    text-align: center;
                    padding: 2rem;
                    color: #a8a29e;
                    border-top: 1px solid #e7e5e4;
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="spec-page">
            <section class="page-section hero">
                <h1>{"404"}</h1>
                <p class="hero-subtitle">{"There is no such page."}</p>
            </section>
        </div>
    }
}

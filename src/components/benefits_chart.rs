use log::error;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::{HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use crate::chart::{bar_label, BenefitsChart, ChartData, ChartView, Rgba};

#[derive(Properties, PartialEq)]
pub struct BenefitsChartProps {
    pub data: ChartData,
}

fn to_color(rgba: Rgba) -> RGBAColor {
    RGBColor(rgba.r, rgba.g, rgba.b).mix(rgba.a)
}

/// Horizontal bar chart of the dataset currently selected.
fn draw(canvas: HtmlCanvasElement, chart: &BenefitsChart) -> Result<(), String> {
    let backend = CanvasBackend::with_canvas_object(canvas)
        .ok_or_else(|| "canvas has no 2d context".to_string())?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE).map_err(|e| e.to_string())?;

    let dataset = chart.dataset();
    let labels = chart.labels();
    let fill = to_color(dataset.fill);
    let border = to_color(dataset.border);

    let mut cartesian = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(190)
        .build_cartesian_2d(0u32..100u32, (0usize..labels.len()).into_segmented())
        .map_err(|e| e.to_string())?;

    cartesian
        .configure_mesh()
        .disable_y_mesh()
        .x_desc("Relative Score / Effort")
        .y_label_formatter(&|y| match y {
            SegmentValue::CenterOf(i) => labels.get(*i).map(|l| l.to_string()).unwrap_or_default(),
            _ => String::new(),
        })
        .draw()
        .map_err(|e| e.to_string())?;

    cartesian
        .draw_series(chart.bars().into_iter().enumerate().map(|(i, (_, value))| {
            let mut bar = Rectangle::new(
                [(0, SegmentValue::Exact(i)), (value, SegmentValue::Exact(i + 1))],
                fill.filled(),
            );
            bar.set_margin(6, 6, 0, 0);
            bar
        }))
        .map_err(|e| e.to_string())?
        .label(dataset.label)
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], fill.filled()));

    cartesian
        .draw_series(chart.bars().into_iter().enumerate().map(|(i, (_, value))| {
            let mut outline = Rectangle::new(
                [(0, SegmentValue::Exact(i)), (value, SegmentValue::Exact(i + 1))],
                border.stroke_width(1),
            );
            outline.set_margin(6, 6, 0, 0);
            outline
        }))
        .map_err(|e| e.to_string())?;

    cartesian
        .draw_series(chart.bar_annotations().into_iter().enumerate().map(|(i, text)| {
            Text::new(
                text,
                (2, SegmentValue::CenterOf(i)),
                ("sans-serif", 13).into_font().color(&BLACK),
            )
        }))
        .map_err(|e| e.to_string())?;

    cartesian
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK.mix(0.3))
        .draw()
        .map_err(|e| e.to_string())?;

    root.present().map_err(|e| e.to_string())
}

#[function_component(BenefitsChartView)]
pub fn benefits_chart_view(props: &BenefitsChartProps) -> Html {
    let canvas_ref = use_node_ref();
    let chart = use_state(|| BenefitsChart::new(props.data.clone()));

    {
        let canvas_ref = canvas_ref.clone();
        let chart_for_effect = (*chart).clone();
        let view = chart.view();
        use_effect_with_deps(
            move |_| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    canvas.set_width(700);
                    canvas.set_height(380);
                    if let Err(e) = draw(canvas, &chart_for_effect) {
                        error!("Failed to draw benefits chart: {}", e);
                    }
                }
                || ()
            },
            view,
        );
    }

    let show = |view: ChartView| {
        let chart = chart.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = (*chart).clone();
            if next.show(view) {
                chart.set(next);
            }
        })
    };

    let dataset_label = chart.dataset().label;

    html! {
        <div class="benefits-chart">
            <div class="chart-toggle">
                <button
                    id="btn-before"
                    class={classes!("chart-button", chart.button_class(ChartView::Before))}
                    onclick={show(ChartView::Before)}
                >
                    {"Before Spec"}
                </button>
                <button
                    id="btn-after"
                    class={classes!("chart-button", chart.button_class(ChartView::After))}
                    onclick={show(ChartView::After)}
                >
                    {"After Spec"}
                </button>
            </div>
            <div class="chart-container">
                <canvas
                    id="benefitsChart"
                    ref={canvas_ref}
                    width="700"
                    height="380"
                    style="max-width: 100%;"
                />
            </div>
            <ul class="sr-only">
                { for chart.bars().into_iter().map(|(label, value)| html! {
                    <li>{format!("{} - {}", label, bar_label(dataset_label, value))}</li>
                }) }
            </ul>
            <style>
                {r#"
                .benefits-chart {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                }
                .chart-toggle {
                    display: inline-flex;
                    border: 1px solid #d97706;
                    border-radius: 999px;
                    overflow: hidden;
                }
                .chart-button {
                    border: none;
                    padding: 0.5rem 1.25rem;
                    cursor: pointer;
                    font-weight: 600;
                }
                .bg-amber-600 {
                    background: #d97706;
                }
                .text-white {
                    color: #ffffff;
                }
                .bg-transparent {
                    background: transparent;
                }
                .text-gray-700 {
                    color: #374151;
                }
                .chart-container {
                    width: 100%;
                    max-width: 700px;
                }
                .sr-only {
                    position: absolute;
                    width: 1px;
                    height: 1px;
                    overflow: hidden;
                    clip: rect(0, 0, 0, 0);
                }
                "#}
            </style>
        </div>
    }
}

// File: crates/plotline-dioxus/src/lib.rs
// Summary: Dioxus UI scaffolding for the interactive LineChart component (desktop only).
// Notes:
// - This crate keeps UI deps behind the `desktop` feature, so the workspace builds
//   without fetching Dioxus unless explicitly enabled.
// - The component owns its pointer listeners; Dioxus drops them with the
//   element on unmount, so nothing dangles after teardown.

use plotline_core::{Chart, CurveKind, Dataset, Hover, LayoutCache, PointerEvent, Theme};

/// Demo-friendly concrete datum: a labelled `(x, y)` sample.
#[derive(Clone, Debug, PartialEq)]
pub struct XyDatum {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

#[cfg(feature = "desktop")]
pub mod ui {
    use super::*;
    use dioxus::prelude::*;
    use plotline_core::geometry::RectF;
    use plotline_core::types::{Insets, HEIGHT, WIDTH};

    #[derive(Props, Clone)]
    pub struct LineChartProps {
        pub datasets: Vec<Dataset<XyDatum>>,
        #[props(default)]
        pub title: String,
        #[props(default)]
        pub x_axis_label: String,
        #[props(default)]
        pub y_axis_label: String,
        #[props(default = WIDTH)]
        pub width_px: u32,
        #[props(default = HEIGHT)]
        pub height_px: u32,
        #[props(default = Insets::default())]
        pub margin: Insets,
        #[props(default = CurveKind::CatmullRom)]
        pub curve: CurveKind,
        #[props(default = Theme::light())]
        pub theme: Theme,
        /// Draw the per-point cell decomposition (debug overlay).
        #[props(default = false)]
        pub show_cells: bool,
    }

    impl PartialEq for LineChartProps {
        fn eq(&self, _other: &Self) -> bool { false }
    }

    /// Interactive line chart. Pointer moves over the surface re-query the
    /// nearest-point index synchronously; the scene (crosshair, marker,
    /// tooltip included) is re-rendered as SVG markup on every transition.
    #[component]
    pub fn LineChart(props: LineChartProps) -> Element {
        let width = props.width_px;
        let height = props.height_px;
        let margin = props.margin;

        let chart = use_signal(|| {
            let mut c: Chart<XyDatum> = Chart::new();
            c.title = props.title.clone();
            c.x_axis.label = props.x_axis_label.clone();
            c.y_axis.label = props.y_axis_label.clone();
            c.margin = props.margin;
            c.curve = props.curve;
            c.theme = props.theme;
            c.show_cells = props.show_cells;
            for ds in &props.datasets {
                c.add_dataset(ds.clone());
            }
            c
        });
        let mut cache = use_signal(LayoutCache::new);
        let hover = use_signal(|| Hover::Idle);

        fn dispatch(
            chart: Signal<Chart<XyDatum>>,
            mut cache: Signal<LayoutCache>,
            mut hover: Signal<Hover>,
            width: u32,
            height: u32,
            event: PointerEvent,
        ) {
            let c = chart.read();
            let mut cm = cache.write();
            let layout = cm.layout(&c, width, height);
            let next = (*hover.peek()).advance(event, layout);
            hover.set(next);
        }

        // Immutable snapshot for this frame.
        let svg = {
            let c = chart.read();
            let mut cm = cache.write();
            let layout = cm.layout(&c, width, height);
            plotline_svg::render_scene(&c.scene(layout, &hover.read()))
        };

        rsx! {
            div {
                style: format!(
                    "position:relative; width:{width}px; height:{height}px; \
                     display:flex; align-items:center; justify-content:center;",
                ),
                onmousemove: move |evt| {
                    let p = evt.element_coordinates();
                    let x = p.x - margin.left as f64;
                    let y = p.y - margin.top as f64;
                    dispatch(chart, cache, hover, width, height, PointerEvent::Move { x, y });
                },
                onmouseleave: move |_| {
                    dispatch(chart, cache, hover, width, height, PointerEvent::Leave);
                },
                onmousedown: move |evt| {
                    // Pointer-down in the margins counts as an interaction
                    // outside the chart's plot bounds.
                    let p = evt.element_coordinates();
                    let plot = RectF::from_ltrb(
                        margin.left as f64,
                        margin.top as f64,
                        width.saturating_sub(margin.right) as f64,
                        height.saturating_sub(margin.bottom) as f64,
                    );
                    if !plot.contains(p.x, p.y) {
                        dispatch(chart, cache, hover, width, height, PointerEvent::DownOutside);
                    }
                },
                div { dangerous_inner_html: "{svg}" }
            }
        }
    }

    /// Tiny demo launcher so consumers can quickly mount the component.
    pub fn run_demo_ui() -> Result<(), String> {
        #[component]
        fn App() -> Element {
            let series = super::demo_series(100);
            let dataset = Dataset::new("Sample Dataset", series, |d: &XyDatum| (d.x, d.y))
                .with_subtitle("Example data for demonstration")
                .with_style("blue", "none");
            rsx! {
                LineChart {
                    datasets: vec![dataset],
                    title: "Main title".to_string(),
                    x_axis_label: "x axis label".to_string(),
                    y_axis_label: "y axis label".to_string(),
                    curve: CurveKind::CatmullRom,
                    theme: Theme::light(),
                }
            }
        }

        let providers: Vec<Box<dyn Fn() -> Box<dyn std::any::Any> + Send + Sync>> = Vec::new();
        let globals: Vec<Box<dyn std::any::Any>> = Vec::new();
        dioxus_desktop::launch::launch(App, providers, globals);
        Ok(())
    }
}

/// Deterministic demo waveform (the classic noisy sine used by the SVG demo
/// as well). A small LCG stands in for real noise so runs are reproducible.
pub fn demo_series(n: usize) -> Vec<XyDatum> {
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (seed >> 33) as f64 / (1u64 << 31) as f64
    };
    (0..n)
        .map(|i| {
            let x = i as f64;
            let y = (x.sin() + next() * 3.0 + 2.0 * (2.0 * x).cos()).abs();
            XyDatum { x, y, label: format!("Point {}", i + 1) }
        })
        .collect()
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_demo_ui() -> Result<(), &'static str> {
    Err("plotline-dioxus built without `desktop` feature; enable features to run UI demo")
}

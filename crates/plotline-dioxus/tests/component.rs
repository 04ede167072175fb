// File: crates/plotline-dioxus/tests/component.rs
// Purpose: Headless mount of the LineChart component and demo data checks.

use plotline_dioxus::demo_series;

#[test]
fn demo_series_is_deterministic_and_finite() {
    let a = demo_series(32);
    let b = demo_series(32);
    assert_eq!(a, b);
    assert_eq!(a.len(), 32);
    assert!(a.iter().all(|d| d.x.is_finite() && d.y.is_finite()));
}

#[cfg(feature = "desktop")]
mod desktop {
    use super::*;
    use dioxus::prelude::*;
    use plotline_core::Dataset;
    use plotline_dioxus::XyDatum;

    // Mounting renders one frame: signals are created, the layout cache is
    // written through, and the scene SVG is produced.
    #[test]
    fn line_chart_mounts_headlessly() {
        fn app() -> Element {
            let dataset = Dataset::new("wave", demo_series(8), |d: &XyDatum| (d.x, d.y));
            rsx! {
                plotline_dioxus::ui::LineChart { datasets: vec![dataset] }
            }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
    }
}

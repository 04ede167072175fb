// File: crates/plotline-dioxus/src/bin/desktop_demo.rs
// Purpose: Minimal launcher for the Dioxus desktop LineChart demo.

#[cfg(feature = "desktop")]
fn main() {
    if let Err(e) = plotline_dioxus::ui::run_demo_ui() {
        eprintln!("plotline-dioxus demo error: {e}");
    }
}

#[cfg(not(feature = "desktop"))]
fn main() {
    eprintln!("This demo requires --features desktop");
}

// File: crates/plotline-core/src/theme.rs
// Summary: Light/Dark theming for chart chrome colors (CSS color strings).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub grid: &'static str,
    pub grid_opacity_pct: u8,
    pub axis_line: &'static str,
    pub axis_label: &'static str,
    pub tick_label: &'static str,
    pub heading: &'static str,
    pub crosshair: &'static str,
    pub marker_fill: &'static str,
    pub marker_stroke: &'static str,
    pub tooltip_bg: &'static str,
    pub tooltip_text: &'static str,
    pub cell_stroke: &'static str,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#f5fbff",
            grid: "#000000",
            grid_opacity_pct: 10,
            axis_line: "#3c3c46",
            axis_label: "#14141e",
            tick_label: "#64646e",
            heading: "#1e3a8a",
            crosshair: "#808080",
            marker_fill: "#000000",
            marker_stroke: "#ffffff",
            tooltip_bg: "#ffffff",
            tooltip_text: "#14141e",
            cell_stroke: "#c060c0",
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#121214",
            grid: "#28282d",
            grid_opacity_pct: 100,
            axis_line: "#b4b4be",
            axis_label: "#ebebf5",
            tick_label: "#9696a0",
            heading: "#7aa7ff",
            crosshair: "#ffe646",
            marker_fill: "#ffffff",
            marker_stroke: "#121214",
            tooltip_bg: "#1e1e24",
            tooltip_text: "#ebebf5",
            cell_stroke: "#b589d6",
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}

// File: crates/plotline-core/src/chart.rs
// Summary: Chart model, derived layout (scales + pooled points + hit index), and scene builder.

use std::sync::Arc;

use crate::axis::{format_tick, Axis};
use crate::curve::{path_data, CurveKind};
use crate::dataset::Dataset;
use crate::domain::Domain;
use crate::geometry::{clamp, RectF};
use crate::hit::{Cell, HitIndex};
use crate::interaction::{Hover, PointRef};
use crate::scale::LinearScale;
use crate::scene::{Anchor, FadeIn, Node, Scene, TooltipBox};
use crate::theme::Theme;
use crate::types::{Insets, FONT_AXIS_LABEL, FONT_AXIS_TICK, FONT_HEADING, FONT_TOOLTIP, INNER_PADDING_TOP};

/// Tagged tooltip payload, dispatched by `match`. Only the line variant
/// exists today; variants for other mark kinds slot in beside it.
#[derive(Debug)]
pub enum TooltipPayload<'a, D> {
    Line {
        datum: &'a D,
        series: &'a str,
        x: f64,
        y: f64,
    },
}

type TooltipFormat<D> = Arc<dyn Fn(&TooltipPayload<'_, D>) -> Vec<String> + Send + Sync>;

/// A 2D line chart over an opaque datum type: one or more datasets plus
/// chart chrome. Datasets are reached through accessors so the version
/// counter (used for layout invalidation) stays truthful.
pub struct Chart<D> {
    pub title: String,
    pub subtitle: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub margin: Insets,
    pub curve: CurveKind,
    pub theme: Theme,
    /// Pixels reserved above the highest point.
    pub top_padding: f64,
    /// Nearest-point search radius in pixels; defaults to the plot inner
    /// height when unset.
    pub hover_radius: Option<f64>,
    /// Draw the per-point cell decomposition (debug overlay).
    pub show_cells: bool,
    datasets: Vec<Dataset<D>>,
    tooltip_format: Option<TooltipFormat<D>>,
    version: u64,
}

impl<D> Chart<D> {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            margin: Insets::default(),
            curve: CurveKind::default(),
            theme: Theme::default(),
            top_padding: INNER_PADDING_TOP,
            hover_radius: None,
            show_cells: false,
            datasets: Vec::new(),
            tooltip_format: None,
            version: 0,
        }
    }

    pub fn add_dataset(&mut self, dataset: Dataset<D>) {
        self.datasets.push(dataset);
        self.version += 1;
    }

    pub fn datasets(&self) -> &[Dataset<D>] {
        &self.datasets
    }

    /// Mutable dataset access; conservatively bumps the version so cached
    /// layouts are rebuilt.
    pub fn datasets_mut(&mut self) -> &mut Vec<Dataset<D>> {
        self.version += 1;
        &mut self.datasets
    }

    /// Override the tooltip line formatter.
    pub fn set_tooltip_format(
        &mut self,
        f: impl Fn(&TooltipPayload<'_, D>) -> Vec<String> + Send + Sync + 'static,
    ) {
        self.tooltip_format = Some(Arc::new(f));
    }

    /// Resolve a hit back to its source datum.
    pub fn datum(&self, r: PointRef) -> Option<&D> {
        self.datasets.get(r.dataset).and_then(|ds| ds.series.get(r.index))
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    fn tooltip_lines(&self, payload: &TooltipPayload<'_, D>) -> Vec<String> {
        if let Some(f) = &self.tooltip_format {
            return f(payload);
        }
        match payload {
            TooltipPayload::Line { series, x, y, .. } => {
                let mut lines = Vec::with_capacity(3);
                if !series.is_empty() {
                    lines.push((*series).to_string());
                }
                lines.push(format!("x: {}", format_tick(*x)));
                lines.push(format!("y: {}", format_tick(*y)));
                lines
            }
        }
    }
}

impl<D> Default for Chart<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// One pooled point: pixel position, value position, and its source datum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotPoint {
    pub px: f64,
    pub py: f64,
    pub vx: f64,
    pub vy: f64,
    pub source: PointRef,
}

/// Everything derived from (datasets, dimensions): domains, scales, pooled
/// pixel points, and the nearest-point index. Treated as an immutable
/// snapshot; any input change produces a whole new `Layout`, so stale
/// scales are never consulted by a later render or hit-test.
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    pub inner_width: f64,
    pub inner_height: f64,
    pub domain: Domain,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub points: Vec<PlotPoint>,
    pub hover_radius: f64,
    index: HitIndex,
}

impl Layout {
    pub fn compute<D>(chart: &Chart<D>, width: u32, height: u32) -> Self {
        let insets = chart.margin;
        let inner_width = width.saturating_sub(insets.hsum()).max(1) as f64;
        let inner_height = height.saturating_sub(insets.vsum()).max(1) as f64;
        let top_padding = chart.top_padding.min(inner_height);

        let mut pooled: Vec<(f64, f64, PointRef)> = Vec::new();
        for (di, ds) in chart.datasets().iter().enumerate() {
            for (i, d) in ds.series.iter().enumerate() {
                let (vx, vy) = (ds.projection)(d);
                if vx.is_finite() && vy.is_finite() {
                    pooled.push((vx, vy, PointRef { dataset: di, index: i }));
                }
            }
        }

        let domain = Domain::from_points(pooled.iter().map(|p| (p.0, p.1)));
        let x_scale = LinearScale::x(domain.x, inner_width);
        let y_scale = LinearScale::y(domain.y, inner_height, top_padding);

        let points: Vec<PlotPoint> = pooled
            .into_iter()
            .map(|(vx, vy, source)| PlotPoint {
                px: x_scale.map(vx),
                py: y_scale.map(vy),
                vx,
                vy,
                source,
            })
            .collect();
        let index = HitIndex::build(&points.iter().map(|p| (p.px, p.py)).collect::<Vec<_>>());

        Self {
            width,
            height,
            insets,
            inner_width,
            inner_height,
            domain,
            x_scale,
            y_scale,
            points,
            hover_radius: chart.hover_radius.unwrap_or(inner_height),
            index,
        }
    }

    /// Nearest pooled point within the hover radius of `(px, py)`
    /// (plot-inner pixel coordinates), else `None`. Never an error: "no
    /// match" simply keeps or clears the tooltip.
    pub fn hit_test(&self, px: f64, py: f64) -> Option<&PlotPoint> {
        self.index.find(px, py, self.hover_radius).map(|i| &self.points[i])
    }

    pub fn hit_index(&self) -> &HitIndex {
        &self.index
    }

    /// Cell decomposition over the plot rect (debug overlay).
    pub fn cells(&self) -> Vec<Cell> {
        self.index.cells(RectF::from_ltwh(0.0, 0.0, self.inner_width, self.inner_height))
    }

    fn point_by_ref(&self, r: PointRef) -> Option<&PlotPoint> {
        self.points.iter().find(|p| p.source == r)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CacheKey {
    version: u64,
    width: u32,
    height: u32,
    insets: Insets,
    top_padding_bits: u64,
    hover_radius_bits: Option<u64>,
}

impl CacheKey {
    fn of<D>(chart: &Chart<D>, width: u32, height: u32) -> Self {
        Self {
            version: chart.version(),
            width,
            height,
            insets: chart.margin,
            top_padding_bits: chart.top_padding.to_bits(),
            hover_radius_bits: chart.hover_radius.map(f64::to_bits),
        }
    }
}

/// Memoized layout keyed by (chart version, dimensions, margins). The
/// layout is recomputed wholesale when the key changes; there is no
/// incremental patching to race against.
#[derive(Default)]
pub struct LayoutCache {
    key: Option<CacheKey>,
    layout: Option<Layout>,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self { key: None, layout: None }
    }

    pub fn layout<D>(&mut self, chart: &Chart<D>, width: u32, height: u32) -> &Layout {
        let key = CacheKey::of(chart, width, height);
        if self.key != Some(key) || self.layout.is_none() {
            self.layout = Some(Layout::compute(chart, width, height));
            self.key = Some(key);
        }
        // Populated just above when absent.
        self.layout.get_or_insert_with(|| Layout::compute(chart, width, height))
    }
}

// ---- scene building ----------------------------------------------------------

impl<D> Chart<D> {
    /// Pure render pass: (chart, layout, hover) -> immutable scene tree.
    /// Re-evaluated on every relevant state transition; backends draw it
    /// without touching chart state.
    pub fn scene(&self, layout: &Layout, hover: &Hover) -> Scene {
        let theme = &self.theme;
        let w = layout.width as f64;
        let h = layout.height as f64;
        let iw = layout.inner_width;
        let ih = layout.inner_height;

        let mut nodes: Vec<Node> = Vec::new();

        if !self.title.is_empty() {
            nodes.push(Node::Text {
                x: w / 2.0,
                y: layout.insets.top as f64 / 2.0,
                text: self.title.clone(),
                size: FONT_HEADING,
                fill: theme.heading.to_string(),
                anchor: Anchor::Middle,
                rotate: None,
                bold: true,
            });
        }

        let mut plot: Vec<Node> = Vec::new();
        self.push_grid(&mut plot, layout);
        if self.show_cells {
            self.push_cells(&mut plot, layout);
        }
        self.push_series_paths(&mut plot, layout);
        if let Hover::Hovering { x, y, .. } = hover {
            self.push_crosshair(&mut plot, *x, *y, ih);
        }
        self.push_x_axis(&mut plot, layout, iw, ih);
        self.push_y_axis(&mut plot, layout, ih);

        nodes.push(Node::Group {
            dx: layout.insets.left as f64,
            dy: layout.insets.top as f64,
            nodes: plot,
        });

        Scene {
            width: w,
            height: h,
            background: theme.background.to_string(),
            fade_in: Some(FadeIn::default()),
            nodes,
            tooltip: self.tooltip_for(layout, hover),
        }
    }

    fn push_grid(&self, out: &mut Vec<Node>, layout: &Layout) {
        // Rows only, aligned to y ticks (the columns stay clean behind the
        // dense x tick labels).
        let theme = &self.theme;
        for v in self.y_axis.tick_values(layout.domain.y, layout.inner_height) {
            let py = layout.y_scale.map(v);
            out.push(Node::Line {
                x1: 0.0,
                y1: py,
                x2: layout.inner_width,
                y2: py,
                stroke: theme.grid.to_string(),
                width: 1.0,
                dash: None,
                opacity: theme.grid_opacity_pct as f64 / 100.0,
            });
        }
    }

    fn push_cells(&self, out: &mut Vec<Node>, layout: &Layout) {
        for cell in layout.cells() {
            if cell.vertices.len() < 3 {
                continue;
            }
            out.push(Node::Polygon {
                points: cell.vertices,
                stroke: self.theme.cell_stroke.to_string(),
                fill: "none".to_string(),
                opacity: 0.5,
            });
        }
    }

    fn push_series_paths(&self, out: &mut Vec<Node>, layout: &Layout) {
        for ds in self.datasets() {
            let pts: Vec<(f64, f64)> = ds
                .points()
                .filter(|(x, y)| x.is_finite() && y.is_finite())
                .map(|(x, y)| (layout.x_scale.map(x), layout.y_scale.map(y)))
                .collect();
            if pts.len() < 2 {
                continue;
            }
            out.push(Node::Path {
                d: path_data(&pts, self.curve),
                stroke: ds.style.stroke.clone(),
                fill: ds.style.fill.clone(),
                width: 1.5,
                opacity: 0.6,
            });
        }
    }

    fn push_crosshair(&self, out: &mut Vec<Node>, hx: f64, hy: f64, inner_height: f64) {
        let theme = &self.theme;
        let dash = Some("4,2".to_string());
        out.push(Node::Line {
            x1: hx,
            y1: inner_height,
            x2: hx,
            y2: hy,
            stroke: theme.crosshair.to_string(),
            width: 2.0,
            dash: dash.clone(),
            opacity: 1.0,
        });
        out.push(Node::Line {
            x1: 0.0,
            y1: hy,
            x2: hx,
            y2: hy,
            stroke: theme.crosshair.to_string(),
            width: 2.0,
            dash,
            opacity: 1.0,
        });
        out.push(Node::Circle {
            cx: hx,
            cy: hy,
            r: 6.0,
            fill: theme.marker_fill.to_string(),
            stroke: theme.marker_stroke.to_string(),
            width: 2.0,
        });
    }

    fn push_x_axis(&self, out: &mut Vec<Node>, layout: &Layout, iw: f64, ih: f64) {
        let theme = &self.theme;
        out.push(Node::Line {
            x1: 0.0,
            y1: ih,
            x2: iw,
            y2: ih,
            stroke: theme.axis_line.to_string(),
            width: 1.5,
            dash: None,
            opacity: 1.0,
        });
        for v in self.x_axis.tick_values(layout.domain.x, iw) {
            let px = layout.x_scale.map(v);
            out.push(Node::Line {
                x1: px,
                y1: ih,
                x2: px,
                y2: ih + 8.0,
                stroke: theme.axis_line.to_string(),
                width: 1.0,
                dash: None,
                opacity: 1.0,
            });
            out.push(Node::Text {
                x: px,
                y: ih + 8.0 + FONT_AXIS_TICK,
                text: format_tick(v),
                size: FONT_AXIS_TICK,
                fill: theme.tick_label.to_string(),
                anchor: Anchor::Middle,
                rotate: None,
                bold: false,
            });
        }
        if !self.x_axis.label.is_empty() {
            out.push(Node::Text {
                x: iw / 2.0,
                y: ih + 8.0 + FONT_AXIS_TICK + 20.0 + FONT_AXIS_LABEL / 2.0,
                text: self.x_axis.label.clone(),
                size: FONT_AXIS_LABEL,
                fill: theme.axis_label.to_string(),
                anchor: Anchor::Middle,
                rotate: None,
                bold: false,
            });
        }
    }

    fn push_y_axis(&self, out: &mut Vec<Node>, layout: &Layout, ih: f64) {
        let theme = &self.theme;
        out.push(Node::Line {
            x1: 0.0,
            y1: 0.0,
            x2: 0.0,
            y2: ih,
            stroke: theme.axis_line.to_string(),
            width: 1.5,
            dash: None,
            opacity: 1.0,
        });
        for v in self.y_axis.tick_values(layout.domain.y, ih) {
            let py = layout.y_scale.map(v);
            out.push(Node::Line {
                x1: -8.0,
                y1: py,
                x2: 0.0,
                y2: py,
                stroke: theme.axis_line.to_string(),
                width: 1.0,
                dash: None,
                opacity: 1.0,
            });
            out.push(Node::Text {
                x: -12.0,
                y: py + FONT_AXIS_TICK / 3.0,
                text: format_tick(v),
                size: FONT_AXIS_TICK,
                fill: theme.tick_label.to_string(),
                anchor: Anchor::End,
                rotate: None,
                bold: false,
            });
        }
        if !self.y_axis.label.is_empty() {
            out.push(Node::Text {
                x: -52.0,
                y: ih / 2.0,
                text: self.y_axis.label.clone(),
                size: FONT_AXIS_LABEL,
                fill: theme.axis_label.to_string(),
                anchor: Anchor::Middle,
                rotate: Some(-90.0),
                bold: false,
            });
        }
    }

    fn tooltip_for(&self, layout: &Layout, hover: &Hover) -> Option<TooltipBox> {
        let Hover::Hovering { hit, .. } = hover else {
            return None;
        };
        let point = layout.point_by_ref(*hit)?;
        let datum = self.datum(*hit)?;
        let series = self
            .datasets()
            .get(hit.dataset)
            .map(|ds| ds.title.as_str())
            .unwrap_or("");
        let payload = TooltipPayload::Line { datum, series, x: point.vx, y: point.vy };
        let lines = self.tooltip_lines(&payload);

        // Estimated box from line metrics; anchored at the hovered point
        // and clamped so it never leaves the viewport.
        let longest = lines.iter().map(String::len).max().unwrap_or(0) as f64;
        let box_w = longest * FONT_TOOLTIP * 0.55 + 16.0;
        let box_h = lines.len() as f64 * (FONT_TOOLTIP + 5.0) + 12.0;
        let anchor_x = layout.insets.left as f64 + point.px;
        let anchor_y = layout.insets.top as f64 + point.py;
        let w = layout.width as f64;
        let h = layout.height as f64;

        let mut x = anchor_x + 12.0;
        if x + box_w > w {
            x = anchor_x - 12.0 - box_w;
        }
        let mut y = anchor_y - box_h - 12.0;
        if y < 0.0 {
            y = anchor_y + 12.0;
        }
        Some(TooltipBox {
            x: clamp(x, 0.0, (w - box_w).max(0.0)),
            y: clamp(y, 0.0, (h - box_h).max(0.0)),
            width: box_w,
            height: box_h,
            lines,
            bg: self.theme.tooltip_bg.to_string(),
            text_color: self.theme.tooltip_text.to_string(),
        })
    }
}

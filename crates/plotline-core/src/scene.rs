// File: crates/plotline-core/src/scene.rs
// Summary: Immutable render-tree primitives produced by the scene builder.

/// Text anchoring, matching the SVG `text-anchor` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// Entrance animation for the whole scene (opacity ramp on mount).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeIn {
    pub from: f64,
    pub to: f64,
    pub duration_ms: u32,
}

impl Default for FadeIn {
    fn default() -> Self {
        Self { from: 0.0, to: 1.0, duration_ms: 400 }
    }
}

/// One drawable primitive. Backends walk these in order; later nodes paint
/// over earlier ones.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Group {
        dx: f64,
        dy: f64,
        nodes: Vec<Node>,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: String,
        width: f64,
        dash: Option<String>,
        opacity: f64,
    },
    Path {
        d: String,
        stroke: String,
        fill: String,
        width: f64,
        opacity: f64,
    },
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        fill: String,
        opacity: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: String,
        stroke: String,
        width: f64,
    },
    Polygon {
        points: Vec<(f64, f64)>,
        stroke: String,
        fill: String,
        opacity: f64,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        size: f64,
        fill: String,
        anchor: Anchor,
        rotate: Option<f64>,
        bold: bool,
    },
}

/// Tooltip overlay box, positioned in full-surface pixel coordinates and
/// already clamped to stay within the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub lines: Vec<String>,
    pub bg: String,
    pub text_color: String,
}

/// A complete, immutable description of one rendered frame. Recomputed from
/// (chart, layout, hover) on every relevant state transition; backends hold
/// no other drawing state.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub background: String,
    pub fade_in: Option<FadeIn>,
    pub nodes: Vec<Node>,
    pub tooltip: Option<TooltipBox>,
}

impl Scene {
    /// Depth-first flattening, groups included. Handy for tests and for
    /// backends that do not nest.
    pub fn flat_nodes(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        fn walk<'a>(nodes: &'a [Node], out: &mut Vec<&'a Node>) {
            for n in nodes {
                out.push(n);
                if let Node::Group { nodes, .. } = n {
                    walk(nodes, out);
                }
            }
        }
        walk(&self.nodes, &mut out);
        out
    }

    /// Number of series paths in the scene.
    pub fn path_count(&self) -> usize {
        self.flat_nodes()
            .iter()
            .filter(|n| matches!(n, Node::Path { .. }))
            .count()
    }
}

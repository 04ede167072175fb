// File: crates/plotline-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and hit-testing.

pub mod chart;
pub mod dataset;
pub mod axis;
pub mod domain;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod curve;
pub mod hit;
pub mod interaction;
pub mod scene;
pub mod theme;

pub use chart::{Chart, Layout, LayoutCache, PlotPoint, TooltipPayload};
pub use dataset::{Dataset, Projection, SeriesStyle};
pub use domain::Domain;
pub use axis::{Axis, TickPolicy};
pub use scale::LinearScale;
pub use curve::CurveKind;
pub use hit::{Cell, HitIndex};
pub use interaction::{Hover, PointRef, PointerEvent};
pub use scene::{Anchor, FadeIn, Node, Scene, TooltipBox};
pub use theme::Theme;

// File: crates/plotline-core/src/dataset.rs
// Summary: Dataset model: an ordered series of opaque datums plus its projection and styling.

use std::fmt;
use std::sync::Arc;

/// Maps an opaque datum to a value-space `(x, y)` point.
pub type Projection<D> = Arc<dyn Fn(&D) -> (f64, f64) + Send + Sync>;

/// Per-series path styling (CSS color strings).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeriesStyle {
    pub stroke: String,
    pub fill: String,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self { stroke: "#40a0ff".to_string(), fill: "none".to_string() }
    }
}

/// One series of datums with descriptive metadata. The datum type is opaque
/// to the chart; only the projection sees inside it. Series order matters
/// for path drawing, never for hit-testing.
#[derive(Clone)]
pub struct Dataset<D> {
    pub title: String,
    pub subtitle: String,
    pub style: SeriesStyle,
    pub series: Vec<D>,
    pub projection: Projection<D>,
}

impl<D> Dataset<D> {
    pub fn new(
        title: impl Into<String>,
        series: Vec<D>,
        projection: impl Fn(&D) -> (f64, f64) + Send + Sync + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: String::new(),
            style: SeriesStyle::default(),
            series,
            projection: Arc::new(projection),
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn with_style(mut self, stroke: impl Into<String>, fill: impl Into<String>) -> Self {
        self.style = SeriesStyle { stroke: stroke.into(), fill: fill.into() };
        self
    }

    /// Projected value-space points, in series order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.series.iter().map(move |d| (self.projection)(d))
    }
}

impl<D> fmt::Debug for Dataset<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dataset")
            .field("title", &self.title)
            .field("subtitle", &self.subtitle)
            .field("style", &self.style)
            .field("len", &self.series.len())
            .finish()
    }
}

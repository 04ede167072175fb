// File: crates/plotline-core/src/scale.rs
// Summary: Linear value-to-pixel scale with rounded output and a degenerate-domain guard.

/// Monotonic linear mapping from a value-space interval to a pixel-space
/// interval. Output is rounded to whole pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Horizontal scale: `[min_x, max_x]` onto `[0, inner_width]`.
    pub fn x(domain: (f64, f64), inner_width: f64) -> Self {
        Self::new(domain, (0.0, inner_width))
    }

    /// Vertical scale: `[0, max_y]` onto `[inner_height, top_padding]`.
    /// Inverted so larger values land closer to the plot's top edge.
    pub fn y(domain: (f64, f64), inner_height: f64, top_padding: f64) -> Self {
        Self::new(domain, (inner_height, top_padding))
    }

    /// Map a value to a whole-pixel coordinate. A zero-span domain maps
    /// every input to the start of the range.
    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let span = self.domain_span();
        if span == 0.0 {
            return self.range.0.round();
        }
        let t = (v - self.domain.0) / span;
        (self.range.0 + t * (self.range.1 - self.range.0)).round()
    }

    pub fn domain_span(&self) -> f64 {
        self.domain.1 - self.domain.0
    }
}

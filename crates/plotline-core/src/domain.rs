// File: crates/plotline-core/src/domain.rs
// Summary: Per-render value domains derived from pooled projected points.

/// Value-space extents for both axes, recomputed wholesale each render.
///
/// The x domain spans the min/max over the union of all series' finite
/// projected points. The y domain is `(0, max_y)` so the baseline is always
/// part of the plot; with all-negative data it descends from 0, which is
/// still a valid linear domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl Domain {
    /// Domain used when no finite points exist: `[0, 1]` on both axes.
    pub const FALLBACK: Domain = Domain { x: (0.0, 1.0), y: (0.0, 1.0) };

    /// Fold finite points into a domain. Non-finite coordinates are
    /// excluded entirely; an empty (or all non-finite) input yields
    /// [`Domain::FALLBACK`] rather than min/max of nothing.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for (x, y) in points {
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_max = y_max.max(y);
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_max.is_finite() {
            return Self::FALLBACK;
        }
        Self { x: (x_min, x_max), y: (0.0, y_max) }
    }
}

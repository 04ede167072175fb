// File: crates/plotline-core/src/axis.rs
// Summary: Axis model with labels, tick layout, and tick formatting.

use crate::types::X_TICK_COUNT;

/// How many tick values an axis asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickPolicy {
    /// Fixed tick count.
    Count(usize),
    /// Derive the count from the axis pixel extent (roughly one tick per
    /// 40 px, clamped to 2..=10).
    Auto,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub ticks: TickPolicy,
}

impl Axis {
    pub fn new(label: impl Into<String>, ticks: TickPolicy) -> Self {
        Self { label: label.into(), ticks }
    }

    pub fn default_x() -> Self {
        Self::new("", TickPolicy::Count(X_TICK_COUNT))
    }

    pub fn default_y() -> Self {
        Self::new("", TickPolicy::Auto)
    }

    /// Tick values across `domain` for an axis spanning `extent` pixels.
    pub fn tick_values(&self, domain: (f64, f64), extent: f64) -> Vec<f64> {
        let count = match self.ticks {
            TickPolicy::Count(n) => n.max(2),
            TickPolicy::Auto => ((extent / 40.0) as usize).clamp(2, 10),
        };
        linspace(domain.0, domain.1, count)
    }
}

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Identity tick formatting: integers render bare, fractions trimmed to at
/// most three decimals.
pub fn format_tick(v: f64) -> String {
    if !v.is_finite() {
        return String::new();
    }
    if v == v.round() && v.abs() < 1e15 {
        return format!("{}", v as i64);
    }
    let s = format!("{v:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

// File: crates/plotline-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, font sizes).

/// Default surface width in pixels.
pub const WIDTH: u32 = 1000;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 1000;

/// Vertical headroom reserved above the highest point, in pixels.
pub const INNER_PADDING_TOP: f64 = 50.0;

/// Default number of x-axis ticks.
pub const X_TICK_COUNT: usize = 25;

/// Font sizes used by the scene builder, in pixels.
pub const FONT_AXIS_TICK: f64 = 15.0;
pub const FONT_AXIS_LABEL: f64 = 18.0;
pub const FONT_HEADING: f64 = 18.0;
pub const FONT_TOOLTIP: f64 = 15.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(100, 100, 100, 100)
    }
}

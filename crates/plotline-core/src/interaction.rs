// File: crates/plotline-core/src/interaction.rs
// Summary: Hover interaction state machine driven by pointer events.

use crate::chart::Layout;

/// Identifies the source datum of a pooled point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointRef {
    pub dataset: usize,
    pub index: usize,
}

/// Pointer input in plot-inner pixel coordinates (origin at the plot's
/// top-left, after margins).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Move { x: f64, y: f64 },
    /// Pointer left the interactive surface.
    Leave,
    /// Pointer-down landed outside the chart's bounding container.
    DownOutside,
}

/// Hover lifecycle: every pointer move synchronously re-queries the nearest
/// point; there are no timers and no debouncing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Hover {
    Idle,
    Hovering {
        /// Hovered point, pixel space.
        x: f64,
        y: f64,
        hit: PointRef,
    },
}

impl Hover {
    /// Pure transition function. `Move` queries the layout's hit index with
    /// its configured radius: a match (from either state) hovers the found
    /// point, a miss clears. `Leave` and `DownOutside` always clear.
    pub fn advance(self, event: PointerEvent, layout: &Layout) -> Hover {
        match event {
            PointerEvent::Move { x, y } => match layout.hit_test(x, y) {
                Some(p) => Hover::Hovering { x: p.px, y: p.py, hit: p.source },
                None => Hover::Idle,
            },
            PointerEvent::Leave | PointerEvent::DownOutside => Hover::Idle,
        }
    }

    pub fn is_hovering(&self) -> bool {
        matches!(self, Hover::Hovering { .. })
    }
}

impl Default for Hover {
    fn default() -> Self { Hover::Idle }
}

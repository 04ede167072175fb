// File: crates/plotline-core/src/curve.rs
// Summary: Curve interpolation policies producing SVG path data from pixel points.

/// How consecutive points are connected. Selected by the caller per chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CurveKind {
    /// Straight segments between points.
    Linear,
    /// Catmull-Rom smoothing rendered as cubic Bezier segments.
    CatmullRom,
}

impl Default for CurveKind {
    fn default() -> Self { CurveKind::Linear }
}

/// Build SVG path data for `points` (pixel space, in series order).
/// Fewer than two points yield no drawable segment.
pub fn path_data(points: &[(f64, f64)], curve: CurveKind) -> String {
    match points {
        [] => String::new(),
        [(x, y)] => format!("M{x},{y}"),
        _ => match curve {
            CurveKind::Linear => linear_path(points),
            CurveKind::CatmullRom => catmull_rom_path(points),
        },
    }
}

fn linear_path(points: &[(f64, f64)]) -> String {
    let mut d = String::with_capacity(points.len() * 12);
    let (x0, y0) = points[0];
    d.push_str(&format!("M{x0},{y0}"));
    for &(x, y) in &points[1..] {
        d.push_str(&format!("L{x},{y}"));
    }
    d
}

fn catmull_rom_path(points: &[(f64, f64)]) -> String {
    let n = points.len();
    let mut d = String::with_capacity(n * 32);
    let (x0, y0) = points[0];
    d.push_str(&format!("M{x0},{y0}"));
    for i in 0..n - 1 {
        let p0 = if i == 0 { points[0] } else { points[i - 1] };
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = if i + 2 < n { points[i + 2] } else { points[i + 1] };

        let c1x = p1.0 + (p2.0 - p0.0) / 6.0;
        let c1y = p1.1 + (p2.1 - p0.1) / 6.0;
        let c2x = p2.0 - (p3.0 - p1.0) / 6.0;
        let c2y = p2.1 - (p3.1 - p1.1) / 6.0;
        d.push_str(&format!("C{c1x},{c1y} {c2x},{c2y} {},{}", p2.0, p2.1));
    }
    d
}

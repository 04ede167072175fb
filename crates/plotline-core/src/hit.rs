// File: crates/plotline-core/src/hit.rs
// Summary: Nearest-point index over pooled pixel points plus per-point cell decomposition.

use kiddo::{KdTree, SquaredEuclidean};

use crate::geometry::RectF;

/// Spatial index answering "nearest indexed point within radius" queries in
/// better-than-linear expected time. Built over the pooled pixel-space
/// points of all series; series identity is irrelevant here.
///
/// Rebuild whenever the pooled point set changes (new data, resized plot,
/// changed projections). Queries against a stale index are a caller bug.
pub struct HitIndex {
    tree: KdTree<f64, 2>,
    pts: Vec<(f64, f64)>,
}

impl HitIndex {
    /// Build from pixel-space points. Non-finite points are skipped and can
    /// never be returned by [`HitIndex::find`].
    pub fn build(points: &[(f64, f64)]) -> Self {
        let mut tree: KdTree<f64, 2> = KdTree::new();
        let mut pts = Vec::with_capacity(points.len());
        for &(x, y) in points {
            if x.is_finite() && y.is_finite() {
                tree.add(&[x, y], pts.len() as u64);
                pts.push((x, y));
            }
        }
        Self { tree, pts }
    }

    pub fn len(&self) -> usize {
        self.pts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    /// Indexed point position, if `i` is in range.
    pub fn point(&self, i: usize) -> Option<(f64, f64)> {
        self.pts.get(i).copied()
    }

    /// Index of the single nearest point to `(px, py)` with distance
    /// <= `radius`, or `None`. Equidistant candidates resolve to the lowest
    /// insertion index, so results are reproducible for a fixed input.
    pub fn find(&self, px: f64, py: f64, radius: f64) -> Option<usize> {
        if self.pts.is_empty() || !px.is_finite() || !py.is_finite() || !(radius >= 0.0) {
            return None;
        }
        let q = [px, py];
        let best = self.tree.nearest_one::<SquaredEuclidean>(&q);
        if best.distance > radius * radius {
            return None;
        }
        // `within_unsorted` at the best squared distance yields every tied
        // candidate; pick the stable winner.
        self.tree
            .within_unsorted::<SquaredEuclidean>(&q, best.distance)
            .into_iter()
            .filter(|n| n.distance == best.distance)
            .map(|n| n.item as usize)
            .min()
            .or(Some(best.item as usize))
    }

    /// Planar decomposition of `rect` into one convex polygonal cell per
    /// indexed point: the rect clipped by the perpendicular bisector against
    /// every other point. Cells cover the rect without gaps or overlaps.
    ///
    /// This is an O(n^2) construction intended for the optional debug
    /// overlay, not for the hit-test path. Coincident sites share a cell.
    pub fn cells(&self, rect: RectF) -> Vec<Cell> {
        let mut out = Vec::with_capacity(self.pts.len());
        for (i, &site) in self.pts.iter().enumerate() {
            let mut poly = vec![
                (rect.left, rect.top),
                (rect.right, rect.top),
                (rect.right, rect.bottom),
                (rect.left, rect.bottom),
            ];
            for (j, &other) in self.pts.iter().enumerate() {
                if i == j || poly.is_empty() {
                    continue;
                }
                poly = clip_half_plane(&poly, site, other);
            }
            out.push(Cell { site: i, vertices: poly });
        }
        out
    }
}

/// One polygonal region of the plot rect, owning the points closer to its
/// site than to any other site.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    /// Index of the point this cell belongs to.
    pub site: usize,
    /// Convex polygon vertices in order; empty if the cell degenerated.
    pub vertices: Vec<(f64, f64)>,
}

/// Sutherland-Hodgman clip of `poly` against the half-plane of points at
/// least as close to `a` as to `b` (the side of the perpendicular bisector
/// containing `a`).
fn clip_half_plane(poly: &[(f64, f64)], a: (f64, f64), b: (f64, f64)) -> Vec<(f64, f64)> {
    let mx = (a.0 + b.0) / 2.0;
    let my = (a.1 + b.1) / 2.0;
    let nx = b.0 - a.0;
    let ny = b.1 - a.1;
    // Signed side value: <= 0 means closer to `a`.
    let side = |p: (f64, f64)| (p.0 - mx) * nx + (p.1 - my) * ny;

    let mut out = Vec::with_capacity(poly.len() + 1);
    for (k, &p) in poly.iter().enumerate() {
        let q = poly[(k + 1) % poly.len()];
        let sp = side(p);
        let sq = side(q);
        if sp <= 0.0 {
            out.push(p);
        }
        if (sp < 0.0 && sq > 0.0) || (sp > 0.0 && sq < 0.0) {
            let t = sp / (sp - sq);
            out.push((p.0 + t * (q.0 - p.0), p.1 + t * (q.1 - p.1)));
        }
    }
    out
}

//! Parametric (Liang–Barsky) segment clipping in data space.

use glam::DVec2;

use crate::bounds::ClipRect;

/// Clip the segment `a -> b` to `rect` (boundary inclusive).
///
/// Returns `None` when no part of the segment is inside. Endpoints that are
/// already inside are returned unchanged; endpoints produced by the clip are
/// snapped onto the boundary they were cut against.
pub fn clip_segment(a: DVec2, b: DVec2, rect: &ClipRect) -> Option<(DVec2, DVec2)> {
    if !a.is_finite() || !b.is_finite() {
        return None;
    }

    let d = b - a;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    let mut t0_edge = None;
    let mut t1_edge = None;

    // Each (p, q) pair is one half-plane: inside when p * t <= q.
    let edges = [
        (-d.x, a.x - rect.x_min),
        (d.x, rect.x_max - a.x),
        (-d.y, a.y - rect.y_min),
        (d.y, rect.y_max - a.y),
    ];

    for (edge, (p, q)) in edges.into_iter().enumerate() {
        if p == 0.0 {
            // Parallel to this edge: either fully inside it or fully outside.
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            if r > t0 {
                t0 = r;
                t0_edge = Some(edge);
            }
        } else {
            if r < t0 {
                return None;
            }
            if r < t1 {
                t1 = r;
                t1_edge = Some(edge);
            }
        }
    }

    let start = match t0_edge {
        Some(edge) => snap(a + d * t0, edge, rect),
        None => a,
    };
    let end = match t1_edge {
        Some(edge) => snap(a + d * t1, edge, rect),
        None => b,
    };
    Some((start, end))
}

fn snap(p: DVec2, edge: usize, rect: &ClipRect) -> DVec2 {
    let mut p = p.clamp(rect.min(), rect.max());
    match edge {
        0 => p.x = rect.x_min,
        1 => p.x = rect.x_max,
        2 => p.y = rect.y_min,
        _ => p.y = rect.y_max,
    }
    p
}

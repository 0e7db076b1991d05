//! Tolerance-based curve simplification (Ramer–Douglas–Peucker).
//!
//! Distances are planar, computed directly in degree space with the
//! projection clamped to the segment. At road-route scale this planar
//! approximation is well inside the tolerance already being applied, so
//! no great-circle correction is made.

use crate::geo::GeoPoint;

/// Default simplification tolerance in degrees. Roughly one kilometre at
/// mid-US latitudes, which collapses highway polylines by an order of
/// magnitude while keeping the rendered shape intact.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Reduce `points` to a visually equivalent subsequence.
///
/// The output always retains the first and last input point, never
/// reorders, and never invents points. Duplicate consecutive points are
/// treated as zero-deviation and dropped.
pub fn simplify(points: &[GeoPoint], tolerance: f64) -> Vec<GeoPoint> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;

    // Explicit work stack of (start, end) anchor pairs instead of
    // recursion, so pathological inputs cannot overflow the call stack.
    let mut pending = vec![(0usize, points.len() - 1)];
    while let Some((start, end)) = pending.pop() {
        if end <= start + 1 {
            continue;
        }

        let mut max_distance = 0.0;
        let mut max_index = start;
        for index in start + 1..end {
            let distance = point_segment_distance(points[index], points[start], points[end]);
            if distance > max_distance {
                max_distance = distance;
                max_index = index;
            }
        }

        if max_distance > tolerance {
            keep[max_index] = true;
            pending.push((start, max_index));
            pending.push((max_index, end));
        }
    }

    points
        .iter()
        .zip(keep)
        .filter_map(|(point, kept)| kept.then_some(*point))
        .collect()
}

/// Planar distance from `point` to the segment `start`..`end`, with the
/// projection clamped to the segment endpoints. A zero-length segment
/// degenerates to point-to-point distance.
fn point_segment_distance(point: GeoPoint, start: GeoPoint, end: GeoPoint) -> f64 {
    let dx = end.lon - start.lon;
    let dy = end.lat - start.lat;

    if dx == 0.0 && dy == 0.0 {
        let px = point.lon - start.lon;
        let py = point.lat - start.lat;
        return (px * px + py * py).sqrt();
    }

    let t = ((point.lon - start.lon) * dx + (point.lat - start.lat) * dy) / (dx * dx + dy * dy);
    let t = t.clamp(0.0, 1.0);

    let proj_x = start.lon + t * dx;
    let proj_y = start.lat + t * dy;
    let px = point.lon - proj_x;
    let py = point.lat - proj_y;
    (px * px + py * py).sqrt()
}

use glam::{Vec2, Vec3};

use crate::cross_2d;

/// A 2D line as origin plus delta. Used for intercepts between a ray's XZ
/// projection and wall segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trace {
    pub xy: Vec2,
    pub dxy: Vec2,
}

impl Trace {
    #[inline]
    pub fn from_points(start: Vec2, end: Vec2) -> Self {
        Self {
            xy: start,
            dxy: end - start,
        }
    }
}

/// Returns the fractional intercept point along `along`, where `cross` is
/// treated as an infinite line. `None` if the lines are parallel.
#[inline]
pub fn intercept_vector(along: Trace, cross: Trace) -> Option<f32> {
    let denominator = cross_2d(along.dxy, cross.dxy);
    if denominator.abs() <= f32::EPSILON {
        return None;
    }
    Some(cross_2d(cross.xy - along.xy, cross.dxy) / denominator)
}

/// Intersect the segments `a0 -> a1` and `b0 -> b1`.
///
/// On a hit returns `(s, t)`: the fractions along the first and second segment
/// respectively, both within `0.0..=1.0`. Parallel or collinear segments do
/// not intersect.
pub fn segment_intersect(a0: Vec2, a1: Vec2, b0: Vec2, b1: Vec2) -> Option<(f32, f32)> {
    let a = Trace::from_points(a0, a1);
    let b = Trace::from_points(b0, b1);

    let s = intercept_vector(a, b)?;
    if !(0.0..=1.0).contains(&s) {
        return None;
    }
    let t = intercept_vector(b, a)?;
    if !(0.0..=1.0).contains(&t) {
        return None;
    }
    Some((s, t))
}

/// Intersect the segment `p0 -> p1` with the horizontal plane at `height`.
/// Returns the hit point only if the plane lies between the two ends.
pub fn line_y_plane_intersect(p0: Vec3, p1: Vec3, height: f32) -> Option<Vec3> {
    let dy = p1.y - p0.y;
    if dy.abs() <= f32::EPSILON {
        return None;
    }
    let frac = (height - p0.y) / dy;
    if !(0.0..=1.0).contains(&frac) {
        return None;
    }
    let mut hit = p0 + (p1 - p0) * frac;
    // Snap onto the plane, the lerp can drift by an ulp
    hit.y = height;
    Some(hit)
}

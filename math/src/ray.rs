use glam::{Vec2, Vec3};

use crate::Bounds3;

/// Which sector layers a ray is allowed to hit
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RayLayer {
    #[default]
    Any,
    Exact(i32),
}

impl RayLayer {
    #[inline]
    pub fn matches(&self, layer: i32) -> bool {
        match self {
            RayLayer::Any => true,
            RayLayer::Exact(l) => *l == layer,
        }
    }
}

/// A query ray. `dir` does not need to be unit length: the ray covers
/// `origin .. origin + dir * max_dist`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
    pub max_dist: f32,
    pub layer: RayLayer,
}

impl Ray {
    pub const fn new(origin: Vec3, dir: Vec3, max_dist: f32) -> Self {
        Self {
            origin,
            dir,
            max_dist,
            layer: RayLayer::Any,
        }
    }

    pub const fn with_layer(mut self, layer: RayLayer) -> Self {
        self.layer = layer;
        self
    }

    /// The far end of the ray
    #[inline]
    pub fn end(&self) -> Vec3 {
        self.origin + self.dir * self.max_dist
    }

    #[inline]
    pub fn at(&self, dist: f32) -> Vec3 {
        self.origin + self.dir * dist
    }

    #[inline]
    pub fn origin_xz(&self) -> Vec2 {
        crate::xz(self.origin)
    }

    #[inline]
    pub fn dir_xz(&self) -> Vec2 {
        crate::xz(self.dir)
    }

    /// True if the ray cannot travel anywhere
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.max_dist.is_nan() || self.max_dist <= 0.0 || self.dir == Vec3::ZERO
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Quadrant {
    Left,
    Right,
    Middle,
}

/// Candidate plane slab test of a ray against an axis aligned box.
///
/// The ray is treated as infinite in the forward direction (`max_dist` is not
/// applied). Returns `true` if the origin is inside the box.
pub fn ray_hit_aabb(ray: &Ray, bounds: &Bounds3) -> bool {
    let origin = ray.origin.to_array();
    let dir = ray.dir.to_array();
    let min = bounds.min.to_array();
    let max = bounds.max.to_array();

    let mut quadrant = [Quadrant::Middle; 3];
    let mut candidate_plane = [0.0f32; 3];
    let mut inside = true;

    for i in 0..3 {
        if origin[i] < min[i] {
            quadrant[i] = Quadrant::Left;
            candidate_plane[i] = min[i];
            inside = false;
        } else if origin[i] > max[i] {
            quadrant[i] = Quadrant::Right;
            candidate_plane[i] = max[i];
            inside = false;
        }
    }
    if inside {
        return true;
    }

    let mut max_t = [-1.0f32; 3];
    for i in 0..3 {
        if quadrant[i] != Quadrant::Middle && dir[i] != 0.0 {
            max_t[i] = (candidate_plane[i] - origin[i]) / dir[i];
        }
    }

    // The largest distance picks the plane actually crossed
    let mut plane = 0;
    for i in 1..3 {
        if max_t[plane] < max_t[i] {
            plane = i;
        }
    }
    if max_t[plane] < 0.0 {
        return false;
    }

    for i in 0..3 {
        if i == plane {
            continue;
        }
        let coord = origin[i] + max_t[plane] * dir[i];
        if coord < min[i] || coord > max[i] {
            return false;
        }
    }
    true
}

use glam::{Vec2, Vec3};

/// An axis aligned rectangle in the XZ plane.
///
/// `Rect2::EMPTY` has inverted extents so that the first `add_point` sets both
/// corners, the same way the level extents are accumulated from vertexes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect2 {
    pub min: Vec2,
    pub max: Vec2,
}

impl Default for Rect2 {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Rect2 {
    pub const EMPTY: Self = Self {
        min: Vec2::splat(f32::MAX),
        max: Vec2::splat(-f32::MAX),
    };

    /// Smallest rectangle enclosing all `points`. Empty input gives `EMPTY`.
    pub fn from_points(points: &[Vec2]) -> Self {
        let mut rect = Self::EMPTY;
        for p in points {
            rect.add_point(*p);
        }
        rect
    }

    #[inline]
    pub fn add_point(&mut self, p: Vec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Inclusive containment test
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// An axis aligned box in level space (Y up)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds3 {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for Bounds3 {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Bounds3 {
    pub const EMPTY: Self = Self {
        min: Vec3::splat(f32::MAX),
        max: Vec3::splat(-f32::MAX),
    };

    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn add_point(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Grow to enclose `other`. Merging an empty box is a no-op.
    #[inline]
    pub fn merge(&mut self, other: &Bounds3) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }
}

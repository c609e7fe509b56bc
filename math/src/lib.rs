//! Geometry primitives shared by the level loader, the polygon engine and the
//! ray tracer.
//!
//! Level space is Y-up. The horizontal plane is XZ, and 2D values are carried
//! in a `Vec2` where `x` is level X and `y` is level Z.

mod bounds;
mod intercept;
mod ray;

pub use bounds::*;
pub use glam;
use glam::{Vec2, Vec3};
pub use intercept::*;
pub use ray::*;

/// Tolerance used when testing heights against a floor/ceiling band
pub const HEIGHT_EPSILON: f32 = f32::EPSILON;

/// Drop the Y component, giving the XZ position as a `Vec2`
#[inline]
pub const fn xz(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// 2D cross product (the Z of the 3D cross of two XY vectors)
#[inline]
pub fn cross_2d(lhs: Vec2, rhs: Vec2) -> f32 {
    lhs.x * rhs.y - lhs.y * rhs.x
}

/// The normal of the edge `v0 -> v1`: the delta rotated a quarter turn
/// counter-clockwise. For a sector whose walls run clockwise in the XZ plane
/// (X right, Z up) this faces out of the sector. Not normalised.
#[inline]
pub fn edge_normal(v0: Vec2, v1: Vec2) -> Vec2 {
    Vec2::new(-(v1.y - v0.y), v1.x - v0.x)
}

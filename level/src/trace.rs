//! Ray queries against the level geometry.
//!
//! Every sector on the ray's layer is tested on its own: its walls in 2D,
//! then its floor and ceiling planes. Portals are not followed, instead a
//! portal wall the ray passes cleanly through is simply not a hit and the
//! sector beyond is found by its own test.

use glam::Vec3;
use math::{
    Bounds3, HEIGHT_EPSILON, Ray, edge_normal, line_y_plane_intersect, ray_hit_aabb,
    segment_intersect,
};

use crate::flags::WallFlags;
use crate::level::Level;
use crate::map_defs::Sector;

/// The part of the level a ray stopped on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    /// Step up between the ray's sector floor and the neighbour's floor
    Bottom,
    /// Step down from the ray's sector ceiling to the neighbour's ceiling
    Top,
    /// A solid wall, or a portal with a drawn mid texture
    Mid,
    Floor,
    Ceiling,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHitInfo {
    /// Index of the hit sector in `Level::sectors`
    pub sector: Option<usize>,
    /// Wall index within the sector, `None` for floor and ceiling hits
    pub wall: Option<usize>,
    pub part: HitPart,
    pub pos: Vec3,
    /// Euclidean distance from the ray origin
    pub dist: f32,
}

impl RayHitInfo {
    pub const NO_HIT: Self = Self {
        sector: None,
        wall: None,
        part: HitPart::Mid,
        pos: Vec3::ZERO,
        dist: f32::INFINITY,
    };

    pub fn is_hit(&self) -> bool {
        self.sector.is_some()
    }

    /// Keep `other` only if it is strictly closer
    fn offer(&mut self, other: RayHitInfo) {
        if other.dist < self.dist {
            *self = other;
        }
    }
}

impl Default for RayHitInfo {
    fn default() -> Self {
        Self::NO_HIT
    }
}

impl Level {
    /// The closest surface along the ray, if any
    pub fn trace_ray(&self, ray: &Ray) -> Option<RayHitInfo> {
        let mut hit = RayHitInfo::NO_HIT;
        self.trace_ray_into(ray, &mut hit).then_some(hit)
    }

    /// Resets `hit` and fills it with the closest surface. Returns whether
    /// anything was hit.
    pub fn trace_ray_into(&self, ray: &Ray, hit: &mut RayHitInfo) -> bool {
        *hit = RayHitInfo::NO_HIT;
        if ray.is_degenerate() {
            return false;
        }
        for (index, sector) in self.sectors.iter().enumerate() {
            if ray.layer.matches(sector.layer) {
                self.trace_sector(ray, index, sector, hit);
            }
        }
        hit.is_hit()
    }

    /// Same result as `trace_ray`, but sectors whose bounds the ray misses
    /// are skipped before any wall is tested.
    pub fn trace_ray_culled(&self, ray: &Ray) -> Option<RayHitInfo> {
        let mut hit = RayHitInfo::NO_HIT;
        if ray.is_degenerate() {
            return None;
        }
        let pad = Vec3::new(0.0, HEIGHT_EPSILON, 0.0);
        for (index, sector) in self.sectors.iter().enumerate() {
            if !ray.layer.matches(sector.layer) {
                continue;
            }
            // Wall hits may sit just outside the height band
            let bounds = Bounds3::new(sector.bounds.min - pad, sector.bounds.max + pad);
            if ray_hit_aabb(ray, &bounds) {
                self.trace_sector(ray, index, sector, &mut hit);
            }
        }
        hit.is_hit().then_some(hit)
    }

    fn trace_sector(&self, ray: &Ray, index: usize, sector: &Sector, hit: &mut RayHitInfo) {
        if let Some(wall_hit) = self.trace_walls(ray, index, sector) {
            hit.offer(wall_hit);
        }

        let plane = if ray.origin.y > sector.floor_height && ray.dir.y < 0.0 {
            Some((sector.floor_height, HitPart::Floor))
        } else if ray.origin.y < sector.ceil_height && ray.dir.y > 0.0 {
            Some((sector.ceil_height, HitPart::Ceiling))
        } else {
            None
        };
        if let Some((height, part)) = plane {
            if let Some(plane_hit) = trace_plane(ray, index, sector, height, part) {
                hit.offer(plane_hit);
            }
        }
    }

    /// The nearest wall of `sector` that stops the ray
    fn trace_walls(&self, ray: &Ray, index: usize, sector: &Sector) -> Option<RayHitInfo> {
        let p0 = ray.origin_xz();
        let p1 = math::xz(ray.end());
        let dir = ray.dir_xz();

        let mut closest: Option<(f32, usize)> = None;
        for (w, wall) in sector.walls.iter().enumerate() {
            let Some((v0, v1)) = sector.wall_vertices(wall) else {
                continue;
            };
            // Only walls facing away from the ray's direction of travel, i.e.
            // seen from inside the sector
            if dir.dot(edge_normal(v0, v1)) < 0.0 {
                continue;
            }
            let Some((s, _)) = segment_intersect(p0, p1, v0, v1) else {
                continue;
            };
            if closest.is_some_and(|(best, _)| s >= best) {
                continue;
            }

            let y = ray.at(s * ray.max_dist).y;
            if y <= sector.floor_height - HEIGHT_EPSILON
                || y >= sector.ceil_height + HEIGHT_EPSILON
            {
                continue;
            }
            if let Some(next) = wall.adjoin.and_then(|a| self.sectors.get(a)) {
                let blocked = y <= next.floor_height
                    || y >= next.ceil_height
                    || wall.has_flag(WallFlags::AdjoinMidTexture);
                if !blocked {
                    continue;
                }
            }
            closest = Some((s, w));
        }

        let (s, w) = closest?;
        let pos = ray.at(s * ray.max_dist);
        let part = match sector.walls[w].adjoin.and_then(|a| self.sectors.get(a)) {
            Some(next) if pos.y <= next.floor_height => HitPart::Bottom,
            Some(next) if pos.y >= next.ceil_height => HitPart::Top,
            _ => HitPart::Mid,
        };
        Some(RayHitInfo {
            sector: Some(index),
            wall: Some(w),
            part,
            pos,
            dist: pos.distance(ray.origin),
        })
    }
}

fn trace_plane(
    ray: &Ray,
    index: usize,
    sector: &Sector,
    height: f32,
    part: HitPart,
) -> Option<RayHitInfo> {
    let pos = line_y_plane_intersect(ray.origin, ray.end(), height)?;
    if !sector.polygon.point_inside(math::xz(pos)) {
        return None;
    }
    Some(RayHitInfo {
        sector: Some(index),
        wall: None,
        part,
        pos,
        dist: pos.distance(ray.origin),
    })
}

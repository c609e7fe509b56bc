use glam::{Vec2, Vec3};

use super::{PILLAR_ROOM, one_room, two_rooms, two_rooms_data};
use crate::flags::WallFlags;
use crate::{HitPart, Level, NullResolver, Ray, RayHitInfo, RayLayer, load_level};

const EPS: f32 = 1e-4;

fn assert_near(a: Vec3, b: Vec3) {
    assert!(a.abs_diff_eq(b, EPS), "{} != {}", a, b);
}

fn trace(level: &Level, origin: Vec3, dir: Vec3, max_dist: f32) -> Option<RayHitInfo> {
    let ray = Ray::new(origin, dir, max_dist);
    let hit = level.trace_ray(&ray);
    assert_eq!(hit, level.trace_ray_culled(&ray), "culled trace differs");
    hit
}

#[test]
fn solid_walls() {
    let level = one_room();
    let origin = Vec3::new(5.0, 8.0, 5.0);
    for (dir, wall, pos) in [
        (Vec3::NEG_X, 0, Vec3::new(0.0, 8.0, 5.0)),
        (Vec3::Z, 1, Vec3::new(5.0, 8.0, 10.0)),
        (Vec3::X, 2, Vec3::new(10.0, 8.0, 5.0)),
        (Vec3::NEG_Z, 3, Vec3::new(5.0, 8.0, 0.0)),
    ] {
        let hit = trace(&level, origin, dir, 100.0).unwrap();
        assert_eq!(hit.sector, Some(0));
        assert_eq!(hit.wall, Some(wall));
        assert_eq!(hit.part, HitPart::Mid);
        assert_near(hit.pos, pos);
        assert!((hit.dist - 5.0).abs() < EPS);
    }
}

#[test]
fn too_short_to_reach() {
    let level = one_room();
    assert!(trace(&level, Vec3::new(5.0, 8.0, 5.0), Vec3::X, 4.0).is_none());
}

#[test]
fn degenerate_rays() {
    let level = one_room();
    let origin = Vec3::new(5.0, 8.0, 5.0);
    assert!(trace(&level, origin, Vec3::X, 0.0).is_none());
    assert!(trace(&level, origin, Vec3::X, -10.0).is_none());
    assert!(trace(&level, origin, Vec3::ZERO, 100.0).is_none());
}

#[test]
fn back_faces_are_ignored() {
    let level = one_room();
    // From outside, the near wall faces the ray and is skipped
    let hit = trace(&level, Vec3::new(-5.0, 8.0, 5.0), Vec3::X, 100.0).unwrap();
    assert_eq!(hit.wall, Some(2));
    assert!((hit.dist - 15.0).abs() < EPS);

    assert!(trace(&level, Vec3::new(-5.0, 8.0, 5.0), Vec3::NEG_X, 100.0).is_none());
}

#[test]
fn open_portal_passes_through() {
    let level = two_rooms();
    let hit = trace(&level, Vec3::new(5.0, 8.0, 5.0), Vec3::X, 100.0).unwrap();
    assert_eq!(hit.sector, Some(1));
    assert_eq!(hit.wall, Some(2));
    assert_eq!(hit.part, HitPart::Mid);
    assert_near(hit.pos, Vec3::new(20.0, 8.0, 5.0));
    assert!((hit.dist - 15.0).abs() < EPS);

    // And back the other way
    let hit = trace(&level, Vec3::new(15.0, 8.0, 5.0), Vec3::NEG_X, 100.0).unwrap();
    assert_eq!(hit.sector, Some(0));
    assert_eq!(hit.wall, Some(0));
}

#[test]
fn steps_are_hit() {
    let level = two_rooms();
    let hit = trace(&level, Vec3::new(5.0, 1.0, 5.0), Vec3::X, 100.0).unwrap();
    assert_eq!(hit.sector, Some(0));
    assert_eq!(hit.wall, Some(2));
    assert_eq!(hit.part, HitPart::Bottom);

    let hit = trace(&level, Vec3::new(5.0, 14.0, 5.0), Vec3::X, 100.0).unwrap();
    assert_eq!(hit.sector, Some(0));
    assert_eq!(hit.wall, Some(2));
    assert_eq!(hit.part, HitPart::Top);
}

#[test]
fn opaque_mid_blocks() {
    let mut data = two_rooms_data();
    data.sectors[0].walls[2].flags[0] = WallFlags::AdjoinMidTexture as i32;
    let level = Level::from_lev(&data, &mut NullResolver).unwrap();

    let hit = trace(&level, Vec3::new(5.0, 8.0, 5.0), Vec3::X, 100.0).unwrap();
    assert_eq!(hit.sector, Some(0));
    assert_eq!(hit.wall, Some(2));
    assert_eq!(hit.part, HitPart::Mid);
    assert!((hit.dist - 5.0).abs() < EPS);

    // A step below the drawn mid is still a step
    let hit = trace(&level, Vec3::new(5.0, 1.0, 5.0), Vec3::X, 100.0).unwrap();
    assert_eq!(hit.part, HitPart::Bottom);
}

#[test]
fn floor_and_ceiling() {
    let level = one_room();
    let origin = Vec3::new(5.0, 8.0, 5.0);

    let hit = trace(&level, origin, Vec3::NEG_Y, 100.0).unwrap();
    assert_eq!(hit.sector, Some(0));
    assert_eq!(hit.wall, None);
    assert_eq!(hit.part, HitPart::Floor);
    assert_near(hit.pos, Vec3::new(5.0, 0.0, 5.0));
    assert!((hit.dist - 8.0).abs() < EPS);

    let hit = trace(&level, origin, Vec3::Y, 100.0).unwrap();
    assert_eq!(hit.part, HitPart::Ceiling);
    assert_near(hit.pos, Vec3::new(5.0, 16.0, 5.0));

    // Below the floor looking down sees nothing
    assert!(trace(&level, Vec3::new(5.0, -1.0, 5.0), Vec3::NEG_Y, 100.0).is_none());
}

#[test]
fn floor_of_the_next_sector() {
    let level = two_rooms();
    let hit = trace(&level, Vec3::new(5.0, 8.0, 5.0), Vec3::new(1.0, -1.0, 0.0), 20.0).unwrap();
    assert_eq!(hit.sector, Some(1));
    assert_eq!(hit.wall, None);
    assert_eq!(hit.part, HitPart::Floor);
    assert_near(hit.pos, Vec3::new(11.0, 2.0, 5.0));
    assert!((hit.dist - 72.0f32.sqrt()).abs() < EPS);
}

#[test]
fn closest_hit_wins() {
    let level = one_room();
    // Reaches the floor at x = 9, before the east wall
    let hit = trace(&level, Vec3::new(5.0, 4.0, 5.0), Vec3::new(1.0, -1.0, 0.0), 20.0).unwrap();
    assert_eq!(hit.part, HitPart::Floor);
    // Reaches the east wall at y = 3, before the floor
    let hit = trace(&level, Vec3::new(5.0, 8.0, 5.0), Vec3::new(1.0, -1.0, 0.0), 20.0).unwrap();
    assert_eq!(hit.part, HitPart::Mid);
    assert_eq!(hit.wall, Some(2));
    assert_near(hit.pos, Vec3::new(10.0, 3.0, 5.0));
}

#[test]
fn layer_filter() {
    let level = two_rooms();
    let origin = Vec3::new(5.0, 8.0, 5.0);
    let ray = Ray::new(origin, Vec3::X, 100.0).with_layer(RayLayer::Exact(3));
    assert!(level.trace_ray(&ray).is_none());
    assert!(level.trace_ray_culled(&ray).is_none());

    let ray = ray.with_layer(RayLayer::Exact(0));
    assert_eq!(level.trace_ray(&ray).and_then(|h| h.sector), Some(1));
}

#[test]
fn into_resets_previous_hit() {
    let level = one_room();
    let mut hit = RayHitInfo::default();
    assert!(level.trace_ray_into(&Ray::new(Vec3::new(5.0, 8.0, 5.0), Vec3::X, 100.0), &mut hit));
    assert!(hit.is_hit());

    let missed = Ray::new(Vec3::new(50.0, 8.0, 50.0), Vec3::X, 100.0);
    assert!(!level.trace_ray_into(&missed, &mut hit));
    assert_eq!(hit, RayHitInfo::NO_HIT);
    assert_eq!(hit.dist, f32::INFINITY);
}

#[test]
fn pillar_blocks_and_has_no_floor() {
    let level = load_level(PILLAR_ROOM.as_bytes(), &mut NullResolver).unwrap();

    let hit = trace(&level, Vec3::new(5.0, 8.0, 1.0), Vec3::Z, 100.0).unwrap();
    assert_eq!(hit.wall, Some(4));
    assert_near(hit.pos, Vec3::new(5.0, 8.0, 4.0));

    // Straight down inside the pillar footprint there is no floor
    assert!(trace(&level, Vec3::new(5.0, 8.0, 5.0), Vec3::NEG_Y, 100.0).is_none());
    let hit = trace(&level, Vec3::new(2.0, 8.0, 2.0), Vec3::NEG_Y, 100.0).unwrap();
    assert_eq!(hit.part, HitPart::Floor);
}

#[test]
fn sector_lookup() {
    let level = two_rooms();
    assert_eq!(level.find_sector_2d(0, Vec2::new(5.0, 5.0)), Some(0));
    assert_eq!(level.find_sector_2d(0, Vec2::new(15.0, 5.0)), Some(1));
    assert_eq!(level.find_sector_2d(0, Vec2::new(25.0, 5.0)), None);
    assert_eq!(level.find_sector_2d(1, Vec2::new(5.0, 5.0)), None);

    assert_eq!(level.find_sector_3d(0, Vec3::new(15.0, 5.0, 5.0)), Some(1));
    assert_eq!(level.find_sector_3d(0, Vec3::new(15.0, 13.0, 5.0)), None);
}

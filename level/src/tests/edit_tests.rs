use glam::{Vec2, Vec3};

use super::{one_room, two_rooms};
use crate::{HitPart, LevelError, Ray};

#[test]
fn moving_a_vertex_updates_the_polygon() {
    let mut level = one_room();
    let sector = level.sector_mut(0).unwrap();
    // Pull the north east corner out to (20, 20)
    sector.set_vertex(2, Vec2::new(20.0, 20.0)).unwrap();

    assert_eq!(sector.polygon.vtx[2], Vec2::new(20.0, 20.0));
    assert_eq!(sector.bounds().max, Vec3::new(20.0, 16.0, 20.0));
    assert!(sector.polygon.point_inside(Vec2::new(12.0, 12.0)));
    assert!(!sector.polygon.point_inside(Vec2::new(12.0, 2.0)));

    level.recompute_bounds();
    assert_eq!(level.bounds.max, Vec3::new(20.0, 16.0, 20.0));
    assert_eq!(level.find_sector_2d(0, Vec2::new(12.0, 12.0)), Some(0));
}

#[test]
fn bad_vertex_index() {
    let mut level = one_room();
    let sector = level.sector_mut(0).unwrap();
    let before = sector.clone();
    assert_eq!(
        sector.set_vertex(4, Vec2::ZERO),
        Err(LevelError::InvalidReference {
            sector: 0,
            wall: None,
            what: "vertex"
        })
    );
    assert_eq!(*sector, before);
}

#[test]
fn raising_a_floor_makes_a_step() {
    let mut level = two_rooms();
    let ray = Ray::new(Vec3::new(5.0, 8.0, 5.0), Vec3::X, 100.0);
    assert_eq!(level.trace_ray(&ray).and_then(|h| h.sector), Some(1));

    level.sector_mut(1).unwrap().set_heights(9.0, 12.0);
    assert_eq!(level.sectors[1].bounds().min.y, 9.0);

    let hit = level.trace_ray(&ray).unwrap();
    assert_eq!(hit.sector, Some(0));
    assert_eq!(hit.wall, Some(2));
    assert_eq!(hit.part, HitPart::Bottom);
}

#[test]
fn lookups_by_index() {
    let level = two_rooms();
    assert_eq!(level.sectors().len(), 2);
    assert_eq!(level.sector(1).and_then(|s| s.name.as_deref()), Some("ROOM1"));
    assert!(level.sector(2).is_none());
    assert_eq!(level.wall_count(), 8);
}

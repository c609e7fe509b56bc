use glam::Vec2;
use lev::{LevData, LevSector, LevSurface, LevWall};

use crate::{Level, NullResolver};

mod edit_tests;
mod trace_tests;

/// Opposite of the loader's height flip, for building file records
fn file_height(height: f32) -> f32 {
    if height != 0.0 { -height } else { height }
}

/// A rectangular sector with walls running clockwise (Z up), starting with
/// the west wall: 0 west, 1 north, 2 east, 3 south.
pub(super) fn room(id: i32, min: Vec2, max: Vec2, floor: f32, ceil: f32) -> LevSector {
    let vertices = vec![
        Vec2::new(min.x, min.y),
        Vec2::new(min.x, max.y),
        Vec2::new(max.x, max.y),
        Vec2::new(max.x, min.y),
    ];
    let walls = (0..4)
        .map(|i| LevWall {
            left: i,
            right: (i + 1) % 4,
            mid: LevSurface::new(0, Vec2::ZERO),
            ..LevWall::default()
        })
        .collect();
    LevSector {
        id,
        name: Some(format!("ROOM{}", id)),
        ambient: 20,
        floor: LevSurface::new(0, Vec2::ZERO),
        floor_altitude: file_height(floor),
        ceiling: LevSurface::new(0, Vec2::ZERO),
        ceiling_altitude: file_height(ceil),
        second_altitude: Some(0.0),
        flags: [0; 3],
        layer: Some(0),
        vertices,
        walls,
    }
}

/// Link `a`'s wall `wa` and `b`'s wall `wb` as a portal
pub(super) fn adjoin(data: &mut LevData, a: usize, wa: usize, b: usize, wb: usize) {
    let wall = &mut data.sectors[a].walls[wa];
    wall.adjoin = b as i32;
    wall.mirror = wb as i32;
    wall.walk = b as i32;
    let wall = &mut data.sectors[b].walls[wb];
    wall.adjoin = a as i32;
    wall.mirror = wa as i32;
    wall.walk = a as i32;
}

pub(super) fn level_data(sectors: Vec<LevSector>) -> LevData {
    LevData {
        name: "TEST".to_owned(),
        palette: "TEST.PAL".to_owned(),
        textures: vec!["WALL.BM".to_owned()],
        sectors,
        ..LevData::default()
    }
}

/// One 10x10 room, floor 0, ceiling 16
pub(super) fn one_room() -> Level {
    let data = level_data(vec![room(0, Vec2::ZERO, Vec2::splat(10.0), 0.0, 16.0)]);
    Level::from_lev(&data, &mut NullResolver).unwrap()
}

/// Room 0 as `one_room`, room 1 east of it with floor 2 and ceiling 12,
/// joined through room 0's east wall and room 1's west wall.
pub(super) fn two_rooms_data() -> LevData {
    let mut data = level_data(vec![
        room(0, Vec2::ZERO, Vec2::splat(10.0), 0.0, 16.0),
        room(1, Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0), 2.0, 12.0),
    ]);
    adjoin(&mut data, 0, 2, 1, 0);
    data
}

pub(super) fn two_rooms() -> Level {
    Level::from_lev(&two_rooms_data(), &mut NullResolver).unwrap()
}

/// A room with a pillar in the middle, written out the way an editor saves it
pub(super) const PILLAR_ROOM: &str = "\
LEV 2.1
LEVELNAME PILLAR
PALETTE SECBASE.PAL
PARALLAX 1024.0 1024.0
TEXTURES 3
  TEXTURE: WALL.BM
  TEXTURE: FLOOR.PCX
  TEXTURE: SIGN.BM
NUMSECTORS 1
SECTOR 0
  NAME hall
  AMBIENT 28
  FLOOR TEXTURE 1 0.00 0.00 0
  FLOOR ALTITUDE 0.00
  CEILING TEXTURE 0 0.00 0.00 0
  CEILING ALTITUDE -32.00
  SECOND ALTITUDE 0.00
  FLAGS 0 0 0
  LAYER 0
  VERTICES 8
    X: 0.00 Z: 0.00
    X: 0.00 Z: 10.00
    X: 10.00 Z: 10.00
    X: 10.00 Z: 0.00
    X: 4.00 Z: 4.00
    X: 6.00 Z: 4.00
    X: 6.00 Z: 6.00
    X: 4.00 Z: 6.00
  WALLS 8
    WALL LEFT: 0 RIGHT: 1 MID: 0 0.00 0.00 0 TOP: -1 0.00 0.00 0 BOT: -1 0.00 0.00 0 SIGN: 2 3.00 4.00 ADJOIN: -1 MIRROR: -1 WALK: -1 FLAGS: 0 0 0 LIGHT: 0
    WALL LEFT: 1 RIGHT: 2 MID: 0 0.00 0.00 0 TOP: -1 0.00 0.00 0 BOT: -1 0.00 0.00 0 SIGN: -1 3.00 4.00 ADJOIN: -1 MIRROR: -1 WALK: -1 FLAGS: 0 0 0 LIGHT: 0
    WALL LEFT: 2 RIGHT: 3 MID: 0 0.00 0.00 0 TOP: -1 0.00 0.00 0 BOT: -1 0.00 0.00 0 SIGN: -1 0.00 0.00 ADJOIN: -1 MIRROR: -1 WALK: -1 FLAGS: 0 0 0 LIGHT: 0
    WALL LEFT: 3 RIGHT: 0 MID: 0 0.00 0.00 0 TOP: -1 0.00 0.00 0 BOT: -1 0.00 0.00 0 SIGN: -1 0.00 0.00 ADJOIN: -1 MIRROR: -1 WALK: -1 FLAGS: 0 0 0 LIGHT: 0
    WALL LEFT: 4 RIGHT: 5 MID: 0 0.00 0.00 0 TOP: -1 0.00 0.00 0 BOT: -1 0.00 0.00 0 SIGN: -1 0.00 0.00 ADJOIN: -1 MIRROR: -1 WALK: -1 FLAGS: 0 0 0 LIGHT: 0
    WALL LEFT: 5 RIGHT: 6 MID: 0 0.00 0.00 0 TOP: -1 0.00 0.00 0 BOT: -1 0.00 0.00 0 SIGN: -1 0.00 0.00 ADJOIN: -1 MIRROR: -1 WALK: -1 FLAGS: 0 0 0 LIGHT: 0
    WALL LEFT: 6 RIGHT: 7 MID: 0 0.00 0.00 0 TOP: -1 0.00 0.00 0 BOT: -1 0.00 0.00 0 SIGN: -1 0.00 0.00 ADJOIN: -1 MIRROR: -1 WALK: -1 FLAGS: 0 0 0 LIGHT: 0
    WALL LEFT: 7 RIGHT: 4 MID: 0 0.00 0.00 0 TOP: -1 0.00 0.00 0 BOT: -1 0.00 0.00 0 SIGN: -1 0.00 0.00 ADJOIN: -1 MIRROR: -1 WALK: -1 FLAGS: 0 0 0 LIGHT: 0
";

use glam::Vec2;

use crate::{DEFAULT_PARALLAX, LEV_VERSION_MAX};

/// `LEV <major>.<minor>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LevVersion {
    pub major: i32,
    pub minor: i32,
}

impl LevVersion {
    pub const fn new(major: i32, minor: i32) -> Self {
        Self { major, minor }
    }

    /// `major * 10 + minor`, e.g `21` for `LEV 2.1`. `None` if that does not
    /// fit an `i32`.
    pub fn number(&self) -> Option<i32> {
        self.major.checked_mul(10)?.checked_add(self.minor)
    }
}

impl Default for LevVersion {
    fn default() -> Self {
        Self::new(LEV_VERSION_MAX / 10, LEV_VERSION_MAX % 10)
    }
}

/// A texture reference with offset, as stored for floors, ceilings and each
/// of the wall parts.
///
/// `texture` indexes `LevData::textures`. Negative values mean no texture.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LevSurface {
    pub texture: i32,
    pub offset: Vec2,
}

impl LevSurface {
    pub const fn new(texture: i32, offset: Vec2) -> Self {
        Self { texture, offset }
    }

    pub const fn none() -> Self {
        Self {
            texture: -1,
            offset: Vec2::ZERO,
        }
    }
}

/// A WALL record.
///
/// | Field  | Content                                                    |
/// |--------|------------------------------------------------------------|
/// | LEFT   | Start vertex index into the owning sector                  |
/// | RIGHT  | End vertex index into the owning sector                    |
/// | MID    | Mid texture, offset, unused                                |
/// | TOP    | Top texture, offset, unused                                |
/// | BOT    | Bottom texture, offset, unused                             |
/// | SIGN   | Sign texture, offset                                       |
/// | ADJOIN | Sector on the other side, `-1` if none                     |
/// | MIRROR | Matching wall in the adjoined sector, `-1` if none         |
/// | WALK   | Sector entered when walking through, `-1` if none          |
/// | FLAGS  | Three flag words                                           |
/// | LIGHT  | Light bias, a signed 16 bit value written unsigned (opt)   |
#[derive(Debug, Clone, PartialEq)]
pub struct LevWall {
    pub left: i32,
    pub right: i32,
    pub mid: LevSurface,
    pub top: LevSurface,
    pub bottom: LevSurface,
    pub sign: LevSurface,
    pub adjoin: i32,
    pub mirror: i32,
    pub walk: i32,
    pub flags: [i32; 3],
    /// Already re-biased to a signed value
    pub light: i32,
}

impl Default for LevWall {
    fn default() -> Self {
        Self {
            left: 0,
            right: 0,
            mid: LevSurface::none(),
            top: LevSurface::none(),
            bottom: LevSurface::none(),
            sign: LevSurface::none(),
            adjoin: -1,
            mirror: -1,
            walk: -1,
            flags: [0; 3],
            light: 0,
        }
    }
}

/// A SECTOR record. Heights are as stored in the file: down is positive.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LevSector {
    pub id: i32,
    pub name: Option<String>,
    pub ambient: i32,
    pub floor: LevSurface,
    pub floor_altitude: f32,
    pub ceiling: LevSurface,
    pub ceiling_altitude: f32,
    /// Added in 1.7
    pub second_altitude: Option<f32>,
    pub flags: [i32; 3],
    pub layer: Option<i32>,
    /// `x` is level X, `y` is level Z
    pub vertices: Vec<Vec2>,
    pub walls: Vec<LevWall>,
}

/// Everything read from a LEV buffer, without any interpretation beyond the
/// grammar itself
#[derive(Debug, Clone, PartialEq)]
pub struct LevData {
    pub version: LevVersion,
    pub name: String,
    /// File name only, any path is stripped on read
    pub palette: String,
    /// Read but unused by the engine
    pub music: Option<String>,
    pub parallax: Vec2,
    pub textures: Vec<String>,
    pub sectors: Vec<LevSector>,
}

impl Default for LevData {
    fn default() -> Self {
        Self {
            version: LevVersion::default(),
            name: String::new(),
            palette: String::new(),
            music: None,
            parallax: Vec2::splat(DEFAULT_PARALLAX),
            textures: Vec::new(),
            sectors: Vec::new(),
        }
    }
}

impl LevData {
    pub fn wall_count(&self) -> usize {
        self.sectors.iter().map(|s| s.walls.len()).sum()
    }

    pub fn vertex_count(&self) -> usize {
        self.sectors.iter().map(|s| s.vertices.len()).sum()
    }
}

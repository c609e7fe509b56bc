use glam::{Vec2, Vec3};
use math::Bounds3;

use crate::flags::{SectorFlags, WallFlags};
use crate::polygon::Polygon;
use crate::textures::AssetHandle;
use crate::LevelError;

/// A texture bound to a wall part, floor or ceiling
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Surface {
    /// Index into `Level::textures`, kept so the level can be written back out
    pub texture: Option<usize>,
    pub handle: AssetHandle,
    pub offset: Vec2,
}

impl Surface {
    pub const fn none() -> Self {
        Self {
            texture: None,
            handle: AssetHandle::NONE,
            offset: Vec2::ZERO,
        }
    }
}

/// The four textured parts of a wall, used to index `Wall::tex`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallPart {
    Mid,
    Top,
    Bottom,
    Sign,
}

impl WallPart {
    pub const COUNT: usize = 4;
}

/// A wall runs from `idx[0]` to `idx[1]` in the owning sector's vertex list.
/// The sector is on the right when walking the wall with Z up.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    pub idx: [usize; 2],
    pub tex: [Surface; WallPart::COUNT],
    /// The sector on the other side, if this wall is a portal
    pub adjoin: Option<usize>,
    /// The matching wall in the adjoined sector
    pub mirror: Option<usize>,
    /// The sector entered when walking through. Usually the adjoin.
    pub walk: Option<usize>,
    /// Added to the sector's ambient light
    pub light: i32,
    pub flags: [u32; 3],
}

impl Wall {
    pub fn texture(&self, part: WallPart) -> &Surface {
        &self.tex[part as usize]
    }

    pub fn texture_mut(&mut self, part: WallPart) -> &mut Surface {
        &mut self.tex[part as usize]
    }

    pub fn has_flag(&self, flag: WallFlags) -> bool {
        self.flags[0] & flag as u32 != 0
    }

    pub fn is_portal(&self) -> bool {
        self.adjoin.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sector {
    pub id: i32,
    /// Unnamed sectors cannot be addressed by scripts
    pub name: Option<String>,
    pub ambient: i32,
    pub floor_tex: Surface,
    pub ceil_tex: Surface,
    /// Up is positive
    pub floor_height: f32,
    pub ceil_height: f32,
    pub second_height: Option<f32>,
    pub flags: [u32; 3],
    pub layer: i32,
    pub vtx: Vec<Vec2>,
    pub walls: Vec<Wall>,
    pub bounds: Bounds3,
    /// Derived from `vtx` and `walls`, see `derive_polygon`
    pub polygon: Polygon,
}

impl Default for Sector {
    fn default() -> Self {
        Self {
            id: 0,
            name: None,
            ambient: 0,
            floor_tex: Surface::none(),
            ceil_tex: Surface::none(),
            floor_height: 0.0,
            ceil_height: 0.0,
            second_height: None,
            flags: [0; 3],
            layer: 0,
            vtx: Vec::new(),
            walls: Vec::new(),
            bounds: Bounds3::EMPTY,
            polygon: Polygon::default(),
        }
    }
}

impl Sector {
    pub fn bounds(&self) -> &Bounds3 {
        &self.bounds
    }

    pub fn has_flag(&self, flag: SectorFlags) -> bool {
        self.flags[0] & flag as u32 != 0
    }

    /// Rebuild the cached polygon. Must follow any change to `vtx` or
    /// `walls` before the sector is queried again.
    pub fn derive_polygon(&mut self) {
        self.polygon.rebuild(&self.vtx, &self.walls);
    }

    /// Bounds over every vertex and both heights
    pub fn recompute_bounds(&mut self) {
        let mut bounds = Bounds3::EMPTY;
        let (low, high) = if self.floor_height <= self.ceil_height {
            (self.floor_height, self.ceil_height)
        } else {
            (self.ceil_height, self.floor_height)
        };
        for v in &self.vtx {
            bounds.add_point(Vec3::new(v.x, low, v.y));
            bounds.add_point(Vec3::new(v.x, high, v.y));
        }
        if self.vtx.is_empty() {
            bounds.min.y = low;
            bounds.max.y = high;
        }
        self.bounds = bounds;
    }

    /// Move a vertex, then refresh the bounds and polygon
    pub fn set_vertex(&mut self, index: usize, pos: Vec2) -> Result<(), LevelError> {
        let sector = usize::try_from(self.id).unwrap_or(usize::MAX);
        let vtx = self
            .vtx
            .get_mut(index)
            .ok_or(LevelError::InvalidReference {
                sector,
                wall: None,
                what: "vertex",
            })?;
        *vtx = pos;
        self.recompute_bounds();
        self.derive_polygon();
        Ok(())
    }

    /// Change the floor and ceiling heights. The polygon is unaffected.
    pub fn set_heights(&mut self, floor: f32, ceil: f32) {
        self.floor_height = floor;
        self.ceil_height = ceil;
        self.recompute_bounds();
    }

    /// The wall's end points, or `None` if it references a missing vertex
    pub fn wall_vertices(&self, wall: &Wall) -> Option<(Vec2, Vec2)> {
        Some((*self.vtx.get(wall.idx[0])?, *self.vtx.get(wall.idx[1])?))
    }
}

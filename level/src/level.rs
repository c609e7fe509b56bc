use glam::{Vec2, Vec3};
use lev::{LevData, LevSector, LevSurface, LevVersion, LevWall};
use log::{info, warn};
use math::Bounds3;

use crate::map_defs::{Sector, Surface, Wall, WallPart};
use crate::textures::{AssetHandle, LevelTexture, TextureResolver, resolve_all};
use crate::LevelError;

/// Which engine features a level may rely on
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FeatureSet {
    /// Everything loaded from a `.LEV` file
    #[default]
    Vanilla,
}

/// A complete level. Sectors are addressed by their position in `sectors`,
/// which is also how walls refer to them.
#[derive(Debug, Default, Clone)]
pub struct Level {
    pub name: String,
    pub palette: String,
    pub music: Option<String>,
    pub parallax: Vec2,
    pub feature_set: FeatureSet,
    pub bounds: Bounds3,
    /// Lowest and highest sector layer, inclusive
    pub layer_range: [i32; 2],
    pub textures: Vec<LevelTexture>,
    pub sectors: Vec<Sector>,
}

/// Parse a `.LEV` buffer and build the level from it
pub fn load_level(
    buffer: &[u8],
    resolver: &mut impl TextureResolver,
) -> Result<Level, LevelError> {
    let data = LevData::parse(buffer)?;
    Level::from_lev(&data, resolver)
}

/// The file stores heights with down positive. Zero is left as is so it
/// never becomes `-0.0`.
fn flip_height(height: f32) -> f32 {
    if height != 0.0 { -height } else { height }
}

impl Level {
    pub fn from_lev(
        data: &LevData,
        resolver: &mut impl TextureResolver,
    ) -> Result<Self, LevelError> {
        let textures = resolve_all(&data.textures, resolver);

        let mut sectors = Vec::with_capacity(data.sectors.len());
        for (index, sector) in data.sectors.iter().enumerate() {
            sectors.push(build_sector(index, sector, &textures, data.sectors.len())?);
        }
        check_mirrors(&mut sectors);

        let mut level = Level {
            name: data.name.clone(),
            palette: data.palette.clone(),
            music: data.music.clone(),
            parallax: data.parallax,
            feature_set: FeatureSet::Vanilla,
            bounds: Bounds3::EMPTY,
            layer_range: [0, 0],
            textures,
            sectors,
        };
        for sector in &mut level.sectors {
            sector.derive_polygon();
        }
        level.recompute_bounds();

        info!(
            "Built level {}: {} sectors, layers {}..={}",
            level.name,
            level.sectors.len(),
            level.layer_range[0],
            level.layer_range[1]
        );
        Ok(level)
    }

    /// Rebuild the level bounds and layer range from the sectors
    pub fn recompute_bounds(&mut self) {
        self.bounds = Bounds3::EMPTY;
        let mut layers: Option<[i32; 2]> = None;
        for sector in &self.sectors {
            self.bounds.merge(&sector.bounds);
            layers = Some(match layers {
                Some([lo, hi]) => [lo.min(sector.layer), hi.max(sector.layer)],
                None => [sector.layer, sector.layer],
            });
        }
        self.layer_range = layers.unwrap_or([0, 0]);
    }

    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    pub fn sector(&self, id: usize) -> Option<&Sector> {
        self.sectors.get(id)
    }

    /// Callers that change geometry through this must re-derive the polygon,
    /// or use the `Sector` editing methods which do it for them.
    pub fn sector_mut(&mut self, id: usize) -> Option<&mut Sector> {
        self.sectors.get_mut(id)
    }

    /// The first sector on `layer` containing `pos`
    pub fn find_sector_2d(&self, layer: i32, pos: Vec2) -> Option<usize> {
        self.sectors
            .iter()
            .position(|s| s.layer == layer && s.polygon.point_inside(pos))
    }

    /// Like `find_sector_2d`, but also requires the height to be within the
    /// floor and ceiling.
    pub fn find_sector_3d(&self, layer: i32, pos: Vec3) -> Option<usize> {
        self.sectors.iter().position(|s| {
            s.layer == layer
                && pos.y >= s.floor_height
                && pos.y <= s.ceil_height
                && s.polygon.point_inside(math::xz(pos))
        })
    }

    pub fn wall_count(&self) -> usize {
        self.sectors.iter().map(|s| s.walls.len()).sum()
    }

    /// Convert back to the file form, as `LEV 2.1` with every optional
    /// record present.
    pub fn to_lev(&self) -> LevData {
        LevData {
            version: LevVersion::default(),
            name: self.name.clone(),
            palette: self.palette.clone(),
            music: self.music.clone(),
            parallax: self.parallax,
            textures: self.textures.iter().map(|t| t.name.clone()).collect(),
            sectors: self.sectors.iter().map(lev_sector).collect(),
        }
    }
}

fn surface(raw: &LevSurface, textures: &[LevelTexture]) -> Surface {
    match usize::try_from(raw.texture)
        .ok()
        .and_then(|i| Some((i, textures.get(i)?)))
    {
        Some((i, texture)) => Surface {
            texture: Some(i),
            handle: texture.handle,
            offset: raw.offset,
        },
        None => Surface {
            offset: raw.offset,
            ..Surface::none()
        },
    }
}

/// Negative values in the file mean "none"
fn optional_index(value: i32) -> Option<usize> {
    usize::try_from(value).ok()
}

fn build_sector(
    index: usize,
    raw: &LevSector,
    textures: &[LevelTexture],
    sector_count: usize,
) -> Result<Sector, LevelError> {
    let mut walls = Vec::with_capacity(raw.walls.len());
    for (w, wall) in raw.walls.iter().enumerate() {
        walls.push(build_wall(index, w, wall, raw.vertices.len(), textures, sector_count)?);
    }

    let mut sector = Sector {
        id: raw.id,
        name: raw.name.clone(),
        ambient: raw.ambient,
        floor_tex: surface(&raw.floor, textures),
        ceil_tex: surface(&raw.ceiling, textures),
        floor_height: flip_height(raw.floor_altitude),
        ceil_height: flip_height(raw.ceiling_altitude),
        second_height: raw.second_altitude.map(flip_height),
        flags: raw.flags.map(|f| f as u32),
        layer: raw.layer.unwrap_or(0),
        vtx: raw.vertices.clone(),
        walls,
        ..Sector::default()
    };
    sector.recompute_bounds();
    Ok(sector)
}

fn build_wall(
    sector: usize,
    index: usize,
    raw: &LevWall,
    vertex_count: usize,
    textures: &[LevelTexture],
    sector_count: usize,
) -> Result<Wall, LevelError> {
    let invalid = |what| LevelError::InvalidReference {
        sector,
        wall: Some(index),
        what,
    };
    let vertex = |v: i32| {
        usize::try_from(v)
            .ok()
            .filter(|&v| v < vertex_count)
            .ok_or(invalid("vertex"))
    };
    let idx = [vertex(raw.left)?, vertex(raw.right)?];

    let adjoin = optional_index(raw.adjoin);
    if adjoin.is_some_and(|a| a >= sector_count) {
        return Err(invalid("adjoin"));
    }
    let walk = optional_index(raw.walk).filter(|&w| {
        let ok = w < sector_count;
        if !ok {
            warn!("Sector {} wall {}: dropping walk {}", sector, index, w);
        }
        ok
    });

    let mut tex = [Surface::none(); WallPart::COUNT];
    tex[WallPart::Mid as usize] = surface(&raw.mid, textures);
    tex[WallPart::Top as usize] = surface(&raw.top, textures);
    tex[WallPart::Bottom as usize] = surface(&raw.bottom, textures);
    tex[WallPart::Sign as usize] = surface(&raw.sign, textures);
    let sign = &mut tex[WallPart::Sign as usize];
    if sign.handle == AssetHandle::NONE {
        sign.offset = Vec2::ZERO;
    }

    Ok(Wall {
        idx,
        tex,
        adjoin,
        mirror: optional_index(raw.mirror),
        walk,
        light: raw.light,
        flags: raw.flags.map(|f| f as u32),
    })
}

/// A mirror must name a wall of the adjoined sector. Bad mirrors are dropped,
/// nothing reads them while querying.
fn check_mirrors(sectors: &mut [Sector]) {
    let wall_counts: Vec<usize> = sectors.iter().map(|s| s.walls.len()).collect();
    for (s, sector) in sectors.iter_mut().enumerate() {
        for (w, wall) in sector.walls.iter_mut().enumerate() {
            let Some(mirror) = wall.mirror else {
                continue;
            };
            let valid = wall.adjoin.is_some_and(|a| mirror < wall_counts[a]);
            if !valid {
                warn!("Sector {} wall {}: dropping mirror {}", s, w, mirror);
                wall.mirror = None;
            }
        }
    }
}

fn lev_surface(surface: &Surface) -> LevSurface {
    LevSurface::new(
        surface.texture.map_or(-1, |t| t as i32),
        surface.offset,
    )
}

fn lev_index(index: Option<usize>) -> i32 {
    index.map_or(-1, |i| i as i32)
}

fn lev_sector(sector: &Sector) -> LevSector {
    LevSector {
        id: sector.id,
        name: sector.name.clone(),
        ambient: sector.ambient,
        floor: lev_surface(&sector.floor_tex),
        floor_altitude: flip_height(sector.floor_height),
        ceiling: lev_surface(&sector.ceil_tex),
        ceiling_altitude: flip_height(sector.ceil_height),
        second_altitude: sector.second_height.map(flip_height),
        flags: sector.flags.map(|f| f as i32),
        layer: Some(sector.layer),
        vertices: sector.vtx.clone(),
        walls: sector
            .walls
            .iter()
            .map(|wall| LevWall {
                left: wall.idx[0] as i32,
                right: wall.idx[1] as i32,
                mid: lev_surface(wall.texture(WallPart::Mid)),
                top: lev_surface(wall.texture(WallPart::Top)),
                bottom: lev_surface(wall.texture(WallPart::Bottom)),
                sign: lev_surface(wall.texture(WallPart::Sign)),
                adjoin: lev_index(wall.adjoin),
                mirror: lev_index(wall.mirror),
                walk: lev_index(wall.walk),
                flags: wall.flags.map(|f| f as i32),
                light: wall.light,
            })
            .collect(),
    }
}

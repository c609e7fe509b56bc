//! The sector level: geometry store, polygon derivation, ray queries and
//! conversion from the `.LEV` file records.
//!
//! Level space is Y-up with the floor plan in XZ. A sector is a set of wall
//! loops over its own vertex list plus a floor and ceiling height. Walls that
//! adjoin another sector are portals.

mod error;
pub mod flags;
mod level;
mod map_defs;
mod polygon;
mod textures;
mod trace;
mod triangulation;

pub use error::LevelError;
pub use level::{FeatureSet, Level, load_level};
pub use map_defs::{Sector, Surface, Wall, WallPart};
pub use polygon::Polygon;
pub use textures::{
    AssetHandle, IndexResolver, LevelTexture, NullResolver, TextureResolver, bm_name,
};
pub use trace::{HitPart, RayHitInfo};

pub use glam;
pub use lev;
pub use log;
pub use math::{Ray, RayLayer};

#[cfg(test)]
mod tests;

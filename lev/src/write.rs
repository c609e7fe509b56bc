use std::fmt;

use glam::Vec2;

use crate::{LevData, LevSector, LevSurface, LevWall};

/// Writes the LEV text form. Every optional record that has a value is
/// written, so the output always parses back to the same `LevData` as long as
/// names are upper-case and contain no whitespace.
impl fmt::Display for LevData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "LEV {}.{}", self.version.major, self.version.minor)?;
        writeln!(f, "LEVELNAME {}", self.name)?;
        writeln!(f, "PALETTE {}", self.palette)?;
        if let Some(music) = &self.music {
            writeln!(f, "MUSIC {}", music)?;
        }
        writeln!(f, "PARALLAX {} {}", self.parallax.x, self.parallax.y)?;

        writeln!(f, "TEXTURES {}", self.textures.len())?;
        for (i, texture) in self.textures.iter().enumerate() {
            writeln!(f, "  TEXTURE: {}  # {}", texture, i)?;
        }

        writeln!(f)?;
        writeln!(f, "NUMSECTORS {}", self.sectors.len())?;
        for sector in &self.sectors {
            write_sector(f, sector)?;
        }
        Ok(())
    }
}

impl LevData {
    /// The LEV text form as bytes, ready to be written to a file
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

fn write_sector(f: &mut fmt::Formatter<'_>, sector: &LevSector) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "SECTOR {}", sector.id)?;
    match &sector.name {
        Some(name) => writeln!(f, "  NAME {}", name)?,
        None => writeln!(f, "  NAME")?,
    }
    writeln!(f, "  AMBIENT {}", sector.ambient)?;
    writeln!(f, "  FLOOR TEXTURE {} 0", surface(&sector.floor))?;
    writeln!(f, "  FLOOR ALTITUDE {}", sector.floor_altitude)?;
    writeln!(f, "  CEILING TEXTURE {} 0", surface(&sector.ceiling))?;
    writeln!(f, "  CEILING ALTITUDE {}", sector.ceiling_altitude)?;
    if let Some(second) = sector.second_altitude {
        writeln!(f, "  SECOND ALTITUDE {}", second)?;
    }
    let [f0, f1, f2] = sector.flags;
    writeln!(f, "  FLAGS {} {} {}", f0, f1, f2)?;
    if let Some(layer) = sector.layer {
        writeln!(f, "  LAYER {}", layer)?;
    }

    writeln!(f, "  VERTICES {}", sector.vertices.len())?;
    for (i, v) in sector.vertices.iter().enumerate() {
        writeln!(f, "    X: {} Z: {}  # {}", v.x, v.y, i)?;
    }

    writeln!(f, "  WALLS {}", sector.walls.len())?;
    for wall in &sector.walls {
        write_wall(f, wall)?;
    }
    Ok(())
}

fn write_wall(f: &mut fmt::Formatter<'_>, wall: &LevWall) -> fmt::Result {
    let [f0, f1, f2] = wall.flags;
    writeln!(
        f,
        "    WALL LEFT: {} RIGHT: {} MID: {} 0 TOP: {} 0 BOT: {} 0 SIGN: {} ADJOIN: {} MIRROR: {} WALK: {} FLAGS: {} {} {} LIGHT: {}",
        wall.left,
        wall.right,
        surface(&wall.mid),
        surface(&wall.top),
        surface(&wall.bottom),
        surface(&wall.sign),
        wall.adjoin,
        wall.mirror,
        wall.walk,
        f0,
        f1,
        f2,
        // Written as the unsigned 16 bit value
        wall.light & 0xFFFF,
    )
}

/// `<texture> <offset x> <offset z>`
fn surface(surface: &LevSurface) -> SurfaceFields {
    SurfaceFields(surface.texture, surface.offset)
}

struct SurfaceFields(i32, Vec2);

impl fmt::Display for SurfaceFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.0, self.1.x, self.1.y)
    }
}

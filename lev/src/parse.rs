use glam::Vec2;
use log::{debug, info, warn};

use crate::{
    DEFAULT_PARALLAX, DEFAULT_TEXTURE, LEV_VERSION_MAX, LEV_VERSION_MIN, LevData, LevError,
    LevSector, LevSurface, LevVersion, LevWall, Line, LineCursor, Pattern, Scanned,
};

const HEADER: Pattern = Pattern::new(" LEV %d.%d");
const LEVEL_NAME: Pattern = Pattern::new(" LEVELNAME %s");
const PALETTE: Pattern = Pattern::new(" PALETTE %s");
const MUSIC: Pattern = Pattern::new(" MUSIC %s");
const PARALLAX: Pattern = Pattern::new(" PARALLAX %f %f");
const TEXTURES: Pattern = Pattern::new(" TEXTURES %d");
const TEXTURE: Pattern = Pattern::new(" TEXTURE: %s ");
const NUM_SECTORS: Pattern = Pattern::new(" NUMSECTORS %d");
const SECTOR: Pattern = Pattern::new(" SECTOR %d");
const NAME: Pattern = Pattern::new(" NAME %s");
const AMBIENT: Pattern = Pattern::new(" AMBIENT %d");
const FLOOR_TEXTURE: Pattern = Pattern::new(" FLOOR TEXTURE %d %f %f %d");
const FLOOR_ALTITUDE: Pattern = Pattern::new(" FLOOR ALTITUDE %f");
const CEILING_TEXTURE: Pattern = Pattern::new(" CEILING TEXTURE %d %f %f %d");
const CEILING_ALTITUDE: Pattern = Pattern::new(" CEILING ALTITUDE %f");
const SECOND_ALTITUDE: Pattern = Pattern::new(" SECOND ALTITUDE %f");
const FLAGS: Pattern = Pattern::new(" FLAGS %d %d %d");
const LAYER: Pattern = Pattern::new(" LAYER %d");
const VERTICES: Pattern = Pattern::new(" VERTICES %d");
const VERTEX: Pattern = Pattern::new(" X: %f Z: %f ");
const WALLS: Pattern = Pattern::new(" WALLS %d");
const WALL: Pattern = Pattern::new(
    " WALL LEFT: %d RIGHT: %d MID: %d %f %f %d TOP: %d %f %f %d BOT: %d %f %f %d SIGN: %d %f %f ADJOIN: %d MIRROR: %d WALK: %d FLAGS: %d %d %d LIGHT: %d",
);
/// `LIGHT:` is the only optional wall field
const WALL_REQUIRED_FIELDS: usize = 23;

impl LevData {
    /// Parse a complete LEV buffer. Invalid UTF-8 is replaced, the format is
    /// ASCII and stray bytes only ever show up in comments.
    pub fn parse(buffer: &[u8]) -> Result<Self, LevError> {
        Self::parse_str(&String::from_utf8_lossy(buffer))
    }

    pub fn parse_str(source: &str) -> Result<Self, LevError> {
        let mut parser = Parser {
            cursor: LineCursor::new(source),
        };
        let data = parser.level()?;
        info!(
            "Parsed LEV {}.{} \"{}\": {} textures, {} sectors, {} walls",
            data.version.major,
            data.version.minor,
            data.name,
            data.textures.len(),
            data.sectors.len(),
            data.wall_count()
        );
        Ok(data)
    }
}

struct Parser<'a> {
    cursor: LineCursor<'a>,
}

impl Parser<'_> {
    fn next(&mut self, expected: Pattern) -> Result<Line, LevError> {
        self.cursor.next_line().ok_or(LevError::UnexpectedEof {
            expected: expected.as_str(),
        })
    }

    /// Consume the next line, which must match every field of `pattern`
    fn expect(&mut self, pattern: Pattern) -> Result<(Scanned, usize), LevError> {
        self.expect_at_least(pattern, pattern.field_count())
    }

    fn expect_at_least(
        &mut self,
        pattern: Pattern,
        required: usize,
    ) -> Result<(Scanned, usize), LevError> {
        let line = self.next(pattern)?;
        pattern
            .matches_at_least(&line.text, required)
            .map(|s| (s, line.number))
            .ok_or(LevError::Malformed {
                line: line.number,
                expected: pattern.as_str(),
            })
    }

    /// Consume the next line only if it matches `pattern`
    fn accept(&mut self, pattern: Pattern) -> Option<Scanned> {
        let line = self.cursor.peek()?;
        let scanned = pattern.matches(&line.text)?;
        self.cursor.advance(&line);
        Some(scanned)
    }

    fn count(&mut self, pattern: Pattern) -> Result<usize, LevError> {
        let (scanned, line) = self.expect(pattern)?;
        let count = scanned.int(0);
        usize::try_from(count).map_err(|_| LevError::NegativeCount { line, count })
    }

    /// Declared counts are untrusted. Each record is at least one line, so a
    /// count beyond the lines left will end in `UnexpectedEof` anyway.
    fn capacity(&self, count: usize) -> usize {
        count.min(self.cursor.remaining_lines())
    }

    fn level(&mut self) -> Result<LevData, LevError> {
        let (header, _) = self.expect(HEADER)?;
        let version = LevVersion::new(header.int(0), header.int(1));
        let supported = version
            .number()
            .is_some_and(|n| (LEV_VERSION_MIN..=LEV_VERSION_MAX).contains(&n));
        if !supported {
            return Err(LevError::UnsupportedVersion {
                major: version.major,
                minor: version.minor,
            });
        }

        let (name, _) = self.expect(LEVEL_NAME)?;
        let (palette, _) = self.expect(PALETTE)?;
        let music = self.accept(MUSIC).map(|s| s.word(0).to_owned());

        let parallax = match self.accept(PARALLAX) {
            Some(s) => Vec2::new(s.float(0), s.float(1)),
            None => {
                debug!("No PARALLAX record, using {}", DEFAULT_PARALLAX);
                Vec2::splat(DEFAULT_PARALLAX)
            }
        };

        let textures = self.textures()?;

        let sector_count = self.count(NUM_SECTORS)?;
        let mut sectors = Vec::with_capacity(self.capacity(sector_count));
        for _ in 0..sector_count {
            sectors.push(self.sector(textures.len())?);
        }

        Ok(LevData {
            version,
            name: name.word(0).to_owned(),
            palette: strip_path(palette.word(0)).to_owned(),
            music,
            parallax,
            textures,
            sectors,
        })
    }

    fn textures(&mut self) -> Result<Vec<String>, LevError> {
        let count = self.count(TEXTURES)?;
        let mut textures = Vec::with_capacity(self.capacity(count));
        for _ in 0..count {
            let line = self.next(TEXTURE)?;
            match TEXTURE.matches(&line.text) {
                Some(s) => textures.push(s.word(0).to_owned()),
                None => {
                    debug!(
                        "Line {}: bad texture record, using {}",
                        line.number, DEFAULT_TEXTURE
                    );
                    textures.push(DEFAULT_TEXTURE.to_owned());
                }
            }
        }

        // Some producers write more textures than they declare
        while let Some(s) = self.accept(TEXTURE) {
            warn!("Extra texture {} beyond the declared {}", s.word(0), count);
            textures.push(s.word(0).to_owned());
        }
        Ok(textures)
    }

    fn sector(&mut self, texture_count: usize) -> Result<LevSector, LevError> {
        let (id, _) = self.expect(SECTOR)?;
        let mut sector = LevSector {
            id: id.int(0),
            name: self.sector_name(),
            ..LevSector::default()
        };

        sector.ambient = self.expect(AMBIENT)?.0.int(0);

        let (floor, line) = self.expect(FLOOR_TEXTURE)?;
        sector.floor = surface(&floor, 0, line, texture_count)?;
        sector.floor_altitude = self.expect(FLOOR_ALTITUDE)?.0.float(0);

        let (ceiling, line) = self.expect(CEILING_TEXTURE)?;
        sector.ceiling = surface(&ceiling, 0, line, texture_count)?;
        sector.ceiling_altitude = self.expect(CEILING_ALTITUDE)?.0.float(0);

        sector.second_altitude = self.accept(SECOND_ALTITUDE).map(|s| s.float(0));

        let (flags, _) = self.expect(FLAGS)?;
        sector.flags = [flags.int(0), flags.int(1), flags.int(2)];

        sector.layer = self.accept(LAYER).map(|s| s.int(0));

        let vertex_count = self.count(VERTICES)?;
        sector.vertices.reserve_exact(self.capacity(vertex_count));
        for _ in 0..vertex_count {
            let (v, _) = self.expect(VERTEX)?;
            sector.vertices.push(Vec2::new(v.float(0), v.float(1)));
        }

        let wall_count = self.count(WALLS)?;
        sector.walls.reserve_exact(self.capacity(wall_count));
        for _ in 0..wall_count {
            let (w, line) = self.expect_at_least(WALL, WALL_REQUIRED_FIELDS)?;
            sector.walls.push(wall(&w, line, texture_count)?);
        }

        Ok(sector)
    }

    /// The NAME record may be empty, and may contain `#`. A line that is not a
    /// NAME record at all is left for the next reader.
    fn sector_name(&mut self) -> Option<String> {
        let line = self.cursor.peek_keep_comments()?;
        if let Some(s) = NAME.matches(&line.text) {
            self.cursor.advance(&line);
            return Some(s.word(0).to_owned());
        }
        if line.text == "NAME" {
            self.cursor.advance(&line);
        }
        None
    }
}

/// Build a surface from 3 fields starting at `first`: texture, offset x, z
fn surface(
    scanned: &Scanned,
    first: usize,
    line: usize,
    texture_count: usize,
) -> Result<LevSurface, LevError> {
    let texture = scanned.int(first);
    if texture >= 0 && texture as usize >= texture_count {
        return Err(LevError::TextureIndex {
            line,
            index: texture,
        });
    }
    Ok(LevSurface::new(
        texture,
        Vec2::new(scanned.float(first + 1), scanned.float(first + 2)),
    ))
}

fn wall(scanned: &Scanned, line: usize, texture_count: usize) -> Result<LevWall, LevError> {
    let mut light = scanned.int(23);
    // Stored as an unsigned 16 bit value
    if light >= 32768 {
        light -= 65536;
    }

    Ok(LevWall {
        left: scanned.int(0),
        right: scanned.int(1),
        mid: surface(scanned, 2, line, texture_count)?,
        top: surface(scanned, 6, line, texture_count)?,
        bottom: surface(scanned, 10, line, texture_count)?,
        sign: surface(scanned, 14, line, texture_count)?,
        adjoin: scanned.int(17),
        mirror: scanned.int(18),
        walk: scanned.int(19),
        flags: [scanned.int(20), scanned.int(21), scanned.int(22)],
        light,
    })
}

fn strip_path(path: &str) -> &str {
    path.rsplit(['/', '\\', ':']).next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::strip_path;

    #[test]
    fn palette_paths() {
        assert_eq!(strip_path("SECBASE.PAL"), "SECBASE.PAL");
        assert_eq!(strip_path("C:\\DARK\\SECBASE.PAL"), "SECBASE.PAL");
        assert_eq!(strip_path("pal/SECBASE.PAL"), "SECBASE.PAL");
    }
}

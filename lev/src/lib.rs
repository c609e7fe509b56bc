//! This crate contains the structures and tools for reading and writing the
//! sector based `.LEV` level text format, versions 1.5 to 2.1.
//!
//! A LEV file is line oriented. `#` starts a comment, blank lines are skipped
//! and everything is upper-cased before matching. Records appear in a fixed
//! order, some of them optional depending on the file version:
//!
//! ```text,ignore
//!             ┌─────────────────────────────────────────┐
//!             | LEV 2.1                                 |
//!             | LEVELNAME SECBASE                       |
//!     Header ─┤ PALETTE SECBASE.PAL                     |
//!             | MUSIC NAVY.GMD                  (opt)   |
//!             | PARALLAX 1024.0000 1024.0000    (>=1.9) |
//!             ├─────────────────────────────────────────┤
//!             | TEXTURES 2                              |
//!   Textures ─┤ TEXTURE: DEFAULT.BM                     |
//!             | TEXTURE: IMPCHW.BM                      |
//!             ├─────────────────────────────────────────┤
//!             | NUMSECTORS 1                            |
//!             | SECTOR 0                                |
//!             | NAME start      ('#' is allowed here)   |
//!             | AMBIENT 20                              |
//!             | FLOOR TEXTURE 1 0.00 0.00 0             |
//!             | FLOOR ALTITUDE 0.00   (down is positive)|
//!    Sectors ─┤ CEILING TEXTURE 0 0.00 0.00 0           |
//!             | CEILING ALTITUDE -16.00                 |
//!             | SECOND ALTITUDE 0.00            (>=1.7) |
//!             | FLAGS 0 0 0                             |
//!             | LAYER 0                         (opt)   |
//!             | VERTICES 4                              |
//!             | X: 0.00 Z: 0.00                         |
//!             |   ...                                   |
//!             | WALLS 4                                 |
//!             | WALL LEFT: 0 RIGHT: 1 MID: ... LIGHT: 0 |
//!             |   ...                                   |
//!             └─────────────────────────────────────────┘
//! ```
//!
//! Optional records are detected by attempting a match on the current line,
//! the line is only consumed if the match succeeds.

mod cursor;
mod error;
mod parse;
mod pattern;
mod types;
mod write;

pub use cursor::{Line, LineCursor};
pub use error::LevError;
pub use glam;
pub use pattern::{Pattern, Scanned};
pub use types::*;

/// Oldest supported format, `LEV 1.5`
pub const LEV_VERSION_MIN: i32 = 15;
/// Newest supported format, `LEV 2.1`
pub const LEV_VERSION_MAX: i32 = 21;
/// Substituted for texture lines that fail to parse
pub const DEFAULT_TEXTURE: &str = "DEFAULT.BM";
/// Sky parallax used when a file has no `PARALLAX` record
pub const DEFAULT_PARALLAX: f32 = 1024.0;

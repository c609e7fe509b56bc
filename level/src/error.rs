use std::error::Error;
use std::fmt;

use lev::LevError;

#[derive(Debug, Clone, PartialEq)]
pub enum LevelError {
    /// The file could not be parsed
    Lev(LevError),
    /// An index in the file points outside the list it refers to
    InvalidReference {
        sector: usize,
        wall: Option<usize>,
        what: &'static str,
    },
}

impl Error for LevelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LevelError::Lev(e) => Some(e),
            LevelError::InvalidReference { .. } => None,
        }
    }
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Lev(e) => write!(f, "{}", e),
            LevelError::InvalidReference {
                sector,
                wall: Some(wall),
                what,
            } => write!(f, "Sector {} wall {}: invalid {} index", sector, wall, what),
            LevelError::InvalidReference {
                sector,
                wall: None,
                what,
            } => write!(f, "Sector {}: invalid {} index", sector, what),
        }
    }
}

impl From<LevError> for LevelError {
    fn from(e: LevError) -> Self {
        LevelError::Lev(e)
    }
}

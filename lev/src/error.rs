use std::{error::Error, fmt};

/// Failures while reading a LEV buffer. Any of these aborts the whole load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevError {
    /// The header parsed but the version is outside `1.5..=2.1`
    UnsupportedVersion { major: i32, minor: i32 },
    /// A required record did not match its pattern
    Malformed { line: usize, expected: &'static str },
    /// The buffer ended while a required record was expected
    UnexpectedEof { expected: &'static str },
    /// A count record held a negative value
    NegativeCount { line: usize, count: i32 },
    /// A texture reference points past the end of the texture list
    TextureIndex { line: usize, index: i32 },
}

impl Error for LevError {}

impl fmt::Display for LevError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevError::UnsupportedVersion { major, minor } => {
                write!(f, "unsupported LEV version {}.{}", major, minor)
            }
            LevError::Malformed { line, expected } => {
                write!(f, "line {}: expected `{}`", line, expected.trim())
            }
            LevError::UnexpectedEof { expected } => {
                write!(f, "unexpected end of file, expected `{}`", expected.trim())
            }
            LevError::NegativeCount { line, count } => {
                write!(f, "line {}: invalid count {}", line, count)
            }
            LevError::TextureIndex { line, index } => {
                write!(f, "line {}: texture index {} is out of range", line, index)
            }
        }
    }
}

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use argh::FromArgs;
use level::glam::{Vec2, Vec3};
use level::log;

/// Inspect and query sector `.LEV` level files
#[derive(Debug, FromArgs)]
pub struct CLIOptions {
    /// verbose level: off, error, warn, info, debug
    #[argh(option)]
    pub verbose: Option<log::LevelFilter>,
    /// directory of `.BM` textures. Level textures not found there are
    /// reported as missing
    #[argh(option)]
    pub textures: Option<String>,
    /// sector layer used by queries
    #[argh(option)]
    pub layer: Option<i32>,
    #[argh(subcommand)]
    pub command: Command,
}

impl CLIOptions {
    /// `--verbose`, or `Warn` when neither it nor the config gave a level
    pub fn log_level(&self) -> log::LevelFilter {
        self.verbose.unwrap_or(log::LevelFilter::Warn)
    }
}

#[derive(Debug, FromArgs)]
#[argh(subcommand)]
pub enum Command {
    Info(InfoArgs),
    Trace(TraceArgs),
    Pick(PickArgs),
    Export(ExportArgs),
}

/// Print a summary of a level
#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "info")]
pub struct InfoArgs {
    /// the level file
    #[argh(positional)]
    pub file: PathBuf,
    /// also list every sector
    #[argh(switch)]
    pub sectors: bool,
}

/// Trace a ray through a level and print what it hits
#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "trace")]
pub struct TraceArgs {
    /// the level file
    #[argh(positional)]
    pub file: PathBuf,
    /// ray origin as x,y,z
    #[argh(option)]
    pub origin: VecArg<Vec3>,
    /// ray direction as x,y,z, does not need to be normalised
    #[argh(option)]
    pub dir: VecArg<Vec3>,
    /// how far along `dir` the ray goes
    #[argh(option, default = "1000.0")]
    pub max_dist: f32,
    /// skip sectors whose bounds the ray misses
    #[argh(switch)]
    pub culled: bool,
    /// hit sectors on any layer, not only `--layer`
    #[argh(switch)]
    pub any_layer: bool,
}

/// Find the sector containing a point on the floor plan
#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "pick")]
pub struct PickArgs {
    /// the level file
    #[argh(positional)]
    pub file: PathBuf,
    /// the point as x,z
    #[argh(option)]
    pub at: VecArg<Vec2>,
}

/// Write a level back out as LEV 2.1
#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "export")]
pub struct ExportArgs {
    /// the level file
    #[argh(positional)]
    pub file: PathBuf,
    /// where to write the result
    #[argh(option, short = 'o')]
    pub output: PathBuf,
}

/// A vector given as comma separated components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VecArg<T>(pub T);

#[derive(Debug)]
pub struct VecArgError(String);

impl fmt::Display for VecArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expected comma separated numbers, got \"{}\"", self.0)
    }
}

fn components<const N: usize>(s: &str) -> Result<[f32; N], VecArgError> {
    let err = || VecArgError(s.to_owned());
    let mut out = [0.0; N];
    let mut parts = s.split(',');
    for v in &mut out {
        *v = parts
            .next()
            .and_then(|p| p.trim().parse().ok())
            .ok_or_else(err)?;
    }
    if parts.next().is_some() {
        return Err(err());
    }
    Ok(out)
}

impl FromStr for VecArg<Vec3> {
    type Err = VecArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        components::<3>(s).map(|c| VecArg(Vec3::from_array(c)))
    }
}

impl FromStr for VecArg<Vec2> {
    type Err = VecArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        components::<2>(s).map(|c| VecArg(Vec2::from_array(c)))
    }
}

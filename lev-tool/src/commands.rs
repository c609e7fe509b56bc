use std::error::Error;
use std::fs;
use std::path::Path;

use level::flags::SectorFlags;
use level::log::{info, warn};
use level::{IndexResolver, Level, Ray, RayLayer, load_level};

use crate::cli::{ExportArgs, InfoArgs, PickArgs, TraceArgs};

/// Build a resolver that knows every `.BM` file in `dir`, or resolves any
/// name when there is no texture directory
pub fn texture_resolver(dir: Option<&str>) -> Result<IndexResolver, Box<dyn Error>> {
    let Some(dir) = dir else {
        return Ok(IndexResolver::new());
    };
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let name = entry?.file_name().to_string_lossy().to_ascii_uppercase();
        if name.ends_with(".BM") {
            names.push(name);
        }
    }
    info!("Found {} textures in {}", names.len(), dir);
    Ok(IndexResolver::with_known(names))
}

pub fn open_level(path: &Path, resolver: &mut IndexResolver) -> Result<Level, Box<dyn Error>> {
    let buffer = fs::read(path)?;
    let level = load_level(&buffer, resolver)?;
    info!("Loaded {:?}", path);
    Ok(level)
}

pub fn info(args: &InfoArgs, level: &Level) {
    let missing = level.textures.iter().filter(|t| t.handle.is_none()).count();
    let portals = level
        .sectors
        .iter()
        .flat_map(|s| &s.walls)
        .filter(|w| w.is_portal())
        .count();
    let flagged = |flag| level.sectors.iter().filter(|s| s.has_flag(flag)).count();

    println!("Level:      {}", level.name);
    println!("Palette:    {}", level.palette);
    if let Some(music) = &level.music {
        println!("Music:      {}", music);
    }
    println!("Parallax:   {} {}", level.parallax.x, level.parallax.y);
    println!("Textures:   {} ({} missing)", level.textures.len(), missing);
    println!("Sectors:    {}", level.sectors.len());
    println!("Walls:      {} ({} portals)", level.wall_count(), portals);
    println!(
        "Layers:     {} to {}",
        level.layer_range[0], level.layer_range[1]
    );
    println!("Bounds:     {} to {}", level.bounds.min, level.bounds.max);
    println!(
        "Doors: {}, secrets: {}, exteriors: {}",
        flagged(SectorFlags::Door),
        flagged(SectorFlags::Secret),
        flagged(SectorFlags::Exterior)
    );

    if args.sectors {
        for (i, sector) in level.sectors.iter().enumerate() {
            println!(
                "{:5} {:<16} layer {:3} floor {:8.2} ceiling {:8.2} walls {:3} triangles {:3}",
                i,
                sector.name.as_deref().unwrap_or("-"),
                sector.layer,
                sector.floor_height,
                sector.ceil_height,
                sector.walls.len(),
                sector.polygon.triangle_count(),
            );
        }
    }
}

pub fn trace(args: &TraceArgs, level: &Level, layer: i32) {
    let layer = if args.any_layer {
        RayLayer::Any
    } else {
        RayLayer::Exact(layer)
    };
    let ray = Ray::new(args.origin.0, args.dir.0, args.max_dist).with_layer(layer);
    if ray.is_degenerate() {
        warn!("The ray has no length, nothing can be hit");
    }

    let hit = if args.culled {
        level.trace_ray_culled(&ray)
    } else {
        level.trace_ray(&ray)
    };
    match hit {
        Some(hit) => {
            let sector = hit.sector.and_then(|s| level.sector(s));
            println!(
                "Hit {:?} of sector {} ({})",
                hit.part,
                hit.sector.map_or(-1, |s| s as i64),
                sector.and_then(|s| s.name.as_deref()).unwrap_or("unnamed"),
            );
            if let Some(wall) = hit.wall {
                println!("Wall:       {}", wall);
            }
            println!("Position:   {}", hit.pos);
            println!("Distance:   {}", hit.dist);
        }
        None => println!("No hit"),
    }
}

pub fn pick(args: &PickArgs, level: &Level, layer: i32) {
    match level.find_sector_2d(layer, args.at.0) {
        Some(id) => {
            let sector = &level.sectors[id];
            println!(
                "Sector {} ({}) floor {} ceiling {}",
                id,
                sector.name.as_deref().unwrap_or("unnamed"),
                sector.floor_height,
                sector.ceil_height
            );
        }
        None => println!("No sector on layer {} at {}", layer, args.at.0),
    }
}

pub fn export(args: &ExportArgs, level: &Level) -> Result<(), Box<dyn Error>> {
    fs::write(&args.output, level.to_lev().to_bytes())?;
    info!("Wrote {:?}", args.output);
    Ok(())
}

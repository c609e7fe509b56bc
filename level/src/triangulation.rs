//! Sector triangulation.
//!
//! A sector's walls form one or more closed loops. Loops enclosed by another
//! loop are holes (pillars and the like). Each outer loop is triangulated
//! together with its holes by `earcutr`.

use glam::Vec2;
use log::{debug, warn};
use math::cross_2d;

/// Rings with less area than this are dropped
const AREA_EPSILON: f32 = 1e-6;

/// Triangulate the area enclosed by `edges`, appending the ring vertices to
/// `tri_vtx` and counter-clockwise triangles (three indices each, into
/// `tri_vtx`) to `tri_idx`. Edges that reference missing vertices are
/// ignored. Never fails: an outer loop earcut can't handle is filled as a
/// fan.
pub(crate) fn triangulate(
    vtx: &[Vec2],
    edges: &[[usize; 2]],
    tri_vtx: &mut Vec<Vec2>,
    tri_idx: &mut Vec<u32>,
) {
    let rings: Vec<Vec<Vec2>> = chain_loops(vtx.len(), edges)
        .into_iter()
        .map(|ring| ring.into_iter().map(|i| vtx[i]).collect::<Vec<_>>())
        .filter(|ring| signed_area(ring).abs() > AREA_EPSILON)
        .collect();

    // A ring inside an odd number of others is a hole
    let depth: Vec<usize> = rings
        .iter()
        .enumerate()
        .map(|(i, ring)| {
            rings
                .iter()
                .enumerate()
                .filter(|(j, other)| *j != i && ring_contains(other, ring[0]))
                .count()
        })
        .collect();

    let mut outers: Vec<(&[Vec2], Vec<&[Vec2]>)> = Vec::new();
    let mut outer_of = vec![usize::MAX; rings.len()];
    for (i, ring) in rings.iter().enumerate() {
        if depth[i] % 2 == 0 {
            outer_of[i] = outers.len();
            outers.push((ring, Vec::new()));
        }
    }

    for (i, ring) in rings.iter().enumerate() {
        if depth[i] % 2 == 0 {
            continue;
        }
        // The smallest enclosing outer ring owns the hole
        let owner = rings
            .iter()
            .enumerate()
            .filter(|(j, other)| depth[*j] % 2 == 0 && ring_contains(other, ring[0]))
            .min_by(|(_, a), (_, b)| signed_area(a).abs().total_cmp(&signed_area(b).abs()))
            .map(|(j, _)| outer_of[j]);
        if let Some(owner) = owner {
            outers[owner].1.push(ring);
        }
    }

    for (ring, holes) in outers {
        let base = tri_vtx.len();
        let mut coords = Vec::with_capacity(2 * ring.len());
        let mut hole_starts = Vec::with_capacity(holes.len());
        tri_vtx.extend_from_slice(ring);
        for hole in &holes {
            hole_starts.push(tri_vtx.len() - base);
            tri_vtx.extend_from_slice(hole);
        }
        for v in &tri_vtx[base..] {
            coords.extend([v.x, v.y]);
        }

        let indices = match earcutr::earcut(&coords, &hole_starts, 2) {
            Ok(indices) if !indices.is_empty() => indices,
            Ok(_) => {
                debug!("Earcut gave no triangles for a ring of {}, using a fan", ring.len());
                fan(ring.len())
            }
            Err(e) => {
                warn!("Earcut failed on a ring of {}: {:?}, using a fan", ring.len(), e);
                fan(ring.len())
            }
        };

        for tri in indices.chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| (base + i) as u32);
            let (pa, pb, pc) = (
                tri_vtx[a as usize],
                tri_vtx[b as usize],
                tri_vtx[c as usize],
            );
            if cross_2d(pb - pa, pc - pa) < 0.0 {
                tri_idx.extend([a, c, b]);
            } else {
                tri_idx.extend([a, b, c]);
            }
        }
    }
}

/// Triangles `0, i, i + 1` over the first `count` vertices
fn fan(count: usize) -> Vec<usize> {
    (1..count.saturating_sub(1))
        .flat_map(|i| [0, i, i + 1])
        .collect()
}

/// Follow edges head to tail until each chain closes. Returns vertex index
/// rings of at least three vertices. An open chain is closed implicitly.
fn chain_loops(vertex_count: usize, edges: &[[usize; 2]]) -> Vec<Vec<usize>> {
    let valid: Vec<[usize; 2]> = edges
        .iter()
        .copied()
        .filter(|e| e[0] < vertex_count && e[1] < vertex_count && e[0] != e[1])
        .collect();
    let mut used = vec![false; valid.len()];
    let mut loops = Vec::new();

    for start in 0..valid.len() {
        if used[start] {
            continue;
        }
        used[start] = true;
        let first = valid[start][0];
        let mut ring = vec![first];
        let mut current = valid[start][1];
        while current != first {
            ring.push(current);
            let Some(next) = (0..valid.len()).find(|&i| !used[i] && valid[i][0] == current) else {
                debug!("Open wall chain ending at vertex {}", current);
                break;
            };
            used[next] = true;
            current = valid[next][1];
        }
        if ring.len() >= 3 {
            loops.push(ring);
        }
    }
    loops
}

/// Shoelace area, positive for counter-clockwise
pub(crate) fn signed_area(ring: &[Vec2]) -> f32 {
    let mut sum = 0.0;
    for (i, a) in ring.iter().enumerate() {
        let b = ring[(i + 1) % ring.len()];
        sum += cross_2d(*a, b);
    }
    sum * 0.5
}

/// Even-odd test against a closed ring
fn ring_contains(ring: &[Vec2], p: Vec2) -> bool {
    let mut inside = false;
    for (i, a) in ring.iter().enumerate() {
        let b = ring[(i + 1) % ring.len()];
        if (a.y > p.y) != (b.y > p.y) {
            let x = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x {
                inside = !inside;
            }
        }
    }
    inside
}

use glam::Vec2;
use math::{Rect2, cross_2d};

use crate::map_defs::Wall;
use crate::triangulation::triangulate;

/// The 2D shape of a sector, derived from its vertices and walls. This is a
/// cache: it is rebuilt from the sector and never edited directly.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Polygon {
    /// Copy of the sector's vertices
    pub vtx: Vec<Vec2>,
    /// One `[start, end]` pair per wall, indexing `vtx`
    pub edge: Vec<[usize; 2]>,
    pub bounds: Rect2,
    pub tri_vtx: Vec<Vec2>,
    /// Three indices into `tri_vtx` per triangle
    pub tri_idx: Vec<u32>,
}

impl Polygon {
    /// Build from an explicit edge list
    pub fn new(vtx: &[Vec2], edge: Vec<[usize; 2]>) -> Self {
        let mut polygon = Self {
            edge,
            ..Self::default()
        };
        polygon.set_vertices(vtx);
        polygon.triangulate();
        polygon
    }

    /// A single closed ring through `vtx` in order
    pub fn from_ring(vtx: &[Vec2]) -> Self {
        let edge = (0..vtx.len()).map(|i| [i, (i + 1) % vtx.len()]).collect();
        Self::new(vtx, edge)
    }

    pub(crate) fn rebuild(&mut self, vtx: &[Vec2], walls: &[Wall]) {
        self.set_vertices(vtx);
        self.edge.clear();
        self.edge.extend(walls.iter().map(|w| w.idx));
        self.triangulate();
    }

    fn set_vertices(&mut self, vtx: &[Vec2]) {
        self.vtx.clear();
        self.vtx.extend_from_slice(vtx);
        self.bounds = Rect2::from_points(vtx);
    }

    fn triangulate(&mut self) {
        self.tri_vtx.clear();
        self.tri_idx.clear();
        triangulate(&self.vtx, &self.edge, &mut self.tri_vtx, &mut self.tri_idx);
    }

    /// Edges as point pairs, skipping any with a bad vertex index
    pub fn edge_points(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.edge
            .iter()
            .filter_map(|e| Some((*self.vtx.get(e[0])?, *self.vtx.get(e[1])?)))
    }

    /// Even-odd crossing test, so inner loops count as holes. Points exactly
    /// on an edge may land either side.
    pub fn point_inside(&self, point: Vec2) -> bool {
        if !self.bounds.contains(point) {
            return false;
        }
        let mut inside = false;
        for (a, b) in self.edge_points() {
            if (a.y > point.y) != (b.y > point.y) {
                let x = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if point.x < x {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// Shoelace area over the edges. Negative for a sector wound the usual
    /// way (clockwise with Z up).
    pub fn area(&self) -> f32 {
        self.edge_points().map(|(a, b)| cross_2d(a, b)).sum::<f32>() * 0.5
    }

    /// Vertex average
    pub fn centroid(&self) -> Vec2 {
        if self.vtx.is_empty() {
            return Vec2::ZERO;
        }
        self.vtx.iter().copied().sum::<Vec2>() / self.vtx.len() as f32
    }

    pub fn triangle_count(&self) -> usize {
        self.tri_idx.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = [Vec2; 3]> + '_ {
        self.tri_idx.chunks_exact(3).map(|t| {
            [
                self.tri_vtx[t[0] as usize],
                self.tri_vtx[t[1] as usize],
                self.tri_vtx[t[2] as usize],
            ]
        })
    }
}

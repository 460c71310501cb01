use std::collections::HashMap;

use crate::world::coord::Coord;
use crate::world::grid::{Grid, LevelHandle};

/// One recorded hop; the weight is read through the grid every time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub destination: Coord,
    pub weight: LevelHandle,
}

/// Append-only multigraph of trail hops
///
/// Vertices are not deduplicated and revisits append new edges, so the
/// graph only ever grows over a run.
#[derive(Clone, Debug, Default)]
pub struct TrailGraph {
    vertices: Vec<Coord>,
    edges: HashMap<Coord, Vec<Edge>>,
    edge_count: usize,
    /// Per-vertex cap on stored edges; `None` is unbounded
    max_edges_per_vertex: Option<usize>,
}

impl TrailGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph whose per-vertex edge lists stop growing at `cap`
    pub fn with_edge_cap(cap: Option<usize>) -> Self {
        Self {
            max_edges_per_vertex: cap,
            ..Self::default()
        }
    }

    #[inline]
    pub fn add_vertex(&mut self, at: Coord) {
        self.vertices.push(at);
    }

    /// Record a hop out of `from`. Never overwrites an earlier edge.
    pub fn add_edge(&mut self, from: Coord, to: Coord, weight: LevelHandle) {
        let list = self.edges.entry(from).or_default();
        if self.max_edges_per_vertex.is_some_and(|cap| list.len() >= cap) {
            return;
        }
        list.push(Edge {
            destination: to,
            weight,
        });
        self.edge_count += 1;
    }

    /// Destination of the heaviest edge out of `from`, first one on ties.
    /// `None` when nothing has been recorded there.
    pub fn strongest_edge(&self, from: Coord, grid: &Grid) -> Option<Coord> {
        let mut best: Option<(Coord, f32)> = None;
        for edge in self.edges_from(from) {
            let w = grid.level(edge.weight);
            match best {
                Some((_, top)) if w <= top => {}
                _ => best = Some((edge.destination, w)),
            }
        }
        best.map(|(dest, _)| dest)
    }

    pub fn edges_from(&self, from: Coord) -> &[Edge] {
        self.edges.get(&from).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

/// Both trail graphs; always locked together as one unit
#[derive(Clone, Debug, Default)]
pub struct TrailGraphs {
    /// Hops hungry ants took, followed back toward the nest
    pub home: TrailGraph,
    /// Hops loaded ants took, followed back toward the food
    pub food: TrailGraph,
}

impl TrailGraphs {
    pub fn new(max_edges_per_vertex: Option<usize>) -> Self {
        Self {
            home: TrailGraph::with_edge_cap(max_edges_per_vertex),
            food: TrailGraph::with_edge_cap(max_edges_per_vertex),
        }
    }
}

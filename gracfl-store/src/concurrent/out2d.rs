use gracfl_graph::{Edge, VertexId};

use crate::dedup::DedupIndex;

use super::cell::ConcurrentFrontierCell2D;
use super::grid2d::Grid2D;
use super::traits::ConcurrentEdgeStore;

/// Concurrent counterpart of [`crate::stores::out2d::Out2D`]: the store
/// behind parallel FW-Topo.
pub struct Out2DConcurrent {
    grid: Grid2D,
}

impl Out2DConcurrent {
    pub fn new(vertex_count: usize, label_count: usize) -> Self {
        Out2DConcurrent {
            grid: Grid2D::new(vertex_count, label_count),
        }
    }

    pub fn cell(&self, from: VertexId) -> &ConcurrentFrontierCell2D {
        self.grid.cell(from)
    }
}

impl ConcurrentEdgeStore for Out2DConcurrent {
    fn vertex_count(&self) -> usize {
        self.grid.vertex_count()
    }

    fn label_count(&self) -> usize {
        self.grid.label_count()
    }

    fn add_initial_edges(&mut self, edges: &[Edge]) {
        for e in edges {
            self.grid.add_new(e.from, e.label, e.to);
        }
    }

    fn add_self_edge(&self, from: VertexId, to: VertexId, label: u32) {
        self.grid.add_new(from, label, to);
    }

    fn check_and_add(&self, from: VertexId, to: VertexId, label: u32) -> bool {
        self.grid.check_and_add(from, label, to)
    }

    fn commit(&mut self) {
        self.grid.commit();
    }

    fn edge_count(&self) -> usize {
        self.grid.edge_count()
    }

    fn to_out_form(&self) -> DedupIndex {
        self.grid.dedup().to_dedup_index(self.vertex_count(), self.label_count())
    }
}

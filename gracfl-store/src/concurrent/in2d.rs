use gracfl_graph::{Edge, VertexId};

use crate::dedup::DedupIndex;
use crate::result::convert_in_to_out;

use super::cell::ConcurrentFrontierCell2D;
use super::grid2d::Grid2D;
use super::traits::ConcurrentEdgeStore;

/// Concurrent counterpart of [`crate::stores::in2d::In2D`]: the store
/// behind parallel BW-Topo.
pub struct In2DConcurrent {
    grid: Grid2D,
}

impl In2DConcurrent {
    pub fn new(vertex_count: usize, label_count: usize) -> Self {
        In2DConcurrent {
            grid: Grid2D::new(vertex_count, label_count),
        }
    }

    pub fn cell(&self, to: VertexId) -> &ConcurrentFrontierCell2D {
        self.grid.cell(to)
    }
}

impl ConcurrentEdgeStore for In2DConcurrent {
    fn vertex_count(&self) -> usize {
        self.grid.vertex_count()
    }

    fn label_count(&self) -> usize {
        self.grid.label_count()
    }

    fn add_initial_edges(&mut self, edges: &[Edge]) {
        for e in edges {
            self.grid.add_new(e.to, e.label, e.from);
        }
    }

    fn add_self_edge(&self, from: VertexId, to: VertexId, label: u32) {
        self.grid.add_new(to, label, from);
    }

    fn check_and_add(&self, from: VertexId, to: VertexId, label: u32) -> bool {
        self.grid.check_and_add(to, label, from)
    }

    fn commit(&mut self) {
        self.grid.commit();
    }

    fn edge_count(&self) -> usize {
        self.grid.edge_count()
    }

    fn to_out_form(&self) -> DedupIndex {
        let in_form = self.grid.dedup().to_dedup_index(self.vertex_count(), self.label_count());
        convert_in_to_out(&in_form, self.vertex_count(), self.label_count())
    }
}

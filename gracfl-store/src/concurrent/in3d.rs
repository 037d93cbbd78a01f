use gracfl_grammar::LabelId;
use gracfl_graph::{Edge, VertexId};

use crate::dedup::DedupIndex;
use crate::result::convert_in_to_out;

use super::cell::ConcurrentFrontierCell3D;
use super::grid3d::Grid3D;
use super::traits::ConcurrentEdgeStore;

/// Concurrent counterpart of [`crate::stores::in3d::In3D`]: the store
/// behind parallel BW-Gram.
pub struct In3DConcurrent {
    grid: Grid3D,
}

impl In3DConcurrent {
    pub fn new(vertex_count: usize, label_count: usize) -> Self {
        In3DConcurrent {
            grid: Grid3D::new(vertex_count, label_count),
        }
    }

    pub fn cell(&self, to: VertexId, label: LabelId) -> &ConcurrentFrontierCell3D {
        self.grid.cell(to, label)
    }
}

impl ConcurrentEdgeStore for In3DConcurrent {
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

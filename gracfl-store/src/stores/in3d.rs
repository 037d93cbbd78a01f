use gracfl_grammar::LabelId;
use gracfl_graph::{Edge, VertexId};

use crate::cell::FrontierCell3D;
use crate::dedup::DedupIndex;
use crate::result::convert_in_to_out;
use crate::traits::EdgeStore;

use super::grid3d::Grid3D;

/// Incoming edges only, partitioned by `(to, label)` — the store behind
/// BW-Gram.
#[derive(Debug, Clone)]
pub struct In3D {
    grid: Grid3D,
}

impl In3D {
    pub fn new(vertex_count: usize, label_count: usize) -> Self {
        In3D {
            grid: Grid3D::new(vertex_count, label_count),
        }
    }

    pub fn cell(&self, to: VertexId, label: LabelId) -> &FrontierCell3D {
        self.grid.cell(to, label)
    }
}

impl EdgeStore for In3D {
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

    fn add_self_edge(&mut self, from: VertexId, to: VertexId, label: u32) {
        self.grid.add_new(to, label, from);
    }

    fn check_and_add(&mut self, from: VertexId, to: VertexId, label: u32, terminate: &mut bool) -> bool {
        self.grid.check_and_add(to, label, from, terminate)
    }

    fn commit(&mut self) {
        self.grid.commit();
    }

    fn edge_count(&self) -> usize {
        self.grid.edge_count()
    }

    fn to_out_form(&self) -> DedupIndex {
        convert_in_to_out(self.grid.dedup(), self.vertex_count(), self.label_count())
    }
}

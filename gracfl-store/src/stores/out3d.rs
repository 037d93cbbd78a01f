use gracfl_grammar::LabelId;
use gracfl_graph::{Edge, VertexId};

use crate::cell::FrontierCell3D;
use crate::dedup::DedupIndex;
use crate::traits::EdgeStore;

use super::grid3d::Grid3D;

/// Outgoing edges only, partitioned by `(from, label)` — the store behind
/// FW-Gram.
#[derive(Debug, Clone)]
pub struct Out3D {
    grid: Grid3D,
}

impl Out3D {
    pub fn new(vertex_count: usize, label_count: usize) -> Self {
        Out3D {
            grid: Grid3D::new(vertex_count, label_count),
        }
    }

    pub fn cell(&self, from: VertexId, label: LabelId) -> &FrontierCell3D {
        self.grid.cell(from, label)
    }
}

impl EdgeStore for Out3D {
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

    fn add_self_edge(&mut self, from: VertexId, to: VertexId, label: u32) {
        self.grid.add_new(from, label, to);
    }

    fn check_and_add(&mut self, from: VertexId, to: VertexId, label: u32, terminate: &mut bool) -> bool {
        self.grid.check_and_add(from, label, to, terminate)
    }

    fn commit(&mut self) {
        self.grid.commit();
    }

    fn edge_count(&self) -> usize {
        self.grid.edge_count()
    }

    fn to_out_form(&self) -> DedupIndex {
        self.grid.dedup().clone()
    }
}

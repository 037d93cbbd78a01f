use gracfl_grammar::LabelId;
use gracfl_graph::{Edge, VertexId};

use crate::dedup::DedupIndex;

use super::cell::ConcurrentFrontierCell2D;
use super::dedup::ConcurrentDedupIndex;
use super::traits::ConcurrentEdgeStore;

/// Concurrent counterpart of [`crate::stores::bi2d::Bi2D`]: the store
/// behind parallel BI-Topo.
pub struct Bi2DConcurrent {
    out_cells: Vec<ConcurrentFrontierCell2D>,
    in_cells: Vec<ConcurrentFrontierCell2D>,
    dedup: ConcurrentDedupIndex,
    label_count: usize,
}

impl Bi2DConcurrent {
    pub fn new(vertex_count: usize, label_count: usize) -> Self {
        Bi2DConcurrent {
            out_cells: (0..vertex_count).map(|_| ConcurrentFrontierCell2D::new()).collect(),
            in_cells: (0..vertex_count).map(|_| ConcurrentFrontierCell2D::new()).collect(),
            dedup: ConcurrentDedupIndex::new(vertex_count, label_count),
            label_count,
        }
    }

    pub fn out_cell(&self, from: VertexId) -> &ConcurrentFrontierCell2D {
        &self.out_cells[from as usize]
    }

    pub fn in_cell(&self, to: VertexId) -> &ConcurrentFrontierCell2D {
        &self.in_cells[to as usize]
    }

    fn add_new(&self, from: VertexId, to: VertexId, label: LabelId) {
        if self.dedup.insert(from, label, to) {
            self.out_cells[from as usize].push_new(label, to);
            self.in_cells[to as usize].push_new(label, from);
        }
    }
}

impl ConcurrentEdgeStore for Bi2DConcurrent {
    fn vertex_count(&self) -> usize {
        self.out_cells.len()
    }

    fn label_count(&self) -> usize {
        self.label_count
    }

    fn add_initial_edges(&mut self, edges: &[Edge]) {
        for e in edges {
            self.add_new(e.from, e.to, e.label);
        }
    }

    fn add_self_edge(&self, from: VertexId, to: VertexId, label: u32) {
        self.add_new(from, to, label);
    }

    fn check_and_add(&self, from: VertexId, to: VertexId, label: u32) -> bool {
        if self.dedup.insert(from, label, to) {
            self.out_cells[from as usize].push_pending(label, to);
            self.in_cells[to as usize].push_pending(label, from);
            true
        } else {
            false
        }
    }

    fn commit(&mut self) {
        for cell in &mut self.out_cells {
            cell.commit();
        }
        for cell in &mut self.in_cells {
            cell.commit();
        }
    }

    fn edge_count(&self) -> usize {
        self.dedup.len()
    }

    fn to_out_form(&self) -> DedupIndex {
        self.dedup.to_dedup_index(self.vertex_count(), self.label_count())
    }
}

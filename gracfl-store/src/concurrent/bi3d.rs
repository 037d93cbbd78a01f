use gracfl_grammar::LabelId;
use gracfl_graph::{Edge, VertexId};

use crate::dedup::DedupIndex;

use super::cell::ConcurrentFrontierCell3D;
use super::dedup::ConcurrentDedupIndex;
use super::traits::ConcurrentEdgeStore;

/// Concurrent counterpart of [`crate::stores::bi3d::Bi3D`]: the store
/// behind parallel BI-Gram. Shares one [`ConcurrentDedupIndex`] between
/// two cell grids, pushed in lockstep exactly as the serial version does,
/// just with every write going through the thread-safe primitives.
pub struct Bi3DConcurrent {
    out_cells: Vec<Vec<ConcurrentFrontierCell3D>>,
    in_cells: Vec<Vec<ConcurrentFrontierCell3D>>,
    dedup: ConcurrentDedupIndex,
    label_count: usize,
}

impl Bi3DConcurrent {
    pub fn new(vertex_count: usize, label_count: usize) -> Self {
        Bi3DConcurrent {
            out_cells: (0..vertex_count)
                .map(|_| (0..label_count).map(|_| ConcurrentFrontierCell3D::new()).collect())
                .collect(),
            in_cells: (0..vertex_count)
                .map(|_| (0..label_count).map(|_| ConcurrentFrontierCell3D::new()).collect())
                .collect(),
            dedup: ConcurrentDedupIndex::new(vertex_count, label_count),
            label_count,
        }
    }

    pub fn out_cell(&self, from: VertexId, label: LabelId) -> &ConcurrentFrontierCell3D {
        &self.out_cells[from as usize][label as usize]
    }

    pub fn in_cell(&self, to: VertexId, label: LabelId) -> &ConcurrentFrontierCell3D {
        &self.in_cells[to as usize][label as usize]
    }

    fn add_new(&self, from: VertexId, to: VertexId, label: LabelId) {
        if self.dedup.insert(from, label, to) {
            self.out_cells[from as usize][label as usize].push_new(to);
            self.in_cells[to as usize][label as usize].push_new(from);
        }
    }
}

impl ConcurrentEdgeStore for Bi3DConcurrent {
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
            self.out_cells[from as usize][label as usize].push_pending(to);
            self.in_cells[to as usize][label as usize].push_pending(from);
            true
        } else {
            false
        }
    }

    fn commit(&mut self) {
        for row in &mut self.out_cells {
            for cell in row {
                cell.commit();
            }
        }
        for row in &mut self.in_cells {
            for cell in row {
                cell.commit();
            }
        }
    }

    fn edge_count(&self) -> usize {
        self.dedup.len()
    }

    fn to_out_form(&self) -> DedupIndex {
        self.dedup.to_dedup_index(self.vertex_count(), self.label_count())
    }
}

use gracfl_grammar::LabelId;
use gracfl_graph::VertexId;

use super::cell::ConcurrentFrontierCell2D;
use super::dedup::ConcurrentDedupIndex;

/// Concurrent counterpart of [`crate::stores::grid2d::Grid2D`].
pub(crate) struct Grid2D {
    cells: Vec<ConcurrentFrontierCell2D>,
    dedup: ConcurrentDedupIndex,
    label_count: usize,
}

impl Grid2D {
    pub fn new(vertex_count: usize, label_count: usize) -> Self {
        Grid2D {
            cells: (0..vertex_count).map(|_| ConcurrentFrontierCell2D::new()).collect(),
            dedup: ConcurrentDedupIndex::new(vertex_count, label_count),
            label_count,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.cells.len()
    }

    pub fn label_count(&self) -> usize {
        self.label_count
    }

    pub fn cell(&self, key: VertexId) -> &ConcurrentFrontierCell2D {
        &self.cells[key as usize]
    }

    pub fn add_new(&self, key: VertexId, label: LabelId, peer: VertexId) {
        if self.dedup.insert(key, label, peer) {
            self.cells[key as usize].push_new(label, peer);
        }
    }

    pub fn check_and_add(&self, key: VertexId, label: LabelId, peer: VertexId) -> bool {
        if self.dedup.insert(key, label, peer) {
            self.cells[key as usize].push_pending(label, peer);
            true
        } else {
            false
        }
    }

    pub fn commit(&mut self) {
        for cell in &mut self.cells {
            cell.commit();
        }
    }

    pub fn edge_count(&self) -> usize {
        self.dedup.len()
    }

    pub fn dedup(&self) -> &ConcurrentDedupIndex {
        &self.dedup
    }
}

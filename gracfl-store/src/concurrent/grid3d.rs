use gracfl_grammar::LabelId;
use gracfl_graph::VertexId;

use super::cell::ConcurrentFrontierCell3D;
use super::dedup::ConcurrentDedupIndex;

/// Concurrent counterpart of [`crate::stores::grid3d::Grid3D`].
pub(crate) struct Grid3D {
    cells: Vec<Vec<ConcurrentFrontierCell3D>>,
    dedup: ConcurrentDedupIndex,
    label_count: usize,
}

impl Grid3D {
    pub fn new(vertex_count: usize, label_count: usize) -> Self {
        Grid3D {
            cells: (0..vertex_count)
                .map(|_| (0..label_count).map(|_| ConcurrentFrontierCell3D::new()).collect())
                .collect(),
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

    pub fn cell(&self, key: VertexId, label: LabelId) -> &ConcurrentFrontierCell3D {
        &self.cells[key as usize][label as usize]
    }

    pub fn add_new(&self, key: VertexId, label: LabelId, peer: VertexId) {
        if self.dedup.insert(key, label, peer) {
            self.cells[key as usize][label as usize].push_new(peer);
        }
    }

    /// Sweep-time insert, safe to call from any worker thread. The caller
    /// reduces the returned flag into its own terminate tracking.
    pub fn check_and_add(&self, key: VertexId, label: LabelId, peer: VertexId) -> bool {
        if self.dedup.insert(key, label, peer) {
            self.cells[key as usize][label as usize].push_pending(peer);
            true
        } else {
            false
        }
    }

    pub fn commit(&mut self) {
        for row in &mut self.cells {
            for cell in row {
                cell.commit();
            }
        }
    }

    pub fn edge_count(&self) -> usize {
        self.dedup.len()
    }

    pub fn dedup(&self) -> &ConcurrentDedupIndex {
        &self.dedup
    }
}

use gracfl_grammar::LabelId;
use gracfl_graph::VertexId;

use crate::cell::FrontierCell2D;
use crate::dedup::DedupIndex;

/// The 2D analogue of [`super::grid3d::Grid3D`]: one [`FrontierCell2D`]
/// per key vertex (labels stored inline) plus the same `[key][label]`
/// dedup index shape the 3D grid uses. Only the frontier's layout
/// changes between the two partitioning schemes; the dedup index is
/// identical.
#[derive(Debug, Clone)]
pub(crate) struct Grid2D {
    cells: Vec<FrontierCell2D>,
    dedup: DedupIndex,
    label_count: usize,
}

impl Grid2D {
    pub fn new(vertex_count: usize, label_count: usize) -> Self {
        Grid2D {
            cells: (0..vertex_count).map(|_| FrontierCell2D::new()).collect(),
            dedup: DedupIndex::new(vertex_count, label_count),
            label_count,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.cells.len()
    }

    pub fn label_count(&self) -> usize {
        self.label_count
    }

    pub fn cell(&self, key: VertexId) -> &FrontierCell2D {
        &self.cells[key as usize]
    }

    pub fn add_new(&mut self, key: VertexId, label: LabelId, peer: VertexId) {
        if self.dedup.insert(key, label, peer) {
            self.cells[key as usize].push_new(label, peer);
        }
    }

    pub fn check_and_add(
        &mut self,
        key: VertexId,
        label: LabelId,
        peer: VertexId,
        terminate: &mut bool,
    ) -> bool {
        if self.dedup.insert(key, label, peer) {
            self.cells[key as usize].push_pending(label, peer);
            *terminate = false;
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

    pub fn dedup(&self) -> &DedupIndex {
        &self.dedup
    }
}

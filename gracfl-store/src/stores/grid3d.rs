use gracfl_grammar::LabelId;
use gracfl_graph::VertexId;

use crate::cell::FrontierCell3D;
use crate::dedup::DedupIndex;

/// Shared machinery behind the single-direction 3D stores (`Out3D`,
/// `In3D`): a `[key][label] -> FrontierCell3D` grid plus the dedup index
/// that mirrors it. `Out3D` keys by `from` with peer `to`; `In3D` keys by
/// `to` with peer `from` — the grid itself is direction-agnostic.
#[derive(Debug, Clone)]
pub(crate) struct Grid3D {
    cells: Vec<Vec<FrontierCell3D>>,
    dedup: DedupIndex,
    label_count: usize,
}

impl Grid3D {
    pub fn new(vertex_count: usize, label_count: usize) -> Self {
        Grid3D {
            cells: (0..vertex_count)
                .map(|_| (0..label_count).map(|_| FrontierCell3D::new()).collect())
                .collect(),
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

    pub fn cell(&self, key: VertexId, label: LabelId) -> &FrontierCell3D {
        &self.cells[key as usize][label as usize]
    }

    /// Seeds an edge considered "new" relative to the empty old set:
    /// initial edges and self-edges both use this path. Deduplicates on
    /// insert (see DESIGN.md's resolution of the initial-edge-dedup open
    /// question): a duplicate is silently absorbed into the existing
    /// dedup entry without a second frontier append.
    pub fn add_new(&mut self, key: VertexId, label: LabelId, peer: VertexId) {
        if self.dedup.insert(key, label, peer) {
            self.cells[key as usize][label as usize].push_new(peer);
        }
    }

    /// The sweep-time insert: pending until the next commit, clears
    /// `terminate` on first insertion of this edge.
    pub fn check_and_add(
        &mut self,
        key: VertexId,
        label: LabelId,
        peer: VertexId,
        terminate: &mut bool,
    ) -> bool {
        if self.dedup.insert(key, label, peer) {
            self.cells[key as usize][label as usize].push_pending(peer);
            *terminate = false;
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

    pub fn dedup(&self) -> &DedupIndex {
        &self.dedup
    }
}

use gracfl_grammar::LabelId;
use gracfl_graph::{Edge, VertexId};

use crate::cell::FrontierCell2D;
use crate::dedup::DedupIndex;
use crate::traits::EdgeStore;

/// Both directions, partitioned by vertex with the label carried inline
/// in the frontier cell — the store behind BI-Topo.
///
/// Mirrors [`super::bi3d::Bi3D`]'s shape one dimension down: a single
/// dedup index keyed `(from, label) -> {to}` backs two cell vectors,
/// `out_cells[from]` and `in_cells[to]`, updated together on every
/// insertion.
#[derive(Debug, Clone)]
pub struct Bi2D {
    out_cells: Vec<FrontierCell2D>,
    in_cells: Vec<FrontierCell2D>,
    dedup: DedupIndex,
    label_count: usize,
}

impl Bi2D {
    pub fn new(vertex_count: usize, label_count: usize) -> Self {
        Bi2D {
            out_cells: (0..vertex_count).map(|_| FrontierCell2D::new()).collect(),
            in_cells: (0..vertex_count).map(|_| FrontierCell2D::new()).collect(),
            dedup: DedupIndex::new(vertex_count, label_count),
            label_count,
        }
    }

    pub fn out_cell(&self, from: VertexId) -> &FrontierCell2D {
        &self.out_cells[from as usize]
    }

    pub fn in_cell(&self, to: VertexId) -> &FrontierCell2D {
        &self.in_cells[to as usize]
    }

    fn add_new(&mut self, from: VertexId, to: VertexId, label: LabelId) {
        if self.dedup.insert(from, label, to) {
            self.out_cells[from as usize].push_new(label, to);
            self.in_cells[to as usize].push_new(label, from);
        }
    }
}

impl EdgeStore for Bi2D {
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

    fn add_self_edge(&mut self, from: VertexId, to: VertexId, label: u32) {
        self.add_new(from, to, label);
    }

    fn check_and_add(&mut self, from: VertexId, to: VertexId, label: u32, terminate: &mut bool) -> bool {
        if self.dedup.insert(from, label, to) {
            self.out_cells[from as usize].push_pending(label, to);
            self.in_cells[to as usize].push_pending(label, from);
            *terminate = false;
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
        self.dedup.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_lands_in_both_cell_vectors() {
        let mut store = Bi2D::new(3, 2);
        store.add_initial_edges(&[Edge { from: 0, to: 2, label: 1 }]);

        assert_eq!(store.out_cell(0).old_and_new(), &[(1, 2)]);
        assert_eq!(store.in_cell(2).old_and_new(), &[(1, 0)]);
        assert_eq!(store.edge_count(), 1);
    }
}

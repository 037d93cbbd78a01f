use gracfl_grammar::LabelId;
use gracfl_graph::{Edge, VertexId};

use crate::cell::FrontierCell3D;
use crate::dedup::DedupIndex;
use crate::traits::EdgeStore;

/// Both directions, partitioned by `(from, label)` and `(to, label)` —
/// the store behind BI-Gram.
///
/// A single dedup index keyed `(from, label) -> {to}` backs both cell
/// grids: an insertion appends to the out-cell for `(from, label)` *and*
/// the in-cell for `(to, label)` in lockstep. There is only ever one
/// canonical edge set, recorded twice for fast traversal in either
/// direction.
#[derive(Debug, Clone)]
pub struct Bi3D {
    out_cells: Vec<Vec<FrontierCell3D>>,
    in_cells: Vec<Vec<FrontierCell3D>>,
    dedup: DedupIndex,
    label_count: usize,
}

impl Bi3D {
    pub fn new(vertex_count: usize, label_count: usize) -> Self {
        Bi3D {
            out_cells: (0..vertex_count)
                .map(|_| (0..label_count).map(|_| FrontierCell3D::new()).collect())
                .collect(),
            in_cells: (0..vertex_count)
                .map(|_| (0..label_count).map(|_| FrontierCell3D::new()).collect())
                .collect(),
            dedup: DedupIndex::new(vertex_count, label_count),
            label_count,
        }
    }

    pub fn out_cell(&self, from: VertexId, label: LabelId) -> &FrontierCell3D {
        &self.out_cells[from as usize][label as usize]
    }

    pub fn in_cell(&self, to: VertexId, label: LabelId) -> &FrontierCell3D {
        &self.in_cells[to as usize][label as usize]
    }

    fn add_new(&mut self, from: VertexId, to: VertexId, label: LabelId) {
        if self.dedup.insert(from, label, to) {
            self.out_cells[from as usize][label as usize].push_new(to);
            self.in_cells[to as usize][label as usize].push_new(from);
        }
    }
}

impl EdgeStore for Bi3D {
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
            self.out_cells[from as usize][label as usize].push_pending(to);
            self.in_cells[to as usize][label as usize].push_pending(from);
            *terminate = false;
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
        self.dedup.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_lands_in_both_cell_grids() {
        let mut store = Bi3D::new(3, 1);
        store.add_initial_edges(&[Edge { from: 0, to: 1, label: 0 }]);

        assert_eq!(store.out_cell(0, 0).old_and_new(), &[1]);
        assert_eq!(store.in_cell(1, 0).old_and_new(), &[0]);
        assert!(store.out_cell(1, 0).is_empty());
        assert_eq!(store.edge_count(), 1);
    }

    #[test]
    fn duplicate_edge_is_absorbed_by_the_shared_dedup() {
        let mut store = Bi3D::new(2, 1);
        let mut terminate = true;
        assert!(store.check_and_add(0, 1, 0, &mut terminate));
        assert!(!terminate);

        terminate = true;
        assert!(!store.check_and_add(0, 1, 0, &mut terminate));
        assert!(terminate);
        assert_eq!(store.edge_count(), 1);
    }
}

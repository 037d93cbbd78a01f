use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::RwLock;

use gracfl_grammar::LabelId;
use gracfl_graph::VertexId;

/// The concurrent counterpart of [`crate::cell::FrontierCell3D`]: an
/// append-only `items` vector behind a `RwLock` so multiple sweep threads
/// can push PENDING edges into the same cell while others read OLD/NEW,
/// plus atomic cursors so a reader never observes an `old_end`/`new_end`
/// torn write.
///
/// `commit` is the one operation the driver calls from a single thread,
/// between sweeps — it is not itself safe to race against `push_pending`.
#[derive(Debug, Default)]
pub struct ConcurrentFrontierCell3D {
    items: RwLock<Vec<VertexId>>,
    old_end: AtomicUsize,
    new_end: AtomicUsize,
}

impl ConcurrentFrontierCell3D {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_new(&self, v: VertexId) {
        let mut items = self.items.write();
        items.push(v);
        self.new_end.store(items.len(), Ordering::Relaxed);
    }

    /// Appends `v` from any sweep thread; leaves the cursors untouched so
    /// the edge stays PENDING until the next `commit`.
    pub fn push_pending(&self, v: VertexId) {
        self.items.write().push(v);
    }

    pub fn commit(&mut self) {
        let len = self.items.read().len();
        self.old_end.store(self.new_end.load(Ordering::Relaxed), Ordering::Relaxed);
        self.new_end.store(len, Ordering::Relaxed);
    }

    pub fn old(&self) -> Vec<VertexId> {
        let items = self.items.read();
        items[..self.old_end.load(Ordering::Relaxed)].to_vec()
    }

    pub fn new_(&self) -> Vec<VertexId> {
        let items = self.items.read();
        let old_end = self.old_end.load(Ordering::Relaxed);
        let new_end = self.new_end.load(Ordering::Relaxed);
        items[old_end..new_end].to_vec()
    }

    pub fn old_and_new(&self) -> Vec<VertexId> {
        let items = self.items.read();
        items[..self.new_end.load(Ordering::Relaxed)].to_vec()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The concurrent counterpart of [`crate::cell::FrontierCell2D`].
#[derive(Debug, Default)]
pub struct ConcurrentFrontierCell2D {
    items: RwLock<Vec<(LabelId, VertexId)>>,
    old_end: AtomicUsize,
    new_end: AtomicUsize,
}

impl ConcurrentFrontierCell2D {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_new(&self, label: LabelId, v: VertexId) {
        let mut items = self.items.write();
        items.push((label, v));
        self.new_end.store(items.len(), Ordering::Relaxed);
    }

    pub fn push_pending(&self, label: LabelId, v: VertexId) {
        self.items.write().push((label, v));
    }

    pub fn commit(&mut self) {
        let len = self.items.read().len();
        self.old_end.store(self.new_end.load(Ordering::Relaxed), Ordering::Relaxed);
        self.new_end.store(len, Ordering::Relaxed);
    }

    pub fn old(&self) -> Vec<(LabelId, VertexId)> {
        let items = self.items.read();
        items[..self.old_end.load(Ordering::Relaxed)].to_vec()
    }

    pub fn new_(&self) -> Vec<(LabelId, VertexId)> {
        let items = self.items.read();
        let old_end = self.old_end.load(Ordering::Relaxed);
        let new_end = self.new_end.load(Ordering::Relaxed);
        items[old_end..new_end].to_vec()
    }

    pub fn old_and_new(&self) -> Vec<(LabelId, VertexId)> {
        let items = self.items.read();
        items[..self.new_end.load(Ordering::Relaxed)].to_vec()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_advances_cursors_like_the_serial_cell() {
        let mut cell = ConcurrentFrontierCell3D::new();
        cell.push_new(1);
        cell.push_new(2);
        assert_eq!(cell.old(), Vec::<VertexId>::new());
        assert_eq!(cell.new_(), vec![1, 2]);

        cell.commit();
        assert_eq!(cell.old(), vec![1, 2]);
        assert!(cell.new_().is_empty());

        cell.push_pending(3);
        assert!(cell.new_().is_empty());
        assert_eq!(cell.old(), vec![1, 2]);

        cell.commit();
        assert_eq!(cell.old(), vec![1, 2]);
        assert_eq!(cell.new_(), vec![3]);
    }
}

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Bidirectional mapping between caller-supplied vertex labels and the
/// dense indices used by the engines.
///
/// Indices are assigned by first appearance, so for a fixed edge list the
/// numbering is deterministic and independent of hash iteration order.
#[derive(Debug, Clone, Default)]
pub struct VertexLabels<V> {
    index: FxHashMap<V, usize>,
    labels: Vec<V>,
}

impl<V> VertexLabels<V>
where
    V: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            index: FxHashMap::default(),
            labels: Vec::new(),
        }
    }

    /// Returns the index of `label`, assigning the next free index on
    /// first appearance.
    pub fn intern(&mut self, label: V) -> usize {
        use std::collections::hash_map::Entry;

        match self.index.entry(label) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let index = self.labels.len();
                self.labels.push(entry.key().clone());
                entry.insert(index);
                index
            }
        }
    }

    /// Returns the index previously assigned to `label`, if any.
    #[inline]
    pub fn index_of(&self, label: &V) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Returns the label behind a dense index.
    ///
    /// # Panics
    ///
    /// Panics if `index` was never assigned.
    #[inline]
    pub fn label(&self, index: usize) -> &V {
        &self.labels[index]
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterator over all labels in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.labels.iter()
    }
}

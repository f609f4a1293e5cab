use fxhash::FxHashMap;

use super::coords::TileCoords;

/// Index hash table mapping tile coordinates onto `[0, size)`.
///
/// Coordinates receive sequential indices in first-seen order until the table
/// holds `size` entries. After that, unknown coordinates fall back to a raw
/// hash of the record modulo `size`, so distinct tiles may share an index.
///
/// # Invariants
///
/// - An assigned index never changes for the lifetime of the table
/// - `count() <= size()`
///
/// # Examples
///
/// ```
/// use dynatile::tiles::{IndexHashTable, TileCoords};
///
/// let mut table = IndexHashTable::new(2);
/// let a = TileCoords::new(0, vec![1], vec![]);
/// let b = TileCoords::new(0, vec![2], vec![]);
/// assert_eq!(table.get_or_assign(&a, false), Some(0));
/// assert_eq!(table.get_or_assign(&b, false), Some(1));
/// assert_eq!(table.get_or_assign(&a, true), Some(0));
/// assert!(table.is_full());
/// ```
#[derive(Debug, Clone)]
pub struct IndexHashTable {
    size: usize,
    overflow_count: u64,
    indices: FxHashMap<TileCoords, usize>,
}

impl IndexHashTable {
    /// Creates an empty table with room for `size` distinct tiles.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            overflow_count: 0,
            indices: FxHashMap::default(),
        }
    }

    /// Capacity fixed at construction.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of assigned indices.
    pub fn count(&self) -> usize {
        self.indices.len()
    }

    pub fn is_full(&self) -> bool {
        self.indices.len() >= self.size
    }

    /// Number of lookups answered with a collision index.
    pub fn overflow_count(&self) -> u64 {
        self.overflow_count
    }

    /// Returns the index for `coords`, assigning one when allowed.
    ///
    /// Returns `None` when `read_only` is set and the coordinates have never
    /// been seen, or when the table was created with a size of zero.
    pub fn get_or_assign(&mut self, coords: &TileCoords, read_only: bool) -> Option<usize> {
        if let Some(&index) = self.indices.get(coords) {
            return Some(index);
        }
        if read_only {
            return None;
        }
        if self.is_full() {
            if self.overflow_count == 0 {
                log::warn!(
                    "index hash table full ({} entries), starting to allow collisions",
                    self.size
                );
            }
            self.overflow_count += 1;
            return coords.hash_index(self.size);
        }
        let index = self.indices.len();
        self.indices.insert(coords.clone(), index);
        Some(index)
    }
}

use glam::IVec2;

use crate::grid::{Cell, CellKey};
use crate::types::GridExtents;

/// Lazily populated arena of cells indexed by [`CellKey`].
///
/// Slots are allocated for the whole extent up front but stay empty until a
/// coordinate is first requested. A cell keeps its slot until [`clear`].
///
/// [`clear`]: NodeCache::clear
#[derive(Debug, Clone)]
pub struct NodeCache {
    extents: GridExtents,
    slots: Vec<Option<Cell>>,
    len: usize,
}

impl NodeCache {
    pub fn new(extents: GridExtents) -> Self {
        Self {
            extents,
            slots: vec![None; extents.cell_count()],
            len: 0,
        }
    }

    #[inline]
    pub fn extents(&self) -> &GridExtents {
        &self.extents
    }

    /// Number of materialized cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Key for `coord`, or `None` outside the extents.
    #[inline]
    pub fn key_of(&self, coord: IVec2) -> Option<CellKey> {
        self.extents
            .contains(coord)
            .then(|| CellKey::pack(coord, self.extents.cols()))
    }

    #[inline]
    pub fn get(&self, key: CellKey) -> Option<&Cell> {
        self.slots.get(key.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub fn get_mut(&mut self, key: CellKey) -> Option<&mut Cell> {
        self.slots.get_mut(key.index()).and_then(Option::as_mut)
    }

    pub fn get_at(&self, coord: IVec2) -> Option<&Cell> {
        self.key_of(coord).and_then(|key| self.get(key))
    }

    /// Return the key of the cell at `coord`, inserting a default cell first
    /// if none exists. `None` outside the extents.
    pub fn get_or_create(&mut self, coord: IVec2) -> Option<CellKey> {
        let key = self.key_of(coord)?;
        let slot = &mut self.slots[key.index()];
        if slot.is_none() {
            *slot = Some(Cell::new(coord, key));
            self.len += 1;
        }
        Some(key)
    }

    /// Like [`get_or_create`](NodeCache::get_or_create) but hands back the cell.
    pub fn get_or_create_mut(&mut self, coord: IVec2) -> Option<&mut Cell> {
        let key = self.get_or_create(coord)?;
        self.slots[key.index()].as_mut()
    }

    /// Materialized cells in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.slots.iter().filter_map(Option::as_ref)
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache() -> NodeCache {
        NodeCache::new(GridExtents {
            max: IVec2::new(4, 3),
        })
    }

    #[test]
    fn get_or_create_is_idempotent() {
        let mut cache = cache();
        let a = cache.get_or_create(IVec2::new(2, 1)).unwrap();
        cache.get_mut(a).unwrap().set_destination_cost(3.0);
        let b = cache.get_or_create(IVec2::new(2, 1)).unwrap();

        assert_eq!(a, b);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(b).unwrap().destination_cost(), 3.0);
    }

    #[test]
    fn lookups_do_not_materialize() {
        let cache = cache();
        assert!(cache.get_at(IVec2::new(1, 1)).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn outside_extents_is_rejected() {
        let mut cache = cache();
        assert!(cache.get_or_create(IVec2::new(5, 0)).is_none());
        assert!(cache.get_or_create(IVec2::new(-1, 0)).is_none());
        assert!(cache.get_or_create(IVec2::new(4, 3)).is_some());
    }

    #[test]
    fn clear_empties_cache() {
        let mut cache = cache();
        let key = cache.get_or_create(IVec2::new(0, 0)).unwrap();
        cache.clear();
        assert!(cache.get(key).is_none());
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.get_or_create(IVec2::new(0, 0)), Some(key));
    }

    #[test]
    fn iter_yields_in_key_order() {
        let mut cache = cache();
        cache.get_or_create(IVec2::new(3, 2));
        cache.get_or_create(IVec2::new(0, 0));
        cache.get_or_create(IVec2::new(1, 2));
        let coords: Vec<IVec2> = cache.iter().map(Cell::coord).collect();
        assert_eq!(
            coords,
            vec![IVec2::new(0, 0), IVec2::new(1, 2), IVec2::new(3, 2)]
        );
    }
}

//! Sparse voxel storage for one layer variation

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::position::VoxelPos;
use super::voxel::Voxel;

/// State of one position before and after an edit (`None` = empty)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoxelChange {
    pub pos: VoxelPos,
    pub before: Option<Voxel>,
    pub after: Option<Voxel>,
}

/// Sparse mapping from position to voxel.
///
/// Unbounded address space, no range validation. Iteration is
/// lexicographic on (x, y, z).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VoxelStore {
    voxels: BTreeMap<VoxelPos, Voxel>,
}

impl VoxelStore {
    /// Create an empty store
    pub const fn new() -> Self {
        Self { voxels: BTreeMap::new() }
    }

    /// Insert or overwrite the voxel at `pos`
    pub fn set(&mut self, pos: VoxelPos, voxel: Voxel) {
        self.voxels.insert(pos, voxel);
    }

    /// Remove the voxel at `pos`; no-op if absent
    pub fn erase(&mut self, pos: VoxelPos) {
        self.voxels.remove(&pos);
    }

    /// Set `Some` or erase `None`, the form command replay uses
    pub fn write(&mut self, pos: VoxelPos, voxel: Option<Voxel>) {
        match voxel {
            Some(voxel) => self.set(pos, voxel),
            None => self.erase(pos),
        }
    }

    pub fn get(&self, pos: VoxelPos) -> Option<Voxel> {
        self.voxels.get(&pos).copied()
    }

    pub fn contains(&self, pos: VoxelPos) -> bool {
        self.voxels.contains_key(&pos)
    }

    /// Iterate voxels in lexicographic position order
    pub fn iter(&self) -> impl Iterator<Item = (VoxelPos, Voxel)> + '_ {
        self.voxels.iter().map(|(&pos, &voxel)| (pos, voxel))
    }

    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    pub fn clear(&mut self) {
        self.voxels.clear();
    }
}

impl FromIterator<(VoxelPos, Voxel)> for VoxelStore {
    fn from_iter<I: IntoIterator<Item = (VoxelPos, Voxel)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (pos, voxel) in iter {
            store.set(pos, voxel);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::Color;

    fn red() -> Voxel {
        Voxel::new(Color::rgb(255, 0, 0))
    }

    #[test]
    fn test_set_get_erase() {
        let mut store = VoxelStore::new();
        let pos = VoxelPos::new(1, -2, 3);
        assert_eq!(store.get(pos), None);

        store.set(pos, red());
        assert_eq!(store.get(pos), Some(red()));

        store.erase(pos);
        assert_eq!(store.get(pos), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = VoxelStore::new();
        let pos = VoxelPos::ORIGIN;
        store.set(pos, red());
        store.set(pos, Voxel::new(Color::BLACK));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(pos), Some(Voxel::new(Color::BLACK)));
    }

    #[test]
    fn test_idempotent_edits() {
        let mut store = VoxelStore::new();
        store.set(VoxelPos::ORIGIN, red());
        let before = store.clone();

        store.erase(VoxelPos::new(9, 9, 9));
        assert_eq!(store, before);

        store.set(VoxelPos::ORIGIN, red());
        assert_eq!(store, before);
    }

    #[test]
    fn test_write() {
        let mut store = VoxelStore::new();
        store.write(VoxelPos::ORIGIN, Some(red()));
        assert!(store.contains(VoxelPos::ORIGIN));
        store.write(VoxelPos::ORIGIN, None);
        assert!(!store.contains(VoxelPos::ORIGIN));
    }

    #[test]
    fn test_iteration_order() {
        let store: VoxelStore = [
            (VoxelPos::new(0, 1, 0), red()),
            (VoxelPos::new(-5, 0, 0), red()),
            (VoxelPos::new(0, 0, 7), red()),
        ].into_iter().collect();

        let order: Vec<_> = store.iter().map(|(pos, _)| pos).collect();
        assert_eq!(order, vec![
            VoxelPos::new(-5, 0, 0),
            VoxelPos::new(0, 0, 7),
            VoxelPos::new(0, 1, 0),
        ]);
    }
}

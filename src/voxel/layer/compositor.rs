//! Composite view of all active layers.
//!
//! Flattens the active variation of every layer type into one layer-tagged
//! map that every read-only query (rendering, picking) works from.

use std::collections::BTreeMap;

use crate::voxel::position::VoxelPos;
use crate::voxel::store::VoxelStore;
use crate::voxel::voxel::LayeredVoxel;

/// Union of the active layers' stores, later layers winning on collisions.
#[derive(Clone, Debug, Default)]
pub struct CompositeView {
    /// Merged voxels tagged with their layer index
    voxels: BTreeMap<VoxelPos, LayeredVoxel>,
    /// Layer the user is hovering in the layer list
    highlighted_layer: Option<usize>,
}

impl CompositeView {
    /// Create an empty view
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute from the active layers, in active-layer index order.
    pub fn rebuild<'a>(&mut self, active_layers: impl IntoIterator<Item = &'a VoxelStore>) {
        self.voxels.clear();
        for (layer_index, store) in active_layers.into_iter().enumerate() {
            for (pos, voxel) in store.iter() {
                self.voxels.insert(pos, LayeredVoxel { voxel, layer_index });
            }
        }
        log::trace!("Composite rebuilt: {} voxels", self.voxels.len());
    }

    /// Full merged mapping
    pub fn voxels(&self) -> &BTreeMap<VoxelPos, LayeredVoxel> {
        &self.voxels
    }

    pub fn get(&self, pos: VoxelPos) -> Option<&LayeredVoxel> {
        self.voxels.get(&pos)
    }

    pub fn contains(&self, pos: VoxelPos) -> bool {
        self.voxels.contains_key(&pos)
    }

    /// Iterate positions in lexicographic order
    pub fn positions(&self) -> impl Iterator<Item = VoxelPos> + '_ {
        self.voxels.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// Layer hovered in the layer list, advisory for the renderer
    pub fn highlighted_layer(&self) -> Option<usize> {
        self.highlighted_layer
    }

    pub fn set_highlighted_layer(&mut self, layer: Option<usize>) {
        self.highlighted_layer = layer;
    }
}

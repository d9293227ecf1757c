//! Symmetric editing across the x = -0.5 plane.
//!
//! The mirror of `(x, y, z)` is `(-x - 1, y, z)`, so the plane sits between
//! x = -1 and x = 0 and no position is its own mirror.

use super::position::VoxelPos;
use super::store::{VoxelChange, VoxelStore};
use super::voxel::Voxel;

/// Mirror image of a position
pub fn mirror(pos: VoxelPos) -> VoxelPos {
    // !x == -x - 1, defined for the whole i32 range
    VoxelPos::new(!pos.x, pos.y, pos.z)
}

/// Expands one edit into itself plus its mirror image when enabled.
///
/// Does not record history; the caller wraps the planned changes in a
/// single command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MirrorPolicy {
    pub enabled: bool,
}

impl MirrorPolicy {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Positions an edit at `pos` touches: `pos`, then its mirror when enabled
    pub fn targets(&self, pos: VoxelPos) -> Vec<VoxelPos> {
        if self.enabled {
            vec![pos, mirror(pos)]
        } else {
            vec![pos]
        }
    }

    /// Before/after pairs for writing `voxel` (`None` = erase) at every target.
    ///
    /// Targets already in the requested state are left out, so an empty
    /// result means the edit would change nothing.
    pub fn plan(&self, store: &VoxelStore, pos: VoxelPos, voxel: Option<Voxel>) -> Vec<VoxelChange> {
        self.targets(pos)
            .into_iter()
            .map(|target| VoxelChange {
                pos: target,
                before: store.get(target),
                after: voxel,
            })
            .filter(|change| change.before != change.after)
            .collect()
    }
}

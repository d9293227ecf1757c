//! Edit commands.
//!
//! Commands are plain values holding the before/after data of one user
//! action. Applying or reverting is a pure function of that data against
//! an [`EditState`], so commands can be inspected and serialized.

use serde::{Deserialize, Serialize};

use crate::voxel::VoxelChange;

use super::history::Reversible;
use super::state::EditState;

/// Type of edit operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op")]
pub enum EditCommand {
    /// Place or erase voxels in one active layer (both mirror halves at once)
    Paint {
        layer: usize,
        changes: Vec<VoxelChange>,
    },
    /// Toggle symmetric editing
    SetSymmetric { before: bool, after: bool },
    /// Change the layer receiving edits
    SelectLayer { before: usize, after: usize },
    /// Swap the active variation of a layer type
    SelectVariation {
        layer: usize,
        before: String,
        after: String,
    },
}

impl EditCommand {
    /// Number of voxel positions this command writes
    pub fn voxel_count(&self) -> usize {
        match self {
            EditCommand::Paint { changes, .. } => changes.len(),
            _ => 0,
        }
    }
}

impl Reversible<EditState> for EditCommand {
    fn apply(&self, state: &mut EditState) {
        match self {
            EditCommand::Paint { layer, changes } => {
                if let Some(target) = state.active_layer_mut(*layer) {
                    for change in changes {
                        target.store.write(change.pos, change.after);
                    }
                }
            }
            EditCommand::SetSymmetric { after, .. } => state.mirror.enabled = *after,
            EditCommand::SelectLayer { after, .. } => state.current_layer = *after,
            EditCommand::SelectVariation { layer, after, .. } => {
                state.set_active_variation(*layer, after);
            }
        }
    }

    fn revert(&self, state: &mut EditState) {
        match self {
            EditCommand::Paint { layer, changes } => {
                if let Some(target) = state.active_layer_mut(*layer) {
                    for change in changes.iter().rev() {
                        target.store.write(change.pos, change.before);
                    }
                }
            }
            EditCommand::SetSymmetric { before, .. } => state.mirror.enabled = *before,
            EditCommand::SelectLayer { before, .. } => state.current_layer = *before,
            EditCommand::SelectVariation { layer, before, .. } => {
                state.set_active_variation(*layer, before);
            }
        }
    }
}

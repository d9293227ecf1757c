//! Voxel edit system with command-based undo/redo.
//!
//! Every visible mutation is an [`EditCommand`] executed through a
//! [`CommandStack`], so it can be undone and redone.

pub mod command;
pub mod history;
pub mod state;

pub use command::EditCommand;
pub use crate::voxel::VoxelChange;
pub use history::{CommandStack, Reversible};
pub use state::EditState;

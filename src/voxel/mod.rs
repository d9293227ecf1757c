//! Voxel data structures and operations

pub mod voxel;
pub mod position;
pub mod store;
pub mod mirror;
pub mod layer;

pub use voxel::{Color, LayeredVoxel, Voxel};
pub use position::{Axis, VoxelPos};
pub use store::{VoxelChange, VoxelStore};
pub use mirror::{mirror, MirrorPolicy};
pub use layer::{CompositeView, Layer, LayerType, Model, DEFAULT_VARIATION};

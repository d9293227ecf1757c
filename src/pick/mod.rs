//! Picking: projections between 3D positions and 2D view cells, depth
//! resolution against the composite, and the view interaction state.

pub mod projection;
pub mod resolver;
pub mod view;
pub mod world;

pub use projection::{to_2d, to_3d, visible_axes};
pub use resolver::{is_visible, resolve};
pub use view::{OrthoView, ViewDirection};
pub use world::voxel_at_world;

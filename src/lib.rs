//! Rkvox - layered voxel model editing core

pub mod core;
pub mod voxel;
pub mod edit;
pub mod pick;
pub mod document;
pub mod editor;

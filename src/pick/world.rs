//! Picking in the free 3D view.
//!
//! The renderer unprojects the pointer to a world-space point on the
//! surface under it and reports which way the hit face points. The point
//! sits on a cell boundary, so it is snapped before being turned into a
//! voxel address.

use glam::{IVec3, Vec3};

use crate::voxel::VoxelPos;

/// Distance from an integer within which a coordinate snaps to it
pub const SNAP_EPSILON: f32 = 0.05;

fn snap(coord: f32) -> i32 {
    let nearest = coord.round();
    if (coord - nearest).abs() < SNAP_EPSILON {
        nearest as i32
    } else {
        coord.floor() as i32
    }
}

/// Voxel whose face was hit at world `point`.
///
/// `facing` is the hit face's outward axis vector. On a face pointing
/// toward +axis the snapped boundary belongs to the next cell, so those
/// components step back one.
pub fn voxel_at_world(point: Vec3, facing: IVec3) -> VoxelPos {
    let cell = IVec3::new(snap(point.x), snap(point.y), snap(point.z));
    VoxelPos::from(cell.wrapping_sub(facing.max(IVec3::ZERO).min(IVec3::ONE)))
}

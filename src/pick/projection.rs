//! Mapping between 3D positions and the 2D cells of the orthographic views.
//!
//! Each projection collapses one facing axis. The remaining two axes keep
//! the fixed order x, z, y: facing X gives (z, y), facing Y gives (x, z),
//! facing Z gives (x, y).

use glam::IVec2;

use crate::voxel::{Axis, VoxelPos};

/// The two visible axes of a projection, horizontal first
pub fn visible_axes(facing: Axis) -> [Axis; 2] {
    match facing {
        Axis::X => [Axis::Z, Axis::Y],
        Axis::Y => [Axis::X, Axis::Z],
        Axis::Z => [Axis::X, Axis::Y],
    }
}

/// Drop the facing coordinate
pub fn to_2d(pos: VoxelPos, facing: Axis) -> IVec2 {
    let [u, v] = visible_axes(facing);
    IVec2::new(pos[u], pos[v])
}

/// Inverse of [`to_2d`]; the facing coordinate becomes 0
pub fn to_3d(cell: IVec2, facing: Axis) -> VoxelPos {
    let [u, v] = visible_axes(facing);
    VoxelPos::ORIGIN.with(u, cell.x).with(v, cell.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_order() {
        assert_eq!(visible_axes(Axis::X), [Axis::Z, Axis::Y]);
        assert_eq!(visible_axes(Axis::Y), [Axis::X, Axis::Z]);
        assert_eq!(visible_axes(Axis::Z), [Axis::X, Axis::Y]);

        // Same as x, z, y with the facing axis skipped
        let order = [Axis::X, Axis::Z, Axis::Y];
        for facing in Axis::ALL {
            let expected: Vec<_> = order.into_iter().filter(|&a| a != facing).collect();
            assert_eq!(visible_axes(facing).to_vec(), expected);
        }
    }

    #[test]
    fn test_to_2d() {
        let pos = VoxelPos::new(1, 2, 3);
        assert_eq!(to_2d(pos, Axis::X), IVec2::new(3, 2));
        assert_eq!(to_2d(pos, Axis::Y), IVec2::new(1, 3));
        assert_eq!(to_2d(pos, Axis::Z), IVec2::new(1, 2));
    }

    #[test]
    fn test_to_3d_zeroes_facing_axis() {
        let pos = VoxelPos::new(-4, 5, 6);
        for facing in Axis::ALL {
            let back = to_3d(to_2d(pos, facing), facing);
            assert_eq!(back, pos.with(facing, 0));
        }
    }

    #[test]
    fn test_to_2d_inverts_to_3d() {
        let cell = IVec2::new(7, -3);
        for facing in Axis::ALL {
            assert_eq!(to_2d(to_3d(cell, facing), facing), cell);
        }
    }
}

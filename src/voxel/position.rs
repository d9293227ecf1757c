//! Integer voxel addresses and coordinate axes

use std::ops::{Index, IndexMut};

use glam::IVec3;
use serde::{Deserialize, Serialize};

/// Coordinate axis, also used as the facing axis of a projection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index (0=x, 1=y, 2=z)
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Axis for a component index
    pub fn from_index(index: usize) -> Option<Axis> {
        Axis::ALL.get(index).copied()
    }
}

/// Address of one unit cube.
///
/// Ordering is lexicographic on (x, y, z). Stores iterate in this order and
/// depth resolution scans in it, so results are reproducible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 3]", into = "[i32; 3]")]
pub struct VoxelPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelPos {
    pub const ORIGIN: VoxelPos = VoxelPos::new(0, 0, 0);

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Position shifted by `delta`, wrapping at the ends of the i32 range
    pub fn offset(self, delta: IVec3) -> Self {
        Self::new(
            self.x.wrapping_add(delta.x),
            self.y.wrapping_add(delta.y),
            self.z.wrapping_add(delta.z),
        )
    }

    /// Copy with one component replaced
    pub fn with(mut self, axis: Axis, value: i32) -> Self {
        self[axis] = value;
        self
    }

    pub fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Index<Axis> for VoxelPos {
    type Output = i32;

    fn index(&self, axis: Axis) -> &i32 {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl IndexMut<Axis> for VoxelPos {
    fn index_mut(&mut self, axis: Axis) -> &mut i32 {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

impl From<[i32; 3]> for VoxelPos {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<VoxelPos> for [i32; 3] {
    fn from(pos: VoxelPos) -> Self {
        pos.to_array()
    }
}

impl From<IVec3> for VoxelPos {
    fn from(v: IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<VoxelPos> for IVec3 {
    fn from(pos: VoxelPos) -> Self {
        IVec3::new(pos.x, pos.y, pos.z)
    }
}

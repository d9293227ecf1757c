//! Depth resolution: which occupied voxel is visible along a facing axis.

use crate::voxel::{Axis, CompositeView, VoxelPos};

/// Find the frontmost occupied position sharing `query`'s two non-facing
/// coordinates.
///
/// Candidates are ranked by `candidate[facing]`, negated when `reverse`
/// is set. Candidates are scanned in lexicographic (x, y, z) order and a
/// later candidate wins ties. Returns `query` unchanged when nothing lines up.
pub fn resolve(composite: &CompositeView, query: VoxelPos, facing: Axis, reverse: bool) -> VoxelPos {
    let sign = if reverse { -1 } else { 1 };
    let lines_up = |pos: &VoxelPos| {
        Axis::ALL
            .into_iter()
            .filter(|&axis| axis != facing)
            .all(|axis| pos[axis] == query[axis])
    };

    let mut best: Option<(i64, VoxelPos)> = None;
    for pos in composite.positions().filter(lines_up) {
        let value = sign * i64::from(pos[facing]);
        if best.is_none_or(|(best_value, _)| value >= best_value) {
            best = Some((value, pos));
        }
    }

    best.map_or(query, |(_, pos)| pos)
}

/// True when `pos` is the voxel seen from its own line of sight, i.e. no
/// other occupied voxel in front of it hides it.
pub fn is_visible(composite: &CompositeView, pos: VoxelPos, facing: Axis, reverse: bool) -> bool {
    resolve(composite, pos, facing, reverse) == pos
}

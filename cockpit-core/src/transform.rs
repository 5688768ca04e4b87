//! Coordinate conversion from the host application's convention to the
//! engine's right-handed, Y-up convention.
//!
//! The host stores locations Z-up with the opposite handedness, so points
//! map through the axis permutation `(x, y, z) -> (x, z, -y)`. Orientations
//! go through the same permutation applied to the quaternion's vector part,
//! which keeps rotations and positions consistent: rotating a point and then
//! converting it gives the same result as converting both and rotating in
//! engine space.

use glam::{Mat4, Quat, Vec3};

/// Convert a host-space location into engine space.
pub fn export_location(loc: Vec3) -> [f32; 3] {
    [loc.x, loc.z, -loc.y]
}

/// Extract the rotation of a host-space world matrix and convert it into an
/// engine-space quaternion, laid out `[x, y, z, w]`.
///
/// Translation and scale are discarded. Degenerate matrices (zero scale,
/// shear) yield a meaningless quaternion; marker empties never carry those.
pub fn export_orient(matrix_world: &Mat4) -> [f32; 4] {
    let (_scale, rotation, _translation) = matrix_world.to_scale_rotation_translation();
    export_quat(rotation)
}

/// Remap a host-space rotation quaternion into engine space.
///
/// The vector part follows the same permutation as [`export_location`]; the
/// scalar part is unchanged.
pub fn export_quat(q: Quat) -> [f32; 4] {
    [q.x, q.z, -q.y, q.w]
}

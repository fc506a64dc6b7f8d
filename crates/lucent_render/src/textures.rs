//! Stock procedural textures.
//!
//! Plain functions with the [`TextureFn`](crate::TextureFn) signature,
//! ready to attach to a primitive.

use crate::material::Color;
use lucent_math::Vec3;

/// Unit checkerboard: alternating white and black one-unit squares.
pub fn checker(u: f32, v: f32) -> Color {
    if (u.floor() + v.floor()) as i64 % 2 == 0 {
        Vec3::ONE
    } else {
        Vec3::ZERO
    }
}

/// Red and off-white stripes along `u`, one unit wide.
pub fn stripes(u: f32, _v: f32) -> Color {
    if u.floor() as i64 % 2 == 0 {
        Vec3::new(0.8, 0.1, 0.1)
    } else {
        Vec3::splat(0.9)
    }
}

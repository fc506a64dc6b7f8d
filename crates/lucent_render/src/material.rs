//! Surface material kinds.

use lucent_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Procedural texture: maps surface (u, v) coordinates to an RGB color.
pub type TextureFn = fn(f32, f32) -> Color;

/// How a surface responds to light.
///
/// `Matte` gets diffuse plus ambient only; `Plastic` adds a white
/// specular highlight; `Metal` tints the highlight with the surface's
/// own color; `Mirror` discards local shading entirely in favor of a
/// reflected continuation ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Material {
    Matte,
    Plastic,
    Metal,
    Mirror,
}

//! Point light sources.

use crate::material::Color;
use lucent_math::Vec3;

/// A point light.
///
/// `intensity` is an unnormalized RGB vector carrying both color and
/// brightness; shading divides it by the squared distance to the light.
#[derive(Debug, Clone, Copy)]
pub struct Light {
    pub position: Vec3,
    pub intensity: Color,
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

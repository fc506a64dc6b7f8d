//! Scene: primitives plus lights, and the closest-hit query.

use crate::light::Light;
use crate::primitive::{Intersection, Primitive, Sphere};
use lucent_math::{Ray, Vec3};
use thiserror::Error;

/// Errors from the controlled scene-mutation entry points.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    #[error("no primitive at index {0}")]
    IndexOutOfBounds(usize),

    #[error("primitive at index {0} is not a sphere")]
    NotASphere(usize),
}

/// A collection of primitives and point lights.
///
/// Both lists iterate in insertion order, which keeps renders
/// reproducible; the closest-hit result itself does not depend on order
/// since the minimum distance wins.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    lights: Vec<Light>,
    primitives: Vec<Primitive>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a light source.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Add a primitive.
    pub fn add_primitive(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// The hit with the globally smallest distance among all primitives,
    /// or `None` when nothing is hit. Linear scan; there is no spatial
    /// index at this scene scale.
    pub fn closest_intersection(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let mut closest: Option<Intersection> = None;
        for primitive in &self.primitives {
            if let Some(hit) = primitive.intersect(ray) {
                match &closest {
                    Some(best) if best.distance <= hit.distance => {}
                    _ => closest = Some(hit),
                }
            }
        }
        closest
    }

    /// Resize the sphere at `index`.
    ///
    /// Intended for between-frame scene editing; must not run while a
    /// render pass is in flight.
    pub fn set_sphere_radius(&mut self, index: usize, radius: f32) -> Result<(), SceneError> {
        self.sphere_mut(index)?.set_radius(radius);
        Ok(())
    }

    /// Move the sphere at `index`.
    pub fn set_sphere_center(&mut self, index: usize, center: Vec3) -> Result<(), SceneError> {
        self.sphere_mut(index)?.set_center(center);
        Ok(())
    }

    fn sphere_mut(&mut self, index: usize) -> Result<&mut Sphere, SceneError> {
        match self.primitives.get_mut(index) {
            None => Err(SceneError::IndexOutOfBounds(index)),
            Some(Primitive::Sphere(sphere)) => Ok(sphere),
            Some(_) => Err(SceneError::NotASphere(index)),
        }
    }
}

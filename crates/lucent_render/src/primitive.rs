//! Geometric primitives and their ray intersection math.
//!
//! The three shapes live under one closed enum so shading can dispatch
//! with an exhaustive `match`. Degenerate geometry (parallel rays,
//! grazing and tangent hits) resolves to "no intersection", never an
//! error.

use crate::material::{Color, Material, TextureFn};
use lucent_math::{scalar, solve_quadratic, Ray, Roots, Vec3};
use std::cmp::Ordering;
use std::f32::consts::PI;

/// Result of a successful ray/primitive intersection.
///
/// Borrows the hit primitive from the scene. An intersection is consumed
/// within a single shading step and never outlives the scene it came
/// from; the borrow makes a hit-with-no-surface unrepresentable.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    /// Parameter t along the ray, always greater than zero.
    pub distance: f32,
    /// The primitive that was hit.
    pub primitive: &'a Primitive,
    /// Unit surface normal at the hit point.
    pub normal: Vec3,
    /// Resolved surface color, flat or sampled from a procedural texture.
    pub color: Color,
}

/// Shape-local intersection data before the owning primitive is attached.
struct SurfaceHit {
    distance: f32,
    normal: Vec3,
    color: Color,
}

/// An infinite plane given by `normal · p = distance`.
#[derive(Debug, Clone)]
pub struct Plane {
    normal: Vec3,
    distance: f32,
    // Orthonormal tangent basis, derived once for texture projection.
    tangent_u: Vec3,
    tangent_v: Vec3,
    color: Color,
    material: Material,
    texture: Option<TextureFn>,
}

impl Plane {
    /// Create a plane from a normal (normalized here) and the signed
    /// distance from the origin along that normal.
    pub fn new(normal: Vec3, distance_from_origin: f32, color: Color, material: Material) -> Self {
        let normal = normal.normalize();
        // Any axis not parallel to the normal anchors the tangent basis.
        let anchor = if normal.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
        let tangent_u = normal.cross(anchor).normalize();
        let tangent_v = normal.cross(tangent_u);

        Self {
            normal,
            distance: distance_from_origin,
            tangent_u,
            tangent_v,
            color,
            material,
            texture: None,
        }
    }

    /// Attach a procedural texture evaluated in the plane's tangent basis.
    pub fn with_texture(mut self, texture: TextureFn) -> Self {
        self.texture = Some(texture);
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    fn intersect(&self, ray: &Ray) -> Option<SurfaceHit> {
        let cos_angle = self.normal.dot(ray.direction());
        if scalar::is_zero(cos_angle) {
            // Ray runs parallel to the plane.
            return None;
        }

        let distance = (self.distance - self.normal.dot(ray.origin())) / cos_angle;
        if scalar::compare(distance, 0.0) != Ordering::Greater {
            // Behind the origin, or grazing the surface it started on.
            return None;
        }

        let color = match self.texture {
            Some(texture) => {
                let p = ray.at(distance);
                texture(p.dot(self.tangent_u), p.dot(self.tangent_v))
            }
            None => self.color,
        };

        Some(SurfaceHit {
            distance,
            normal: self.normal,
            color,
        })
    }
}

/// A sphere given by center and radius.
///
/// Center and radius stay editable between frames through the scene's
/// mutation entry points.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    color: Color,
    material: Material,
    texture: Option<TextureFn>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, color: Color, material: Material) -> Self {
        Self {
            center,
            radius,
            color,
            material,
            texture: None,
        }
    }

    /// Attach a procedural texture sampled in spherical coordinates.
    pub fn with_texture(mut self, texture: TextureFn) -> Self {
        self.texture = Some(texture);
        self
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub(crate) fn set_center(&mut self, center: Vec3) {
        self.center = center;
    }

    pub(crate) fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    /// Spherical UV coordinates for a point on the unit sphere.
    fn uv(normal: Vec3) -> (f32, f32) {
        let theta = (-normal.y).acos();
        let phi = (-normal.z).atan2(normal.x) + PI;
        (phi / (2.0 * PI), theta / PI)
    }

    fn intersect(&self, ray: &Ray) -> Option<SurfaceHit> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * ray.direction().dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let distance = match solve_quadratic(a, b, c) {
            // A single root means the ray grazes the surface tangentially;
            // tangent hits are discarded like every other grazing case.
            Roots::None | Roots::One(_) => return None,
            Roots::Two(t1, t2) => {
                if scalar::compare(t1, 0.0) == Ordering::Greater {
                    t1
                } else if scalar::compare(t2, 0.0) == Ordering::Greater {
                    t2
                } else {
                    return None;
                }
            }
        };

        let normal = (ray.at(distance) - self.center).normalize();
        let color = match self.texture {
            Some(texture) => {
                let (u, v) = Self::uv(normal);
                texture(u, v)
            }
            None => self.color,
        };

        Some(SurfaceHit {
            distance,
            normal,
            color,
        })
    }
}

/// A triangle given by three vertices.
#[derive(Debug, Clone)]
pub struct Triangle {
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    color: Color,
    material: Material,
    texture: Option<TextureFn>,
}

impl Triangle {
    /// Create a new triangle.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, color: Color, material: Material) -> Self {
        Self {
            v0,
            v1,
            v2,
            color,
            material,
            texture: None,
        }
    }

    /// Attach a procedural texture sampled at barycentric (u, v).
    pub fn with_texture(mut self, texture: TextureFn) -> Self {
        self.texture = Some(texture);
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Möller-Trumbore ray-triangle intersection.
    fn intersect(&self, ray: &Ray) -> Option<SurfaceHit> {
        let e1 = self.v1 - self.v0;
        let e2 = self.v2 - self.v0;

        let h = ray.direction().cross(e2);
        let det = e1.dot(h);
        if scalar::is_zero(det) {
            // Ray runs parallel to the triangle plane.
            return None;
        }

        let inv_det = 1.0 / det;
        let s = ray.origin() - self.v0;
        let u = inv_det * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(e1);
        let v = inv_det * ray.direction().dot(q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let distance = inv_det * e2.dot(q);
        if scalar::compare(distance, 0.0) != Ordering::Greater {
            return None;
        }

        // Blend the geometric normals of the three corners with the
        // barycentric weights. The corner normals are edge cross products
        // of the same flat face, so the blend stays the face normal; no
        // per-vertex normal data exists to smooth over.
        let n0 = e1.cross(e2);
        let n1 = (self.v2 - self.v1).cross(self.v0 - self.v1);
        let n2 = (self.v0 - self.v2).cross(self.v1 - self.v2);
        let normal = ((1.0 - u - v) * n0 + u * n1 + v * n2).normalize();

        let color = match self.texture {
            Some(texture) => texture(u, v),
            None => self.color,
        };

        Some(SurfaceHit {
            distance,
            normal,
            color,
        })
    }
}

/// A renderable surface: one of the three supported shapes.
#[derive(Debug, Clone)]
pub enum Primitive {
    Plane(Plane),
    Sphere(Sphere),
    Triangle(Triangle),
}

impl Primitive {
    /// Intersect a ray with this primitive.
    ///
    /// Returns the closest forward hit along the ray, or `None` for
    /// misses and every degenerate case.
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let hit = match self {
            Primitive::Plane(plane) => plane.intersect(ray),
            Primitive::Sphere(sphere) => sphere.intersect(ray),
            Primitive::Triangle(triangle) => triangle.intersect(ray),
        }?;

        Some(Intersection {
            distance: hit.distance,
            primitive: self,
            normal: hit.normal,
            color: hit.color,
        })
    }

    /// The flat base color of the surface.
    pub fn color(&self) -> Color {
        match self {
            Primitive::Plane(plane) => plane.color(),
            Primitive::Sphere(sphere) => sphere.color(),
            Primitive::Triangle(triangle) => triangle.color(),
        }
    }

    /// The surface's material kind.
    pub fn material(&self) -> Material {
        match self {
            Primitive::Plane(plane) => plane.material,
            Primitive::Sphere(sphere) => sphere.material,
            Primitive::Triangle(triangle) => triangle.material,
        }
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Triangle> for Primitive {
    fn from(triangle: Triangle) -> Self {
        Primitive::Triangle(triangle)
    }
}

//! Whitted-style CPU ray tracing core.
//!
//! The camera generates primary rays through a world-space screen plane,
//! primitives answer intersection queries, the scene returns the closest
//! hit, and the tracer shades it with direct lighting, shadow rays, and
//! perfect mirror bounces. Pixels land in any [`PixelSink`].

mod camera;
mod film;
mod light;
mod material;
mod overhead;
mod primitive;
mod scene;
pub mod textures;
mod tracer;

pub use camera::{Camera, ScreenPlane};
pub use film::{Film, PixelSink};
pub use light::Light;
pub use material::{Color, Material, TextureFn};
pub use overhead::draw_overhead;
pub use primitive::{Intersection, Plane, Primitive, Sphere, Triangle};
pub use scene::{Scene, SceneError};
pub use tracer::{pack_rgb, render, render_par, trace, RenderConfig, BOUNCE_LIMIT};

/// Re-export common math types from lucent_math
pub use lucent_math::{Ray, Vec3};

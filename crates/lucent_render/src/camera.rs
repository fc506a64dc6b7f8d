//! Camera and the derived world-space screen plane.

use lucent_math::{Ray, Vec3};

const MIN_FOV_DEGREES: f32 = 60.0;
const MAX_FOV_DEGREES: f32 = 120.0;

/// The four world-space corners of the virtual screen rectangle.
#[derive(Debug, Clone, Copy)]
pub struct ScreenPlane {
    pub top_left: Vec3,
    pub top_right: Vec3,
    pub bottom_left: Vec3,
    pub bottom_right: Vec3,
}

impl ScreenPlane {
    fn new(mid_screen: Vec3, up: Vec3, scaled_right: Vec3) -> Self {
        Self {
            top_left: mid_screen + up - scaled_right,
            top_right: mid_screen + up + scaled_right,
            bottom_left: mid_screen - up - scaled_right,
            bottom_right: mid_screen - up + scaled_right,
        }
    }

    /// Top edge vector, left corner to right corner.
    pub fn top_lr(&self) -> Vec3 {
        self.top_right - self.top_left
    }

    /// Left edge vector, top corner to bottom corner.
    pub fn tb_left(&self) -> Vec3 {
        self.bottom_left - self.top_left
    }
}

/// Pinhole camera generating primary rays through its screen plane.
///
/// The screen plane is a pure function of position, look-at, up, aspect
/// ratio and field of view; every setter re-derives it before returning,
/// so no stale plane is ever observable.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    look_at: Vec3, // unit
    up: Vec3,      // unit
    right: Vec3,
    aspect_ratio: f32,
    fov_degrees: f32,
    screen_distance: f32,
    screen: ScreenPlane,
}

impl Camera {
    /// Build a camera. `look_at` and `up` are normalized here; callers
    /// need not pre-normalize. The field of view is silently clamped to
    /// [60, 120] degrees.
    pub fn new(
        position: Vec3,
        look_at: Vec3,
        up: Vec3,
        aspect_ratio: f32,
        fov_degrees: f32,
    ) -> Self {
        let mut camera = Self {
            position,
            look_at: look_at.normalize(),
            up: up.normalize(),
            right: Vec3::ZERO,
            aspect_ratio,
            fov_degrees,
            screen_distance: 0.0,
            screen: ScreenPlane::new(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO),
        };
        camera.rebuild();
        camera
    }

    /// Camera with the default aspect ratio (1.0) and field of view (60).
    pub fn with_defaults(position: Vec3, look_at: Vec3, up: Vec3) -> Self {
        Self::new(position, look_at, up, 1.0, MIN_FOV_DEGREES)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Distance from the eye to the screen plane, `1 / tan(fov / 2)`.
    pub fn screen_distance(&self) -> f32 {
        self.screen_distance
    }

    pub fn screen(&self) -> ScreenPlane {
        self.screen
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.rebuild();
    }

    pub fn set_look_at(&mut self, look_at: Vec3) {
        self.look_at = look_at.normalize();
        self.rebuild();
    }

    pub fn set_up(&mut self, up: Vec3) {
        self.up = up.normalize();
        self.rebuild();
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
        self.rebuild();
    }

    pub fn set_fov_degrees(&mut self, fov_degrees: f32) {
        self.fov_degrees = fov_degrees;
        self.rebuild();
    }

    /// Recompute the basis vectors and screen corners from the current
    /// inputs. Runs under every mutation, as one atomic step.
    fn rebuild(&mut self) {
        let fov = self.fov_degrees.clamp(MIN_FOV_DEGREES, MAX_FOV_DEGREES);
        self.screen_distance = 1.0 / (fov.to_radians() / 2.0).tan();
        self.right = self.look_at.cross(self.up);

        let mid_screen = self.position + self.look_at * self.screen_distance;
        let scaled_right = self.aspect_ratio * self.right;
        self.screen = ScreenPlane::new(mid_screen, self.up, scaled_right);
    }

    /// Primary ray through normalized screen coordinates `u, v` in
    /// [0, 1], measured from the top-left corner with `v` growing
    /// downward.
    ///
    /// The screen point itself is taken as the direction vector, so the
    /// generated picture assumes an eye at or near the world origin.
    pub fn primary_ray(&self, u: f32, v: f32) -> Ray {
        let screen_point =
            self.screen.top_left + u * self.screen.top_lr() + v * self.screen.tb_left();
        Ray::new(self.position, screen_point.normalize())
    }
}

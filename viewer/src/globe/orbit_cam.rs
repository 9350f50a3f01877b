use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Fixed eye distance from the globe center; zoom is disabled.
pub const CAMERA_DISTANCE: f32 = 300.0;

/// Idle orbit speed, one revolution per minute.
pub const AUTO_ROTATE_RAD_PER_SEC: f32 = TAU / 60.0;

/// Polar-angle band the camera may tilt within, measured from +Y.
pub const POLAR_MIN_RAD: f32 = PI / 3.5;
pub const POLAR_MAX_RAD: f32 = PI - PI / 3.0;

pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub fov_y: f32,
    pub aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            fov_y: 50f32.to_radians(),
            aspect: 1.6,
            z_near: 180.0,
            z_far: 1800.0,
        }
    }
}

impl OrbitCamera {
    /// Pitch limits implied by the polar band.
    pub fn pitch_limits() -> (f32, f32) {
        (FRAC_PI_2 - POLAR_MAX_RAD, FRAC_PI_2 - POLAR_MIN_RAD)
    }

    /// Applies a drag delta in screen pixels. Pan is not supported; drags
    /// only orbit, and pitch stays inside the polar band.
    pub fn apply_drag(&mut self, dx: f32, dy: f32) {
        let k = 0.005f32;
        self.yaw -= dx * k;
        self.pitch += dy * k;
        let (lo, hi) = Self::pitch_limits();
        self.pitch = self.pitch.clamp(lo, hi);
    }

    /// Advances the idle orbit; `dt` is seconds since the last frame.
    pub fn auto_rotate(&mut self, dt: f32) {
        self.yaw += AUTO_ROTATE_RAD_PER_SEC * dt;
    }

    pub fn update_from_input(&mut self, ctx: &egui::Context, ui_hijacked: bool) {
        if ui_hijacked {
            return;
        }
        ctx.input(|i| {
            if i.pointer.button_down(egui::PointerButton::Primary) {
                let d = i.pointer.delta();
                self.apply_drag(d.x, d.y);
            }
        });
    }

    pub fn eye(&self) -> glam::Vec3 {
        glam::Vec3::new(
            CAMERA_DISTANCE * self.yaw.cos() * self.pitch.cos(),
            CAMERA_DISTANCE * self.pitch.sin(),
            CAMERA_DISTANCE * self.yaw.sin() * self.pitch.cos(),
        )
    }

    pub fn view_proj(&self) -> [[f32; 4]; 4] {
        let view = glam::Mat4::look_at_rh(self.eye(), glam::Vec3::ZERO, glam::Vec3::Y);
        let proj =
            glam::Mat4::perspective_rh(self.fov_y, self.aspect.max(1e-3), self.z_near, self.z_far);
        (proj * view).to_cols_array_2d()
    }
}

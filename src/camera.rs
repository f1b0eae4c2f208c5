use crate::constants::{FOV_Y_DEG, Z_FAR, Z_NEAR};
use crate::core::{DronePose, FlightState, DRONE_SCALE};
use glam::{Mat4, Quat, Vec3};

/// First-person camera derived from the flight pose each frame.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub yaw: f32,
    pub aspect: f32,
}

impl Camera {
    pub fn from_flight(flight: &FlightState, width: u32, height: u32) -> Self {
        Self {
            eye: flight.position,
            yaw: flight.yaw,
            aspect: width.max(1) as f32 / height.max(1) as f32,
        }
    }

    /// Camera-to-world transform (the camera looks down its local -Z).
    pub fn world_from_camera(&self) -> Mat4 {
        Mat4::from_rotation_translation(Quat::from_rotation_y(self.yaw), self.eye)
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.world_from_camera().inverse()
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(FOV_Y_DEG.to_radians(), self.aspect, Z_NEAR, Z_FAR)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World transform of the drone body that rides along with the camera.
    pub fn drone_model(&self, pose: &DronePose) -> Mat4 {
        self.world_from_camera()
            * Mat4::from_translation(pose.offset)
            * Mat4::from_rotation_y(std::f32::consts::FRAC_PI_2)
            * Mat4::from_rotation_z(pose.roll)
            * Mat4::from_scale(Vec3::splat(DRONE_SCALE))
    }
}

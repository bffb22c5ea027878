use rand::Rng;

use crate::ray::Ray;
use crate::scene::CameraParams;
use crate::types::{Float, Vec3};

pub struct Camera {
    position: Vec3,
    right: Vec3,
    up: Vec3,
    forward: Vec3,
    tan_half_fov_x: Float,
    tan_half_fov_y: Float,
    width: Float,
    height: Float,
}

impl Camera {
    pub fn new(params: &CameraParams, width: u32, height: u32) -> Self {
        let fwidth = width as Float;
        let fheight = height as Float;
        let tan_half_fov_x = (params.fov_x / 2.0).tan();
        let tan_half_fov_y = tan_half_fov_x * fheight / fwidth;
        Self {
            position: params.position,
            right: params.right,
            up: params.up,
            forward: params.forward,
            tan_half_fov_x,
            tan_half_fov_y,
            width: fwidth,
            height: fheight,
        }
    }

    /// Ray through pixel (x, y), jittered inside the pixel footprint.
    pub fn ray<R: Rng>(&self, x: u32, y: u32, rng: &mut R) -> Ray {
        let px = x as Float + rng.gen::<Float>();
        let py = y as Float + rng.gen::<Float>();
        let nx = (2.0 * px / self.width - 1.0) * self.tan_half_fov_x;
        let ny = -(2.0 * py / self.height - 1.0) * self.tan_half_fov_y;
        Ray { origin: self.position, dir: nx * self.right + ny * self.up + self.forward }
    }
}

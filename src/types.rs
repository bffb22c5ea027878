use std::f32::consts::PI as F32_PI;

use cgmath::{Quaternion, Vector3};

pub type Float = f32;
pub type Vec3 = Vector3<Float>;
pub type Quat = Quaternion<Float>;

pub const PI: Float = F32_PI;

/// Offset along the signed surface normal when spawning secondary rays.
pub const EPSILON: Float = 1e-4;

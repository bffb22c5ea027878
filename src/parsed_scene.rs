use cgmath::Vector2;

use crate::types::{Float, Quat, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedShape {
    Plane(Vec3),
    Ellipsoid(Vec3),
    Box(Vec3),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedMaterial {
    Metallic,
    Dielectric,
}

#[derive(Debug)]
pub struct ParsedPrimitive {
    pub shape: Option<ParsedShape>,
    pub material: Option<ParsedMaterial>,
    pub ior: Option<Float>,
    pub position: Option<Vec3>,
    pub rotation: Option<Quat>,
    pub color: Option<Vec3>,
    pub emission: Option<Vec3>,
}

#[derive(Debug)]
pub struct ParsedCamera {
    pub position: Option<Vec3>,
    pub right: Option<Vec3>,
    pub up: Option<Vec3>,
    pub forward: Option<Vec3>,
    pub fov_x: Option<Float>,
}

#[derive(Debug)]
pub struct ParsedScene {
    pub dimensions: Option<Vector2<u32>>,
    pub bg_color: Option<Vec3>,
    pub ambient_light: Option<Vec3>,
    pub camera: ParsedCamera,
    pub ray_depth: Option<u8>,
    pub samples: Option<u32>,
    pub primitives: Vec<ParsedPrimitive>,
}

impl ParsedPrimitive {
    pub fn new() -> Self {
        Self {
            shape: None,
            material: None,
            ior: None,
            position: None,
            rotation: None,
            color: None,
            emission: None,
        }
    }
}

impl ParsedCamera {
    pub fn new() -> Self {
        Self { position: None, right: None, up: None, forward: None, fov_x: None }
    }
}

impl ParsedScene {
    pub fn new() -> Self {
        Self {
            dimensions: None,
            bg_color: None,
            ambient_light: None,
            camera: ParsedCamera::new(),
            ray_depth: None,
            samples: None,
            primitives: vec![],
        }
    }
}

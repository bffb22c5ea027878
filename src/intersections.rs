use cgmath::{InnerSpace as _, Rotation as _};

use crate::ray::Ray;
use crate::scene::{Primitive, Scene, Shape};
use crate::types::{Float, Quat, Vec3};

pub trait Intersectable {
    fn intersection(&self, ray: &Ray) -> Option<Intersection>;
    fn all_intersections(&self, ray: &Ray) -> Intersections;
}

/// A single surface hit. The normal is unit length and faces the incoming
/// ray; `inside` records that the raw outward normal was flipped to do so.
#[derive(Debug, Clone)]
pub struct Intersection {
    pub t: Float,
    pub normal: Vec3,
    pub inside: bool,
}

/// Entry/exit channel: a ray that starts outside a convex primitive and
/// pierces it yields both hits, and the far one keeps its own slot.
#[derive(Debug)]
pub enum Intersections<T = Intersection> {
    None,
    One(T),
    Two(T, T),
}

impl Intersection {
    pub fn with_rotated_normal(self, q: Quat) -> Self {
        Self { t: self.t, normal: q.rotate_vector(self.normal).normalize(), inside: self.inside }
    }
}

impl Intersectable for Shape {
    fn intersection(&self, ray: &Ray) -> Option<Intersection> {
        match self {
            Shape::Plane(plane) => plane.intersection(ray),
            Shape::Ellipsoid(ellipsoid) => ellipsoid.intersection(ray),
            Shape::Box(r#box) => r#box.intersection(ray),
        }
    }

    fn all_intersections(&self, ray: &Ray) -> Intersections {
        match self {
            Shape::Plane(plane) => plane.all_intersections(ray),
            Shape::Ellipsoid(ellipsoid) => ellipsoid.all_intersections(ray),
            Shape::Box(r#box) => r#box.all_intersections(ray),
        }
    }
}

pub fn model_space_ray(position: &Vec3, rotation: &Quat, ray: &Ray) -> Ray {
    let rot = rotation.conjugate();
    Ray { origin: rot.rotate_vector(ray.origin - position), dir: rot.rotate_vector(ray.dir) }
}

/// Nearest hit over the whole scene, strictly closer than `t_max`. The first
/// primitive in scene order wins ties; an infinite or NaN `t` fails the
/// comparisons and is rejected silently.
pub fn intersect_scene<'a>(
    ray: &Ray,
    scene: &'a Scene,
    t_max: Float,
) -> Option<(Intersection, &'a Primitive)> {
    let mut nearest: Option<(Intersection, &Primitive)> = None;
    for primitive in &scene.primitives {
        let local_ray = model_space_ray(&primitive.position, &primitive.rotation, ray);
        let Some(hit) = primitive.shape.intersection(&local_ray) else { continue };
        if !(hit.t < t_max) {
            continue;
        }
        let closer = match &nearest {
            Some((best, _)) => hit.t < best.t,
            None => true,
        };
        if closer {
            nearest = Some((hit, primitive));
        }
    }
    nearest.map(|(hit, primitive)| (hit.with_rotated_normal(primitive.rotation), primitive))
}

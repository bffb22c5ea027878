use cgmath::{vec3, ElementWise as _, InnerSpace as _, Rotation as _};
use rand::Rng;

use crate::area_pdf::AreaPdf as _;
use crate::intersections::{model_space_ray, Intersectable as _, Intersection, Intersections};
use crate::ray::Ray;
use crate::rng::uniform_on_sphere;
use crate::scene::{Primitive, Shape};
use crate::types::{Float, Vec3, PI};

/// Direction sampling strategies over the unit sphere; `pdf` is the density
/// of `sample` in solid-angle measure.
pub trait RaySampler {
    fn sample<R: Rng>(&self, rng: &mut R) -> Vec3;
    fn pdf(&self, dir: Vec3) -> Float;
}

pub struct Cosine {
    normal: Vec3,
}

pub struct LightSurface<'a> {
    origin: Vec3,
    lights: &'a [Primitive],
    num_sampleable: usize,
}

pub struct Mix<T: RaySampler, U: RaySampler> {
    lhs: T,
    rhs: U,
}

impl Cosine {
    pub fn new(normal: Vec3) -> Self {
        Self { normal }
    }
}

impl<'a> LightSurface<'a> {
    pub fn new(origin: Vec3, lights: &'a [Primitive]) -> Self {
        let num_sampleable =
            lights.iter().filter(|light| !matches!(light.shape, Shape::Plane(_))).count();
        Self { origin, lights, num_sampleable }
    }
}

impl<T: RaySampler, U: RaySampler> Mix<T, U> {
    pub fn new(lhs: T, rhs: U) -> Self {
        Self { lhs, rhs }
    }
}

impl RaySampler for Cosine {
    fn sample<R: Rng>(&self, rng: &mut R) -> Vec3 {
        let dir = uniform_on_sphere(rng) + self.normal;
        // an antipodal draw collapses the sum to zero length
        if dir.magnitude2() < 1e-8 {
            return self.normal;
        }
        dir.normalize()
    }

    fn pdf(&self, dir: Vec3) -> Float {
        self.normal.dot(dir).max(0.0) / PI
    }
}

impl<'a> RaySampler for LightSurface<'a> {
    fn sample<R: Rng>(&self, rng: &mut R) -> Vec3 {
        loop {
            let light = &self.lights[rng.gen_range(0..self.lights.len())];
            let local = match &light.shape {
                // planes have no finite surface to draw from
                Shape::Plane(_) => continue,
                Shape::Box(r#box) => sample_on_box(&r#box.sizes, rng),
                Shape::Ellipsoid(ellipsoid) => {
                    uniform_on_sphere(rng).mul_element_wise(ellipsoid.radiuses)
                }
            };
            let world = light.rotation.rotate_vector(local) + light.position;
            return (world - self.origin).normalize();
        }
    }

    fn pdf(&self, dir: Vec3) -> Float {
        if self.num_sampleable == 0 {
            return 0.0;
        }
        let ray = Ray { origin: self.origin, dir };
        let mut total = 0.0;
        for light in self.lights {
            // hits stay in the light's frame: the ellipsoid area density
            // needs the local normal, and t and |dir . normal| are the same
            // in both frames
            let local_ray = model_space_ray(&light.position, &light.rotation, &ray);
            match light.shape.all_intersections(&local_ray) {
                Intersections::None => {}
                Intersections::One(hit) => {
                    total += solid_angle_density(light, &local_ray, &hit);
                }
                Intersections::Two(near, far) => {
                    total += solid_angle_density(light, &local_ray, &near)
                        + solid_angle_density(light, &local_ray, &far);
                }
            }
        }
        total / self.num_sampleable as Float
    }
}

impl<T: RaySampler, U: RaySampler> RaySampler for Mix<T, U> {
    fn sample<R: Rng>(&self, rng: &mut R) -> Vec3 {
        if rng.gen_bool(0.5) {
            self.lhs.sample(rng)
        } else {
            self.rhs.sample(rng)
        }
    }

    fn pdf(&self, dir: Vec3) -> Float {
        (self.lhs.pdf(dir) + self.rhs.pdf(dir)) / 2.0
    }
}

fn sample_on_box<R: Rng>(sizes: &Vec3, rng: &mut R) -> Vec3 {
    let wx = sizes.y * sizes.z;
    let wy = sizes.x * sizes.z;
    let wz = sizes.x * sizes.y;
    let choice = rng.gen_range(0.0..(wx + wy + wz));
    let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    let u = rng.gen_range(-1.0..=1.0);
    let v = rng.gen_range(-1.0..=1.0);
    let face = if choice < wx {
        vec3(sign, u, v)
    } else if choice < wx + wy {
        vec3(u, sign, v)
    } else {
        vec3(u, v, sign)
    };
    face.mul_element_wise(*sizes)
}

fn solid_angle_density(light: &Primitive, local_ray: &Ray, hit: &Intersection) -> Float {
    light.shape.area_pdf(hit) * hit.t * hit.t / local_ray.dir.dot(hit.normal).abs()
}

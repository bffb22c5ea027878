use cgmath::num_traits::zero;
use cgmath::{ElementWise as _, InnerSpace as _};
use rand::Rng;

use crate::image::RGB;
use crate::intersections::{intersect_scene, Intersection};
use crate::ray::Ray;
use crate::ray_sampler::{Cosine, LightSurface, Mix, RaySampler as _};
use crate::scene::{Material, Scene};
use crate::types::{Float, Vec3, EPSILON, PI};

pub fn raytrace<R: Rng>(ray: &Ray, scene: &Scene, rng: &mut R) -> RGB {
    trace(&Ray { origin: ray.origin, dir: ray.dir.normalize() }, scene, rng, scene.ray_depth)
}

fn trace<R: Rng>(ray: &Ray, scene: &Scene, rng: &mut R, depth_left: u8) -> RGB {
    if depth_left == 0 {
        return zero();
    }
    let Some((hit, primitive)) = intersect_scene(ray, scene, Float::INFINITY) else {
        return scene.bg_color;
    };
    let point = ray.position_at(hit.t);
    primitive.emission
        + match primitive.material {
            Material::Diffuse => {
                diffuse(scene, rng, depth_left, &hit, point, primitive.color)
            }
            Material::Metallic => trace(&reflected_ray(ray, &hit, point), scene, rng, depth_left - 1)
                .mul_element_wise(primitive.color),
            Material::Dielectric { ior } => {
                dielectric(ray, scene, rng, depth_left, &hit, point, primitive.color, ior)
            }
        }
}

fn diffuse<R: Rng>(
    scene: &Scene,
    rng: &mut R,
    depth_left: u8,
    hit: &Intersection,
    point: Vec3,
    albedo: RGB,
) -> RGB {
    let origin = point + EPSILON * hit.normal;
    let cosine = Cosine::new(hit.normal);
    let (dir, pdf) = if scene.num_area_lights == 0 {
        let dir = cosine.sample(rng);
        (dir, cosine.pdf(dir))
    } else {
        let mix = Mix::new(cosine, LightSurface::new(origin, scene.lights()));
        let dir = mix.sample(rng);
        (dir, mix.pdf(dir))
    };
    // grazing directions can degenerate to a zero density
    if pdf <= 0.0 {
        return zero();
    }
    let incoming = trace(&Ray { origin, dir }, scene, rng, depth_left - 1);
    hit.normal.dot(dir).max(0.0) / PI / pdf * incoming.mul_element_wise(albedo)
}

#[allow(clippy::too_many_arguments)]
fn dielectric<R: Rng>(
    ray: &Ray,
    scene: &Scene,
    rng: &mut R,
    depth_left: u8,
    hit: &Intersection,
    point: Vec3,
    albedo: RGB,
    ior: Float,
) -> RGB {
    let eta = if hit.inside { ior } else { 1.0 / ior };
    let cos1 = -hit.normal.dot(ray.dir);
    let sin2 = eta * (1.0 - cos1 * cos1).sqrt();
    if sin2 > 1.0 {
        // total internal reflection
        return trace(&reflected_ray(ray, hit, point), scene, rng, depth_left - 1);
    }

    let r0 = ((eta - 1.0) / (eta + 1.0)).powi(2);
    let reflectance = r0 + (1.0 - r0) * (1.0 - cos1).powi(5);
    if rng.gen::<Float>() < reflectance {
        trace(&reflected_ray(ray, hit, point), scene, rng, depth_left - 1)
    } else {
        let cos2 = (1.0 - sin2 * sin2).sqrt();
        let dir = (eta * ray.dir + (eta * cos1 - cos2) * hit.normal).normalize();
        let refracted = Ray { origin: point - EPSILON * hit.normal, dir };
        let incoming = trace(&refracted, scene, rng, depth_left - 1);
        // the albedo tints the outer-to-inner leg only
        if hit.inside {
            incoming
        } else {
            incoming.mul_element_wise(albedo)
        }
    }
}

fn reflected_ray(ray: &Ray, hit: &Intersection, point: Vec3) -> Ray {
    let dir = ray.dir - 2.0 * hit.normal.dot(ray.dir) * hit.normal;
    Ray { origin: point + EPSILON * hit.normal, dir }
}

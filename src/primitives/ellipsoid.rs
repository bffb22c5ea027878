use cgmath::{ElementWise as _, InnerSpace as _};

use crate::intersections::{Intersectable, Intersection, Intersections};
use crate::ray::Ray;
use crate::types::{Float, Vec3};

/// Axis-aligned ellipsoid `(x/rx)^2 + (y/ry)^2 + (z/rz)^2 = 1`.
#[derive(Debug, Clone)]
pub struct Ellipsoid {
    pub radiuses: Vec3,
}

impl Ellipsoid {
    /// Gradient of the implicit surface, normalized.
    fn outward_normal(&self, point: Vec3) -> Vec3 {
        point.div_element_wise(self.radiuses).div_element_wise(self.radiuses).normalize()
    }
}

fn quadratic_hits(r: &Vec3, ray: &Ray) -> Intersections<Float> {
    let origin = ray.origin.div_element_wise(*r);
    let dir = ray.dir.div_element_wise(*r);

    let a = dir.dot(dir);
    let b = origin.dot(dir);
    let c = origin.dot(origin);

    // a * t^2 + 2 * b * t + c = 1
    let d = b * b - a * (c - 1.0);
    if d < 0.0 {
        return Intersections::None;
    }
    let ds = d.sqrt();
    let near = (-b - ds) / a;
    let far = (-b + ds) / a;

    if near > 0.0 {
        Intersections::Two(near, far)
    } else if far > 0.0 {
        Intersections::One(far)
    } else {
        Intersections::None
    }
}

impl Intersectable for Ellipsoid {
    fn intersection(&self, ray: &Ray) -> Option<Intersection> {
        match quadratic_hits(&self.radiuses, ray) {
            Intersections::None => None,
            Intersections::One(far) => Some(Intersection {
                t: far,
                normal: -self.outward_normal(ray.position_at(far)),
                inside: true,
            }),
            Intersections::Two(near, _) => Some(Intersection {
                t: near,
                normal: self.outward_normal(ray.position_at(near)),
                inside: false,
            }),
        }
    }

    fn all_intersections(&self, ray: &Ray) -> Intersections {
        match quadratic_hits(&self.radiuses, ray) {
            Intersections::None => Intersections::None,
            Intersections::One(far) => Intersections::One(Intersection {
                t: far,
                normal: -self.outward_normal(ray.position_at(far)),
                inside: true,
            }),
            Intersections::Two(near, far) => Intersections::Two(
                Intersection {
                    t: near,
                    normal: self.outward_normal(ray.position_at(near)),
                    inside: false,
                },
                Intersection {
                    t: far,
                    normal: -self.outward_normal(ray.position_at(far)),
                    inside: true,
                },
            ),
        }
    }
}

use cgmath::InnerSpace as _;

use crate::intersections::{Intersectable, Intersection, Intersections};
use crate::ray::Ray;
use crate::types::Vec3;

/// The plane `normal . p = 0`; the stored normal need not be unit.
#[derive(Debug, Clone)]
pub struct Plane {
    pub normal: Vec3,
}

impl Intersectable for Plane {
    fn intersection(&self, ray: &Ray) -> Option<Intersection> {
        let nd = self.normal.dot(ray.dir);
        let t = -self.normal.dot(ray.origin) / nd;
        // NaN from a parallel ray fails the comparison and is dropped with it
        if t > 0.0 {
            Some(Intersection {
                t,
                normal: (if nd < 0.0 { self.normal } else { -self.normal }).normalize(),
                inside: nd > 0.0,
            })
        } else {
            None
        }
    }

    fn all_intersections(&self, ray: &Ray) -> Intersections {
        match self.intersection(ray) {
            Some(intersection) => Intersections::One(intersection),
            None => Intersections::None,
        }
    }
}

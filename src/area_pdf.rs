use cgmath::{vec3, ElementWise as _, InnerSpace as _};

use crate::intersections::Intersection;
use crate::primitives::{Box, Ellipsoid};
use crate::scene::Shape;
use crate::types::{Float, PI};

/// Probability density, per unit surface area, of the point a light sampler
/// draws on the primitive.
pub trait AreaPdf {
    fn area_pdf(&self, hit: &Intersection) -> Float;
}

impl AreaPdf for Box {
    fn area_pdf(&self, _hit: &Intersection) -> Float {
        let s = self.sizes;
        1.0 / (8.0 * (s.y * s.z + s.x * s.z + s.x * s.y))
    }
}

impl AreaPdf for Ellipsoid {
    // hit.normal must be in the ellipsoid's own frame: the density of the
    // scaled-sphere sampler depends on where on the surface the hit lies.
    fn area_pdf(&self, hit: &Intersection) -> Float {
        let r = self.radiuses;
        let coef = vec3(r.y * r.z, r.x * r.z, r.x * r.y).mul_element_wise(hit.normal);
        1.0 / (4.0 * PI * coef.magnitude())
    }
}

impl AreaPdf for Shape {
    fn area_pdf(&self, hit: &Intersection) -> Float {
        match self {
            Shape::Plane(_) => 0.0,
            Shape::Ellipsoid(ellipsoid) => ellipsoid.area_pdf(hit),
            Shape::Box(r#box) => r#box.area_pdf(hit),
        }
    }
}

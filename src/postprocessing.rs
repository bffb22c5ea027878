use cgmath::ElementWise;

use crate::types::{Float, Vec3};

pub fn correct_gamma(x: Vec3) -> Vec3 {
    x.map(|e| e.powf(1.0 / 2.2))
}

// saturate((x * (a * x + b)) / (x * (c * x + d) + e))
pub fn aces_tonemap(x: Vec3) -> Vec3 {
    let a: Float = 2.51;
    let b: Float = 0.03;
    let c: Float = 2.43;
    let d: Float = 0.59;
    let e: Float = 0.14;

    let numerator = x.mul_element_wise((a * x).add_element_wise(b));
    let denominator = x.mul_element_wise((c * x).add_element_wise(d)).add_element_wise(e);
    saturate(numerator.div_element_wise(denominator))
}

fn saturate(color: Vec3) -> Vec3 {
    color.map(|e| e.clamp(0.0, 1.0))
}

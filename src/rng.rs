use cgmath::vec3;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoroshiro128PlusPlus;

use crate::types::{Float, Vec3, PI};

pub const DEFAULT_SEED: u64 = 42;

/// Independent deterministic stream for one pixel row. Seeding goes through
/// SplitMix64, so consecutive rows do not produce correlated states.
pub fn pixel_row_stream(seed: u64, row: u64) -> Xoroshiro128PlusPlus {
    Xoroshiro128PlusPlus::seed_from_u64(seed.wrapping_add(row))
}

pub fn uniform_on_sphere<R: Rng>(rng: &mut R) -> Vec3 {
    let theta = 2.0 * PI * rng.gen::<Float>();
    let z = 2.0 * rng.gen::<Float>() - 1.0;
    let h = (1.0 - z * z).sqrt();
    vec3(h * theta.cos(), h * theta.sin(), z)
}

use cgmath::num_traits::zero;
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
use rayon::slice::ParallelSliceMut;

use crate::camera::Camera;
use crate::image::{Image, RGB};
use crate::postprocessing::{aces_tonemap, correct_gamma};
use crate::raytrace::raytrace;
use crate::rng::pixel_row_stream;
use crate::scene::Scene;
use crate::types::Float;

/// Renders row-parallel; every row owns a stream derived from the scene
/// seed, so the result does not depend on scheduling.
pub fn render(scene: &Scene) -> Image {
    let camera = Camera::new(&scene.camera, scene.width, scene.height);
    let background = correct_gamma(aces_tonemap(scene.bg_color));
    let mut image = Image::filled(scene.width, scene.height, background);
    if scene.width == 0 {
        return image;
    }

    image.pixels.par_chunks_mut(scene.width as usize).enumerate().for_each(|(y, row)| {
        let mut rng = pixel_row_stream(scene.seed, y as u64);
        for (x, pixel) in row.iter_mut().enumerate() {
            let mut total: RGB = zero();
            for _ in 0..scene.samples {
                let ray = camera.ray(x as u32, y as u32, &mut rng);
                total += raytrace(&ray, scene, &mut rng);
            }
            *pixel = correct_gamma(aces_tonemap(total / scene.samples as Float));
        }
    });

    image
}

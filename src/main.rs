mod area_pdf;
mod bmp;
mod camera;
mod error;
mod image;
mod intersections;
mod parsed_scene;
mod postprocessing;
mod ppm;
mod primitives;
mod ray;
mod ray_sampler;
mod raytrace;
mod renderer;
mod rng;
mod scene;
mod scene_parser;
mod types;

use std::env;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write as _};
use std::process::ExitCode;
use std::time::Instant;

use error::AppError;
use scene::Scene;

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let mut args = env::args().skip(1);
    let (input_path, output_path) = match (args.next(), args.next(), args.next()) {
        (Some(input), Some(output), None) => (input, output),
        _ => return Err(AppError::Usage),
    };

    let input = File::open(input_path)?;
    let scene = Scene::new(scene_parser::parse(BufReader::new(input)));
    log::info!(
        "{}x{}, {} primitives ({} lights, {} sampleable), {} samples, depth {}",
        scene.width,
        scene.height,
        scene.primitives.len(),
        scene.num_lights,
        scene.num_area_lights,
        scene.samples,
        scene.ray_depth
    );
    log::debug!("background {:?}, ambient {:?}", scene.bg_color, scene.ambient_light);

    let start = Instant::now();
    let image = renderer::render(&scene);
    log::info!("rendered in {:.2?}", start.elapsed());

    let mut output = BufWriter::new(File::create(&output_path)?);
    if output_path.ends_with(".bmp") {
        bmp::save(&image, &mut output)?;
    } else {
        ppm::save(&image, &mut output)?;
    }
    output.flush()?;
    Ok(())
}

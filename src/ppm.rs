use std::io::{self, Write};

use crate::image::{Image, RGB};
use crate::types::Float;

pub fn save<W: Write>(image: &Image, out: &mut W) -> io::Result<()> {
    write!(out, "P6\n{} {}\n255\n", image.width, image.height)?;
    for pixel in &image.pixels {
        out.write_all(&to_bytes(pixel))?;
    }
    Ok(())
}

pub fn channel_to_byte(v: Float) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn to_bytes(v: &RGB) -> [u8; 3] {
    [channel_to_byte(v.x), channel_to_byte(v.y), channel_to_byte(v.z)]
}

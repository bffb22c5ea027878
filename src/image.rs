pub type RGB = crate::types::Vec3;

pub struct Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<RGB>,
}

impl Image {
    pub fn filled(width: u32, height: u32, fill: RGB) -> Self {
        Self { width, height, pixels: vec![fill; (width * height) as usize] }
    }
}

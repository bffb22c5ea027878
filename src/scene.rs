use std::cmp::Ordering;

use cgmath::num_traits::zero;
use cgmath::InnerSpace;

use crate::parsed_scene::{ParsedMaterial, ParsedPrimitive, ParsedScene, ParsedShape};
use crate::primitives::{Box, Ellipsoid, Plane};
use crate::rng::DEFAULT_SEED;
use crate::types::{Float, Quat, Vec3, PI};

#[derive(Debug, Clone)]
pub enum Shape {
    Plane(Plane),
    Ellipsoid(Ellipsoid),
    Box(Box),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    Diffuse,
    Metallic,
    Dielectric { ior: Float },
}

#[derive(Debug, Clone)]
pub struct Primitive {
    pub shape: Shape,
    pub position: Vec3,
    pub rotation: Quat,
    pub color: Vec3,
    pub emission: Vec3,
    pub material: Material,
}

#[derive(Debug)]
pub struct CameraParams {
    pub position: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    pub forward: Vec3,
    pub fov_x: Float,
}

pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub bg_color: Vec3,
    pub ambient_light: Vec3,
    pub camera: CameraParams,
    pub primitives: Vec<Primitive>,
    pub num_lights: usize,
    pub num_area_lights: usize,
    pub ray_depth: u8,
    pub samples: u32,
    pub seed: u64,
}

impl Primitive {
    fn from_parsed(parsed: ParsedPrimitive) -> Option<Self> {
        let shape = match parsed.shape? {
            ParsedShape::Plane(normal) => Shape::Plane(Plane { normal }),
            ParsedShape::Ellipsoid(radiuses) => Shape::Ellipsoid(Ellipsoid { radiuses }),
            ParsedShape::Box(sizes) => Shape::Box(Box { sizes }),
        };
        let material = match parsed.material {
            None => Material::Diffuse,
            Some(ParsedMaterial::Metallic) => Material::Metallic,
            Some(ParsedMaterial::Dielectric) => {
                Material::Dielectric { ior: parsed.ior.unwrap_or(1.0) }
            }
        };
        Some(Self {
            shape,
            position: parsed.position.unwrap_or_else(zero),
            rotation: parsed.rotation.unwrap_or_else(|| Quat::from_sv(1.0, zero())),
            color: parsed.color.unwrap_or_else(zero),
            emission: parsed.emission.unwrap_or_else(zero),
            material,
        })
    }

    pub fn is_emissive(&self) -> bool {
        self.emission.magnitude2() > 0.0
    }

    pub fn is_area_light(&self) -> bool {
        self.is_emissive() && !matches!(self.shape, Shape::Plane(_))
    }
}

impl CameraParams {
    fn from_parsed(parsed: &ParsedScene) -> Self {
        Self {
            position: parsed.camera.position.unwrap_or_else(zero),
            right: parsed.camera.right.unwrap_or_else(Vec3::unit_x),
            up: parsed.camera.up.unwrap_or_else(Vec3::unit_y),
            forward: parsed.camera.forward.unwrap_or_else(Vec3::unit_z),
            fov_x: parsed.camera.fov_x.unwrap_or(PI / 2.0),
        }
    }
}

impl Scene {
    pub fn new(parsed: ParsedScene) -> Self {
        let camera = CameraParams::from_parsed(&parsed);
        let dimensions = parsed.dimensions.unwrap_or_else(|| cgmath::vec2(640, 480));

        let mut primitives: Vec<Primitive> =
            parsed.primitives.into_iter().filter_map(Primitive::from_parsed).collect();
        // Emissive primitives move to the front, brightest first; the sort is
        // stable, so equal emissions keep their scene-file order. This happens
        // exactly once; nothing mutates the list afterwards.
        primitives.sort_by(|a, b| {
            b.emission
                .magnitude2()
                .partial_cmp(&a.emission.magnitude2())
                .unwrap_or(Ordering::Equal)
        });
        let num_lights = primitives.iter().filter(|p| p.is_emissive()).count();
        let num_area_lights =
            primitives[..num_lights].iter().filter(|p| p.is_area_light()).count();

        Self {
            width: dimensions.x,
            height: dimensions.y,
            bg_color: parsed.bg_color.unwrap_or_else(zero),
            ambient_light: parsed.ambient_light.unwrap_or_else(zero),
            camera,
            primitives,
            num_lights,
            num_area_lights,
            ray_depth: parsed.ray_depth.unwrap_or(6),
            samples: parsed.samples.unwrap_or(16).max(1),
            seed: DEFAULT_SEED,
        }
    }

    /// The emissive prefix of the primitive list.
    pub fn lights(&self) -> &[Primitive] {
        &self.primitives[..self.num_lights]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene_parser;

    fn build(text: &str) -> Scene {
        Scene::new(scene_parser::parse(text.as_bytes()))
    }

    #[test]
    fn defaults_fill_missing_fields() {
        let scene = build("");
        assert_eq!((scene.width, scene.height), (640, 480));
        assert_eq!(scene.bg_color, zero::<Vec3>());
        assert_eq!(scene.camera.right, Vec3::unit_x());
        assert_eq!(scene.camera.up, Vec3::unit_y());
        assert_eq!(scene.camera.forward, Vec3::unit_z());
        assert_eq!(scene.camera.fov_x, PI / 2.0);
        assert_eq!(scene.ray_depth, 6);
        assert_eq!(scene.samples, 16);
        assert_eq!(scene.num_lights, 0);
    }

    #[test]
    fn samples_are_clamped_to_at_least_one() {
        assert_eq!(build("SAMPLES 0\n").samples, 1);
    }

    #[test]
    fn primitive_defaults() {
        let scene = build("NEW_PRIMITIVE\nBOX 1 1 1\n");
        let primitive = &scene.primitives[0];
        assert_eq!(primitive.position, zero::<Vec3>());
        assert_eq!(primitive.rotation, Quat::from_sv(1.0, zero()));
        assert_eq!(primitive.color, zero::<Vec3>());
        assert_eq!(primitive.emission, zero::<Vec3>());
        assert_eq!(primitive.material, Material::Diffuse);
    }

    #[test]
    fn dielectric_without_ior_defaults_to_one() {
        let scene = build("NEW_PRIMITIVE\nBOX 1 1 1\nDIELECTRIC\n");
        assert_eq!(scene.primitives[0].material, Material::Dielectric { ior: 1.0 });
    }

    #[test]
    fn emissive_primitives_form_a_sorted_prefix() {
        let scene = build(
            "NEW_PRIMITIVE\nBOX 1 1 1\nCOLOR 1 0 0\n\
             NEW_PRIMITIVE\nELLIPSOID 1 1 1\nEMISSION 1 1 1\n\
             NEW_PRIMITIVE\nPLANE 0 1 0\nEMISSION 5 5 5\n\
             NEW_PRIMITIVE\nBOX 2 2 2\nEMISSION 3 3 3\n",
        );
        assert_eq!(scene.num_lights, 3);
        assert_eq!(scene.num_area_lights, 2);

        let emissions: Vec<Float> =
            scene.primitives.iter().map(|p| p.emission.x).collect();
        assert_eq!(emissions, vec![5.0, 3.0, 1.0, 0.0]);
        assert!(matches!(scene.primitives[0].shape, Shape::Plane(_)));
        assert_eq!(scene.lights().len(), 3);
    }

    #[test]
    fn equal_emission_keeps_file_order() {
        let scene = build(
            "NEW_PRIMITIVE\nBOX 1 1 1\nEMISSION 1 1 1\nCOLOR 0.25 0 0\n\
             NEW_PRIMITIVE\nBOX 2 2 2\nEMISSION 1 1 1\nCOLOR 0.75 0 0\n",
        );
        assert_eq!(scene.primitives[0].color.x, 0.25);
        assert_eq!(scene.primitives[1].color.x, 0.75);
    }
}

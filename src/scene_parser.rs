use std::io::BufRead;
use std::str::{FromStr, SplitAsciiWhitespace};

use cgmath::{vec2, vec3, Vector2, Vector3};

use crate::parsed_scene::{ParsedMaterial, ParsedPrimitive, ParsedScene, ParsedShape};
use crate::types::{Float, Quat};

/// Line-keyed scene reader. Unknown keywords are skipped; a line whose
/// numbers fail to parse is a no-op, so earlier values (or defaults) stay.
pub fn parse<R: BufRead>(input: R) -> ParsedScene {
    let mut scene = ParsedScene::new();
    let mut current: Option<ParsedPrimitive> = None;

    for line in input.lines() {
        let Ok(line) = line else { continue };
        let mut parts = line.split_ascii_whitespace();
        match parts.next() {
            Some("NEW_PRIMITIVE") => {
                flush(&mut scene, current.take());
                current = Some(ParsedPrimitive::new());
            }
            Some("DIMENSIONS") => assign(&mut scene.dimensions, next_vec2(&mut parts)),
            Some("BG_COLOR") => assign(&mut scene.bg_color, next_vec3(&mut parts)),
            Some("AMBIENT_LIGHT") => assign(&mut scene.ambient_light, next_vec3(&mut parts)),
            Some("RAY_DEPTH") => assign(&mut scene.ray_depth, next(&mut parts)),
            Some("SAMPLES") => assign(&mut scene.samples, next(&mut parts)),
            Some("CAMERA_POSITION") => assign(&mut scene.camera.position, next_vec3(&mut parts)),
            Some("CAMERA_RIGHT") => assign(&mut scene.camera.right, next_vec3(&mut parts)),
            Some("CAMERA_UP") => assign(&mut scene.camera.up, next_vec3(&mut parts)),
            Some("CAMERA_FORWARD") => assign(&mut scene.camera.forward, next_vec3(&mut parts)),
            Some("CAMERA_FOV_X") => assign(&mut scene.camera.fov_x, next(&mut parts)),
            Some("PLANE") => {
                if let Some(primitive) = &mut current {
                    assign(&mut primitive.shape, next_vec3(&mut parts).map(ParsedShape::Plane));
                }
            }
            Some("ELLIPSOID") => {
                if let Some(primitive) = &mut current {
                    assign(&mut primitive.shape, next_vec3(&mut parts).map(ParsedShape::Ellipsoid));
                }
            }
            Some("BOX") => {
                if let Some(primitive) = &mut current {
                    assign(&mut primitive.shape, next_vec3(&mut parts).map(ParsedShape::Box));
                }
            }
            Some("POSITION") => {
                if let Some(primitive) = &mut current {
                    assign(&mut primitive.position, next_vec3(&mut parts));
                }
            }
            Some("ROTATION") => {
                if let Some(primitive) = &mut current {
                    assign(&mut primitive.rotation, next_quat(&mut parts));
                }
            }
            Some("COLOR") => {
                if let Some(primitive) = &mut current {
                    assign(&mut primitive.color, next_vec3(&mut parts));
                }
            }
            Some("EMISSION") => {
                if let Some(primitive) = &mut current {
                    assign(&mut primitive.emission, next_vec3(&mut parts));
                }
            }
            Some("METALLIC") => {
                if let Some(primitive) = &mut current {
                    primitive.material = Some(ParsedMaterial::Metallic);
                }
            }
            Some("DIELECTRIC") => {
                if let Some(primitive) = &mut current {
                    primitive.material = Some(ParsedMaterial::Dielectric);
                }
            }
            Some("IOR") => {
                if let Some(primitive) = &mut current {
                    assign(&mut primitive.ior, next(&mut parts));
                }
            }
            Some(_) | None => {}
        }
    }

    flush(&mut scene, current.take());
    scene
}

fn flush(scene: &mut ParsedScene, primitive: Option<ParsedPrimitive>) {
    if let Some(primitive) = primitive {
        if primitive.shape.is_some() {
            scene.primitives.push(primitive);
        }
    }
}

fn assign<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

fn next<T: FromStr>(parts: &mut SplitAsciiWhitespace) -> Option<T> {
    parts.next()?.parse().ok()
}

fn next_vec3(parts: &mut SplitAsciiWhitespace) -> Option<Vector3<Float>> {
    Some(vec3(next(parts)?, next(parts)?, next(parts)?))
}

fn next_vec2(parts: &mut SplitAsciiWhitespace) -> Option<Vector2<u32>> {
    Some(vec2(next(parts)?, next(parts)?))
}

fn next_quat(parts: &mut SplitAsciiWhitespace) -> Option<Quat> {
    let xyz = next_vec3(parts)?;
    let w = next(parts)?;
    Some(Quat::from_sv(w, xyz))
}

#[cfg(test)]
mod tests {
    use cgmath::vec3;

    use super::*;

    fn parse_str(text: &str) -> ParsedScene {
        parse(text.as_bytes())
    }

    #[test]
    fn top_level_keys() {
        let scene = parse_str(
            "DIMENSIONS 640 480\n\
             BG_COLOR 0.1 0.2 0.3\n\
             AMBIENT_LIGHT 0.5 0.5 0.5\n\
             CAMERA_POSITION 1 2 3\n\
             CAMERA_FOV_X 1.5708\n\
             RAY_DEPTH 8\n\
             SAMPLES 256\n",
        );
        assert_eq!(scene.dimensions, Some(vec2(640, 480)));
        assert_eq!(scene.bg_color, Some(vec3(0.1, 0.2, 0.3)));
        assert_eq!(scene.ambient_light, Some(vec3(0.5, 0.5, 0.5)));
        assert_eq!(scene.camera.position, Some(vec3(1.0, 2.0, 3.0)));
        assert_eq!(scene.camera.fov_x, Some(1.5708));
        assert_eq!(scene.ray_depth, Some(8));
        assert_eq!(scene.samples, Some(256));
        assert!(scene.primitives.is_empty());
    }

    #[test]
    fn primitive_blocks_flush_on_new_primitive_and_eof() {
        let scene = parse_str(
            "NEW_PRIMITIVE\n\
             BOX 1 2 3\n\
             POSITION 0 0 -4\n\
             COLOR 1 0 0\n\
             METALLIC\n\
             NEW_PRIMITIVE\n\
             ELLIPSOID 1 1 1\n\
             DIELECTRIC\n\
             IOR 1.5\n\
             EMISSION 2 2 2\n",
        );
        assert_eq!(scene.primitives.len(), 2);

        let first = &scene.primitives[0];
        assert_eq!(first.shape, Some(ParsedShape::Box(vec3(1.0, 2.0, 3.0))));
        assert_eq!(first.position, Some(vec3(0.0, 0.0, -4.0)));
        assert_eq!(first.material, Some(ParsedMaterial::Metallic));
        assert_eq!(first.ior, None);

        let second = &scene.primitives[1];
        assert_eq!(second.shape, Some(ParsedShape::Ellipsoid(vec3(1.0, 1.0, 1.0))));
        assert_eq!(second.material, Some(ParsedMaterial::Dielectric));
        assert_eq!(second.ior, Some(1.5));
        assert_eq!(second.emission, Some(vec3(2.0, 2.0, 2.0)));
    }

    #[test]
    fn rotation_is_xyzw() {
        let scene = parse_str("NEW_PRIMITIVE\nPLANE 0 1 0\nROTATION 0.1 0.2 0.3 0.9\n");
        let rotation = scene.primitives[0].rotation.unwrap();
        assert_eq!(rotation.v, vec3(0.1, 0.2, 0.3));
        assert_eq!(rotation.s, 0.9);
    }

    #[test]
    fn unknown_and_malformed_lines_are_skipped() {
        let scene = parse_str(
            "FRODO 1 2 3\n\
             BG_COLOR 0.25 0.25 0.25\n\
             BG_COLOR nan-ish oops 0\n\
             DIMENSIONS twelve 9\n\
             NEW_PRIMITIVE\n\
             BOX 1 1 1\n\
             POSITION 1 oops 3\n",
        );
        assert_eq!(scene.bg_color, Some(vec3(0.25, 0.25, 0.25)));
        assert_eq!(scene.dimensions, None);
        assert_eq!(scene.primitives[0].position, None);
    }

    #[test]
    fn primitive_keys_outside_blocks_are_ignored() {
        let scene = parse_str("COLOR 1 1 1\nBOX 1 1 1\nNEW_PRIMITIVE\nELLIPSOID 2 2 2\n");
        assert_eq!(scene.primitives.len(), 1);
        assert_eq!(scene.primitives[0].shape, Some(ParsedShape::Ellipsoid(vec3(2.0, 2.0, 2.0))));
        assert_eq!(scene.primitives[0].color, None);
    }

    #[test]
    fn shapeless_blocks_are_dropped() {
        let scene = parse_str("NEW_PRIMITIVE\nCOLOR 1 1 1\nNEW_PRIMITIVE\nBOX 1 1 1\n");
        assert_eq!(scene.primitives.len(), 1);
    }
}

use cgmath::vec3;

use crate::intersections::{Intersectable, Intersection, Intersections};
use crate::ray::Ray;
use crate::types::{Float, Vec3};

/// Axis-aligned box with half-extents `sizes`, centered at the origin.
#[derive(Debug, Clone)]
pub struct Box {
    pub sizes: Vec3,
}

#[derive(Debug)]
struct SlabHit {
    t: Float,
    sign: Float,
    axis: usize,
}

impl SlabHit {
    fn later(self, other: SlabHit) -> Self {
        if self.t < other.t {
            other
        } else {
            self
        }
    }

    fn earlier(self, other: SlabHit) -> Self {
        if self.t < other.t {
            self
        } else {
            other
        }
    }

    fn normal(&self) -> Vec3 {
        match self.axis {
            0 => vec3(self.sign, 0.0, 0.0),
            1 => vec3(0.0, self.sign, 0.0),
            _ => vec3(0.0, 0.0, self.sign),
        }
    }
}

fn slab_hits(sizes: &Vec3, ray: &Ray) -> Intersections<SlabHit> {
    let mut interval: Option<(SlabHit, SlabHit)> = None;
    for axis in 0..3 {
        if ray.dir[axis] == 0.0 {
            if sizes[axis] < ray.origin[axis].abs() {
                return Intersections::None;
            }
            continue;
        }
        let ta = (sizes[axis] - ray.origin[axis]) / ray.dir[axis];
        let tb = (-sizes[axis] - ray.origin[axis]) / ray.dir[axis];
        // sign is the outward normal component at the entry face
        let (enter, exit, sign) = if ta < tb { (ta, tb, 1.0) } else { (tb, ta, -1.0) };
        let enter = SlabHit { t: enter, sign, axis };
        let exit = SlabHit { t: exit, sign, axis };
        interval = Some(match interval {
            None => (enter, exit),
            Some((latest_entry, earliest_exit)) => {
                (enter.later(latest_entry), exit.earlier(earliest_exit))
            }
        });
    }

    let Some((entry, exit)) = interval else { return Intersections::None };
    if exit.t < entry.t {
        return Intersections::None;
    }
    if entry.t > 0.0 {
        Intersections::Two(entry, exit)
    } else if exit.t > 0.0 {
        Intersections::One(exit)
    } else {
        Intersections::None
    }
}

// The entry-face sign already faces the incoming ray at the exit, so exit
// hits reuse it unnegated.
impl Intersectable for Box {
    fn intersection(&self, ray: &Ray) -> Option<Intersection> {
        match slab_hits(&self.sizes, ray) {
            Intersections::None => None,
            Intersections::One(exit) => {
                Some(Intersection { t: exit.t, normal: exit.normal(), inside: true })
            }
            Intersections::Two(entry, _) => {
                Some(Intersection { t: entry.t, normal: entry.normal(), inside: false })
            }
        }
    }

    fn all_intersections(&self, ray: &Ray) -> Intersections {
        match slab_hits(&self.sizes, ray) {
            Intersections::None => Intersections::None,
            Intersections::One(exit) => Intersections::One(Intersection {
                t: exit.t,
                normal: exit.normal(),
                inside: true,
            }),
            Intersections::Two(entry, exit) => Intersections::Two(
                Intersection { t: entry.t, normal: entry.normal(), inside: false },
                Intersection { t: exit.t, normal: exit.normal(), inside: true },
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{ElementWise, InnerSpace};

    use super::*;

    #[test]
    fn frontal_hit() {
        let r#box = Box { sizes: vec3(1.0, 2.0, 1.0) };
        let ray = Ray { origin: vec3(0.0, 0.0, -3.0), dir: vec3(0.0, 0.0, 1.0) };
        let hit = r#box.intersection(&ray).unwrap();
        assert_eq!(hit.t, 2.0);
        assert_eq!(hit.normal, vec3(0.0, 0.0, -1.0));
        assert!(!hit.inside);
    }

    #[test]
    fn entry_and_exit_are_ordered() {
        let r#box = Box { sizes: vec3(1.0, 1.0, 1.0) };
        let ray = Ray { origin: vec3(-4.0, 0.5, 0.0), dir: vec3(1.0, 0.0, 0.0) };
        let Intersections::Two(entry, exit) = r#box.all_intersections(&ray) else {
            panic!("expected two hits");
        };
        assert!(entry.t > 0.0 && exit.t >= entry.t);
        assert_eq!((entry.t, exit.t), (3.0, 5.0));
        assert_eq!(entry.normal, vec3(-1.0, 0.0, 0.0));
        // the exit normal faces back along the ray
        assert_eq!(exit.normal, vec3(-1.0, 0.0, 0.0));
        assert!(!entry.inside && exit.inside);
    }

    #[test]
    fn inner_hit_faces_the_origin() {
        let r#box = Box { sizes: vec3(0.5, 0.5, 0.5) };
        let ray = Ray { origin: vec3(0.0, 0.0, 0.0), dir: vec3(0.0, 0.0, 1.0) };
        let hit = r#box.intersection(&ray).unwrap();
        assert_eq!(hit.t, 0.5);
        assert_eq!(hit.normal, vec3(0.0, 0.0, -1.0));
        assert!(hit.inside);
    }

    #[test]
    fn diagonal_hit_picks_the_entry_axis() {
        let r#box = Box { sizes: vec3(1.0, 2.0, 1.0) };
        let ray = Ray { origin: vec3(-2.0, 0.0, -2.0), dir: vec3(1.0, 0.0, 1.0).normalize() };
        let hit = r#box.intersection(&ray).unwrap();
        let p = ray.position_at(hit.t);
        assert!((p.z + 1.0).abs() < 1e-6 || (p.x + 1.0).abs() < 1e-6);
        assert!(hit.normal.dot(ray.dir) < 0.0);
        assert!((hit.normal.magnitude() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn hit_point_lies_on_the_surface() {
        let r#box = Box { sizes: vec3(1.0, 2.0, 3.0) };
        let ray = Ray { origin: vec3(-4.0, -5.0, -6.0), dir: vec3(1.0, 1.2, 1.4).normalize() };
        let hit = r#box.intersection(&ray).unwrap();
        let p = ray.position_at(hit.t);
        let scaled = p.div_element_wise(r#box.sizes);
        let largest = scaled.x.abs().max(scaled.y.abs()).max(scaled.z.abs());
        assert!((largest - 1.0).abs() < 1e-4);
    }

    #[test]
    fn axis_parallel_ray_outside_the_slab_misses() {
        let r#box = Box { sizes: vec3(1.0, 1.0, 1.0) };
        let ray = Ray { origin: vec3(0.0, 2.0, -5.0), dir: vec3(0.0, 0.0, 1.0) };
        assert!(r#box.intersection(&ray).is_none());
    }

    #[test]
    fn axis_parallel_ray_inside_the_slab_hits() {
        let r#box = Box { sizes: vec3(1.0, 1.0, 1.0) };
        let ray = Ray { origin: vec3(0.0, 0.5, -5.0), dir: vec3(0.0, 0.0, 1.0) };
        let hit = r#box.intersection(&ray).unwrap();
        assert_eq!(hit.t, 4.0);
        assert_eq!(hit.normal, vec3(0.0, 0.0, -1.0));
    }

    #[test]
    fn box_behind_the_ray_misses() {
        let r#box = Box { sizes: vec3(1.0, 1.0, 1.0) };
        let ray = Ray { origin: vec3(0.0, 0.0, 3.0), dir: vec3(0.0, 0.0, 1.0) };
        assert!(r#box.intersection(&ray).is_none());
    }
}

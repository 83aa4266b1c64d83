use crate::graph::{NodeId, SceneGraph};
use crate::material::Geometry;
use glam::{Mat4, Vec2, Vec3};

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Slab test against an axis-aligned box; returns the entry distance.
#[inline]
pub fn ray_aabb(ray_origin: Vec3, ray_dir: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let inv = ray_dir.recip();
    let t0 = (min - ray_origin) * inv;
    let t1 = (max - ray_origin) * inv;
    let t_near = t0.min(t1).max_element();
    let t_far = t0.max(t1).min_element();
    if t_near > t_far || t_far < 0.0 {
        return None;
    }
    Some(t_near.max(0.0))
}

const TORUS_MAX_STEPS: usize = 256;
const TORUS_EPSILON: f32 = 1e-5;

/// Signed distance to a torus of major radius 1 lying in the XZ plane.
#[inline]
fn torus_sdf(p: Vec3, tube: f32) -> f32 {
    let ring = Vec2::new(p.x, p.z).length() - 1.0;
    Vec2::new(ring, p.y).length() - tube
}

/// Ray against a torus of major radius 1 in the XZ plane with `dir`
/// normalized. Sphere-traces the exact distance field between the entry and
/// exit points of the bounding sphere, so rays through the hole miss.
pub fn ray_torus(ray_origin: Vec3, ray_dir: Vec3, tube: f32) -> Option<f32> {
    let bound = 1.0 + tube;
    let b = ray_origin.dot(ray_dir);
    let c = ray_origin.length_squared() - bound * bound;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let exit = -b + sq;
    if exit < 0.0 {
        return None;
    }
    let mut t = (-b - sq).max(0.0);
    for _ in 0..TORUS_MAX_STEPS {
        let d = torus_sdf(ray_origin + ray_dir * t, tube);
        if d < TORUS_EPSILON {
            return Some(t);
        }
        t += d;
        if t > exit {
            return None;
        }
    }
    None
}

/// Local-space hit distance against a primitive, with `dir` normalized.
fn hit_local(geometry: Geometry, origin: Vec3, dir: Vec3) -> Option<f32> {
    match geometry {
        Geometry::Sphere { .. } => ray_sphere(origin, dir, Vec3::ZERO, 1.0),
        Geometry::Cube => ray_aabb(origin, dir, Vec3::splat(-0.5), Vec3::splat(0.5)),
        Geometry::Torus { tube_milli } => ray_torus(origin, dir, tube_milli as f32 / 1000.0),
        Geometry::Quad => ray_aabb(
            origin,
            dir,
            Vec3::new(-0.5, -0.5, -0.001),
            Vec3::new(0.5, 0.5, 0.001),
        ),
    }
}

/// World-space distance from `ro` to the first hit on a node, if any.
fn hit_world(geometry: Geometry, world: &Mat4, ro: Vec3, rd: Vec3) -> Option<f32> {
    let inv = world.inverse();
    if !inv.is_finite() {
        return None;
    }
    let o = inv.transform_point3(ro);
    let d = inv.transform_vector3(rd).try_normalize()?;
    let t = hit_local(geometry, o, d)?;
    let hit = world.transform_point3(o + d * t);
    Some((hit - ro).length())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pick {
    /// Node whose geometry the ray hit first.
    pub hit: NodeId,
    /// Nearest selectable ancestor of `hit` (inclusive), or `hit` itself.
    pub selected: NodeId,
    pub distance: f32,
}

/// Cast a ray against every renderable node and resolve the selection target
/// in the same pass. Nodes tagged `pick_through` are skipped.
pub fn raycast(graph: &SceneGraph, ro: Vec3, rd: Vec3) -> Option<Pick> {
    let mut best = None::<(NodeId, f32)>;
    graph.visit_world(|id, node, world| {
        let Some(r) = node.renderable.filter(|_| !node.tags.pick_through) else {
            return;
        };
        if let Some(t) = hit_world(r.geometry, world, ro, rd) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((id, t)),
            }
        }
    });
    let (hit, distance) = best?;
    let selected = graph
        .find_ancestor(hit, |n| n.tags.selectable)
        .unwrap_or(hit);
    Some(Pick {
        hit,
        selected,
        distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_through_torus_hole_misses() {
        assert!(ray_torus(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y, 0.1).is_none());
        // Inside the bounding sphere but well clear of the tube.
        assert!(ray_torus(Vec3::new(0.3, 5.0, 0.2), Vec3::NEG_Y, 0.008).is_none());
    }

    #[test]
    fn ray_onto_tube_hits_its_surface() {
        let t = ray_torus(Vec3::new(1.0, 5.0, 0.0), Vec3::NEG_Y, 0.1).unwrap();
        assert!((t - 4.9).abs() < 1e-3, "t = {t}");
        let t = ray_torus(Vec3::new(-5.0, 0.0, 0.0), Vec3::X, 0.1).unwrap();
        assert!((t - 3.9).abs() < 1e-3, "t = {t}");
    }

    #[test]
    fn torus_behind_ray_is_ignored() {
        assert!(ray_torus(Vec3::new(1.0, 5.0, 0.0), Vec3::Y, 0.1).is_none());
    }
}

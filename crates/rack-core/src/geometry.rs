//! Ray/box math and the small set of meshes the scene is built from.
//!
//! Meshes are unit-sized and centred on the origin; draw items scale and place
//! them through their model matrix.

use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Axis-aligned bounding box in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }
}

/// Slab test. Returns the distance along the ray to the first surface hit.
///
/// Boxes are treated as double sided: a ray starting inside hits the far face.
pub fn ray_aabb(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    for axis in 0..3 {
        let o = ray.origin[axis];
        let d = ray.dir[axis];
        let (lo, hi) = (aabb.min[axis], aabb.max[axis]);
        if d.abs() < 1e-8 {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let mut t0 = (lo - o) * inv;
        let mut t1 = (hi - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }
    if t_far < 0.0 {
        return None;
    }
    Some(if t_near >= 0.0 { t_near } else { t_far })
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    const fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }
}

/// Unit cube as an indexed triangle list with per-face normals (24 vertices).
pub fn unit_cube() -> (Vec<Vertex>, Vec<u16>) {
    // (normal, u axis, v axis) per face; corners wound counter-clockwise seen from outside
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ];
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (n, u, v) in faces {
        let (n, u, v) = (Vec3::from(n), Vec3::from(u), Vec3::from(v));
        let base = vertices.len() as u16;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let p = (n + u * su + v * sv) * 0.5;
            vertices.push(Vertex::new(p.to_array(), n.to_array()));
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    (vertices, indices)
}

/// The 12 edges of the unit cube as a line list (24 vertices).
pub fn unit_cube_edges() -> Vec<Vertex> {
    let corner = |x: f32, y: f32, z: f32| Vertex::new([x * 0.5, y * 0.5, z * 0.5], [0.0; 3]);
    let mut out = Vec::with_capacity(24);
    for s in [-1.0, 1.0] {
        for t in [-1.0, 1.0] {
            out.push(corner(-1.0, s, t));
            out.push(corner(1.0, s, t));
            out.push(corner(s, -1.0, t));
            out.push(corner(s, 1.0, t));
            out.push(corner(s, t, -1.0));
            out.push(corner(s, t, 1.0));
        }
    }
    out
}

/// Wireframe of a subdivided plane lying in XZ, as a line list.
///
/// Every cell contributes its two triangles' edges (grid lines plus one
/// diagonal), the way a triangulated plane looks in wireframe.
pub fn floor_grid(size: f32, segments: u32) -> Vec<Vertex> {
    let segments = segments.max(1);
    let half = size * 0.5;
    let step = size / segments as f32;
    let up = [0.0, 1.0, 0.0];
    let p = |ix: u32, iz: u32| {
        Vertex::new(
            [-half + ix as f32 * step, 0.0, -half + iz as f32 * step],
            up,
        )
    };
    let mut out = Vec::new();
    for i in 0..=segments {
        out.push(p(i, 0));
        out.push(p(i, segments));
        out.push(p(0, i));
        out.push(p(segments, i));
    }
    for ix in 0..segments {
        for iz in 0..segments {
            out.push(p(ix, iz + 1));
            out.push(p(ix + 1, iz));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box_at(c: Vec3) -> Aabb {
        Aabb::from_center_size(c, Vec3::ONE)
    }

    #[test]
    fn ray_hits_box_in_front() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let t = ray_aabb(&ray, &unit_box_at(Vec3::new(0.0, 0.0, 5.0))).unwrap();
        assert!((t - 4.5).abs() < 1e-5);
    }

    #[test]
    fn ray_misses_box_behind_or_aside() {
        let behind = Ray::new(Vec3::ZERO, -Vec3::Z);
        assert!(ray_aabb(&behind, &unit_box_at(Vec3::new(0.0, 0.0, 5.0))).is_none());
        let aside = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(ray_aabb(&aside, &unit_box_at(Vec3::new(0.0, 0.0, 5.0))).is_none());
    }

    #[test]
    fn ray_from_inside_hits_far_face() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let t = ray_aabb(&ray, &unit_box_at(Vec3::ZERO)).unwrap();
        assert!((t - 0.5).abs() < 1e-5);
    }

    #[test]
    fn axis_parallel_ray_outside_slab_misses() {
        let ray = Ray::new(Vec3::new(0.0, 2.0, -5.0), Vec3::Z);
        assert!(ray_aabb(&ray, &unit_box_at(Vec3::ZERO)).is_none());
    }

    #[test]
    fn cube_mesh_shape() {
        let (v, i) = unit_cube();
        assert_eq!(v.len(), 24);
        assert_eq!(i.len(), 36);
        for vert in &v {
            for c in vert.position {
                assert!((c.abs() - 0.5).abs() < 1e-6);
            }
            // outward normals
            let p = Vec3::from(vert.position);
            assert!(p.dot(Vec3::from(vert.normal)) > 0.0);
        }
    }

    #[test]
    fn cube_faces_wind_counter_clockwise_from_outside() {
        let (v, i) = unit_cube();
        for tri in i.chunks(3) {
            let a = Vec3::from(v[tri[0] as usize].position);
            let b = Vec3::from(v[tri[1] as usize].position);
            let c = Vec3::from(v[tri[2] as usize].position);
            let n = Vec3::from(v[tri[0] as usize].normal);
            assert!((b - a).cross(c - a).dot(n) > 0.0);
        }
    }

    #[test]
    fn cube_edges_are_twelve_unit_segments() {
        let e = unit_cube_edges();
        assert_eq!(e.len(), 24);
        for seg in e.chunks(2) {
            let len = (Vec3::from(seg[0].position) - Vec3::from(seg[1].position)).length();
            assert!((len - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn floor_grid_counts() {
        let g = floor_grid(20.0, 20);
        // 21 lines each way plus one diagonal per cell
        assert_eq!(g.len(), (21 * 2 + 20 * 20) * 2);
        assert!(g.iter().all(|v| v.position[1] == 0.0));
    }
}

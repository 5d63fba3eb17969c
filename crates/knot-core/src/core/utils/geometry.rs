use nalgebra::{Point3, Vector3};

/// Rays with a triangle-plane determinant below this magnitude are treated
/// as parallel to the plane and report no intersection.
pub const PARALLEL_EPSILON: f64 = 1e-6;

/// Hit distances outside the open interval (`MIN_HIT_DISTANCE`,
/// `MAX_HIT_DISTANCE`) are rejected as numerically meaningless.
pub const MIN_HIT_DISTANCE: f64 = 1e-7;
pub const MAX_HIT_DISTANCE: f64 = 10_000.0;

/// A triangle passed to the intersection test by value.
///
/// Vertices are copied out of the owning trace for the duration of one probe,
/// so no reference into the trace buffer outlives an in-place mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Point3<f64>,
    pub b: Point3<f64>,
    pub c: Point3<f64>,
}

impl Triangle {
    pub fn new(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Self {
        Self { a, b, c }
    }
}

/// Barycentric coordinates and ray parameter of a ray/triangle hit.
///
/// `t` is expressed in units of the (unnormalized) ray direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayTriangleHit {
    pub u: f64,
    pub v: f64,
    pub t: f64,
}

/// Tests a ray against a triangle using the Möller–Trumbore algorithm.
///
/// Returns `None` when the ray is parallel to the triangle's plane (the
/// determinant magnitude falls below [`PARALLEL_EPSILON`]), when the
/// barycentric coordinates fall outside the triangle (`u ∈ [0,1]`, `v ≥ 0`,
/// `u + v < 1`), or when the hit distance lies outside the open interval
/// ([`MIN_HIT_DISTANCE`], [`MAX_HIT_DISTANCE`]). Degenerate triangles fall
/// under the parallel case and never produce a hit.
pub fn ray_intersects_triangle(
    origin: &Point3<f64>,
    direction: &Vector3<f64>,
    triangle: &Triangle,
) -> Option<RayTriangleHit> {
    let edge1 = triangle.b - triangle.a;
    let edge2 = triangle.c - triangle.a;

    let pvec = direction.cross(&edge2);
    let det = edge1.dot(&pvec);
    if det.abs() < PARALLEL_EPSILON {
        return None;
    }
    let inv_det = 1.0 / det;

    let tvec = origin - triangle.a;
    let u = tvec.dot(&pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let qvec = tvec.cross(&edge1);
    let v = direction.dot(&qvec) * inv_det;
    if v < 0.0 || u + v >= 1.0 {
        return None;
    }

    let t = edge2.dot(&qvec) * inv_det;
    if t <= MIN_HIT_DISTANCE || t >= MAX_HIT_DISTANCE {
        return None;
    }

    Some(RayTriangleHit { u, v, t })
}

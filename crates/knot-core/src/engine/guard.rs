use crate::core::models::trace::BackboneTrace;
use crate::core::utils::geometry::{Triangle, ray_intersects_triangle};
use nalgebra::Point3;
use tracing::trace;

/// Tests whether moving vertex `index` to `candidate` would let the chain
/// pass through itself.
///
/// The move sweeps two triangles: `(v[i-1], v[i], candidate)` towards the
/// previous neighbor and `(v[i], candidate, v[i+1])` towards the next one.
/// Both are probed against every chain segment in two groups, the segments
/// ending strictly before vertex `i-1` and the segments starting strictly
/// after vertex `i+1`. Each probe casts a ray from the segment's near vertex
/// along its edge vector; the first hit short-circuits the scan and rejects
/// the move.
///
/// Segments that share a vertex with a swept triangle (`S_{i-1}` through
/// `S_{i+1}`) are excluded: the shared vertex is a point of both the ray and
/// the triangle, so probing them would register a corner hit on every move.
/// `S_{i+2}` does share `v[i+1]`, but only as the ray origin, where the
/// near-distance bound already discards the contact.
///
/// For the first and last interior vertices one of the groups is empty; an
/// empty probe set always passes.
pub fn move_crosses_chain(
    trace: &BackboneTrace,
    index: usize,
    candidate: &Point3<f64>,
) -> bool {
    let sweep_prev = Triangle::new(
        trace.position(index - 1),
        trace.position(index),
        *candidate,
    );
    let sweep_next = Triangle::new(
        trace.position(index),
        *candidate,
        trace.position(index + 1),
    );

    let earlier = 1..index.saturating_sub(1);
    let later = (index + 2)..trace.len();

    for k in earlier.chain(later) {
        let origin = trace.position(k - 1);
        let direction = trace.position(k) - origin;

        if ray_intersects_triangle(&origin, &direction, &sweep_prev).is_some()
            || ray_intersects_triangle(&origin, &direction, &sweep_next).is_some()
        {
            trace!(index, segment = k, "Relaxation move crosses the chain.");
            return true;
        }
    }

    false
}

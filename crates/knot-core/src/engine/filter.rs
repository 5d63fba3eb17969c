use nalgebra::Point3;

/// Computes the relaxation candidate for an interior vertex.
///
/// Applies the fixed three-tap kernel `[0.25, 0.5, 0.25]` per coordinate
/// axis: the midpoint of the two neighbors, averaged with the current
/// position. Pure; committing (or discarding) the candidate is the driver's
/// job.
#[inline]
pub fn relaxation_candidate(
    prev: &Point3<f64>,
    current: &Point3<f64>,
    next: &Point3<f64>,
) -> Point3<f64> {
    let midpoint = Point3::from((prev.coords + next.coords) / 2.0);
    Point3::from((midpoint.coords + current.coords) / 2.0)
}

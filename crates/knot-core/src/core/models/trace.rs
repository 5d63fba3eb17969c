use nalgebra::Point3;

/// An ordered trace of backbone positions, one per residue.
///
/// Positions are stored contiguously in a single owned buffer for cache
/// locality; the trace is the only long-lived resource in the smoothing
/// pipeline. The type is deliberately move-only (no `Clone`): a trace has
/// exactly one owner at a time, and ownership passes between the import
/// converter, the smoothing engine, and the export converter by explicit
/// move.
///
/// The first and last positions are fixed endpoints. The smoothing engine
/// never mutates them; `set_position` itself enforces nothing, since the
/// trace is a dumb store and the endpoint invariant belongs to the engine.
#[derive(Debug, PartialEq)]
pub struct BackboneTrace {
    positions: Vec<Point3<f64>>,
}

impl BackboneTrace {
    /// Creates a trace from an ordered list of positions.
    pub fn from_positions(positions: Vec<Point3<f64>>) -> Self {
        Self { positions }
    }

    /// Returns the number of positions in the trace.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if the trace contains no positions.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the position at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn position(&self, index: usize) -> Point3<f64> {
        self.positions[index]
    }

    /// Overwrites the position at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn set_position(&mut self, index: usize, position: Point3<f64>) {
        self.positions[index] = position;
    }

    /// Iterates over the positions in trace order.
    pub fn iter(&self) -> impl Iterator<Item = &Point3<f64>> {
        self.positions.iter()
    }

    /// Consumes the trace and returns the owned position buffer.
    pub fn into_positions(self) -> Vec<Point3<f64>> {
        self.positions
    }
}

impl FromIterator<Point3<f64>> for BackboneTrace {
    fn from_iter<I: IntoIterator<Item = Point3<f64>>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

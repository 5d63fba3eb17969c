/// Parameters for the iterative smoothing driver.
///
/// A knot in a folded chain typically becomes detectable after about 50
/// smoothing passes; the default of a single pass matches the call surface
/// of the original tool and lets callers drive passes one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmoothConfig {
    /// Number of sequential smoothing passes to run. Zero is a valid no-op.
    pub passes: usize,
}

impl SmoothConfig {
    pub fn new(passes: usize) -> Self {
        Self { passes }
    }
}

impl Default for SmoothConfig {
    fn default() -> Self {
        Self { passes: 1 }
    }
}

/// Events emitted by the smoothing driver.
///
/// Reporting is purely observational: whether a callback is installed or not,
/// the driver takes exactly the same control path and commits exactly the
/// same geometry.
#[derive(Debug, Clone)]
pub enum Progress {
    /// A smoothing run is starting, with the total number of passes.
    SmoothStart { passes: u64 },
    /// One pass over the interior vertices is starting (1-based).
    PassStart { pass: u64 },
    /// A vertex committed its relaxation candidate.
    VertexMoved { index: usize },
    /// A vertex kept its position because the move would cross the chain.
    VertexRejected { index: usize },
    /// One pass finished, with its accept/reject tallies.
    PassFinish { moved: u64, rejected: u64 },

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

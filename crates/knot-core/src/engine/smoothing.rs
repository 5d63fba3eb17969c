use crate::core::models::trace::BackboneTrace;
use crate::engine::filter::relaxation_candidate;
use crate::engine::guard::move_crosses_chain;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::debug;

/// Accept/reject tallies for a single smoothing pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassOutcome {
    pub moved: u64,
    pub rejected: u64,
}

/// Accumulated tallies for a full smoothing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SmoothStats {
    pub passes: u64,
    pub moved: u64,
    pub rejected: u64,
}

/// Runs one relaxation pass over the interior vertices.
///
/// Vertices are visited in strictly increasing index order and committed in
/// place, so each candidate is computed from already-updated predecessors
/// within the same pass. This sequential ordering is load-bearing: it is what
/// makes the output reproducible, and it must not be parallelized across
/// vertices. Endpoints are never touched; a trace with fewer than three
/// vertices has no interior and the pass is a no-op.
pub fn smooth_pass(trace: &mut BackboneTrace, reporter: &ProgressReporter) -> PassOutcome {
    let mut outcome = PassOutcome::default();
    if trace.len() < 3 {
        return outcome;
    }

    for index in 1..=trace.len() - 2 {
        let candidate = relaxation_candidate(
            &trace.position(index - 1),
            &trace.position(index),
            &trace.position(index + 1),
        );

        if move_crosses_chain(trace, index, &candidate) {
            outcome.rejected += 1;
            reporter.report(Progress::VertexRejected { index });
        } else {
            trace.set_position(index, candidate);
            outcome.moved += 1;
            reporter.report(Progress::VertexMoved { index });
        }
    }

    outcome
}

/// Runs `passes` sequential smoothing passes over the trace.
///
/// Zero passes is a valid no-op. A knotted chain typically needs on the
/// order of 50 passes before the knot stands out from the collapsed trace.
pub fn smooth(
    trace: &mut BackboneTrace,
    passes: usize,
    reporter: &ProgressReporter,
) -> SmoothStats {
    let mut stats = SmoothStats::default();
    reporter.report(Progress::SmoothStart {
        passes: passes as u64,
    });

    for pass in 1..=passes as u64 {
        reporter.report(Progress::PassStart { pass });

        let outcome = smooth_pass(trace, reporter);
        debug!(
            pass,
            moved = outcome.moved,
            rejected = outcome.rejected,
            "Smoothing pass complete."
        );

        stats.passes += 1;
        stats.moved += outcome.moved;
        stats.rejected += outcome.rejected;
        reporter.report(Progress::PassFinish {
            moved: outcome.moved,
            rejected: outcome.rejected,
        });
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    const TOLERANCE: f64 = 1e-12;

    fn trace_of(points: &[(f64, f64, f64)]) -> BackboneTrace {
        points
            .iter()
            .map(|&(x, y, z)| Point3::new(x, y, z))
            .collect()
    }

    fn points_approx_equal(a: &Point3<f64>, b: &Point3<f64>) -> bool {
        (a - b).norm() < TOLERANCE
    }

    #[test]
    fn collinear_trace_is_a_fixed_point() {
        let mut trace = trace_of(&[
            (0.0, 0.0, 0.0),
            (1.0, 0.0, 0.0),
            (2.0, 0.0, 0.0),
            (3.0, 0.0, 0.0),
            (4.0, 0.0, 0.0),
        ]);

        let stats = smooth(&mut trace, 5, &ProgressReporter::new());

        assert_eq!(stats.passes, 5);
        assert_eq!(stats.rejected, 0);
        for (i, expected_x) in [0.0, 1.0, 2.0, 3.0, 4.0].into_iter().enumerate() {
            assert!(points_approx_equal(
                &trace.position(i),
                &Point3::new(expected_x, 0.0, 0.0)
            ));
        }
    }

    #[test]
    fn single_pass_relaxes_an_unobstructed_v_shape() {
        let mut trace = trace_of(&[(0.0, 0.0, 0.0), (1.0, 1.0, 0.0), (2.0, 0.0, 0.0)]);

        let stats = smooth(&mut trace, 1, &ProgressReporter::new());

        assert_eq!(stats.moved, 1);
        assert_eq!(stats.rejected, 0);
        assert_eq!(trace.position(0), Point3::new(0.0, 0.0, 0.0));
        assert!(points_approx_equal(
            &trace.position(1),
            &Point3::new(1.0, 0.5, 0.0)
        ));
        assert_eq!(trace.position(2), Point3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn obstructed_vertex_is_left_in_place_while_others_move() {
        // A fold where the tail doubles back through the region the spike at
        // index 3 would sweep while relaxing. Index 2 relaxes first (and
        // freely); the guard then pins index 3.
        let mut trace = trace_of(&[
            (0.0, 0.0, 0.0),
            (1.0, 0.0, 0.0),
            (2.0, 0.0, 0.0),
            (3.0, 2.0, 0.0),
            (4.0, 0.0, 0.0),
            (2.8, 1.2, -1.0),
            (2.8, 1.2, 1.0),
        ]);

        smooth(&mut trace, 1, &ProgressReporter::new());

        assert!(points_approx_equal(
            &trace.position(2),
            &Point3::new(2.0, 0.5, 0.0)
        ));
        assert!(points_approx_equal(
            &trace.position(3),
            &Point3::new(3.0, 2.0, 0.0)
        ));
        assert_eq!(trace.position(0), Point3::new(0.0, 0.0, 0.0));
        assert_eq!(trace.position(6), Point3::new(2.8, 1.2, 1.0));
    }

    #[test]
    fn traces_shorter_than_three_vertices_are_never_mutated() {
        for points in [
            &[][..],
            &[(1.0, 2.0, 3.0)][..],
            &[(1.0, 2.0, 3.0), (4.0, 5.0, 6.0)][..],
        ] {
            let mut trace = trace_of(points);
            let original: Vec<_> = trace.iter().copied().collect();

            let stats = smooth(&mut trace, 10, &ProgressReporter::new());

            assert_eq!(stats.moved, 0);
            assert_eq!(stats.rejected, 0);
            assert_eq!(trace.iter().copied().collect::<Vec<_>>(), original);
        }
    }

    #[test]
    fn zero_passes_is_a_no_op() {
        let mut trace = trace_of(&[(0.0, 0.0, 0.0), (1.0, 1.0, 0.0), (2.0, 0.0, 0.0)]);

        let stats = smooth(&mut trace, 0, &ProgressReporter::new());

        assert_eq!(stats, SmoothStats::default());
        assert_eq!(trace.position(1), Point3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn endpoints_are_fixed_for_any_pass_count() {
        let mut trace = trace_of(&[
            (0.0, 0.0, 0.0),
            (1.0, 3.0, -2.0),
            (2.0, -1.0, 4.0),
            (3.0, 2.0, 1.0),
            (4.0, 0.0, 0.0),
        ]);

        smooth(&mut trace, 25, &ProgressReporter::new());

        assert_eq!(trace.len(), 5);
        assert_eq!(trace.position(0), Point3::new(0.0, 0.0, 0.0));
        assert_eq!(trace.position(4), Point3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn identical_inputs_produce_bit_identical_outputs() {
        let points = [
            (0.0, 0.0, 0.0),
            (1.3, 2.1, -0.7),
            (2.9, -1.4, 0.3),
            (3.2, 0.8, 1.9),
            (4.6, -0.2, -1.1),
            (5.0, 1.0, 0.0),
        ];

        let mut first = trace_of(&points);
        let mut second = trace_of(&points);
        smooth(&mut first, 10, &ProgressReporter::new());
        smooth(&mut second, 10, &ProgressReporter::new());

        assert_eq!(
            first.into_positions(),
            second.into_positions(),
            "two runs over the same input must agree bit for bit"
        );
    }

    #[test]
    fn pass_events_are_reported_in_order() {
        use std::sync::Mutex;

        let events: Mutex<Vec<Progress>> = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));
        let mut trace = trace_of(&[(0.0, 0.0, 0.0), (1.0, 1.0, 0.0), (2.0, 0.0, 0.0)]);

        smooth(&mut trace, 2, &reporter);
        drop(reporter);

        let events = events.into_inner().unwrap();
        assert!(matches!(events[0], Progress::SmoothStart { passes: 2 }));
        assert!(matches!(events[1], Progress::PassStart { pass: 1 }));
        assert!(matches!(events[2], Progress::VertexMoved { index: 1 }));
        assert!(matches!(
            events[3],
            Progress::PassFinish {
                moved: 1,
                rejected: 0
            }
        ));
        assert!(matches!(events[4], Progress::PassStart { pass: 2 }));
    }
}

use crate::snapshot::Snapshot;

/// Decides, after each generation's snapshot is produced, whether a run
/// should stop.
///
/// Two consecutive snapshot files of an unchanged grid still differ in a
/// constant number of per-file header lines, so "the pattern stopped
/// changing" is detected as a line difference of exactly that many lines
/// rather than as equality. The tolerance defaults to one line.
///
/// This is a heuristic, not a true equality test: a coincidental difference
/// of exactly the tolerated number of lines between genuinely different
/// states also stops the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvergenceDetector {
    /// Number of differing lines attributed to the snapshot header.
    tolerance: usize,
}

impl Default for ConvergenceDetector {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ConvergenceDetector {
    /// Create a detector that attributes `header_lines` differing lines to
    /// the engine's per-file snapshot header.
    pub const fn new(header_lines: usize) -> Self {
        Self {
            tolerance: header_lines,
        }
    }

    /// Whether the run should stop after the current generation.
    ///
    /// - An empty grid always stops the run: the population is extinct.
    /// - The first generation never stops the run. There is no previous
    ///   generation to compare against, and `prev` is ignored.
    /// - Otherwise the run stops when the number of lines of `curr` that are
    ///   absent from `prev` equals the header tolerance exactly. With the
    ///   default tolerance of one line, identical snapshots do not stop the
    ///   run.
    pub fn should_stop(
        &self,
        prev: Option<&Snapshot>,
        curr: &Snapshot,
        is_first_generation: bool,
        grid_is_empty: bool,
    ) -> bool {
        if grid_is_empty {
            return true;
        }

        if is_first_generation {
            return false;
        }

        prev.is_some_and(|prev| curr.lines_not_in(prev) == self.tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_always_stops() {
        let detector = ConvergenceDetector::default();
        let snapshot = Snapshot::new("A\nB");

        assert!(detector.should_stop(None, &snapshot, true, true));
        assert!(detector.should_stop(Some(&snapshot.clone()), &snapshot, false, true));
    }

    #[test]
    fn test_first_generation_never_stops() {
        let detector = ConvergenceDetector::default();
        let snapshot = Snapshot::new("A\nB");

        assert!(!detector.should_stop(None, &snapshot, true, false));
        // Even a comparable previous snapshot is ignored on the first
        // generation.
        assert!(!detector.should_stop(Some(&snapshot.clone()), &snapshot, true, false));
    }

    #[test]
    fn test_one_extra_line_stops() {
        let detector = ConvergenceDetector::default();
        let prev = Snapshot::new("A\nB\nC");
        let curr = Snapshot::new("A\nB\nC\nX");

        assert!(detector.should_stop(Some(&prev), &curr, false, false));
    }

    #[test]
    fn test_two_differing_lines_do_not_stop() {
        let detector = ConvergenceDetector::default();
        let prev = Snapshot::new("A\nB");
        let curr = Snapshot::new("A\nC\nD");

        assert!(!detector.should_stop(Some(&prev), &curr, false, false));
    }

    #[test]
    fn test_identical_snapshots_do_not_stop() {
        // The one-line tolerance means true equality is never itself
        // classified as converged.
        let detector = ConvergenceDetector::default();
        let snapshot = Snapshot::new("A\nB\nC");

        assert!(!detector.should_stop(Some(&snapshot.clone()), &snapshot, false, false));
    }

    #[test]
    fn test_tolerance_is_configurable() {
        let detector = ConvergenceDetector::new(0);
        let snapshot = Snapshot::new("A\nB\nC");
        let one_extra = Snapshot::new("A\nB\nC\nX");

        assert!(detector.should_stop(Some(&snapshot.clone()), &snapshot, false, false));
        assert!(!detector.should_stop(Some(&snapshot), &one_extra, false, false));

        let detector = ConvergenceDetector::new(2);
        let prev = Snapshot::new("A\nB");
        let curr = Snapshot::new("A\nC\nD");

        assert!(detector.should_stop(Some(&prev), &curr, false, false));
    }
}

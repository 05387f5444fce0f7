//! Step-trace generators for the seven supported sorting algorithms
//!
//! Each algorithm converts an input sequence into a deterministic, replayable
//! [`Trace`] of [`Step`] snapshots: a `comparing` step immediately before a
//! comparison that may lead to a write, a separate `swapping` step
//! immediately after the write, and one trailing step with the whole range
//! marked sorted.  The caller's input is never mutated; two runs over the
//! same input produce identical traces.
//!
//! Traces are materialized eagerly because the playback layer scrubs
//! backward by decrementing an index into the step list.

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod recorder;
mod selection;
mod shell;
mod step;

pub use step::{Step, Vars};

use recorder::TraceRecorder;

/// The supported sorting algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Shell,
}

impl SortAlgorithm {
    /// All algorithms, in menu order.
    pub const ALL: [SortAlgorithm; 7] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
        SortAlgorithm::Shell,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Merge => "Merge Sort",
            SortAlgorithm::Quick => "Quick Sort",
            SortAlgorithm::Heap => "Heap Sort",
            SortAlgorithm::Shell => "Shell Sort",
        }
    }

    /// Parse a command-line algorithm name (case-insensitive).
    pub fn from_name(name: &str) -> Option<SortAlgorithm> {
        match name.to_ascii_lowercase().as_str() {
            "bubble" => Some(SortAlgorithm::Bubble),
            "selection" => Some(SortAlgorithm::Selection),
            "insertion" => Some(SortAlgorithm::Insertion),
            "merge" => Some(SortAlgorithm::Merge),
            "quick" => Some(SortAlgorithm::Quick),
            "heap" => Some(SortAlgorithm::Heap),
            "shell" => Some(SortAlgorithm::Shell),
            _ => None,
        }
    }

    /// Run the algorithm over a private copy of `input` and record every
    /// intermediate state.  Total for any finite input; an empty input
    /// yields a trace of exactly the trailing completed-state step.
    pub fn trace(self, input: &[i64]) -> Trace {
        let mut rec = TraceRecorder::new(input);
        match self {
            SortAlgorithm::Bubble => bubble::run(&mut rec),
            SortAlgorithm::Selection => selection::run(&mut rec),
            SortAlgorithm::Insertion => insertion::run(&mut rec),
            SortAlgorithm::Merge => merge::run(&mut rec),
            SortAlgorithm::Quick => quick::run(&mut rec),
            SortAlgorithm::Heap => heap::run(&mut rec),
            SortAlgorithm::Shell => shell::run(&mut rec),
        }
        rec.finish()
    }
}

/// The full ordered record of one algorithm invocation, immutable once
/// produced.  Always contains at least the trailing completed-state step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub(crate) steps: Vec<Step>,
}

impl Trace {
    /// Get a step by index.
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Number of steps, including the trailing step.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// All steps in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The trailing completed-state step.
    pub fn last(&self) -> &Step {
        self.steps.last().expect("a trace always has a trailing step")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubble_two_elements_out_of_order() {
        let trace = SortAlgorithm::Bubble.trace(&[2, 1]);
        let steps = trace.steps();
        // compare, swap, trailing
        assert_eq!(steps.len(), 3);

        assert_eq!(steps[0].array, vec![2, 1]);
        assert_eq!(steps[0].comparing, vec![0, 1]);
        assert!(steps[0].swapping.is_empty());
        assert_eq!(steps[0].swap_count, 0);

        assert_eq!(steps[1].array, vec![1, 2]);
        assert_eq!(steps[1].swapping, vec![0, 1]);
        assert!(steps[1].comparing.is_empty());
        assert_eq!(steps[1].swap_count, 1);

        assert_eq!(steps[2].array, vec![1, 2]);
        assert!(steps[2].comparing.is_empty());
        assert!(steps[2].swapping.is_empty());
        assert_eq!(steps[2].sorted.len(), 2);
    }

    #[test]
    fn input_is_not_mutated() {
        let input = vec![5, 3, 8, 1];
        let _ = SortAlgorithm::Quick.trace(&input);
        assert_eq!(input, vec![5, 3, 8, 1]);
    }

    #[test]
    fn single_element_yields_only_trailing_step() {
        for algo in SortAlgorithm::ALL {
            let trace = algo.trace(&[7]);
            let last = trace.last();
            assert_eq!(last.array, vec![7], "{}", algo.name());
            assert_eq!(last.sorted, vec![0], "{}", algo.name());
        }
    }

    #[test]
    fn quick_partition_steps_carry_pivot() {
        let trace = SortAlgorithm::Quick.trace(&[3, 1, 2]);
        let partition_steps: Vec<_> =
            trace.steps().iter().filter(|s| s.pivot.is_some()).collect();
        assert!(!partition_steps.is_empty());
        // Trailing step never carries a pivot.
        assert_eq!(trace.last().pivot, None);
    }

    #[test]
    fn from_name_round_trips() {
        for algo in SortAlgorithm::ALL {
            let short = algo.name().split(' ').next().unwrap().to_lowercase();
            assert_eq!(SortAlgorithm::from_name(&short), Some(algo));
        }
        assert_eq!(SortAlgorithm::from_name("bogo"), None);
    }
}

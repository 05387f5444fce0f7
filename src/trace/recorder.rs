//! Trace recorder shared by all algorithm generators
//!
//! The recorder owns the working copy of the input array and the bookkeeping
//! that every step snapshot carries: the finalized-index list, the write
//! counter and the active pivot.  Algorithms drive it imperatively
//! (`get`/`swap`/`write`) and emit snapshots with [`TraceRecorder::compare`]
//! and [`TraceRecorder::swapped`]; [`TraceRecorder::finish`] appends the
//! uniform trailing step and seals the trace.

use super::step::Step;
use super::Trace;

/// Accumulates [`Step`]s while an algorithm executes over a private copy of
/// the input.
#[derive(Debug)]
pub(crate) struct TraceRecorder {
    array: Vec<i64>,
    sorted: Vec<usize>,
    pivot: Option<usize>,
    swap_count: usize,
    steps: Vec<Step>,
}

impl TraceRecorder {
    pub fn new(input: &[i64]) -> Self {
        TraceRecorder {
            array: input.to_vec(),
            sorted: Vec::new(),
            pivot: None,
            swap_count: 0,
            steps: Vec::new(),
        }
    }

    /// Length of the working array.
    pub fn len(&self) -> usize {
        self.array.len()
    }

    /// Read one element of the working array.
    pub fn get(&self, index: usize) -> i64 {
        self.array[index]
    }

    /// Copy a sub-range of the working array (merge sort scratch buffers).
    pub fn slice(&self, start: usize, end: usize) -> Vec<i64> {
        self.array[start..end].to_vec()
    }

    /// Exchange two elements, counting one write.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.array.swap(a, b);
        self.swap_count += 1;
    }

    /// Overwrite one element, counting one write.
    pub fn write(&mut self, index: usize, value: i64) {
        self.array[index] = value;
        self.swap_count += 1;
    }

    /// Overwrite one element without touching the counter.  Used for the
    /// final key/temp placement of insertion-style algorithms, which the
    /// visualization shows but does not count.
    pub fn place(&mut self, index: usize, value: i64) {
        self.array[index] = value;
    }

    /// Mark an index as final.  Indices accumulate in finalization order and
    /// are never removed.
    pub fn mark_sorted(&mut self, index: usize) {
        self.sorted.push(index);
    }

    /// Set the active partition pivot carried by subsequent steps.
    pub fn set_pivot(&mut self, index: usize) {
        self.pivot = Some(index);
    }

    /// Clear the active pivot.
    pub fn clear_pivot(&mut self) {
        self.pivot = None;
    }

    /// Emit a comparison snapshot for the given positions.
    pub fn compare(&mut self, indices: &[usize], vars: &[(&'static str, i64)]) {
        self.emit(indices, &[], vars);
    }

    /// Emit a write/exchange snapshot for the given positions.  Called
    /// immediately after the corresponding `swap`/`write`.
    pub fn swapped(&mut self, indices: &[usize], vars: &[(&'static str, i64)]) {
        self.emit(&[], indices, vars);
    }

    fn emit(&mut self, comparing: &[usize], swapping: &[usize], vars: &[(&'static str, i64)]) {
        self.steps.push(Step {
            array: self.array.clone(),
            comparing: comparing.to_vec(),
            swapping: swapping.to_vec(),
            sorted: self.sorted.clone(),
            pivot: self.pivot,
            vars: vars.to_vec(),
            swap_count: self.swap_count,
        });
    }

    /// Append the trailing completed-state step and seal the trace.
    ///
    /// The trailing step always has empty comparing/swapping sets and a
    /// `sorted` list covering every position.  Algorithms that finalize
    /// incrementally (bubble, selection, heap, ...) keep their accumulated
    /// order; the rest get the full range in index order.
    pub fn finish(mut self) -> Trace {
        self.pivot = None;
        if self.sorted.len() != self.array.len() {
            self.sorted = (0..self.array.len()).collect();
        }
        self.emit(&[], &[], &[]);
        Trace { steps: self.steps }
    }
}

//! Bubble sort: adjacent comparison and exchange passes.
//!
//! Each outer pass floats the largest remaining element to the end of the
//! unsorted prefix, so index `n - i - 1` is finalized as pass `i` completes.

use super::recorder::TraceRecorder;

pub(crate) fn run(rec: &mut TraceRecorder) {
    let n = rec.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            rec.compare(&[j, j + 1], &[("i", i as i64), ("j", j as i64)]);
            if rec.get(j) > rec.get(j + 1) {
                rec.swap(j, j + 1);
                rec.swapped(&[j, j + 1], &[("i", i as i64), ("j", j as i64)]);
            }
        }
        rec.mark_sorted(n - i - 1);
    }
    if n > 0 {
        rec.mark_sorted(0);
    }
}

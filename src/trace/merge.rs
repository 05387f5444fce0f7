//! Merge sort: recursive halving with scratch-buffer merges.
//!
//! Every merge write is counted and snapshotted individually.  No index is
//! marked final mid-recursion; a merged sub-range is not globally ordered
//! until the top-level merge completes, so only the trailing step carries
//! the full sorted range.

use super::recorder::TraceRecorder;

pub(crate) fn run(rec: &mut TraceRecorder) {
    let n = rec.len();
    if n > 1 {
        sort(rec, 0, n - 1);
    }
}

fn sort(rec: &mut TraceRecorder, l: usize, r: usize) {
    if l < r {
        let m = l + (r - l) / 2;
        sort(rec, l, m);
        sort(rec, m + 1, r);
        merge(rec, l, m, r);
    }
}

fn merge(rec: &mut TraceRecorder, l: usize, m: usize, r: usize) {
    let left = rec.slice(l, m + 1);
    let right = rec.slice(m + 1, r + 1);

    let mut i = 0;
    let mut j = 0;
    let mut k = l;
    while i < left.len() && j < right.len() {
        rec.compare(&[l + i, m + 1 + j], &[]);
        if left[i] <= right[j] {
            rec.write(k, left[i]);
            i += 1;
        } else {
            rec.write(k, right[j]);
            j += 1;
        }
        rec.swapped(&[k], &[]);
        k += 1;
    }
    while i < left.len() {
        rec.write(k, left[i]);
        i += 1;
        rec.swapped(&[k], &[]);
        k += 1;
    }
    while j < right.len() {
        rec.write(k, right[j]);
        j += 1;
        rec.swapped(&[k], &[]);
        k += 1;
    }
}

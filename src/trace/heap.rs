//! Heapsort: build a max-heap, then repeatedly swap the root to the end of
//! the shrinking heap and sift down.
//!
//! Sift-down compares the left child first, then the right, before emitting
//! the swap of the winning child and recursing into that subtree.  Each
//! extraction finalizes the index moved past the heap boundary.

use super::recorder::TraceRecorder;

pub(crate) fn run(rec: &mut TraceRecorder) {
    let n = rec.len();
    for i in (0..n / 2).rev() {
        sift_down(rec, n, i);
    }
    for i in (1..n).rev() {
        rec.swap(0, i);
        rec.mark_sorted(i);
        rec.swapped(&[0, i], &[("i", i as i64)]);
        sift_down(rec, i, 0);
    }
    if n > 0 {
        rec.mark_sorted(0);
    }
}

fn sift_down(rec: &mut TraceRecorder, size: usize, i: usize) {
    let mut largest = i;
    let l = 2 * i + 1;
    let r = 2 * i + 2;

    if l < size {
        rec.compare(
            &[l, largest],
            &[
                ("i", i as i64),
                ("size", size as i64),
                ("l", l as i64),
                ("r", r as i64),
            ],
        );
        if rec.get(l) > rec.get(largest) {
            largest = l;
        }
    }

    if r < size {
        rec.compare(
            &[r, largest],
            &[
                ("i", i as i64),
                ("size", size as i64),
                ("l", l as i64),
                ("r", r as i64),
                ("largest", largest as i64),
            ],
        );
        if rec.get(r) > rec.get(largest) {
            largest = r;
        }
    }

    if largest != i {
        rec.swap(i, largest);
        rec.swapped(&[i, largest], &[("i", i as i64), ("largest", largest as i64)]);
        sift_down(rec, size, largest);
    }
}

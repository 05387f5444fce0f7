//! Quicksort: Lomuto partition (pivot = last element) driven by an explicit
//! range stack.
//!
//! Sub-ranges are pushed left-then-right after each partition, so the right
//! sub-range is processed first (LIFO).  Every step emitted inside a
//! partition carries the active pivot index.  Nothing is marked sorted until
//! the whole range is done; the trailing step covers it.

use super::recorder::TraceRecorder;

pub(crate) fn run(rec: &mut TraceRecorder) {
    let n = rec.len();
    let mut ranges: Vec<(i64, i64)> = vec![(0, n as i64 - 1)];
    while let Some((l, r)) = ranges.pop() {
        if l < r {
            let p = partition(rec, l as usize, r as usize) as i64;
            ranges.push((l, p - 1));
            ranges.push((p + 1, r));
        }
    }
}

fn partition(rec: &mut TraceRecorder, l: usize, r: usize) -> usize {
    let pivot = rec.get(r);
    rec.set_pivot(r);
    let mut i = l as i64 - 1;
    for j in l..r {
        rec.compare(
            &[j, r],
            &[
                ("l", l as i64),
                ("r", r as i64),
                ("i", i),
                ("j", j as i64),
                ("pivotValue", pivot),
            ],
        );
        if rec.get(j) < pivot {
            i += 1;
            rec.swap(i as usize, j);
            rec.swapped(
                &[i as usize, j],
                &[
                    ("l", l as i64),
                    ("r", r as i64),
                    ("i", i),
                    ("j", j as i64),
                    ("pivotValue", pivot),
                ],
            );
        }
    }
    let p = (i + 1) as usize;
    rec.swap(p, r);
    rec.set_pivot(p);
    rec.swapped(
        &[p, r],
        &[
            ("l", l as i64),
            ("r", r as i64),
            ("i", p as i64),
            ("pivotValue", pivot),
        ],
    );
    rec.clear_pivot();
    p
}

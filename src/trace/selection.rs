//! Selection sort: find the minimum of the unsorted suffix, swap it into
//! place.  Index `i` is finalized at the end of each outer iteration.

use super::recorder::TraceRecorder;

pub(crate) fn run(rec: &mut TraceRecorder) {
    let n = rec.len();
    for i in 0..n {
        let mut min_idx = i;
        for j in i + 1..n {
            rec.compare(
                &[min_idx, j],
                &[
                    ("i", i as i64),
                    ("j", j as i64),
                    ("minIdx", min_idx as i64),
                ],
            );
            if rec.get(j) < rec.get(min_idx) {
                min_idx = j;
            }
        }
        if min_idx != i {
            rec.swap(i, min_idx);
            rec.swapped(
                &[i, min_idx],
                &[("i", i as i64), ("minIdx", min_idx as i64)],
            );
        }
        rec.mark_sorted(i);
    }
}

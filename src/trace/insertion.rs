//! Insertion sort: grow a sorted prefix by shifting larger elements right
//! and dropping the key into the gap.
//!
//! A comparison snapshot precedes every evaluated comparison and each shift
//! gets its own write snapshot, so highlight and move render as distinct
//! phases.  The final key placement is shown but not counted as a swap.

use super::recorder::TraceRecorder;

pub(crate) fn run(rec: &mut TraceRecorder) {
    let n = rec.len();
    if n > 0 {
        rec.mark_sorted(0);
    }
    for i in 1..n {
        let key = rec.get(i);
        let mut j = i as i64 - 1;
        rec.compare(&[i, j as usize], &[("i", i as i64), ("j", j), ("key", key)]);
        while j >= 0 && rec.get(j as usize) > key {
            let shifted = rec.get(j as usize);
            rec.write(j as usize + 1, shifted);
            rec.swapped(
                &[j as usize + 1],
                &[("i", i as i64), ("j", j), ("key", key)],
            );
            j -= 1;
            if j >= 0 {
                rec.compare(&[j as usize], &[("i", i as i64), ("j", j), ("key", key)]);
            }
        }
        rec.place((j + 1) as usize, key);
        rec.mark_sorted(i);
        rec.swapped(
            &[(j + 1) as usize],
            &[("i", i as i64), ("j", j + 1), ("key", key)],
        );
    }
}

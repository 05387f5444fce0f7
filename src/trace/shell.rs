//! Shellsort: gapped insertion sort with halving gaps ⌊n/2⌋, ⌊n/4⌋, ... 1.
//!
//! At each gap the inner loop shifts larger elements one gap to the right;
//! the final temp placement is shown without incrementing the write counter,
//! matching the insertion-sort convention.

use super::recorder::TraceRecorder;

pub(crate) fn run(rec: &mut TraceRecorder) {
    let n = rec.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let temp = rec.get(i);
            let mut j = i;
            while j >= gap && rec.get(j - gap) > temp {
                rec.compare(
                    &[j - gap, j],
                    &[("gap", gap as i64), ("i", i as i64), ("j", j as i64)],
                );
                let shifted = rec.get(j - gap);
                rec.write(j, shifted);
                rec.swapped(
                    &[j],
                    &[("gap", gap as i64), ("i", i as i64), ("j", j as i64)],
                );
                j -= gap;
            }
            rec.place(j, temp);
            rec.swapped(
                &[j],
                &[("gap", gap as i64), ("i", i as i64), ("j", j as i64)],
            );
        }
        gap /= 2;
    }
}

use sortlab::trace::{SortAlgorithm, Step, Trace};

fn sample_inputs() -> Vec<Vec<i64>> {
    vec![
        vec![],
        vec![7],
        vec![2, 1],
        vec![5, 3, 8, 1],
        vec![1, 2, 3, 4, 5],
        vec![9, 7, 5, 3, 1],
        vec![4, 4, 4, 4],
        vec![3, -1, 0, -5, 2, 2],
        vec![10, 80, 30, 90, 40, 50, 70],
    ]
}

fn is_non_decreasing(values: &[i64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

fn same_multiset(a: &[i64], b: &[i64]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

fn check_trace_invariants(algo: SortAlgorithm, input: &[i64], trace: &Trace) {
    let name = algo.name();
    assert!(!trace.is_empty(), "{}: trace has at least one step", name);

    // The first step reflects the unmodified input.
    let first = trace.get(0).unwrap();
    assert_eq!(first.array, input, "{}: first step shows the input", name);

    // The trailing step is fully sorted with no active highlights.
    let last = trace.last();
    assert!(is_non_decreasing(&last.array), "{}: final array sorted", name);
    assert!(same_multiset(&last.array, input), "{}: permutation", name);
    assert!(last.comparing.is_empty(), "{}: final comparing empty", name);
    assert!(last.swapping.is_empty(), "{}: final swapping empty", name);
    let mut sorted = last.sorted.clone();
    sorted.sort_unstable();
    assert_eq!(
        sorted,
        (0..input.len()).collect::<Vec<_>>(),
        "{}: final sorted set covers the whole range",
        name
    );

    let mut prev: Option<&Step> = None;
    for step in trace.steps() {
        // Every step owns a full array of the same multiset.
        assert!(same_multiset(&step.array, input), "{}: step permutation", name);
        assert!(step.comparing.len() <= 2, "{}: at most two compared", name);
        assert!(step.swapping.len() <= 2, "{}: at most two swapped", name);
        // Highlight phases are distinct, never merged.
        assert!(
            step.comparing.is_empty() || step.swapping.is_empty(),
            "{}: comparing and swapping never share a step",
            name
        );

        if let Some(prev) = prev {
            // swap_count is non-decreasing and only moves on swap steps.
            assert!(step.swap_count >= prev.swap_count, "{}: swaps monotone", name);
            if step.swapping.is_empty() {
                assert_eq!(
                    step.swap_count, prev.swap_count,
                    "{}: comparisons never count as swaps",
                    name
                );
            }
            // sorted set growth is monotone.
            assert!(
                step.sorted.len() >= prev.sorted.len(),
                "{}: sorted set never shrinks",
                name
            );
            assert!(
                step.sorted.starts_with(&prev.sorted),
                "{}: sorted set only appends",
                name
            );
        }
        prev = Some(step);
    }
}

#[test]
fn all_algorithms_sort_all_inputs() {
    for algo in SortAlgorithm::ALL {
        for input in sample_inputs() {
            let trace = algo.trace(&input);
            check_trace_invariants(algo, &input, &trace);
        }
    }
}

#[test]
fn traces_are_deterministic() {
    let input = [5, 3, 8, 1];
    for algo in SortAlgorithm::ALL {
        let a = algo.trace(&input);
        let b = algo.trace(&input);
        assert_eq!(a, b, "{}: identical input, identical trace", algo.name());
    }
}

#[test]
fn empty_input_yields_exactly_the_trailing_step() {
    for algo in SortAlgorithm::ALL {
        let trace = algo.trace(&[]);
        assert_eq!(trace.len(), 1, "{}", algo.name());
        let step = trace.get(0).unwrap();
        assert!(step.array.is_empty());
        assert!(step.comparing.is_empty());
        assert!(step.swapping.is_empty());
        assert!(step.sorted.is_empty());
        assert_eq!(step.swap_count, 0);
    }
}

#[test]
fn comparison_steps_precede_swap_steps() {
    // Every algorithm on a reversed input must alternate highlight phases:
    // a swap step never appears before the first comparison step.
    for algo in SortAlgorithm::ALL {
        let trace = algo.trace(&[5, 4, 3, 2, 1]);
        let first_swap = trace.steps().iter().position(|s| s.is_swap());
        let first_cmp = trace.steps().iter().position(|s| s.is_comparison());
        if let (Some(swap), Some(cmp)) = (first_swap, first_cmp) {
            assert!(cmp < swap, "{}: compare before swap", algo.name());
        }
    }
}

#[test]
fn quick_sort_pivot_tracking() {
    let trace = SortAlgorithm::Quick.trace(&[10, 80, 30, 90, 40, 50, 70]);
    // Partition steps carry a pivot; the trailing step does not.
    assert!(trace.steps().iter().any(|s| s.pivot.is_some()));
    assert_eq!(trace.last().pivot, None);

    // The first partition uses the last element as pivot.
    let first = trace.get(0).unwrap();
    assert_eq!(first.pivot, Some(6));
    assert_eq!(first.comparing, vec![0, 6]);
}

#[test]
fn heap_sort_compares_children_before_swapping() {
    // Sift-down over [1, 3, 2]: left child compared first, then right,
    // then the winning child is swapped in.
    let trace = SortAlgorithm::Heap.trace(&[1, 3, 2]);
    let steps = trace.steps();
    assert_eq!(steps[0].comparing, vec![1, 0]);
    assert_eq!(steps[1].comparing, vec![2, 1]);
    assert!(steps[2].is_swap());
}

#[test]
fn shell_sort_uses_halving_gaps() {
    // n = 8 starts at gap 4: the first comparison spans 4 positions.
    let trace = SortAlgorithm::Shell.trace(&[8, 7, 6, 5, 4, 3, 2, 1]);
    let first = trace.get(0).unwrap();
    assert_eq!(first.comparing, vec![0, 4]);
    let gap = first.vars.iter().find(|(n, _)| *n == "gap").map(|(_, v)| *v);
    assert_eq!(gap, Some(4));
}

#[test]
fn bubble_finalizes_from_the_end() {
    let trace = SortAlgorithm::Bubble.trace(&[3, 2, 1]);
    // The first finalized index is the last position.
    let first_sorted = trace
        .steps()
        .iter()
        .find(|s| !s.sorted.is_empty())
        .map(|s| s.sorted[0]);
    assert_eq!(first_sorted, Some(2));
}

#[test]
fn insertion_finalizes_each_placed_index() {
    let trace = SortAlgorithm::Insertion.trace(&[4, 2, 3, 1]);
    // Index 0 is seeded, then 1, 2, 3 are appended in outer-loop order.
    assert_eq!(trace.last().sorted, vec![0, 1, 2, 3]);
}

#[test]
fn swap_counts_match_the_algorithm() {
    // Selection sort on a reversed triple does exactly one swap:
    // i=0 swaps 0<->2, i=1 finds itself minimal.
    let trace = SortAlgorithm::Selection.trace(&[3, 2, 1]);
    assert_eq!(trace.last().swap_count, 1);

    // Bubble sort does all three adjacent exchanges.
    let trace = SortAlgorithm::Bubble.trace(&[3, 2, 1]);
    assert_eq!(trace.last().swap_count, 3);
}

//! Step records captured during a sort run
//!
//! A [`Step`] is one immutable snapshot of sort progress: the full array at
//! that instant plus the indices being compared or written, the indices known
//! to be in their final position, and the running write counter.  Each step
//! owns its data, so the playback layer can scrub backward and forward
//! without re-running the algorithm.

/// Algorithm-internal variables exposed for observability (`i`, `j`, `gap`,
/// `minIdx`, ...), in the order the algorithm binds them.
pub type Vars = Vec<(&'static str, i64)>;

/// One snapshot of sort progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Full array contents at this instant (owned copy).
    pub array: Vec<i64>,
    /// Positions currently being compared (0 to 2 entries).
    pub comparing: Vec<usize>,
    /// Positions currently being written or exchanged (0 to 2 entries).
    pub swapping: Vec<usize>,
    /// Positions known to be final, in finalization order.  Never shrinks
    /// between consecutive steps of one trace.
    pub sorted: Vec<usize>,
    /// Active partition pivot (quicksort only).
    pub pivot: Option<usize>,
    /// Algorithm-internal variable bindings at this instant.
    pub vars: Vars,
    /// Value writes performed so far.  Non-decreasing; comparisons alone
    /// never increment it.
    pub swap_count: usize,
}

impl Step {
    /// Whether this step highlights a comparison.
    pub fn is_comparison(&self) -> bool {
        !self.comparing.is_empty()
    }

    /// Whether this step highlights a write/exchange.
    pub fn is_swap(&self) -> bool {
        !self.swapping.is_empty()
    }

    /// Whether the given index is marked final as of this step.
    pub fn is_sorted(&self, index: usize) -> bool {
        self.sorted.contains(&index)
    }
}

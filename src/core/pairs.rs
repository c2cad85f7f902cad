use std::cmp::Ordering;

/// Adjacent values seen through a window of two; `None` marks either end of the numeral.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Pair {
    pub prev: Option<u32>,
    pub curr: Option<u32>,
}

impl Pair {
    pub const fn new(prev: Option<u32>, curr: Option<u32>) -> Self {
        Self { prev, curr }
    }

    /// Sign of `prev - curr`. Absent values count as zero.
    pub fn sign(&self) -> Ordering {
        self.prev.unwrap_or(0).cmp(&self.curr.unwrap_or(0))
    }
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let show = |v: Option<u32>| v.map_or_else(|| "none".to_string(), |v| v.to_string());
        write!(f, "({}, {})", show(self.prev), show(self.curr))
    }
}

/// Build the N+1 pairs for N values: `(none, v0)`, `(v[i-1], v[i])`, `(v[N-1], none)`.
pub fn build_pairs(values: &[u32]) -> Vec<Pair> {
    let prevs = std::iter::once(None).chain(values.iter().copied().map(Some));
    let currs = values.iter().copied().map(Some).chain(std::iter::once(None));
    prevs.zip(currs).map(|(p, c)| Pair::new(p, c)).collect()
}

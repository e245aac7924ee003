//! `InterleaveStrategy` — where the larger quotas land in the sequence.
//!
//! A partition with a remainder has two quota sizes, `base` and `base + 1`.
//! Any arrangement of them is a valid plan; the strategy only decides which
//! days read one extra chapter.

/// Orders `big` quotas of `base + 1` and `small` quotas of `base`.
///
/// # Contract
///
/// - Called only with `big >= 1` and `small >= 1`.
/// - Must append exactly `big` copies of `base + 1` and `small` copies of
///   `base` to `out`, and nothing else.
/// - Must be deterministic.
pub trait InterleaveStrategy {
    fn arrange(&self, base: u32, big: u32, small: u32, out: &mut Vec<u32>);
}

// ── GCD interleave ────────────────────────────────────────────────────────────

/// The compatibility ordering.
///
/// Both counts are reduced by their GCD `g` to `hi = big / g` and
/// `lo = small / g`.  The sequence is `g` identical passes, each holding
/// `min(hi, lo)` pairs of `(base, base + 1)` followed by the surplus of
/// whichever size is more common:
///
/// ```text
/// total = 11, parts = 4   → g = 1, hi = 3, lo = 1 → [2, 3, 3, 3]
/// total = 10, parts = 4   → g = 2, hi = 1, lo = 1 → [2, 3, 2, 3]
/// total = 14, parts = 6   → g = 2, hi = 1, lo = 2 → [2, 3, 2, 2, 3, 2]
/// ```
///
/// When the two counts are coprime there is a single pass, so all pairs come
/// first and the surplus is one long run at the end.
#[derive(Clone, Copy, Debug, Default)]
pub struct GcdInterleave;

impl InterleaveStrategy for GcdInterleave {
    fn arrange(&self, base: u32, big: u32, small: u32, out: &mut Vec<u32>) {
        let g = gcd(big, small);
        let hi = big / g;
        let lo = small / g;

        for _ in 0..g {
            for _ in 0..hi.min(lo) {
                out.push(base);
                out.push(base + 1);
            }
            if hi > lo {
                out.extend(std::iter::repeat_n(base + 1, (hi - lo) as usize));
            } else {
                out.extend(std::iter::repeat_n(base, (lo - hi) as usize));
            }
        }
    }
}

// ── Grouped ───────────────────────────────────────────────────────────────────

/// All `base` quotas first, then all `base + 1` quotas.
///
/// Lighter days front-load the plan.  Not compatible with plans produced by
/// [`GcdInterleave`].
#[derive(Clone, Copy, Debug, Default)]
pub struct GroupedInterleave;

impl InterleaveStrategy for GroupedInterleave {
    fn arrange(&self, base: u32, big: u32, small: u32, out: &mut Vec<u32>) {
        out.extend(std::iter::repeat_n(base, small as usize));
        out.extend(std::iter::repeat_n(base + 1, big as usize));
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[cfg(test)]
mod gcd_tests {
    use super::gcd;

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(18, 12), 6);
        assert_eq!(gcd(94, 271), 1);
        assert_eq!(gcd(5, 5), 5);
    }
}

//! Bisection driver and interval search.

use log::debug;

use crate::bisect::{compare_at, line_start, CompareMode};
use crate::region::Region;

/// Binary-search the byte-offset space [lo, hi) for the first line start at
/// which the comparison predicate under `mode` holds. Returns a valid line
/// start (or the region length when no line satisfies the predicate).
///
/// `hi` may be `NO_HI` (or anything past the end); it is clamped to the
/// region length. The key must not contain the line terminator.
pub fn bisect_way(region: &Region, lo: u64, mut hi: u64, key: &[u8], mode: CompareMode) -> u64 {
    let size = region.len();
    let mut lo = lo;
    if hi > size {
        hi = size;
    }
    if key.is_empty() {
        // Shortcuts: the empty key is <= every line, and the empty prefix
        // matches every line.
        if mode == CompareMode::Le {
            hi = lo;
        }
        if mode == CompareMode::Lp && hi == size {
            return size;
        }
    }
    if lo >= hi {
        return line_start(region, lo);
    }
    let (mut mid, mut midf);
    loop {
        mid = lo + (hi - lo) / 2;
        midf = line_start(region, mid);
        if compare_at(region, midf, key, mode) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
        if lo >= hi {
            break;
        }
    }
    // Reuse the last probe when it landed on the final lower bound; one
    // resolver call otherwise.
    if mid == lo {
        midf
    } else {
        line_start(region, lo)
    }
}

/// Two chained bisections: the `[start, end)` byte interval of lines L with
/// `x <= L` and (`L < y` for Lt, `L <= y` for Le, `y` a prefix of L for Lp).
/// Empty (`start == end`) iff no line matches.
pub fn bisect_interval(
    region: &Region,
    lo: u64,
    hi: u64,
    mode: CompareMode,
    x: &[u8],
    y: &[u8],
) -> (u64, u64) {
    let start = bisect_way(region, lo, hi, x, CompareMode::Le);
    // A closed single-key query under Le degenerates to an empty successor
    // search; skip the second bisection.
    let end = if mode == CompareMode::Le && x == y {
        start
    } else {
        bisect_way(region, start, hi, y, mode)
    };
    debug!(
        "bisect_interval: mode={:?} xlen={} ylen={} -> [{}, {})",
        mode,
        x.len(),
        y.len(),
        start,
        end
    );
    (start, end)
}

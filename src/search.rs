//! Query layer: whole-file searches composed from the bisection engine.

use log::debug;

use crate::bisect::{bisect_interval, bisect_way, compare_at, CompareMode};
use crate::consts::NO_HI;
use crate::region::Region;

/// Matching `[start, end)` byte interval for a key or key range over the
/// whole region. `y` defaults to `x` (single-key query).
pub fn interval(region: &Region, mode: CompareMode, x: &[u8], y: Option<&[u8]>) -> (u64, u64) {
    let y = y.unwrap_or(x);
    bisect_interval(region, 0, NO_HI, mode, x, y)
}

/// Detect whether any line matches the single-key query under `mode`,
/// without computing the interval end.
///
/// `Le` is always false: the `[x, x)` interval is empty by construction.
/// For `Lt` this is "some line equals x", for `Lp` "some line starts with x":
/// one Le bisection plus one comparison at the resulting line.
pub fn contains(region: &Region, mode: CompareMode, x: &[u8]) -> bool {
    if mode == CompareMode::Le {
        return false;
    }
    let start = bisect_way(region, 0, NO_HI, x, CompareMode::Le);
    // start is a line start >= x; the end predicate fails there iff the
    // line is still inside the interval.
    let found = !compare_at(region, start, x, mode);
    debug!("contains: mode={:?} start={} found={}", mode, start, found);
    found
}

/// Single-boundary query: the insertion offset for `x` under `start_mode`
/// (`Le` = before existing copies of x, `Lt` = after them).
pub fn insertion_offset(region: &Region, start_mode: CompareMode, x: &[u8]) -> u64 {
    bisect_way(region, 0, NO_HI, x, start_mode)
}

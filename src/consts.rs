//! Shared constants (line format, bisection sentinels, env toggles).

// -------- Line format --------
/// Line terminator byte. LF only, no CR handling.
pub const LINE_TERM: u8 = b'\n';

// -------- Bisection --------
/// Sentinel for an unbounded upper search limit; clamped to the region length.
pub const NO_HI: u64 = u64::MAX;

// -------- Env toggles --------
/// LBSEARCH_MMAP = 0|false|no|off disables memory-mapping (RAM read instead).
pub const ENV_MMAP: &str = "LBSEARCH_MMAP";

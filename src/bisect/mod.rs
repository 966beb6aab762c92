//! Core bisection engine over a line-sorted byte region.
//!
//! The search space is the byte-offset space [0, len], not a line index:
//! line lengths are unknown without scanning, so every probe rounds its
//! midpoint up to the next line start (`resolve`) and compares the key
//! against that line in place (`compare`). The whole engine is pure: no
//! I/O, no allocation, no failure paths.
//!
//! Layout mirrors the pipeline:
//! - resolve.rs  — line-boundary resolver (`line_start`)
//! - compare.rs  — byte-wise line comparator (`compare_at`, `CompareMode`)
//! - engine.rs   — bisection driver + interval search

mod compare;
mod engine;
mod resolve;

pub use compare::{compare_at, CompareMode};
pub use engine::{bisect_interval, bisect_way};
pub use resolve::line_start;

// Shared constants
pub mod consts;

// Byte region (mmap or RAM view of the searched file)
pub mod region;

// Core bisection engine: src/bisect/{mod,resolve,compare,engine}.rs
pub mod bisect;

// Query-level API on top of the engine (interval/contains/insertion_offset)
pub mod search;

// Convenience re-exports
pub use bisect::{bisect_interval, bisect_way, compare_at, line_start, CompareMode};
pub use consts::NO_HI;
pub use region::Region;
pub use search::{contains, insertion_offset, interval};

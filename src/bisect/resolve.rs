//! Line-boundary resolver: round an arbitrary byte offset up to a line start.

use memchr::memchr;

use crate::consts::LINE_TERM;
use crate::region::Region;

/// Offset of the line starting at `ofs`, or, if no line starts there, of the
/// next line. Returns `len` when no terminator remains (incomplete last line)
/// or when `ofs` is past the end.
///
/// Scans from `ofs - 1`: if that byte is a terminator, `ofs` already is a
/// line start and is returned unchanged.
pub fn line_start(region: &Region, ofs: u64) -> u64 {
    if ofs == 0 {
        return 0;
    }
    let len = region.len();
    if ofs > len {
        return len;
    }
    let data = region.as_slice();
    let from = (ofs - 1) as usize;
    match memchr(LINE_TERM, &data[from..]) {
        Some(i) => ofs + i as u64,
        None => len,
    }
}

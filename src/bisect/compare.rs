//! Byte-wise line comparator with the three boundary semantics.

use crate::consts::LINE_TERM;
use crate::region::Region;

/// Boundary semantics for one bisection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompareMode {
    /// True iff key <= line. Finds the first line >= key (bisect_left).
    Le,
    /// True iff key < line. Finds the first line > key (bisect_right).
    Lt,
    /// Prefix search: true iff key* < line, where key* is the key followed
    /// by a fake byte greater than any real byte. The first line for which
    /// this holds is the one past the last line having the key as a prefix.
    Lp,
}

/// Compare `key` against the line beginning at `line_ofs`.
///
/// `line_ofs == region.len()` is the virtual line past EOF, which compares
/// greater than any finite key: true for every mode. Probes inside the last
/// terminated line resolve there, so the bisection relies on this to keep
/// narrowing toward real lines.
///
/// End of region counts as a line terminator (incomplete last line). All
/// 256 byte values order uniformly as unsigned.
pub fn compare_at(region: &Region, line_ofs: u64, key: &[u8], mode: CompareMode) -> bool {
    debug_assert!(line_ofs <= region.len());
    debug_assert!(!key.contains(&LINE_TERM));
    let data = region.as_slice();
    if line_ofs as usize == data.len() {
        return true; // EOF at beginning-of-line
    }
    let mut ofs = line_ofs as usize;
    let mut i = 0usize;
    loop {
        let c = if ofs == data.len() { LINE_TERM } else { data[ofs] };
        if c == LINE_TERM {
            // Line exhausted (possibly together with the key).
            return match mode {
                CompareMode::Le => i == key.len(),
                CompareMode::Lt | CompareMode::Lp => false,
            };
        } else if i == key.len() {
            // Key is a proper prefix of the line. The Lp sentinel byte
            // sorts after every real byte, so key* > line there.
            return mode != CompareMode::Lp;
        } else if key[i] != c {
            return key[i] < c;
        }
        ofs += 1;
        i += 1;
    }
}

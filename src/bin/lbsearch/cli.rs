use anyhow::{bail, Result};
use clap::Parser;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use lbsearch::CompareMode;

/// Binary search (bisection) in a sorted text file.
///
/// The file must be sorted in ascending unsigned-byte lexicographic order
/// (LC_CTYPE=C sort). Results are undefined on unsorted input.
#[derive(Parser, Debug)]
#[command(name = "lbsearch", version)]
pub struct Cli {
    /// Interval end: bisect_left, open end (lines < <key-y>)
    #[arg(short = 'e')]
    pub end_le: bool,
    /// Interval end: bisect_right, closed end (lines <= <key-y>)
    #[arg(short = 't')]
    pub end_lt: bool,
    /// Prefix search (lines starting with <key-x>)
    #[arg(short = 'p')]
    pub end_lp: bool,

    /// Interval start: bisect_left (default)
    #[arg(short = 'b')]
    pub start_le: bool,
    /// Interval start: bisect_right (append position); needs -eo and no <key-y>
    #[arg(short = 'a')]
    pub start_lt: bool,

    /// Print matching file contents (default)
    #[arg(short = 'c')]
    pub contents: bool,
    /// Print byte offsets
    #[arg(short = 'o')]
    pub offsets: bool,
    /// Print nothing; the exit code signals match/no-match
    #[arg(short = 'q')]
    pub quiet: bool,

    /// Ignore an incomplete last line (may be appended to right now)
    #[arg(short = 'i')]
    pub ignore_incomplete: bool,

    /// Print offsets as a JSON object
    #[arg(long)]
    pub json: bool,

    /// Sorted input file
    pub file: PathBuf,
    /// First key to search for (raw bytes, not required to be UTF-8)
    pub key_x: OsString,
    /// Last key to search for (default: <key-x>)
    pub key_y: Option<OsString>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Printing {
    Contents,
    Offsets,
    Detect,
}

/// Fully validated query, ready to run.
#[derive(Debug)]
pub struct Query {
    pub file: PathBuf,
    pub mode: CompareMode,
    pub start_mode: CompareMode,
    pub printing: Printing,
    pub ignore_incomplete: bool,
    pub json: bool,
    pub x: Vec<u8>,
    pub y: Option<Vec<u8>>,
}

impl Cli {
    pub fn into_query(self) -> Result<Query> {
        let mode = match (self.end_le, self.end_lt, self.end_lp) {
            (true, false, false) => CompareMode::Le,
            (false, true, false) => CompareMode::Lt,
            (false, false, true) => CompareMode::Lp,
            (false, false, false) => bail!("usage error: missing boundary flag (-e, -t or -p)"),
            _ => bail!("usage error: multiple boundary flags"),
        };
        let start_mode = match (self.start_le, self.start_lt) {
            (true, true) => bail!("usage error: multiple start flags"),
            (false, true) => CompareMode::Lt,
            _ => CompareMode::Le,
        };
        let printing = match (self.contents, self.offsets, self.quiet) {
            (false, false, false) | (true, false, false) => Printing::Contents,
            (false, true, false) => Printing::Offsets,
            (false, false, true) => Printing::Detect,
            _ => bail!("usage error: multiple printing flags"),
        };
        if start_mode == CompareMode::Lt
            && !(self.key_y.is_none()
                && mode == CompareMode::Le
                && printing == Printing::Offsets)
        {
            bail!("usage error: flag -a needs -eo and no <key-y>");
        }
        if self.key_y.is_none() && printing != Printing::Offsets && mode == CompareMode::Le {
            bail!("usage error: single-key contents is always empty");
        }
        Ok(Query {
            file: self.file,
            mode,
            start_mode,
            printing,
            ignore_incomplete: self.ignore_incomplete,
            json: self.json,
            x: key_bytes(&self.key_x),
            y: self.key_y.as_deref().map(key_bytes),
        })
    }
}

/// Keys are raw argv bytes: lines may hold any of the 256 byte values, so a
/// key must be allowed to as well.
#[cfg(unix)]
fn os_bytes(s: &OsStr) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    s.as_bytes().to_vec()
}

/// No byte-level argv access off Unix; keys are effectively UTF-8 there.
#[cfg(not(unix))]
fn os_bytes(s: &OsStr) -> Vec<u8> {
    s.to_string_lossy().into_owned().into_bytes()
}

/// Keys must not contain the line terminator; truncate at the first one.
fn key_bytes(s: &OsStr) -> Vec<u8> {
    let mut b = os_bytes(s);
    if let Some(i) = b.iter().position(|&c| c == b'\n') {
        b.truncate(i);
    }
    b
}

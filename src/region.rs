//! Byte region: an immutable, randomly-addressable view of the searched file.
//!
//! Backing is a whole-file mmap when possible; if mapping fails (or is
//! disabled via LBSEARCH_MMAP) the file is read into RAM instead. The engine
//! only needs "random-access read of an immutable byte region of known size",
//! so both backings behave identically.
//!
//! The region carries a *logical* length that may be clipped below the
//! physical one: `ignore_incomplete_tail` cuts off a final line that lacks
//! its terminator, so searches never consider it.

use anyhow::{Context, Result};
use log::{debug, warn};
use memchr::memrchr;
use memmap2::{Mmap, MmapOptions};
use std::fs::OpenOptions;
use std::io::Read;
use std::path::Path;

use crate::consts::{ENV_MMAP, LINE_TERM};

enum Backing {
    Mmap(Mmap),
    Buf(Box<[u8]>),
}

pub struct Region {
    backing: Backing,
    /// Logical length in bytes; always <= the backing length.
    len: u64,
}

impl Region {
    /// Open a file read-only as a search region.
    pub fn open(path: &Path) -> Result<Self> {
        let mut f = OpenOptions::new()
            .read(true)
            .open(path)
            .with_context(|| format!("open {}", path.display()))?;
        let flen = f
            .metadata()
            .with_context(|| format!("stat {}", path.display()))?
            .len();
        if flen == 0 {
            return Ok(Self::from_bytes(Vec::new()));
        }
        let flen_usize = usize::try_from(flen)
            .map_err(|_| anyhow::anyhow!("file too large to address: {}", path.display()))?;

        if mmap_enabled() {
            match unsafe { MmapOptions::new().len(flen_usize).map(&f) } {
                Ok(m) => {
                    debug!("region: mmap {} ({} B)", path.display(), flen);
                    return Ok(Self {
                        backing: Backing::Mmap(m),
                        len: flen,
                    });
                }
                Err(e) => {
                    warn!(
                        "region: mmap {} failed ({}), falling back to RAM read",
                        path.display(),
                        e
                    );
                }
            }
        }

        // RAM fallback: read the whole file once.
        let mut buf = Vec::with_capacity(flen_usize);
        f.read_to_end(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        debug!("region: RAM read {} ({} B)", path.display(), buf.len());
        Ok(Self::from_bytes(buf))
    }

    /// RAM-backed region over the given bytes (tests, embedding).
    pub fn from_bytes(bytes: impl Into<Box<[u8]>>) -> Self {
        let b: Box<[u8]> = bytes.into();
        let len = b.len() as u64;
        Self {
            backing: Backing::Buf(b),
            len,
        }
    }

    /// Logical size in bytes.
    #[inline]
    pub fn len(&self) -> u64 {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Logical byte view (clipped to `len`).
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        let all = match &self.backing {
            Backing::Mmap(m) => &m[..],
            Backing::Buf(b) => &b[..],
        };
        &all[..self.len as usize]
    }

    /// Clip the logical length so a final line without a terminator is
    /// excluded from searches. No-op when empty or already terminated.
    pub fn ignore_incomplete_tail(&mut self) {
        if self.len == 0 {
            return;
        }
        let data = self.as_slice();
        if data[data.len() - 1] == LINE_TERM {
            return;
        }
        let clipped = match memrchr(LINE_TERM, data) {
            Some(i) => i as u64 + 1,
            None => 0,
        };
        debug!(
            "region: incomplete last line ignored, len {} -> {}",
            self.len, clipped
        );
        self.len = clipped;
    }
}

fn mmap_enabled() -> bool {
    std::env::var(ENV_MMAP)
        .ok()
        .map(|s| s.to_ascii_lowercase())
        .map(|s| !(s == "0" || s == "false" || s == "no" || s == "off"))
        .unwrap_or(true)
}

use anyhow::{Context, Result};
use serde_json::json;
use std::io::Write;

use lbsearch::Region;

/// Write the raw matched byte range verbatim.
pub fn print_range(region: &Region, start: u64, end: u64) -> Result<()> {
    let data = region.as_slice();
    let mut out = std::io::stdout().lock();
    out.write_all(&data[start as usize..end as usize])
        .context("write stdout")?;
    out.flush().context("flush stdout")?;
    Ok(())
}

/// `"<start> <end>\n"` as decimal ASCII, or a JSON object with --json.
pub fn print_offset_pair(start: u64, end: u64, as_json: bool) -> Result<()> {
    let mut out = std::io::stdout().lock();
    if as_json {
        writeln!(out, "{}", json!({ "start": start, "end": end }))
    } else {
        writeln!(out, "{} {}", start, end)
    }
    .context("write stdout")?;
    Ok(())
}

/// Single boundary offset (for -eo single-key queries).
pub fn print_single_offset(ofs: u64, as_json: bool) -> Result<()> {
    let mut out = std::io::stdout().lock();
    if as_json {
        writeln!(out, "{}", json!({ "offset": ofs }))
    } else {
        writeln!(out, "{}", ofs)
    }
    .context("write stdout")?;
    Ok(())
}

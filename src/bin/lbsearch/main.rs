use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Env};
use log::error;

use lbsearch::{contains, insertion_offset, interval, CompareMode, Region};

mod cli;
mod output;

use cli::{Cli, Printing, Query};

// Exit codes: 0 = match/success, 2 = usage or I/O error, 3 = no match.
const EXIT_ERROR: i32 = 2;
const EXIT_NO_MATCH: i32 = 3;

fn init_logger() {
    // Level comes from RUST_LOG; default warn so search output stays clean.
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(EXIT_NO_MATCH),
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(EXIT_ERROR);
        }
    }
}

/// Returns Ok(true) on a match (exit 0), Ok(false) on no match (exit 3).
fn run() -> Result<bool> {
    let q = Cli::parse().into_query()?;

    let mut region = Region::open(&q.file)?;
    if q.ignore_incomplete {
        region.ignore_incomplete_tail();
    }

    run_query(&region, &q)
}

fn run_query(region: &Region, q: &Query) -> Result<bool> {
    // Single-boundary offset query (-eo, optionally -a): one bisection,
    // always a success.
    if q.y.is_none() && q.mode == CompareMode::Le && q.printing == Printing::Offsets {
        let ofs = insertion_offset(region, q.start_mode, &q.x);
        output::print_single_offset(ofs, q.json)?;
        return Ok(true);
    }

    // Detect-only single-key query: skip the second bisection.
    if q.printing == Printing::Detect && (q.y.is_none() || q.y.as_deref() == Some(&q.x[..])) {
        return Ok(contains(region, q.mode, &q.x));
    }

    let (start, end) = interval(region, q.mode, &q.x, q.y.as_deref());
    match q.printing {
        Printing::Contents => output::print_range(region, start, end)?,
        Printing::Offsets => output::print_offset_pair(start, end, q.json)?,
        Printing::Detect => {}
    }
    Ok(start < end)
}

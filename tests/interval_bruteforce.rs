//! Randomized cross-check of the bisection against a brute-force linear scan
//! over small sorted corpora, for all three boundary modes.

use lbsearch::{bisect_way, interval, CompareMode, Region, NO_HI};
use oorandom::Rand32;

use lbsearch::CompareMode::{Le, Lp, Lt};

const ALPHABET: &[u8] = b"abc";

fn random_word(rng: &mut Rand32, max_len: u32) -> Vec<u8> {
    let len = rng.rand_range(0..max_len + 1) as usize;
    (0..len)
        .map(|_| ALPHABET[rng.rand_range(0..ALPHABET.len() as u32) as usize])
        .collect()
}

/// Sorted corpus: up to `max_lines` random words (duplicates welcome),
/// joined with '\n'; a trailing terminator about half the time.
fn random_corpus(rng: &mut Rand32, max_lines: u32) -> Vec<u8> {
    let n = rng.rand_range(0..max_lines + 1) as usize;
    let mut lines: Vec<Vec<u8>> = (0..n).map(|_| random_word(rng, 6)).collect();
    lines.sort();
    let mut data = Vec::new();
    for (i, l) in lines.iter().enumerate() {
        data.extend_from_slice(l);
        if i + 1 < lines.len() || rng.rand_range(0..2) == 0 {
            data.push(b'\n');
        }
    }
    data
}

/// Offsets of every real line start (strictly below len).
fn line_starts(data: &[u8]) -> Vec<u64> {
    let mut starts = Vec::new();
    let mut s = 0usize;
    while s < data.len() {
        starts.push(s as u64);
        match data[s..].iter().position(|&c| c == b'\n') {
            Some(i) => s += i + 1,
            None => break,
        }
    }
    starts
}

fn line_at(data: &[u8], start: u64) -> &[u8] {
    let s = start as usize;
    match data[s..].iter().position(|&c| c == b'\n') {
        Some(i) => &data[s..s + i],
        None => &data[s..],
    }
}

fn pred(mode: CompareMode, key: &[u8], line: &[u8]) -> bool {
    match mode {
        Le => key <= line,
        Lt => key < line,
        Lp => line > key && !line.starts_with(key),
    }
}

/// Brute-force equivalent of bisect_way over the full corpus.
fn expected_way(data: &[u8], from: u64, key: &[u8], mode: CompareMode) -> u64 {
    line_starts(data)
        .into_iter()
        .filter(|&s| s >= from)
        .find(|&s| pred(mode, key, line_at(data, s)))
        .unwrap_or(data.len() as u64)
}

#[test]
fn way_matches_linear_scan() {
    let mut rng = Rand32::new(0x5EED_0001);
    for _ in 0..150 {
        let data = random_corpus(&mut rng, 24);
        let r = Region::from_bytes(data.clone());
        for _ in 0..12 {
            let key = random_word(&mut rng, 7);
            for mode in [Le, Lt, Lp] {
                let got = bisect_way(&r, 0, NO_HI, &key, mode);
                let want = expected_way(&data, 0, &key, mode);
                assert_eq!(
                    got, want,
                    "mode {:?}, key {:?}, corpus {:?}",
                    mode,
                    String::from_utf8_lossy(&key),
                    String::from_utf8_lossy(&data)
                );
            }
        }
    }
}

#[test]
fn interval_matches_linear_scan() {
    let mut rng = Rand32::new(0x5EED_0002);
    for _ in 0..150 {
        let data = random_corpus(&mut rng, 24);
        let r = Region::from_bytes(data.clone());
        for _ in 0..8 {
            let x = random_word(&mut rng, 7);
            // half the queries are ranges, half single-key
            let y = if rng.rand_range(0..2) == 0 {
                Some(random_word(&mut rng, 7))
            } else {
                None
            };
            for mode in [Le, Lt, Lp] {
                let (start, end) = interval(&r, mode, &x, y.as_deref());
                let want_start = expected_way(&data, 0, &x, Le);
                let yk = y.as_deref().unwrap_or(&x);
                let want_end = if mode == Le && yk == &x[..] {
                    want_start
                } else {
                    expected_way(&data, want_start, yk, mode)
                };
                assert_eq!(
                    (start, end),
                    (want_start, want_end),
                    "mode {:?}, x {:?}, y {:?}, corpus {:?}",
                    mode,
                    String::from_utf8_lossy(&x),
                    y.as_deref().map(String::from_utf8_lossy),
                    String::from_utf8_lossy(&data)
                );
                assert!(start <= end);
            }
        }
    }
}

#[test]
fn prefix_contents_round_trip() {
    // The Lp interval re-split by terminators must equal exactly the lines
    // carrying the prefix, in order.
    let mut rng = Rand32::new(0x5EED_0003);
    for _ in 0..100 {
        let data = random_corpus(&mut rng, 24);
        let r = Region::from_bytes(data.clone());
        let key = random_word(&mut rng, 4);
        if key.is_empty() {
            continue;
        }
        let (start, end) = interval(&r, Lp, &key, None);
        let got: Vec<&[u8]> = line_starts(&data)
            .into_iter()
            .filter(|&s| s >= start && s < end)
            .map(|s| line_at(&data, s))
            .collect();
        let want: Vec<&[u8]> = line_starts(&data)
            .into_iter()
            .map(|s| line_at(&data, s))
            .filter(|l| l.starts_with(&key))
            .collect();
        assert_eq!(
            got,
            want,
            "key {:?}, corpus {:?}",
            String::from_utf8_lossy(&key),
            String::from_utf8_lossy(&data)
        );
    }
}

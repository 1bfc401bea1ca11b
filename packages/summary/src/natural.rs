//! Natural (numeric-aware) ordering for course keys.
//!
//! Keys are compared chunk by chunk, where a chunk is a maximal run of
//! ASCII digits or of anything else. Digit runs compare by value, so
//! `"MTH 9"` sorts before `"MTH 10"`. A digit run sorts before text at the
//! same position.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

fn chunks(s: &str) -> Vec<Chunk<'_>> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_digits = None;

    for (i, c) in s.char_indices() {
        let digit = c.is_ascii_digit();
        match in_digits {
            Some(prev) if prev != digit => {
                out.push(chunk(&s[start..i], prev));
                start = i;
            }
            _ => {}
        }
        in_digits = Some(digit);
    }
    if let Some(prev) = in_digits {
        out.push(chunk(&s[start..], prev));
    }

    out
}

const fn chunk(s: &str, digits: bool) -> Chunk<'_> {
    if digits { Chunk::Digits(s) } else { Chunk::Text(s) }
}

fn compare_chunks(a: Chunk<'_>, b: Chunk<'_>) -> Ordering {
    match (a, b) {
        (Chunk::Digits(x), Chunk::Digits(y)) => {
            let xs = x.trim_start_matches('0');
            let ys = y.trim_start_matches('0');
            xs.len()
                .cmp(&ys.len())
                .then_with(|| xs.cmp(ys))
                .then_with(|| x.len().cmp(&y.len()))
        }
        (Chunk::Text(x), Chunk::Text(y)) => x.cmp(y),
        (Chunk::Digits(_), Chunk::Text(_)) => Ordering::Less,
        (Chunk::Text(_), Chunk::Digits(_)) => Ordering::Greater,
    }
}

/// Compares two strings in natural order.
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let ca = chunks(a);
    let cb = chunks(b);

    ca.iter()
        .zip(&cb)
        .map(|(x, y)| compare_chunks(*x, *y))
        .find(|o| o.is_ne())
        .unwrap_or_else(|| ca.len().cmp(&cb.len()))
        .then_with(|| a.cmp(b))
}

/// Returns `keys` sorted in natural order.
#[must_use]
pub fn natural_sorted<'a, I>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut sorted: Vec<String> = keys.into_iter().map(str::to_owned).collect();
    sorted.sort_by(|a, b| natural_cmp(a, b));
    sorted
}

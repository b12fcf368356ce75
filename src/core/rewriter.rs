// src/core/rewriter.rs
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Matches `h-N w-M` or `w-M h-N` separated by any run of whitespace.
///
/// Digits are ASCII only; other Unicode decimal digits never form a pair.
static SIZE_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:h-([0-9]{1,2})\s+w-([0-9]{1,2})|w-([0-9]{1,2})\s+h-([0-9]{1,2}))")
        .expect("valid regex")
});

/// Smallest value rewritten to a `size-N` class.
pub const MIN_SIZE: u8 = 1;
/// Largest value rewritten to a `size-N` class.
pub const MAX_SIZE: u8 = 12;

/// Replaces every equal-valued height/width class pair with its `size-N` shorthand.
///
/// A pair qualifies when both numbers are textually identical and fall within
/// [`MIN_SIZE`]..=[`MAX_SIZE`]. The whitespace between the two classes is
/// consumed by the replacement. Pairs that do not qualify are left exactly as
/// written, so content without a qualifying pair comes back byte-identical.
///
/// Matching is the usual left-to-right, non-overlapping regex scan.
///
/// # Examples
///
/// ```
/// assert_eq!(twsize::replace_size_classes(r#"<img class="h-6 w-6">"#), r#"<img class="size-6">"#);
/// assert_eq!(twsize::replace_size_classes("w-3   h-3"), "size-3");
/// assert_eq!(twsize::replace_size_classes("h-5 w-6"), "h-5 w-6");
/// ```
#[must_use]
pub fn replace_size_classes(content: &str) -> String {
    SIZE_PAIR
        .replace_all(content, |caps: &Captures<'_>| {
            let (height, width) = match (caps.get(1), caps.get(2)) {
                (Some(h), Some(w)) => (h.as_str(), w.as_str()),
                _ => (
                    caps.get(4).map_or("", |m| m.as_str()),
                    caps.get(3).map_or("", |m| m.as_str()),
                ),
            };

            if height == width && is_size_in_range(height) {
                format!("size-{height}")
            } else {
                caps[0].to_owned()
            }
        })
        .into_owned()
}

fn is_size_in_range(value: &str) -> bool {
    value
        .parse::<u8>()
        .is_ok_and(|n| (MIN_SIZE..=MAX_SIZE).contains(&n))
}

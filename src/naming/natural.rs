//! Natural ordering for file names with embedded indices
//!
//! Names are split into alternating runs of digits and non-digits. Digit runs
//! compare by numeric value and text runs compare case-insensitively, so that
//! `fa1 < fa2 < fa10 < fa11`.

use std::cmp::Ordering;

/// A run of ASCII digits compared by value, stored without leading zeros
#[derive(Debug, Clone, PartialEq, Eq)]
struct Digits(String);

impl Ord for Digits {
    fn cmp(&self, other: &Self) -> Ordering {
        // Equal-length digit strings order the same lexically and numerically
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Digits {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Run {
    Text(String),
    Number(Digits),
}

/// Precomputed sort key for natural ordering
///
/// Runs always alternate starting with a (possibly empty) text run, so two
/// keys compared position by position never pit a number against text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NaturalKey(Vec<Run>);

impl NaturalKey {
    /// Build the key for a name
    pub fn new(name: &str) -> Self {
        let mut runs = Vec::new();
        let mut text = String::new();
        let mut digits = String::new();

        for ch in name.chars() {
            if ch.is_ascii_digit() {
                digits.push(ch);
            } else {
                if !digits.is_empty() {
                    runs.push(Run::Text(std::mem::take(&mut text)));
                    runs.push(Run::Number(trim_zeros(&std::mem::take(&mut digits))));
                }
                text.extend(ch.to_lowercase());
            }
        }

        runs.push(Run::Text(text));
        if !digits.is_empty() {
            runs.push(Run::Number(trim_zeros(&digits)));
            runs.push(Run::Text(String::new()));
        }

        Self(runs)
    }
}

fn trim_zeros(digits: &str) -> Digits {
    Digits(digits.trim_start_matches('0').to_string())
}

/// Compare two names in natural order
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    NaturalKey::new(a).cmp(&NaturalKey::new(b))
}

/// Sort items in natural order of the name returned by `name_of`
///
/// Items whose names compare equal keep their relative order.
pub fn sort_natural<T, F>(items: &mut [T], name_of: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by_cached_key(|item| NaturalKey::new(name_of(item)));
}

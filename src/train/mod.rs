//! Train number normalization.
//!
//! Planner trip ids and live feeds spell the same operator train differently:
//! `1:4201301G`, `1301G`, `G1301`, `01301G`. Both sides are reduced to a
//! numeric core and compared on that.

use serde::{Serialize, Serializer};
use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

/// How much of a trip id survives normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrainRule {
    /// Keep only the last `n` digits of the numeric core. Planner trip ids
    /// that prepend a service code to the operator number need this.
    pub core_digits: Option<usize>,
}

impl TrainRule {
    pub const fn with_core_digits(digits: usize) -> Self {
        Self {
            core_digits: Some(digits),
        }
    }
}

/// Canonical train identity. Compares and hashes on `core` only.
#[derive(Debug, Clone)]
pub struct TrainNumber {
    label: Arc<str>,
    core: Arc<str>,
}

impl TrainNumber {
    /// Extracts a train number from a trip id or a live feed train number.
    ///
    /// 1. keep the text after the last `:` and then after the last `.`
    /// 2. keep ASCII alphanumerics, uppercased; this is the label
    /// 3. take the last run of digits in the label
    /// 4. apply [`TrainRule::core_digits`]
    /// 5. strip leading zeros
    ///
    /// Returns `None` when nothing usable is left.
    pub fn extract(raw: &str, rule: &TrainRule) -> Option<Self> {
        let segment = last_segment(raw.trim());
        let label: String = segment
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_uppercase())
            .collect();
        if label.is_empty() {
            return None;
        }

        let digits = last_digit_run(&label)?;
        let digits = match rule.core_digits {
            Some(n) if n > 0 && digits.len() > n => &digits[digits.len() - n..],
            _ => digits,
        };
        let core = digits.trim_start_matches('0');
        let core = if core.is_empty() { "0" } else { core };

        Some(Self {
            core: core.into(),
            label: label.into(),
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn core(&self) -> &str {
        &self.core
    }

    /// True when `raw` normalizes to this train under `rule`.
    pub fn matches(&self, raw: &str, rule: &TrainRule) -> bool {
        TrainNumber::extract(raw, rule).is_some_and(|other| other == *self)
    }
}

/// Compares two raw train identifiers by their normalized core.
pub fn same_train(a: &str, b: &str, rule: &TrainRule) -> bool {
    match (TrainNumber::extract(a, rule), TrainNumber::extract(b, rule)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

impl PartialEq for TrainNumber {
    fn eq(&self, other: &Self) -> bool {
        self.core == other.core
    }
}

impl Eq for TrainNumber {}

impl Hash for TrainNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.core.hash(state);
    }
}

impl fmt::Display for TrainNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl Serialize for TrainNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label)
    }
}

fn last_segment(raw: &str) -> &str {
    let raw = raw.rsplit_once(':').map_or(raw, |(_, tail)| tail);
    raw.rsplit_once('.').map_or(raw, |(_, tail)| tail)
}

fn last_digit_run(label: &str) -> Option<&str> {
    let end = label.rfind(|c: char| c.is_ascii_digit())? + 1;
    let start = label[..end]
        .rfind(|c: char| !c.is_ascii_digit())
        .map_or(0, |i| i + 1);
    Some(&label[start..end])
}

#[test]
fn digit_run_is_last_one() {
    assert_eq!(last_digit_run("12A34B"), Some("34"));
    assert_eq!(last_digit_run("M1234"), Some("1234"));
    assert_eq!(last_digit_run("ABC"), None);
}

#[test]
fn segment_drops_feed_and_railway_prefixes() {
    assert_eq!(last_segment("1:4201301G"), "4201301G");
    assert_eq!(last_segment("odpt.Train:JR-East.Yamanote.1234G"), "1234G");
    assert_eq!(last_segment("1234G"), "1234G");
}

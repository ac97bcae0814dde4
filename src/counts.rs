//! Shot-count histograms

use std::collections::BTreeMap;
use std::fmt;
use serde::{Deserialize, Serialize};

/// Occurrences of each measured bit string across a run of shots
///
/// Keys are unique bit strings; iteration is in ascending key order so the
/// histogram prints the same way for the same data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counts {
    counts: BTreeMap<String, usize>,
}

impl Counts {
    /// Create an empty histogram
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `outcome`
    pub fn record(&mut self, outcome: impl Into<String>) {
        *self.counts.entry(outcome.into()).or_insert(0) += 1;
    }

    /// Number of times `outcome` was observed (zero if never)
    pub fn get(&self, outcome: &str) -> usize {
        self.counts.get(outcome).copied().unwrap_or(0)
    }

    /// Total number of recorded shots
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Empirical frequency of `outcome`, or 0.0 for an empty histogram
    pub fn frequency(&self, outcome: &str) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.get(outcome) as f64 / total as f64,
        }
    }

    /// Number of distinct outcomes observed
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(bitstring, count)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// The distinct outcomes observed, in key order
    pub fn outcomes(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }
}

impl FromIterator<String> for Counts {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut counts = Counts::new();
        for outcome in iter {
            counts.record(outcome);
        }
        counts
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (outcome, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "\"{}\": {}", outcome, count)?;
        }
        write!(f, "}}")
    }
}

//! Multi-pass scored matching.
//!
//! Passes run in a fixed order and compound onto each other:
//!
//! | pass | predicate                         | α    |
//! |------|-----------------------------------|------|
//! | A    | ends with `/query`                | 10   |
//! | B    | ends with `query`                 | 2.5  |
//! | C    | contains `query`                  | 1    |
//!
//! The first pass to match a path seeds its score with `weight × β`; every
//! later matching pass multiplies the score by its α. Without recency decay
//! β = α. With it, β = α / ln(1 + seconds since update) once at least one
//! second has passed.

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;

use jump_core::models::{Entry, Options, Weight};

use crate::fs::DirCheck;
use crate::weights::WeightMap;

pub const EXACT_SUFFIX_ALPHA: f64 = 10.0;
pub const SUFFIX_ALPHA: f64 = 2.5;
pub const CONTAINS_ALPHA: f64 = 1.0;

/// String predicate used by a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Suffix,
    Contains,
}

impl MatchKind {
    pub fn matches(self, path: &str, needle: &str) -> bool {
        match self {
            Self::Suffix => path.ends_with(needle),
            Self::Contains => path.contains(needle),
        }
    }
}

/// Scores stored paths against a query without touching the input weights.
pub struct Searcher<'a> {
    input: &'a WeightMap,
    output: FxHashMap<String, Weight>,
    options: Options,
    now: DateTime<Utc>,
}

impl<'a> Searcher<'a> {
    pub fn new(input: &'a WeightMap, options: Options, now: DateTime<Utc>) -> Self {
        Self {
            input,
            output: FxHashMap::default(),
            options,
            now,
        }
    }

    /// Run passes A, B, C for `needle`.
    pub fn score_all(&mut self, needle: &str) {
        let exact = if needle.starts_with('/') {
            needle.to_string()
        } else {
            format!("/{needle}")
        };
        self.score_pass(&exact, MatchKind::Suffix, EXACT_SUFFIX_ALPHA);
        self.score_pass(needle, MatchKind::Suffix, SUFFIX_ALPHA);
        self.score_pass(needle, MatchKind::Contains, CONTAINS_ALPHA);
    }

    /// One pass over every input path.
    pub fn score_pass(&mut self, needle: &str, kind: MatchKind, alpha: f64) {
        for (path, weight) in self.input {
            if !kind.matches(path, needle) {
                continue;
            }
            let score = match self.output.get_mut(path) {
                Some(scored) => {
                    scored.value *= alpha;
                    scored.value
                }
                None => {
                    let seeded = weight.value * self.beta(weight, alpha);
                    self.output
                        .insert(path.clone(), Weight::at(seeded, weight.updated_at));
                    seeded
                }
            };
            if self.options.debug {
                tracing::debug!(path = %path, needle, alpha, score, "scored candidate");
            }
        }
    }

    /// Seed multiplier for a path's first matching pass.
    fn beta(&self, weight: &Weight, alpha: f64) -> f64 {
        if !self.options.time_matching {
            return alpha;
        }
        let elapsed = weight.seconds_since_update(self.now);
        if elapsed > 0.0 {
            alpha / elapsed.ln_1p()
        } else {
            alpha
        }
    }

    /// Scored candidates, best first, before any directory check.
    pub fn ranked(&self) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self
            .output
            .iter()
            .map(|(path, weight)| Entry::new(path.clone(), *weight))
            .collect();
        entries.sort_by(Entry::cmp_descending);
        entries
    }

    /// Walk the ranking and collect up to `count` paths that pass `dir_check`.
    ///
    /// Returns `(valid, invalid)`. Candidates after the last accepted one are not checked.
    pub fn best(&self, count: usize, dir_check: DirCheck) -> (Vec<Entry>, Vec<String>) {
        let mut results = Vec::new();
        let mut invalid = Vec::new();
        for entry in self.ranked() {
            if results.len() >= count {
                break;
            }
            if dir_check(&entry.path) {
                results.push(entry);
            } else {
                invalid.push(entry.path);
            }
        }
        if results.is_empty() {
            tracing::debug!("no entries found for query");
        }
        (results, invalid)
    }
}

/// Join query fragments as path segments and lexically clean the result.
///
/// Empty fragments are dropped; an all-empty query yields `""`.
pub fn join_fragments<S: AsRef<str>>(fragments: &[S]) -> String {
    let parts: Vec<&str> = fragments
        .iter()
        .map(AsRef::as_ref)
        .filter(|f| !f.is_empty())
        .collect();
    if parts.is_empty() {
        return String::new();
    }
    clean_path(&parts.join("/"))
}

/// Lexical path cleaning: collapse repeated separators, drop `.`, resolve `..`.
pub fn clean_path(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }
    let joined = segments.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

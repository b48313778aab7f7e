use rustc_hash::FxHashMap;

use jump_core::models::{Entry, Weight};

/// Path → weight. Iteration order is unspecified; anything observable
/// goes through [`sorted_descending`] or [`sorted_ascending`].
pub type WeightMap = FxHashMap<String, Weight>;

/// Flatten a map into entries in unspecified order.
pub fn to_entries(weights: &WeightMap) -> Vec<Entry> {
    weights
        .iter()
        .map(|(path, weight)| Entry::new(path.clone(), *weight))
        .collect()
}

/// Entries by weight descending, newest first on ties.
pub fn sorted_descending(weights: &WeightMap) -> Vec<Entry> {
    let mut entries = to_entries(weights);
    entries.sort_by(Entry::cmp_descending);
    entries
}

/// Entries by weight ascending, oldest first on ties.
pub fn sorted_ascending(weights: &WeightMap) -> Vec<Entry> {
    let mut entries = to_entries(weights);
    entries.sort_by(Entry::cmp_ascending);
    entries
}

/// A weight value a store may hold.
pub fn is_storable(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

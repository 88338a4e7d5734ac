//! Symbol frequency distributions.

use std::collections::HashMap;
use std::hash::Hash;

/// Mapping from symbol to frequency.
///
/// Symbols are unique. Iteration follows first-insertion order, which is the
/// order [`build_tree`](crate::build_tree) uses to break frequency ties, so
/// the same table always produces the same tree.
#[derive(Debug, Clone)]
pub struct FreqTable<S> {
    entries: Vec<(S, u64)>,
    index: HashMap<S, usize>,
}

impl<S> Default for FreqTable<S> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<S: Eq + Hash + Clone> FreqTable<S> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with room for `capacity` symbols.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Count the occurrences of every symbol in `symbols`.
    pub fn from_symbols<I: IntoIterator<Item = S>>(symbols: I) -> Self {
        let mut freq = Self::new();
        for symbol in symbols {
            if let Some(&i) = freq.index.get(&symbol) {
                freq.entries[i].1 += 1;
                continue;
            }
            freq.index.insert(symbol.clone(), freq.entries.len());
            freq.entries.push((symbol, 1));
        }
        freq
    }

    /// Set the frequency of `symbol`, returning the previous one.
    ///
    /// A symbol already present keeps its original position.
    pub fn insert(&mut self, symbol: S, freq: u64) -> Option<u64> {
        if let Some(&i) = self.index.get(&symbol) {
            return Some(std::mem::replace(&mut self.entries[i].1, freq));
        }
        self.index.insert(symbol.clone(), self.entries.len());
        self.entries.push((symbol, freq));
        None
    }

    /// Frequency of `symbol`, if present.
    pub fn get(&self, symbol: &S) -> Option<u64> {
        self.index.get(symbol).map(|&i| self.entries[i].1)
    }

    /// Whether `symbol` is present.
    pub fn contains(&self, symbol: &S) -> bool {
        self.index.contains_key(symbol)
    }
}

impl<S> FreqTable<S> {
    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Symbols with their frequencies, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, u64)> + '_ {
        self.entries.iter().map(|(s, f)| (s, *f))
    }

    /// Symbols in insertion order.
    pub fn symbols(&self) -> impl Iterator<Item = &S> + '_ {
        self.entries.iter().map(|(s, _)| s)
    }

    /// Sum of all frequencies.
    pub fn total(&self) -> u128 {
        self.entries.iter().map(|&(_, f)| u128::from(f)).sum()
    }
}

impl<S: Eq + Hash + Clone> FromIterator<(S, u64)> for FreqTable<S> {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut freq = Self::new();
        freq.extend(iter);
        freq
    }
}

impl<S: Eq + Hash + Clone> Extend<(S, u64)> for FreqTable<S> {
    fn extend<I: IntoIterator<Item = (S, u64)>>(&mut self, iter: I) {
        for (symbol, freq) in iter {
            self.insert(symbol, freq);
        }
    }
}

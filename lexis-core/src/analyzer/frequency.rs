//! Token frequency aggregation.
//!
//! Entries are stored in first-seen order. Ranking is a stable sort by count,
//! so tokens with equal counts keep the order in which they first appeared in
//! the input. That ordering is part of the contract: two runs over the same
//! token sequence always produce the same ranking.

use lexis_types::WordCount;
use rustc_hash::FxHashMap;

use super::normalizer::TokenSequence;

/// Immutable mapping from distinct token to occurrence count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    /// (token, count) in first-seen order.
    entries: Vec<(Box<str>, u32)>,
    /// token -> index into `entries`.
    index: FxHashMap<Box<str>, usize>,
    total: usize,
}

impl FrequencyTable {
    /// Counts every token in the sequence.
    pub fn from_tokens(tokens: &TokenSequence) -> Self {
        tokens.iter().collect()
    }

    /// Occurrences of `token`, or 0 if it never appeared.
    #[inline]
    pub fn count(&self, token: &str) -> u32 {
        self.index
            .get(token)
            .map_or(0, |&slot| self.entries[slot].1)
    }

    /// Number of distinct tokens.
    #[inline]
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all counts; equals the length of the source sequence.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns true if no tokens were counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (token, count) pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.entries.iter().map(|(word, count)| (&**word, *count))
    }

    /// The `n` most frequent tokens, highest count first.
    ///
    /// Ties keep first-seen order. `n` larger than [`distinct`](Self::distinct)
    /// returns every entry.
    ///
    /// ```
    /// use lexis_core::analyzer::FrequencyTable;
    ///
    /// let table: FrequencyTable = ["ant", "apple", "apple", "ant", "bee"].into_iter().collect();
    /// let top = table.top(1);
    /// assert_eq!(top[0].word, "ant");
    /// assert_eq!(top[0].count, 2);
    /// ```
    pub fn top(&self, n: usize) -> Vec<WordCount> {
        if n == 0 {
            return Vec::new();
        }

        let mut order: Vec<usize> = (0..self.entries.len()).collect();
        // Stable: equal counts stay in first-seen order.
        order.sort_by(|&a, &b| self.entries[b].1.cmp(&self.entries[a].1));
        order.truncate(n);

        order
            .into_iter()
            .map(|slot| {
                let (word, count) = &self.entries[slot];
                WordCount::new(&**word, *count)
            })
            .collect()
    }

    /// Every entry, ranked.
    #[inline]
    pub fn ranked(&self) -> Vec<WordCount> {
        self.top(self.entries.len())
    }

    fn record(&mut self, token: &str) {
        self.total += 1;
        match self.index.get(token) {
            Some(&slot) => {
                let count = &mut self.entries[slot].1;
                *count = count.saturating_add(1);
            }
            None => {
                let key: Box<str> = token.into();
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }
}

impl<'a> FromIterator<&'a str> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut table = Self::default();
        for token in iter {
            table.record(token);
        }
        table
    }
}

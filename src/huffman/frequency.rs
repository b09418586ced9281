use std::collections::btree_map;
use std::collections::BTreeMap;

/// Occurrence count of every distinct symbol of an input, iterated in
/// ascending symbol order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable<S> {
    counts: BTreeMap<S, usize>,
}

impl<S: Ord> FrequencyTable<S> {
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    fn increment_symbol(&mut self, symbol: S) {
        *self.counts.entry(symbol).or_insert(0) += 1;
    }

    pub fn get(&self, symbol: &S) -> Option<usize> {
        self.counts.get(symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of symbols in the counted input.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, S, usize> {
        self.counts.iter()
    }
}

impl<S: Ord> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Ord> FromIterator<S> for FrequencyTable<S> {
    fn from_iter<T: IntoIterator<Item = S>>(symbols: T) -> Self {
        let mut table = Self::new();
        for symbol in symbols {
            table.increment_symbol(symbol);
        }
        table
    }
}

impl<S: Ord + Copy> From<&[(S, usize)]> for FrequencyTable<S> {
    /// Zero counts are dropped, a symbol listed twice keeps the sum of its counts.
    fn from(symbols_and_frequencies: &[(S, usize)]) -> Self {
        let mut counts = BTreeMap::new();
        for &(symbol, frequency) in symbols_and_frequencies.iter().filter(|sf| sf.1 > 0) {
            *counts.entry(symbol).or_insert(0) += frequency;
        }
        Self { counts }
    }
}

impl<'a, S> IntoIterator for &'a FrequencyTable<S> {
    type Item = (&'a S, &'a usize);
    type IntoIter = btree_map::Iter<'a, S, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

pub fn count_frequencies<S: Ord>(input: impl IntoIterator<Item = S>) -> FrequencyTable<S> {
    input.into_iter().collect()
}

#[cfg(test)]
mod test {
    use super::{count_frequencies, FrequencyTable};

    #[test]
    fn test_count_characters() {
        let table = count_frequencies("abracadabra".chars());
        let expected = [('a', 5), ('b', 2), ('c', 1), ('d', 1), ('r', 2)];
        assert_eq!(table.len(), expected.len());
        for (symbol, frequency) in expected {
            assert_eq!(
                table.get(&symbol),
                Some(frequency),
                "Frequency of '{}' does not match",
                symbol
            );
        }
        assert_eq!(table.total(), 11);
    }

    #[test]
    fn test_count_bytes_iterates_in_symbol_order() {
        let table = count_frequencies([3u8, 0, 3, 255, 0, 3]);
        let pairs: Vec<(u8, usize)> = table.iter().map(|(&s, &f)| (s, f)).collect();
        assert_eq!(pairs, vec![(0, 2), (3, 3), (255, 1)]);
    }

    #[test]
    fn test_empty_input_gives_empty_table() {
        let table = count_frequencies("".chars());
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_from_pairs_drops_zero_counts() {
        let table = FrequencyTable::from(&[(1u8, 4), (2, 0), (3, 7)][..]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(&2), None);
        assert_eq!(table.get(&3), Some(7));
    }
}

use std::collections::btree_map;
use std::collections::BTreeMap;

use super::bits::BitSequence;
use super::frequency::FrequencyTable;
use super::tree::HuffmanTree;

/// Code word of every symbol of a tree, iterated in ascending symbol order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeTable<S> {
    code_words: BTreeMap<S, BitSequence>,
}

impl<S: Copy + Ord> CodeTable<S> {
    pub fn get(&self, symbol: &S) -> Option<&BitSequence> {
        self.code_words.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.code_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code_words.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, S, BitSequence> {
        self.code_words.iter()
    }

    pub fn is_prefix_free(&self) -> bool {
        self.code_words.iter().all(|(symbol, code_word)| {
            self.code_words
                .iter()
                .filter(|(other_symbol, _)| *other_symbol != symbol)
                .all(|(_, other_code_word)| !other_code_word.starts_with(code_word))
        })
    }

    /// Number of bits needed to encode an input with the given frequencies.
    /// Symbols missing from the table are not counted.
    pub fn encoded_length(&self, frequencies: &FrequencyTable<S>) -> usize {
        frequencies
            .iter()
            .filter_map(|(symbol, frequency)| {
                self.code_words
                    .get(symbol)
                    .map(|code_word| code_word.len() * frequency)
            })
            .sum()
    }
}

impl<'a, S> IntoIterator for &'a CodeTable<S> {
    type Item = (&'a S, &'a BitSequence);
    type IntoIter = btree_map::Iter<'a, S, BitSequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.code_words.iter()
    }
}

pub fn generate_codes<S: Copy + Ord>(tree: &HuffmanTree<S>) -> CodeTable<S> {
    let mut code_words = BTreeMap::new();
    let root = tree.root();
    if let Some(symbol) = root.symbol() {
        // an empty code word could not be told apart while decoding
        code_words.insert(symbol, BitSequence::from(vec![false]));
        return CodeTable { code_words };
    }

    let mut work_stack = vec![(tree.root_index(), BitSequence::new())];
    while let Some((index, current_pattern)) = work_stack.pop() {
        let Some(node) = tree.node(index) else {
            continue;
        };
        match (node.symbol(), node.left(), node.right()) {
            (Some(symbol), _, _) => {
                code_words.insert(symbol, current_pattern);
            }
            (None, Some(left), Some(right)) => {
                work_stack.push((right, current_pattern.with_bit(true)));
                work_stack.push((left, current_pattern.with_bit(false)));
            }
            _ => log::warn!("Inner node {} without two children skipped", index),
        }
    }
    log::debug!("Generated {} code words", code_words.len());
    CodeTable { code_words }
}

/// Code word length of a fixed-width code for `alphabet_size` symbols.
pub fn fixed_width_length(alphabet_size: usize) -> usize {
    match alphabet_size {
        0..=2 => 1,
        n => (usize::BITS - (n - 1).leading_zeros()) as usize,
    }
}

use std::fmt::Debug;

pub mod bits;
pub mod code;
pub mod decoder;
pub mod encoder;
pub mod frequency;
pub mod min_heap;
pub mod tree;

pub use bits::BitSequence;
pub use code::{fixed_width_length, generate_codes, CodeTable};
pub use decoder::decode;
pub use encoder::encode;
pub use frequency::{count_frequencies, FrequencyTable};
pub use min_heap::{MinHeap, Weighted};
pub use tree::{build_tree, HuffmanTree, Node, NodeId};

use crate::Result;

/// Frequencies, tree and code table derived from one input.
pub struct HuffmanCoding<S> {
    frequencies: FrequencyTable<S>,
    tree: HuffmanTree<S>,
    codes: CodeTable<S>,
}

impl<S: Copy + Ord + Debug> HuffmanCoding<S> {
    pub fn from_symbols(input: impl IntoIterator<Item = S>) -> Result<Self> {
        let frequencies = count_frequencies(input);
        Self::from_frequencies(frequencies)
    }

    pub fn from_frequencies(frequencies: FrequencyTable<S>) -> Result<Self> {
        let tree = build_tree(&frequencies)?;
        let codes = generate_codes(&tree);
        Ok(Self {
            frequencies,
            tree,
            codes,
        })
    }

    pub fn encode(&self, input: impl IntoIterator<Item = S>) -> Result<BitSequence> {
        encode(input, &self.codes)
    }

    pub fn decode(&self, bits: &BitSequence) -> Result<Vec<S>> {
        decode(bits, &self.tree)
    }

    pub fn frequencies(&self) -> &FrequencyTable<S> {
        &self.frequencies
    }

    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    pub fn codes(&self) -> &CodeTable<S> {
        &self.codes
    }

    pub fn encoded_length(&self) -> usize {
        self.codes.encoded_length(&self.frequencies)
    }

    pub fn fixed_width_length(&self) -> usize {
        self.frequencies.total() * fixed_width_length(self.frequencies.len())
    }
}

#[cfg(test)]
mod test {
    use super::HuffmanCoding;
    use crate::error::Error;

    #[test]
    fn test_round_trip_text() {
        let input = "abracadabra";
        let coding = HuffmanCoding::from_symbols(input.chars()).unwrap();
        let encoded = coding.encode(input.chars()).unwrap();
        assert_eq!(encoded.len(), coding.encoded_length());
        let decoded: String = coding.decode(&encoded).unwrap().into_iter().collect();
        assert_eq!(decoded, input);
    }

    #[test]
    fn test_single_symbol_pipeline() {
        let coding = HuffmanCoding::from_symbols("aaaa".chars()).unwrap();
        assert_eq!(coding.frequencies().get(&'a'), Some(4));
        assert!(coding.tree().root().is_leaf());
        assert_eq!(coding.codes().get(&'a').unwrap().to_string(), "0");
        let encoded = coding.encode("aaaa".chars()).unwrap();
        assert_eq!(encoded.to_string(), "0000");
        let decoded: String = coding.decode(&encoded).unwrap().into_iter().collect();
        assert_eq!(decoded, "aaaa");
    }

    #[test]
    fn test_two_symbol_pipeline() {
        let coding = HuffmanCoding::from_symbols("aabb".chars()).unwrap();
        assert_eq!(coding.frequencies().get(&'a'), Some(2));
        assert_eq!(coding.frequencies().get(&'b'), Some(2));
        assert_eq!(coding.tree().node_count(), 3);
        assert!(coding.codes().iter().all(|(_, code_word)| code_word.len() == 1));
        let encoded = coding.encode("aabb".chars()).unwrap();
        assert_eq!(encoded.len(), 4);
        let decoded: String = coding.decode(&encoded).unwrap().into_iter().collect();
        assert_eq!(decoded, "aabb");
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(matches!(
            HuffmanCoding::from_symbols("".chars()),
            Err(Error::EmptyInput)
        ));
    }

    #[test]
    fn test_fixed_width_baseline() {
        let coding = HuffmanCoding::from_symbols(b"mississippi river".iter().copied()).unwrap();
        assert_eq!(coding.fixed_width_length(), 17 * 3);
        assert!(coding.encoded_length() <= coding.fixed_width_length());
    }
}

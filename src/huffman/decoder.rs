use super::bits::BitSequence;
use super::tree::HuffmanTree;
use crate::error::Error;
use crate::Result;

pub fn decode<S: Copy + Ord>(bits: &BitSequence, tree: &HuffmanTree<S>) -> Result<Vec<S>> {
    let root = tree.root();
    if let Some(symbol) = root.symbol() {
        return decode_single_symbol(bits, symbol);
    }

    let mut out = Vec::new();
    let mut current_index = tree.root_index();
    let mut dangling_bits = 0;
    for (position, take_right) in bits.iter().enumerate() {
        let node = tree
            .node(current_index)
            .ok_or(Error::MalformedEncoding { position })?;
        current_index = node
            .child(take_right)
            .ok_or(Error::MalformedEncoding { position })?;
        dangling_bits += 1;
        let child = tree
            .node(current_index)
            .ok_or(Error::MalformedEncoding { position })?;
        if let Some(symbol) = child.symbol() {
            out.push(symbol);
            current_index = tree.root_index();
            dangling_bits = 0;
        }
    }
    if current_index != tree.root_index() {
        return Err(Error::TruncatedEncoding { dangling_bits });
    }
    Ok(out)
}

// The root is the only leaf, every `0` stands for one symbol and there is
// no path to descend.
fn decode_single_symbol<S: Copy>(bits: &BitSequence, symbol: S) -> Result<Vec<S>> {
    bits.iter()
        .enumerate()
        .map(|(position, bit)| match bit {
            false => Ok(symbol),
            true => Err(Error::MalformedEncoding { position }),
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::decode;
    use crate::error::Error;
    use crate::huffman::bits::BitSequence;
    use crate::huffman::code::generate_codes;
    use crate::huffman::encoder::encode;
    use crate::huffman::frequency::{count_frequencies, FrequencyTable};
    use crate::huffman::tree::HuffmanTree;

    fn tree_for(input: &str) -> HuffmanTree<char> {
        HuffmanTree::build(&count_frequencies(input.chars())).unwrap()
    }

    fn bits(pattern: &str) -> BitSequence {
        pattern.parse().unwrap()
    }

    #[test]
    fn test_decode_single_symbol_tree() {
        let tree = tree_for("aaaa");
        let decoded: String = decode(&bits("0000"), &tree).unwrap().into_iter().collect();
        assert_eq!(decoded, "aaaa");
    }

    #[test]
    fn test_decode_single_symbol_tree_rejects_one() {
        let tree = tree_for("aaaa");
        assert!(matches!(
            decode(&bits("0010"), &tree),
            Err(Error::MalformedEncoding { position: 2 })
        ));
    }

    #[test]
    fn test_decode_two_symbol_tree() {
        let tree = tree_for("aabb");
        let decoded: String = decode(&bits("0011"), &tree).unwrap().into_iter().collect();
        assert_eq!(decoded, "aabb");
    }

    #[test]
    fn test_decode_dangling_bit_is_truncated() {
        let tree = tree_for("aaaabbc");
        let codes = generate_codes(&tree);
        assert_eq!(codes.get(&'a').unwrap().to_string(), "1");
        assert_eq!(codes.get(&'c').unwrap().to_string(), "00");
        assert_eq!(codes.get(&'b').unwrap().to_string(), "01");
        match decode(&bits("1000"), &tree) {
            Err(Error::TruncatedEncoding { dangling_bits }) => assert_eq!(dangling_bits, 1),
            other => panic!("Expected TruncatedEncoding, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_empty_sequence() {
        let tree = tree_for("abc");
        assert!(decode(&BitSequence::new(), &tree).unwrap().is_empty());
    }

    #[test]
    fn test_decode_byte_symbols_with_zero_value() {
        let input: &[u8] = &[0, 0, 0, 1, 2, 0, 255];
        let frequencies: FrequencyTable<u8> = input.iter().copied().collect();
        let tree = HuffmanTree::build(&frequencies).unwrap();
        let codes = generate_codes(&tree);
        let encoded = encode(input.iter().copied(), &codes).unwrap();
        assert_eq!(decode(&encoded, &tree).unwrap(), input);
    }

    #[test]
    fn test_decode_does_not_depend_on_encoder() {
        let tree = tree_for("abracadabra");
        let codes = generate_codes(&tree);
        let mut encoded = BitSequence::new();
        for symbol in "cab".chars() {
            encoded.extend_from(codes.get(&symbol).unwrap());
        }
        let decoded: String = decode(&encoded, &tree).unwrap().into_iter().collect();
        assert_eq!(decoded, "cab");
    }
}

use huffman_coder::huffman::{
    build_tree, count_frequencies, decode, encode, generate_codes, BitSequence,
};
use huffman_coder::Error;

fn main() -> Result<(), Error> {
    let text = "this is an example of a huffman tree";

    let frequencies = count_frequencies(text.chars());
    println!("symbol frequencies");
    for (symbol, frequency) in &frequencies {
        println!("{:?}: {}", symbol, frequency);
    }

    let tree = build_tree(&frequencies)?;
    println!("huffman tree\n{}", tree);

    let codes = generate_codes(&tree);
    println!("code table");
    for (symbol, code_word) in &codes {
        println!("{:?}: {}", symbol, code_word);
    }

    let encoded = encode(text.chars(), &codes)?;
    println!("encoded sequence ({} bits)\n{}", encoded.len(), encoded);

    let decoded: String = decode(&encoded, &tree)?.into_iter().collect();
    println!("decoded sequence\n{}", decoded);

    let dangling: BitSequence = format!("{}1", encoded).parse()?;
    match decode(&dangling, &tree) {
        Err(e) => println!("decoding with a dangling bit fails: {}", e),
        Ok(_) => println!("decoding with a dangling bit unexpectedly succeeded"),
    }
    Ok(())
}

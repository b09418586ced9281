use std::fmt::Debug;

use super::bits::BitSequence;
use super::code::CodeTable;
use crate::error::Error;
use crate::Result;

pub fn encode<S: Copy + Ord + Debug>(
    input: impl IntoIterator<Item = S>,
    codes: &CodeTable<S>,
) -> Result<BitSequence> {
    let mut encoded = BitSequence::new();
    for symbol in input {
        let code_word = codes
            .get(&symbol)
            .ok_or_else(|| Error::UnknownSymbol(format!("{:?}", symbol)))?;
        encoded.extend_from(code_word);
    }
    Ok(encoded)
}

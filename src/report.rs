use std::fmt::{self, Debug, Write};

use crate::huffman::{BitSequence, HuffmanCoding};

/// A symbol type the command line front end knows how to print.
pub trait Symbol: Copy + Ord + Debug + Send + 'static {
    fn label(&self) -> String;

    fn render_sequence(symbols: &[Self]) -> String;
}

impl Symbol for char {
    fn label(&self) -> String {
        match self {
            ' ' => "' '".to_string(),
            c => c.escape_debug().to_string(),
        }
    }

    fn render_sequence(symbols: &[Self]) -> String {
        symbols.iter().collect()
    }
}

impl Symbol for u8 {
    fn label(&self) -> String {
        format!("0x{:02X}", self)
    }

    fn render_sequence(symbols: &[Self]) -> String {
        String::from_utf8_lossy(symbols).into_owned()
    }
}

pub struct Report<'a, S> {
    pub name: &'a str,
    pub coding: &'a HuffmanCoding<S>,
    pub encoded: &'a BitSequence,
    pub decoded: &'a [S],
}

impl<S: Symbol> Report<'_, S> {
    fn write_frequency_table(&self, f: &mut impl Write) -> fmt::Result {
        writeln!(f, "Frequency Table")?;
        for (symbol, frequency) in self.coding.frequencies() {
            writeln!(f, "{}: {}", symbol.label(), frequency)?;
        }
        Ok(())
    }

    fn write_tree(&self, f: &mut impl Write) -> fmt::Result {
        writeln!(f, "Huffman Tree")?;
        for (node, depth) in self.coding.tree().walk() {
            let label = node
                .symbol()
                .map(|symbol| symbol.label())
                .unwrap_or_else(|| "*".to_string());
            writeln!(f, "{}{}: {}", "  ".repeat(depth), label, node.weight())?;
        }
        Ok(())
    }

    fn write_code_table(&self, f: &mut impl Write) -> fmt::Result {
        writeln!(f, "Code Table")?;
        for (symbol, code_word) in self.coding.codes() {
            writeln!(f, "{}: {}", symbol.label(), code_word)?;
        }
        Ok(())
    }

    fn write_statistics(&self, f: &mut impl Write) -> fmt::Result {
        let encoded_bits = self.encoded.len();
        let fixed_width_bits = self.coding.fixed_width_length();
        writeln!(f, "Statistics")?;
        writeln!(f, "input symbols: {}", self.coding.frequencies().total())?;
        writeln!(f, "distinct symbols: {}", self.coding.frequencies().len())?;
        writeln!(f, "encoded bits: {}", encoded_bits)?;
        writeln!(f, "fixed-width bits: {}", fixed_width_bits)?;
        writeln!(
            f,
            "compression ratio: {:.2}%",
            100.0 * encoded_bits as f64 / fixed_width_bits as f64
        )
    }
}

impl<S: Symbol> fmt::Display for Report<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.name)?;
        self.write_frequency_table(f)?;
        self.write_tree(f)?;
        self.write_code_table(f)?;
        writeln!(f, "Encoded Text")?;
        writeln!(f, "{}", self.encoded)?;
        writeln!(f, "Decoded Text")?;
        writeln!(f, "{}", S::render_sequence(self.decoded))?;
        self.write_statistics(f)
    }
}

use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
    sync::mpsc,
};

use clap::{builder::PossibleValue, ValueEnum};
pub use cli::CLIParser;
pub use error::Error;
use huffman::HuffmanCoding;
use report::{Report, Symbol};
use threadpool::ThreadPool;

mod cli;
mod error;
pub mod huffman;
mod logger;
mod report;

pub type Result<T> = std::result::Result<T, error::Error>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SymbolUnit {
    Char,
    Byte,
}

impl ValueEnum for SymbolUnit {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Char, Self::Byte]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Char => Some(PossibleValue::new("char")),
            Self::Byte => Some(PossibleValue::new("byte")),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    Text(String),
    File(PathBuf),
}

impl Input {
    fn name(&self) -> String {
        match self {
            Self::Text(_) => "text".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    fn read(&self) -> Result<Vec<u8>> {
        match self {
            Self::Text(text) => Ok(text.as_bytes().to_vec()),
            Self::File(path) => read_input_file(path),
        }
    }
}

pub struct Arguments {
    inputs: Vec<Input>,
    symbol_unit: SymbolUnit,
    number_of_threads: usize,
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.display().to_string(), e)
    })
}

fn read_input_file(file_path: &Path) -> Result<Vec<u8>> {
    let mut content = Vec::new();
    open_input_file(file_path)?
        .read_to_end(&mut content)
        .map_err(|e| Error::UnableToReadInputFile(file_path.display().to_string(), e))?;
    Ok(content)
}

fn encode_symbols<S: Symbol>(name: &str, symbols: &[S]) -> Result<String> {
    let coding = HuffmanCoding::from_symbols(symbols.iter().copied())?;
    logger::log_code_table(name, coding.codes());
    let encoded = coding.encode(symbols.iter().copied())?;
    let decoded = coding.decode(&encoded)?;
    if decoded != symbols {
        log::warn!("{}: decoded symbols differ from the input", name);
    }
    log::info!(
        "{}: {} symbols encoded into {} bits ({} bits fixed-width)",
        name,
        symbols.len(),
        encoded.len(),
        coding.fixed_width_length()
    );
    let report = Report {
        name,
        coding: &coding,
        encoded: &encoded,
        decoded: &decoded,
    };
    Ok(report.to_string())
}

fn encode_input(input: &Input, symbol_unit: SymbolUnit) -> Result<String> {
    let name = input.name();
    let content = input.read()?;
    match symbol_unit {
        SymbolUnit::Char => {
            let text = String::from_utf8(content)
                .map_err(|_| Error::InputIsNotValidUtf8(name.clone()))?;
            let symbols: Vec<char> = text.chars().collect();
            encode_symbols(&name, symbols.as_slice())
        }
        SymbolUnit::Byte => encode_symbols(&name, content.as_slice()),
    }
}

/// Encodes every input independently on a thread pool and returns the
/// reports in the order the inputs were given.
pub fn encode_inputs(arguments: &Arguments) -> Result<String> {
    let threadpool = ThreadPool::new(arguments.number_of_threads.max(1));
    let (sender, receiver) = mpsc::channel();
    for (position, input) in arguments.inputs.iter().cloned().enumerate() {
        let sender = sender.clone();
        let symbol_unit = arguments.symbol_unit;
        threadpool.execute(move || {
            let result = encode_input(&input, symbol_unit);
            if sender.send((position, result)).is_err() {
                log::warn!("Result for {} could not be delivered", input.name());
            }
        });
    }
    drop(sender);

    let mut results: Vec<Option<Result<String>>> =
        (0..arguments.inputs.len()).map(|_| None).collect();
    for (position, result) in receiver {
        results[position] = Some(result);
    }
    let reports = results
        .into_iter()
        .map(|result| result.unwrap_or(Err(Error::WorkerDisconnected)))
        .collect::<Result<Vec<String>>>()?;
    Ok(reports.join("\n"))
}

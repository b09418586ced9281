use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    EmptyInput,
    EmptyQueue,
    UnknownSymbol(String),
    MalformedEncoding { position: usize },
    TruncatedEncoding { dangling_bits: usize },
    InvalidBitCharacter { character: char, position: usize },
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToReadInputFile(String, std::io::Error),
    InputIsNotValidUtf8(String),
    WorkerDisconnected,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => {
                write!(f, "Input contains no symbols, unable to build a Huffman tree")
            }
            Self::EmptyQueue => write!(f, "Attempted to extract from an empty priority queue"),
            Self::UnknownSymbol(symbol) => {
                write!(f, "Symbol {} not present in code table", symbol)
            }
            Self::MalformedEncoding { position } => {
                write!(
                    f,
                    "Bit at position {} does not follow a path in the Huffman tree",
                    position
                )
            }
            Self::TruncatedEncoding { dangling_bits } => {
                write!(
                    f,
                    "Encoded sequence ends inside a code word ({} dangling bits)",
                    dangling_bits
                )
            }
            Self::InvalidBitCharacter {
                character,
                position,
            } => {
                write!(
                    f,
                    "Invalid character '{}' at position {}. Expected '0' or '1'.",
                    character, position
                )
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToReadInputFile(path, error) => {
                write!(f, "Unable to read input file '{}': {}", path, error)
            }
            Self::InputIsNotValidUtf8(path) => {
                write!(
                    f,
                    "Input file '{}' is not valid UTF-8, use byte mode instead",
                    path
                )
            }
            Self::WorkerDisconnected => {
                write!(f, "Worker thread terminated without reporting a result")
            }
        }
    }
}

impl std::error::Error for Error {}

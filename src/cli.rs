use crate::{Arguments, Input, SymbolUnit};
use clap::{
    arg, crate_description, crate_name, crate_version, value_parser, Arg, ArgGroup, ArgMatches,
    Command,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::{io, thread};

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_files_argument(command);
        let command = Self::register_text_argument(command);
        let command = Self::register_input_group(command);
        let command = Self::register_symbol_unit_argument(command);
        Self::register_threads_argument(command)
    }

    fn register_input_files_argument(command: Command) -> Command {
        command.arg(Self::create_input_files_argument())
    }

    fn register_text_argument(command: Command) -> Command {
        command.arg(Self::create_text_argument())
    }

    fn register_input_group(command: Command) -> Command {
        command.group(
            ArgGroup::new("input")
                .args(["input_files", "text"])
                .required(true),
        )
    }

    fn register_symbol_unit_argument(command: Command) -> Command {
        command.arg(Self::create_symbol_unit_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .about(crate_description!())
    }

    fn create_input_files_argument() -> Arg {
        Arg::new("input_files")
            .help("Paths to the files to encode")
            .value_parser(value_parser!(PathBuf))
            .num_args(1..)
    }

    fn create_text_argument() -> Arg {
        arg!(-t --text <TEXT> "Text to encode instead of input files").required(false)
    }

    fn create_symbol_unit_argument() -> Arg {
        arg!(unit: -u --unit <UNIT> "Symbol unit of the input")
            .default_value("char")
            .value_parser(value_parser!(SymbolUnit))
    }

    fn create_threads_argument() -> Arg {
        arg!(-j --threads <THREADS> "Number of Threads")
            .default_value(get_number_of_threads().unwrap_or(1).to_string())
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            inputs: Self::extract_inputs(matches),
            symbol_unit: Self::extract_symbol_unit_argument(matches),
            number_of_threads: Self::extract_threads_argument(matches),
        }
    }

    fn extract_inputs(matches: &ArgMatches) -> Vec<Input> {
        match Self::extract_text_argument(matches) {
            Some(text) => vec![Input::Text(text)],
            None => Self::extract_input_files_argument(matches)
                .into_iter()
                .map(Input::File)
                .collect(),
        }
    }

    fn extract_input_files_argument(matches: &ArgMatches) -> Vec<PathBuf> {
        matches
            .get_many::<PathBuf>("input_files")
            .map(|paths| paths.cloned().collect())
            .unwrap_or_default()
    }

    fn extract_text_argument(matches: &ArgMatches) -> Option<String> {
        matches.get_one::<String>("text").cloned()
    }

    fn extract_symbol_unit_argument(matches: &ArgMatches) -> SymbolUnit {
        matches
            .get_one::<SymbolUnit>("unit")
            .expect("Symbol unit must be provided, but was unset.")
            .to_owned()
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}

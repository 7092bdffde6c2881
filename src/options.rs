//! Parsing Options.
//! `ndrtosn <input.ndr> <output.lsn>` with `-n` for the name-table side
//! files; flags may also arrive via the `NDRTOSN_FLAGS` environment
//! variable as one shell-quoted string.

use clap::{Arg, ArgAction, Command};
use std::error::Error;

fn make_options_parser() -> clap::Command {
    Command::new("ndrtosn")
        .no_binary_name(true)
        .version("v0.1.0")
        .about("Convert a textual Petri net (.ndr) into numeric LSN/HSN form")
        .arg(
            Arg::new("input")
                .required(true)
                .value_name("INPUT")
                .help("NDR input file, or - for standard input"),
        )
        .arg(
            Arg::new("output")
                .required(true)
                .value_name("OUTPUT")
                .help("LSN/HSN output file"),
        )
        .arg(
            Arg::new("name-tables")
                .short('n')
                .long("name-tables")
                .action(ArgAction::SetTrue)
                .help("Also write <OUTPUT>.nmp and <OUTPUT>.nmt name tables"),
        )
        .arg(
            Arg::new("dump")
                .long("dump")
                .value_name("FILE")
                .help("Write the parsed net model as JSON"),
        )
}

#[derive(Debug, Default)]
pub struct Options {
    pub input: String,
    pub output: String,
    pub name_tables: bool,
    pub dump: Option<String>,
}

impl Options {
    pub fn parse_from_str(s: &str) -> Result<Self, Box<dyn Error>> {
        let flags = shellwords::split(s)?;
        Self::parse_from_args(&flags)
    }

    pub fn parse_from_args(flags: &[String]) -> Result<Self, Box<dyn Error>> {
        let app = make_options_parser();
        let matches = app.try_get_matches_from(flags.iter())?;
        Ok(Options {
            input: matches.get_one::<String>("input").unwrap().to_string(),
            output: matches.get_one::<String>("output").unwrap().to_string(),
            name_tables: matches.get_flag("name-tables"),
            dump: matches.get_one::<String>("dump").cloned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let options = Options::parse_from_str("net.ndr net.lsn").unwrap();
        assert_eq!(options.input, "net.ndr");
        assert_eq!(options.output, "net.lsn");
        assert!(!options.name_tables);
        assert!(options.dump.is_none());
    }

    #[test]
    fn test_parse_flags() {
        let options = Options::parse_from_str("-n --dump model.json - out.hsn").unwrap();
        assert_eq!(options.input, "-");
        assert_eq!(options.output, "out.hsn");
        assert!(options.name_tables);
        assert_eq!(options.dump.as_deref(), Some("model.json"));
    }

    #[test]
    fn test_parse_from_str_err() {
        let options = Options::parse_from_str("only-one-arg");
        assert!(options.is_err());
    }

    #[test]
    fn test_parse_from_args_err() {
        let options = Options::parse_from_args(&[
            "--unknown".to_owned(),
            "a.ndr".to_owned(),
            "a.lsn".to_owned(),
        ]);
        assert!(options.is_err());
    }
}

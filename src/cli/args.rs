use std::path::PathBuf;

use clap::Parser;
use clap::builder::RangedU64ValueParser;

use crate::pass::CharClass;

/// Random password generator with a strength meter.
///
/// Run without arguments in a terminal to open the interactive screen.
#[derive(Parser, Debug)]
#[command(name = "passgen", version, about, long_about = None)]
pub struct Args {
    /// Characters per password, 4-32 (default: 12)
    #[arg(short, long, value_name = "N")]
    pub length: Option<usize>,

    /// Leave out uppercase letters (A-Z)
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters (a-z)
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out digits (0-9)
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols (!@#$%^&*...)
    #[arg(long)]
    pub no_symbols: bool,

    /// How many passwords to generate (at least 1)
    #[arg(
        short,
        long,
        value_name = "N",
        default_value_t = 1,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub number: usize,

    /// Copy to clipboard instead of printing
    #[arg(short, long)]
    pub board: bool,

    /// Print the strength level next to each password
    #[arg(short = 'S', long)]
    pub score: bool,

    /// Score an existing password and exit ("-" reads a line from stdin)
    #[arg(
        long,
        value_name = "PASSWORD",
        conflicts_with_all = ["board", "interactive", "number", "score", "saved", "save"]
    )]
    pub check: Option<String>,

    /// Draw every character straight from the operating system RNG
    #[arg(long)]
    pub os_rng: bool,

    /// Fail instead of falling back to lowercase when no class is selected
    #[arg(long)]
    pub strict: bool,

    /// Start from the saved settings
    #[arg(short, long)]
    pub saved: bool,

    /// Save the resulting options as the new settings
    #[arg(long)]
    pub save: bool,

    /// Settings file location
    #[arg(long, value_name = "PATH", env = "PASSGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress warnings and confirmations
    #[arg(short, long)]
    pub quiet: bool,

    /// Open the interactive screen
    #[arg(short, long)]
    pub interactive: bool,
}

impl Args {
    /// Classes switched off on the command line.
    pub fn excluded_classes(&self) -> Vec<CharClass> {
        [
            (CharClass::Uppercase, self.no_upper),
            (CharClass::Lowercase, self.no_lower),
            (CharClass::Digits, self.no_digits),
            (CharClass::Symbols, self.no_symbols),
        ]
        .into_iter()
        .filter_map(|(class, excluded)| excluded.then_some(class))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("passgen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.length, None);
        assert_eq!(args.number, 1);
        assert!(args.excluded_classes().is_empty());
    }

    #[test]
    fn test_flags() {
        let args = parse(&["-l", "20", "--no-symbols", "--no-upper", "-n", "3", "-S"]);
        assert_eq!(args.length, Some(20));
        assert_eq!(args.number, 3);
        assert!(args.score);
        assert_eq!(
            args.excluded_classes(),
            vec![CharClass::Uppercase, CharClass::Symbols]
        );
    }

    #[test]
    fn test_check_conflicts_with_board() {
        let result = Args::try_parse_from(["passgen", "--check", "abc", "-b"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_conflicts_with_generation_flags() {
        for flag in [&["-n", "3"][..], &["-S"], &["-s"], &["--save"]] {
            let args = ["passgen", "--check", "abc"].into_iter().chain(flag.iter().copied());
            assert!(Args::try_parse_from(args).is_err(), "{flag:?} was accepted");
        }
        assert!(Args::try_parse_from(["passgen", "--check", "abc", "-q"]).is_ok());
    }

    #[test]
    fn test_number_must_be_positive() {
        assert!(Args::try_parse_from(["passgen", "-n", "0"]).is_err());
        assert_eq!(parse(&["-n", "1"]).number, 1);
    }

    #[test]
    fn test_rejects_non_numeric_length() {
        assert!(Args::try_parse_from(["passgen", "-l", "long"]).is_err());
    }
}

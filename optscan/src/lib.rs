//! Configurable command-line argument parsing.
//!
//! One engine covers several conventions, selected purely through the option
//! specifications handed to it:
//! - traditional `getopt`: `-` groupable options, `-vfFILE`;
//! - GNU `getopt_long`: the above plus `--` standalone options, `--file=x`;
//! - Go `flag` style: `-` standalone options, `-file x`;
//! - `dig` style: `+` standalone options next to `-` groupable ones.
//!
//! The pipeline is: early-option preflight, spec validation, tokenizing,
//! option resolution, permutation. The result is a flat list of [`Value`]s
//! that serializes back to an argument vector with [`to_argv`].
//!
//! ```
//! use optscan::{OptionSpec, Parser, Value};
//!
//! let parser = Parser::new()
//!     .option(OptionSpec::groupable("-", 'v'))
//!     .option(OptionSpec::standalone("--", "file").required())
//!     .separator("--");
//!
//! let values = parser.parse(&["prog", "in.txt", "-v", "--file", "out.txt"]).unwrap();
//! assert_eq!(
//!     optscan::to_argv(&values),
//!     ["prog", "-v", "--file", "out.txt", "in.txt"]
//! );
//! assert!(matches!(values[0], Value::ProgramName(_)));
//! ```

mod config;
mod early;
mod error;
pub mod getopt;
mod parser;
mod permute;
mod scanner;
mod token;
mod value;

use tracing::debug;

pub use config::{ArgPolicy, Category, CategorySet, Config, OptionSpec};
pub use error::{Error, ErrorKind, Result};
pub use scanner::Scanner;
pub use token::{OptionToken, PositionalToken, ProgramNameToken, Scanned, SeparatorToken, Token};
pub use value::{to_argv, OptionValue, PositionalValue, ProgramNameValue, SeparatorValue, Value};

/// A reusable parser description.
///
/// Holds unvalidated option specs and parsing rules. Each call to
/// [`Parser::parse`] validates the specs into a fresh [`Config`], so a
/// `Parser` carries no state between calls.
#[derive(Debug, Clone)]
pub struct Parser {
    options: Vec<OptionSpec>,
    separator: Option<String>,
    min_positionals: usize,
    max_positionals: usize,
    disable_permute: bool,
    count_separators: bool,
}

impl Parser {
    pub fn new() -> Self {
        Parser {
            options: Vec::new(),
            separator: None,
            min_positionals: 0,
            max_positionals: usize::MAX,
            disable_permute: false,
            count_separators: false,
        }
    }

    pub fn option(mut self, spec: OptionSpec) -> Self {
        self.options.push(spec);
        self
    }

    pub fn options<I: IntoIterator<Item = OptionSpec>>(mut self, specs: I) -> Self {
        self.options.extend(specs);
        self
    }

    /// Literal that ends option parsing, conventionally `--`.
    pub fn separator(mut self, literal: &str) -> Self {
        self.separator = Some(literal.to_string());
        self
    }

    pub fn min_positionals(mut self, n: usize) -> Self {
        self.min_positionals = n;
        self
    }

    pub fn max_positionals(mut self, n: usize) -> Self {
        self.max_positionals = n;
        self
    }

    /// Keep argv order and stop option parsing at the first positional.
    pub fn disable_permute(mut self, yes: bool) -> Self {
        self.disable_permute = yes;
        self
    }

    /// Count separators as positionals when checking the limits.
    pub fn count_separators(mut self, yes: bool) -> Self {
        self.count_separators = yes;
        self
    }

    /// Whether options are moved ahead of positionals.
    pub fn permutes(&self) -> bool {
        !self.disable_permute
    }

    pub fn parse<S: AsRef<str>>(&self, argv: &[S]) -> Result<Vec<Value>> {
        if let Some(values) = early::preflight(argv, &self.options) {
            return Ok(values);
        }

        let config = Config::new(&self.options)?;
        let scanner = Scanner::new(config.prefixes(), self.separator.clone());
        let Scanned { program, tokens } = scanner.scan(argv)?;

        let rules = parser::Rules {
            permute: !self.disable_permute,
            min_positionals: self.min_positionals,
            max_positionals: self.max_positionals,
            count_separators: self.count_separators,
        };
        let parsed = parser::parse_tokens(&config, tokens, rules)?;
        debug!(
            options = parsed.options.len(),
            positionals = parsed.positionals.len(),
            "parsed command line"
        );

        Ok(permute::permute(program, parsed, rules.permute))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse `argv` against `options` in one call.
///
/// `argv[0]` is the program name. Separators do not count toward the
/// positional limits here; use [`Parser::count_separators`] for that.
pub fn parse<S: AsRef<str>>(
    argv: &[S],
    options: &[OptionSpec],
    separator: Option<&str>,
    min_positionals: usize,
    max_positionals: usize,
    disable_permute: bool,
) -> Result<Vec<Value>> {
    let mut parser = Parser::new()
        .options(options.iter().cloned())
        .min_positionals(min_positionals)
        .max_positionals(max_positionals)
        .disable_permute(disable_permute);
    if let Some(sep) = separator {
        parser = parser.separator(sep);
    }
    parser.parse(argv)
}

use tracing::trace;

use crate::error::{Error, Result};
use crate::token::{OptionToken, PositionalToken, ProgramNameToken, Scanned, SeparatorToken, Token};

/// Splits an argument vector into tokens by prefix and separator literals.
///
/// The scanner knows nothing about option names; `--bogus` is an option
/// token as long as `--` is a configured prefix.
#[derive(Debug, Clone)]
pub struct Scanner {
    prefixes: Vec<String>,
    separators: Vec<String>,
}

impl Scanner {
    pub fn new<P, S>(prefixes: P, separators: S) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        let mut prefixes: Vec<String> = prefixes
            .into_iter()
            .map(Into::into)
            .filter(|p: &String| !p.is_empty())
            .collect();
        // Longest first so `--` wins over `-`; lexicographic among equals.
        prefixes.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        prefixes.dedup();

        Scanner {
            prefixes,
            separators: separators.into_iter().map(Into::into).collect(),
        }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn scan<S: AsRef<str>>(&self, argv: &[S]) -> Result<Scanned> {
        let (first, rest) = argv.split_first().ok_or(Error::MissingProgramName)?;
        let program = ProgramNameToken {
            name: first.as_ref().to_string(),
        };

        let tokens = rest
            .iter()
            .enumerate()
            .map(|(i, arg)| self.classify(i + 1, arg.as_ref()))
            .collect();

        Ok(Scanned { program, tokens })
    }

    fn classify(&self, index: usize, arg: &str) -> Token {
        if self.separators.iter().any(|s| s == arg) {
            trace!(index, arg, "separator");
            return Token::Separator(SeparatorToken {
                index,
                literal: arg.to_string(),
            });
        }

        for prefix in &self.prefixes {
            if arg.len() > prefix.len() && arg.starts_with(prefix.as_str()) {
                trace!(index, arg, prefix = prefix.as_str(), "option");
                return Token::Option(OptionToken {
                    index,
                    prefix: prefix.clone(),
                    name: arg[prefix.len()..].to_string(),
                });
            }
        }

        trace!(index, arg, "positional");
        Token::Positional(PositionalToken {
            index,
            value: arg.to_string(),
        })
    }
}

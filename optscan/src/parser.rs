use std::vec::IntoIter;

use tracing::trace;

use crate::config::{ArgPolicy, Category, Config, OptionSpec};
use crate::error::{Error, Result};
use crate::token::{OptionToken, Token};
use crate::value::{OptionValue, PositionalValue, SeparatorValue, Value};

/// Knobs that change how tokens are consumed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rules {
    pub permute: bool,
    pub min_positionals: usize,
    pub max_positionals: usize,
    pub count_separators: bool,
}

/// Options and positionals in encounter order. Positionals include
/// separator values.
#[derive(Debug, Default)]
pub(crate) struct Parsed {
    pub options: Vec<OptionValue>,
    pub positionals: Vec<Value>,
}

struct TokenParser<'a> {
    config: &'a Config,
    rules: Rules,
    only_positional: bool,
    parsed: Parsed,
}

pub(crate) fn parse_tokens(config: &Config, tokens: Vec<Token>, rules: Rules) -> Result<Parsed> {
    let mut parser = TokenParser {
        config,
        rules,
        only_positional: false,
        parsed: Parsed::default(),
    };

    let mut stream = tokens.into_iter();
    while let Some(token) = stream.next() {
        parser.step(token, &mut stream)?;
    }

    parser.check_cardinality()?;
    Ok(parser.parsed)
}

impl TokenParser<'_> {
    fn step(&mut self, token: Token, stream: &mut IntoIter<Token>) -> Result<()> {
        match token {
            Token::Positional(_) => {
                if !self.rules.permute {
                    self.only_positional = true;
                }
                self.push_positional(token);
            }
            Token::Separator(sep) => {
                self.only_positional = true;
                self.parsed
                    .positionals
                    .push(Value::Separator(SeparatorValue { token: sep }));
            }
            Token::Option(_) if self.only_positional => {
                self.push_positional(token);
            }
            Token::Option(opt) => {
                let categories = self.config.categories(&opt.prefix);
                if categories.contains(Category::Groupable) {
                    self.groupable(opt, stream)?;
                } else if categories.contains(Category::Standalone) {
                    self.standalone(opt, stream)?;
                } else {
                    // Only early options use this prefix, and the exact
                    // literal would have been caught by the preflight.
                    return Err(unknown(&opt.prefix, &opt.name, opt.index));
                }
            }
        }
        Ok(())
    }

    fn push_positional(&mut self, token: Token) {
        trace!(index = token.index(), "positional");
        let value = token.literal();
        self.parsed
            .positionals
            .push(Value::Positional(PositionalValue { token, value }));
    }

    fn standalone(&mut self, token: OptionToken, stream: &mut IntoIter<Token>) -> Result<()> {
        let config = self.config;
        let (name, inline) = match token.name.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (token.name.as_str(), None),
        };

        let spec = config
            .find(&token.prefix, name, Category::Standalone)
            .ok_or_else(|| unknown(&token.prefix, name, token.index))?;

        let value = match spec.policy {
            ArgPolicy::None => {
                if inline.is_some() {
                    return Err(Error::OptionRequiresNoArgument {
                        prefix: spec.prefix.clone(),
                        name: spec.name.clone(),
                        index: token.index,
                    });
                }
                String::new()
            }
            ArgPolicy::Optional => inline
                .map(str::to_string)
                .unwrap_or_else(|| spec.default_value.clone()),
            ArgPolicy::Required => match inline {
                Some(value) => value.to_string(),
                None => next_value(spec, token.index, stream)?,
            },
        };

        self.push_option(spec, token, value);
        Ok(())
    }

    fn groupable(&mut self, token: OptionToken, stream: &mut IntoIter<Token>) -> Result<()> {
        let config = self.config;

        for (pos, c) in token.name.char_indices() {
            let mut buf = [0; 4];
            let name: &str = c.encode_utf8(&mut buf);
            let spec = config
                .find(&token.prefix, name, Category::Groupable)
                .ok_or_else(|| unknown(&token.prefix, name, token.index))?;

            let rest = &token.name[pos + c.len_utf8()..];
            match spec.policy {
                ArgPolicy::None => {
                    self.push_option(spec, token.clone(), String::new());
                }
                ArgPolicy::Required => {
                    let value = if rest.is_empty() {
                        next_value(spec, token.index, stream)?
                    } else {
                        rest.to_string()
                    };
                    self.push_option(spec, token.clone(), value);
                    break;
                }
                ArgPolicy::Optional => {
                    let value = if rest.is_empty() {
                        spec.default_value.clone()
                    } else {
                        rest.to_string()
                    };
                    self.push_option(spec, token.clone(), value);
                    break;
                }
            }
        }
        Ok(())
    }

    fn push_option(&mut self, spec: &OptionSpec, token: OptionToken, value: String) {
        trace!(index = token.index, option = %spec.literal(), value = value.as_str(), "option");
        self.parsed.options.push(OptionValue {
            spec: spec.clone(),
            token,
            value,
        });
    }

    fn check_cardinality(&self) -> Result<()> {
        let have = self
            .parsed
            .positionals
            .iter()
            .filter(|v| match v {
                Value::Positional(_) => true,
                Value::Separator(_) => self.rules.count_separators,
                _ => false,
            })
            .count();

        if have < self.rules.min_positionals {
            return Err(Error::TooFewPositionalArguments {
                min: self.rules.min_positionals,
                have,
            });
        }
        if have > self.rules.max_positionals {
            return Err(Error::TooManyPositionalArguments {
                max: self.rules.max_positionals,
                have,
            });
        }
        Ok(())
    }
}

/// Take the next token verbatim as an option argument, whatever its kind.
fn next_value(spec: &OptionSpec, index: usize, stream: &mut IntoIter<Token>) -> Result<String> {
    stream
        .next()
        .map(|token| token.literal())
        .ok_or_else(|| Error::OptionRequiresArgument {
            prefix: spec.prefix.clone(),
            name: spec.name.clone(),
            index,
        })
}

fn unknown(prefix: &str, name: &str, index: usize) -> Error {
    Error::UnknownOption {
        prefix: prefix.to_string(),
        name: name.to_string(),
        index,
    }
}

//! Resolved command-line values.
//!
//! A parse result is a `Vec<Value>`. Concatenating [`Value::strings`] over it
//! yields an argument vector that parses back to the same options and
//! positionals.

use crate::config::{ArgPolicy, Category, OptionSpec};
use crate::token::{OptionToken, SeparatorToken, Token};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramNameValue {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionValue {
    pub spec: OptionSpec,
    /// The token the option was found in. Bundled options share one.
    pub token: OptionToken,
    pub value: String,
}

impl OptionValue {
    pub fn strings(&self) -> Vec<String> {
        let flag = self.spec.literal();
        if self.spec.category == Category::Early {
            return vec![flag];
        }
        match self.spec.policy {
            ArgPolicy::None => vec![flag],
            ArgPolicy::Optional => match self.spec.category {
                Category::Groupable => vec![format!("{}{}", flag, self.value)],
                _ => vec![format!("{}={}", flag, self.value)],
            },
            ArgPolicy::Required => vec![flag, self.value.clone()],
        }
    }
}

/// A positional argument. `token` may be an option token that appeared
/// after option parsing stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalValue {
    pub token: Token,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorValue {
    pub token: SeparatorToken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    ProgramName(ProgramNameValue),
    Option(OptionValue),
    Positional(PositionalValue),
    Separator(SeparatorValue),
}

impl Value {
    /// The argv fragments that reproduce this value.
    pub fn strings(&self) -> Vec<String> {
        match self {
            Value::ProgramName(v) => vec![v.name.clone()],
            Value::Option(v) => v.strings(),
            Value::Positional(v) => vec![v.value.clone()],
            Value::Separator(v) => vec![v.token.literal.clone()],
        }
    }

    /// Original argv position, used only to order values.
    pub fn source_index(&self) -> usize {
        match self {
            Value::ProgramName(_) => 0,
            Value::Option(v) => v.token.index,
            Value::Positional(v) => v.token.index(),
            Value::Separator(v) => v.token.index,
        }
    }

    pub fn as_option(&self) -> Option<&OptionValue> {
        match self {
            Value::Option(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_option(&self) -> bool {
        matches!(self, Value::Option(_))
    }
}

/// Flatten a parse result back into an argument vector.
pub fn to_argv(values: &[Value]) -> Vec<String> {
    values.iter().flat_map(Value::strings).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::PositionalToken;

    fn option(spec: OptionSpec, value: &str) -> Value {
        Value::Option(OptionValue {
            token: OptionToken {
                index: 1,
                prefix: spec.prefix.clone(),
                name: spec.name.clone(),
            },
            spec,
            value: value.to_string(),
        })
    }

    #[test]
    fn flag_serializes_alone() {
        let v = option(OptionSpec::standalone("--", "verbose"), "");
        assert_eq!(v.strings(), vec!["--verbose"]);
    }

    #[test]
    fn required_serializes_as_two_words() {
        let v = option(OptionSpec::groupable("-", 'f').required(), "out.txt");
        assert_eq!(v.strings(), vec!["-f", "out.txt"]);
    }

    #[test]
    fn optional_standalone_uses_equals() {
        let v = option(OptionSpec::standalone("--", "color").optional("auto"), "auto");
        assert_eq!(v.strings(), vec!["--color=auto"]);
    }

    #[test]
    fn optional_groupable_is_attached() {
        let v = option(OptionSpec::groupable("-", 'C').optional(""), "3");
        assert_eq!(v.strings(), vec!["-C3"]);
    }

    #[test]
    fn early_ignores_value() {
        let v = option(OptionSpec::early("--", "help").required(), "");
        assert_eq!(v.strings(), vec!["--help"]);
    }

    #[test]
    fn positional_and_separator() {
        let pos = Value::Positional(PositionalValue {
            token: Token::Positional(PositionalToken {
                index: 4,
                value: "a".into(),
            }),
            value: "a".into(),
        });
        let sep = Value::Separator(SeparatorValue {
            token: SeparatorToken {
                index: 3,
                literal: "--".into(),
            },
        });
        assert_eq!(pos.source_index(), 4);
        assert_eq!(sep.source_index(), 3);
        assert_eq!(to_argv(&[sep, pos]), vec!["--", "a"]);
    }
}

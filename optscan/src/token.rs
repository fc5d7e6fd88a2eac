//! Classified pieces of an argument vector.
//!
//! Every token remembers the argv position it came from. The program name is
//! kept apart from the [`Token`] stream, so code that walks the stream never
//! has to deal with it.

/// `argv[0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramNameToken {
    pub name: String,
}

/// An argument that starts with a configured prefix.
///
/// `name` is everything after the prefix and may still carry an inline
/// value, as in `file=out.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionToken {
    pub index: usize,
    pub prefix: String,
    pub name: String,
}

impl OptionToken {
    /// The argument exactly as it appeared on the command line.
    pub fn literal(&self) -> String {
        format!("{}{}", self.prefix, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalToken {
    pub index: usize,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorToken {
    pub index: usize,
    pub literal: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Option(OptionToken),
    Positional(PositionalToken),
    Separator(SeparatorToken),
}

impl Token {
    pub fn index(&self) -> usize {
        match self {
            Token::Option(t) => t.index,
            Token::Positional(t) => t.index,
            Token::Separator(t) => t.index,
        }
    }

    pub fn literal(&self) -> String {
        match self {
            Token::Option(t) => t.literal(),
            Token::Positional(t) => t.value.clone(),
            Token::Separator(t) => t.literal.clone(),
        }
    }
}

/// Output of the scanner: the program name plus the remaining tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scanned {
    pub program: ProgramNameToken,
    pub tokens: Vec<Token>,
}

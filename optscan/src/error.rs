/// Broad class of an [`Error`], useful for picking an exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The option specifications themselves are invalid.
    Config,
    /// The argument vector is malformed.
    Tokenize,
    /// The argument vector does not match the option specifications.
    Resolution,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("groupable option name must be a single character: {prefix}{name}")]
    GroupableNameTooLong { prefix: String, name: String },

    #[error("duplicate option name: {name}")]
    DuplicateOption { name: String },

    #[error("empty option name for prefix {prefix:?}")]
    EmptyOptionName { prefix: String },

    #[error("empty prefix for option {name:?}")]
    EmptyPrefix { name: String },

    #[error("prefix {prefix:?} is used by both standalone and groupable options")]
    AmbiguousPrefix { prefix: String },

    #[error("missing program name")]
    MissingProgramName,

    #[error("unknown option: {prefix}{name}")]
    UnknownOption {
        prefix: String,
        name: String,
        index: usize,
    },

    #[error("option requires an argument: {prefix}{name}")]
    OptionRequiresArgument {
        prefix: String,
        name: String,
        index: usize,
    },

    #[error("option does not take an argument: {prefix}{name}")]
    OptionRequiresNoArgument {
        prefix: String,
        name: String,
        index: usize,
    },

    #[error("too few positional arguments: expected at least {min}, have {have}")]
    TooFewPositionalArguments { min: usize, have: usize },

    #[error("too many positional arguments: expected at most {max}, have {have}")]
    TooManyPositionalArguments { max: usize, have: usize },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::GroupableNameTooLong { .. }
            | Error::DuplicateOption { .. }
            | Error::EmptyOptionName { .. }
            | Error::EmptyPrefix { .. }
            | Error::AmbiguousPrefix { .. } => ErrorKind::Config,
            Error::MissingProgramName => ErrorKind::Tokenize,
            Error::UnknownOption { .. }
            | Error::OptionRequiresArgument { .. }
            | Error::OptionRequiresNoArgument { .. }
            | Error::TooFewPositionalArguments { .. }
            | Error::TooManyPositionalArguments { .. } => ErrorKind::Resolution,
        }
    }

    /// Argv position of the offending token, for errors tied to one.
    pub fn index(&self) -> Option<usize> {
        match self {
            Error::UnknownOption { index, .. }
            | Error::OptionRequiresArgument { index, .. }
            | Error::OptionRequiresNoArgument { index, .. } => Some(*index),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

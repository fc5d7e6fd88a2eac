#[derive(Debug, thiserror::Error)]
pub enum GetoptError {
    /// getopt's own command line is wrong.
    #[error("{0}")]
    Usage(#[from] optscan::Error),

    #[error("missing optstring argument")]
    MissingOptstring,

    /// The option string or long option list compiles to an invalid set.
    #[error("invalid option definition: {0}")]
    Definition(optscan::Error),

    /// The parameters being checked do not match the definition.
    #[error("{0}")]
    Payload(optscan::Error),
}

impl GetoptError {
    /// Exit status, following util-linux getopt(1).
    pub fn exit_code(&self) -> i32 {
        match self {
            GetoptError::Payload(_) => 1,
            GetoptError::Usage(_) | GetoptError::MissingOptstring => 2,
            GetoptError::Definition(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, GetoptError>;

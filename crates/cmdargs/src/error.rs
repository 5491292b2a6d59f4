#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    // no token after the program name
    MissingCommand,
    // the command token did not name a registered command
    UnknownCommand(String),
    // the same argument was supplied more than once
    DuplicateArgument(String),
    // a required argument was never supplied
    MissingArgument(String),
    // the argument was the last token, so it has no value
    MissingValue(String),
}

impl Error {
    /// The offending token, if this error has one
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::MissingCommand => None,
            Self::UnknownCommand(token)
            | Self::DuplicateArgument(token)
            | Self::MissingArgument(token)
            | Self::MissingValue(token) => Some(token.as_str()),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCommand => f.write_str("Missing a command"),
            Self::UnknownCommand(token) => write!(f, "Unknown command: {}", token),
            Self::DuplicateArgument(token) => write!(f, "Duplicate argument: {}", token),
            Self::MissingArgument(token) => write!(f, "Missing argument: {}", token),
            Self::MissingValue(token) => write!(f, "Missing value for argument: {}", token),
        }
    }
}

impl std::error::Error for Error {}

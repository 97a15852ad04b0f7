use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToyError {
    #[error("program does not end with ';'")]
    MissingTerminator,

    #[error("'{0}' is not of the form identifier = expression")]
    MalformedStatement(String),

    #[error("'{0}' is not a valid identifier")]
    InvalidIdentifier(String),

    #[error("invalid character, '{0}', encountered")]
    InvalidCharacter(char),

    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),

    #[error("identifier, '{0}', is not defined")]
    Undefined(String),

    #[error("did not expect '{0}'")]
    DidNotExpect(String),

    #[error("could not find a match for '{0}'")]
    UnmatchedParen(char),

    #[error("expression ended abruptly")]
    AbruptEnd,

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, ToyError>;

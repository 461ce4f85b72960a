use thiserror::Error;

/// Errors produced while handling a calculator request.
///
/// The first four variants are the client-visible taxonomy; everything else
/// is the 500 class, whose detail is logged but never sent to the caller.
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid input: num1 and num2 must be valid numbers")]
    InvalidInput,

    #[error("Operation not found: {0}")]
    OperationNotFound(String),

    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Cannot take the square root of a negative number")]
    NegativeRadicand,

    #[error("Unexpected error: {0}")]
    Unexpected(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Message sent to the caller for every 500-class error.
const UNEXPECTED_MSG: &str = "An unexpected error occurred.";

impl CalcError {
    /// HTTP status the error translates to at the request boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            CalcError::InvalidInput => 400,
            CalcError::OperationNotFound(_) => 404,
            CalcError::DivisionByZero => 400,
            CalcError::NegativeRadicand => 400,
            CalcError::Unexpected(_) | CalcError::Transport(_) | CalcError::Io(_) => 500,
        }
    }

    /// Client-facing message. Client-error variants carry their own text;
    /// the 500 class is sanitized to a generic message.
    pub fn client_message(&self) -> String {
        match self {
            CalcError::InvalidInput
            | CalcError::OperationNotFound(_)
            | CalcError::DivisionByZero
            | CalcError::NegativeRadicand => self.to_string(),
            CalcError::Unexpected(_) | CalcError::Transport(_) | CalcError::Io(_) => {
                UNEXPECTED_MSG.to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum ErrorKind {
    #[error("{}", .0.join("\n"))]
    ParseError(Vec<String>),
    #[error("Error: Attempted to divide by zero at position {position}")]
    DivideByZero { position: usize },
    #[error("Error: Integer overflow at position {position}")]
    Overflow { position: usize },
    #[error("Error: Number at position {position} has no value")]
    MissingValue { position: usize },
}

pub type PResult<T> = Result<T, ErrorKind>;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Required field '{0}' is empty")]
    MissingField(&'static str),

    #[error("Unterminated quote in values: {0}")]
    UnterminatedQuote(String),

    #[error("Empty entry in comma separated values: {0}")]
    EmptyValue(String),
}

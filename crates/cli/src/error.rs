use block_graph::GraphError;
use sql_codegen::error::FormError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read or write a file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid block graph: {0}")]
    Graph(#[from] GraphError),

    #[error("Form is incomplete: {0}")]
    Form(#[from] FormError),

    #[error("Failed to deserialize the form file as JSON: {0}")]
    FormDeserialize(#[from] serde_json::Error),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

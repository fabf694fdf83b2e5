use crate::kind::{BlockKind, Family, SocketShape};
use thiserror::Error;

/// Reasons a declarative description cannot become a [`BlockGraph`].
///
/// `at` is a path such as `stacks[0][1].COLUMNS[2]` pointing to the offending block.
///
/// [`BlockGraph`]: crate::graph::BlockGraph
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("{kind} block at {at} has no field '{field}'")]
    UnknownField {
        at: String,
        kind: BlockKind,
        field: String,
    },

    #[error("{kind} block at {at}: '{value}' is not a valid value for field '{field}'")]
    InvalidFieldValue {
        at: String,
        kind: BlockKind,
        field: String,
        value: String,
    },

    #[error("{kind} block at {at} has no socket '{socket}'")]
    UnknownSocket {
        at: String,
        kind: BlockKind,
        socket: String,
    },

    #[error("socket '{socket}' on {kind} block at {at} is a {expected:?} socket")]
    ShapeMismatch {
        at: String,
        kind: BlockKind,
        socket: String,
        expected: SocketShape,
    },

    #[error("socket '{socket}' on {kind} block at {at} does not accept {found} blocks")]
    IncompatibleBlock {
        at: String,
        kind: BlockKind,
        socket: String,
        found: BlockKind,
    },

    #[error("{found} block at {at} cannot follow a {expected:?} block")]
    IncompatibleChain {
        at: String,
        expected: Family,
        found: BlockKind,
    },

    #[error("{found} block at {at} cannot come after a {after} block")]
    MisplacedClause {
        at: String,
        found: BlockKind,
        after: BlockKind,
    },

    #[error("{kind} block at {at} is an expression and cannot be chained")]
    UnchainableBlock { at: String, kind: BlockKind },

    #[error("Failed to deserialize block graph description: {0}")]
    Deserialize(String),
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        GraphError::Deserialize(err.to_string())
    }
}

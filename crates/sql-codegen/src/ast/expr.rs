use crate::literal::Literal;
use block_graph::fields::{CompareOp, LogicOp, SortDirection};
use serde::Serialize;

/// Boolean expression plugged into a `WHERE`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Condition {
    /// Stands in for an empty condition socket.
    True,
    Compare {
        column: String,
        op: CompareOp,
        value: Literal,
    },
    Compound {
        left: Box<Condition>,
        op: LogicOp,
        right: Box<Condition>,
    },
}

impl Condition {
    pub fn compare(column: &str, op: CompareOp, value: Literal) -> Self {
        Condition::Compare {
            column: column.to_string(),
            op,
            value,
        }
    }

    pub fn compound(left: Condition, op: LogicOp, right: Condition) -> Self {
        Condition::Compound {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Number of nested compound levels, 0 for a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Condition::True | Condition::Compare { .. } => 0,
            Condition::Compound { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// `column = value`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    pub column: String,
    pub value: Literal,
}

impl Assignment {
    pub fn new(column: &str, value: Literal) -> Self {
        Self {
            column: column.to_string(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Clause {
    Where(Condition),
    OrderBy {
        column: String,
        direction: SortDirection,
    },
}

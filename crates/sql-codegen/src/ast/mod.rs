//! Typed SQL produced by lowering a block graph or a filled-in form.

pub mod expr;
pub mod stmt;

use serde::Serialize;

pub use expr::{Assignment, Clause, Condition};
pub use stmt::{
    ColumnDef, CreateDatabase, CreateTable, Delete, DropDatabase, DropTable, Insert, Select,
    Statement, Update,
};

/// Statements in the order they appear in the workspace.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Script {
    pub statements: Vec<Statement>,
}

/// Anything a single block lowers to. Only statements stand on their own; the
/// other variants are the pieces statement sockets are assembled from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    Statement(Statement),
    Column(ColumnDef),
    Assignment(Assignment),
    Clause(Clause),
    Condition(Condition),
}

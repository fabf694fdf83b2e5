use crate::ast::expr::{Assignment, Clause, Condition};
use crate::literal::Literal;
use block_graph::fields::{ColumnProperty, ColumnType};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    CreateTable(CreateTable),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
    Select(Select),
    CreateDatabase(CreateDatabase),
    DropTable(DropTable),
    DropDatabase(DropDatabase),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTable {
    pub table: String,
    pub columns: Vec<ColumnDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: ColumnType,
    pub property: ColumnProperty,
}

/// `INSERT INTO table (columns) VALUES (values)`. With no columns the
/// column list is left out entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insert {
    pub table: String,
    pub columns: Vec<String>,
    pub values: Vec<Literal>,
}

impl Insert {
    pub fn from_assignments(table: &str, pairs: Vec<Assignment>) -> Self {
        let (columns, values) = pairs.into_iter().map(|a| (a.column, a.value)).unzip();
        Self {
            table: table.to_string(),
            columns,
            values,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Update {
    pub table: String,
    pub set: Vec<Assignment>,
    /// One entry per attached `Where` block.
    pub filters: Vec<Condition>,
}

/// `DELETE FROM table [WHERE a = 1 AND b = 2]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Delete {
    pub table: String,
    pub filter: Vec<Assignment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Select {
    /// Free text, `*` by default.
    pub columns: String,
    pub table: String,
    pub clauses: Vec<Clause>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateDatabase {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropTable {
    pub table: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropDatabase {
    pub name: String,
}

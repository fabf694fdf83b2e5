//! "Fill in the blanks" builder: one form per action, one statement per form.
//!
//! Unlike the block editor, which happily compiles half-built programs, a
//! form refuses to generate SQL while a required blank is still empty.

use crate::{
    ast::{
        Assignment, ColumnDef, CreateDatabase, CreateTable, Delete, DropDatabase, DropTable,
        Insert, Statement,
    },
    clause::assemble_text,
    error::FormError,
    literal::Literal,
    renderer::to_sql,
};
use block_graph::fields::{ColumnProperty, ColumnType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormAction {
    CreateTable {
        table: String,
        #[serde(default)]
        columns: Vec<FormColumn>,
    },
    CreateDatabase {
        name: String,
    },
    /// `values` is what the user typed, e.g. `'John', 25`.
    InsertValues {
        table: String,
        values: String,
    },
    DeleteTable {
        table: String,
    },
    DeleteDatabase {
        name: String,
    },
    /// `conditions` holds one `column = value` per line.
    DeleteValues {
        table: String,
        conditions: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormColumn {
    pub name: String,
    #[serde(default, rename = "type")]
    pub data_type: ColumnType,
    #[serde(default)]
    pub property: ColumnProperty,
}

impl FormAction {
    /// Identifier used by the action sidebar.
    pub fn id(&self) -> &'static str {
        match self {
            FormAction::CreateTable { .. } => "CREATE_TABLE",
            FormAction::CreateDatabase { .. } => "CREATE_DATABASE",
            FormAction::InsertValues { .. } => "INSERT_VALUES",
            FormAction::DeleteTable { .. } => "DELETE_TABLE",
            FormAction::DeleteDatabase { .. } => "DELETE_DATABASE",
            FormAction::DeleteValues { .. } => "DELETE_VALUES",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormAction::CreateTable { .. } => "Create Table",
            FormAction::CreateDatabase { .. } => "Create Database",
            FormAction::InsertValues { .. } => "Insert Values",
            FormAction::DeleteTable { .. } => "Delete Table",
            FormAction::DeleteDatabase { .. } => "Delete Database",
            FormAction::DeleteValues { .. } => "Delete Values",
        }
    }

    pub fn to_statement(&self) -> Result<Statement, FormError> {
        let stmt = match self {
            FormAction::CreateTable { table, columns } => {
                let table = required(table, "table")?;
                if columns.is_empty() {
                    return Err(FormError::MissingField("columns"));
                }
                let columns = columns
                    .iter()
                    .map(|c| {
                        Ok(ColumnDef {
                            name: required(&c.name, "column name")?,
                            data_type: c.data_type,
                            property: c.property,
                        })
                    })
                    .collect::<Result<Vec<_>, FormError>>()?;
                Statement::CreateTable(CreateTable { table, columns })
            }
            FormAction::CreateDatabase { name } => Statement::CreateDatabase(CreateDatabase {
                name: required(name, "name")?,
            }),
            FormAction::InsertValues { table, values } => {
                let table = required(table, "table")?;
                let values = split_values(values)?;
                if values.is_empty() {
                    return Err(FormError::MissingField("values"));
                }
                Statement::Insert(Insert {
                    table,
                    columns: Vec::new(),
                    values,
                })
            }
            FormAction::DeleteTable { table } => Statement::DropTable(DropTable {
                table: required(table, "table")?,
            }),
            FormAction::DeleteDatabase { name } => Statement::DropDatabase(DropDatabase {
                name: required(name, "name")?,
            }),
            FormAction::DeleteValues { table, conditions } => {
                let table = required(table, "table")?;
                let filter: Vec<Assignment> = assemble_text(conditions)
                    .into_iter()
                    .map(|(column, value)| Assignment {
                        column,
                        value: typed_value(&value),
                    })
                    .collect();
                if filter.is_empty() {
                    return Err(FormError::MissingField("conditions"));
                }
                Statement::Delete(Delete { table, filter })
            }
        };

        Ok(stmt)
    }

    pub fn generate(&self) -> Result<String, FormError> {
        Ok(to_sql(&self.to_statement()?))
    }
}

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(value.to_string())
    }
}

/// Values the user already quoted are kept as typed.
fn typed_value(raw: &str) -> Literal {
    let raw = raw.trim();
    if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
        Literal::verbatim(raw)
    } else {
        Literal::from_raw(raw)
    }
}

/// Splits on commas outside single quotes.
fn split_values(input: &str) -> Result<Vec<Literal>, FormError> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in input.chars() {
        match ch {
            '\'' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            ',' if !in_quotes => {
                values.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }

    if in_quotes {
        return Err(FormError::UnterminatedQuote(input.to_string()));
    }
    values.push(current);

    if values.iter().all(|v| v.trim().is_empty()) {
        return Ok(Vec::new());
    }
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(FormError::EmptyValue(input.to_string()));
    }

    Ok(values.iter().map(|v| typed_value(v)).collect())
}

//! Enumerated field values offered by the editor's dropdowns.
//!
//! Every enumeration round-trips through its SQL spelling: `Display` writes
//! exactly the text that ends up in generated SQL and `FromStr` accepts only
//! that text.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Generates `as_str`, `ALL`, `Display` and `FromStr` for a dropdown enum.
macro_rules! dropdown {
    ($name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(other.to_string()),
                }
            }
        }
    };
}

/// Column types selectable on a `Column` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ColumnType {
    #[default]
    Integer,
    Varchar,
    Text,
    Boolean,
    Timestamp,
    Decimal,
}

dropdown!(ColumnType {
    Integer => "INTEGER",
    Varchar => "VARCHAR(255)",
    Text => "TEXT",
    Boolean => "BOOLEAN",
    Timestamp => "TIMESTAMP",
    Decimal => "DECIMAL(10,2)",
});

/// Optional column constraint. `None` renders as nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ColumnProperty {
    #[default]
    None,
    PrimaryKey,
    NotNull,
    Unique,
}

dropdown!(ColumnProperty {
    None => "",
    PrimaryKey => "PRIMARY KEY",
    NotNull => "NOT NULL",
    Unique => "UNIQUE",
});

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CompareOp {
    #[default]
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Like,
}

dropdown!(CompareOp {
    Eq => "=",
    NotEq => "!=",
    Lt => "<",
    Gt => ">",
    LtEq => "<=",
    GtEq => ">=",
    Like => "LIKE",
});

/// Logical connectives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LogicOp {
    #[default]
    And,
    Or,
}

dropdown!(LogicOp {
    And => "AND",
    Or => "OR",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

dropdown!(SortDirection {
    Asc => "ASC",
    Desc => "DESC",
});

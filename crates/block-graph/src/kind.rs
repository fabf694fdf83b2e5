use serde::{Deserialize, Serialize};
use std::fmt;

/// Every block the editor's toolbox can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    CreateTable,
    Column,
    Insert,
    Update,
    Delete,
    Select,
    Where,
    OrderBy,
    ConditionCompare,
    ConditionCompound,
    ColumnValue,
}

/// The connection family a block plugs into. Two blocks can share a chain
/// only when they belong to the same family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    /// Root statements that stack into a script.
    Statement,
    /// Column definitions inside `CREATE TABLE`.
    Column,
    /// `column = value` pairs.
    ColumnValue,
    /// Trailing clauses (`WHERE`, `ORDER BY`).
    Clause,
    /// Inline boolean expressions; these have an output, not a next-link.
    Condition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocketShape {
    /// Accepts an ordered chain of sibling blocks.
    Statement,
    /// Accepts at most one expression block.
    Value,
}

/// Which kinds a socket accepts. This is a closed set so that every socket
/// of every kind is checked against a variant, never a string tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocketCheck {
    Columns,
    ColumnValues,
    WhereOnly,
    Clauses,
    Condition,
}

impl SocketCheck {
    pub fn accepts(&self, kind: BlockKind) -> bool {
        match self {
            SocketCheck::Columns => kind == BlockKind::Column,
            SocketCheck::ColumnValues => kind == BlockKind::ColumnValue,
            SocketCheck::WhereOnly => kind == BlockKind::Where,
            SocketCheck::Clauses => matches!(kind, BlockKind::Where | BlockKind::OrderBy),
            SocketCheck::Condition => matches!(
                kind,
                BlockKind::ConditionCompare | BlockKind::ConditionCompound
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocketDef {
    pub name: &'static str,
    pub shape: SocketShape,
    pub check: SocketCheck,
}

const fn statement(name: &'static str, check: SocketCheck) -> SocketDef {
    SocketDef {
        name,
        shape: SocketShape::Statement,
        check,
    }
}

const fn value(name: &'static str, check: SocketCheck) -> SocketDef {
    SocketDef {
        name,
        shape: SocketShape::Value,
        check,
    }
}

/// Editable field and the value a freshly dropped block starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub default: &'static str,
}

const fn field(name: &'static str, default: &'static str) -> FieldDef {
    FieldDef { name, default }
}

// Field names
pub const TABLE_NAME: &str = "TABLE_NAME";
pub const TABLE: &str = "TABLE";
pub const COL_NAME: &str = "COL_NAME";
pub const COL_TYPE: &str = "COL_TYPE";
pub const COL_PROP: &str = "COL_PROP";
pub const COLUMNS: &str = "COLUMNS";
pub const COLUMN: &str = "COLUMN";
pub const VALUE: &str = "VALUE";
pub const OP: &str = "OP";
pub const DIRECTION: &str = "DIRECTION";

// Socket names
pub const VALUES: &str = "VALUES";
pub const CONDITIONS: &str = "CONDITIONS";
pub const SET: &str = "SET";
pub const WHERE: &str = "WHERE";
pub const CLAUSES: &str = "CLAUSES";
pub const CONDITION: &str = "CONDITION";
pub const LEFT: &str = "LEFT";
pub const RIGHT: &str = "RIGHT";

const CREATE_TABLE_FIELDS: &[FieldDef] = &[field(TABLE_NAME, "table_name")];
const COLUMN_FIELDS: &[FieldDef] = &[
    field(COL_NAME, "col_name"),
    field(COL_TYPE, "INTEGER"),
    field(COL_PROP, ""),
];
const TABLE_FIELDS: &[FieldDef] = &[field(TABLE, "table")];
const SELECT_FIELDS: &[FieldDef] = &[field(COLUMNS, "*"), field(TABLE, "table")];
const ORDER_BY_FIELDS: &[FieldDef] = &[field(COLUMN, "column"), field(DIRECTION, "ASC")];
const COMPARE_FIELDS: &[FieldDef] = &[
    field(COLUMN, "column"),
    field(OP, "="),
    field(VALUE, "value"),
];
const COMPOUND_FIELDS: &[FieldDef] = &[field(OP, "AND")];
const COLUMN_VALUE_FIELDS: &[FieldDef] = &[field(COLUMN, "column"), field(VALUE, "value")];

const CREATE_TABLE_SOCKETS: &[SocketDef] = &[statement(COLUMNS, SocketCheck::Columns)];
const INSERT_SOCKETS: &[SocketDef] = &[statement(VALUES, SocketCheck::ColumnValues)];
const DELETE_SOCKETS: &[SocketDef] = &[statement(CONDITIONS, SocketCheck::ColumnValues)];
const UPDATE_SOCKETS: &[SocketDef] = &[
    statement(SET, SocketCheck::ColumnValues),
    statement(WHERE, SocketCheck::WhereOnly),
];
const SELECT_SOCKETS: &[SocketDef] = &[statement(CLAUSES, SocketCheck::Clauses)];
const WHERE_SOCKETS: &[SocketDef] = &[value(CONDITION, SocketCheck::Condition)];
const COMPOUND_SOCKETS: &[SocketDef] = &[
    value(LEFT, SocketCheck::Condition),
    value(RIGHT, SocketCheck::Condition),
];

impl BlockKind {
    pub const ALL: &'static [BlockKind] = &[
        BlockKind::CreateTable,
        BlockKind::Column,
        BlockKind::Insert,
        BlockKind::Update,
        BlockKind::Delete,
        BlockKind::Select,
        BlockKind::Where,
        BlockKind::OrderBy,
        BlockKind::ConditionCompare,
        BlockKind::ConditionCompound,
        BlockKind::ColumnValue,
    ];

    pub fn family(&self) -> Family {
        match self {
            BlockKind::CreateTable
            | BlockKind::Insert
            | BlockKind::Update
            | BlockKind::Delete
            | BlockKind::Select => Family::Statement,
            BlockKind::Column => Family::Column,
            BlockKind::ColumnValue => Family::ColumnValue,
            BlockKind::Where | BlockKind::OrderBy => Family::Clause,
            BlockKind::ConditionCompare | BlockKind::ConditionCompound => Family::Condition,
        }
    }

    pub fn is_statement(&self) -> bool {
        self.family() == Family::Statement
    }

    /// Condition blocks plug into value sockets and have no next-link.
    pub fn is_expression(&self) -> bool {
        self.family() == Family::Condition
    }

    /// Where a clause sits inside its statement: `WHERE` comes before
    /// `ORDER BY` and each appears at most once.
    pub fn clause_rank(&self) -> Option<u8> {
        match self {
            BlockKind::Where => Some(0),
            BlockKind::OrderBy => Some(1),
            _ => None,
        }
    }

    pub fn fields(&self) -> &'static [FieldDef] {
        match self {
            BlockKind::CreateTable => CREATE_TABLE_FIELDS,
            BlockKind::Column => COLUMN_FIELDS,
            BlockKind::Insert | BlockKind::Update | BlockKind::Delete => TABLE_FIELDS,
            BlockKind::Select => SELECT_FIELDS,
            BlockKind::Where => &[],
            BlockKind::OrderBy => ORDER_BY_FIELDS,
            BlockKind::ConditionCompare => COMPARE_FIELDS,
            BlockKind::ConditionCompound => COMPOUND_FIELDS,
            BlockKind::ColumnValue => COLUMN_VALUE_FIELDS,
        }
    }

    pub fn sockets(&self) -> &'static [SocketDef] {
        match self {
            BlockKind::CreateTable => CREATE_TABLE_SOCKETS,
            BlockKind::Insert => INSERT_SOCKETS,
            BlockKind::Delete => DELETE_SOCKETS,
            BlockKind::Update => UPDATE_SOCKETS,
            BlockKind::Select => SELECT_SOCKETS,
            BlockKind::Where => WHERE_SOCKETS,
            BlockKind::ConditionCompound => COMPOUND_SOCKETS,
            BlockKind::Column
            | BlockKind::OrderBy
            | BlockKind::ConditionCompare
            | BlockKind::ColumnValue => &[],
        }
    }

    pub fn field_def(&self, name: &str) -> Option<&'static FieldDef> {
        self.fields().iter().find(|f| f.name == name)
    }

    pub fn socket(&self, name: &str) -> Option<&'static SocketDef> {
        self.sockets().iter().find(|s| s.name == name)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

//! Lowering from blocks to the SQL AST.
//!
//! Every block kind is handled by exactly one arm of [`lower_block`]; a new
//! kind does not compile until it has one. Empty sockets lower to documented
//! defaults instead of failing: a missing condition becomes `true` and an
//! empty chain contributes nothing.

use crate::{
    ast::{
        Assignment, Clause, ColumnDef, Condition, CreateTable, Delete, Insert, Node, Script,
        Select, Statement, Update,
    },
    clause::is_column_name,
    literal::Literal,
};
use block_graph::{
    Block, BlockGraph, BlockKind, Chain,
    kind::{
        CLAUSES, COL_NAME, COLUMN, COLUMNS, CONDITION, CONDITIONS, LEFT, RIGHT, SET, TABLE,
        TABLE_NAME, VALUE, VALUES, WHERE,
    },
};
use tracing::debug;

/// Lowers every statement stack of the workspace, in order.
///
/// Stacks headed by something other than a statement (a loose column or
/// condition left lying on the canvas) produce nothing.
pub fn lower_graph(graph: &BlockGraph) -> Script {
    let mut statements = Vec::new();

    for (i, stack) in graph.stacks().iter().enumerate() {
        let Some(head) = stack.head() else {
            continue;
        };
        if !head.kind().is_statement() {
            debug!("Skipping detached {} stack at index {}", head.kind(), i);
            continue;
        }
        statements.extend(stack.iter().filter_map(lower_statement));
    }

    Script { statements }
}

/// Lowers a single block, whatever its kind.
pub fn lower_block(block: &Block) -> Node {
    match block.kind() {
        BlockKind::CreateTable => Node::Statement(Statement::CreateTable(CreateTable {
            table: block.field(TABLE_NAME).to_string(),
            columns: block.chain(COLUMNS).iter().map(column_def).collect(),
        })),
        BlockKind::Insert => Node::Statement(Statement::Insert(Insert::from_assignments(
            block.field(TABLE),
            assignments(block.chain(VALUES)),
        ))),
        BlockKind::Update => Node::Statement(Statement::Update(Update {
            table: block.field(TABLE).to_string(),
            set: assignments(block.chain(SET)),
            filters: block.chain(WHERE).iter().map(where_condition).collect(),
        })),
        BlockKind::Delete => Node::Statement(Statement::Delete(Delete {
            table: block.field(TABLE).to_string(),
            filter: assignments(block.chain(CONDITIONS)),
        })),
        BlockKind::Select => Node::Statement(Statement::Select(Select {
            columns: block.field(COLUMNS).to_string(),
            table: block.field(TABLE).to_string(),
            clauses: block.chain(CLAUSES).iter().filter_map(clause).collect(),
        })),
        BlockKind::Column => Node::Column(column_def(block)),
        BlockKind::ColumnValue => Node::Assignment(assignment(block)),
        BlockKind::Where => Node::Clause(Clause::Where(where_condition(block))),
        BlockKind::OrderBy => Node::Clause(Clause::OrderBy {
            column: block.field(COLUMN).to_string(),
            direction: block.direction(),
        }),
        BlockKind::ConditionCompare | BlockKind::ConditionCompound => {
            Node::Condition(condition(Some(block)))
        }
    }
}

fn lower_statement(block: &Block) -> Option<Statement> {
    match lower_block(block) {
        Node::Statement(stmt) => Some(stmt),
        _ => None,
    }
}

fn column_def(block: &Block) -> ColumnDef {
    ColumnDef {
        name: block.field(COL_NAME).to_string(),
        data_type: block.column_type(),
        property: block.column_property(),
    }
}

fn assignment(block: &Block) -> Assignment {
    Assignment::new(block.field(COLUMN), Literal::from_raw(block.field(VALUE)))
}

/// Pairs whose column is not a plain identifier are dropped, the same way
/// the clause assembler skips a line it cannot read as `column = value`.
fn assignments(chain: &Chain) -> Vec<Assignment> {
    chain
        .iter()
        .filter_map(|block| {
            let column = block.field(COLUMN).trim();
            if !is_column_name(column) {
                debug!("Dropping pair with malformed column '{}'", column);
                return None;
            }
            Some(Assignment::new(column, Literal::from_raw(block.field(VALUE))))
        })
        .collect()
}

fn where_condition(block: &Block) -> Condition {
    condition(block.value(CONDITION))
}

fn clause(block: &Block) -> Option<Clause> {
    match lower_block(block) {
        Node::Clause(clause) => Some(clause),
        _ => None,
    }
}

/// Recurses through compound conditions to any depth.
fn condition(block: Option<&Block>) -> Condition {
    let Some(block) = block else {
        return Condition::True;
    };

    match block.kind() {
        BlockKind::ConditionCompare => Condition::compare(
            block.field(COLUMN),
            block.compare_op(),
            Literal::from_raw(block.field(VALUE)),
        ),
        BlockKind::ConditionCompound => Condition::compound(
            condition(block.value(LEFT)),
            block.logic_op(),
            condition(block.value(RIGHT)),
        ),
        _ => Condition::True,
    }
}

//! Checked, immutable block graph.
//!
//! A [`BlockGraph`] is only obtainable through [`BlockGraph::build`], which
//! fills in field defaults and rejects anything the editor itself would never
//! let the user assemble: unknown fields or sockets, dropdown values outside
//! their enumeration, blocks plugged into sockets that do not accept their
//! kind, and clauses out of `WHERE`/`ORDER BY` order. Consumers can therefore
//! read a graph without re-validating it.

use crate::{
    error::GraphError,
    fields::{ColumnProperty, ColumnType, CompareOp, LogicOp, SortDirection},
    kind::{self, BlockKind, Family, SocketShape},
    spec::{BlockSpec, GraphSpec},
};
use serde::Serialize;
use std::{collections::BTreeMap, str::FromStr};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BlockGraph {
    stacks: Vec<Chain>,
}

impl BlockGraph {
    pub fn build(spec: &GraphSpec) -> Result<Self, GraphError> {
        let stacks = spec
            .stacks
            .iter()
            .enumerate()
            .map(|(i, stack)| build_stack(stack, &format!("stacks[{i}]")))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Built block graph with {} stack(s), {} block(s)",
            stacks.len(),
            spec.block_count()
        );

        Ok(Self { stacks })
    }

    pub fn from_json(source: &str) -> Result<Self, GraphError> {
        Self::build(&GraphSpec::from_json(source)?)
    }

    /// Top-level stacks in workspace order.
    pub fn stacks(&self) -> &[Chain] {
        &self.stacks
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.iter().all(Chain::is_empty)
    }
}

/// Ordered run of sibling blocks linked by next-links.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Chain {
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn head(&self) -> Option<&Block> {
        self.blocks.first()
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

static EMPTY_CHAIN: Chain = Chain { blocks: Vec::new() };

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    kind: BlockKind,
    fields: BTreeMap<String, String>,
    statements: BTreeMap<String, Chain>,
    values: BTreeMap<String, Box<Block>>,
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    /// Value of a field. Fields defined for the kind always have a value after
    /// build; names the kind does not define read as empty.
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    /// Chain attached at a statement socket. Empty when nothing is attached.
    pub fn chain(&self, socket: &str) -> &Chain {
        self.statements.get(socket).unwrap_or(&EMPTY_CHAIN)
    }

    /// Block attached at a value socket, if any.
    pub fn value(&self, socket: &str) -> Option<&Block> {
        self.values.get(socket).map(Box::as_ref)
    }

    pub fn column_type(&self) -> ColumnType {
        self.parsed(kind::COL_TYPE)
    }

    pub fn column_property(&self) -> ColumnProperty {
        self.parsed(kind::COL_PROP)
    }

    pub fn compare_op(&self) -> CompareOp {
        self.parsed(kind::OP)
    }

    pub fn logic_op(&self) -> LogicOp {
        self.parsed(kind::OP)
    }

    pub fn direction(&self) -> SortDirection {
        self.parsed(kind::DIRECTION)
    }

    // Dropdown fields are checked in `build`, so the default only stands in
    // for a field the kind does not have.
    fn parsed<T: FromStr + Default>(&self, name: &str) -> T {
        self.field(name).parse().unwrap_or_default()
    }

    fn build(spec: &BlockSpec, at: &str) -> Result<Self, GraphError> {
        let kind = spec.kind;

        for name in spec.fields.keys() {
            if kind.field_def(name).is_none() {
                return Err(GraphError::UnknownField {
                    at: at.to_string(),
                    kind,
                    field: name.clone(),
                });
            }
        }

        let mut fields = BTreeMap::new();
        for def in kind.fields() {
            let value = spec
                .fields
                .get(def.name)
                .cloned()
                .unwrap_or_else(|| def.default.to_string());
            check_dropdown(kind, def.name, &value, at)?;
            fields.insert(def.name.to_string(), value);
        }

        let mut statements = BTreeMap::new();
        for (socket, chain) in &spec.statements {
            let def = socket_def(kind, socket, SocketShape::Statement, at)?;
            let mut blocks = Vec::with_capacity(chain.len());
            let mut last_clause = None;
            for (i, child) in chain.iter().enumerate() {
                let child_at = format!("{at}.{socket}[{i}]");
                if !def.check.accepts(child.kind) {
                    return Err(GraphError::IncompatibleBlock {
                        at: child_at,
                        kind,
                        socket: socket.clone(),
                        found: child.kind,
                    });
                }
                if child.kind.clause_rank().is_some() {
                    check_clause_order(last_clause, child.kind, &child_at)?;
                    last_clause = Some(child.kind);
                }
                blocks.push(Block::build(child, &child_at)?);
            }
            statements.insert(socket.clone(), Chain { blocks });
        }

        let mut values = BTreeMap::new();
        for (socket, child) in &spec.values {
            let def = socket_def(kind, socket, SocketShape::Value, at)?;
            let child_at = format!("{at}.{socket}");
            if !def.check.accepts(child.kind) {
                return Err(GraphError::IncompatibleBlock {
                    at: child_at,
                    kind,
                    socket: socket.clone(),
                    found: child.kind,
                });
            }
            values.insert(socket.clone(), Box::new(Block::build(child, &child_at)?));
        }

        Ok(Self {
            kind,
            fields,
            statements,
            values,
        })
    }
}

fn build_stack(stack: &[BlockSpec], at: &str) -> Result<Chain, GraphError> {
    let Some(head) = stack.first() else {
        return Ok(Chain::default());
    };
    let family = head.kind.family();

    let mut blocks = Vec::with_capacity(stack.len());
    for (i, spec) in stack.iter().enumerate() {
        let block_at = format!("{at}[{i}]");
        if i > 0 {
            if family == Family::Condition {
                return Err(GraphError::UnchainableBlock {
                    at: format!("{at}[0]"),
                    kind: head.kind,
                });
            }
            if spec.kind.family() != family {
                return Err(GraphError::IncompatibleChain {
                    at: block_at,
                    expected: family,
                    found: spec.kind,
                });
            }
        }
        blocks.push(Block::build(spec, &block_at)?);
    }

    Ok(Chain { blocks })
}

fn socket_def(
    kind: BlockKind,
    socket: &str,
    shape: SocketShape,
    at: &str,
) -> Result<&'static kind::SocketDef, GraphError> {
    let def = kind.socket(socket).ok_or_else(|| GraphError::UnknownSocket {
        at: at.to_string(),
        kind,
        socket: socket.to_string(),
    })?;

    if def.shape != shape {
        return Err(GraphError::ShapeMismatch {
            at: at.to_string(),
            kind,
            socket: socket.to_string(),
            expected: def.shape,
        });
    }

    Ok(def)
}

fn check_clause_order(
    previous: Option<BlockKind>,
    kind: BlockKind,
    at: &str,
) -> Result<(), GraphError> {
    let Some(previous) = previous else {
        return Ok(());
    };

    if previous.clause_rank() >= kind.clause_rank() {
        return Err(GraphError::MisplacedClause {
            at: at.to_string(),
            found: kind,
            after: previous,
        });
    }

    Ok(())
}

fn check_dropdown(kind: BlockKind, field: &str, value: &str, at: &str) -> Result<(), GraphError> {
    let valid = match (kind, field) {
        (BlockKind::Column, kind::COL_TYPE) => value.parse::<ColumnType>().is_ok(),
        (BlockKind::Column, kind::COL_PROP) => value.parse::<ColumnProperty>().is_ok(),
        (BlockKind::ConditionCompare, kind::OP) => value.parse::<CompareOp>().is_ok(),
        (BlockKind::ConditionCompound, kind::OP) => value.parse::<LogicOp>().is_ok(),
        (BlockKind::OrderBy, kind::DIRECTION) => value.parse::<SortDirection>().is_ok(),
        _ => true,
    };

    if valid {
        Ok(())
    } else {
        Err(GraphError::InvalidFieldValue {
            at: at.to_string(),
            kind,
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

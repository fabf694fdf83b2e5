//! Declarative description of a block graph, as the editor serializes it.
//!
//! ```json
//! {
//!   "stacks": [[
//!     { "kind": "CreateTable",
//!       "fields": { "TABLE_NAME": "users" },
//!       "statements": { "COLUMNS": [
//!         { "kind": "Column", "fields": { "COL_NAME": "id", "COL_PROP": "PRIMARY KEY" } }
//!       ] } }
//!   ]]
//! }
//! ```
//!
//! A description carries no guarantees. [`BlockGraph::build`] turns it into a
//! checked graph.
//!
//! [`BlockGraph::build`]: crate::graph::BlockGraph::build

use crate::{error::GraphError, kind::BlockKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec {
    /// Top-level stacks. Each stack is a chain of blocks linked by next-links.
    #[serde(default)]
    pub stacks: Vec<Vec<BlockSpec>>,
}

impl GraphSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(source: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn stack(mut self, blocks: Vec<BlockSpec>) -> Self {
        self.stacks.push(blocks);
        self
    }

    pub fn block_count(&self) -> usize {
        self.stacks.iter().flatten().map(BlockSpec::block_count).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSpec {
    pub kind: BlockKind,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,

    /// Chains attached at statement sockets, keyed by socket name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub statements: BTreeMap<String, Vec<BlockSpec>>,

    /// Single blocks attached at value sockets, keyed by socket name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub values: BTreeMap<String, BlockSpec>,
}

impl BlockSpec {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            fields: BTreeMap::new(),
            statements: BTreeMap::new(),
            values: BTreeMap::new(),
        }
    }

    pub fn field(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_string(), value.to_string());
        self
    }

    pub fn statement(mut self, socket: &str, chain: Vec<BlockSpec>) -> Self {
        self.statements.insert(socket.to_string(), chain);
        self
    }

    pub fn value(mut self, socket: &str, block: BlockSpec) -> Self {
        self.values.insert(socket.to_string(), block);
        self
    }

    /// Number of blocks in this subtree, this one included.
    pub fn block_count(&self) -> usize {
        1 + self
            .statements
            .values()
            .flatten()
            .map(BlockSpec::block_count)
            .sum::<usize>()
            + self.values.values().map(BlockSpec::block_count).sum::<usize>()
    }
}

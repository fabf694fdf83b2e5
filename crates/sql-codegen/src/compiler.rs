//! Entry points that take a block graph all the way to SQL text.

use crate::{
    ast::Script,
    lower::{lower_block, lower_graph},
    renderer::to_sql,
};
use block_graph::{Block, BlockGraph, GraphError};

/// Compiles the whole workspace into a script.
///
/// Statements are separated by a single newline and the script has no
/// trailing newline. The graph is only read, so compiling the same graph
/// twice yields identical text.
pub fn compile(graph: &BlockGraph) -> String {
    to_sql(&lower_graph(graph))
}

/// Compiles one block on its own, ignoring any siblings.
///
/// Statements compile to their full text; other kinds compile to the
/// fragment they contribute to a parent.
pub fn compile_block(block: &Block) -> String {
    to_sql(&lower_block(block))
}

/// Lowers the workspace without rendering, for inspection.
pub fn script(graph: &BlockGraph) -> Script {
    lower_graph(graph)
}

/// Parses, checks and compiles a JSON graph description.
pub fn compile_json(source: &str) -> Result<String, GraphError> {
    let graph = BlockGraph::from_json(source)?;
    Ok(compile(&graph))
}

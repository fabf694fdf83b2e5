//! In-memory model of the visual SQL block editor's program graph.
//!
//! Blocks carry dropdown/text fields and two kinds of connection points:
//! statement sockets holding an ordered chain of siblings, and value sockets
//! holding a single expression block. See [`kind`] for the socket table.

pub mod error;
pub mod fields;
pub mod graph;
pub mod kind;
pub mod spec;

pub use error::GraphError;
pub use graph::{Block, BlockGraph, Chain};
pub use kind::BlockKind;
pub use spec::{BlockSpec, GraphSpec};

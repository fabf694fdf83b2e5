//! Compiles visual SQL block programs, and filled-in SQL forms, into SQL text.
//!
//! Block graphs go through two stages: [`lower`] maps blocks to a typed SQL
//! AST and [`renderer`] turns that AST into text. [`compiler`] wires the two
//! together; [`session`] drives it from a stream of editor change events.

pub mod ast;
pub mod clause;
pub mod compiler;
pub mod error;
pub mod form;
pub mod literal;
pub mod lower;
pub mod renderer;
pub mod session;

pub use clause::{assemble_pairs, assemble_text};
pub use compiler::{compile, compile_block, compile_json};
pub use literal::format_literal;

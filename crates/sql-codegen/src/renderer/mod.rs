//! Converts the SQL AST into text.

use crate::ast::{Node, Script, Statement};

pub mod create_table;
pub mod database;
pub mod delete;
pub mod expr;
pub mod insert;
pub mod select;
pub mod update;

/// A trait for any AST node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// Accumulates SQL text while a tree of nodes renders itself into it.
#[derive(Debug, Default)]
pub struct Renderer {
    pub sql: String,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.sql
    }

    /// Renders `items` with `sep` between consecutive entries.
    pub fn render_list<T: Render>(&mut self, items: &[T], sep: &str) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(sep);
            }
            item.render(self);
        }
    }
}

pub fn to_sql<T: Render + ?Sized>(node: &T) -> String {
    let mut renderer = Renderer::new();
    node.render(&mut renderer);
    renderer.finish()
}

impl Render for Script {
    fn render(&self, r: &mut Renderer) {
        r.render_list(&self.statements, "\n");
    }
}

impl Render for Statement {
    fn render(&self, r: &mut Renderer) {
        match self {
            Statement::CreateTable(s) => s.render(r),
            Statement::Insert(s) => s.render(r),
            Statement::Update(s) => s.render(r),
            Statement::Delete(s) => s.render(r),
            Statement::Select(s) => s.render(r),
            Statement::CreateDatabase(s) => s.render(r),
            Statement::DropTable(s) => s.render(r),
            Statement::DropDatabase(s) => s.render(r),
        }
    }
}

/// Fragments render the way the editor shows a lone block's code: one line
/// per chain member, and a bare expression for conditions.
impl Render for Node {
    fn render(&self, r: &mut Renderer) {
        match self {
            Node::Statement(stmt) => stmt.render(r),
            Node::Column(col) => {
                r.sql.push_str("  ");
                col.render(r);
                r.sql.push_str(",\n");
            }
            Node::Assignment(assignment) => {
                assignment.render(r);
                r.sql.push('\n');
            }
            Node::Clause(clause) => {
                clause.render(r);
                r.sql.push('\n');
            }
            Node::Condition(cond) => cond.render(r),
        }
    }
}

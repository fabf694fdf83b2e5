use crate::{
    ast::Insert,
    renderer::{Render, Renderer},
};

impl Render for Insert {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("INSERT INTO ");
        r.sql.push_str(&self.table);

        if !self.columns.is_empty() {
            r.sql.push_str(" (");
            r.sql.push_str(&self.columns.join(", "));
            r.sql.push(')');
        }

        r.sql.push_str(" VALUES (");
        let values: Vec<&str> = self.values.iter().map(|v| v.as_str()).collect();
        r.sql.push_str(&values.join(", "));
        r.sql.push_str(");");
    }
}

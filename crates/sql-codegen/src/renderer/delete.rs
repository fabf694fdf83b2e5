use crate::{
    ast::Delete,
    renderer::{Render, Renderer},
};

impl Render for Delete {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("DELETE FROM ");
        r.sql.push_str(&self.table);

        if !self.filter.is_empty() {
            r.sql.push_str(" WHERE ");
            r.render_list(&self.filter, " AND ");
        }

        r.sql.push(';');
    }
}

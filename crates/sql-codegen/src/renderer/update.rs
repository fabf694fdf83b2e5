use crate::{
    ast::Update,
    renderer::{Render, Renderer},
};

impl Render for Update {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("UPDATE ");
        r.sql.push_str(&self.table);
        r.sql.push_str(" SET ");
        r.render_list(&self.set, ", ");

        for filter in &self.filters {
            r.sql.push_str(" WHERE ");
            filter.render(r);
        }

        r.sql.push(';');
    }
}

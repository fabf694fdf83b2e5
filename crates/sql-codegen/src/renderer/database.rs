use crate::{
    ast::{CreateDatabase, DropDatabase, DropTable},
    renderer::{Render, Renderer},
};

impl Render for CreateDatabase {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("CREATE DATABASE ");
        r.sql.push_str(&self.name);
        r.sql.push(';');
    }
}

impl Render for DropDatabase {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("DROP DATABASE ");
        r.sql.push_str(&self.name);
        r.sql.push(';');
    }
}

impl Render for DropTable {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("DROP TABLE ");
        r.sql.push_str(&self.table);
        r.sql.push(';');
    }
}

use crate::{
    ast::{ColumnDef, CreateTable},
    renderer::{Render, Renderer},
};
use block_graph::fields::ColumnProperty;

impl Render for CreateTable {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("CREATE TABLE ");
        r.sql.push_str(&self.table);
        r.sql.push_str(" (\n");

        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(",\n");
            }
            r.sql.push_str("  ");
            col.render(r);
        }

        r.sql.push_str("\n);");
    }
}

impl Render for ColumnDef {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(&self.name);
        r.sql.push(' ');
        r.sql.push_str(self.data_type.as_str());

        if self.property != ColumnProperty::None {
            r.sql.push(' ');
            r.sql.push_str(self.property.as_str());
        }
    }
}

use crate::{
    ast::{Assignment, Condition},
    renderer::{Render, Renderer},
};

impl Render for Condition {
    fn render(&self, r: &mut Renderer) {
        match self {
            Condition::True => r.sql.push_str("true"),
            Condition::Compare { column, op, value } => {
                r.sql.push_str(column);
                r.sql.push(' ');
                r.sql.push_str(op.as_str());
                r.sql.push(' ');
                r.sql.push_str(value.as_str());
            }
            Condition::Compound { left, op, right } => {
                r.sql.push('(');
                left.render(r);
                r.sql.push(' ');
                r.sql.push_str(op.as_str());
                r.sql.push(' ');
                right.render(r);
                r.sql.push(')');
            }
        }
    }
}

impl Render for Assignment {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(&self.column);
        r.sql.push_str(" = ");
        r.sql.push_str(self.value.as_str());
    }
}

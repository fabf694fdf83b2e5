use crate::{
    ast::{Clause, Select},
    renderer::{Render, Renderer},
};

impl Render for Select {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("SELECT ");
        r.sql.push_str(&self.columns);
        r.sql.push_str(" FROM ");
        r.sql.push_str(&self.table);

        for clause in &self.clauses {
            r.sql.push(' ');
            clause.render(r);
        }

        r.sql.push(';');
    }
}

impl Render for Clause {
    fn render(&self, r: &mut Renderer) {
        match self {
            Clause::Where(cond) => {
                r.sql.push_str("WHERE ");
                cond.render(r);
            }
            Clause::OrderBy { column, direction } => {
                r.sql.push_str("ORDER BY ");
                r.sql.push_str(column);
                r.sql.push(' ');
                r.sql.push_str(direction.as_str());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{Clause, Condition, Select},
        literal::Literal,
        renderer::to_sql,
    };
    use block_graph::fields::{CompareOp, SortDirection};

    #[test]
    fn test_render_bare_select() {
        let ast = Select {
            columns: "*".to_string(),
            table: "t".to_string(),
            clauses: vec![],
        };

        assert_eq!(to_sql(&ast), "SELECT * FROM t;");
    }

    #[test]
    fn test_render_select_with_clauses() {
        let ast = Select {
            columns: "name, age".to_string(),
            table: "people".to_string(),
            clauses: vec![
                Clause::Where(Condition::compare(
                    "name",
                    CompareOp::Like,
                    Literal::from_raw("A%"),
                )),
                Clause::OrderBy {
                    column: "age".to_string(),
                    direction: SortDirection::Desc,
                },
            ],
        };

        assert_eq!(
            to_sql(&ast),
            "SELECT name, age FROM people WHERE name LIKE 'A%' ORDER BY age DESC;"
        );
    }
}

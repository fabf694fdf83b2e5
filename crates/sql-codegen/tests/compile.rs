//! End-to-end compilation of block graph descriptions.

use block_graph::{
    BlockGraph, BlockKind, BlockSpec, GraphSpec,
    kind::{
        CLAUSES, COL_NAME, COL_PROP, COL_TYPE, COLUMN, COLUMNS, CONDITION, CONDITIONS, DIRECTION,
        LEFT, OP, RIGHT, SET, TABLE, TABLE_NAME, VALUE, VALUES, WHERE,
    },
};
use serde_json::json;
use sql_codegen::{assemble_text, compile, compile_block, compile_json};

fn graph(value: serde_json::Value) -> BlockGraph {
    BlockGraph::from_json(&value.to_string()).expect("valid graph")
}

fn compare(column: &str, op: &str, value: &str) -> BlockSpec {
    BlockSpec::new(BlockKind::ConditionCompare)
        .field(COLUMN, column)
        .field(OP, op)
        .field(VALUE, value)
}

fn compound(left: BlockSpec, op: &str, right: BlockSpec) -> BlockSpec {
    BlockSpec::new(BlockKind::ConditionCompound)
        .field(OP, op)
        .value(LEFT, left)
        .value(RIGHT, right)
}

fn pair(column: &str, value: &str) -> BlockSpec {
    BlockSpec::new(BlockKind::ColumnValue)
        .field(COLUMN, column)
        .field(VALUE, value)
}

#[test]
fn test_create_table() {
    let g = graph(json!({
        "stacks": [[{
            "kind": "CreateTable",
            "fields": { "TABLE_NAME": "users" },
            "statements": { "COLUMNS": [
                { "kind": "Column", "fields": { "COL_NAME": "id", "COL_TYPE": "INTEGER", "COL_PROP": "PRIMARY KEY" } },
                { "kind": "Column", "fields": { "COL_NAME": "name", "COL_TYPE": "VARCHAR(255)", "COL_PROP": "" } }
            ] }
        }]]
    }));

    assert_eq!(
        compile(&g),
        "CREATE TABLE users (\n  id INTEGER PRIMARY KEY,\n  name VARCHAR(255)\n);"
    );
}

#[test]
fn test_insert() {
    let g = graph(json!({
        "stacks": [[{
            "kind": "Insert",
            "fields": { "TABLE": "people" },
            "statements": { "VALUES": [
                { "kind": "ColumnValue", "fields": { "COLUMN": "name", "VALUE": "Alice" } },
                { "kind": "ColumnValue", "fields": { "COLUMN": "age", "VALUE": "30" } }
            ] }
        }]]
    }));

    assert_eq!(compile(&g), "INSERT INTO people (name, age) VALUES ('Alice', 30);");
}

#[test]
fn test_empty_chains_degrade() {
    let spec = GraphSpec::new().stack(vec![
        BlockSpec::new(BlockKind::Delete).field(TABLE, "people"),
        BlockSpec::new(BlockKind::Insert).field(TABLE, "people"),
    ]);
    let g = BlockGraph::build(&spec).unwrap();

    assert_eq!(
        compile(&g),
        "DELETE FROM people;\nINSERT INTO people VALUES ();"
    );
}

#[test]
fn test_delete_joins_pairs_with_and() {
    let spec = GraphSpec::new().stack(vec![
        BlockSpec::new(BlockKind::Delete)
            .field(TABLE, "people")
            .statement(CONDITIONS, vec![pair("name", "Bob"), pair("age", "41")]),
    ]);

    assert_eq!(
        compile(&BlockGraph::build(&spec).unwrap()),
        "DELETE FROM people WHERE name = 'Bob' AND age = 41;"
    );
}

#[test]
fn test_update_with_where() {
    let spec = GraphSpec::new().stack(vec![
        BlockSpec::new(BlockKind::Update)
            .field(TABLE, "people")
            .statement(SET, vec![pair("status", "active"), pair("score", "10")])
            .statement(
                WHERE,
                vec![BlockSpec::new(BlockKind::Where).value(CONDITION, compare("id", "=", "3"))],
            ),
    ]);

    assert_eq!(
        compile(&BlockGraph::build(&spec).unwrap()),
        "UPDATE people SET status = 'active', score = 10 WHERE id = 3;"
    );
}

#[test]
fn test_select_defaults() {
    let g = graph(json!({ "stacks": [[ { "kind": "Select", "fields": { "TABLE": "t" } } ]] }));
    assert_eq!(compile(&g), "SELECT * FROM t;");
}

#[test]
fn test_select_with_where_and_order_by() {
    let spec = GraphSpec::new().stack(vec![
        BlockSpec::new(BlockKind::Select)
            .field(COLUMNS, "name, age")
            .field(TABLE, "people")
            .statement(
                CLAUSES,
                vec![
                    BlockSpec::new(BlockKind::Where).value(
                        CONDITION,
                        compound(
                            compare("age", ">", "18"),
                            "AND",
                            compare("status", "=", "active"),
                        ),
                    ),
                    BlockSpec::new(BlockKind::OrderBy)
                        .field(COLUMN, "age")
                        .field(DIRECTION, "DESC"),
                ],
            ),
    ]);

    assert_eq!(
        compile(&BlockGraph::build(&spec).unwrap()),
        "SELECT name, age FROM people WHERE (age > 18 AND status = 'active') ORDER BY age DESC;"
    );
}

#[test]
fn test_where_without_condition_is_true() {
    let spec = GraphSpec::new().stack(vec![
        BlockSpec::new(BlockKind::Select)
            .field(TABLE, "t")
            .statement(CLAUSES, vec![BlockSpec::new(BlockKind::Where)]),
    ]);

    assert_eq!(
        compile(&BlockGraph::build(&spec).unwrap()),
        "SELECT * FROM t WHERE true;"
    );
}

#[test]
fn test_compound_condition_fragment() {
    let spec = GraphSpec::new().stack(vec![compound(
        compare("age", ">", "18"),
        "AND",
        compare("status", "=", "active"),
    )]);
    let g = BlockGraph::build(&spec).unwrap();

    assert_eq!(
        compile_block(g.stacks()[0].head().unwrap()),
        "(age > 18 AND status = 'active')"
    );
}

#[test]
fn test_nested_compounds_to_any_depth() {
    for leaves in 2..=12 {
        let mut cond = compare("c0", "=", "0");
        for i in 1..leaves {
            let op = if i % 2 == 0 { "AND" } else { "OR" };
            cond = compound(cond, op, compare(&format!("c{i}"), "<", &i.to_string()));
        }

        let g = BlockGraph::build(&GraphSpec::new().stack(vec![cond])).unwrap();
        let sql = compile_block(g.stacks()[0].head().unwrap());

        assert_eq!(sql.matches('(').count(), leaves - 1, "{sql}");
        assert_eq!(sql.matches(')').count(), leaves - 1, "{sql}");

        let positions: Vec<usize> = (0..leaves)
            .map(|i| sql.find(&format!("c{i} ")).expect("leaf present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{sql}");
    }
}

#[test]
fn test_right_nested_compound() {
    let cond = compound(
        compare("a", "=", "1"),
        "OR",
        compound(compare("b", "=", "2"), "AND", compare("c", "LIKE", "x%")),
    );
    let g = BlockGraph::build(&GraphSpec::new().stack(vec![cond])).unwrap();

    assert_eq!(
        compile_block(g.stacks()[0].head().unwrap()),
        "(a = 1 OR (b = 2 AND c LIKE 'x%'))"
    );
}

#[test]
fn test_statement_chain_and_stacks_are_flattened_in_order() {
    let spec = GraphSpec::new()
        .stack(vec![
            BlockSpec::new(BlockKind::CreateTable)
                .field(TABLE_NAME, "t")
                .statement(
                    COLUMNS,
                    vec![
                        BlockSpec::new(BlockKind::Column)
                            .field(COL_NAME, "id")
                            .field(COL_TYPE, "INTEGER")
                            .field(COL_PROP, "PRIMARY KEY"),
                    ],
                ),
            BlockSpec::new(BlockKind::Insert)
                .field(TABLE, "t")
                .statement(VALUES, vec![pair("id", "1")]),
        ])
        .stack(vec![BlockSpec::new(BlockKind::Select).field(TABLE, "t")]);

    assert_eq!(
        compile(&BlockGraph::build(&spec).unwrap()),
        "CREATE TABLE t (\n  id INTEGER PRIMARY KEY\n);\nINSERT INTO t (id) VALUES (1);\nSELECT * FROM t;"
    );
}

#[test]
fn test_compilation_is_idempotent() {
    let spec = GraphSpec::new().stack(vec![
        BlockSpec::new(BlockKind::Update)
            .field(TABLE, "people")
            .statement(SET, vec![pair("name", "Zoe"), pair("age", "7")]),
    ]);
    let g = BlockGraph::build(&spec).unwrap();

    let first = compile(&g);
    let second = compile(&g);
    assert_eq!(first, second);
    assert_eq!(first, compile(&BlockGraph::build(&spec).unwrap()));
}

#[test]
fn test_pair_lines_reassemble_to_the_same_pairs() {
    let spec = GraphSpec::new().stack(vec![
        pair("name", "Alice"),
        pair("age", "30"),
        pair("note", ""),
    ]);
    let g = BlockGraph::build(&spec).unwrap();

    let text: String = g.stacks()[0].iter().map(compile_block).collect();
    assert_eq!(text, "name = 'Alice'\nage = 30\nnote = ''\n");

    let pairs = assemble_text(&text);
    assert_eq!(
        pairs,
        vec![
            ("name".to_string(), "'Alice'".to_string()),
            ("age".to_string(), "30".to_string()),
            ("note".to_string(), "''".to_string()),
        ]
    );
}

#[test]
fn test_compile_json_round_trip_through_text() {
    let source = json!({
        "stacks": [[
            { "kind": "Select", "fields": { "COLUMNS": "id", "TABLE": "orders" },
              "statements": { "CLAUSES": [
                  { "kind": "Where", "values": { "CONDITION":
                      { "kind": "ConditionCompare", "fields": { "COLUMN": "total", "OP": ">=", "VALUE": "99.95" } } } }
              ] } }
        ]]
    })
    .to_string();

    assert_eq!(
        compile_json(&source).unwrap(),
        "SELECT id FROM orders WHERE total >= 99.95;"
    );
}

#[test]
fn test_malformed_pairs_are_dropped_from_insert_and_delete() {
    let chain = || vec![pair("first name", "Ann"), pair("", "x"), pair("age", "3")];

    let fragments: String = BlockGraph::build(&GraphSpec::new().stack(chain()))
        .unwrap()
        .stacks()[0]
        .iter()
        .map(compile_block)
        .collect();
    assert_eq!(
        assemble_text(&fragments),
        vec![("age".to_string(), "3".to_string())]
    );

    let insert = BlockGraph::build(&GraphSpec::new().stack(vec![
        BlockSpec::new(BlockKind::Insert)
            .field(TABLE, "p")
            .statement(VALUES, chain()),
    ]))
    .unwrap();
    assert_eq!(compile(&insert), "INSERT INTO p (age) VALUES (3);");

    let delete = BlockGraph::build(&GraphSpec::new().stack(vec![
        BlockSpec::new(BlockKind::Delete)
            .field(TABLE, "p")
            .statement(CONDITIONS, chain()),
    ]))
    .unwrap();
    assert_eq!(compile(&delete), "DELETE FROM p WHERE age = 3;");
}

use crate::error::CliError;
use clap::{Subcommand, ValueEnum};
use sql_codegen::form::{FormAction, FormColumn};
use block_graph::fields::{ColumnProperty, ColumnType};

#[derive(Subcommand)]
pub enum Commands {
    /// Compile a block graph description into SQL
    Compile {
        #[arg(long, help = "Block graph JSON file")]
        graph: String,

        #[arg(
            long,
            help = "If specified, writes the SQL to this file instead of stdout"
        )]
        output: Option<String>,
    },
    /// Print the lowered SQL AST as JSON
    Ast {
        #[arg(long, help = "Block graph JSON file")]
        graph: String,
    },
    /// Recompile whenever the graph file changes
    Watch {
        #[arg(long, help = "Block graph JSON file")]
        graph: String,

        #[arg(long, help = "Print each revision as JSON instead of plain SQL")]
        json: bool,
    },
    /// Generate a single statement from a filled-in form
    Form {
        #[command(subcommand)]
        action: FormCommand,
    },
}

#[derive(Subcommand)]
pub enum FormCommand {
    CreateTable {
        #[arg(long)]
        table: String,

        /// Column as name[:type[:property]], e.g. id:integer:primary-key
        #[arg(long = "column", value_parser = parse_column)]
        columns: Vec<FormColumn>,
    },
    CreateDatabase {
        #[arg(long)]
        name: String,
    },
    InsertValues {
        #[arg(long)]
        table: String,

        /// Comma separated values, e.g. "'John', 25"
        #[arg(long)]
        values: String,
    },
    DeleteTable {
        #[arg(long)]
        table: String,
    },
    DeleteDatabase {
        #[arg(long)]
        name: String,
    },
    DeleteValues {
        #[arg(long)]
        table: String,

        /// One `column = value` condition per flag
        #[arg(long = "condition")]
        conditions: Vec<String>,
    },
    /// Read a form as JSON, e.g. {"action": "CREATE_DATABASE", "name": "shop"}
    FromJson {
        #[arg(long)]
        file: String,
    },
}

impl FormCommand {
    pub async fn into_action(self) -> Result<FormAction, CliError> {
        let action = match self {
            FormCommand::CreateTable { table, columns } => {
                FormAction::CreateTable { table, columns }
            }
            FormCommand::CreateDatabase { name } => FormAction::CreateDatabase { name },
            FormCommand::InsertValues { table, values } => {
                FormAction::InsertValues { table, values }
            }
            FormCommand::DeleteTable { table } => FormAction::DeleteTable { table },
            FormCommand::DeleteDatabase { name } => FormAction::DeleteDatabase { name },
            FormCommand::DeleteValues { table, conditions } => FormAction::DeleteValues {
                table,
                conditions: conditions.join("\n"),
            },
            FormCommand::FromJson { file } => {
                let source = tokio::fs::read_to_string(file).await?;
                serde_json::from_str(&source)?
            }
        };
        Ok(action)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum TypeArg {
    Integer,
    Varchar,
    Text,
    Boolean,
    Timestamp,
    Decimal,
}

impl From<TypeArg> for ColumnType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Integer => ColumnType::Integer,
            TypeArg::Varchar => ColumnType::Varchar,
            TypeArg::Text => ColumnType::Text,
            TypeArg::Boolean => ColumnType::Boolean,
            TypeArg::Timestamp => ColumnType::Timestamp,
            TypeArg::Decimal => ColumnType::Decimal,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PropertyArg {
    PrimaryKey,
    NotNull,
    Unique,
}

impl From<PropertyArg> for ColumnProperty {
    fn from(arg: PropertyArg) -> Self {
        match arg {
            PropertyArg::PrimaryKey => ColumnProperty::PrimaryKey,
            PropertyArg::NotNull => ColumnProperty::NotNull,
            PropertyArg::Unique => ColumnProperty::Unique,
        }
    }
}

fn parse_column(raw: &str) -> Result<FormColumn, String> {
    let mut parts = raw.splitn(3, ':');
    let name = parts.next().unwrap_or_default().to_string();

    let data_type = match parts.next() {
        Some(t) => TypeArg::from_str(t, true)?.into(),
        None => ColumnType::default(),
    };
    let property = match parts.next() {
        Some(p) => PropertyArg::from_str(p, true)?.into(),
        None => ColumnProperty::default(),
    };

    Ok(FormColumn {
        name,
        data_type,
        property,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_column_argument() {
        let col = parse_column("id:integer:primary-key").unwrap();
        assert_eq!(col.name, "id");
        assert_eq!(col.data_type, ColumnType::Integer);
        assert_eq!(col.property, ColumnProperty::PrimaryKey);

        let bare = parse_column("bio").unwrap();
        assert_eq!(bare.data_type, ColumnType::Integer);
        assert_eq!(bare.property, ColumnProperty::None);

        let decimal = parse_column("price:decimal").unwrap();
        assert_eq!(decimal.data_type, ColumnType::Decimal);

        assert!(parse_column("x:blob").is_err());
    }

    #[tokio::test]
    async fn test_delete_values_joins_conditions() {
        let action = FormCommand::DeleteValues {
            table: "users".to_string(),
            conditions: vec!["name = Bob".to_string(), "age = 41".to_string()],
        }
        .into_action()
        .await
        .unwrap();

        assert_eq!(
            action.generate().unwrap(),
            "DELETE FROM users WHERE name = 'Bob' AND age = 41;"
        );
    }

    #[tokio::test]
    async fn test_form_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            br#"{ "action": "DELETE_DATABASE", "name": "shop" }"#,
        )
        .unwrap();

        let action = FormCommand::FromJson {
            file: file.path().to_str().unwrap().to_string(),
        }
        .into_action()
        .await
        .unwrap();

        assert_eq!(action.generate().unwrap(), "DROP DATABASE shop;");
    }
}

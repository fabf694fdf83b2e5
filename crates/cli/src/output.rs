use crate::error::CliError;
use serde::Serialize;
use sql_codegen::session::SqlSnapshot;

pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value).map_err(CliError::JsonSerialize)
}

pub async fn write_sql(sql: &str, path: &str) -> Result<(), CliError> {
    // Files end with a newline even though the script itself does not.
    tokio::fs::write(path, format!("{sql}\n")).await?;
    Ok(())
}

pub fn print_sql(sql: &str) {
    println!("{sql}");
}

/// One line per revision in JSON mode, a header plus the script otherwise.
pub fn format_snapshot(snapshot: &SqlSnapshot, as_json: bool) -> Result<String, CliError> {
    if as_json {
        return serde_json::to_string(snapshot).map_err(CliError::JsonSerialize);
    }

    Ok(format!(
        "-- revision {} ({})\n{}",
        snapshot.revision,
        snapshot.compiled_at.to_rfc3339(),
        snapshot.sql
    ))
}

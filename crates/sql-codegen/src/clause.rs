//! Recovers `(column, value)` pairs from `column = value` lines.
//!
//! A chain of `ColumnValue` blocks renders to one such line per block. The
//! compiler itself carries the pairs structurally; this assembler reads the
//! same pairs back out of text, which the form builder uses for its free-text
//! condition box.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PAIR_LINE: Regex = Regex::new(r"^\s*(\w+)\s*=\s*(.*)$").unwrap();
    static ref COLUMN_NAME: Regex = Regex::new(r"^\w+$").unwrap();
}

/// Whether `name` can stand as the key of a `column = value` line.
pub fn is_column_name(name: &str) -> bool {
    COLUMN_NAME.is_match(name)
}

/// Pairs in source order. Lines that are not `identifier = rest` are skipped.
///
/// Whitespace around `=` separates key from value; the value is otherwise
/// the rest of the line as written, trailing spaces included.
pub fn assemble_pairs<'a, I>(lines: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let caps = PAIR_LINE.captures(line)?;
            Some((caps[1].to_string(), caps[2].to_string()))
        })
        .collect()
}

/// Same as [`assemble_pairs`] over the lines of a text block.
pub fn assemble_text(text: &str) -> Vec<(String, String)> {
    assemble_pairs(text.lines())
}

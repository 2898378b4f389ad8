//! Line-oriented scanner for MySQL `CREATE TABLE` dumps
//!
//! The scanner makes a single forward pass over the input. Each line is
//! classified by its prefix and first character; lines it cannot make sense
//! of are skipped rather than reported, since real dumps carry plenty of
//! noise (`SET` statements, versioned `/*! ... */` comments, `INSERT` data).

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::model::{Field, Index, IndexKind, Table};
use crate::util::{exported_identifier, find_ci, starts_with_keyword};

use super::column_parser::{non_empty_comment, parse_field};
use super::identifier_utils::{split_tokens, unqualified_table_name};
use super::index_parser::{parse_index, parse_primary_key};

static CREATE_TABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^CREATE\s+(?:TEMPORARY\s+)?TABLE\s+(?:IF\s+NOT\s+EXISTS\s+)?(\S+)").unwrap()
});

/// Statement-level lines that never contribute to a table definition
const SKIPPED_STATEMENTS: [&str; 5] = ["SET", "DROP", "LOCK", "UNLOCK", "INSERT"];

/// Parse DDL text holding a single `CREATE TABLE` statement.
///
/// When the text holds several statements only the first table is returned.
/// Input without any recognizable content yields an empty, unnamed table.
pub fn parse_table(ddl: &str) -> Table {
    parse_tables(ddl).into_iter().next().unwrap_or_default()
}

/// Parse every `CREATE TABLE` statement in a DDL dump, in order
pub fn parse_tables(ddl: &str) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut builder = TableBuilder::default();
    let mut in_block_comment = false;

    for (index, raw_line) in ddl.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if in_block_comment {
            if line.contains("*/") {
                in_block_comment = false;
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix("/*") {
            // One-line comments such as `/*!40101 SET NAMES utf8 */;` close themselves
            in_block_comment = !rest.contains("*/");
            continue;
        }

        if line.starts_with("--") || line.starts_with('#') || is_skipped_statement(line) {
            continue;
        }

        if let Some(caps) = CREATE_TABLE_RE.captures(line) {
            let raw_name = unqualified_table_name(&caps[1]);
            if !builder.table.raw_name.is_empty() {
                tables.push(std::mem::take(&mut builder).finish());
            }
            debug!(line = line_no, table = %raw_name, "found CREATE TABLE");
            builder.table.name = exported_identifier(&raw_name);
            builder.table.raw_name = raw_name;
            continue;
        }

        let line = line.trim_matches(',');
        let Some(first) = line.chars().next() else {
            continue;
        };
        match first {
            '`' => {
                if let Some(field) = parse_field(line) {
                    builder.add_field(field);
                    continue;
                }
            }
            ')' => {
                builder.set_table_comment(line);
                continue;
            }
            'P' | 'p' => {
                if let Some(keys) = parse_primary_key(line) {
                    builder.add_primary_keys(keys);
                    continue;
                }
            }
            'I' | 'K' | 'i' | 'k' => {
                if let Some(index) = parse_index(line, IndexKind::Normal) {
                    builder.add_index(index);
                    continue;
                }
            }
            'U' | 'u' => {
                if let Some(index) = parse_index(line, IndexKind::Unique) {
                    builder.add_index(index);
                    continue;
                }
            }
            _ => {}
        }
        debug!(line = line_no, content = line, "skipping unrecognized DDL line");
    }

    if !builder.table.is_empty() {
        tables.push(builder.finish());
    }
    tables
}

fn is_skipped_statement(line: &str) -> bool {
    SKIPPED_STATEMENTS
        .iter()
        .any(|keyword| starts_with_keyword(line, keyword))
}

/// A table under construction.
///
/// `field_lookup` maps raw column names to positions in `table.fields` so
/// key lines can attach themselves to already parsed columns. It is dropped
/// by [`TableBuilder::finish`] and never reaches the finished model.
#[derive(Default)]
struct TableBuilder {
    table: Table,
    field_lookup: HashMap<String, usize>,
}

impl TableBuilder {
    fn add_field(&mut self, field: Field) {
        if let Some(path) = field.ty.kind.import_path() {
            self.table.imports.insert(path.to_string());
        }
        self.field_lookup
            .insert(field.raw_name.clone(), self.table.fields.len());
        self.table.fields.push(field);
    }

    fn add_primary_keys(&mut self, keys: Vec<String>) {
        for key in &keys {
            if !self.field_lookup.contains_key(key) {
                debug!(table = %self.table.raw_name, key = %key, "primary key names unknown column");
            }
        }
        self.table.primary_keys.extend(keys);
    }

    fn add_index(&mut self, index: Index) {
        let position = self.table.indexes.len();
        for name in &index.fields {
            match self.field_lookup.get(name) {
                Some(&field_pos) => {
                    let refs = &mut self.table.fields[field_pos].indexes;
                    if refs.last() != Some(&position) {
                        refs.push(position);
                    }
                }
                None => {
                    debug!(index = %index.raw_name, column = %name, "index names unknown column");
                }
            }
        }
        self.table.indexes.push(index);
    }

    /// Read the table comment from a trailer like `) ENGINE=InnoDB COMMENT='users';`
    fn set_table_comment(&mut self, line: &str) {
        let Some(pos) = find_ci(line, "COMMENT") else {
            return;
        };
        let rest = line[pos + "COMMENT".len()..].trim_start();
        let Some(value) = rest.strip_prefix('=') else {
            return;
        };
        let Some(token) = split_tokens(value.trim_start()).into_iter().next() else {
            return;
        };
        if let Some(comment) = non_empty_comment(token.trim_end_matches(';')) {
            self.table.comment = Some(comment);
        }
    }

    fn finish(self) -> Table {
        self.table
    }
}

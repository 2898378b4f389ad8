//! Key and index definition parsing for MySQL DDL
//!
//! ## Supported Syntax
//!
//! ```sql
//! PRIMARY KEY (`a`[, `b` ...]) [USING BTREE]
//! KEY|INDEX `name` (`a`[, `b` ...]) [USING BTREE] [COMMENT 'text']
//! UNIQUE KEY|INDEX `name` (`a`[, `b` ...]) [COMMENT 'text']
//! ```

use crate::model::{Index, IndexKind};
use crate::util::starts_with_keyword;

use super::column_parser::non_empty_comment;
use super::identifier_utils::{normalize_identifier, split_column_list, split_tokens};

/// Parse a `PRIMARY KEY (...)` line into its column names.
///
/// Returns `None` for lines that are too short or have no column list.
pub fn parse_primary_key(line: &str) -> Option<Vec<String>> {
    if !starts_with_keyword(line, "PRIMARY") {
        return None;
    }
    let tokens = split_tokens(line);
    if tokens.len() < 3 && !tokens.last().is_some_and(|t| t.contains('(')) {
        return None;
    }
    let columns = split_column_list(line)?;
    if columns.is_empty() {
        return None;
    }
    Some(columns)
}

/// Parse a `KEY`, `INDEX` or `UNIQUE KEY` line.
///
/// The index name is token 1 for plain keys and token 2 for unique keys. An
/// unnamed key takes the name of its first column, as MySQL does. Lines
/// that do not open with the key keyword (an unquoted column such as
/// `id int(11)`) are rejected.
pub fn parse_index(line: &str, kind: IndexKind) -> Option<Index> {
    let keyword_matches = match kind {
        IndexKind::Normal => starts_with_keyword(line, "KEY") || starts_with_keyword(line, "INDEX"),
        IndexKind::Unique => starts_with_keyword(line, "UNIQUE"),
    };
    if !keyword_matches {
        return None;
    }

    let tokens = split_tokens(line);
    let name_pos = match kind {
        IndexKind::Normal => 1,
        IndexKind::Unique => 2,
    };
    if tokens.len() <= name_pos {
        return None;
    }

    // The column list may be glued to the name (`idx_a(`a`)`) or follow it
    let list_pos = tokens[name_pos..]
        .iter()
        .position(|t| t.contains('('))
        .map(|p| p + name_pos)?;
    let list_token = tokens[list_pos];
    let fields = split_column_list(list_token)?;
    if fields.is_empty() {
        return None;
    }

    let name_token = if list_pos == name_pos {
        list_token.split('(').next().unwrap_or("")
    } else {
        tokens[name_pos]
    };
    let mut raw_name = normalize_identifier(name_token);
    if raw_name.is_empty() {
        raw_name = fields[0].clone();
    }

    let comment = tokens[list_pos + 1..]
        .iter()
        .position(|t| t.eq_ignore_ascii_case("COMMENT"))
        .and_then(|p| tokens.get(list_pos + 2 + p))
        .and_then(|value| non_empty_comment(value));

    Some(Index {
        raw_name,
        kind,
        fields,
        comment,
    })
}

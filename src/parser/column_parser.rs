//! Column definition parsing for MySQL DDL
//!
//! ## Supported Syntax
//!
//! ```sql
//! `name` TYPE[(size[,decimal_size])] [unsigned] [NOT NULL]
//!     [DEFAULT value] [AUTO_INCREMENT] [COMMENT 'text']
//! ```
//!
//! Modifiers may appear in any order. Anything else (`CHARACTER SET`,
//! `COLLATE`, `ON UPDATE ...`, `zerofill`) is skipped token by token.

use crate::model::{resolve_type, ColumnType, Field};
use crate::util::exported_identifier;

use super::identifier_utils::{normalize_identifier, split_tokens, unquote_literal};

/// Parse a column definition line into a [`Field`].
///
/// Returns `None` when the line has no type token.
pub fn parse_field(line: &str) -> Option<Field> {
    let tokens = split_tokens(line);
    if tokens.len() < 2 {
        return None;
    }

    let raw_name = normalize_identifier(tokens[0]);
    let raw_type_name = tokens[1].to_string();
    let mut field = Field {
        name: exported_identifier(&raw_name),
        raw_name,
        raw_type_name,
        ..Default::default()
    };

    let mut i = 2;
    while i < tokens.len() {
        let token = tokens[i];
        let next = tokens.get(i + 1).copied();

        if token.eq_ignore_ascii_case("NOT") {
            if next.is_some_and(|n| n.eq_ignore_ascii_case("NULL")) {
                field.not_null = true;
                i += 2;
                continue;
            }
        } else if token.eq_ignore_ascii_case("DEFAULT") {
            if let Some(value) = next {
                field.default = Some(unquote_literal(value));
                i += 2;
                continue;
            }
        } else if token.eq_ignore_ascii_case("COMMENT") {
            if let Some(value) = next {
                field.comment = non_empty_comment(value);
                i += 2;
                continue;
            }
        } else if token.eq_ignore_ascii_case("AUTO_INCREMENT") {
            field.auto_increment = true;
        } else if token.eq_ignore_ascii_case("UNSIGNED") {
            field.unsigned = true;
        }
        i += 1;
    }

    let (type_name, size, decimal_size) = split_type_token(&field.raw_type_name);
    field.ty = ColumnType {
        kind: resolve_type(&type_name, field.unsigned, size),
        size,
        decimal_size,
    };
    field.type_name = type_name;

    Some(field)
}

/// Split a type token such as `decimal(10,2)` into base name, size and decimal size.
///
/// Sizes that are not plain numbers (e.g. the members of an `enum(...)`) read as 0.
pub fn split_type_token(raw_type: &str) -> (String, u32, u32) {
    let Some((base, rest)) = raw_type.split_once('(') else {
        return (raw_type.to_string(), 0, 0);
    };

    let inner = rest.strip_suffix(')').unwrap_or(rest);
    let mut sizes = inner.split(',');
    let size = parse_size(sizes.next());
    let decimal_size = parse_size(sizes.next());

    (base.to_string(), size, decimal_size)
}

fn parse_size(part: Option<&str>) -> u32 {
    part.and_then(|p| p.trim().parse().ok()).unwrap_or(0)
}

/// Unquote a COMMENT value; an empty comment reads as no comment
pub(crate) fn non_empty_comment(token: &str) -> Option<String> {
    let text = unquote_literal(token);
    if text.is_empty() || text == "''" {
        None
    } else {
        Some(text)
    }
}

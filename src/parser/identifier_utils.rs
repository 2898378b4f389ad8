//! Identifier, literal and token helpers for MySQL DDL lines.
//!
//! MySQL dumps quote identifiers with backticks and string literals with
//! single (occasionally double) quotes. These helpers split a DDL line into
//! whitespace-separated tokens without breaking quoted literals or
//! parenthesized groups apart, and strip quoting from identifiers and values.
//!
//! # Examples
//!
//! ```ignore
//! use crate::parser::identifier_utils::*;
//!
//! assert_eq!(normalize_identifier("`user_id`"), "user_id");
//! assert_eq!(
//!     split_tokens("`name` varchar(32) COMMENT 'user name'"),
//!     vec!["`name`", "varchar(32)", "COMMENT", "'user name'"]
//! );
//! assert_eq!(unquote_literal("''"), "''");
//! ```

const QUOTE_CHARS: [char; 3] = ['`', '\'', '"'];

/// Strips backticks and quotes from an identifier.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_identifier("`users`"), "users");
/// assert_eq!(normalize_identifier("\"users\""), "users");
/// assert_eq!(normalize_identifier("users"), "users");
/// ```
pub fn normalize_identifier(ident: &str) -> String {
    ident.trim().trim_matches(&QUOTE_CHARS[..]).to_string()
}

/// Strips a qualifying schema from a table identifier (`shop`.`orders` -> `orders`).
pub fn unqualified_table_name(ident: &str) -> String {
    let ident = ident.split('(').next().unwrap_or(ident);
    let last = ident.rsplit('.').next().unwrap_or(ident);
    normalize_identifier(last)
}

/// Removes the quotes around a string literal.
///
/// A two-character quoted literal (`''` or `""`) is the empty string; it is
/// returned as the literal `''` so callers can tell it apart from a missing
/// value. Doubled quotes fold to one; backslash sequences are kept verbatim.
pub fn unquote_literal(token: &str) -> String {
    let token = token.trim();
    let mut chars = token.chars();
    let quote = match (chars.next(), chars.next_back()) {
        (Some(open), Some(close)) if open == close && (open == '\'' || open == '"') => open,
        _ => return token.trim_matches('\'').to_string(),
    };

    let inner = &token[1..token.len() - 1];
    if inner.is_empty() {
        return "''".to_string();
    }

    let doubled: String = [quote, quote].iter().collect();
    inner.replace(&doubled, &quote.to_string())
}

/// Splits a DDL line on whitespace.
///
/// Quoted sections (backticks, single and double quotes) and parenthesized
/// groups are kept inside a single token, so `COMMENT 'first name'` and
/// `decimal(10, 2)` each stay whole. Unbalanced closing parentheses are
/// treated as ordinary characters.
pub fn split_tokens(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;
    let mut quote: Option<char> = None;
    let mut depth = 0usize;
    let mut escaped = false;

    for (i, c) in line.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' && q != '`' {
                escaped = true;
            } else if c == q {
                // A doubled quote reopens on the next character
                quote = None;
            }
            continue;
        }

        if c.is_whitespace() && depth == 0 {
            if let Some(s) = start.take() {
                tokens.push(&line[s..i]);
            }
            continue;
        }

        if start.is_none() {
            start = Some(i);
        }
        match c {
            '`' | '\'' | '"' => quote = Some(c),
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    if let Some(s) = start {
        tokens.push(&line[s..]);
    }
    tokens
}

/// Extracts the column names of the first parenthesized list in `text`.
///
/// Handles the forms found in key definitions:
/// `(`a`,`b`)`, `(a, b)`, prefix lengths `(`name`(10))` and sort order
/// `(`a` DESC)`. Returns `None` when there is no opening parenthesis.
pub fn split_column_list(text: &str) -> Option<Vec<String>> {
    let open = text.find('(')?;
    let mut columns = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut in_backtick = false;

    for c in text[open..].chars() {
        if in_backtick {
            if c == '`' {
                in_backtick = false;
            }
            current.push(c);
            continue;
        }
        match c {
            '`' => {
                in_backtick = true;
                current.push(c);
            }
            '(' => {
                depth += 1;
            }
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    break;
                }
            }
            ',' if depth == 1 => {
                push_column(&mut columns, &current);
                current.clear();
            }
            _ if depth == 1 => current.push(c),
            // Prefix length digits like the 10 in `name`(10)
            _ => {}
        }
    }
    push_column(&mut columns, &current);

    Some(columns)
}

fn push_column(columns: &mut Vec<String>, part: &str) {
    let trimmed = part.trim();
    let name = if trimmed.starts_with('`') {
        // Backticked names may contain spaces
        match trimmed[1..].find('`') {
            Some(end) => &trimmed[1..end + 1],
            None => &trimmed[1..],
        }
    } else {
        trimmed.split_whitespace().next().unwrap_or("")
    };
    let name = normalize_identifier(name);
    if !name.is_empty() {
        columns.push(name);
    }
}

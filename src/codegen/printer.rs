//! gofmt-style printer for the Go syntax tree
//!
//! Output follows gofmt layout: tab indentation, one blank line between
//! top-level declarations, and struct members aligned in columns the way
//! `text/tabwriter` aligns them (padding 1, widths counted in characters).

use super::ast::{Decl, Expr, GoFile, MethodDecl, Stmt, StructDecl, StructField};

/// Render a Go file as formatted source
pub fn print_file(file: &GoFile) -> String {
    let mut sections = Vec::with_capacity(file.decls.len() + 2);

    sections.push(format!("package {}\n", file.package));

    if !file.imports.is_empty() {
        sections.push(print_imports(&file.imports));
    }

    for decl in &file.decls {
        sections.push(match decl {
            Decl::Struct(s) => print_struct(s),
            Decl::Method(m) => print_method(m),
        });
    }

    sections.join("\n")
}

fn print_imports(imports: &[String]) -> String {
    let mut paths: Vec<&String> = imports.iter().collect();
    paths.sort();
    paths.dedup();

    if let [single] = paths.as_slice() {
        return format!("import {}\n", quote_string(single));
    }

    let mut out = String::from("import (\n");
    for path in paths {
        out.push('\t');
        out.push_str(&quote_string(path));
        out.push('\n');
    }
    out.push_str(")\n");
    out
}

fn print_struct(decl: &StructDecl) -> String {
    let mut out = String::new();
    if let Some(doc) = &decl.doc {
        out.push_str(&line_comment(doc));
        out.push('\n');
    }
    out.push_str(&format!("type {} struct {{\n", decl.name));

    let rows: Vec<Vec<String>> = decl.fields.iter().map(field_cells).collect();
    for line in align_columns(&rows) {
        out.push('\t');
        out.push_str(&line);
        out.push('\n');
    }

    out.push_str("}\n");
    out
}

fn field_cells(field: &StructField) -> Vec<String> {
    let mut cells = vec![field.name.clone(), field.ty.clone()];
    if let Some(tag) = &field.tag {
        cells.push(tag_literal(tag));
    }
    if let Some(comment) = &field.comment {
        cells.push(line_comment(comment));
    }
    cells
}

fn print_method(decl: &MethodDecl) -> String {
    let pointer = if decl.pointer_receiver { "*" } else { "" };
    let results = match decl.results.as_slice() {
        [] => String::new(),
        [single] => format!(" {}", single),
        many => format!(" ({})", many.join(", ")),
    };

    let mut out = format!(
        "func ({} {}{}) {}(){} {{\n",
        decl.receiver, pointer, decl.receiver_type, decl.name, results
    );
    for stmt in &decl.body {
        out.push('\t');
        out.push_str(&print_stmt(stmt));
        out.push('\n');
    }
    out.push_str("}\n");
    out
}

fn print_stmt(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Return(exprs) if exprs.is_empty() => "return".to_string(),
        Stmt::Return(exprs) => {
            let values: Vec<String> = exprs.iter().map(print_expr).collect();
            format!("return {}", values.join(", "))
        }
    }
}

fn print_expr(expr: &Expr) -> String {
    match expr {
        Expr::Str(value) => quote_string(value),
    }
}

fn line_comment(text: &str) -> String {
    // Comments are single-line; fold any stray line breaks
    let text = text.replace(['\r', '\n'], " ");
    format!("// {}", text.trim_end())
}

/// Struct tags are raw strings unless the content itself holds a backquote
fn tag_literal(tag: &str) -> String {
    if tag.contains('`') {
        quote_string(tag)
    } else {
        format!("`{}`", tag)
    }
}

/// Quote a string as a Go interpreted string literal
pub fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Align rows of cells into columns.
///
/// Every cell but the last one in a row is a terminated cell. A column's
/// width is set per block of consecutive rows that all have a terminated
/// cell in that column; the last cell of a row never affects widths. This
/// matches `text/tabwriter`, which gofmt uses for struct members.
pub fn align_columns(rows: &[Vec<String>]) -> Vec<String> {
    let max_columns = rows.iter().map(|r| r.len().saturating_sub(1)).max().unwrap_or(0);
    let mut widths: Vec<Vec<usize>> = rows.iter().map(|r| vec![0; r.len()]).collect();

    for column in 0..max_columns {
        let mut row = 0;
        while row < rows.len() {
            if rows[row].len() <= column + 1 {
                row += 1;
                continue;
            }
            let block_start = row;
            let mut width = 0;
            while row < rows.len() && rows[row].len() > column + 1 {
                width = width.max(rows[row][column].chars().count());
                row += 1;
            }
            for block_row in &mut widths[block_start..row] {
                block_row[column] = width;
            }
        }
    }

    rows.iter()
        .zip(&widths)
        .map(|(cells, widths)| {
            let mut line = String::new();
            let Some((last, terminated)) = cells.split_last() else {
                return line;
            };
            for (cell, &width) in terminated.iter().zip(widths) {
                line.push_str(cell);
                let pad = width - cell.chars().count() + 1;
                line.extend(std::iter::repeat(' ').take(pad));
            }
            line.push_str(last);
            line
        })
        .collect()
}

//! Go struct generation
//!
//! A parsed [`Table`] is turned into a small Go syntax tree (imports, one
//! struct type and a `TableName` method) which is then printed in gofmt
//! layout.

mod ast;
mod printer;
mod tags;

pub use ast::{Decl, Expr, GoFile, MethodDecl, Stmt, StructDecl, StructField};
pub use printer::{align_columns, print_file, quote_string};
pub use tags::build_tag;

use crate::model::{Field, Table};

/// Package name used when none is configured
pub const DEFAULT_PACKAGE: &str = "model";

/// Code generation options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenConfig {
    /// Emit `json:"<column>"` tags
    pub json_tag: bool,
    /// Emit `gorm:"..."` tags
    pub gorm_tag: bool,
    /// Order struct members by field name instead of declaration order
    pub sort_fields: bool,
    /// Go package of the generated file
    pub package_name: String,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            json_tag: false,
            gorm_tag: false,
            sort_fields: false,
            package_name: DEFAULT_PACKAGE.to_string(),
        }
    }
}

/// Generate Go source for a table.
///
/// Returns an empty string when the table has no name.
pub fn generate(table: &Table, config: &GenConfig) -> String {
    if table.name.is_empty() {
        return String::new();
    }
    print_file(&build_file(table, config))
}

/// Build the syntax tree for a table's model file
pub fn build_file(table: &Table, config: &GenConfig) -> GoFile {
    let mut fields: Vec<&Field> = table.fields.iter().collect();
    if config.sort_fields {
        // Stable: fields with equal names keep declaration order
        fields.sort_by(|a, b| a.name.cmp(&b.name));
    }

    let members = fields
        .into_iter()
        .map(|field| StructField {
            name: field.name.clone(),
            ty: field.ty.kind.go_name().to_string(),
            tag: build_tag(table, field, config),
            comment: field.comment.clone(),
        })
        .collect();

    let package = if config.package_name.trim().is_empty() {
        DEFAULT_PACKAGE.to_string()
    } else {
        config.package_name.trim().to_string()
    };

    GoFile {
        package,
        imports: table.imports.iter().cloned().collect(),
        decls: vec![
            Decl::Struct(StructDecl {
                doc: table
                    .comment
                    .as_ref()
                    .map(|comment| format!("{} {}", table.name, comment)),
                name: table.name.clone(),
                fields: members,
            }),
            Decl::Method(table_name_method(table)),
        ],
    }
}

/// `func (t *Table) TableName() string { return "<raw name>" }`
fn table_name_method(table: &Table) -> MethodDecl {
    MethodDecl {
        receiver: receiver_name(&table.raw_name),
        receiver_type: table.name.clone(),
        pointer_receiver: true,
        name: "TableName".to_string(),
        results: vec!["string".to_string()],
        body: vec![Stmt::Return(vec![Expr::Str(table.raw_name.clone())])],
    }
}

/// Receiver is the first character of the table name, or `t` if that cannot start an identifier
fn receiver_name(raw_name: &str) -> String {
    match raw_name.chars().next() {
        Some(c) if c.is_alphabetic() || c == '_' => c.to_string(),
        _ => "t".to_string(),
    }
}

//! Table model elements

use std::collections::BTreeSet;

use super::types::ColumnType;

/// A parsed `CREATE TABLE` definition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Exported Go identifier (e.g. `User_info`)
    pub name: String,
    /// Table identifier as written in the DDL (e.g. `user_info`)
    pub raw_name: String,
    /// Columns in declaration order
    pub fields: Vec<Field>,
    /// Primary key columns by raw name, in key order
    pub primary_keys: Vec<String>,
    /// Indexes in declaration order
    pub indexes: Vec<Index>,
    pub comment: Option<String>,
    /// Go import paths required by field types
    pub imports: BTreeSet<String>,
}

impl Table {
    /// Check whether a raw column name is part of the primary key
    pub fn is_primary_key(&self, raw_name: &str) -> bool {
        self.primary_keys.iter().any(|k| k == raw_name)
    }

    /// Look up a field by its raw column name
    pub fn field(&self, raw_name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.raw_name == raw_name)
    }

    /// Indexes that include the given field, in declaration order
    pub fn indexes_of<'a>(&'a self, field: &'a Field) -> impl Iterator<Item = &'a Index> + 'a {
        field.indexes.iter().filter_map(|&i| self.indexes.get(i))
    }

    /// True when nothing was parsed into this table
    pub fn is_empty(&self) -> bool {
        self.raw_name.is_empty() && self.fields.is_empty() && self.indexes.is_empty()
    }
}

/// A column definition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Field {
    /// Exported Go identifier
    pub name: String,
    pub raw_name: String,
    /// Type token as written, e.g. `decimal(10,2)`
    pub raw_type_name: String,
    /// Base type with the size clause removed, e.g. `decimal`
    pub type_name: String,
    pub ty: ColumnType,
    /// `None` when the column has no DEFAULT; an empty string literal is kept as `''`
    pub default: Option<String>,
    pub comment: Option<String>,
    pub auto_increment: bool,
    pub unsigned: bool,
    pub not_null: bool,
    /// Positions in [`Table::indexes`] of every index containing this field
    pub indexes: Vec<usize>,
}

/// Index kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexKind {
    Normal,
    Unique,
}

impl IndexKind {
    /// Key used for this kind in gorm tags
    pub fn tag_key(&self) -> &'static str {
        match self {
            IndexKind::Normal => "index",
            IndexKind::Unique => "uniqueIndex",
        }
    }
}

/// A named index or unique key
#[derive(Debug, Clone, PartialEq)]
pub struct Index {
    pub raw_name: String,
    pub kind: IndexKind,
    /// Column raw names; position + 1 is the composite priority
    pub fields: Vec<String>,
    pub comment: Option<String>,
}

impl Index {
    /// 1-based position of a column within this index
    pub fn priority_of(&self, raw_name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == raw_name).map(|p| p + 1)
    }
}

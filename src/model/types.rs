//! Column type resolution

/// Go type a column is rendered as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GoType {
    Bool,
    Int,
    Int16,
    Uint16,
    Uint,
    Int64,
    Uint64,
    Float64,
    String,
    Time,
    /// JSON columns: any value
    Dynamic,
    /// Column type not known to the mapping table
    #[default]
    Unresolved,
}

impl GoType {
    /// Get the Go source spelling of the type
    pub fn go_name(&self) -> &'static str {
        match self {
            GoType::Bool => "bool",
            GoType::Int => "int",
            GoType::Int16 => "int16",
            GoType::Uint16 => "uint16",
            GoType::Uint => "uint",
            GoType::Int64 => "int64",
            GoType::Uint64 => "uint64",
            GoType::Float64 => "float64",
            GoType::String => "string",
            GoType::Time => "time.Time",
            GoType::Dynamic | GoType::Unresolved => "interface{}",
        }
    }

    /// Import path the generated file needs for this type, if any
    pub fn import_path(&self) -> Option<&'static str> {
        match self {
            GoType::Time => Some("time"),
            _ => None,
        }
    }
}

/// Resolved column type with the size clause of the DDL type token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnType {
    pub kind: GoType,
    /// Display width or precision, e.g. 10 in `decimal(10,2)`
    pub size: u32,
    /// Scale, e.g. 2 in `decimal(10,2)`
    pub decimal_size: u32,
}

/// Map a MySQL base type name to its Go type.
///
/// `tinyint(1)` is the MySQL boolean idiom; every other width stays an integer.
pub fn resolve_type(base_type: &str, unsigned: bool, size: u32) -> GoType {
    match base_type.to_ascii_lowercase().as_str() {
        "tinyint" if size == 1 => GoType::Bool,
        "tinyint" => GoType::Int,
        "smallint" if unsigned => GoType::Uint16,
        "smallint" => GoType::Int16,
        "int" | "integer" if unsigned => GoType::Uint,
        "int" | "integer" => GoType::Int,
        "bigint" if unsigned => GoType::Uint64,
        "bigint" => GoType::Int64,
        "decimal" | "float" => GoType::Float64,
        "char" | "varchar" | "text" | "longtext" => GoType::String,
        "date" | "datetime" | "timestamp" | "time" => GoType::Time,
        "json" => GoType::Dynamic,
        _ => GoType::Unresolved,
    }
}

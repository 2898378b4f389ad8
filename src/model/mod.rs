//! Schema model for parsed tables

mod table;
mod types;

pub use table::{Field, Index, IndexKind, Table};
pub use types::{resolve_type, ColumnType, GoType};

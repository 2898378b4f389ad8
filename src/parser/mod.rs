//! MySQL DDL parsing

mod column_parser;
mod identifier_utils;
mod index_parser;
mod table_parser;

pub use column_parser::{parse_field, split_type_token};
pub use index_parser::{parse_index, parse_primary_key};
pub use table_parser::{parse_table, parse_tables};

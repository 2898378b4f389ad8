//! Unit tests for the MySQL DDL parser

use pretty_assertions::assert_eq;
use sql2struct::model::{GoType, IndexKind};
use sql2struct::{parse_table, parse_tables};

use crate::common;

// ============================================================================
// Table Header Tests
// ============================================================================

#[test]
fn test_parse_table_name() {
    let table = parse_table("CREATE TABLE `user_info` (\n  `id` int\n);");
    assert_eq!(table.raw_name, "user_info");
    assert_eq!(table.name, "User_info");
}

#[test]
fn test_parse_table_name_if_not_exists() {
    let table = parse_table("CREATE TABLE IF NOT EXISTS `audit_log` (\n  `id` int\n);");
    assert_eq!(table.raw_name, "audit_log");
    assert_eq!(table.name, "Audit_log");
}

#[test]
fn test_parse_qualified_table_name() {
    let table = parse_table("CREATE TABLE `shop`.`orders` (\n  `id` int\n);");
    assert_eq!(table.raw_name, "orders");
}

#[test]
fn test_parse_without_create_table_has_no_name() {
    let table = parse_table("  `id` int NOT NULL,\n  `name` varchar(10)\n");
    assert_eq!(table.name, "");
    assert_eq!(table.fields.len(), 2);
}

#[test]
fn test_parse_empty_input() {
    let table = parse_table("");
    assert!(table.is_empty());
    assert!(parse_tables("").is_empty());
}

// ============================================================================
// Column Tests
// ============================================================================

#[test]
fn test_field_order_follows_declaration() {
    let table = parse_table(&common::read_fixture("user.sql"));
    let names: Vec<&str> = table.fields.iter().map(|f| f.raw_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "id",
            "name",
            "age",
            "balance",
            "is_admin",
            "profile",
            "location",
            "created_at",
            "updated_at"
        ]
    );
}

#[test]
fn test_decimal_size_and_scale() {
    let table = parse_table("CREATE TABLE `t` (\n  `amount` decimal(10,2) NOT NULL\n);");
    let field = &table.fields[0];
    assert_eq!(field.raw_type_name, "decimal(10,2)");
    assert_eq!(field.type_name, "decimal");
    assert_eq!(field.ty.size, 10);
    assert_eq!(field.ty.decimal_size, 2);
    assert_eq!(field.ty.kind, GoType::Float64);
}

#[test]
fn test_unsigned_auto_increment_id() {
    let table = parse_table(
        "CREATE TABLE `t` (\n  `id` int unsigned NOT NULL AUTO_INCREMENT,\n  PRIMARY KEY (`id`)\n);",
    );
    let field = &table.fields[0];
    assert_eq!(field.ty.kind, GoType::Uint);
    assert!(field.not_null);
    assert!(field.auto_increment);
    assert!(field.unsigned);
}

#[test]
fn test_empty_string_default_differs_from_no_default() {
    let table = parse_table(&common::read_fixture("user.sql"));
    let name = table.field("name").unwrap();
    let location = table.field("location").unwrap();
    assert_eq!(name.default.as_deref(), Some("''"));
    assert_eq!(location.default.as_deref(), Some("NULL"));
    let ddl = "CREATE TABLE `t` (\n  `a` int NOT NULL\n);";
    assert_eq!(parse_table(ddl).fields[0].default, None);
}

#[test]
fn test_column_types_from_dump() {
    let table = parse_table(&common::read_fixture("user.sql"));
    let kinds: Vec<GoType> = table.fields.iter().map(|f| f.ty.kind).collect();
    assert_eq!(
        kinds,
        vec![
            GoType::Uint,
            GoType::String,
            GoType::Int,
            GoType::Float64,
            GoType::Bool,
            GoType::Dynamic,
            GoType::Unresolved,
            GoType::Time,
            GoType::Time,
        ]
    );
}

#[test]
fn test_time_import_registered_once() {
    let table = parse_table(&common::read_fixture("user.sql"));
    assert_eq!(table.imports.len(), 1);
    assert!(table.imports.contains("time"));
}

#[test]
fn test_no_import_without_time_columns() {
    let table = parse_table(&common::read_fixture("order_item.sql"));
    assert!(table.imports.is_empty());
}

#[test]
fn test_field_comment_with_spaces() {
    let table = parse_table(&common::read_fixture("user.sql"));
    assert_eq!(
        table.field("id").unwrap().comment.as_deref(),
        Some("primary key")
    );
    assert_eq!(table.field("age").unwrap().comment, None);
}

#[test]
fn test_crlf_line_endings() {
    let ddl = "CREATE TABLE `t` (\r\n  `id` int NOT NULL,\r\n  `name` varchar(8)\r\n) COMMENT='crlf';\r\n";
    let table = parse_table(ddl);
    assert_eq!(table.fields.len(), 2);
    assert_eq!(table.fields[1].raw_type_name, "varchar(8)");
    assert_eq!(table.comment.as_deref(), Some("crlf"));
}

#[test]
fn test_backslash_sequences_are_kept() {
    let ddl = "CREATE TABLE `t` (\n  `a` varchar(8) DEFAULT 'C:\\\\dir' COMMENT 'line1\\nline2'\n);";
    let table = parse_table(ddl);
    let field = table.field("a").unwrap();
    assert_eq!(field.default.as_deref(), Some(r"C:\\dir"));
    assert_eq!(field.comment.as_deref(), Some(r"line1\nline2"));
}

#[test]
fn test_names_become_go_identifiers() {
    let ddl = "CREATE TABLE `2fa_codes` (\n  `user-name` int,\n  `code` int\n);";
    let table = parse_table(ddl);
    assert_eq!(table.raw_name, "2fa_codes");
    assert_eq!(table.name, "X2fa_codes");
    assert_eq!(table.fields[0].raw_name, "user-name");
    assert_eq!(table.fields[0].name, "User_name");
}

// ============================================================================
// Key and Index Tests
// ============================================================================

#[test]
fn test_primary_key() {
    let table = parse_table(&common::read_fixture("user.sql"));
    assert_eq!(table.primary_keys, vec!["id"]);
    assert!(table.is_primary_key("id"));
}

#[test]
fn test_composite_primary_key_order() {
    let table = parse_table(&common::read_fixture("order_item.sql"));
    assert_eq!(table.primary_keys, vec!["order_id", "seq"]);
}

#[test]
fn test_unique_key_fields_and_back_references() {
    let table = parse_table(&common::read_fixture("order_item.sql"));
    assert_eq!(table.indexes.len(), 1);

    let index = &table.indexes[0];
    assert_eq!(index.raw_name, "uk_order_sku");
    assert_eq!(index.kind, IndexKind::Unique);
    assert_eq!(index.fields, vec!["order_id", "sku"]);
    assert_eq!(index.comment.as_deref(), Some("one line per sku"));

    let sku = table.field("sku").unwrap();
    assert_eq!(sku.indexes, vec![0]);
    assert_eq!(index.priority_of("sku"), Some(2));
    assert!(table.field("seq").unwrap().indexes.is_empty());
}

#[test]
fn test_field_in_several_indexes() {
    let table = parse_table(&common::read_fixture("user.sql"));
    assert_eq!(table.indexes.len(), 2);
    assert_eq!(table.indexes[1].kind, IndexKind::Normal);
    assert_eq!(table.indexes[1].comment.as_deref(), Some("age lookup"));

    let created_at = table.field("created_at").unwrap();
    let names: Vec<&str> = table
        .indexes_of(created_at)
        .map(|i| i.raw_name.as_str())
        .collect();
    assert_eq!(names, vec!["idx_age_created"]);
}

#[test]
fn test_dangling_index_reference_is_tolerated() {
    let ddl = "CREATE TABLE `t` (\n  `a` int,\n  KEY `idx_ab` (`a`,`b`),\n  PRIMARY KEY (`missing`)\n);";
    let table = parse_table(ddl);
    assert_eq!(table.indexes[0].fields, vec!["a", "b"]);
    assert_eq!(table.fields.len(), 1);
    assert_eq!(table.fields[0].indexes, vec![0]);
    assert_eq!(table.primary_keys, vec!["missing"]);
}

// ============================================================================
// Comment and Noise Handling Tests
// ============================================================================

#[test]
fn test_table_comment() {
    let table = parse_table(&common::read_fixture("user.sql"));
    assert_eq!(table.comment.as_deref(), Some("user accounts"));
}

#[test]
fn test_block_comment_lines_are_ignored() {
    let ddl = "CREATE TABLE `t` (\n/*\n  `hidden` int NOT NULL,\n  PRIMARY KEY (`hidden`),\n*/\n  `shown` int\n);";
    let table = parse_table(ddl);
    assert_eq!(table.fields.len(), 1);
    assert_eq!(table.fields[0].raw_name, "shown");
    assert!(table.primary_keys.is_empty());
}

#[test]
fn test_versioned_one_line_comment_does_not_suppress() {
    let ddl = "/*!40101 SET NAMES utf8 */;\nCREATE TABLE `t` (\n  `id` int\n);";
    let table = parse_table(ddl);
    assert_eq!(table.raw_name, "t");
    assert_eq!(table.fields.len(), 1);
}

#[test]
fn test_insert_and_lock_lines_are_ignored() {
    let table = parse_table(&common::read_fixture("user.sql"));
    assert_eq!(table.fields.len(), 9);
    assert_eq!(table.indexes.len(), 2);
}

#[test]
fn test_unquoted_column_lines_add_no_index() {
    let ddl = "CREATE TABLE `t` (\n  `a` int,\n  id int(11) NOT NULL,\n  user_id bigint(20) NOT NULL,\n  key_no int(4),\n  KEY `idx_a` (`a`)\n);";
    let table = parse_table(ddl);
    assert_eq!(table.fields.len(), 1);
    assert_eq!(table.indexes.len(), 1);
    assert_eq!(table.indexes[0].raw_name, "idx_a");
    assert_eq!(table.indexes[0].kind, IndexKind::Normal);
    assert!(table.primary_keys.is_empty());
}

#[test]
fn test_unrecognized_lines_are_skipped() {
    let ddl = "CREATE TABLE `t` (\n  `id` int,\n  CONSTRAINT `fk` FOREIGN KEY (`id`) REFERENCES `x` (`id`),\n  FULLTEXT KEY `ft` (`id`),\n  `\n);";
    let table = parse_table(ddl);
    assert_eq!(table.fields.len(), 1);
    assert!(table.indexes.is_empty());
}

// ============================================================================
// Multi-table Dump Tests
// ============================================================================

#[test]
fn test_parse_tables_from_dump() {
    let tables = parse_tables(&common::read_fixture("shop_dump.sql"));
    let names: Vec<&str> = tables.iter().map(|t| t.raw_name.as_str()).collect();
    assert_eq!(names, vec!["category", "product"]);

    let category = &tables[0];
    assert_eq!(category.fields.len(), 2);
    assert_eq!(category.primary_keys, vec!["id"]);
    assert_eq!(category.comment.as_deref(), Some("product categories"));

    let product = &tables[1];
    assert_eq!(product.indexes[0].raw_name, "idx_category");
    assert_eq!(product.field("category_id").unwrap().indexes, vec![0]);
    assert!(product.imports.contains("time"));
    assert_eq!(product.comment, None);
}

#[test]
fn test_parse_table_returns_first_of_dump() {
    let table = parse_table(&common::read_fixture("shop_dump.sql"));
    assert_eq!(table.raw_name, "category");
}

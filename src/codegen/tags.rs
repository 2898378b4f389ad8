//! Struct tag construction

use crate::model::{Field, Table};

use super::GenConfig;

/// Build the struct tag for a field, or `None` when both tag kinds are off.
///
/// The gorm tag always carries `column` and `type`, then `default`,
/// `primaryKey` and one `index:`/`uniqueIndex:` entry per index containing the
/// field, with the field's 1-based position in that index as its priority.
pub fn build_tag(table: &Table, field: &Field, config: &GenConfig) -> Option<String> {
    if !config.json_tag && !config.gorm_tag {
        return None;
    }

    let mut tags = Vec::with_capacity(2);
    if config.json_tag {
        tags.push(format!("json:\"{}\"", field.raw_name));
    }
    if config.gorm_tag {
        tags.push(format!("gorm:\"{}\"", gorm_tag(table, field).join(";")));
    }

    Some(tags.join(" "))
}

fn gorm_tag(table: &Table, field: &Field) -> Vec<String> {
    let mut parts = vec![format!(
        "column:{};type:{}",
        field.raw_name, field.raw_type_name
    )];

    if let Some(default) = &field.default {
        parts.push(format!("default:{}", default));
    }

    if table.is_primary_key(&field.raw_name) {
        parts.push("primaryKey".to_string());
    }

    for index in table.indexes_of(field) {
        if let Some(priority) = index.priority_of(&field.raw_name) {
            parts.push(format!(
                "{}:{},priority:{}",
                index.kind.tag_key(),
                index.raw_name,
                priority
            ));
        }
    }

    parts
}

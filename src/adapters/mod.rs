// Adapters layer: concrete content stores and the content shapes read through them.

pub mod http;
pub mod json_tree;
pub mod node;
pub mod structured;

pub use http::{Credentials, HttpStore};
pub use json_tree::JsonTreeStore;
pub use node::NodeLayout;
pub use structured::StructuredLayout;

use crate::core::{ContentShape, ContentStore, FieldDeclaration, Record, SkipReason, ThemeSource};
use crate::domain::model::is_blank;

/// 依設定選擇內容結構對應的 ThemeSource
pub fn theme_source<'a>(shape: ContentShape, store: &'a dyn ContentStore) -> Box<dyn ThemeSource + 'a> {
    match shape {
        ContentShape::Node => Box::new(NodeLayout::new(store)),
        ContentShape::Structured => Box::new(StructuredLayout::new(store)),
    }
}

/// Field declaration from one model record; a missing label falls back to the name.
pub(crate) fn field_from_record(
    record: &Record,
    name_key: &str,
    label_key: &str,
    default_key: &str,
) -> Result<FieldDeclaration, SkipReason> {
    let name = record
        .get_str(name_key)
        .filter(|n| !is_blank(n))
        .ok_or_else(|| SkipReason::MalformedModel(format!("{} has no field name", record.path)))?;

    let label = record
        .get_str(label_key)
        .filter(|l| !is_blank(l))
        .unwrap_or_else(|| name.clone());

    Ok(FieldDeclaration {
        label,
        default_value: record.get_str_or(default_key, ""),
        name,
    })
}

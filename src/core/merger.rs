use crate::core::{FieldDeclaration, Overrides, ResolvedVariable};
use crate::domain::model::is_blank;

/// Merges override and default values into ordered `label: value` pairs.
///
/// An override wins whenever the field name is a key in `overrides`, even when
/// its value is blank. Blank results are dropped.
pub fn merge_variables(fields: &[FieldDeclaration], overrides: &Overrides) -> Vec<ResolvedVariable> {
    fields
        .iter()
        .filter_map(|field| {
            let value = overrides
                .get(&field.name)
                .unwrap_or(&field.default_value);

            if is_blank(value) {
                return None;
            }

            Some(ResolvedVariable {
                label: field.label.clone(),
                value: value.clone(),
            })
        })
        .collect()
}

use crate::adapters::field_from_record;
use crate::core::{
    ContentStore, FragmentData, FragmentLoad, PropertyKeys, Result, SkipReason, ThemePointer,
    ThemeSource,
};

/// Self-contained records: the theme lists its fragment paths directly, and
/// each fragment carries a `model` child (fields) and a `values` child (overrides).
pub struct StructuredLayout<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> StructuredLayout<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }
}

impl ThemeSource for StructuredLayout<'_> {
    fn read_theme(
        &self,
        pointer: &ThemePointer,
        keys: &PropertyKeys,
    ) -> Result<Option<Vec<String>>> {
        Ok(self
            .store
            .get(pointer.as_str())?
            .map(|theme| theme.get_str_array(&keys.fragment_paths)))
    }

    fn read_fragment(&self, path: &str) -> Result<FragmentLoad> {
        let Some(fragment) = self.store.get(path)? else {
            return Ok(FragmentLoad::Skipped(SkipReason::NotFound));
        };

        let Some(model) = fragment.child("model") else {
            return Ok(FragmentLoad::Skipped(SkipReason::MissingModel));
        };
        let Some(values) = fragment.child("values") else {
            return Ok(FragmentLoad::Skipped(SkipReason::MissingOverrides));
        };

        let fields = match model
            .children
            .iter()
            .map(|field| field_from_record(field, "name", "label", "default"))
            .collect::<std::result::Result<Vec<_>, SkipReason>>()
        {
            Ok(fields) => fields,
            Err(reason) => return Ok(FragmentLoad::Skipped(reason)),
        };

        Ok(FragmentLoad::Loaded(FragmentData {
            fields,
            overrides: values.scalar_properties(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::JsonTreeStore;
    use serde_json::json;

    #[test]
    fn test_unnamed_field_is_malformed() {
        let store = JsonTreeStore::from_value(json!({
            "styles": {"bad": {
                "model": {"f": {"label": "--f", "default": "1"}},
                "values": {}
            }}
        }))
        .unwrap();
        let layout = StructuredLayout::new(&store);

        assert!(matches!(
            layout.read_fragment("/styles/bad").unwrap(),
            FragmentLoad::Skipped(SkipReason::MalformedModel(_))
        ));
    }

    #[test]
    fn test_missing_values_child() {
        let store = JsonTreeStore::from_value(json!({
            "styles": {"novalues": {"model": {}}}
        }))
        .unwrap();
        let layout = StructuredLayout::new(&store);

        assert_eq!(
            layout.read_fragment("/styles/novalues").unwrap(),
            FragmentLoad::Skipped(SkipReason::MissingOverrides)
        );
    }

    #[test]
    fn test_numeric_values_are_coerced() {
        let store = JsonTreeStore::from_value(json!({
            "styles": {"num": {
                "model": {"w": {"name": "w", "label": "--weight", "default": 400}},
                "values": {"w": 700, "tags": ["a", "b"]}
            }}
        }))
        .unwrap();
        let layout = StructuredLayout::new(&store);

        let FragmentLoad::Loaded(data) = layout.read_fragment("/styles/num").unwrap() else {
            panic!("fragment should load");
        };
        assert_eq!(data.fields[0].default_value, "400");
        assert_eq!(data.overrides.get("w").map(String::as_str), Some("700"));
        assert!(!data.overrides.contains_key("tags"));
    }
}

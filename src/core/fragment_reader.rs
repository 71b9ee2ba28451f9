use crate::core::{
    FragmentLoad, Overrides, PropertyKeys, Result, SkippedFragment, StyleFragment, ThemeSource,
};
use crate::domain::model::is_blank;

/// Result of reading one style fragment: loaded, or skipped with a reason.
#[derive(Debug, Clone, PartialEq)]
pub enum FragmentOutcome {
    Loaded(StyleFragment),
    Skipped(SkippedFragment),
}

/// Class-name override when present and non-blank, otherwise the default selector.
pub fn resolve_selector(overrides: &Overrides, keys: &PropertyKeys) -> String {
    overrides
        .get(&keys.class_name)
        .filter(|name| !is_blank(name))
        .map(|name| name.trim().to_string())
        .unwrap_or_else(|| keys.default_selector.clone())
}

/// 讀取單一樣式片段；無法載入時回傳 Skipped 而不是錯誤
pub fn read_style_fragment(
    source: &dyn ThemeSource,
    path: &str,
    keys: &PropertyKeys,
) -> Result<FragmentOutcome> {
    match source.read_fragment(path)? {
        FragmentLoad::Loaded(data) => {
            let selector = resolve_selector(&data.overrides, keys);
            tracing::debug!(
                "Fragment {} declares {} field(s) under {}",
                path,
                data.fields.len(),
                selector
            );
            Ok(FragmentOutcome::Loaded(StyleFragment {
                path: path.to_string(),
                selector,
                fields: data.fields,
                overrides: data.overrides,
            }))
        }
        FragmentLoad::Skipped(reason) => {
            tracing::warn!("Skipping style fragment {}: {}", path, reason);
            Ok(FragmentOutcome::Skipped(SkippedFragment {
                path: path.to_string(),
                reason,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{JsonTreeStore, StructuredLayout};
    use crate::core::SkipReason;
    use serde_json::json;

    #[test]
    fn test_selector_defaults_to_root() {
        let keys = PropertyKeys::default();
        assert_eq!(resolve_selector(&Overrides::new(), &keys), ":root");

        let mut blank = Overrides::new();
        blank.insert("cssCN".to_string(), " ".to_string());
        assert_eq!(resolve_selector(&blank, &keys), ":root");

        let mut named = Overrides::new();
        named.insert("cssCN".to_string(), ".dark".to_string());
        assert_eq!(resolve_selector(&named, &keys), ".dark");
    }

    #[test]
    fn test_read_loaded_and_skipped_fragments() {
        let store = JsonTreeStore::from_value(json!({
            "styles": {
                "dark": {
                    "model": {"bg": {"name": "bg", "label": "--bg", "default": "#000"}},
                    "values": {"cssCN": ".dark"}
                },
                "broken": {"values": {}}
            }
        }))
        .unwrap();
        let source = StructuredLayout::new(&store);
        let keys = PropertyKeys::default();

        match read_style_fragment(&source, "/styles/dark", &keys).unwrap() {
            FragmentOutcome::Loaded(fragment) => {
                assert_eq!(fragment.path, "/styles/dark");
                assert_eq!(fragment.selector, ".dark");
                assert_eq!(fragment.fields.len(), 1);
            }
            other => panic!("expected loaded fragment, got {:?}", other),
        }

        assert_eq!(
            read_style_fragment(&source, "/styles/broken", &keys).unwrap(),
            FragmentOutcome::Skipped(SkippedFragment {
                path: "/styles/broken".to_string(),
                reason: SkipReason::MissingModel,
            })
        );
    }
}

use crate::adapters::field_from_record;
use crate::core::{
    ContentStore, FragmentData, FragmentLoad, PropertyKeys, Result, SkipReason, ThemePointer,
    ThemeSource,
};
use crate::domain::model::is_blank;

const DATA_NODE: &str = "jcr:content/data";
const MASTER_NODE: &str = "jcr:content/data/master";
const MODEL_PROPERTY: &str = "cq:model";
const MODEL_ITEMS: &str = "jcr:content/model/cq:dialog/content/items";

/// Raw repository-node layout of content fragments and their models.
///
/// ```text
/// <fragment>/jcr:content/data            cq:model = <model path>
/// <fragment>/jcr:content/data/master     override values
/// <model>/jcr:content/model/cq:dialog/content/items/*   name, fieldLabel, value
/// ```
pub struct NodeLayout<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> NodeLayout<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }
}

impl ThemeSource for NodeLayout<'_> {
    fn read_theme(
        &self,
        pointer: &ThemePointer,
        keys: &PropertyKeys,
    ) -> Result<Option<Vec<String>>> {
        let Some(theme) = self.store.get(pointer.as_str())? else {
            return Ok(None);
        };

        let paths = theme
            .descendant(MASTER_NODE)
            .map(|master| master.get_str_array(&keys.fragment_paths))
            .unwrap_or_default();
        Ok(Some(paths))
    }

    fn read_fragment(&self, path: &str) -> Result<FragmentLoad> {
        let Some(fragment) = self.store.get(path)? else {
            return Ok(FragmentLoad::Skipped(SkipReason::NotFound));
        };

        let Some(master) = fragment.descendant(MASTER_NODE) else {
            return Ok(FragmentLoad::Skipped(SkipReason::MissingOverrides));
        };

        let model_path = fragment
            .descendant(DATA_NODE)
            .and_then(|data| data.get_str(MODEL_PROPERTY))
            .filter(|p| !is_blank(p));
        let Some(model_path) = model_path else {
            return Ok(FragmentLoad::Skipped(SkipReason::MissingModel));
        };

        let Some(model) = self.store.get(model_path.trim())? else {
            return Ok(FragmentLoad::Skipped(SkipReason::MissingModel));
        };

        let Some(items) = model.descendant(MODEL_ITEMS) else {
            return Ok(FragmentLoad::Skipped(SkipReason::MalformedModel(format!(
                "{} has no dialog items",
                model.path
            ))));
        };

        let fields = match items
            .children
            .iter()
            .map(|item| field_from_record(item, "name", "fieldLabel", "value"))
            .collect::<std::result::Result<Vec<_>, SkipReason>>()
        {
            Ok(fields) => fields,
            Err(reason) => return Ok(FragmentLoad::Skipped(reason)),
        };

        Ok(FragmentLoad::Loaded(FragmentData {
            fields,
            overrides: master.scalar_properties(),
        }))
    }
}

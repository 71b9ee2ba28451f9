use crate::domain::model::{
    ContentShape, FragmentData, Properties, PropertyKeys, Record, SkipReason, ThemePointer,
};
use crate::utils::error::Result;

/// Read access to the content repository.
///
/// `Ok(None)` means nothing lives at `path`; `Err` is a repository failure.
pub trait ContentStore {
    fn get(&self, path: &str) -> Result<Option<Record>>;

    /// Properties of the record at `path` only, without its subtree.
    fn get_properties(&self, path: &str) -> Result<Option<Properties>> {
        Ok(self.get(path)?.map(|record| record.properties))
    }
}

/// Theme and style-fragment reads for one content shape.
pub trait ThemeSource {
    /// Ordered fragment paths stored on the theme record, or `None` if the record is missing.
    fn read_theme(&self, pointer: &ThemePointer, keys: &PropertyKeys)
        -> Result<Option<Vec<String>>>;

    /// Fields and overrides of one fragment; see [`FragmentLoad`].
    fn read_fragment(&self, path: &str) -> Result<FragmentLoad>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum FragmentLoad {
    Loaded(FragmentData),
    Skipped(SkipReason),
}

pub trait ConfigProvider {
    fn keys(&self) -> &PropertyKeys;
    fn content_shape(&self) -> ContentShape;
    fn page_content_node(&self) -> &str;
}

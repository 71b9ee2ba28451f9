use crate::core::{PropertyKeys, Result, ThemePointer, ThemeSource};

/// 讀取主題記錄上的樣式片段路徑清單
///
/// Order and duplicates are preserved and blank entries are left in place.
/// An absent pointer or a missing theme record yields an empty list.
pub fn read_fragment_paths(
    source: &dyn ThemeSource,
    pointer: Option<&ThemePointer>,
    keys: &PropertyKeys,
) -> Result<Vec<String>> {
    let Some(pointer) = pointer else {
        return Ok(Vec::new());
    };

    match source.read_theme(pointer, keys)? {
        Some(paths) => {
            tracing::debug!("Theme {} lists {} fragment path(s)", pointer, paths.len());
            Ok(paths)
        }
        None => {
            tracing::warn!("Theme record {} could not be loaded", pointer);
            Ok(Vec::new())
        }
    }
}

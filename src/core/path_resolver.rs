use crate::core::{AncestorChain, ContentStore, PageSnapshot, Result, ThemePointer};
use crate::domain::model::{join_path, parent_path, path_depth};

/// 沿著頁面祖先鏈尋找最近的主題指標
///
/// The current page is always checked. Ancestors are checked in order of
/// increasing distance until one sits at the content root (depth <= 1).
pub fn resolve_theme_pointer(chain: &AncestorChain, key: &str) -> Option<ThemePointer> {
    for (distance, page) in chain.iter().enumerate() {
        if distance > 0 && page.depth <= 1 {
            break;
        }

        if let Some(pointer) = ThemePointer::parse(&page.get_str_or(key, "")) {
            tracing::debug!(
                "Theme pointer {} found on {} (distance {})",
                pointer,
                page.path,
                distance
            );
            return Some(pointer);
        }
    }

    tracing::debug!("No theme pointer in {} page(s)", chain.len());
    None
}

/// Builds the ancestor chain for `page_path` with one shallow read per page.
///
/// Only the `content_node` child of each page is read; a page without one
/// (or a page that does not exist) contributes no properties.
pub fn load_ancestor_chain(
    store: &dyn ContentStore,
    page_path: &str,
    content_node: &str,
) -> Result<AncestorChain> {
    let mut pages = Vec::new();
    let mut next = Some(page_path.trim_end_matches('/').to_string());

    while let Some(path) = next {
        if !pages.is_empty() && path_depth(&path) <= 1 {
            break;
        }

        let properties = store
            .get_properties(&join_path(&path, content_node))?
            .unwrap_or_else(|| {
                tracing::debug!("Page {} has no {} properties", path, content_node);
                Default::default()
            });
        pages.push(PageSnapshot::new(path.clone(), properties));

        next = parent_path(&path);
    }

    Ok(AncestorChain::new(pages))
}

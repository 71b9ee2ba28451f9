use crate::adapters::theme_source;
use crate::core::{
    path_resolver::load_ancestor_chain, resolver::ThemeResolver, AncestorChain, ConfigProvider,
    ContentStore, Result,
};
use serde::Serialize;

pub const RESOURCE_TYPE: &str = "core/wcm/components/themeselector/v3/themeselector";

/// Component model exposed to the page renderer.
///
/// The CSS is computed once when the model is built and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeSelector {
    #[serde(rename = ":type")]
    resource_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<String>,
}

impl ThemeSelector {
    pub fn new(resolver: &ThemeResolver<'_>, chain: &AncestorChain) -> Self {
        Self {
            resource_type: RESOURCE_TYPE.to_string(),
            variables: resolver.resolve_css(chain),
        }
    }

    /// Loads the page ancestry from `store` and resolves its theme.
    pub fn for_page<C: ConfigProvider>(store: &dyn ContentStore, config: &C, page_path: &str) -> Self {
        let chain = match load_ancestor_chain(store, page_path, config.page_content_node()) {
            Ok(chain) => chain,
            Err(e) => {
                tracing::error!("Couldn't read ancestry of page {}: {}", page_path, e);
                AncestorChain::default()
            }
        };

        let source = theme_source(config.content_shape(), store);
        let resolver = ThemeResolver::new(source.as_ref(), config.keys().clone());
        Self::new(&resolver, &chain)
    }

    pub fn with_resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = resource_type.into();
        self
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// CSS custom properties for the page, `None` when no theme applies.
    pub fn variables(&self) -> Option<&str> {
        self.variables.as_deref()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

use crate::core::{
    fragment_reader::{read_style_fragment, FragmentOutcome},
    merger::merge_variables,
    path_resolver::resolve_theme_pointer,
    serializer::StyleSheet,
    theme_reader::read_fragment_paths,
    AncestorChain, PropertyKeys, Result, SkippedFragment, StyleBlock, ThemePointer, ThemeSource,
};
use crate::domain::model::is_blank;

/// Outcome of one resolution pass.
///
/// `stylesheet` is `None` when no theme pointer was found; an empty sheet means
/// the theme resolved but contributed no fragments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeResolution {
    pub pointer: Option<ThemePointer>,
    pub stylesheet: Option<StyleSheet>,
    pub skipped: Vec<SkippedFragment>,
}

impl ThemeResolution {
    pub fn no_theme() -> Self {
        Self::default()
    }

    pub fn css(&self) -> Option<String> {
        self.stylesheet.as_ref().map(StyleSheet::to_css)
    }
}

/// Runs theme resolution for one page over a [`ThemeSource`].
pub struct ThemeResolver<'a> {
    source: &'a dyn ThemeSource,
    keys: PropertyKeys,
}

impl<'a> ThemeResolver<'a> {
    pub fn new(source: &'a dyn ThemeSource, keys: PropertyKeys) -> Self {
        Self { source, keys }
    }

    /// Runs the pipeline and propagates repository failures.
    pub fn try_resolve(&self, chain: &AncestorChain) -> Result<ThemeResolution> {
        let Some(pointer) = resolve_theme_pointer(chain, &self.keys.theme_pointer) else {
            return Ok(ThemeResolution::no_theme());
        };

        let paths = read_fragment_paths(self.source, Some(&pointer), &self.keys)?;
        let mut stylesheet = StyleSheet::new();
        let mut skipped = Vec::new();

        for path in paths.iter().filter(|p| !is_blank(p)) {
            match read_style_fragment(self.source, path.trim(), &self.keys)? {
                FragmentOutcome::Loaded(fragment) => {
                    let variables = merge_variables(&fragment.fields, &fragment.overrides);
                    tracing::debug!(
                        "Fragment {} writes {} variable(s) to {}",
                        fragment.path,
                        variables.len(),
                        fragment.selector
                    );
                    stylesheet.insert(StyleBlock {
                        selector: fragment.selector,
                        variables,
                    });
                }
                FragmentOutcome::Skipped(skip) => skipped.push(skip),
            }
        }

        tracing::info!(
            "Theme {} resolved to {} block(s), {} fragment(s) skipped",
            pointer,
            stylesheet.len(),
            skipped.len()
        );

        Ok(ThemeResolution {
            pointer: Some(pointer),
            stylesheet: Some(stylesheet),
            skipped,
        })
    }

    /// 對外入口：儲存庫錯誤只記錄日誌，結果退回「無主題」
    pub fn resolve(&self, chain: &AncestorChain) -> ThemeResolution {
        match self.try_resolve(chain) {
            Ok(resolution) => resolution,
            Err(e) => {
                let page = chain.current().map(|p| p.path.as_str()).unwrap_or("<none>");
                tracing::error!("Couldn't resolve theme for page {}: {}", page, e);
                ThemeResolution::no_theme()
            }
        }
    }

    pub fn resolve_css(&self, chain: &AncestorChain) -> Option<String> {
        self.resolve(chain).css()
    }
}

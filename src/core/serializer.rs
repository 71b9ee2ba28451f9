use crate::core::StyleBlock;
use indexmap::IndexMap;
use std::fmt;

/// Selector-keyed style blocks, emitted in order of their most recent write.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    blocks: IndexMap<String, StyleBlock>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `block` under its selector. A block already stored under the
    /// same selector is replaced, not merged, and the selector moves to the end.
    pub fn insert(&mut self, block: StyleBlock) {
        if self.blocks.shift_remove(&block.selector).is_some() {
            tracing::debug!("Selector {} overwritten by a later fragment", block.selector);
        }
        self.blocks.insert(block.selector.clone(), block);
    }

    pub fn get(&self, selector: &str) -> Option<&StyleBlock> {
        self.blocks.get(selector)
    }

    pub fn blocks(&self) -> impl Iterator<Item = &StyleBlock> {
        self.blocks.values()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyleSheet {
    // <selector> {<pair>;<pair>;} followed by a single space per block
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in self.blocks.values() {
            let pairs: Vec<String> = block.variables.iter().map(|v| v.to_string()).collect();
            write!(f, "{} {{{};}} ", block.selector, pairs.join(";"))?;
        }
        Ok(())
    }
}

pub mod fragment_reader;
pub mod merger;
pub mod path_resolver;
pub mod resolver;
pub mod serializer;
pub mod theme_reader;
pub mod theme_selector;

pub use crate::domain::model::{
    AncestorChain, ContentShape, FieldDeclaration, FragmentData, Overrides, PageSnapshot,
    PropertyKeys, Record, ResolvedVariable, SkipReason, SkippedFragment, StyleBlock,
    StyleFragment, ThemePointer,
};
pub use crate::domain::ports::{ConfigProvider, ContentStore, FragmentLoad, ThemeSource};
pub use crate::utils::error::Result;

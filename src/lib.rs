pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{HttpStore, JsonTreeStore};
pub use core::{
    resolver::{ThemeResolution, ThemeResolver},
    serializer::StyleSheet,
    theme_selector::ThemeSelector,
};
pub use utils::error::{Result, ThemeError};

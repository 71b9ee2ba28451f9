use crate::config::TomlConfig;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "theme-css")]
#[command(about = "Resolve a page's inherited theme into CSS custom properties")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "theme-css.toml")]
    pub config: String,

    /// Absolute path of the page to resolve
    #[arg(short, long)]
    pub page: String,

    /// Read content from this JSON export instead of the configured store
    #[arg(long)]
    pub store_file: Option<String>,

    /// Print the component JSON export instead of bare CSS
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 將命令列覆蓋設定套用到 TOML 配置
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(path) = &self.store_file {
            config.store.r#type = "file".to_string();
            config.store.path = Some(path.clone());
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_content_path("page", &self.page)?;
        if let Some(path) = &self.store_file {
            validation::validate_path("store_file", path)?;
        }
        Ok(())
    }
}

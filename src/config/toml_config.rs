use crate::adapters::{Credentials, HttpStore, JsonTreeStore};
use crate::core::{ConfigProvider, ContentShape, ContentStore, PropertyKeys};
use crate::utils::error::{Result, ThemeError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub store: StoreConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub keys: PropertyKeys,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub r#type: String,
    pub path: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(default)]
    pub shape: ContentShape,
    #[serde(default = "default_page_content_node")]
    pub page_content_node: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            shape: ContentShape::default(),
            page_content_node: default_page_content_node(),
        }
    }
}

fn default_page_content_node() -> String {
    "jcr:content".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ThemeError::Io)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ThemeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${AUTHOR_PASSWORD})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ThemeError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        match self.store.r#type.as_str() {
            "file" => {
                let path = validation::validate_required_field("store.path", &self.store.path)?;
                validation::validate_path("store.path", path)?;
            }
            "http" => {
                let endpoint =
                    validation::validate_required_field("store.endpoint", &self.store.endpoint)?;
                validation::validate_url("store.endpoint", endpoint)?;
                if self.store.username.is_some() != self.store.password.is_some() {
                    return Err(ThemeError::ConfigValidationError {
                        field: "store.username".to_string(),
                        message: "username and password must be set together".to_string(),
                    });
                }
            }
            other => {
                return Err(ThemeError::InvalidConfigValueError {
                    field: "store.type".to_string(),
                    value: other.to_string(),
                    reason: "Unsupported store. Valid stores: file, http".to_string(),
                });
            }
        }

        validation::validate_range("store.timeout_seconds", self.timeout_seconds(), 1, 300)?;
        validation::validate_non_empty_string(
            "content.page_content_node",
            &self.content.page_content_node,
        )?;
        validation::validate_non_empty_string("keys.theme_pointer", &self.keys.theme_pointer)?;
        validation::validate_non_empty_string("keys.fragment_paths", &self.keys.fragment_paths)?;
        validation::validate_non_empty_string("keys.class_name", &self.keys.class_name)?;
        validation::validate_non_empty_string(
            "keys.default_selector",
            &self.keys.default_selector,
        )?;

        Ok(())
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.store.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    /// Opens the content store named by `[store] type`.
    pub fn open_store(&self) -> Result<Box<dyn ContentStore>> {
        match self.store.r#type.as_str() {
            "file" => {
                let path = validation::validate_required_field("store.path", &self.store.path)?;
                Ok(Box::new(JsonTreeStore::from_file(path)?))
            }
            "http" => {
                let endpoint =
                    validation::validate_required_field("store.endpoint", &self.store.endpoint)?;
                let credentials = match (&self.store.username, &self.store.password) {
                    (Some(username), Some(password)) => Some(Credentials {
                        username: username.clone(),
                        password: password.clone(),
                    }),
                    _ => None,
                };
                let timeout = Duration::from_secs(self.timeout_seconds());
                Ok(Box::new(HttpStore::new(endpoint, timeout, credentials)?))
            }
            other => Err(ThemeError::InvalidConfigValueError {
                field: "store.type".to_string(),
                value: other.to_string(),
                reason: "Unsupported store. Valid stores: file, http".to_string(),
            }),
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn keys(&self) -> &PropertyKeys {
        &self.keys
    }

    fn content_shape(&self) -> ContentShape {
        self.content.shape
    }

    fn page_content_node(&self) -> &str {
        &self.content.page_content_node
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_minimal_config_uses_defaults() {
        let toml_content = r#"
[store]
type = "file"
path = "content.json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.content_shape(), ContentShape::Node);
        assert_eq!(config.page_content_node(), "jcr:content");
        assert_eq!(config.keys(), &PropertyKeys::default());
        assert_eq!(config.timeout_seconds(), 10);
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[store]
type = "http"
endpoint = "http://localhost:4502"
timeout_seconds = 5
username = "admin"
password = "admin"

[content]
shape = "structured"
page_content_node = "content"

[keys]
theme_pointer = "theme"
class_name = "selector"

[logging]
level = "debug"
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.content_shape(), ContentShape::Structured);
        assert_eq!(config.page_content_node(), "content");
        assert_eq!(config.keys.theme_pointer, "theme");
        assert_eq!(config.keys.class_name, "selector");
        assert_eq!(config.keys.fragment_paths, "cssCFPath");
        assert_eq!(config.keys.default_selector, ":root");
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("THEME_CSS_TEST_PASSWORD", "s3cret");

        let toml_content = r#"
[store]
type = "http"
endpoint = "https://author.example.com"
username = "reader"
password = "${THEME_CSS_TEST_PASSWORD}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.store.password.as_deref(), Some("s3cret"));

        std::env::remove_var("THEME_CSS_TEST_PASSWORD");
    }

    #[test]
    fn test_config_validation() {
        let bad_endpoint = TomlConfig::from_toml_str(
            r#"
[store]
type = "http"
endpoint = "invalid-url"
"#,
        )
        .unwrap();
        assert!(bad_endpoint.validate().is_err());

        let bad_type = TomlConfig::from_toml_str(
            r#"
[store]
type = "ftp"
"#,
        )
        .unwrap();
        assert!(bad_type.validate().is_err());

        let missing_path = TomlConfig::from_toml_str(
            r#"
[store]
type = "file"
"#,
        )
        .unwrap();
        assert!(matches!(
            missing_path.validate(),
            Err(ThemeError::MissingConfigError { .. })
        ));

        let blank_key = TomlConfig::from_toml_str(
            r#"
[store]
type = "file"
path = "content.json"

[keys]
class_name = " "
"#,
        )
        .unwrap();
        assert!(blank_key.validate().is_err());
    }

    #[test]
    fn test_unknown_shape_fails_to_parse() {
        let result = TomlConfig::from_toml_str(
            r#"
[store]
type = "file"
path = "content.json"

[content]
shape = "graphql"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_config_from_file_and_open_store() {
        let mut content_file = NamedTempFile::new().unwrap();
        content_file
            .write_all(br#"{"themes": {"main": {"cssCFPath": "/styles/a"}}}"#)
            .unwrap();

        let mut temp_file = NamedTempFile::new().unwrap();
        let toml_content = format!(
            "[store]\ntype = \"file\"\npath = \"{}\"\n",
            content_file.path().display().to_string().replace('\\', "/")
        );
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        let store = config.open_store().unwrap();
        assert!(store.get("/themes/main").unwrap().is_some());
    }
}

use crate::core::{ContentStore, Record, Result};
use crate::utils::error::ThemeError;
use serde_json::Value;
use std::path::Path;

/// In-memory content tree in the Sling JSON export shape.
#[derive(Debug, Clone)]
pub struct JsonTreeStore {
    root: Value,
}

impl JsonTreeStore {
    pub fn from_value(root: Value) -> Result<Self> {
        if !root.is_object() {
            return Err(ThemeError::ConfigError {
                message: "content tree root must be a JSON object".to_string(),
            });
        }
        Ok(Self { root })
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(content)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Loaded content tree from {}", path.as_ref().display());
        Self::from_json_str(&content)
    }
}

impl ContentStore for JsonTreeStore {
    fn get(&self, path: &str) -> Result<Option<Record>> {
        if !path.starts_with('/') {
            return Ok(None);
        }

        let mut node = &self.root;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            match node.get(segment) {
                Some(child) if child.is_object() => node = child,
                _ => return Ok(None),
            }
        }

        let normalized = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        Ok(Record::from_json(normalized, node))
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

pub type Properties = Map<String, Value>;

/// Per-fragment override values keyed by field name.
pub type Overrides = HashMap<String, String>;

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// 將單一屬性值轉成字串 (純量才會轉換)
pub fn coerce_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// A record read from a content store: its own properties plus ordered children.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub path: String,
    pub properties: Properties,
    pub children: Vec<Record>,
}

impl Record {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            properties: Properties::new(),
            children: Vec::new(),
        }
    }

    /// Converts a Sling-style JSON tree: objects become children, everything else a property.
    pub fn from_json(path: &str, value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let mut record = Record::new(path);

        for (key, value) in obj {
            if value.is_object() {
                let child_path = join_path(path, key);
                if let Some(child) = Record::from_json(&child_path, value) {
                    record.children.push(child);
                }
            } else {
                record.properties.insert(key.clone(), value.clone());
            }
        }

        Some(record)
    }

    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or("")
    }

    pub fn get_str(&self, key: &str) -> Option<String> {
        self.properties.get(key).and_then(coerce_scalar)
    }

    pub fn get_str_or(&self, key: &str, default: &str) -> String {
        self.get_str(key).unwrap_or_else(|| default.to_string())
    }

    /// 讀取多值屬性；單一字串視為一個元素的陣列
    pub fn get_str_array(&self, key: &str) -> Vec<String> {
        match self.properties.get(key) {
            Some(Value::Array(items)) => items.iter().filter_map(coerce_scalar).collect(),
            Some(value) => coerce_scalar(value).into_iter().collect(),
            None => Vec::new(),
        }
    }

    /// Scalar properties as a string map; arrays and nulls are not override values.
    pub fn scalar_properties(&self) -> Overrides {
        self.properties
            .iter()
            .filter_map(|(k, v)| coerce_scalar(v).map(|s| (k.clone(), s)))
            .collect()
    }

    pub fn child(&self, name: &str) -> Option<&Record> {
        self.children.iter().find(|c| c.name() == name)
    }

    /// Follows a relative path such as `jcr:content/data/master`.
    pub fn descendant(&self, relative: &str) -> Option<&Record> {
        relative
            .split('/')
            .filter(|s| !s.is_empty())
            .try_fold(self, |record, segment| record.child(segment))
    }
}

pub fn join_path(parent: &str, name: &str) -> String {
    if parent.ends_with('/') {
        format!("{}{}", parent, name)
    } else {
        format!("{}/{}", parent, name)
    }
}

/// Number of path segments: `/content` is 1, `/content/site` is 2.
pub fn path_depth(path: &str) -> usize {
    path.split('/').filter(|s| !s.is_empty()).count()
}

pub fn parent_path(path: &str) -> Option<String> {
    let trimmed = path.trim_end_matches('/');
    let idx = trimmed.rfind('/')?;
    if idx == 0 {
        if trimmed.len() > 1 {
            Some("/".to_string())
        } else {
            None
        }
    } else {
        Some(trimmed[..idx].to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageSnapshot {
    pub path: String,
    pub depth: usize,
    pub properties: Properties,
}

impl PageSnapshot {
    pub fn new(path: impl Into<String>, properties: Properties) -> Self {
        let path = path.into();
        Self {
            depth: path_depth(&path),
            path,
            properties,
        }
    }

    pub fn get_str_or(&self, key: &str, default: &str) -> String {
        self.properties
            .get(key)
            .and_then(coerce_scalar)
            .unwrap_or_else(|| default.to_string())
    }
}

/// Immutable page ancestry, ordered from the current page up towards the root.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AncestorChain {
    pages: Vec<PageSnapshot>,
}

impl AncestorChain {
    pub fn new(pages: Vec<PageSnapshot>) -> Self {
        Self { pages }
    }

    pub fn current(&self) -> Option<&PageSnapshot> {
        self.pages.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageSnapshot> {
        self.pages.iter()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePointer(String);

impl ThemePointer {
    /// Blank values never form a pointer.
    pub fn parse(value: &str) -> Option<Self> {
        if is_blank(value) {
            None
        } else {
            Some(Self(value.trim().to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThemePointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    pub name: String,
    pub label: String,
    pub default_value: String,
}

impl FieldDeclaration {
    pub fn new(name: &str, label: &str, default_value: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            default_value: default_value.to_string(),
        }
    }
}

/// Raw fragment data as read through a [`crate::domain::ports::ThemeSource`].
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentData {
    pub fields: Vec<FieldDeclaration>,
    pub overrides: Overrides,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleFragment {
    pub path: String,
    pub selector: String,
    pub fields: Vec<FieldDeclaration>,
    pub overrides: Overrides,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVariable {
    pub label: String,
    pub value: String,
}

impl fmt::Display for ResolvedVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleBlock {
    pub selector: String,
    pub variables: Vec<ResolvedVariable>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NotFound,
    MissingOverrides,
    MissingModel,
    MalformedModel(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotFound => write!(f, "fragment not found"),
            SkipReason::MissingOverrides => write!(f, "override values missing"),
            SkipReason::MissingModel => write!(f, "fragment model missing"),
            SkipReason::MalformedModel(detail) => write!(f, "malformed model: {}", detail),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFragment {
    pub path: String,
    pub reason: SkipReason,
}

/// Content-authoring contract: property names the pipeline reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyKeys {
    pub theme_pointer: String,
    pub fragment_paths: String,
    pub class_name: String,
    pub default_selector: String,
}

impl Default for PropertyKeys {
    fn default() -> Self {
        Self {
            theme_pointer: "themeCFPath".to_string(),
            fragment_paths: "cssCFPath".to_string(),
            class_name: "cssCN".to_string(),
            default_selector: ":root".to_string(),
        }
    }
}

/// Layout of theme and style records inside the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentShape {
    #[default]
    Node,
    Structured,
}

//! UMD configuration carried inside the `// fid-umd {...}` marker.
//!
//! The marker JSON is the only configuration a wrapped file has. It is read
//! leniently: unknown keys are dropped and values of the wrong type fall back
//! to their defaults instead of failing. It is written back minimally so that
//! re-running the tool on unchanged input yields a byte-identical marker.
//!
//! # Marker Format
//!
//! ```text
//! // fid-umd {"name":"Widget","jslint":1,"depends":["One",{"name":"Two","root":"TwoGlobal"}]}
//! ```
//!
//! | key | kind | default |
//! |-----|------|---------|
//! | `name` | string | `"Unknown"` |
//! | `debug` | boolean | `false` |
//! | `jslint` | boolean | `false` |
//! | `global` | boolean | `false` |
//! | `depends` | array | `[]` |
//!
//! Keys are written in that table order. Booleans are written as `1` and
//! false, empty, or default-less values are omitted entirely.
//!
//! # Example
//!
//! ```rust
//! use fid_umd::config::Config;
//! use serde_json::json;
//!
//! let config = Config::from_json(&json!({"name": "Widget", "depends": ["A", "B"], "jslint": true}));
//! assert_eq!(config.dependency_names(), vec!["A", "B"]);
//! assert_eq!(config.export(), r#"{"name":"Widget","jslint":1,"depends":["A","B"]}"#);
//! ```

pub mod dependency;

pub use dependency::{COMMONJS_MODULE_KEY, DependencyField, DependencySpec, DetailedDependency, Dependency};

use serde::Serialize;
use serde_json::Value;
use tracing::trace;

use crate::constants::DEFAULT_MODULE_NAME;

/// Normalized configuration for one generation cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Exported module name
    pub name: String,
    /// Emit `console.log` diagnostics in the generated loader
    pub debug: bool,
    /// Emit jslint-friendly pragmas and formatting
    pub jslint: bool,
    /// Run the factory with the root object as `this`
    pub global: bool,
    /// Dependencies in factory parameter order
    pub depends: Vec<Dependency>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: DEFAULT_MODULE_NAME.to_string(),
            debug: false,
            jslint: false,
            global: false,
            depends: Vec::new(),
        }
    }
}

/// The minimal marker object. Field order is the serialized key order.
#[derive(Debug, Serialize)]
struct MarkerConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    debug: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    jslint: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    global: Option<u8>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    depends: Vec<DependencySpec>,
}

impl Config {
    /// Create a configuration with every field at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a parsed marker payload into a configuration.
    ///
    /// Never fails: anything that is not a JSON object yields the defaults.
    #[must_use]
    pub fn from_json(raw: &Value) -> Self {
        let mut config = Self::new();
        config.load(raw);
        config
    }

    /// Merge a parsed marker payload into this configuration.
    ///
    /// Every known key is coerced by kind, so a key that is absent resets the
    /// field to its default:
    /// - string: kept only when it is a non-empty string
    /// - boolean: JavaScript truthiness of the value
    /// - array: kept only when it is a non-empty array, then each element is
    ///   expanded with [`Dependency::expand`]
    pub fn load(&mut self, raw: &Value) -> &mut Self {
        let empty = serde_json::Map::new();
        let object = raw.as_object().unwrap_or(&empty);

        self.name = match object.get("name") {
            Some(Value::String(name)) if !name.is_empty() => name.clone(),
            _ => DEFAULT_MODULE_NAME.to_string(),
        };
        self.debug = object.get("debug").is_some_and(is_truthy);
        self.jslint = object.get("jslint").is_some_and(is_truthy);
        self.global = object.get("global").is_some_and(is_truthy);
        self.depends = match object.get("depends") {
            Some(Value::Array(entries)) => entries.iter().map(Dependency::expand).collect(),
            _ => Vec::new(),
        };

        trace!(
            name = %self.name,
            dependencies = self.depends.len(),
            "Loaded marker configuration"
        );
        self
    }

    /// Serialize to the compact marker JSON.
    #[must_use]
    pub fn export(&self) -> String {
        let flag = |enabled: bool| enabled.then_some(1u8);
        let marker = MarkerConfig {
            name: Some(self.name.as_str()).filter(|name| !name.is_empty()),
            debug: flag(self.debug),
            jslint: flag(self.jslint),
            global: flag(self.global),
            depends: self.depends.iter().map(Dependency::condense).collect(),
        };

        // Strings and small integers always serialize
        serde_json::to_string(&marker).unwrap_or_else(|_| String::from("{}"))
    }

    /// Project one per-system field across the dependency list.
    #[must_use]
    pub fn dependency_values(&self, field: DependencyField) -> Vec<&str> {
        self.depends.iter().map(|dep| dep.field(field)).collect()
    }

    /// Factory parameter names, in order.
    #[must_use]
    pub fn dependency_names(&self) -> Vec<&str> {
        self.depends.iter().map(|dep| dep.name.as_str()).collect()
    }

    /// Project a property by marker key. Slots are `None` when the key is not
    /// a dependency property.
    #[must_use]
    pub fn dependency_values_by_key(&self, key: &str) -> Vec<Option<&str>> {
        self.depends.iter().map(|dep| dep.get(key)).collect()
    }
}

/// JavaScript truthiness of a JSON value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

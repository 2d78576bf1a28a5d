//! Sample JavaScript sources for tests.

use serde_json::Value;

/// A named JavaScript source text.
#[derive(Clone, Debug)]
pub struct SourceFixture {
    /// File name used when the fixture is written to disk
    pub name: String,
    /// Full file content
    pub content: String,
}

impl SourceFixture {
    /// A module body that has never been wrapped.
    pub fn plain_body() -> Self {
        Self {
            name: "plain.js".to_string(),
            content: "function Widget() {}\n\nreturn Widget;\n".to_string(),
        }
    }

    /// A body preceded by only a configuration marker, as a user would write
    /// it before the first run.
    pub fn with_marker(config: &Value, body: &str) -> Self {
        Self {
            name: "marked.js".to_string(),
            content: format!("// fid-umd {config}\n{body}"),
        }
    }

    /// A marker whose payload is not valid JSON.
    pub fn malformed_marker() -> Self {
        Self {
            name: "malformed.js".to_string(),
            content: "// fid-umd {{}\nCODE\n".to_string(),
        }
    }

    /// Rename the fixture.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

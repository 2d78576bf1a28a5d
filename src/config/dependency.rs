//! Dependency types for the UMD configuration.
//!
//! A dependency is written in the marker in one of two shapes:
//! - `DependencySpec::Simple`: a bare name used for every module system
//! - `DependencySpec::Detailed`: a `name` plus per-system overrides
//!
//! In memory every dependency is held in the expanded [`Dependency`] form so
//! the loader generators never have to consider missing fields.
//! [`Dependency::condense`] and [`Dependency::from_spec`] convert between the
//! two and are inverses of each other.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::DEFAULT_MODULE_NAME;

/// Per-module-system fields of a dependency.
///
/// The declaration order is the order in which overrides are written when a
/// dependency is condensed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyField {
    /// Module name or path given to an AMD `define`
    Amd,
    /// File passed to `require()` under CommonJS
    Commonjs,
    /// Module name for the modulejs registry
    Modulejs,
    /// Module or file passed to `require()` under Node.js
    Nodejs,
    /// Module name or path for RequireJS
    Requirejs,
    /// Property read off the root object
    Root,
    /// YUI module name
    Yui,
}

impl DependencyField {
    /// Every per-system field, in condensed output order.
    pub const ALL: [Self; 7] = [
        Self::Amd,
        Self::Commonjs,
        Self::Modulejs,
        Self::Nodejs,
        Self::Requirejs,
        Self::Root,
        Self::Yui,
    ];

    /// Key used for this field in the marker JSON.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Amd => "amd",
            Self::Commonjs => "commonjs",
            Self::Modulejs => "modulejs",
            Self::Nodejs => "nodejs",
            Self::Requirejs => "requirejs",
            Self::Root => "root",
            Self::Yui => "yui",
        }
    }

    /// Look a field up by its marker key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

/// Key of the CommonJS secondary lookup (`require(file).module`).
pub const COMMONJS_MODULE_KEY: &str = "commonjsmod";

/// A dependency as written in the marker JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependencySpec {
    /// Same identifier for every module system, e.g. `"jQuery"`
    Simple(String),

    /// Name plus the overrides that differ from it
    Detailed(DetailedDependency),
}

/// Condensed dependency record. Only overrides that differ from `name` are
/// present; serialization skips the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedDependency {
    /// Parameter name inside the factory function
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commonjs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modulejs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodejs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirejs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yui: Option<String>,
    /// Property taken off the CommonJS export
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commonjsmod: Option<String>,
}

impl DetailedDependency {
    fn field(&self, field: DependencyField) -> Option<&String> {
        match field {
            DependencyField::Amd => self.amd.as_ref(),
            DependencyField::Commonjs => self.commonjs.as_ref(),
            DependencyField::Modulejs => self.modulejs.as_ref(),
            DependencyField::Nodejs => self.nodejs.as_ref(),
            DependencyField::Requirejs => self.requirejs.as_ref(),
            DependencyField::Root => self.root.as_ref(),
            DependencyField::Yui => self.yui.as_ref(),
        }
    }

    fn field_mut(&mut self, field: DependencyField) -> &mut Option<String> {
        match field {
            DependencyField::Amd => &mut self.amd,
            DependencyField::Commonjs => &mut self.commonjs,
            DependencyField::Modulejs => &mut self.modulejs,
            DependencyField::Nodejs => &mut self.nodejs,
            DependencyField::Requirejs => &mut self.requirejs,
            DependencyField::Root => &mut self.root,
            DependencyField::Yui => &mut self.yui,
        }
    }

    /// Build a record from loosely-typed JSON.
    ///
    /// Values that are not non-empty strings are treated as absent, and
    /// unknown keys are dropped.
    fn from_json_object(object: &serde_json::Map<String, Value>) -> Self {
        let string_at = |key: &str| match object.get(key) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        };

        let mut detailed = Self {
            name: string_at("name").unwrap_or_default(),
            commonjsmod: string_at(COMMONJS_MODULE_KEY),
            ..Self::default()
        };

        for field in DependencyField::ALL {
            *detailed.field_mut(field) = string_at(field.key());
        }

        detailed
    }
}

/// A fully expanded dependency: every per-system field is populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Parameter name inside the factory function
    pub name: String,
    pub amd: String,
    pub commonjs: String,
    pub modulejs: String,
    pub nodejs: String,
    pub requirejs: String,
    pub root: String,
    pub yui: String,
    /// Secondary CommonJS lookup; empty means "use the whole export"
    pub commonjsmod: String,
}

impl Dependency {
    /// Expand a bare name: every system uses the same identifier.
    #[must_use]
    pub fn simple(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            amd: name.clone(),
            commonjs: name.clone(),
            modulejs: name.clone(),
            nodejs: name.clone(),
            requirejs: name.clone(),
            root: name.clone(),
            yui: name.clone(),
            commonjsmod: String::new(),
            name,
        }
    }

    /// Expand a marker entry of any JSON shape.
    ///
    /// Strings use the [`simple`](Self::simple) form and objects go through
    /// [`from_spec`](Self::from_spec). Anything else carries no usable name
    /// and becomes the `Unknown` dependency.
    #[must_use]
    pub fn expand(input: &Value) -> Self {
        match input {
            Value::String(name) => Self::simple(name.as_str()),
            Value::Object(object) => {
                Self::from_spec(DependencySpec::Detailed(DetailedDependency::from_json_object(object)))
            }
            _ => Self::simple(DEFAULT_MODULE_NAME),
        }
    }

    /// Expand a typed marker entry.
    ///
    /// A missing or empty `name` becomes `Unknown`; missing overrides default
    /// to the name, except `commonjsmod` which defaults to empty.
    #[must_use]
    pub fn from_spec(spec: DependencySpec) -> Self {
        match spec {
            DependencySpec::Simple(name) => Self::simple(name),
            DependencySpec::Detailed(detailed) => {
                let name = if detailed.name.is_empty() {
                    DEFAULT_MODULE_NAME.to_string()
                } else {
                    detailed.name.clone()
                };

                let mut dependency = Self::simple(name);
                for field in DependencyField::ALL {
                    if let Some(value) = detailed.field(field).filter(|v| !v.is_empty()) {
                        *dependency.field_mut(field) = value.clone();
                    }
                }
                dependency.commonjsmod = detailed.commonjsmod.unwrap_or_default();
                dependency
            }
        }
    }

    /// Shrink to the smallest marker form.
    ///
    /// Overrides equal to `name` are dropped and `commonjsmod` is kept only
    /// when non-empty. When nothing but the name remains the bare string form
    /// is returned.
    #[must_use]
    pub fn condense(&self) -> DependencySpec {
        let mut detailed = DetailedDependency {
            name: self.name.clone(),
            ..DetailedDependency::default()
        };
        let mut has_overrides = false;

        for field in DependencyField::ALL {
            let value = self.field(field);
            if value != self.name {
                *detailed.field_mut(field) = Some(value.to_string());
                has_overrides = true;
            }
        }

        if !self.commonjsmod.is_empty() {
            detailed.commonjsmod = Some(self.commonjsmod.clone());
            has_overrides = true;
        }

        if has_overrides {
            DependencySpec::Detailed(detailed)
        } else {
            DependencySpec::Simple(self.name.clone())
        }
    }

    /// Value of one per-system field.
    #[must_use]
    pub fn field(&self, field: DependencyField) -> &str {
        match field {
            DependencyField::Amd => &self.amd,
            DependencyField::Commonjs => &self.commonjs,
            DependencyField::Modulejs => &self.modulejs,
            DependencyField::Nodejs => &self.nodejs,
            DependencyField::Requirejs => &self.requirejs,
            DependencyField::Root => &self.root,
            DependencyField::Yui => &self.yui,
        }
    }

    fn field_mut(&mut self, field: DependencyField) -> &mut String {
        match field {
            DependencyField::Amd => &mut self.amd,
            DependencyField::Commonjs => &mut self.commonjs,
            DependencyField::Modulejs => &mut self.modulejs,
            DependencyField::Nodejs => &mut self.nodejs,
            DependencyField::Requirejs => &mut self.requirejs,
            DependencyField::Root => &mut self.root,
            DependencyField::Yui => &mut self.yui,
        }
    }

    /// Look any property up by its marker key, including `name` and
    /// `commonjsmod`. Unknown keys yield `None`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "name" => Some(&self.name),
            COMMONJS_MODULE_KEY => Some(&self.commonjsmod),
            _ => DependencyField::from_key(key).map(|field| self.field(field)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn all_fields(name: &str) -> Dependency {
        Dependency::simple(name)
    }

    #[test]
    fn test_expand_bare_name() {
        let dep = Dependency::expand(&json!("SomeName"));
        for field in DependencyField::ALL {
            assert_eq!(dep.field(field), "SomeName");
        }
        assert_eq!(dep.name, "SomeName");
        assert_eq!(dep.commonjsmod, "");
    }

    #[test]
    fn test_expand_empty_object_defaults_to_unknown() {
        let dep = Dependency::expand(&json!({}));
        assert_eq!(dep, all_fields("Unknown"));
    }

    #[test]
    fn test_expand_defaults_everything_to_name() {
        let dep = Dependency::expand(&json!({"name": "Elephant"}));
        assert_eq!(dep, all_fields("Elephant"));
    }

    #[test]
    fn test_expand_filters_unknown_properties() {
        let dep = Dependency::expand(&json!({
            "name": "Elephant",
            "garbage": true,
            "joiner": ", "
        }));
        assert_eq!(dep, all_fields("Elephant"));
    }

    #[test]
    fn test_expand_preserves_all_overrides() {
        let dep = Dependency::expand(&json!({
            "amd": "AMD",
            "commonjs": "CommonJS",
            "commonjsmod": "CommonJSMod",
            "modulejs": "ModuleJS",
            "name": "Name",
            "nodejs": "NodeJS",
            "requirejs": "RequireJS",
            "root": "Root",
            "yui": "YUI"
        }));
        assert_eq!(dep.name, "Name");
        assert_eq!(dep.amd, "AMD");
        assert_eq!(dep.commonjs, "CommonJS");
        assert_eq!(dep.commonjsmod, "CommonJSMod");
        assert_eq!(dep.modulejs, "ModuleJS");
        assert_eq!(dep.nodejs, "NodeJS");
        assert_eq!(dep.requirejs, "RequireJS");
        assert_eq!(dep.root, "Root");
        assert_eq!(dep.yui, "YUI");
    }

    #[test]
    fn test_expand_partial_overrides() {
        let dep = Dependency::expand(&json!({
            "name": "Template",
            "commonjs": "./template",
            "root": "TemplateThing"
        }));
        assert_eq!(dep.commonjs, "./template");
        assert_eq!(dep.root, "TemplateThing");
        assert_eq!(dep.amd, "Template");
        assert_eq!(dep.requirejs, "Template");
        assert_eq!(dep.yui, "Template");
        assert_eq!(dep.modulejs, "Template");
        assert_eq!(dep.nodejs, "Template");
        assert_eq!(dep.commonjsmod, "");
    }

    #[test]
    fn test_expand_ignores_non_string_overrides() {
        let dep = Dependency::expand(&json!({"name": "Thing", "root": 12, "amd": ""}));
        assert_eq!(dep, all_fields("Thing"));
    }

    #[test]
    fn test_expand_other_json_kinds() {
        assert_eq!(Dependency::expand(&json!(42)), all_fields("Unknown"));
        assert_eq!(Dependency::expand(&json!(null)), all_fields("Unknown"));
        assert_eq!(Dependency::expand(&json!(["a"])), all_fields("Unknown"));
    }

    #[test]
    fn test_condense_keeps_unique_values() {
        let dep = Dependency {
            name: "Name".to_string(),
            amd: "AMD".to_string(),
            commonjs: "CommonJS".to_string(),
            modulejs: "ModuleJS".to_string(),
            nodejs: "NodeJS".to_string(),
            requirejs: "RequireJS".to_string(),
            root: "Root".to_string(),
            yui: "YUI".to_string(),
            commonjsmod: "CommonJSMod".to_string(),
        };
        let spec = dep.condense();
        let json = serde_json::to_string(&spec).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Name","amd":"AMD","commonjs":"CommonJS","modulejs":"ModuleJS","nodejs":"NodeJS","requirejs":"RequireJS","root":"Root","yui":"YUI","commonjsmod":"CommonJSMod"}"#
        );
    }

    #[test]
    fn test_condense_removes_values_matching_name() {
        let mut dep = Dependency::simple("Template");
        dep.commonjs = "./template".to_string();
        dep.root = "TemplateThing".to_string();

        match dep.condense() {
            DependencySpec::Detailed(detailed) => {
                assert_eq!(detailed.name, "Template");
                assert_eq!(detailed.commonjs.as_deref(), Some("./template"));
                assert_eq!(detailed.root.as_deref(), Some("TemplateThing"));
                assert!(detailed.amd.is_none());
                assert!(detailed.yui.is_none());
                assert!(detailed.commonjsmod.is_none());
            }
            other => panic!("expected detailed form, got {other:?}"),
        }
    }

    #[test]
    fn test_condense_to_bare_string() {
        let dep = Dependency::simple("Library");
        assert_eq!(dep.condense(), DependencySpec::Simple("Library".to_string()));
        assert_eq!(serde_json::to_string(&dep.condense()).unwrap(), r#""Library""#);
    }

    #[test]
    fn test_condense_only_commonjsmod() {
        let mut dep = Dependency::simple("Thing");
        dep.commonjsmod = "Thing".to_string();
        assert_eq!(
            serde_json::to_string(&dep.condense()).unwrap(),
            r#"{"name":"Thing","commonjsmod":"Thing"}"#
        );
    }

    #[test]
    fn test_expand_condense_inverse() {
        let mut detailed = Dependency::simple("Template");
        detailed.commonjs = "./template".to_string();
        detailed.commonjsmod = "Template".to_string();
        detailed.yui = "template-yui".to_string();

        for dep in [Dependency::simple("Plain"), detailed, Dependency::simple("Unknown")] {
            assert_eq!(Dependency::from_spec(dep.condense()), dep);

            let json = serde_json::to_value(dep.condense()).unwrap();
            assert_eq!(Dependency::expand(&json), dep);
        }
    }

    #[test]
    fn test_condense_expand_bare_string() {
        for name in ["one", "jQuery", "lodash.merge"] {
            let spec = Dependency::expand(&json!(name)).condense();
            assert_eq!(spec, DependencySpec::Simple(name.to_string()));
        }
    }

    #[test]
    fn test_spec_deserializes_both_shapes() {
        let specs: Vec<DependencySpec> =
            serde_json::from_str(r#"["One", {"name":"Two","root":"TwoGlobal"}]"#).unwrap();
        assert_eq!(specs[0], DependencySpec::Simple("One".to_string()));
        let two = Dependency::from_spec(specs[1].clone());
        assert_eq!(two.root, "TwoGlobal");
        assert_eq!(two.amd, "Two");
    }

    #[test]
    fn test_get_by_key() {
        let mut dep = Dependency::simple("Name");
        dep.commonjsmod = "Mod".to_string();
        assert_eq!(dep.get("name"), Some("Name"));
        assert_eq!(dep.get("yui"), Some("Name"));
        assert_eq!(dep.get("commonjsmod"), Some("Mod"));
        assert_eq!(dep.get("Name"), None);
    }
}

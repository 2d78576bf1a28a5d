//! Loader fragments, one per supported module system.
//!
//! Every module system contributes two strings to the preamble: a runtime
//! condition that detects the system (absent for the unconditional fallback)
//! and the statement that registers the factory with it. The set of systems
//! is closed, so it is modelled as the [`ModuleSystem`] enum and tried in the
//! fixed [`ModuleSystem::ORDER`]:
//!
//! 1. Node.js (`module.exports`)
//! 2. CommonJS (`exports`)
//! 3. AMD (`define.amd`)
//! 4. modulejs
//! 5. YUI
//! 6. root object (always matches, so it has to be last)
//!
//! Generation runs in two phases. [`Requirements::collect`] asks each system
//! which helper functions and ambient globals it needs; the preamble builder
//! then receives those requirements as input alongside the configuration.

mod amd;
mod commonjs;
mod modulejs;
mod nodejs;
mod root;
mod yui;

use serde_json::Value;

use crate::config::Config;

/// A module loading convention the generated wrapper can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleSystem {
    /// Node.js: replace `module.exports`
    Nodejs,
    /// CommonJS: add one property to `exports`
    Commonjs,
    /// Asynchronous module definition via `define`
    Amd,
    /// The modulejs named-module registry
    Modulejs,
    /// YUI's `YUI.add` namespace registry
    Yui,
    /// Property on the root (global) object
    Root,
}

impl ModuleSystem {
    /// Detection order in the generated wrapper.
    pub const ORDER: [Self; 6] = [
        Self::Nodejs,
        Self::Commonjs,
        Self::Amd,
        Self::Modulejs,
        Self::Yui,
        Self::Root,
    ];

    /// Short name, used in debug output of the generated code.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nodejs => "nodejs",
            Self::Commonjs => "commonjs",
            Self::Amd => "amd",
            Self::Modulejs => "modulejs",
            Self::Yui => "yui",
            Self::Root => "root",
        }
    }

    /// Runtime check for this system, or `None` when it always applies.
    #[must_use]
    pub fn condition(self, config: &Config) -> Option<String> {
        match self {
            Self::Nodejs => Some(nodejs::condition(config)),
            Self::Commonjs => Some(commonjs::condition(config)),
            Self::Amd => Some(amd::condition()),
            Self::Modulejs => Some(modulejs::condition()),
            Self::Yui => Some(yui::condition()),
            Self::Root => None,
        }
    }

    /// Statement that hands the factory to this system.
    #[must_use]
    pub fn loader(self, config: &Config) -> String {
        match self {
            Self::Nodejs => nodejs::loader(config),
            Self::Commonjs => commonjs::loader(config),
            Self::Amd => amd::loader(config),
            Self::Modulejs => modulejs::loader(config),
            Self::Yui => yui::loader(config),
            Self::Root => root::loader(config),
        }
    }

    /// Helper function the condition relies on, if any.
    #[must_use]
    pub const fn helper_function(self) -> Option<HelperFunction> {
        match self {
            Self::Root => None,
            _ => Some(HelperFunction::IsObject),
        }
    }

    /// Ambient global read by the generated condition, if any.
    #[must_use]
    pub const fn global_variable(self) -> Option<&'static str> {
        match self {
            Self::Nodejs => Some("module"),
            Self::Commonjs => Some("exports"),
            Self::Amd => Some("define"),
            Self::Modulejs => Some("modulejs"),
            Self::Yui => Some("YUI"),
            Self::Root => None,
        }
    }
}

/// Helper functions that can be emitted at the top of the wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HelperFunction {
    /// `isObject(x)`: `typeof x === "object"`
    IsObject,
}

impl HelperFunction {
    /// Source of the helper, indented for the wrapper body.
    #[must_use]
    pub const fn source(self, jslint: bool) -> &'static str {
        match (self, jslint) {
            (Self::IsObject, false) => "    function isObject(x) { return typeof x === \"object\"; }\n",
            (Self::IsObject, true) => {
                "    function isObject(x) {\n        return typeof x === \"object\";\n    }\n"
            }
        }
    }
}

/// Cross-cutting needs declared by the module systems in use.
///
/// Both lists keep first-declaration order and hold no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requirements {
    /// Helper functions to define before the loader chain
    pub functions: Vec<HelperFunction>,
    /// Ambient globals read by the conditions (for the jslint header)
    pub globals: Vec<&'static str>,
}

impl Requirements {
    /// Gather the needs of every listed system.
    #[must_use]
    pub fn collect(systems: &[ModuleSystem]) -> Self {
        let mut requirements = Self::default();
        for system in systems {
            if let Some(function) = system.helper_function() {
                requirements.need_function(function);
            }
            if let Some(global) = system.global_variable() {
                requirements.reference_global(global);
            }
        }
        requirements
    }

    fn need_function(&mut self, function: HelperFunction) {
        if !self.functions.contains(&function) {
            self.functions.push(function);
        }
    }

    fn reference_global(&mut self, name: &'static str) {
        if !self.globals.contains(&name) {
            self.globals.push(name);
        }
    }
}

/// Render a string as a double-quoted JavaScript string literal.
pub(crate) fn quote(value: &str) -> String {
    Value::from(value).to_string()
}

/// Comma-separated list of quoted strings, without brackets.
pub(crate) fn quoted_list(values: &[&str]) -> String {
    values.iter().map(|value| quote(value)).collect::<Vec<_>>().join(", ")
}

/// Property access that stays valid for any property name.
///
/// Identifiers use dot notation (`root.jQuery`); anything else falls back to
/// a bracketed string (`root["lodash.merge"]`).
pub(crate) fn member(object: &str, property: &str) -> String {
    if is_identifier(property) {
        format!("{object}.{property}")
    } else {
        format!("{object}[{}]", quote(property))
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

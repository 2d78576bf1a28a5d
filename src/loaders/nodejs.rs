//! Node.js: `module.exports = factory(require("dep"), ...);`

use super::quote;
use crate::config::{Config, DependencyField};

/// Node.js exposes `module` with an `exports` object on it.
///
/// Under jslint the first test uses `typeof`, which is safe when `module`
/// is not declared at all.
pub(super) fn condition(config: &Config) -> String {
    if config.jslint {
        return "(typeof module)[0] === \"o\" && isObject(module.exports)".to_string();
    }

    "isObject(module) && isObject(module.exports)".to_string()
}

pub(super) fn loader(config: &Config) -> String {
    let requires: Vec<String> = config
        .dependency_values(DependencyField::Nodejs)
        .into_iter()
        .map(|path| format!("require({})", quote(path)))
        .collect();

    format!("module.exports = factory({});", requires.join(", "))
}

//! CommonJS: `exports[name] = factory(require("file").Module, ...);`
//!
//! Only one property, named after the module, is added to `exports` so the
//! result lines up with the other module systems.

use super::{member, quote};
use crate::config::{Config, DependencyField};

pub(super) fn condition(config: &Config) -> String {
    if config.jslint {
        return "(typeof exports)[0] === \"o\"".to_string();
    }

    "isObject(exports)".to_string()
}

pub(super) fn loader(config: &Config) -> String {
    let requires: Vec<String> = config
        .depends
        .iter()
        .map(|dep| {
            let required = format!("require({})", quote(dep.field(DependencyField::Commonjs)));
            if dep.commonjsmod.is_empty() {
                required
            } else {
                member(&required, &dep.commonjsmod)
            }
        })
        .collect();

    format!("exports[name] = factory({});", requires.join(", "))
}

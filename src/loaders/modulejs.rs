//! modulejs: `root.modulejs.define(name, ["dep", ...], factory);`

use super::quoted_list;
use crate::config::{Config, DependencyField};

pub(super) fn condition() -> String {
    "isObject(root.modulejs)".to_string()
}

/// The dependency array is optional for modulejs and is left out when empty.
pub(super) fn loader(config: &Config) -> String {
    let modules = config.dependency_values(DependencyField::Modulejs);
    if modules.is_empty() {
        return "root.modulejs.define(name, factory);".to_string();
    }

    format!("root.modulejs.define(name, [{}], factory);", quoted_list(&modules))
}

//! AMD: `root.define(name, ["dep", ...], factory);`

use super::quoted_list;
use crate::config::{Config, DependencyField};

/// `define` only counts when it advertises AMD support through `define.amd`.
pub(super) fn condition() -> String {
    "isObject(root.define) && root.define.amd".to_string()
}

pub(super) fn loader(config: &Config) -> String {
    let modules = config.dependency_values(DependencyField::Amd);
    format!("root.define(name, [{}], factory);", quoted_list(&modules))
}

//! Root object fallback: `root[name] = factory(root.dep, ...);`
//!
//! Has no condition. Dependencies are assumed to be loaded already as
//! properties of the root object.

use super::member;
use crate::config::{Config, DependencyField};

pub(super) fn loader(config: &Config) -> String {
    let arguments: Vec<String> = config
        .dependency_values(DependencyField::Root)
        .into_iter()
        .map(|property| member("root", property))
        .collect();

    format!("root[name] = factory({});", arguments.join(", "))
}

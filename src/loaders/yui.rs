//! YUI: `root.YUI.add(name, function (Y) { Y[name] = factory(Y.dep); }, "", { requires: ["dep"] });`

use super::{member, quoted_list};
use crate::config::{Config, DependencyField};

pub(super) fn condition() -> String {
    "isObject(root.YUI)".to_string()
}

pub(super) fn loader(config: &Config) -> String {
    let modules = config.dependency_values(DependencyField::Yui);
    let arguments: Vec<String> = modules.iter().map(|module| member("Y", module)).collect();
    let call = format!("Y[name] = factory({});", arguments.join(", "));

    let mut code = if config.jslint {
        format!("root.YUI.add(name, function (Y) {{\n            {call}\n        }}")
    } else {
        format!("root.YUI.add(name, function (Y) {{ {call} }}")
    };

    if !modules.is_empty() {
        code.push_str(&format!(", \"\", {{ requires: [{}] }}", quoted_list(&modules)));
    }

    code.push_str(");");
    code
}

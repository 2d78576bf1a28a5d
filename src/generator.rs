//! Preamble and postamble text generation.
//!
//! The preamble opens a self-invoking wrapper that detects the module system
//! at runtime and hands the user's factory to the first one found. The
//! postamble closes that wrapper. Both are pure functions of their inputs so
//! repeated generation is byte-identical.

use tracing::trace;

use crate::config::Config;
use crate::constants::{MARKER_TOKEN, PREAMBLE_END_MARKER, POSTAMBLE_END_MARKER, POSTAMBLE_START_MARKER};
use crate::loaders::{ModuleSystem, Requirements, quote};

/// One `if (...) { ... }` link of the loader chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderBranch {
    /// Module system name used in debug output
    pub name: &'static str,
    /// Guard expression; `None` renders a bare `else` block
    pub condition: Option<String>,
    /// Statement executed when the guard holds
    pub loader: String,
}

impl LoaderBranch {
    /// Render one module system's branch for a configuration.
    #[must_use]
    pub fn for_system(system: ModuleSystem, config: &Config) -> Self {
        Self {
            name: system.name(),
            condition: system.condition(config),
            loader: system.loader(config),
        }
    }
}

/// Build the full preamble for every supported module system.
#[must_use]
pub fn create_preamble(config: &Config, requirements: &Requirements) -> String {
    let branches: Vec<LoaderBranch> =
        ModuleSystem::ORDER.iter().map(|system| LoaderBranch::for_system(*system, config)).collect();
    let preamble = assemble_preamble(config, requirements, &branches);
    trace!(bytes = preamble.len(), "Generated preamble");
    preamble
}

/// Build a preamble around an explicit loader chain.
#[must_use]
pub fn assemble_preamble(config: &Config, requirements: &Requirements, branches: &[LoaderBranch]) -> String {
    let mut preamble = format!("// {MARKER_TOKEN} {}\n", config.export());

    if config.jslint {
        preamble.push_str("/*jslint this*/\n");
    }

    preamble.push_str(&jslint_global_variables(config, requirements));

    if config.global {
        preamble.push_str("(function (name, root, factoryForGlobal) {\n");
    } else {
        preamble.push_str("(function (name, root, factory) {\n");
    }

    if config.jslint {
        preamble.push_str("    \"use strict\";\n");
    }

    if config.global {
        preamble.push_str(&create_preamble_global_scope(config));
    }

    preamble.push_str(&write_needed_functions(config, requirements));

    if config.debug {
        preamble.push_str("    console.log(\"Attempting to define \" + name);\n");
    }

    for (index, branch) in branches.iter().enumerate() {
        preamble.push_str(if index == 0 { "    " } else { " else " });

        if let Some(condition) = &branch.condition {
            preamble.push_str(&format!("if ({condition}) "));
        }

        preamble.push_str("{\n");

        if config.debug {
            preamble.push_str(&format!("        console.log(\"{} detected\");\n", branch.name));
        }

        preamble.push_str(&format!("        {}\n", branch.loader));

        if config.debug {
            preamble.push_str(&format!("        console.log(\"{} success\");\n", branch.name));
        }

        preamble.push_str("    }");
    }

    preamble.push('\n');
    preamble.push_str(&format!(
        "}}({}, this, function ({}) {{\n",
        quote(&config.name),
        config.dependency_names().join(", ")
    ));

    if config.jslint {
        preamble.push_str("    \"use strict\";\n");
    }

    preamble.push_str(PREAMBLE_END_MARKER);
    preamble
}

/// The fixed footer closing the wrapper opened by the preamble.
#[must_use]
pub fn create_postamble() -> String {
    format!("{POSTAMBLE_START_MARKER}}}));\n{POSTAMBLE_END_MARKER}")
}

/// Adapter that runs the real factory with the root object as `this`.
fn create_preamble_global_scope(config: &Config) -> String {
    let dependencies = config.dependency_names().join(", ");
    let mut code = format!("    function factory({dependencies}) {{ return factoryForGlobal.call(root");

    if !dependencies.is_empty() {
        code.push_str(", ");
        code.push_str(&dependencies);
    }

    code.push_str("); };\n");
    code
}

/// `/* global ... */` declaration so jslint accepts the ambient lookups.
fn jslint_global_variables(config: &Config, requirements: &Requirements) -> String {
    if !config.jslint || requirements.globals.is_empty() {
        return String::new();
    }

    format!("/* global {} */\n", requirements.globals.join(", "))
}

fn write_needed_functions(config: &Config, requirements: &Requirements) -> String {
    requirements.functions.iter().map(|function| function.source(config.jslint)).collect()
}

//! End-to-end properties of `fid_umd::update`.

use fid_umd::test_utils::{SourceFixture, init_test_logging};
use fid_umd::{Config, UmdError, detect_config, update};
use serde_json::json;

const PREAMBLE_START: &str = "// fid-umd {";
const PREAMBLE_END: &str = "    // fid-umd end\n";
const POSTAMBLE_START: &str = "    // fid-umd post\n";
const POSTAMBLE_END: &str = "// fid-umd post-end\n";

fn positions(text: &str, needle: &str) -> Vec<usize> {
    text.match_indices(needle).map(|(index, _)| index).collect()
}

#[test]
fn test_update_is_idempotent_for_plain_body() {
    init_test_logging(None);

    let once = update(&SourceFixture::plain_body().content).unwrap();
    let twice = update(&once).unwrap();
    assert_eq!(twice, once);
}

#[test]
fn test_update_is_idempotent_for_every_flag_combination() {
    for debug in [false, true] {
        for jslint in [false, true] {
            for global in [false, true] {
                let config = json!({
                    "name": "Flags",
                    "debug": debug,
                    "jslint": jslint,
                    "global": global,
                    "depends": ["A", {"name": "B", "yui": "b-mod", "commonjsmod": "B"}]
                });
                let fixture = SourceFixture::with_marker(&config, "return 1;\n");

                let once = update(&fixture.content).unwrap();
                assert_eq!(update(&once).unwrap(), once, "not idempotent for {config}");
            }
        }
    }
}

#[test]
fn test_first_wrap_places_body_between_generated_parts() {
    let body = "var x = 1;\nreturn x;\n";
    let result = update(body).unwrap();

    assert!(result.starts_with(PREAMBLE_START));
    assert!(result.ends_with(POSTAMBLE_END));

    let body_start = result.find(PREAMBLE_END).unwrap() + PREAMBLE_END.len();
    let body_end = result.find(POSTAMBLE_START).unwrap();
    assert_eq!(&result[body_start..body_end], body);
}

#[test]
fn test_first_wrap_body_without_trailing_newline() {
    let result = update("return 1;").unwrap();
    assert!(result.contains("    // fid-umd end\nreturn 1;\n    // fid-umd post\n"));
}

#[test]
fn test_empty_input_has_each_marker_once_in_order() {
    let result = update("").unwrap();

    let start = positions(&result, PREAMBLE_START);
    let end = positions(&result, PREAMBLE_END);
    let post = positions(&result, POSTAMBLE_START);
    let post_end = positions(&result, POSTAMBLE_END);
    assert_eq!((start.len(), end.len(), post.len(), post_end.len()), (1, 1, 1, 1));
    assert!(start[0] < end[0] && end[0] < post[0] && post[0] < post_end[0]);

    assert!(result.starts_with("// fid-umd {\"name\":\"Unknown\"}\n"));
}

#[test]
fn test_loader_branches_in_fixed_order() {
    let result = update("").unwrap();
    let loaders = [
        "module.exports = factory(",
        "exports[name] = factory(",
        "root.define(name,",
        "root.modulejs.define(name,",
        "root.YUI.add(name,",
        "root[name] = factory(",
    ];

    let found: Vec<usize> = loaders.iter().map(|loader| result.find(loader).unwrap()).collect();
    assert!(found.windows(2).all(|pair| pair[0] < pair[1]), "order was {found:?}");
    assert!(result.contains("    } else {\n        root[name] = factory();\n    }\n"));
    assert_eq!(positions(&result, " else if (").len(), 4);
}

#[test]
fn test_existing_marker_keeps_body_verbatim() {
    let input = "// fid-umd {\"name\":\"Widget\",\"depends\":[\"A\",\"B\"]}\nCODE";
    let result = update(input).unwrap();

    assert!(result.starts_with("// fid-umd {\"name\":\"Widget\",\"depends\":[\"A\",\"B\"]}\n"));
    assert!(result.contains("}(\"Widget\", this, function (A, B) {\n    // fid-umd end\nCODE\n    // fid-umd post\n"));
    assert!(result.ends_with("}));\n// fid-umd post-end\n"));
}

#[test]
fn test_marker_round_trip_through_update() {
    let config = json!({
        "name": "Round",
        "jslint": 1,
        "global": 1,
        "depends": [{"name": "Template", "commonjs": "./template", "root": "TemplateThing"}]
    });
    let expected = Config::from_json(&config);

    let wrapped = update(&SourceFixture::with_marker(&config, "body\n").content).unwrap();
    assert_eq!(detect_config(&wrapped).unwrap(), expected);
}

#[test]
fn test_dependency_overrides_reach_each_loader() {
    let config = json!({
        "name": "Widget",
        "depends": [{"name": "Template", "commonjs": "./template", "root": "TemplateThing"}]
    });
    let result = update(&SourceFixture::with_marker(&config, "").content).unwrap();

    assert!(result.contains("module.exports = factory(require(\"Template\"));"));
    assert!(result.contains("exports[name] = factory(require(\"./template\"));"));
    assert!(result.contains("root.define(name, [\"Template\"], factory);"));
    assert!(result.contains("root[name] = factory(root.TemplateThing);"));
    assert!(result.contains("function (Template) {\n"));
}

#[test]
fn test_malformed_marker_returns_error() {
    let err = update(&SourceFixture::malformed_marker().content).unwrap_err();
    match err {
        UmdError::MalformedMarker {
            payload,
            ..
        } => assert_eq!(payload, "{{}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_text_before_marker_is_kept() {
    let input = "#!/usr/bin/env node\n// fid-umd {\"name\":\"Cli\"}\nmain();\n";
    let result = update(input).unwrap();

    assert!(result.starts_with("#!/usr/bin/env node\n// fid-umd {\"name\":\"Cli\"}\n"));
    assert_eq!(update(&result).unwrap(), result);
}

#[test]
fn test_text_after_postamble_is_kept() {
    let wrapped = update("body\n").unwrap();
    let with_trailer = format!("{wrapped}// trailing comment\n");

    assert_eq!(update(&with_trailer).unwrap(), with_trailer);
}

#[test]
fn test_edited_marker_regenerates_wrapper() {
    let wrapped = update("body\n").unwrap();
    let edited = wrapped.replacen("{\"name\":\"Unknown\"}", "{\"name\":\"Renamed\",\"debug\":1}", 1);

    let result = update(&edited).unwrap();
    assert!(result.contains("console.log(\"Attempting to define \" + name);"));
    assert!(result.contains("}(\"Renamed\", this, function () {"));
    assert_eq!(positions(&result, "// fid-umd {").len(), 1);
}

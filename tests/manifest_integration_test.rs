//! Integration tests for resolver manifests feeding the generator

use cfgtemplate::core::generate_config_toml;
use cfgtemplate::domain::TemplateError;
use cfgtemplate::manifest::{load_manifest, parse_json, parse_toml};
use pretty_assertions::assert_eq;
use std::io::Write;

const JSON_MANIFEST: &str = r#"{
  "modules": [
    {
      "org": "myorg",
      "package": "pkg",
      "module": "pkg",
      "variables": [
        { "name": "port", "required": true, "type": { "kind": "int" } },
        { "name": "debug", "required": false, "type": { "kind": "boolean" } },
        { "name": "entries", "required": true,
          "type": {
            "kind": "table",
            "constraint": {
              "kind": "constrained",
              "effective": {
                "kind": "record",
                "fields": [
                  { "name": "id", "type": { "kind": "int" } },
                  { "name": "meta", "type": { "kind": "json" } }
                ]
              }
            }
          }
        }
      ]
    },
    {
      "org": "myorg",
      "package": "pkg",
      "module": "db",
      "variables": [
        { "name": "hosts", "type": { "kind": "array", "element": { "kind": "string" } } },
        { "name": "weights",
          "type": {
            "kind": "constrained",
            "effective": { "kind": "map", "value": { "kind": "decimal" } }
          }
        }
      ]
    }
  ]
}"#;

const EXPECTED: &str = concat!(
    "[myorg.pkg]\n",
    "port = 12 # type: int\n",
    "[[myorg.pkg.entries]]\n",
    "id = 12 # type: int\n",
    "# debug = true # type: boolean\n (optional)\n",
    "\n",
    "[myorg.pkg.db]\n",
    "hosts = [\"str1\", \"str2\", \"str3\"]\n",
    "[myorg.pkg.db.weights] # type: decimal\n",
    "key1 = 25000.00\n",
    "key2 = 30000.00\n",
    "\n",
);

#[test]
fn test_json_manifest_end_to_end() {
    let groups = parse_json(JSON_MANIFEST).unwrap();
    assert_eq!(generate_config_toml(&groups).unwrap(), EXPECTED);
}

#[test]
fn test_toml_manifest_matches_json() {
    let toml_manifest = r#"
[[modules]]
org = "myorg"
package = "pkg"

[[modules.variables]]
name = "port"
type = { kind = "int" }

[[modules.variables]]
name = "debug"
required = false
type = { kind = "boolean" }

[[modules.variables]]
name = "entries"

[modules.variables.type]
kind = "table"

[modules.variables.type.constraint]
kind = "constrained"

[modules.variables.type.constraint.effective]
kind = "record"

[[modules.variables.type.constraint.effective.fields]]
name = "id"
type = { kind = "int" }

[[modules.variables.type.constraint.effective.fields]]
name = "meta"
type = { kind = "json" }

[[modules]]
org = "myorg"
package = "pkg"
module = "db"

[[modules.variables]]
name = "hosts"
type = { kind = "array", element = { kind = "string" } }

[[modules.variables]]
name = "weights"
type = { kind = "constrained", effective = { kind = "map", value = { kind = "decimal" } } }
"#;

    let from_toml = parse_toml(toml_manifest).unwrap();
    let from_json = parse_json(JSON_MANIFEST).unwrap();
    assert_eq!(from_toml, from_json);
}

#[test]
fn test_load_manifest_from_json_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(JSON_MANIFEST.as_bytes()).unwrap();
    file.flush().unwrap();

    let groups = load_manifest(file.path()).unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(generate_config_toml(&groups).unwrap(), EXPECTED);
}

#[test]
fn test_load_manifest_missing_file() {
    let result = load_manifest("does-not-exist.json");
    assert!(matches!(result, Err(TemplateError::Io(_))));
}

#[test]
fn test_other_kind_in_manifest_fails_generation() {
    let groups = parse_json(
        r#"{"modules": [{"org": "o", "package": "p", "variables": [
            {"name": "ok", "type": {"kind": "int"}},
            {"name": "pair", "type": {"kind": "constrained",
                                      "effective": {"kind": "other", "name": "tuple"}}}
        ]}]}"#,
    )
    .unwrap();

    let err = generate_config_toml(&groups).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unsupported type kind 'tuple' found for configurable: pair"
    );
}

#[test]
fn test_unknown_kind_tag_is_a_manifest_error() {
    let result = parse_json(
        r#"{"modules": [{"org": "o", "package": "p", "variables": [
            {"name": "x", "type": {"kind": "union"}}
        ]}]}"#,
    );
    assert!(matches!(result, Err(TemplateError::Manifest(_))));
}

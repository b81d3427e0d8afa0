//! Integration tests for Config.toml template generation

use cfgtemplate::config::OptionalStyle;
use cfgtemplate::core::{generate_config_toml, ConfigTomlGenerator, GeneratorOptions};
use cfgtemplate::domain::{
    ConfigVariable, Field, ModuleGroup, ModuleKey, SimpleKind, TemplateError, TypeDescriptor,
};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn myorg_pkg() -> ModuleKey {
    ModuleKey::new("myorg", "pkg").unwrap()
}

fn id_record() -> TypeDescriptor {
    TypeDescriptor::record([Field::new("id", SimpleKind::Int.into())])
}

fn wrap(ty: TypeDescriptor, depth: usize) -> TypeDescriptor {
    (0..depth).fold(ty, |acc, _| TypeDescriptor::constrained(acc))
}

fn single(variable: ConfigVariable) -> Vec<ModuleGroup> {
    vec![ModuleGroup::new(ModuleKey::new("org", "pkg").unwrap()).with_variable(variable)]
}

#[test]
fn test_scenario_a_single_required_int() {
    let groups = vec![ModuleGroup::new(myorg_pkg())
        .with_variable(ConfigVariable::required("port", SimpleKind::Int))];

    assert_eq!(
        generate_config_toml(&groups).unwrap(),
        "[myorg.pkg]\nport = 12 # type: int\n\n"
    );
}

#[test]
fn test_scenario_b_optional_boolean() {
    let groups = vec![ModuleGroup::new(myorg_pkg())
        .with_variable(ConfigVariable::required("port", SimpleKind::Int))
        .with_variable(ConfigVariable::optional("debug", SimpleKind::Boolean))];

    assert_eq!(
        generate_config_toml(&groups).unwrap(),
        "[myorg.pkg]\nport = 12 # type: int\n# debug = true # type: boolean\n (optional)\n\n"
    );
}

#[test]
fn test_scenario_c_string_array() {
    let doc = generate_config_toml(&single(ConfigVariable::required(
        "tags",
        TypeDescriptor::array(SimpleKind::String.into()),
    )))
    .unwrap();

    assert!(doc.contains("tags = [\"str1\", \"str2\", \"str3\"]\n"));
    assert!(!doc.contains("string[]"));
}

#[test]
fn test_scenario_d_table_of_constrained_record() {
    let ty = TypeDescriptor::table(TypeDescriptor::constrained(id_record()));
    let doc = generate_config_toml(&single(ConfigVariable::required("entries", ty))).unwrap();

    assert_eq!(doc, "[org.pkg]\n[[org.pkg.entries]]\nid = 12 # type: int\n\n");
}

#[test]
fn test_scenario_e_map_of_records_is_empty() {
    let doc = generate_config_toml(&single(ConfigVariable::required(
        "lookup",
        TypeDescriptor::map(id_record()),
    )))
    .unwrap();

    assert_eq!(doc, "[org.pkg]\n\n");
}

#[test]
fn test_unknown_element_or_value_kind_renders_empty() {
    let tuple = || TypeDescriptor::Other("tuple".into());
    let groups = vec![ModuleGroup::new(ModuleKey::new("org", "pkg").unwrap())
        .with_variable(ConfigVariable::required("m", TypeDescriptor::map(tuple())))
        .with_variable(ConfigVariable::required("a", TypeDescriptor::array(wrap(tuple(), 1))))
        .with_variable(ConfigVariable::optional("o", TypeDescriptor::map(tuple())))];

    assert_eq!(generate_config_toml(&groups).unwrap(), "[org.pkg]\n\n");
}

#[test]
fn test_scenario_f_unknown_kind_aborts_everything() {
    let groups = vec![
        ModuleGroup::new(myorg_pkg())
            .with_variable(ConfigVariable::required("port", SimpleKind::Int)),
        ModuleGroup::new(ModuleKey::with_module("myorg", "pkg", "late").unwrap()).with_variable(
            ConfigVariable::optional("pair", wrap(TypeDescriptor::Other("tuple".into()), 2)),
        ),
    ];

    let err = generate_config_toml(&groups).unwrap_err();
    match err {
        TemplateError::UnsupportedTypeKind { variable, kind } => {
            assert_eq!(variable, "pair");
            assert_eq!(kind, "tuple");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test_case(SimpleKind::Boolean, "v = true # type: boolean\n")]
#[test_case(SimpleKind::Byte, "v = 10 # type: byte\n")]
#[test_case(SimpleKind::Int, "v = 12 # type: int\n")]
#[test_case(SimpleKind::Float, "v = 1.23 # type: float\n")]
#[test_case(SimpleKind::Decimal, "v = 12345.67 # type: decimal\n")]
#[test_case(SimpleKind::String, "v = \"str1\" # type: string\n")]
fn test_required_scalar_line(kind: SimpleKind, line: &str) {
    let doc = generate_config_toml(&single(ConfigVariable::required("v", kind))).unwrap();
    assert_eq!(doc, format!("[org.pkg]\n{line}\n"));
}

#[test_case(SimpleKind::Boolean, "[org.pkg.v] # type: boolean\nkey1 = true\nkey2 = true\n")]
#[test_case(SimpleKind::Byte, "[org.pkg.v] # type: byte\nkey1 = 1\nkey2 = 80\n")]
#[test_case(SimpleKind::Int, "[org.pkg.v] # type: int\nkey1 = 1\nkey2 = 9090\n")]
#[test_case(SimpleKind::Decimal, "[org.pkg.v] # type: decimal\nkey1 = 25000.00\nkey2 = 30000.00\n")]
#[test_case(
    SimpleKind::String,
    "[org.pkg.v] # type: string\nkey1 = \"value1\"\nkey2 = \"value2\"\n"
)]
fn test_inline_map_entries(kind: SimpleKind, fragment: &str) {
    let ty = TypeDescriptor::constrained(TypeDescriptor::map(kind.into()));
    let doc = generate_config_toml(&single(ConfigVariable::required("v", ty))).unwrap();
    assert_eq!(doc, format!("[org.pkg]\n{fragment}\n"));
}

#[test]
fn test_xml_and_json_literals() {
    let groups = vec![ModuleGroup::new(myorg_pkg())
        .with_variable(ConfigVariable::required(
            "book",
            TypeDescriptor::constrained(TypeDescriptor::Xml),
        ))
        .with_variable(ConfigVariable::required("person", TypeDescriptor::Json))];

    assert_eq!(
        generate_config_toml(&groups).unwrap(),
        concat!(
            "[myorg.pkg]\n",
            "book = \"<book>The Lost World</book>\" # type: xml\n",
            "person = {name = \"Jane\"} # type: json\n",
            "\n",
        )
    );
}

#[test]
fn test_wrapper_transparency_to_arbitrary_depth() {
    let shapes = vec![
        TypeDescriptor::Simple(SimpleKind::Float),
        TypeDescriptor::Json,
        TypeDescriptor::array(SimpleKind::Int.into()),
        TypeDescriptor::map(SimpleKind::String.into()),
        id_record(),
        TypeDescriptor::table(id_record()),
        TypeDescriptor::array(id_record()),
    ];

    for shape in shapes {
        let bare =
            generate_config_toml(&single(ConfigVariable::required("v", shape.clone()))).unwrap();
        for depth in 1..=5 {
            let variable = ConfigVariable::required("v", wrap(shape.clone(), depth));
            let wrapped = generate_config_toml(&single(variable)).unwrap();
            assert_eq!(wrapped, bare, "depth {depth} for {shape:?}");
        }
    }
}

#[test]
fn test_table_and_record_array_render_identically() {
    let record = TypeDescriptor::record([
        Field::new("id", SimpleKind::Int.into()),
        Field::new("name", SimpleKind::String.into()),
        Field::new("children", TypeDescriptor::array(id_record())),
    ]);

    let table = generate_config_toml(&single(ConfigVariable::required(
        "rows",
        TypeDescriptor::table(TypeDescriptor::constrained(record.clone())),
    )))
    .unwrap();
    let array = generate_config_toml(&single(ConfigVariable::required(
        "rows",
        TypeDescriptor::constrained(TypeDescriptor::array(TypeDescriptor::constrained(record))),
    )))
    .unwrap();

    assert_eq!(table, array);
    assert_eq!(
        table,
        "[org.pkg]\n[[org.pkg.rows]]\nid = 12 # type: int\nname = \"str1\" # type: string\n\n"
    );
}

#[test]
fn test_required_entries_precede_optional_in_every_module() {
    let first = ModuleGroup::new(myorg_pkg())
        .with_variable(ConfigVariable::optional("o1", SimpleKind::Int))
        .with_variable(ConfigVariable::required("r1", SimpleKind::Int))
        .with_variable(ConfigVariable::optional("o2", SimpleKind::String))
        .with_variable(ConfigVariable::required("r2", SimpleKind::String));
    let second = ModuleGroup::new(ModuleKey::with_module("myorg", "pkg", "db").unwrap())
        .with_variable(ConfigVariable::optional("pool", TypeDescriptor::table(id_record())))
        .with_variable(ConfigVariable::required("url", SimpleKind::String));

    let doc = generate_config_toml(&[first, second]).unwrap();
    assert_eq!(
        doc,
        concat!(
            "[myorg.pkg]\n",
            "r1 = 12 # type: int\n",
            "r2 = \"str1\" # type: string\n",
            "# o1 = 12 # type: int\n (optional)\n",
            "# o2 = \"str1\" # type: string\n (optional)\n",
            "\n",
            "[myorg.pkg.db]\n",
            "url = \"str1\" # type: string\n",
            "# [[myorg.pkg.db.pool]]\nid = 12 # type: int\n (optional)\n",
            "\n",
        )
    );
}

#[test]
fn test_comment_each_line_style() {
    let groups = vec![ModuleGroup::new(myorg_pkg())
        .with_variable(ConfigVariable::optional("pool", TypeDescriptor::table(id_record())))
        .with_variable(ConfigVariable::optional("debug", SimpleKind::Boolean))];

    let generator = ConfigTomlGenerator::new(GeneratorOptions {
        optional_style: OptionalStyle::CommentEachLine,
        include_optional: true,
    });

    let doc = generator.generate(&groups).unwrap();
    assert_eq!(
        doc,
        concat!(
            "[myorg.pkg]\n",
            "# [[myorg.pkg.pool]] (optional)\n",
            "# id = 12 # type: int\n",
            "# debug = true # type: boolean (optional)\n",
            "\n",
        )
    );

    // With every optional line commented the document is plain TOML
    let parsed: toml::Value = toml::from_str(&doc).unwrap();
    assert!(parsed.get("myorg").is_some());
}

#[test]
fn test_generation_is_deterministic() {
    let groups = vec![
        ModuleGroup::new(myorg_pkg())
            .with_variable(ConfigVariable::required("port", SimpleKind::Int))
            .with_variable(ConfigVariable::optional(
                "hosts",
                TypeDescriptor::array(SimpleKind::String.into()),
            )),
        ModuleGroup::new(ModuleKey::new("other", "lib").unwrap()).with_variable(
            ConfigVariable::required("limits", TypeDescriptor::map(SimpleKind::Int.into())),
        ),
    ];

    let first = generate_config_toml(&groups).unwrap();
    for _ in 0..10 {
        assert_eq!(generate_config_toml(&groups).unwrap(), first);
    }
}

#[test]
fn test_module_order_follows_input() {
    let z = ModuleGroup::new(ModuleKey::new("zeta", "pkg").unwrap())
        .with_variable(ConfigVariable::required("a", SimpleKind::Int));
    let a = ModuleGroup::new(ModuleKey::new("alpha", "pkg").unwrap())
        .with_variable(ConfigVariable::required("a", SimpleKind::Int));

    let doc = generate_config_toml(&[z, a]).unwrap();
    let zeta = doc.find("[zeta.pkg]").unwrap();
    let alpha = doc.find("[alpha.pkg]").unwrap();
    assert!(zeta < alpha);
}

#[test]
fn test_required_only_document_is_valid_toml() {
    let groups = vec![ModuleGroup::new(myorg_pkg())
        .with_variable(ConfigVariable::required("port", SimpleKind::Int))
        .with_variable(ConfigVariable::required("ratio", SimpleKind::Float))
        .with_variable(ConfigVariable::required(
            "flags",
            TypeDescriptor::array(SimpleKind::Boolean.into()),
        ))
        .with_variable(ConfigVariable::required("person", TypeDescriptor::Json))
        .with_variable(ConfigVariable::required(
            "server",
            TypeDescriptor::record([
                Field::new("host", SimpleKind::String.into()),
                Field::new("port", SimpleKind::Int.into()),
            ]),
        ))
        .with_variable(ConfigVariable::required(
            "entries",
            TypeDescriptor::table(id_record()),
        ))];

    let doc = generate_config_toml(&groups).unwrap();
    let parsed: toml::Value = toml::from_str(&doc).unwrap();

    let pkg = &parsed["myorg"]["pkg"];
    assert_eq!(pkg["port"].as_integer(), Some(12));
    assert_eq!(pkg["server"]["host"].as_str(), Some("str1"));
    assert_eq!(pkg["entries"].as_array().map(|a| a.len()), Some(1));
}

//! End-to-end catalog generation over small command trees.

use apiref_core::{
    Api, Command, DefaultValue, OptionSpec, OptionType, PositionalSpec, RecordDef, TypeRef,
    TypeTable,
};
use apiref_gen::{
    Config, FailurePolicy, PLAIN_TEXT_RESPONSE, all_endpoints,
    testing::{assert_catalog_eq, assert_sorted, catalog_from_json},
};

/// `/api/v1` with `add` and a handler-less `ignored-group` holding `leaf`.
fn node_api() -> Api {
    let root = Command::group()
        .subcommand(
            "ignored-group",
            Command::group().subcommand("leaf", Command::handler()),
        )
        .subcommand(
            "add",
            Command::handler()
                .tagline("Add a file")
                .argument(PositionalSpec::file("path").required(true))
                .option(
                    OptionSpec::new("pin", OptionType::Bool).default_value(DefaultValue::Bool(true)),
                )
                .response(TypeRef::sequence(TypeRef::named("Cid"))),
        );
    Api::new("/api/v1", root)
}

#[test]
fn test_example_catalog() {
    let endpoints = all_endpoints(&node_api(), &Config::default()).unwrap();

    assert_eq!(endpoints.len(), 2);

    let add = &endpoints[0];
    assert_eq!(add.name, "/api/v1/add");
    assert_eq!(add.description, "Add a file");
    assert_eq!(add.arguments.len(), 1);
    assert_eq!(add.arguments[0].name, "path");
    assert_eq!(add.arguments[0].ty, "file");
    assert!(add.arguments[0].required);
    assert_eq!(add.options[0].name, "pin");
    assert_eq!(add.options[0].ty, "bool");
    assert_eq!(add.options[0].default, "true");
    assert_eq!(
        add.response,
        "[\n    {\n        \"/\": \"<cid-string>\"\n    }\n]"
    );

    let leaf = &endpoints[1];
    assert_eq!(leaf.name, "/api/v1/ignored-group/leaf");
    assert_eq!(leaf.response, PLAIN_TEXT_RESPONSE);
    assert!(leaf.arguments.is_empty());
}

#[test]
fn test_generation_is_deterministic() {
    let api = node_api();
    let config = Config::default();
    let first = serde_json::to_string(&all_endpoints(&api, &config).unwrap()).unwrap();
    for _ in 0..5 {
        let again = serde_json::to_string(&all_endpoints(&api, &config).unwrap()).unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn test_catalog_matches_fixture() {
    let fixture = r#"[
        {
            "Name": "/api/v1/add",
            "Description": "Add a file",
            "Arguments": [
                { "Name": "path", "Description": "", "Type": "file", "Required": true, "Default": "" }
            ],
            "Options": [
                { "Name": "pin", "Description": "", "Type": "bool", "Required": false, "Default": "true" }
            ],
            "Response": "[\n    {\n        \"/\": \"<cid-string>\"\n    }\n]"
        },
        {
            "Name": "/api/v1/ignored-group/leaf",
            "Description": "",
            "Arguments": [],
            "Options": [],
            "Response": "This endpoint returns a plain-text response body."
        }
    ]"#;

    let actual = all_endpoints(&node_api(), &Config::default()).unwrap();
    assert_catalog_eq(&catalog_from_json(fixture), &actual);
}

#[test]
fn test_wide_tree_is_globally_sorted() {
    let mut root = Command::group();
    for group in ["swarm", "pin", "dag", "bootstrap", "key"] {
        let mut cmd = Command::handler();
        for leaf in ["rm", "add", "ls", "z", "A"] {
            cmd = cmd.subcommand(leaf, Command::handler().subcommand("sub", Command::handler()));
        }
        root = root.subcommand(group, cmd);
    }

    let endpoints = all_endpoints(&Api::new("/api/v1", root), &Config::default()).unwrap();
    assert_eq!(endpoints.len(), 5 + 5 * 5 * 2);
    assert_sorted(&endpoints);
}

#[test]
fn test_ignore_and_non_executable_nodes() {
    let root = Command::group()
        .subcommand("a", Command::handler().subcommand("b", Command::handler()))
        .subcommand("ns", Command::group().subcommand("c", Command::handler()));
    let api = Api::new("/api/v1", root);
    let config = Config::new().ignore("/api/v1/a");

    let names: Vec<_> = all_endpoints(&api, &config)
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, ["/api/v1/a/b", "/api/v1/ns/c"]);
}

#[test]
fn test_argument_order_is_preserved() {
    let root = Command::group().subcommand(
        "cp",
        Command::handler()
            .argument(PositionalSpec::string("x").required(true))
            .argument(PositionalSpec::string("y"))
            .argument(PositionalSpec::file("z")),
    );

    let endpoints = all_endpoints(&Api::new("/api/v1", root), &Config::default()).unwrap();
    let args: Vec<_> = endpoints[0]
        .arguments
        .iter()
        .map(|a| (a.name.as_str(), a.ty.as_str(), a.required))
        .collect();
    assert_eq!(
        args,
        [("x", "string", true), ("y", "string", false), ("z", "file", false)]
    );
}

#[test]
fn test_peer_info_override_is_not_expanded() {
    let types = TypeTable::new().with(
        RecordDef::new("PeerInfo")
            .field("ID", TypeRef::string())
            .field("Addrs", TypeRef::sequence(TypeRef::string()))
            .field("Private", TypeRef::string()),
    );
    let root = Command::group().subcommand(
        "findpeer",
        Command::handler().response(TypeRef::named("PeerInfo")),
    );
    let api = Api::new("/api/v1", root).with_types(types);

    let endpoints = all_endpoints(&api, &Config::default()).unwrap();
    assert_eq!(
        endpoints[0].response,
        "{\n    \"ID\": \"peer-id\",\n    \"Addrs\": [\n        \"<multiaddr-string>\"\n    ]\n}"
    );
}

#[test]
fn test_recursive_response_respects_depth() {
    let types = TypeTable::new().with(
        RecordDef::new("Tree")
            .field("Name", TypeRef::string())
            .field("Children", TypeRef::sequence(TypeRef::named("Tree"))),
    );
    let root = Command::group().subcommand(
        "ls",
        Command::handler().response(TypeRef::named("Tree")),
    );
    let api = Api::new("/api/v1", root).with_types(types);

    let endpoints = all_endpoints(&api, &Config::new().max_depth(3)).unwrap();
    insta::assert_snapshot!(endpoints[0].response, @r#"
    {
        "Name": "<string>",
        "Children": [
            {
                "Name": "<string>",
                "Children": "..."
            }
        ]
    }
    "#);
}

#[test]
fn test_unknown_response_type_aborts_run() {
    let root = Command::group()
        .subcommand("ok", Command::handler())
        .subcommand("broken", Command::handler().response(TypeRef::named("Nope")));
    let api = Api::new("/api/v1", root);

    let err = all_endpoints(&api, &Config::default()).unwrap_err();
    let message = format!("{}: {}", err, std::error::Error::source(&err).unwrap());
    assert!(message.contains("/api/v1/broken"));
    assert!(message.contains("Nope"));

    let skipped = all_endpoints(&api, &Config::new().on_error(FailurePolicy::SkipEndpoint)).unwrap();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].name, "/api/v1/ok");
}

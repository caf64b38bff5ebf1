use javelin_config::json_schema;

#[test]
fn schema_describes_both_tables() {
    let schema = serde_json::to_value(json_schema()).unwrap();
    let properties = schema["properties"].as_object().unwrap();
    assert!(properties.contains_key("logging"));
    assert!(properties.contains_key("resolver"));
    assert_eq!(schema["additionalProperties"], serde_json::Value::Bool(false));

    let resolver = &schema["definitions"]["ResolverConfig"]["properties"];
    assert_eq!(resolver["stubs"]["type"], "array");
    assert_eq!(resolver["builtin_jdk"]["default"], true);
}

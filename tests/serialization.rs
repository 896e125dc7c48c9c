//! Serialized form of parsed documents

use cooklang_parser::parse;

const RECIPE: &str = ">> serves: 2
Add @salt{1/2%tsp} and @water{0.5%l} to the #pot with an @egg.
Simmer for ~{5 minutes}.";

#[test]
fn test_json_output() {
    let doc = parse(RECIPE);
    let json = serde_json::to_string(&doc).unwrap();
    insta::assert_snapshot!(json, @r#"{"metadata":{"serves":"2"},"ingredients":[{"name":"salt","quantity":{"amount":"1/2","unit":"tsp"}},{"name":"water","quantity":{"amount":0.5,"unit":"l"}},{"name":"egg","quantity":{"amount":1,"unit":"units"}}],"cookware":[{"name":"pot"}],"steps":["Add salt and water to the pot with an egg.","Simmer for 5 minutes."]}"#);
}

#[test]
fn test_yaml_output_keeps_fraction_exact() {
    let doc = parse(RECIPE);
    let yaml = serde_yaml::to_string(&doc).unwrap();
    assert!(yaml.contains("1/2"));
    assert!(yaml.contains("amount: 0.5"));
    assert!(yaml.contains("- Simmer for 5 minutes."));
}

use forge::context::build_context;
use forge::spec::parse_spec;
use std::path::Path;

const SPEC_JSON: &str = r#"{
    "projectName": "MyBlog",
    "packageName": "com.example.blog",
    "platformVersion": "7.0",
    "applications": [
        {"name": "BlogEntry", "entity": "Entry"}
    ]
}"#;

#[test]
fn test_project_level_context() {
    let spec = parse_spec(SPEC_JSON).unwrap();
    let context = build_context(&spec, None, Some(Path::new("out/service.xml")), "jane");

    // The root specification and author are always populated
    assert_eq!(context["spec"]["projectName"], "MyBlog");
    assert_eq!(context["spec"]["packageName"], "com.example.blog");
    assert_eq!(context["author"], "jane");
    assert_eq!(context["output_path"], "out/service.xml");

    // Project-level renders carry a null application, not a missing key
    assert!(context["app"].is_null());
}

#[test]
fn test_application_context() {
    let spec = parse_spec(SPEC_JSON).unwrap();
    let context = build_context(&spec, Some(&spec.applications[0]), None, "");

    assert_eq!(context["app"]["name"], "BlogEntry");
    assert_eq!(context["app"]["entity"], "Entry");
    assert!(context["output_path"].is_null());
}

#[test]
fn test_app_and_output_path_are_independent() {
    let spec = parse_spec(SPEC_JSON).unwrap();

    let context = build_context(&spec, Some(&spec.applications[0]), Some(Path::new("x")), "");
    assert_eq!(context["app"]["name"], "BlogEntry");
    assert_eq!(context["output_path"], "x");

    let context = build_context(&spec, None, None, "");
    assert!(context["app"].is_null());
    assert!(context["output_path"].is_null());
}

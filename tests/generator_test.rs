use forge::error::Error;
use forge::generator::{render_template, split_destination};
use forge::renderer::MiniJinjaRenderer;
use forge::resolver::TemplateDescriptor;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_split_destination() {
    let source = "{# destination: src/{{ app.name }}.java #}\npublic class {{ app.name }} {}";
    let (body, declared) = split_destination(source);
    assert_eq!(declared, Some("src/{{ app.name }}.java"));
    assert_eq!(body, "public class {{ app.name }} {}");

    let source = "no marker here";
    let (body, declared) = split_destination(source);
    assert_eq!(declared, None);
    assert_eq!(body, "no marker here");
}

#[test]
fn test_self_declared_destination() {
    let temp_dir = TempDir::new().unwrap();
    let template_path = temp_dir.path().join("Scaffold_Entity.java");
    fs::write(
        &template_path,
        "{# destination: {{ app.name | dash_case }}/Entity.java #}\nclass {{ app.name }} {}",
    )
    .unwrap();

    let engine = MiniJinjaRenderer::new();
    let descriptor = TemplateDescriptor::self_declared("Scaffold_Entity.java", &template_path);
    let context = serde_json::json!({"app": {"name": "BlogEntry"}});

    let target = render_template(&engine, &descriptor, &context, temp_dir.path()).unwrap();

    assert_eq!(target, temp_dir.path().join("blog-entry/Entity.java"));
    assert_eq!(fs::read_to_string(&target).unwrap(), "class BlogEntry {}");
}

#[test]
fn test_explicit_path_takes_precedence() {
    let temp_dir = TempDir::new().unwrap();
    let template_path = temp_dir.path().join("service.xml");
    fs::write(&template_path, "{# destination: ignored/path.xml #}\n<service/>").unwrap();

    let engine = MiniJinjaRenderer::new();
    let explicit_target = temp_dir.path().join("out/service.xml");
    let descriptor =
        TemplateDescriptor::explicit("service.xml", &template_path, explicit_target.clone());
    let context = serde_json::json!({});

    let target = render_template(&engine, &descriptor, &context, temp_dir.path()).unwrap();

    assert_eq!(target, explicit_target);
    assert_eq!(fs::read_to_string(&target).unwrap(), "<service/>");
    assert!(!temp_dir.path().join("ignored/path.xml").exists());
}

#[test]
fn test_missing_destination_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let template_path = temp_dir.path().join("Scaffold_NoMarker.java");
    fs::write(&template_path, "no marker").unwrap();

    let engine = MiniJinjaRenderer::new();
    let descriptor = TemplateDescriptor::self_declared("Scaffold_NoMarker.java", &template_path);
    let context = serde_json::json!({});

    let result = render_template(&engine, &descriptor, &context, temp_dir.path());
    match result {
        Err(Error::MissingOutputPathError { template_name }) => {
            assert_eq!(template_name, "Scaffold_NoMarker.java");
        }
        _ => panic!("Expected MissingOutputPathError"),
    }
}

#[test]
fn test_rendering_overwrites_existing_output() {
    let temp_dir = TempDir::new().unwrap();
    let template_path = temp_dir.path().join("Scaffold_Note.txt");
    fs::write(&template_path, "{# destination: note.txt #}\nhello {{ who }}").unwrap();

    let engine = MiniJinjaRenderer::new();
    let descriptor = TemplateDescriptor::self_declared("Scaffold_Note.txt", &template_path);
    let context = serde_json::json!({"who": "world"});

    let first = render_template(&engine, &descriptor, &context, temp_dir.path()).unwrap();
    let after_one = fs::read_to_string(&first).unwrap();

    // Regeneration is destructive by default: a second render of the same
    // pair leaves the single-render output
    let second = render_template(&engine, &descriptor, &context, temp_dir.path()).unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), after_one);
    assert_eq!(after_one, "hello world");
}

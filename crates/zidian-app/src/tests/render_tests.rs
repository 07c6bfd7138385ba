use serde_json::json;
use zidian_config::ui::UiConfig;
use zidian_core::ValidationError;
use zidian_types::{Entry, SearchState};

use super::{SharedBuf, record};
use crate::render::Renderer;

fn entry(simplified: &str, traditional: &str, images: serde_json::Value) -> Entry {
    serde_json::from_value::<Entry>(record(simplified, traditional, images))
        .unwrap()
        .with_thumbnail()
}

fn text_renderer(ui: UiConfig) -> Renderer {
    Renderer::new(ui, false, None)
}

#[test]
fn renders_entry_fields() {
    let state = SearchState::success(vec![entry("学", "學", json!([["1", "aGVsbG8="]]))]);
    let out = text_renderer(UiConfig::default()).render(&state).unwrap();

    assert!(out.starts_with("学 (學)  xué"));
    assert!(out.contains("to learn; to study"));
    assert!(out.contains("child under a roof"));
    assert!(out.contains("Examples: 学生, 学习, 大学, 学校"));
    assert!(out.contains("Image: 8 base64 chars"));
}

#[test]
fn same_forms_are_not_repeated() {
    let state = SearchState::success(vec![entry("你", "你", json!([]))]);
    let out = text_renderer(UiConfig::default()).render(&state).unwrap();

    assert!(out.starts_with("你  xué"));
    assert!(!out.contains("Image:"));
}

#[test]
fn ui_config_limits_output() {
    let ui = UiConfig {
        max_examples: 2,
        show_explanation: false,
    };
    let state = SearchState::success(vec![entry("学", "學", json!([]))]);
    let out = text_renderer(ui).render(&state).unwrap();

    assert!(out.contains("Examples: 学生, 学习\n"));
    assert!(!out.contains("child under a roof"));
}

#[test]
fn renders_error_and_empty_states() {
    let renderer = text_renderer(UiConfig::default());

    assert_eq!(
        renderer.render(&SearchState::failure("nope")).unwrap(),
        "error: nope"
    );
    assert_eq!(
        renderer.render(&SearchState::default()).unwrap(),
        "No entries found."
    );
}

#[test]
fn json_output_carries_thumbnail_uri() {
    let renderer = Renderer::new(UiConfig::default(), true, None);
    let state = SearchState::success(vec![entry("学", "學", json!([["1", "aGVsbG8="]]))]);

    let value: serde_json::Value = serde_json::from_str(&renderer.render(&state).unwrap()).unwrap();
    assert_eq!(value["error"], json!(null));
    assert_eq!(
        value["entries"][0]["thumbnail"],
        json!("data:image/jpeg;base64,aGVsbG8=")
    );
    assert_eq!(value["entries"][0]["images"], json!([["1", "aGVsbG8="]]));
}

#[test]
fn validation_error_message() {
    assert_eq!(
        ValidationError::Required.to_string(),
        "Please enter the characters to look up"
    );
}

#[test]
fn saves_decodable_thumbnails_only() {
    let dir = std::env::temp_dir().join(format!("zidian-thumbs-{}", uuid::Uuid::new_v4()));
    let renderer = Renderer::new(UiConfig::default(), false, Some(dir.clone()));
    let state = SearchState::success(vec![
        entry("学", "學", json!([["1", "aGVsbG8="]])),
        entry("你", "你", json!([])),
        entry("好", "好", json!([["2", "%%%"]])),
    ]);

    let written = renderer.save_thumbnails(&state).unwrap();

    assert_eq!(written, vec![dir.join("0-学.jpg")]);
    assert_eq!(std::fs::read(&written[0]).unwrap(), b"hello");

    std::fs::remove_dir_all(dir).unwrap();
}

#[test]
fn no_thumbnail_dir_writes_nothing() {
    let state = SearchState::success(vec![entry("学", "學", json!([["1", "aGVsbG8="]]))]);
    assert!(text_renderer(UiConfig::default())
        .save_thumbnails(&state)
        .unwrap()
        .is_empty());
}

#[test]
fn server_text_cannot_escape_thumbnail_dir() {
    let root = std::env::temp_dir().join(format!("zidian-escape-{}", uuid::Uuid::new_v4()));
    let dir = root.join("thumbs");
    let renderer = Renderer::new(UiConfig::default(), false, Some(dir.clone()));
    let state = SearchState::success(vec![
        entry("x/../../escaped", "x", json!([["1", "aGVsbG8="]])),
        entry("..", "..", json!([["2", "aGVsbG8="]])),
    ]);

    let written = renderer.save_thumbnails(&state).unwrap();

    assert_eq!(written, vec![dir.join("0-xescaped.jpg"), dir.join("1.jpg")]);
    for path in &written {
        assert_eq!(path.parent(), Some(dir.as_path()));
        assert!(path.exists());
    }
    assert!(!root.join("escaped.jpg").exists());

    std::fs::remove_dir_all(root).unwrap();
}

#[test]
fn failed_write_skips_only_that_entry() {
    let dir = std::env::temp_dir().join(format!("zidian-blocked-{}", uuid::Uuid::new_v4()));
    // A directory where the first file should go makes that write fail
    std::fs::create_dir_all(dir.join("0-学.jpg")).unwrap();
    let renderer = Renderer::new(UiConfig::default(), false, Some(dir.clone()));
    let state = SearchState::success(vec![
        entry("学", "學", json!([["1", "aGVsbG8="]])),
        entry("好", "好", json!([["2", "aGVsbG8="]])),
    ]);

    let written = renderer.save_thumbnails(&state).unwrap();

    assert_eq!(written, vec![dir.join("1-好.jpg")]);

    std::fs::remove_dir_all(dir).unwrap();
}

#[test]
fn prompt_follows_each_output_block() {
    let buf = SharedBuf::default();
    let renderer = Renderer::new(UiConfig::default(), false, None)
        .with_output(buf.clone())
        .with_prompt(true);

    renderer.show_prompt();
    renderer.print_validation(ValidationError::Required);
    renderer.print(&SearchState::failure("nope"));

    assert_eq!(
        buf.contents(),
        "> error: Please enter the characters to look up\n> error: nope\n> "
    );
}

#[test]
fn no_prompt_by_default() {
    let buf = SharedBuf::default();
    let renderer = Renderer::new(UiConfig::default(), false, None).with_output(buf.clone());

    renderer.show_prompt();
    renderer.print(&SearchState::default());

    assert_eq!(buf.contents(), "No entries found.\n");
}

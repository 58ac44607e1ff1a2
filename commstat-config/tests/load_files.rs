use commstat_config::{CommstatConfig, SortWidgetConfig, TimeUnit};
use std::io::Write;

fn write_config(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("commstat")
        .suffix(suffix)
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn loads_toml_by_extension() {
    let file = write_config(
        ".toml",
        r#"
        [community_list]
        form_name = "search"

        [[community_list.fields]]
        field = "followers"
        widget_id = "members-widget"

        [history_chart]
        time_unit = "month"
        "#,
    );

    let config = CommstatConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.community_list.form_name, "search");
    assert_eq!(config.community_list.fields.len(), 1);
    assert_eq!(config.community_list.fields[0].widget_id, "members-widget");
    assert_eq!(config.history_chart.time_unit, TimeUnit::Month);
    assert_eq!(config.post_list, SortWidgetConfig::post_list());
}

#[test]
fn loads_json_by_extension() {
    let file = write_config(
        ".json",
        r#"{ "history_chart": { "title": "Members" } }"#,
    );

    let config = CommstatConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.history_chart.title, "Members");
}

#[test]
fn unknown_extension_tries_both_formats() {
    let file = write_config(".conf", r#"history_chart = { show_legend = true }"#);

    let config = CommstatConfig::load_from_file(file.path()).unwrap();
    assert!(config.history_chart.show_legend);
}

#[test]
fn invalid_toml_layout_fails_validation() {
    let file = write_config(
        ".toml",
        r#"
        [community_list.classes]
        up = "arrow"
        down = "arrow"
        "#,
    );

    let err = CommstatConfig::load_from_file(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("arrow"));
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = CommstatConfig::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
}

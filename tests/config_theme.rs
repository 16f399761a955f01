use std::fs;

use daybook::ui::Theme;
use daybook::{initialize, Config};

const CUSTOM_THEME: &str = r##"
name = "midnight"

[colors]
header_fg = "#eeeeee"
selection_fg = "#000000"
selection_bg = "#eeeeee"
text_normal = "#cccccc"
text_dim = "#666666"
border = "#333333"
search_bar_border = "#ff00ff"
match_highlight_fg = "#000000"
match_highlight_bg = "#ffff00"
empty_state_fg = "#8888ff"
accent_fg = "#8888ff"
favorite_fg = "#ffff00"
tag_fg = "#88ff88"
success_fg = "#88ff88"
error_fg = "#ff8888"
"##;

#[test]
fn custom_theme_file_loads_and_wins_over_builtin_name() {
    let dir = tempfile::tempdir().unwrap();
    let theme_path = dir.path().join("midnight.toml");
    fs::write(&theme_path, CUSTOM_THEME).unwrap();

    let config = Config {
        theme_name: Some("catppuccin-latte".to_string()),
        theme_file: Some(theme_path.to_string_lossy().into_owned()),
        ..Config::default()
    };

    let state = initialize(&config);
    assert_eq!(state.theme.name, "midnight");
    assert_eq!(state.theme.colors.accent_fg, "#8888ff");
}

#[test]
fn missing_theme_file_falls_back_to_default() {
    let config = Config {
        theme_file: Some("/nonexistent/theme.toml".to_string()),
        ..Config::default()
    };

    let state = initialize(&config);
    assert_eq!(state.theme.name, "catppuccin-mocha");
}

#[test]
fn malformed_theme_file_is_an_error_from_the_loader() {
    let dir = tempfile::tempdir().unwrap();
    let theme_path = dir.path().join("broken.toml");
    fs::write(&theme_path, "name = \"broken\"\n[colors]\nheader_fg = 7\n").unwrap();

    assert!(Theme::from_file(&theme_path).is_err());
}

#[test]
fn builtin_theme_selected_by_name() {
    let config = Config {
        theme_name: Some("catppuccin-frappe".to_string()),
        ..Config::default()
    };

    let state = initialize(&config);
    assert_eq!(state.theme.name, "catppuccin-frappe");
}

#[test]
fn config_file_contents_parse_into_typed_fields() {
    let config = Config::from_toml(
        r#"
        theme = "catppuccin-macchiato"
        trace_level = "warn"
        user_name = "Grace"
        "#,
    )
    .unwrap();

    assert_eq!(config.theme_name.as_deref(), Some("catppuccin-macchiato"));
    assert_eq!(config.trace_level.as_deref(), Some("warn"));
    assert_eq!(config.user_name.as_deref(), Some("Grace"));
    assert!(config.theme_file.is_none());
}

#[test]
fn unknown_config_keys_are_ignored() {
    let config = Config::from_toml("future_option = true\ntheme = \"catppuccin-mocha\"").unwrap();
    assert_eq!(config.theme_name.as_deref(), Some("catppuccin-mocha"));
}

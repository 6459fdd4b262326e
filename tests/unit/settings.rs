use super::*;
use tempfile::tempdir;

#[test]
fn parse_key_handles_names_chars_and_modifiers() {
    assert_eq!(parse_key("esc"), Some(Key::simple(KeyCode::Esc)));
    assert_eq!(parse_key("Escape"), Some(Key::simple(KeyCode::Esc)));
    assert_eq!(parse_key("q"), Some(Key::simple(KeyCode::Char('q'))));
    assert_eq!(parse_key("f"), Some(Key::simple(KeyCode::Char('f'))));
    assert_eq!(parse_key("F10"), Some(Key::simple(KeyCode::F(10))));
    assert_eq!(parse_key("ctrl+c"), Some(Key::ctrl(KeyCode::Char('c'))));
    assert_eq!(
        parse_key("Q"),
        Some(Key::new(KeyCode::Char('q'), KeyModifiers::SHIFT))
    );
}

#[test]
fn parse_key_rejects_garbage() {
    assert_eq!(parse_key(""), None);
    assert_eq!(parse_key("ctrl+"), None);
    assert_eq!(parse_key("quit"), None);
    assert_eq!(parse_key("fx"), None);
}

#[test]
fn defaults_fill_missing_fields() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.tick_ms, 16);
    assert_eq!(settings.fallback_size(), Size::new(80, 24));
    assert_eq!(settings.quit_key(), None);
}

#[test]
fn quit_key_override_parses() {
    let settings: Settings =
        serde_json::from_str(r#"{"quit_key":"ctrl+x","fallback_size":{"columns":100,"rows":30}}"#)
            .unwrap();
    assert_eq!(settings.quit_key(), Some(Key::ctrl(KeyCode::Char('x'))));
    assert_eq!(settings.fallback_size(), Size::new(100, 30));

    let bad = Settings {
        quit_key: Some("nope".to_string()),
        ..Settings::default()
    };
    assert_eq!(bad.quit_key(), None);
}

#[test]
fn ensure_writes_defaults_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    ensure_settings_file_at(&path).unwrap();
    assert_eq!(load_settings_from(&path), Some(Settings::default()));

    std::fs::write(&path, r#"{"tick_ms":5}"#).unwrap();
    ensure_settings_file_at(&path).unwrap();
    assert_eq!(load_settings_from(&path).unwrap().tick_ms, 5);
}

#[test]
fn missing_or_malformed_file_loads_as_none() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    assert_eq!(load_settings_from(&path), None);

    std::fs::write(&path, "{ not json").unwrap();
    assert_eq!(load_settings_from(&path), None);
}

use cmdbar_core::config::{HidePolicy, PlacementConfig, PopupOffset};
use cmdbar_services::SettingsRegistry;
use std::fs;

#[test]
fn test_defaults_without_files() {
    let registry = SettingsRegistry::with_defaults();
    assert_eq!(registry.placement_config().unwrap(), PlacementConfig::default());
}

#[test]
fn test_load_from_paths_later_files_override() {
    let dir = tempfile::tempdir().unwrap();

    let system_path = dir.path().join("system.toml");
    fs::write(
        &system_path,
        r#"
[placement]
menu_popup_offset = { x = 1, y = 2 }
submenu_popup_offset = { x = -3, y = -5 }

[behavior]
hide_policy = "delayed"
open_delay_ms = 200
"#,
    )
    .unwrap();

    let user_path = dir.path().join("user.toml");
    fs::write(
        &user_path,
        r#"
[placement]
menu_popup_offset = { x = 4 }

[behavior]
hide_grace_ms = 50

[accessibility]
large_targets = true
"#,
    )
    .unwrap();

    let mut registry = SettingsRegistry::with_defaults();
    let results = smol::block_on(registry.load_from_paths_async(vec![system_path, user_path]));
    assert!(results.iter().all(|result| result.is_ok()));

    let config = registry.placement_config().unwrap();
    assert_eq!(config.menu_popup_offset, PopupOffset::new(4, 0));
    assert_eq!(config.submenu_popup_offset, PopupOffset::new(-3, -5));
    assert_eq!(config.hide_policy, HidePolicy::Delayed);
    assert_eq!(config.open_delay_ms, 200);
    assert_eq!(config.hide_grace_ms, 50);
    assert!(registry.get().other.contains_key("accessibility"));
}

#[test]
fn test_load_from_paths_reports_bad_files() {
    let dir = tempfile::tempdir().unwrap();

    let broken_path = dir.path().join("broken.toml");
    fs::write(&broken_path, "[behavior\nhide_policy = ").unwrap();
    let missing_path = dir.path().join("missing.toml");
    let good_path = dir.path().join("good.toml");
    fs::write(&good_path, "[behavior]\nopen_delay_ms = 100\n").unwrap();

    let mut registry = SettingsRegistry::with_defaults();
    let results = smol::block_on(registry.load_from_paths_async(vec![
        broken_path,
        missing_path,
        good_path,
    ]));

    assert_eq!(results.len(), 3);
    assert!(results[0].is_err());
    assert!(results[1].is_err());
    assert!(results[2].is_ok());
    assert_eq!(registry.placement_config().unwrap().open_delay_ms, 100);
}

use super::*;

#[test]
fn theme_mode_defaults_to_system() {
    assert_eq!(ThemeMode::default(), ThemeMode::System);
}

#[test]
fn theme_mode_parses_known_values() {
    assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
    assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
    assert_eq!("system".parse::<ThemeMode>(), Ok(ThemeMode::System));
}

#[test]
fn theme_mode_rejects_unknown_values() {
    let err = "Dark".parse::<ThemeMode>().unwrap_err();
    assert_eq!(err.to_string(), "unknown theme mode: Dark");
}

#[test]
fn from_stored_falls_back_to_system() {
    assert_eq!(ThemeMode::from_stored(None), ThemeMode::System);
    assert_eq!(ThemeMode::from_stored(Some("")), ThemeMode::System);
    assert_eq!(ThemeMode::from_stored(Some("sepia")), ThemeMode::System);
    assert_eq!(ThemeMode::from_stored(Some("light")), ThemeMode::Light);
}

#[test]
fn theme_mode_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
    let parsed: ThemeMode = serde_json::from_str("\"system\"").unwrap();
    assert_eq!(parsed, ThemeMode::System);
}

#[test]
fn switch_order_is_light_system_dark() {
    assert_eq!(ThemeMode::ALL, [ThemeMode::Light, ThemeMode::System, ThemeMode::Dark]);
}

// =============================================================
// resolve_effective_theme

#[test]
fn explicit_modes_ignore_os_preference() {
    assert_eq!(resolve_effective_theme(ThemeMode::Light, true), EffectiveTheme::Light);
    assert_eq!(resolve_effective_theme(ThemeMode::Dark, false), EffectiveTheme::Dark);
}

#[test]
fn system_mode_follows_os_preference() {
    assert_eq!(resolve_effective_theme(ThemeMode::System, true), EffectiveTheme::Dark);
    assert_eq!(resolve_effective_theme(ThemeMode::System, false), EffectiveTheme::Light);
}

use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::util::color_scheme_bus::Subscription;

#[derive(Default)]
struct MemoryThemeHost {
    stored: Mutex<Option<String>>,
    attribute: Mutex<Option<String>>,
    os_dark: bool,
    fail_writes: bool,
    queries: Mutex<Vec<String>>,
}

impl MemoryThemeHost {
    fn with_os_dark(os_dark: bool) -> Self {
        Self { os_dark, ..Self::default() }
    }

    fn with_stored(self, value: &str) -> Self {
        *self.stored.lock().unwrap() = Some(value.to_owned());
        self
    }

    fn stored(&self) -> Option<String> {
        self.stored.lock().unwrap().clone()
    }

    fn attribute(&self) -> Option<String> {
        self.attribute.lock().unwrap().clone()
    }
}

impl ThemeHost for MemoryThemeHost {
    fn stored_mode(&self) -> Option<String> {
        self.stored()
    }

    fn store_mode(&self, mode: ThemeMode) -> Result<(), ThemeError> {
        if self.fail_writes {
            return Err(ThemeError::Storage("QuotaExceededError".to_owned()));
        }
        *self.stored.lock().unwrap() = Some(mode.as_str().to_owned());
        Ok(())
    }

    fn prefers_color_scheme(&self, scheme: &str) -> bool {
        self.queries.lock().unwrap().push(scheme.to_owned());
        match scheme {
            "dark" => self.os_dark,
            "light" => !self.os_dark,
            _ => false,
        }
    }

    fn set_color_mode(&self, value: &str) {
        *self.attribute.lock().unwrap() = Some(value.to_owned());
    }
}

fn controller(host: MemoryThemeHost) -> (ThemeController<MemoryThemeHost>, Arc<AtomicUsize>, Subscription) {
    let bus = ColorSchemeBus::new();
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_clone = Arc::clone(&hits);
    let sub = bus.subscribe(move || {
        hits_clone.fetch_add(1, Ordering::SeqCst);
    });
    (ThemeController::new(host, bus), hits, sub)
}

/// Mount sequence: read the stored preference, then apply it.
fn mount(ctrl: &ThemeController<MemoryThemeHost>) -> ThemeMode {
    let mode = ctrl.initial_mode();
    ctrl.set_mode(mode).unwrap();
    mode
}

// =============================================================
// color_mode_attribute

#[test]
fn explicit_modes_are_applied_directly() {
    assert_eq!(color_mode_attribute(ThemeMode::Light, true, |_| true), "light");
    assert_eq!(color_mode_attribute(ThemeMode::Dark, false, |_| false), "dark");
}

#[test]
fn stored_system_follows_dark_query() {
    assert_eq!(color_mode_attribute(ThemeMode::System, true, |s| s == "dark"), "dark");
    assert_eq!(color_mode_attribute(ThemeMode::System, true, |_| false), "light");
}

#[test]
fn unstored_system_with_matching_literal_query_is_applied_verbatim() {
    assert_eq!(color_mode_attribute(ThemeMode::System, false, |s| s == "system"), "system");
}

#[test]
fn unstored_system_without_literal_match_follows_dark_query() {
    assert_eq!(color_mode_attribute(ThemeMode::System, false, |s| s == "dark"), "dark");
}

// =============================================================
// mount

#[test]
fn mount_without_preference_and_os_dark_applies_dark() {
    let (ctrl, _, _sub) = controller(MemoryThemeHost::with_os_dark(true));
    assert_eq!(mount(&ctrl), ThemeMode::System);
    assert_eq!(ctrl.host().attribute().as_deref(), Some("dark"));
}

#[test]
fn mount_without_preference_and_os_light_applies_light() {
    let (ctrl, _, _sub) = controller(MemoryThemeHost::with_os_dark(false));
    mount(&ctrl);
    assert_eq!(ctrl.host().attribute().as_deref(), Some("light"));
}

#[test]
fn mount_persists_system_default() {
    let (ctrl, _, _sub) = controller(MemoryThemeHost::with_os_dark(false));
    mount(&ctrl);
    assert_eq!(ctrl.host().stored().as_deref(), Some("system"));
}

#[test]
fn mount_with_stored_light_ignores_os_dark() {
    let (ctrl, _, _sub) = controller(MemoryThemeHost::with_os_dark(true).with_stored("light"));
    assert_eq!(mount(&ctrl), ThemeMode::Light);
    assert_eq!(ctrl.host().attribute().as_deref(), Some("light"));
}

#[test]
fn mount_with_unknown_stored_value_uses_system() {
    let (ctrl, _, _sub) = controller(MemoryThemeHost::with_os_dark(true).with_stored("sepia"));
    assert_eq!(mount(&ctrl), ThemeMode::System);
    assert_eq!(ctrl.host().attribute().as_deref(), Some("dark"));
}

#[test]
fn mount_never_queries_literal_system_scheme() {
    let (ctrl, _, _sub) = controller(MemoryThemeHost::with_os_dark(false));
    mount(&ctrl);
    let queries = ctrl.host().queries.lock().unwrap().clone();
    assert_eq!(queries, vec!["dark".to_owned()]);
}

// =============================================================
// set_mode

#[test]
fn set_mode_persists_every_mode() {
    let (ctrl, _, _sub) = controller(MemoryThemeHost::with_os_dark(false));
    for mode in ThemeMode::ALL {
        ctrl.set_mode(mode).unwrap();
        assert_eq!(ctrl.host().stored().as_deref(), Some(mode.as_str()));
    }
}

#[test]
fn set_mode_returns_applied_attribute() {
    let (ctrl, _, _sub) = controller(MemoryThemeHost::with_os_dark(true));
    assert_eq!(ctrl.set_mode(ThemeMode::Light), Ok("light"));
    assert_eq!(ctrl.set_mode(ThemeMode::System), Ok("dark"));
    assert_eq!(ctrl.host().attribute().as_deref(), Some("dark"));
}

#[test]
fn each_mode_change_broadcasts_once() {
    let (ctrl, hits, _sub) = controller(MemoryThemeHost::with_os_dark(false));
    ctrl.set_mode(ThemeMode::Dark).unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    ctrl.set_mode(ThemeMode::Dark).unwrap();
    ctrl.set_mode(ThemeMode::System).unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[test]
fn failed_persist_skips_apply_and_broadcast() {
    let host = MemoryThemeHost { fail_writes: true, ..MemoryThemeHost::default() };
    let (ctrl, hits, _sub) = controller(host);

    let err = ctrl.set_mode(ThemeMode::Dark).unwrap_err();
    assert_eq!(err.to_string(), "failed to persist theme preference: QuotaExceededError");
    assert_eq!(ctrl.host().attribute(), None);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

// =============================================================
// BrowserThemeHost outside the browser

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_host_is_inert_without_hydrate() {
    let host = BrowserThemeHost;
    assert_eq!(host.stored_mode(), None);
    assert_eq!(host.store_mode(ThemeMode::Dark), Ok(()));
    assert!(!host.prefers_color_scheme("dark"));
    host.set_color_mode("dark");
}

//! Theme persistence and document color-mode application.
//!
//! Reads the user's preference from `localStorage` (key `theme`) and writes a
//! `data-color-mode` attribute on the `<html>` element. Every mode change is
//! persisted, applied, then announced on the [`ColorSchemeBus`].
//!
//! TRADE-OFFS
//! ==========
//! Browser access sits behind [`ThemeHost`] so the resolution policy can be
//! tested without a DOM. On SSR the browser host is inert: nothing is stored
//! and the OS is assumed to prefer light.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::{ThemeMode, resolve_effective_theme};
use crate::util::color_scheme_bus::ColorSchemeBus;

pub const STORAGE_KEY: &str = "theme";
pub const COLOR_MODE_ATTRIBUTE: &str = "data-color-mode";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("local storage is unavailable")]
    StorageUnavailable,
    #[error("failed to persist theme preference: {0}")]
    Storage(String),
}

/// Browser capabilities the theme switch depends on.
pub trait ThemeHost {
    /// Raw persisted preference, `None` when nothing is stored.
    fn stored_mode(&self) -> Option<String>;

    /// Persist `mode` under [`STORAGE_KEY`].
    ///
    /// # Errors
    ///
    /// Returns an error if storage is missing or rejects the write.
    fn store_mode(&self, mode: ThemeMode) -> Result<(), ThemeError>;

    /// Whether `(prefers-color-scheme: <scheme>)` currently matches.
    fn prefers_color_scheme(&self, scheme: &str) -> bool;

    /// Write the document's [`COLOR_MODE_ATTRIBUTE`].
    fn set_color_mode(&self, value: &str);
}

/// Value for the document attribute after `mode` has been persisted.
///
/// An explicit light/dark choice is applied as-is. `System` is applied
/// verbatim only when no preference is stored and the media query for the
/// literal mode name matches; otherwise it follows `prefers-color-scheme: dark`.
pub fn color_mode_attribute<F>(mode: ThemeMode, preference_stored: bool, prefers: F) -> &'static str
where
    F: Fn(&str) -> bool,
{
    if mode != ThemeMode::System || (!preference_stored && prefers(mode.as_str())) {
        mode.as_str()
    } else {
        resolve_effective_theme(mode, prefers("dark")).as_str()
    }
}

/// Binds the mode-setting routine to a host and a broadcast channel.
#[derive(Clone)]
pub struct ThemeController<H> {
    host: H,
    bus: ColorSchemeBus,
}

impl<H: ThemeHost> ThemeController<H> {
    pub fn new(host: H, bus: ColorSchemeBus) -> Self {
        Self { host, bus }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Persisted preference, `System` when absent or unrecognised.
    pub fn initial_mode(&self) -> ThemeMode {
        ThemeMode::from_stored(self.host.stored_mode().as_deref())
    }

    /// Persist `mode`, apply the resolved attribute and broadcast the change.
    ///
    /// Returns the attribute value that was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference cannot be persisted; nothing is
    /// applied or broadcast in that case.
    pub fn set_mode(&self, mode: ThemeMode) -> Result<&'static str, ThemeError> {
        self.host.store_mode(mode)?;
        let stored = self.host.stored_mode().is_some();
        let attribute = color_mode_attribute(mode, stored, |scheme| self.host.prefers_color_scheme(scheme));
        self.host.set_color_mode(attribute);
        self.bus.publish();
        Ok(attribute)
    }
}

/// `localStorage` + `matchMedia` + `<html>` attribute.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserThemeHost;

impl ThemeHost for BrowserThemeHost {
    fn stored_mode(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn store_mode(&self, mode: ThemeMode) -> Result<(), ThemeError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or(ThemeError::StorageUnavailable)?;
            storage
                .set_item(STORAGE_KEY, mode.as_str())
                .map_err(|e| ThemeError::Storage(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = mode;
            Ok(())
        }
    }

    fn prefers_color_scheme(&self, scheme: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.match_media(&format!("(prefers-color-scheme: {scheme})")).ok().flatten())
                .map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = scheme;
            false
        }
    }

    fn set_color_mode(&self, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
            {
                let _ = el.set_attribute(COLOR_MODE_ATTRIBUTE, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
        }
    }
}

//! Client state modules.
//!
//! DESIGN
//! ======
//! Plain data types shared through Leptos context. None of them touch the
//! browser directly; that lives in `util` and `net`.

pub mod config;
pub mod i18n;
pub mod theme;

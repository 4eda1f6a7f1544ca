//! Utility helpers shared across footer modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component
//! logic to improve reuse and testability.

pub mod color_scheme_bus;
pub mod site;
pub mod theme;

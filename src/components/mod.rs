//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Footer` is the only stateful component; the rest are presentational
//! pieces it composes.

pub mod footer;
pub mod popup;
pub mod spliter;
pub mod theme_button;

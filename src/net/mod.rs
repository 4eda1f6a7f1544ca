//! Network access for the footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! All requests are same-origin `GET`s issued from the browser only. SSR
//! builds get inert stand-ins so server rendering stays deterministic.

pub mod api;
pub mod cdn;
pub mod count;

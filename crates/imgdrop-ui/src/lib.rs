//! imgdrop UI Components
//!
//! Small Dioxus building blocks shared by the desktop app: icon buttons, a
//! spinner, a phase badge, and the toast queue that carries upload notices.
//!
//! Styling lives in the app's global stylesheet; components only emit class
//! names.

pub mod components;

pub use components::*;

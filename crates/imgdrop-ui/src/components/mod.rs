//! Reusable UI components
//!
//! Every component renders plain elements with BEM-style class names
//! (`toast`, `toast__title`, `toast--success`).

mod button;
mod phase_badge;
mod spinner;
mod toast;

pub use button::*;
pub use phase_badge::*;
pub use spinner::*;
pub use toast::*;

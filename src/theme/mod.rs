//! Visual theme for imgdrop.

mod styles;

pub use styles::GLOBAL_STYLES;

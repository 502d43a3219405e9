//! Command implementations for LCBview CLI

pub mod info;
pub mod hover;
pub mod reorient;
pub mod swap;

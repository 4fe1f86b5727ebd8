//! Terminal formatting and display functions

pub mod colors;
pub mod display;

pub use colors::*;
pub use display::*;

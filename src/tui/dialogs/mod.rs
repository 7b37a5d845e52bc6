//! Dialog overlays

pub mod help;

//! Core types for updesc: where the plugin lives, what version the build
//! produced, and the XML update descriptor that ties the two together.

pub mod build_info;
pub mod config;
pub mod coordinate;
pub mod descriptor;

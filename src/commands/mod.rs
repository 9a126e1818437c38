//! Command implementations for Skillport CLI

pub mod completions;
pub mod install;
pub mod list;

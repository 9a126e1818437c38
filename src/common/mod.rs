//! Common utility modules for shared functionality across the codebase.

pub mod dry_run;
pub mod fs;
#[cfg(test)]
pub mod memory_fs;

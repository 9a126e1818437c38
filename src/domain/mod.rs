//! Domain models for Skillport
//!
//! Pure descriptions of how a package is laid out and what an install produced.

pub mod layout;
pub mod unit;

pub use layout::{Category, Layout};
pub use unit::{InstallSummary, InstalledUnit, Section, UnitGroup};

//! Configuration: run settings and plugin manifests

pub mod manifest;
pub mod settings;

pub use manifest::PluginManifest;
pub use settings::Settings;

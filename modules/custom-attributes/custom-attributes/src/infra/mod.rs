//! Infrastructure adapters.

pub mod settings;

pub use settings::FileSettingsSource;

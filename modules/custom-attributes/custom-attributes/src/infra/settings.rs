//! File-backed settings source.
//!
//! Properties are read from a flat YAML file and may be overridden by
//! environment variables carrying a prefix. Underscores in variable names map
//! to dashes, so with the prefix `GUACAMOLE_` the variable
//! `GUACAMOLE_CUSTOM_ATTRIBUTES` overrides the `custom-attributes` key.
//!
//! ```yaml
//! custom-attributes: "rw:Profile:department:text,r:Profile:employeeId:text:EMP-"
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use arc_swap::ArcSwap;
use custom_attributes_sdk::{SettingsError, SettingsSource};
use figment::Figment;
use figment::providers::{Env, Format, Yaml};

pub struct FileSettingsSource {
    path: PathBuf,
    env_prefix: String,
    figment: ArcSwap<Figment>,
    revision: AtomicU64,
}

impl FileSettingsSource {
    /// Load settings from `path`, overlaid with variables starting with
    /// `env_prefix`. A missing file behaves like an empty one.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, env_prefix: impl Into<String>) -> Self {
        let path = path.into();
        let env_prefix = env_prefix.into();
        let figment = build(&path, &env_prefix);
        Self {
            path,
            env_prefix,
            figment: ArcSwap::from_pointee(figment),
            revision: AtomicU64::new(0),
        }
    }

    /// Re-read the file and environment, then bump the revision.
    pub fn reload(&self) {
        self.figment.store(Arc::new(build(&self.path, &self.env_prefix)));
        let revision = self.revision.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::info!(path = %self.path.display(), revision, "Reloaded settings");
    }
}

fn build(path: &Path, env_prefix: &str) -> Figment {
    Figment::new().merge(Yaml::file(path)).merge(
        Env::prefixed(env_prefix).map(|key| key.as_str().replace('_', "-").to_lowercase().into()),
    )
}

impl SettingsSource for FileSettingsSource {
    fn get_property(&self, name: &str) -> Result<Option<String>, SettingsError> {
        let figment = self.figment.load();
        let value = match figment.find_value(name) {
            Ok(value) => value,
            Err(e) if e.missing() => return Ok(None),
            Err(e) => return Err(SettingsError::retrieval(name, e.to_string())),
        };

        value
            .into_string()
            .map(Some)
            .ok_or_else(|| SettingsError::retrieval(name, "value is not a string"))
    }

    fn revision(&self) -> u64 {
        self.revision.load(Ordering::Acquire)
    }
}

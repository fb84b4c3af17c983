//! Shared configuration storage.
//!
//! The UI thread and the submission worker read from the same store; CLI
//! overrides are applied once through [`ConfigStore::update`].

use std::sync::{Arc, RwLock};

use crate::config::loader::ConfigError;
use crate::config::types::Config;

#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
}

impl ConfigStore {
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Snapshot of the current settings.
    pub fn get(&self) -> Config {
        self.inner.read().expect("config lock poisoned").clone()
    }

    /// Edit a copy, validate it, then swap it in. An invalid result leaves
    /// the store untouched.
    pub fn update<F: FnOnce(&mut Config)>(&self, apply: F) -> Result<(), ConfigError> {
        let mut candidate = self.get();
        apply(&mut candidate);
        candidate.validate()?;
        *self.inner.write().expect("config lock poisoned") = candidate;
        Ok(())
    }
}

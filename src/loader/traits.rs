//! Core traits for module loading.
//!
//! Defines the `SerialModule` trait that lets the real serial backend and
//! test doubles be registered with the same registry.

use super::error::LoadResult;
use serde::{Deserialize, Serialize};

/// Description of a successfully initialized module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleHandle {
    /// Package name the module was requested by.
    pub name: String,

    /// Backend that satisfied the request (e.g. "native").
    pub backend: String,

    /// Operating system the backend was initialized on.
    pub platform: String,
}

impl ModuleHandle {
    /// Create a handle for the current platform.
    pub fn new(name: impl Into<String>, backend: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            backend: backend.into(),
            platform: std::env::consts::OS.to_string(),
        }
    }
}

/// A loadable serial-port module.
///
/// `initialize` is called at most once per registry for a successful load;
/// the registry caches the returned handle.
pub trait SerialModule: Send + Sync {
    /// Package name the module is registered under.
    fn name(&self) -> &'static str;

    /// Resolve and initialize the module's backend.
    fn initialize(&self) -> LoadResult<ModuleHandle>;
}

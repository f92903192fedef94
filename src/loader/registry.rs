//! Module registry with a memoized load cache.

use super::error::{LoadError, LoadResult};
use super::native::NativeSerialModule;
use super::traits::{ModuleHandle, SerialModule};
use once_cell::sync::Lazy;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

static GLOBAL: Lazy<Arc<ModuleRegistry>> = Lazy::new(|| Arc::new(ModuleRegistry::with_builtin()));

/// Resolves modules by name and caches successful loads.
///
/// A module's initializer runs at most once per registry as long as it
/// succeeds. Failed loads are not cached, so the next attempt retries.
///
/// # Example
/// ```
/// use serial_smoke::loader::ModuleRegistry;
///
/// let registry = ModuleRegistry::with_builtin();
/// let handle = registry.load("serialport")?;
/// assert_eq!(handle.name, "serialport");
/// assert!(registry.load("serialport-missing").is_err());
/// # Ok::<(), serial_smoke::loader::LoadError>(())
/// ```
#[derive(Default)]
pub struct ModuleRegistry {
    modules: RwLock<HashMap<&'static str, Arc<dyn SerialModule>>>,
    cache: Mutex<HashMap<String, Arc<ModuleHandle>>>,
}

impl ModuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the native `serialport` module registered.
    pub fn with_builtin() -> Self {
        let registry = Self::new();
        registry.register(NativeSerialModule);
        registry
    }

    /// Process-wide registry shared by the CLI and the default smoke suites.
    pub fn global() -> Arc<ModuleRegistry> {
        Arc::clone(&GLOBAL)
    }

    /// Register a module under its own name, replacing any previous entry.
    ///
    /// Replacing a module drops its cached handle.
    pub fn register<M: SerialModule + 'static>(&self, module: M) {
        let name = module.name();
        if self.modules.write().insert(name, Arc::new(module)).is_some() {
            self.cache.lock().remove(name);
        }
        debug!("Registered module '{}'", name);
    }

    /// Resolve and initialize a module, returning the cached handle when
    /// the module was already loaded.
    pub fn load(&self, name: &str) -> LoadResult<Arc<ModuleHandle>> {
        // The cache lock is held across initialization so concurrent loads
        // of the same module cannot both run the initializer.
        let mut cache = self.cache.lock();
        if let Some(handle) = cache.get(name) {
            debug!("Module '{}' served from cache", name);
            return Ok(Arc::clone(handle));
        }

        let module = self.modules.read().get(name).cloned();
        let Some(module) = module else {
            let err = LoadError::not_found(name);
            warn!("{}", err);
            return Err(err);
        };

        let handle = match module.initialize() {
            Ok(handle) => Arc::new(handle),
            Err(e) => {
                warn!("{}", e);
                return Err(e);
            }
        };
        debug!(
            "Loaded module '{}' ({} backend on {})",
            handle.name, handle.backend, handle.platform
        );
        cache.insert(name.to_string(), Arc::clone(&handle));
        Ok(handle)
    }

    /// Whether a module has been successfully loaded.
    pub fn is_loaded(&self, name: &str) -> bool {
        self.cache.lock().contains_key(name)
    }

    /// Names of all registered modules, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.modules.read().keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("modules", &self.names())
            .field("loaded", &self.cache.lock().len())
            .finish()
    }
}

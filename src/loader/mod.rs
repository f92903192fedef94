//! Module loading for the serial-port dependency.
//!
//! Dependencies are resolved by package name through a [`ModuleRegistry`],
//! which memoizes successful loads so a native backend is initialized once
//! per process.

pub mod error;
pub mod native;
pub mod registry;
pub mod traits;

pub use error::{LoadError, LoadResult};
pub use native::{NativeSerialModule, MODULE_NAME};
pub use registry::ModuleRegistry;
pub use traits::{ModuleHandle, SerialModule};

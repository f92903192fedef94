//! Native serial module backed by the `serialport` crate.

use super::error::{LoadError, LoadResult};
use super::traits::{ModuleHandle, SerialModule};
use std::time::Duration;
use tracing::debug;

/// Package name the native module is registered under.
pub const MODULE_NAME: &str = "serialport";

/// Device path used to build a port description. Never opened.
#[cfg(windows)]
const PROBE_PATH: &str = "COM1";
#[cfg(not(windows))]
const PROBE_PATH: &str = "/dev/null";

const PROBE_BAUD: u32 = 9600;

/// The `serialport` crate, exposed as a loadable module.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeSerialModule;

impl SerialModule for NativeSerialModule {
    fn name(&self) -> &'static str {
        MODULE_NAME
    }

    fn initialize(&self) -> LoadResult<ModuleHandle> {
        if !cfg!(any(unix, windows)) {
            return Err(LoadError::unsupported(MODULE_NAME));
        }

        // Builds an 8N1 description through the backend's config types; no device is touched.
        let _builder = serialport::new(PROBE_PATH, PROBE_BAUD)
            .data_bits(serialport::DataBits::Eight)
            .parity(serialport::Parity::None)
            .stop_bits(serialport::StopBits::One)
            .flow_control(serialport::FlowControl::None)
            .timeout(Duration::from_millis(100));

        debug!("Native serial backend ready on {}", std::env::consts::OS);
        Ok(ModuleHandle::new(MODULE_NAME, "native"))
    }
}

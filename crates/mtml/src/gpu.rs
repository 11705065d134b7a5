//! GPU-scope calls: engine utilization, clocks and temperature.

use std::ffi::c_uint;

use mtml_sys as sys;

use crate::device::u32_getter;
use crate::error::{Result, check};
use crate::handles::Gpu;
use crate::lifecycle::resolve;
use crate::types::GpuEngine;

impl Gpu {
    u32_getter!(
        /// Overall GPU utilization percentage.
        utilization,
        sys::FnMtmlGpuGetUtilization,
        "mtmlGpuGetUtilization"
    );

    u32_getter!(
        /// Current GPU clock in MHz.
        clock,
        sys::FnMtmlGpuGetClock,
        "mtmlGpuGetClock"
    );

    u32_getter!(
        /// Maximum GPU clock in MHz.
        max_clock,
        sys::FnMtmlGpuGetMaxClock,
        "mtmlGpuGetMaxClock"
    );

    u32_getter!(
        /// GPU die temperature in degrees Celsius.
        temperature,
        sys::FnMtmlGpuGetTemperature,
        "mtmlGpuGetTemperature"
    );

    /// Utilization percentage of one engine.
    pub fn engine_utilization(&self, engine: GpuEngine) -> Result<u32> {
        let f: sys::FnMtmlGpuGetEngineUtilization = resolve("mtmlGpuGetEngineUtilization")?;
        let mut util: c_uint = 0;
        check(unsafe { f(self.raw, engine.as_raw(), &mut util) })?;
        Ok(util)
    }

    /// Releases this GPU handle.
    pub fn free(self) -> Result<()> {
        let f: sys::FnMtmlDeviceFreeGpu = resolve("mtmlDeviceFreeGpu")?;
        check(unsafe { f(self.raw) })
    }
}

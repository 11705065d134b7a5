//! Memory-scope calls: capacity, clocks, ECC and page retirement.

use std::ffi::{c_char, c_uint, c_ulonglong};

use mtml_sys as sys;

use crate::device::u32_getter;
use crate::error::{Result, check};
use crate::handles::Memory;
use crate::lifecycle::resolve;

macro_rules! u64_getter {
    ($(#[$doc:meta])* $method:ident, $alias:ty, $symbol:literal) => {
        $(#[$doc])*
        pub fn $method(&self) -> Result<u64> {
            let f: $alias = resolve($symbol)?;
            let mut value: c_ulonglong = 0;
            check(unsafe { f(self.raw, &mut value) })?;
            Ok(value)
        }
    };
}

impl Memory {
    u64_getter!(
        /// Total device memory in bytes.
        total,
        sys::FnMtmlMemoryGetTotal,
        "mtmlMemoryGetTotal"
    );

    u64_getter!(
        /// Device memory currently in use, in bytes.
        used,
        sys::FnMtmlMemoryGetUsed,
        "mtmlMemoryGetUsed"
    );

    u64_getter!(
        /// System memory used on behalf of the device, in bytes.
        used_system,
        sys::FnMtmlMemoryGetUsedSystem,
        "mtmlMemoryGetUsedSystem"
    );

    u32_getter!(
        /// Current memory clock in MHz.
        clock,
        sys::FnMtmlMemoryGetClock,
        "mtmlMemoryGetClock"
    );

    u32_getter!(
        /// Maximum memory clock in MHz.
        max_clock,
        sys::FnMtmlMemoryGetMaxClock,
        "mtmlMemoryGetMaxClock"
    );

    u32_getter!(
        /// Memory controller utilization percentage.
        utilization,
        sys::FnMtmlMemoryGetUtilization,
        "mtmlMemoryGetUtilization"
    );

    u32_getter!(
        /// Memory bus width in bits.
        bus_width,
        sys::FnMtmlMemoryGetBusWidth,
        "mtmlMemoryGetBusWidth"
    );

    u32_getter!(
        /// Peak memory bandwidth in GB/s.
        bandwidth,
        sys::FnMtmlMemoryGetBandwidth,
        "mtmlMemoryGetBandwidth"
    );

    u32_getter!(
        /// Memory speed in Gbps per pin.
        speed,
        sys::FnMtmlMemoryGetSpeed,
        "mtmlMemoryGetSpeed"
    );

    u32_getter!(
        /// Memory technology, one of the `MTML_MEM_TYPE_*` values.
        mem_type,
        sys::FnMtmlMemoryGetType,
        "mtmlMemoryGetType"
    );

    /// Memory chip vendor name.
    ///
    /// Takes the buffer length before the buffer, like the device serial
    /// number getter.
    pub fn vendor(&self) -> Result<String> {
        let f: sys::FnMtmlMemoryGetVendor = resolve("mtmlMemoryGetVendor")?;
        let mut buf = [0 as c_char; sys::MTML_MEMORY_VENDOR_BUFFER_SIZE];
        check(unsafe { f(self.raw, buf.len() as c_uint, buf.as_mut_ptr()) })?;
        Ok(sys::c_buf_to_string(&buf))
    }

    /// Current and pending ECC mode (`MTML_MEMORY_ECC_*`).
    pub fn ecc_mode(&self) -> Result<(u32, u32)> {
        let f: sys::FnMtmlMemoryGetEccMode = resolve("mtmlMemoryGetEccMode")?;
        let mut current: c_uint = 0;
        let mut pending: c_uint = 0;
        check(unsafe { f(self.raw, &mut current, &mut pending) })?;
        Ok((current, pending))
    }

    /// Retired page counts split by ECC error kind.
    pub fn retired_pages_count(&self) -> Result<sys::MtmlPageRetirementCount> {
        let f: sys::FnMtmlMemoryGetRetiredPagesCount = resolve("mtmlMemoryGetRetiredPagesCount")?;
        let mut count = sys::MtmlPageRetirementCount::default();
        check(unsafe { f(self.raw, &mut count) })?;
        Ok(count)
    }

    /// Addresses and timestamps of pages retired for `cause`.
    pub fn retired_pages(&self, cause: u32, count: u32) -> Result<Vec<sys::MtmlPageRetirement>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let f: sys::FnMtmlMemoryGetRetiredPages = resolve("mtmlMemoryGetRetiredPages")?;
        let mut pages = vec![sys::MtmlPageRetirement::default(); count as usize];
        check(unsafe { f(self.raw, cause, count, pages.as_mut_ptr()) })?;
        Ok(pages)
    }

    /// Whether a page retirement is waiting for a reboot to take effect.
    pub fn retired_pages_pending(&self) -> Result<bool> {
        let f: sys::FnMtmlMemoryGetRetiredPagesPendingStatus =
            resolve("mtmlMemoryGetRetiredPagesPendingStatus")?;
        let mut pending: c_uint = 0;
        check(unsafe { f(self.raw, &mut pending) })?;
        Ok(pending == sys::MTML_RETIRED_PAGES_PENDING_STATE_TRUE)
    }

    /// ECC error count for one error type, counter type and location.
    pub fn ecc_error_counter(
        &self,
        error_type: u32,
        counter_type: u32,
        location: u32,
    ) -> Result<u64> {
        let f: sys::FnMtmlMemoryGetEccErrorCounter = resolve("mtmlMemoryGetEccErrorCounter")?;
        let mut count: c_ulonglong = 0;
        check(unsafe { f(self.raw, error_type, counter_type, location, &mut count) })?;
        Ok(count)
    }

    /// Clears the given ECC error counter.
    pub fn clear_ecc_error_counts(&self, counter_type: u32) -> Result<()> {
        let f: sys::FnMtmlMemoryClearEccErrorCounts = resolve("mtmlMemoryClearEccErrorCounts")?;
        check(unsafe { f(self.raw, counter_type) })
    }

    /// Releases this memory handle.
    pub fn free(self) -> Result<()> {
        let f: sys::FnMtmlDeviceFreeMemory = resolve("mtmlDeviceFreeMemory")?;
        check(unsafe { f(self.raw) })
    }
}

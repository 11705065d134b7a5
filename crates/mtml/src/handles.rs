//! Typed wrappers over the raw native handles.
//!
//! Each wrapper is a plain `Copy` value carrying the opaque pointer the
//! driver handed out. Nothing is freed on drop; ownership stays with the
//! caller, who releases device handles through [`crate::free_device`]
//! and system handles through [`crate::free_system`], exactly as the
//! native contract requires.

use mtml_sys as sys;

macro_rules! handle {
    ($(#[$doc:meta])* $name:ident, $raw:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            pub(crate) raw: $raw,
        }

        unsafe impl Send for $name {}
        unsafe impl Sync for $name {}

        impl $name {
            /// The underlying native handle.
            pub fn as_raw(&self) -> $raw {
                self.raw
            }

            /// Wraps a handle obtained from the driver elsewhere.
            ///
            /// # Safety
            ///
            /// `raw` must be a live handle of this kind returned by the
            /// native library in this process.
            pub unsafe fn from_raw(raw: $raw) -> Self {
                Self { raw }
            }
        }
    };
}

handle!(
    /// A physical device enumerated by the driver.
    Device,
    sys::MtmlDevice
);
handle!(
    /// System-scope queries, such as the driver version.
    System,
    sys::MtmlSystem
);
handle!(
    /// The memory subsystem of one device.
    Memory,
    sys::MtmlMemory
);
handle!(
    /// The graphics/compute engine of one device.
    Gpu,
    sys::MtmlGpu
);
handle!(
    /// The video codec engine of one device.
    Vpu,
    sys::MtmlVpu
);
handle!(
    /// A virtual device carved out of a physical one.
    ///
    /// Shares the device handle type on the wire but answers a different
    /// set of queries, so it gets its own wrapper.
    VirtDevice,
    sys::MtmlDevice
);

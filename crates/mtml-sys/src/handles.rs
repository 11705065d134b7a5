//! Opaque native handle types.
//!
//! The native library hands out pointers to private structures; callers
//! only ever pass them back. Each gets a dedicated zero-sized
//! `#[repr(C)]` target so the pointer types stay distinct at compile
//! time. Virtual devices share `MtmlDevice` on the wire; the typed
//! split happens in the `mtml` crate.

/// One successful load+init of the native library.
#[repr(C)]
pub struct MtmlLibraryOpaque {
    _private: [u8; 0],
}
pub type MtmlLibrary = *mut MtmlLibraryOpaque;

/// A physical (or virtual) accelerator.
#[repr(C)]
pub struct MtmlDeviceOpaque {
    _private: [u8; 0],
}
pub type MtmlDevice = *mut MtmlDeviceOpaque;

/// System-scope queries (driver version and the like).
#[repr(C)]
pub struct MtmlSystemOpaque {
    _private: [u8; 0],
}
pub type MtmlSystem = *mut MtmlSystemOpaque;

/// Memory sub-resource of a device.
#[repr(C)]
pub struct MtmlMemoryOpaque {
    _private: [u8; 0],
}
pub type MtmlMemory = *mut MtmlMemoryOpaque;

/// GPU engine sub-resource of a device.
#[repr(C)]
pub struct MtmlGpuOpaque {
    _private: [u8; 0],
}
pub type MtmlGpu = *mut MtmlGpuOpaque;

/// Video codec (VPU) sub-resource of a device.
#[repr(C)]
pub struct MtmlVpuOpaque {
    _private: [u8; 0],
}
pub type MtmlVpu = *mut MtmlVpuOpaque;

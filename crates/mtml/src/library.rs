//! Library-scope calls: enumeration, handle creation and release, and
//! the global log configuration.

use std::ffi::{CString, c_char, c_uint};
use std::ptr;

use mtml_sys as sys;

use crate::error::{MtmlError, Result, check};
use crate::handles::{Device, System};
use crate::lifecycle::{library_handle, resolve};

/// Version string of the loaded management library.
pub fn library_version() -> Result<String> {
    let f: sys::FnMtmlLibraryGetVersion = resolve("mtmlLibraryGetVersion")?;
    let lib = library_handle()?;
    let mut buf = [0 as c_char; sys::MTML_LIBRARY_VERSION_BUFFER_SIZE];
    check(unsafe { f(lib, buf.as_mut_ptr(), buf.len() as c_uint) })?;
    Ok(sys::c_buf_to_string(&buf))
}

/// Number of physical devices the driver sees.
pub fn device_count() -> Result<u32> {
    let f: sys::FnMtmlLibraryCountDevice = resolve("mtmlLibraryCountDevice")?;
    let lib = library_handle()?;
    let mut count: c_uint = 0;
    check(unsafe { f(lib, &mut count) })?;
    Ok(count)
}

/// Opens the device at the given enumeration index.
pub fn device_by_index(index: u32) -> Result<Device> {
    let f: sys::FnMtmlLibraryInitDeviceByIndex = resolve("mtmlLibraryInitDeviceByIndex")?;
    let lib = library_handle()?;
    let mut raw: sys::MtmlDevice = ptr::null_mut();
    check(unsafe { f(lib, index, &mut raw) })?;
    Ok(Device { raw })
}

/// Opens the device carrying the given UUID.
pub fn device_by_uuid(uuid: &str) -> Result<Device> {
    let f: sys::FnMtmlLibraryInitDeviceByUuid = resolve("mtmlLibraryInitDeviceByUuid")?;
    let lib = library_handle()?;
    let uuid = CString::new(uuid).map_err(|_| MtmlError::InvalidArgument)?;
    let mut raw: sys::MtmlDevice = ptr::null_mut();
    check(unsafe { f(lib, uuid.as_ptr(), &mut raw) })?;
    Ok(Device { raw })
}

/// Opens the device at the given PCI address (`segment:bus:device.function`).
pub fn device_by_pci_sbdf(sbdf: &str) -> Result<Device> {
    let f: sys::FnMtmlLibraryInitDeviceByPciSbdf = resolve("mtmlLibraryInitDeviceByPciSbdf")?;
    let lib = library_handle()?;
    let sbdf = CString::new(sbdf).map_err(|_| MtmlError::InvalidArgument)?;
    let mut raw: sys::MtmlDevice = ptr::null_mut();
    check(unsafe { f(lib, sbdf.as_ptr(), &mut raw) })?;
    Ok(Device { raw })
}

/// Releases a device handle obtained from any of the open calls.
pub fn free_device(dev: Device) -> Result<()> {
    let f: sys::FnMtmlLibraryFreeDevice = resolve("mtmlLibraryFreeDevice")?;
    check(unsafe { f(dev.raw) })
}

/// Opens the system-scope handle.
pub fn init_system() -> Result<System> {
    let f: sys::FnMtmlLibraryInitSystem = resolve("mtmlLibraryInitSystem")?;
    let lib = library_handle()?;
    let mut raw: sys::MtmlSystem = ptr::null_mut();
    check(unsafe { f(lib, &mut raw) })?;
    Ok(System { raw })
}

/// Releases a system handle.
pub fn free_system(system: System) -> Result<()> {
    let f: sys::FnMtmlLibraryFreeSystem = resolve("mtmlLibraryFreeSystem")?;
    check(unsafe { f(system.raw) })
}

/// Applies MPC configurations to several devices in one native call.
///
/// `devices` and `config_ids` pair up by position and must be the same
/// length.
pub fn set_mpc_configuration_in_batch(devices: &[Device], config_ids: &[u32]) -> Result<()> {
    if devices.len() != config_ids.len() {
        return Err(MtmlError::InvalidArgument);
    }
    let f: sys::FnMtmlLibrarySetMpcConfigurationInBatch =
        resolve("mtmlLibrarySetMpcConfigurationInBatch")?;
    let lib = library_handle()?;
    let raw: Vec<sys::MtmlDevice> = devices.iter().map(|d| d.raw).collect();
    check(unsafe {
        f(lib, raw.len() as c_uint, raw.as_ptr(), config_ids.as_ptr())
    })
}

/// Replaces the driver's log configuration.
pub fn log_set_configuration(config: &sys::MtmlLogConfiguration) -> Result<()> {
    let f: sys::FnMtmlLogSetConfiguration = resolve("mtmlLogSetConfiguration")?;
    check(unsafe { f(config) })
}

/// Reads the driver's current log configuration.
pub fn log_get_configuration() -> Result<sys::MtmlLogConfiguration> {
    let f: sys::FnMtmlLogGetConfiguration = resolve("mtmlLogGetConfiguration")?;
    let mut config = sys::MtmlLogConfiguration::default();
    check(unsafe { f(&mut config) })?;
    Ok(config)
}

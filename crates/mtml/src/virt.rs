//! Virtualization calls: virtual device types, instances and identity.

use std::ffi::{CString, c_char, c_uint};
use std::ptr;

use mtml_sys as sys;

use crate::device::u32_getter;
use crate::error::{MtmlError, Result, check};
use crate::handles::{Device, VirtDevice};
use crate::lifecycle::resolve;

impl Device {
    u32_getter!(
        /// Number of virtual device types this device supports.
        supported_virt_type_count,
        sys::FnMtmlDeviceCountSupportedVirtTypes,
        "mtmlDeviceCountSupportedVirtTypes"
    );

    /// Virtual device types this device supports.
    pub fn supported_virt_types(&self) -> Result<Vec<sys::MtmlVirtType>> {
        let count = self.supported_virt_type_count()?;
        self.virt_types("mtmlDeviceGetSupportedVirtTypes", count)
    }

    u32_getter!(
        /// Number of virtual device types currently instantiable.
        avail_virt_type_count,
        sys::FnMtmlDeviceCountAvailVirtTypes,
        "mtmlDeviceCountAvailVirtTypes"
    );

    /// Virtual device types currently instantiable on this device.
    pub fn avail_virt_types(&self) -> Result<Vec<sys::MtmlVirtType>> {
        let count = self.avail_virt_type_count()?;
        self.virt_types("mtmlDeviceGetAvailVirtTypes", count)
    }

    fn virt_types(&self, symbol: &'static str, count: u32) -> Result<Vec<sys::MtmlVirtType>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let f: sys::FnMtmlDeviceGetSupportedVirtTypes = resolve(symbol)?;
        let mut types = vec![sys::MtmlVirtType::default(); count as usize];
        check(unsafe { f(self.raw, types.as_mut_ptr(), count) })?;
        Ok(types)
    }

    /// How many more instances of `virt_type` can be created right now.
    pub fn avail_virt_device_count(&self, virt_type: &sys::MtmlVirtType) -> Result<u32> {
        let f: sys::FnMtmlDeviceCountAvailVirtDevices = resolve("mtmlDeviceCountAvailVirtDevices")?;
        let mut count: c_uint = 0;
        check(unsafe { f(self.raw, virt_type, &mut count) })?;
        Ok(count)
    }

    /// Upper bound of `virt_type` instances this device can host.
    pub fn max_virt_device_count(&self, virt_type: &sys::MtmlVirtType) -> Result<u32> {
        let f: sys::FnMtmlDeviceCountMaxVirtDevices = resolve("mtmlDeviceCountMaxVirtDevices")?;
        let mut count: c_uint = 0;
        check(unsafe { f(self.raw, virt_type, &mut count) })?;
        Ok(count)
    }

    u32_getter!(
        /// Number of virtual devices currently alive on this device.
        active_virt_device_count,
        sys::FnMtmlDeviceCountActiveVirtDevices,
        "mtmlDeviceCountActiveVirtDevices"
    );

    /// UUIDs of the virtual devices currently alive on this device.
    pub fn active_virt_device_uuids(&self) -> Result<Vec<String>> {
        let count = self.active_virt_device_count()?;
        if count == 0 {
            return Ok(Vec::new());
        }
        let f: sys::FnMtmlDeviceGetActiveVirtDeviceUuids =
            resolve("mtmlDeviceGetActiveVirtDeviceUuids")?;
        let entry = sys::MTML_DEVICE_UUID_BUFFER_SIZE;
        let mut buf = vec![0 as c_char; entry * count as usize];
        check(unsafe { f(self.raw, buf.as_mut_ptr(), entry as c_uint, count) })?;
        Ok(buf.chunks(entry).map(sys::c_buf_to_string).collect())
    }

    /// Opens the virtual device carrying the given UUID.
    pub fn init_virt_device(&self, uuid: &str) -> Result<VirtDevice> {
        let f: sys::FnMtmlDeviceInitVirtDevice = resolve("mtmlDeviceInitVirtDevice")?;
        let uuid = CString::new(uuid).map_err(|_| MtmlError::InvalidArgument)?;
        let mut raw: sys::MtmlDevice = ptr::null_mut();
        check(unsafe { f(self.raw, uuid.as_ptr(), &mut raw) })?;
        Ok(VirtDevice { raw })
    }
}

impl VirtDevice {
    /// The virtual device type this instance was created from.
    pub fn virt_type(&self) -> Result<sys::MtmlVirtType> {
        let f: sys::FnMtmlDeviceGetVirtType = resolve("mtmlDeviceGetVirtType")?;
        let mut virt_type = sys::MtmlVirtType::default();
        check(unsafe { f(self.raw, &mut virt_type) })?;
        Ok(virt_type)
    }

    /// UUID of the physical device backing this instance.
    pub fn phy_device_uuid(&self) -> Result<String> {
        let f: sys::FnMtmlDeviceGetPhyDeviceUuid = resolve("mtmlDeviceGetPhyDeviceUuid")?;
        let mut buf = [0 as c_char; sys::MTML_DEVICE_UUID_BUFFER_SIZE];
        check(unsafe { f(self.raw, buf.as_mut_ptr(), buf.len() as c_uint) })?;
        Ok(sys::c_buf_to_string(&buf))
    }

    /// Releases this virtual device handle.
    pub fn free(self) -> Result<()> {
        let f: sys::FnMtmlDeviceFreeVirtDevice = resolve("mtmlDeviceFreeVirtDevice")?;
        check(unsafe { f(self.raw) })
    }
}

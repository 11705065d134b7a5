//! MPC partitioning calls: profiles, configurations and instances.

use std::ffi::{CString, c_uint};
use std::ptr;

use mtml_sys as sys;

use crate::device::u32_getter;
use crate::error::{MtmlError, Result, check};
use crate::handles::Device;
use crate::lifecycle::resolve;

impl Device {
    /// Turns MPC mode on or off (`MTML_DEVICE_MPC_*`).
    pub fn set_mpc_mode(&self, mode: u32) -> Result<()> {
        let f: sys::FnMtmlDeviceSetMpcMode = resolve("mtmlDeviceSetMpcMode")?;
        check(unsafe { f(self.raw, mode) })
    }

    u32_getter!(
        /// Current MPC mode of this device.
        mpc_mode,
        sys::FnMtmlDeviceGetMpcMode,
        "mtmlDeviceGetMpcMode"
    );

    u32_getter!(
        /// Number of MPC profiles this device supports.
        supported_mpc_profile_count,
        sys::FnMtmlDeviceCountSupportedMpcProfiles,
        "mtmlDeviceCountSupportedMpcProfiles"
    );

    /// MPC profiles this device supports.
    pub fn supported_mpc_profiles(&self) -> Result<Vec<sys::MtmlMpcProfile>> {
        let count = self.supported_mpc_profile_count()?;
        if count == 0 {
            return Ok(Vec::new());
        }
        let f: sys::FnMtmlDeviceGetSupportedMpcProfiles =
            resolve("mtmlDeviceGetSupportedMpcProfiles")?;
        let mut profiles = vec![sys::MtmlMpcProfile::default(); count as usize];
        check(unsafe { f(self.raw, count, profiles.as_mut_ptr()) })?;
        Ok(profiles)
    }

    u32_getter!(
        /// Number of MPC configurations this device supports.
        supported_mpc_configuration_count,
        sys::FnMtmlDeviceCountSupportedMpcConfigurations,
        "mtmlDeviceCountSupportedMpcConfigurations"
    );

    /// MPC configurations this device supports.
    pub fn supported_mpc_configurations(&self) -> Result<Vec<sys::MtmlMpcConfiguration>> {
        let count = self.supported_mpc_configuration_count()?;
        if count == 0 {
            return Ok(Vec::new());
        }
        let f: sys::FnMtmlDeviceGetSupportedMpcConfigurations =
            resolve("mtmlDeviceGetSupportedMpcConfigurations")?;
        let mut configs = vec![sys::MtmlMpcConfiguration::default(); count as usize];
        check(unsafe { f(self.raw, count, configs.as_mut_ptr()) })?;
        Ok(configs)
    }

    /// The MPC configuration currently applied to this device.
    pub fn mpc_configuration(&self) -> Result<sys::MtmlMpcConfiguration> {
        let f: sys::FnMtmlDeviceGetMpcConfiguration = resolve("mtmlDeviceGetMpcConfiguration")?;
        let mut config = sys::MtmlMpcConfiguration::default();
        check(unsafe { f(self.raw, &mut config) })?;
        Ok(config)
    }

    /// Looks up a supported MPC configuration by name.
    pub fn mpc_configuration_by_name(&self, name: &str) -> Result<sys::MtmlMpcConfiguration> {
        let f: sys::FnMtmlDeviceGetMpcConfigurationByName =
            resolve("mtmlDeviceGetMpcConfigurationByName")?;
        let name = CString::new(name).map_err(|_| MtmlError::InvalidArgument)?;
        let mut config = sys::MtmlMpcConfiguration::default();
        check(unsafe { f(self.raw, name.as_ptr(), &mut config) })?;
        Ok(config)
    }

    /// Applies the MPC configuration with the given id.
    pub fn set_mpc_configuration(&self, config_id: u32) -> Result<()> {
        let f: sys::FnMtmlDeviceSetMpcConfiguration = resolve("mtmlDeviceSetMpcConfiguration")?;
        check(unsafe { f(self.raw, config_id) })
    }

    u32_getter!(
        /// Number of MPC instances alive on this device.
        mpc_instance_count,
        sys::FnMtmlDeviceCountMpcInstances,
        "mtmlDeviceCountMpcInstances"
    );

    /// MPC instances alive on this device.
    pub fn mpc_instances(&self) -> Result<Vec<Device>> {
        let count = self.mpc_instance_count()?;
        self.instance_list("mtmlDeviceGetMpcInstances", count)
    }

    /// Number of MPC instances created from one profile.
    pub fn mpc_instance_count_by_profile(&self, profile_id: u32) -> Result<u32> {
        let f: sys::FnMtmlDeviceCountMpcInstancesByProfileId =
            resolve("mtmlDeviceCountMpcInstancesByProfileId")?;
        let mut count: c_uint = 0;
        check(unsafe { f(self.raw, profile_id, &mut count) })?;
        Ok(count)
    }

    /// MPC instances created from one profile.
    pub fn mpc_instances_by_profile(&self, profile_id: u32) -> Result<Vec<Device>> {
        let count = self.mpc_instance_count_by_profile(profile_id)?;
        if count == 0 {
            return Ok(Vec::new());
        }
        let f: sys::FnMtmlDeviceGetMpcInstancesByProfileId =
            resolve("mtmlDeviceGetMpcInstancesByProfileId")?;
        let mut raw = vec![ptr::null_mut::<sys::MtmlDeviceOpaque>(); count as usize];
        check(unsafe { f(self.raw, profile_id, count, raw.as_mut_ptr()) })?;
        Ok(raw.into_iter().map(|raw| Device { raw }).collect())
    }

    fn instance_list(&self, symbol: &'static str, count: u32) -> Result<Vec<Device>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let f: sys::FnMtmlDeviceGetMpcInstances = resolve(symbol)?;
        let mut raw = vec![ptr::null_mut::<sys::MtmlDeviceOpaque>(); count as usize];
        check(unsafe { f(self.raw, count, raw.as_mut_ptr()) })?;
        Ok(raw.into_iter().map(|raw| Device { raw }).collect())
    }

    /// The MPC instance at one index.
    pub fn mpc_instance_by_index(&self, index: u32) -> Result<Device> {
        let f: sys::FnMtmlDeviceGetMpcInstanceByIndex = resolve("mtmlDeviceGetMpcInstanceByIndex")?;
        let mut raw: sys::MtmlDevice = ptr::null_mut();
        check(unsafe { f(self.raw, index, &mut raw) })?;
        Ok(Device { raw })
    }

    /// The parent device of an MPC instance.
    pub fn mpc_parent_device(&self) -> Result<Device> {
        let f: sys::FnMtmlDeviceGetMpcParentDevice = resolve("mtmlDeviceGetMpcParentDevice")?;
        let mut raw: sys::MtmlDevice = ptr::null_mut();
        check(unsafe { f(self.raw, &mut raw) })?;
        Ok(Device { raw })
    }

    /// The profile an MPC instance was created from.
    pub fn mpc_profile_info(&self) -> Result<sys::MtmlMpcProfile> {
        let f: sys::FnMtmlDeviceGetMpcProfileInfo = resolve("mtmlDeviceGetMpcProfileInfo")?;
        let mut profile = sys::MtmlMpcProfile::default();
        check(unsafe { f(self.raw, &mut profile) })?;
        Ok(profile)
    }

    u32_getter!(
        /// Index of an MPC instance within its parent.
        mpc_instance_index,
        sys::FnMtmlDeviceGetMpcInstanceIndex,
        "mtmlDeviceGetMpcInstanceIndex"
    );
}

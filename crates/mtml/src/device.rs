//! Device-scope calls: identity, physical properties, sub-resource
//! handles, PCI topology and MtLink connectivity.

use std::ffi::{c_char, c_uint, c_ulong};
use std::ptr;

use mtml_sys as sys;

use crate::error::{Result, check};
use crate::handles::{Device, Gpu, Memory, Vpu};
use crate::lifecycle::resolve;
use crate::types::{Brand, LinkState, P2pCap, P2pStatus, TopologyLevel};

macro_rules! string_getter {
    ($(#[$doc:meta])* $method:ident, $alias:ty, $symbol:literal, $size:expr) => {
        $(#[$doc])*
        pub fn $method(&self) -> Result<String> {
            let f: $alias = resolve($symbol)?;
            let mut buf = [0 as c_char; $size];
            check(unsafe { f(self.raw, buf.as_mut_ptr(), buf.len() as c_uint) })?;
            Ok(sys::c_buf_to_string(&buf))
        }
    };
}

macro_rules! u32_getter {
    ($(#[$doc:meta])* $method:ident, $alias:ty, $symbol:literal) => {
        $(#[$doc])*
        pub fn $method(&self) -> Result<u32> {
            let f: $alias = resolve($symbol)?;
            let mut value: c_uint = 0;
            check(unsafe { f(self.raw, &mut value) })?;
            Ok(value)
        }
    };
}

macro_rules! struct_getter {
    ($(#[$doc:meta])* $method:ident, $alias:ty, $symbol:literal, $out:ty) => {
        $(#[$doc])*
        pub fn $method(&self) -> Result<$out> {
            let f: $alias = resolve($symbol)?;
            let mut out = <$out>::default();
            check(unsafe { f(self.raw, &mut out) })?;
            Ok(out)
        }
    };
}

pub(crate) use u32_getter;

impl Device {
    u32_getter!(
        /// Enumeration index of this device.
        index,
        sys::FnMtmlDeviceGetIndex,
        "mtmlDeviceGetIndex"
    );

    string_getter!(
        /// Marketing name of the device.
        name,
        sys::FnMtmlDeviceGetName,
        "mtmlDeviceGetName",
        sys::MTML_DEVICE_NAME_BUFFER_SIZE
    );

    string_getter!(
        /// Globally unique identifier of the device.
        uuid,
        sys::FnMtmlDeviceGetUuid,
        "mtmlDeviceGetUuid",
        sys::MTML_DEVICE_UUID_BUFFER_SIZE
    );

    /// Board serial number.
    ///
    /// This native entry point takes the buffer length before the
    /// buffer, unlike every other string getter.
    pub fn serial_number(&self) -> Result<String> {
        let f: sys::FnMtmlDeviceGetSerialNumber = resolve("mtmlDeviceGetSerialNumber")?;
        let mut buf = [0 as c_char; sys::MTML_DEVICE_SERIAL_NUMBER_BUFFER_SIZE];
        check(unsafe { f(self.raw, buf.len() as c_uint, buf.as_mut_ptr()) })?;
        Ok(sys::c_buf_to_string(&buf))
    }

    struct_getter!(
        /// PCI address, link speed and width details.
        pci_info,
        sys::FnMtmlDeviceGetPciInfo,
        "mtmlDeviceGetPciInfo",
        sys::MtmlPciInfo
    );

    struct_getter!(
        /// Physical slot the board is seated in.
        pcie_slot_info,
        sys::FnMtmlDeviceGetPcieSlotInfo,
        "mtmlDeviceGetPcieSlotInfo",
        sys::MtmlPciSlotInfo
    );

    u32_getter!(
        /// Current board power draw in milliwatts.
        power_usage,
        sys::FnMtmlDeviceGetPowerUsage,
        "mtmlDeviceGetPowerUsage"
    );

    /// Product brand of the device.
    pub fn brand(&self) -> Result<Brand> {
        let f: sys::FnMtmlDeviceGetBrand = resolve("mtmlDeviceGetBrand")?;
        let mut raw: c_uint = 0;
        check(unsafe { f(self.raw, &mut raw) })?;
        Ok(Brand::from_raw(raw))
    }

    string_getter!(
        /// Sysfs path of the GPU node.
        gpu_path,
        sys::FnMtmlDeviceGetGpuPath,
        "mtmlDeviceGetGpuPath",
        sys::MTML_DEVICE_PATH_BUFFER_SIZE
    );

    string_getter!(
        /// Path of the primary DRM node (`/dev/dri/cardN`).
        primary_path,
        sys::FnMtmlDeviceGetPrimaryPath,
        "mtmlDeviceGetPrimaryPath",
        sys::MTML_DEVICE_PATH_BUFFER_SIZE
    );

    string_getter!(
        /// Path of the render DRM node (`/dev/dri/renderDN`).
        render_path,
        sys::FnMtmlDeviceGetRenderPath,
        "mtmlDeviceGetRenderPath",
        sys::MTML_DEVICE_PATH_BUFFER_SIZE
    );

    string_getter!(
        /// Video BIOS version string.
        vbios_version,
        sys::FnMtmlDeviceGetVbiosVersion,
        "mtmlDeviceGetVbiosVersion",
        sys::MTML_DEVICE_VBIOS_VERSION_BUFFER_SIZE
    );

    string_getter!(
        /// MT BIOS version string.
        mtbios_version,
        sys::FnMtmlDeviceGetMtBiosVersion,
        "mtmlDeviceGetMtBiosVersion",
        sys::MTML_DEVICE_MTBIOS_VERSION_BUFFER_SIZE
    );

    struct_getter!(
        /// Virtualization and MPC capability summary.
        property,
        sys::FnMtmlDeviceGetProperty,
        "mtmlDeviceGetProperty",
        sys::MtmlDeviceProperty
    );

    u32_getter!(
        /// Number of fans mounted on the board.
        fan_count,
        sys::FnMtmlDeviceCountFan,
        "mtmlDeviceCountFan"
    );

    /// Speed of one fan as a percentage of its maximum.
    pub fn fan_speed(&self, fan: u32) -> Result<u32> {
        let f: sys::FnMtmlDeviceGetFanSpeed = resolve("mtmlDeviceGetFanSpeed")?;
        let mut speed: c_uint = 0;
        check(unsafe { f(self.raw, fan, &mut speed) })?;
        Ok(speed)
    }

    /// Speed of one fan in revolutions per minute.
    pub fn fan_rpm(&self, fan: u32) -> Result<u32> {
        let f: sys::FnMtmlDeviceGetFanRpm = resolve("mtmlDeviceGetFanRpm")?;
        let mut rpm: c_uint = 0;
        check(unsafe { f(self.raw, fan, &mut rpm) })?;
        Ok(rpm)
    }

    u32_getter!(
        /// Number of display interfaces wired to the board.
        display_interface_count,
        sys::FnMtmlDeviceCountDisplayInterface,
        "mtmlDeviceCountDisplayInterface"
    );

    /// Connector type and maximum resolution of one display interface.
    pub fn display_interface_spec(&self, index: u32) -> Result<sys::MtmlDispIntfSpec> {
        let f: sys::FnMtmlDeviceGetDisplayInterfaceSpec =
            resolve("mtmlDeviceGetDisplayInterfaceSpec")?;
        let mut spec = sys::MtmlDispIntfSpec::default();
        check(unsafe { f(self.raw, index, &mut spec) })?;
        Ok(spec)
    }

    u32_getter!(
        /// Number of GPU cores on the device.
        gpu_core_count,
        sys::FnMtmlDeviceCountGpuCores,
        "mtmlDeviceCountGpuCores"
    );

    /// Resets the device. Requires that nothing holds it open.
    pub fn reset(&self) -> Result<()> {
        let f: sys::FnMtmlDeviceReset = resolve("mtmlDeviceReset")?;
        check(unsafe { f(self.raw) })
    }

    /// NUMA node mask of memory near this device, `set_size` words wide.
    pub fn memory_affinity_within_node(&self, set_size: u32) -> Result<Vec<u64>> {
        let f: sys::FnMtmlDeviceGetMemoryAffinityWithinNode =
            resolve("mtmlDeviceGetMemoryAffinityWithinNode")?;
        let mut set = vec![0 as c_ulong; set_size as usize];
        check(unsafe { f(self.raw, set_size, set.as_mut_ptr()) })?;
        Ok(set.into_iter().map(|w| w as u64).collect())
    }

    /// CPU mask of cores near this device, `set_size` words wide.
    pub fn cpu_affinity_within_node(&self, set_size: u32) -> Result<Vec<u64>> {
        let f: sys::FnMtmlDeviceGetCpuAffinityWithinNode =
            resolve("mtmlDeviceGetCpuAffinityWithinNode")?;
        let mut set = vec![0 as c_ulong; set_size as usize];
        check(unsafe { f(self.raw, set_size, set.as_mut_ptr()) })?;
        Ok(set.into_iter().map(|w| w as u64).collect())
    }

    // --- sub-resource handles ---

    /// Opens the memory subsystem handle of this device.
    pub fn init_memory(&self) -> Result<Memory> {
        let f: sys::FnMtmlDeviceInitMemory = resolve("mtmlDeviceInitMemory")?;
        let mut raw: sys::MtmlMemory = ptr::null_mut();
        check(unsafe { f(self.raw, &mut raw) })?;
        Ok(Memory { raw })
    }

    /// Opens the graphics/compute engine handle of this device.
    pub fn init_gpu(&self) -> Result<Gpu> {
        let f: sys::FnMtmlDeviceInitGpu = resolve("mtmlDeviceInitGpu")?;
        let mut raw: sys::MtmlGpu = ptr::null_mut();
        check(unsafe { f(self.raw, &mut raw) })?;
        Ok(Gpu { raw })
    }

    /// Opens the video codec engine handle of this device.
    pub fn init_vpu(&self) -> Result<Vpu> {
        let f: sys::FnMtmlDeviceInitVpu = resolve("mtmlDeviceInitVpu")?;
        let mut raw: sys::MtmlVpu = ptr::null_mut();
        check(unsafe { f(self.raw, &mut raw) })?;
        Ok(Vpu { raw })
    }

    /// Runs `body` with a freshly opened memory handle, then frees it.
    pub fn with_memory<T>(&self, body: impl FnOnce(Memory) -> Result<T>) -> Result<T> {
        let mem = self.init_memory()?;
        let out = body(mem);
        let _ = mem.free();
        out
    }

    /// Runs `body` with a freshly opened GPU handle, then frees it.
    pub fn with_gpu<T>(&self, body: impl FnOnce(Gpu) -> Result<T>) -> Result<T> {
        let gpu = self.init_gpu()?;
        let out = body(gpu);
        let _ = gpu.free();
        out
    }

    /// Runs `body` with a freshly opened VPU handle, then frees it.
    pub fn with_vpu<T>(&self, body: impl FnOnce(Vpu) -> Result<T>) -> Result<T> {
        let vpu = self.init_vpu()?;
        let out = body(vpu);
        let _ = vpu.free();
        out
    }

    // --- PCI topology and P2P ---

    /// How close this device sits to `other` in the PCI fabric.
    pub fn topology_level_with(&self, other: Device) -> Result<TopologyLevel> {
        let f: sys::FnMtmlDeviceGetTopologyLevel = resolve("mtmlDeviceGetTopologyLevel")?;
        let mut raw: c_uint = 0;
        check(unsafe { f(self.raw, other.raw, &mut raw) })?;
        TopologyLevel::from_raw(raw)
    }

    /// Number of devices reachable from this one at exactly `level`.
    pub fn count_devices_by_topology_level(&self, level: TopologyLevel) -> Result<u32> {
        let f: sys::FnMtmlDeviceCountDeviceByTopologyLevel =
            resolve("mtmlDeviceCountDeviceByTopologyLevel")?;
        let mut count: c_uint = 0;
        check(unsafe { f(self.raw, level.as_raw(), &mut count) })?;
        Ok(count)
    }

    /// Devices reachable from this one at exactly `level`.
    pub fn devices_by_topology_level(&self, level: TopologyLevel) -> Result<Vec<Device>> {
        let count = self.count_devices_by_topology_level(level)?;
        if count == 0 {
            return Ok(Vec::new());
        }
        let f: sys::FnMtmlDeviceGetDeviceByTopologyLevel =
            resolve("mtmlDeviceGetDeviceByTopologyLevel")?;
        let mut raw = vec![ptr::null_mut::<sys::MtmlDeviceOpaque>(); count as usize];
        check(unsafe { f(self.raw, level.as_raw(), count, raw.as_mut_ptr()) })?;
        Ok(raw.into_iter().map(|raw| Device { raw }).collect())
    }

    /// Whether the given P2P capability works between this device and
    /// `other`, as the driver reports it.
    pub fn p2p_status(&self, other: Device, cap: P2pCap) -> Result<P2pStatus> {
        let f: sys::FnMtmlDeviceGetP2PStatus = resolve("mtmlDeviceGetP2PStatus")?;
        let mut raw: c_uint = 0;
        check(unsafe { f(self.raw, other.raw, cap.as_raw(), &mut raw) })?;
        Ok(P2pStatus::from_raw(raw))
    }

    // --- MtLink ---

    /// MtLink generation, bandwidth and port count of this device.
    pub fn link_spec(&self) -> Result<sys::MtmlMtLinkSpec> {
        let f: sys::FnMtmlDeviceGetMtLinkSpec = resolve("mtmlDeviceGetMtLinkSpec")?;
        let mut spec = sys::MtmlMtLinkSpec::default();
        check(unsafe { f(self.raw, &mut spec) })?;
        Ok(spec)
    }

    /// State of one MtLink port.
    pub fn link_state(&self, link: u32) -> Result<LinkState> {
        let f: sys::FnMtmlDeviceGetMtLinkState = resolve("mtmlDeviceGetMtLinkState")?;
        let mut raw: c_uint = 0;
        check(unsafe { f(self.raw, link, &mut raw) })?;
        LinkState::from_raw(raw)
    }

    /// Device on the far end of one MtLink port.
    pub fn link_remote_device(&self, link: u32) -> Result<Device> {
        let f: sys::FnMtmlDeviceGetMtLinkRemoteDevice = resolve("mtmlDeviceGetMtLinkRemoteDevice")?;
        let mut raw: sys::MtmlDevice = ptr::null_mut();
        check(unsafe { f(self.raw, link, &mut raw) })?;
        Ok(Device { raw })
    }

    /// Whether one MtLink port supports the given capability.
    pub fn link_cap_status(&self, link: u32, cap: u32) -> Result<u32> {
        let f: sys::FnMtmlDeviceGetMtLinkCapStatus = resolve("mtmlDeviceGetMtLinkCapStatus")?;
        let mut status: c_uint = 0;
        check(unsafe { f(self.raw, link, cap, &mut status) })?;
        Ok(status)
    }

    /// Number and hop length of the shortest MtLink paths to `remote`.
    pub fn count_link_shortest_paths(&self, remote: Device) -> Result<(u32, u32)> {
        let f: sys::FnMtmlDeviceCountMtLinkShortestPaths =
            resolve("mtmlDeviceCountMtLinkShortestPaths")?;
        let mut path_count: c_uint = 0;
        let mut path_length: c_uint = 0;
        check(unsafe { f(self.raw, remote.raw, &mut path_count, &mut path_length) })?;
        Ok((path_count, path_length))
    }

    /// Shortest MtLink paths to `remote`, one hop list per path.
    pub fn link_shortest_paths(&self, remote: Device) -> Result<Vec<Vec<Device>>> {
        let (path_count, path_length) = self.count_link_shortest_paths(remote)?;
        if path_count == 0 || path_length == 0 {
            return Ok(Vec::new());
        }
        let f: sys::FnMtmlDeviceGetMtLinkShortestPaths =
            resolve("mtmlDeviceGetMtLinkShortestPaths")?;
        let mut raw =
            vec![ptr::null_mut::<sys::MtmlDeviceOpaque>(); (path_count * path_length) as usize];
        check(unsafe { f(self.raw, remote.raw, path_count, path_length, raw.as_mut_ptr()) })?;
        Ok(raw
            .chunks(path_length as usize)
            .map(|hop| hop.iter().map(|&raw| Device { raw }).collect())
            .collect())
    }

    /// Number of direct MtLink connections between this device and
    /// `remote`.
    pub fn count_link_layouts(&self, remote: Device) -> Result<u32> {
        let f: sys::FnMtmlDeviceCountMtLinkLayouts = resolve("mtmlDeviceCountMtLinkLayouts")?;
        let mut count: c_uint = 0;
        check(unsafe { f(self.raw, remote.raw, &mut count) })?;
        Ok(count)
    }

    /// Port pairs of the direct MtLink connections to `remote`.
    pub fn link_layouts(&self, remote: Device) -> Result<Vec<sys::MtmlMtLinkLayout>> {
        let count = self.count_link_layouts(remote)?;
        if count == 0 {
            return Ok(Vec::new());
        }
        let f: sys::FnMtmlDeviceGetMtLinkLayouts = resolve("mtmlDeviceGetMtLinkLayouts")?;
        let mut layouts = vec![sys::MtmlMtLinkLayout::default(); count as usize];
        check(unsafe { f(self.raw, remote.raw, count, layouts.as_mut_ptr()) })?;
        Ok(layouts)
    }
}

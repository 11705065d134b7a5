//! Function-pointer type aliases, one per native entry point.
//!
//! The library is loaded at runtime, so nothing here links against
//! `libmtml.so`; these aliases are the contract the resolver transmutes
//! raw symbol addresses into. Names follow the native symbol names.

use std::ffi::{c_char, c_uint, c_ulong, c_ulonglong};

use crate::handles::{MtmlDevice, MtmlGpu, MtmlLibrary, MtmlMemory, MtmlSystem, MtmlVpu};
use crate::structs::{
    MtmlCodecSessionMetrics, MtmlCodecSessionState, MtmlCodecUtil, MtmlDeviceProperty,
    MtmlDispIntfSpec, MtmlLogConfiguration, MtmlMpcConfiguration, MtmlMpcProfile,
    MtmlMtLinkLayout, MtmlMtLinkSpec, MtmlPageRetirement, MtmlPageRetirementCount,
    MtmlPciInfo, MtmlPciSlotInfo, MtmlVirtType,
};
use crate::MtmlReturn;

// Library lifecycle and enumeration.
pub type FnMtmlLibraryInit = unsafe extern "C" fn(lib: *mut MtmlLibrary) -> MtmlReturn;
pub type FnMtmlLibraryShutDown = unsafe extern "C" fn(lib: MtmlLibrary) -> MtmlReturn;
pub type FnMtmlErrorString = unsafe extern "C" fn(ret: MtmlReturn) -> *const c_char;
pub type FnMtmlLibraryGetVersion =
    unsafe extern "C" fn(lib: MtmlLibrary, version: *mut c_char, length: c_uint) -> MtmlReturn;
pub type FnMtmlLibraryCountDevice =
    unsafe extern "C" fn(lib: MtmlLibrary, count: *mut c_uint) -> MtmlReturn;
pub type FnMtmlLibraryInitDeviceByIndex =
    unsafe extern "C" fn(lib: MtmlLibrary, index: c_uint, dev: *mut MtmlDevice) -> MtmlReturn;
pub type FnMtmlLibraryInitDeviceByUuid =
    unsafe extern "C" fn(lib: MtmlLibrary, uuid: *const c_char, dev: *mut MtmlDevice) -> MtmlReturn;
pub type FnMtmlLibraryInitDeviceByPciSbdf = unsafe extern "C" fn(
    lib: MtmlLibrary,
    sbdf: *const c_char,
    dev: *mut MtmlDevice,
) -> MtmlReturn;
pub type FnMtmlLibraryInitSystem =
    unsafe extern "C" fn(lib: MtmlLibrary, sys: *mut MtmlSystem) -> MtmlReturn;
pub type FnMtmlLibraryFreeSystem = unsafe extern "C" fn(sys: MtmlSystem) -> MtmlReturn;
pub type FnMtmlLibraryFreeDevice = unsafe extern "C" fn(dev: MtmlDevice) -> MtmlReturn;
pub type FnMtmlLibrarySetMpcConfigurationInBatch = unsafe extern "C" fn(
    lib: MtmlLibrary,
    count: c_uint,
    devs: *const MtmlDevice,
    config_ids: *const c_uint,
) -> MtmlReturn;

// System scope.
pub type FnMtmlSystemGetDriverVersion =
    unsafe extern "C" fn(sys: MtmlSystem, version: *mut c_char, length: c_uint) -> MtmlReturn;

// Device sub-resources.
pub type FnMtmlDeviceInitMemory =
    unsafe extern "C" fn(dev: MtmlDevice, mem: *mut MtmlMemory) -> MtmlReturn;
pub type FnMtmlDeviceInitGpu =
    unsafe extern "C" fn(dev: MtmlDevice, gpu: *mut MtmlGpu) -> MtmlReturn;
pub type FnMtmlDeviceInitVpu =
    unsafe extern "C" fn(dev: MtmlDevice, vpu: *mut MtmlVpu) -> MtmlReturn;
pub type FnMtmlDeviceFreeMemory = unsafe extern "C" fn(mem: MtmlMemory) -> MtmlReturn;
pub type FnMtmlDeviceFreeGpu = unsafe extern "C" fn(gpu: MtmlGpu) -> MtmlReturn;
pub type FnMtmlDeviceFreeVpu = unsafe extern "C" fn(vpu: MtmlVpu) -> MtmlReturn;

// Device identity and properties.
pub type FnMtmlDeviceGetIndex =
    unsafe extern "C" fn(dev: MtmlDevice, index: *mut c_uint) -> MtmlReturn;
pub type FnMtmlDeviceGetName =
    unsafe extern "C" fn(dev: MtmlDevice, name: *mut c_char, length: c_uint) -> MtmlReturn;
pub type FnMtmlDeviceGetUuid =
    unsafe extern "C" fn(dev: MtmlDevice, uuid: *mut c_char, length: c_uint) -> MtmlReturn;
pub type FnMtmlDeviceGetSerialNumber =
    unsafe extern "C" fn(dev: MtmlDevice, length: c_uint, serial: *mut c_char) -> MtmlReturn;
pub type FnMtmlDeviceGetPciInfo =
    unsafe extern "C" fn(dev: MtmlDevice, info: *mut MtmlPciInfo) -> MtmlReturn;
pub type FnMtmlDeviceGetPcieSlotInfo =
    unsafe extern "C" fn(dev: MtmlDevice, info: *mut MtmlPciSlotInfo) -> MtmlReturn;
pub type FnMtmlDeviceGetPowerUsage =
    unsafe extern "C" fn(dev: MtmlDevice, power: *mut c_uint) -> MtmlReturn;
pub type FnMtmlDeviceGetBrand =
    unsafe extern "C" fn(dev: MtmlDevice, brand: *mut c_uint) -> MtmlReturn;
pub type FnMtmlDeviceGetGpuPath =
    unsafe extern "C" fn(dev: MtmlDevice, path: *mut c_char, length: c_uint) -> MtmlReturn;
pub type FnMtmlDeviceGetPrimaryPath =
    unsafe extern "C" fn(dev: MtmlDevice, path: *mut c_char, length: c_uint) -> MtmlReturn;
pub type FnMtmlDeviceGetRenderPath =
    unsafe extern "C" fn(dev: MtmlDevice, path: *mut c_char, length: c_uint) -> MtmlReturn;
pub type FnMtmlDeviceGetVbiosVersion =
    unsafe extern "C" fn(dev: MtmlDevice, version: *mut c_char, length: c_uint) -> MtmlReturn;
pub type FnMtmlDeviceGetMtBiosVersion =
    unsafe extern "C" fn(dev: MtmlDevice, version: *mut c_char, length: c_uint) -> MtmlReturn;
pub type FnMtmlDeviceGetProperty =
    unsafe extern "C" fn(dev: MtmlDevice, prop: *mut MtmlDeviceProperty) -> MtmlReturn;
pub type FnMtmlDeviceCountFan =
    unsafe extern "C" fn(dev: MtmlDevice, count: *mut c_uint) -> MtmlReturn;
pub type FnMtmlDeviceGetFanSpeed =
    unsafe extern "C" fn(dev: MtmlDevice, index: c_uint, speed: *mut c_uint) -> MtmlReturn;
pub type FnMtmlDeviceGetFanRpm =
    unsafe extern "C" fn(dev: MtmlDevice, index: c_uint, rpm: *mut c_uint) -> MtmlReturn;
pub type FnMtmlDeviceCountDisplayInterface =
    unsafe extern "C" fn(dev: MtmlDevice, count: *mut c_uint) -> MtmlReturn;
pub type FnMtmlDeviceGetDisplayInterfaceSpec =
    unsafe extern "C" fn(dev: MtmlDevice, index: c_uint, spec: *mut MtmlDispIntfSpec) -> MtmlReturn;
pub type FnMtmlDeviceCountGpuCores =
    unsafe extern "C" fn(dev: MtmlDevice, count: *mut c_uint) -> MtmlReturn;
pub type FnMtmlDeviceReset = unsafe extern "C" fn(dev: MtmlDevice) -> MtmlReturn;

// Topology and P2P.
pub type FnMtmlDeviceGetTopologyLevel =
    unsafe extern "C" fn(dev1: MtmlDevice, dev2: MtmlDevice, level: *mut c_uint) -> MtmlReturn;
pub type FnMtmlDeviceCountDeviceByTopologyLevel =
    unsafe extern "C" fn(dev: MtmlDevice, level: c_uint, count: *mut c_uint) -> MtmlReturn;
pub type FnMtmlDeviceGetDeviceByTopologyLevel = unsafe extern "C" fn(
    dev: MtmlDevice,
    level: c_uint,
    count: c_uint,
    devs: *mut MtmlDevice,
) -> MtmlReturn;
pub type FnMtmlDeviceGetP2PStatus = unsafe extern "C" fn(
    dev1: MtmlDevice,
    dev2: MtmlDevice,
    cap: c_uint,
    status: *mut c_uint,
) -> MtmlReturn;

// MtLink.
pub type FnMtmlDeviceGetMtLinkSpec =
    unsafe extern "C" fn(dev: MtmlDevice, spec: *mut MtmlMtLinkSpec) -> MtmlReturn;
pub type FnMtmlDeviceGetMtLinkState =
    unsafe extern "C" fn(dev: MtmlDevice, link: c_uint, state: *mut c_uint) -> MtmlReturn;
pub type FnMtmlDeviceGetMtLinkRemoteDevice =
    unsafe extern "C" fn(dev: MtmlDevice, link: c_uint, remote: *mut MtmlDevice) -> MtmlReturn;
pub type FnMtmlDeviceGetMtLinkCapStatus = unsafe extern "C" fn(
    dev: MtmlDevice,
    link: c_uint,
    cap: c_uint,
    status: *mut c_uint,
) -> MtmlReturn;
pub type FnMtmlDeviceCountMtLinkShortestPaths = unsafe extern "C" fn(
    local: MtmlDevice,
    remote: MtmlDevice,
    path_count: *mut c_uint,
    path_length: *mut c_uint,
) -> MtmlReturn;
pub type FnMtmlDeviceGetMtLinkShortestPaths = unsafe extern "C" fn(
    local: MtmlDevice,
    remote: MtmlDevice,
    path_count: c_uint,
    path_length: c_uint,
    paths: *mut MtmlDevice,
) -> MtmlReturn;
pub type FnMtmlDeviceCountMtLinkLayouts = unsafe extern "C" fn(
    local: MtmlDevice,
    remote: MtmlDevice,
    count: *mut c_uint,
) -> MtmlReturn;
pub type FnMtmlDeviceGetMtLinkLayouts = unsafe extern "C" fn(
    local: MtmlDevice,
    remote: MtmlDevice,
    count: c_uint,
    layouts: *mut MtmlMtLinkLayout,
) -> MtmlReturn;

// Affinity.
pub type FnMtmlDeviceGetMemoryAffinityWithinNode = unsafe extern "C" fn(
    dev: MtmlDevice,
    set_size: c_uint,
    node_set: *mut c_ulong,
) -> MtmlReturn;
pub type FnMtmlDeviceGetCpuAffinityWithinNode = unsafe extern "C" fn(
    dev: MtmlDevice,
    set_size: c_uint,
    cpu_set: *mut c_ulong,
) -> MtmlReturn;

// Virtualization.
pub type FnMtmlDeviceCountSupportedVirtTypes =
    unsafe extern "C" fn(dev: MtmlDevice, count: *mut c_uint) -> MtmlReturn;
pub type FnMtmlDeviceGetSupportedVirtTypes =
    unsafe extern "C" fn(dev: MtmlDevice, types: *mut MtmlVirtType, count: c_uint) -> MtmlReturn;
pub type FnMtmlDeviceCountAvailVirtTypes =
    unsafe extern "C" fn(dev: MtmlDevice, count: *mut c_uint) -> MtmlReturn;
pub type FnMtmlDeviceGetAvailVirtTypes =
    unsafe extern "C" fn(dev: MtmlDevice, types: *mut MtmlVirtType, count: c_uint) -> MtmlReturn;
pub type FnMtmlDeviceCountAvailVirtDevices = unsafe extern "C" fn(
    dev: MtmlDevice,
    virt_type: *const MtmlVirtType,
    count: *mut c_uint,
) -> MtmlReturn;
pub type FnMtmlDeviceCountMaxVirtDevices = unsafe extern "C" fn(
    dev: MtmlDevice,
    virt_type: *const MtmlVirtType,
    count: *mut c_uint,
) -> MtmlReturn;
pub type FnMtmlDeviceCountActiveVirtDevices =
    unsafe extern "C" fn(dev: MtmlDevice, count: *mut c_uint) -> MtmlReturn;
pub type FnMtmlDeviceGetActiveVirtDeviceUuids = unsafe extern "C" fn(
    dev: MtmlDevice,
    uuids: *mut c_char,
    entry_length: c_uint,
    entry_count: c_uint,
) -> MtmlReturn;
pub type FnMtmlDeviceInitVirtDevice = unsafe extern "C" fn(
    dev: MtmlDevice,
    uuid: *const c_char,
    virt_dev: *mut MtmlDevice,
) -> MtmlReturn;
pub type FnMtmlDeviceFreeVirtDevice = unsafe extern "C" fn(virt_dev: MtmlDevice) -> MtmlReturn;
pub type FnMtmlDeviceGetVirtType =
    unsafe extern "C" fn(virt_dev: MtmlDevice, virt_type: *mut MtmlVirtType) -> MtmlReturn;
pub type FnMtmlDeviceGetPhyDeviceUuid =
    unsafe extern "C" fn(virt_dev: MtmlDevice, uuid: *mut c_char, length: c_uint) -> MtmlReturn;

// MPC partitioning.
pub type FnMtmlDeviceSetMpcMode =
    unsafe extern "C" fn(dev: MtmlDevice, mode: c_uint) -> MtmlReturn;
pub type FnMtmlDeviceGetMpcMode =
    unsafe extern "C" fn(dev: MtmlDevice, mode: *mut c_uint) -> MtmlReturn;
pub type FnMtmlDeviceCountSupportedMpcProfiles =
    unsafe extern "C" fn(dev: MtmlDevice, count: *mut c_uint) -> MtmlReturn;
pub type FnMtmlDeviceGetSupportedMpcProfiles = unsafe extern "C" fn(
    dev: MtmlDevice,
    count: c_uint,
    profiles: *mut MtmlMpcProfile,
) -> MtmlReturn;
pub type FnMtmlDeviceCountSupportedMpcConfigurations =
    unsafe extern "C" fn(dev: MtmlDevice, count: *mut c_uint) -> MtmlReturn;
pub type FnMtmlDeviceGetSupportedMpcConfigurations = unsafe extern "C" fn(
    dev: MtmlDevice,
    count: c_uint,
    configs: *mut MtmlMpcConfiguration,
) -> MtmlReturn;
pub type FnMtmlDeviceGetMpcConfiguration =
    unsafe extern "C" fn(dev: MtmlDevice, config: *mut MtmlMpcConfiguration) -> MtmlReturn;
pub type FnMtmlDeviceGetMpcConfigurationByName = unsafe extern "C" fn(
    dev: MtmlDevice,
    name: *const c_char,
    config: *mut MtmlMpcConfiguration,
) -> MtmlReturn;
pub type FnMtmlDeviceSetMpcConfiguration =
    unsafe extern "C" fn(dev: MtmlDevice, config_id: c_uint) -> MtmlReturn;
pub type FnMtmlDeviceCountMpcInstances =
    unsafe extern "C" fn(dev: MtmlDevice, count: *mut c_uint) -> MtmlReturn;
pub type FnMtmlDeviceGetMpcInstances =
    unsafe extern "C" fn(dev: MtmlDevice, count: c_uint, instances: *mut MtmlDevice) -> MtmlReturn;
pub type FnMtmlDeviceCountMpcInstancesByProfileId =
    unsafe extern "C" fn(dev: MtmlDevice, profile_id: c_uint, count: *mut c_uint) -> MtmlReturn;
pub type FnMtmlDeviceGetMpcInstancesByProfileId = unsafe extern "C" fn(
    dev: MtmlDevice,
    profile_id: c_uint,
    count: c_uint,
    instances: *mut MtmlDevice,
) -> MtmlReturn;
pub type FnMtmlDeviceGetMpcInstanceByIndex =
    unsafe extern "C" fn(dev: MtmlDevice, index: c_uint, instance: *mut MtmlDevice) -> MtmlReturn;
pub type FnMtmlDeviceGetMpcParentDevice =
    unsafe extern "C" fn(instance: MtmlDevice, parent: *mut MtmlDevice) -> MtmlReturn;
pub type FnMtmlDeviceGetMpcProfileInfo =
    unsafe extern "C" fn(instance: MtmlDevice, profile: *mut MtmlMpcProfile) -> MtmlReturn;
pub type FnMtmlDeviceGetMpcInstanceIndex =
    unsafe extern "C" fn(instance: MtmlDevice, index: *mut c_uint) -> MtmlReturn;

// Memory scope.
pub type FnMtmlMemoryGetTotal =
    unsafe extern "C" fn(mem: MtmlMemory, total: *mut c_ulonglong) -> MtmlReturn;
pub type FnMtmlMemoryGetUsed =
    unsafe extern "C" fn(mem: MtmlMemory, used: *mut c_ulonglong) -> MtmlReturn;
pub type FnMtmlMemoryGetUsedSystem =
    unsafe extern "C" fn(mem: MtmlMemory, used: *mut c_ulonglong) -> MtmlReturn;
pub type FnMtmlMemoryGetClock =
    unsafe extern "C" fn(mem: MtmlMemory, clock: *mut c_uint) -> MtmlReturn;
pub type FnMtmlMemoryGetMaxClock =
    unsafe extern "C" fn(mem: MtmlMemory, clock: *mut c_uint) -> MtmlReturn;
pub type FnMtmlMemoryGetUtilization =
    unsafe extern "C" fn(mem: MtmlMemory, util: *mut c_uint) -> MtmlReturn;
pub type FnMtmlMemoryGetBusWidth =
    unsafe extern "C" fn(mem: MtmlMemory, width: *mut c_uint) -> MtmlReturn;
pub type FnMtmlMemoryGetBandwidth =
    unsafe extern "C" fn(mem: MtmlMemory, bandwidth: *mut c_uint) -> MtmlReturn;
pub type FnMtmlMemoryGetSpeed =
    unsafe extern "C" fn(mem: MtmlMemory, speed: *mut c_uint) -> MtmlReturn;
pub type FnMtmlMemoryGetVendor =
    unsafe extern "C" fn(mem: MtmlMemory, length: c_uint, vendor: *mut c_char) -> MtmlReturn;
pub type FnMtmlMemoryGetType =
    unsafe extern "C" fn(mem: MtmlMemory, mem_type: *mut c_uint) -> MtmlReturn;

// Memory ECC.
pub type FnMtmlMemoryGetEccMode = unsafe extern "C" fn(
    mem: MtmlMemory,
    current: *mut c_uint,
    pending: *mut c_uint,
) -> MtmlReturn;
pub type FnMtmlMemoryGetRetiredPagesCount =
    unsafe extern "C" fn(mem: MtmlMemory, count: *mut MtmlPageRetirementCount) -> MtmlReturn;
pub type FnMtmlMemoryGetRetiredPages = unsafe extern "C" fn(
    mem: MtmlMemory,
    cause: c_uint,
    count: c_uint,
    pages: *mut MtmlPageRetirement,
) -> MtmlReturn;
pub type FnMtmlMemoryGetRetiredPagesPendingStatus =
    unsafe extern "C" fn(mem: MtmlMemory, pending: *mut c_uint) -> MtmlReturn;
pub type FnMtmlMemoryGetEccErrorCounter = unsafe extern "C" fn(
    mem: MtmlMemory,
    error_type: c_uint,
    counter_type: c_uint,
    location: c_uint,
    count: *mut c_ulonglong,
) -> MtmlReturn;
pub type FnMtmlMemoryClearEccErrorCounts =
    unsafe extern "C" fn(mem: MtmlMemory, counter_type: c_uint) -> MtmlReturn;

// GPU scope.
pub type FnMtmlGpuGetUtilization =
    unsafe extern "C" fn(gpu: MtmlGpu, util: *mut c_uint) -> MtmlReturn;
pub type FnMtmlGpuGetEngineUtilization =
    unsafe extern "C" fn(gpu: MtmlGpu, engine: c_uint, util: *mut c_uint) -> MtmlReturn;
pub type FnMtmlGpuGetClock = unsafe extern "C" fn(gpu: MtmlGpu, clock: *mut c_uint) -> MtmlReturn;
pub type FnMtmlGpuGetMaxClock =
    unsafe extern "C" fn(gpu: MtmlGpu, clock: *mut c_uint) -> MtmlReturn;
pub type FnMtmlGpuGetTemperature =
    unsafe extern "C" fn(gpu: MtmlGpu, temp: *mut c_uint) -> MtmlReturn;

// VPU scope.
pub type FnMtmlVpuGetClock = unsafe extern "C" fn(vpu: MtmlVpu, clock: *mut c_uint) -> MtmlReturn;
pub type FnMtmlVpuGetMaxClock =
    unsafe extern "C" fn(vpu: MtmlVpu, clock: *mut c_uint) -> MtmlReturn;
pub type FnMtmlVpuGetUtilization =
    unsafe extern "C" fn(vpu: MtmlVpu, util: *mut MtmlCodecUtil) -> MtmlReturn;
pub type FnMtmlVpuGetCodecCapacity =
    unsafe extern "C" fn(vpu: MtmlVpu, enc: *mut c_uint, dec: *mut c_uint) -> MtmlReturn;
pub type FnMtmlVpuGetEncoderSessionStates = unsafe extern "C" fn(
    vpu: MtmlVpu,
    states: *mut MtmlCodecSessionState,
    length: c_uint,
) -> MtmlReturn;
pub type FnMtmlVpuGetEncoderSessionMetrics = unsafe extern "C" fn(
    vpu: MtmlVpu,
    session_id: c_uint,
    metrics: *mut MtmlCodecSessionMetrics,
) -> MtmlReturn;
pub type FnMtmlVpuGetDecoderSessionStates = unsafe extern "C" fn(
    vpu: MtmlVpu,
    states: *mut MtmlCodecSessionState,
    length: c_uint,
) -> MtmlReturn;
pub type FnMtmlVpuGetDecoderSessionMetrics = unsafe extern "C" fn(
    vpu: MtmlVpu,
    session_id: c_uint,
    metrics: *mut MtmlCodecSessionMetrics,
) -> MtmlReturn;

// Log configuration.
pub type FnMtmlLogSetConfiguration =
    unsafe extern "C" fn(config: *const MtmlLogConfiguration) -> MtmlReturn;
pub type FnMtmlLogGetConfiguration =
    unsafe extern "C" fn(config: *mut MtmlLogConfiguration) -> MtmlReturn;

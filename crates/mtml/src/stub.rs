//! In-process driver standing in for `libmtml.so` under the
//! `stub-driver` feature.
//!
//! Models a fixed two-device box: device 0 and device 1 sit under the
//! same host bridge and share one up MtLink, plus a second link that is
//! down. Values are arbitrary but stable, so tests can assert on them.
//! Symbols absent from the table resolve to nothing, which exercises
//! the missing-entry-point path with a loaded image.

use std::ffi::{CStr, c_char, c_uint, c_ulonglong};
use std::ptr;

use mtml_sys as sys;

pub const STUB_LIBRARY_VERSION: &str = "2.2.0";
pub const STUB_DRIVER_VERSION: &str = "1.4.0-stub";
pub const STUB_UUIDS: [&str; 2] = [
    "MTT-0000-0000-0000-0001",
    "MTT-0000-0000-0000-0002",
];

struct StubLink {
    state: c_uint,
    remote: usize,
}

struct StubDevice {
    index: c_uint,
    uuid: &'static str,
    name: &'static str,
    links: &'static [StubLink],
}

static DEVICES: [StubDevice; 2] = [
    StubDevice {
        index: 0,
        uuid: STUB_UUIDS[0],
        name: "MTT S4000",
        links: &[
            StubLink { state: sys::MTML_MTLINK_STATE_UP, remote: 1 },
            StubLink { state: sys::MTML_MTLINK_STATE_DOWN, remote: 1 },
        ],
    },
    StubDevice {
        index: 1,
        uuid: STUB_UUIDS[1],
        name: "MTT S4000",
        links: &[StubLink { state: sys::MTML_MTLINK_STATE_UP, remote: 0 }],
    },
];

static LIB_TOKEN: u8 = 0;
static SYSTEM_TOKEN: u8 = 0;

fn device_handle(index: usize) -> sys::MtmlDevice {
    &DEVICES[index] as *const StubDevice as *mut sys::MtmlDeviceOpaque
}

fn device(raw: sys::MtmlDevice) -> Option<&'static StubDevice> {
    DEVICES
        .iter()
        .find(|d| ptr::eq(*d as *const StubDevice as *const sys::MtmlDeviceOpaque, raw))
}

fn fill(dst: *mut c_char, cap: c_uint, s: &str) -> sys::MtmlReturn {
    let bytes = s.as_bytes();
    if bytes.len() + 1 > cap as usize {
        return sys::MTML_ERROR_INSUFFICIENT_SIZE;
    }
    unsafe {
        ptr::copy_nonoverlapping(bytes.as_ptr() as *const c_char, dst, bytes.len());
        *dst.add(bytes.len()) = 0;
    }
    sys::MTML_SUCCESS
}

// --- library scope ---

unsafe extern "C" fn library_init(lib: *mut sys::MtmlLibrary) -> sys::MtmlReturn {
    unsafe { *lib = &LIB_TOKEN as *const u8 as *mut sys::MtmlLibraryOpaque };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn library_shut_down(_lib: sys::MtmlLibrary) -> sys::MtmlReturn {
    sys::MTML_SUCCESS
}

unsafe extern "C" fn error_string(_ret: sys::MtmlReturn) -> *const c_char {
    static MSG: &[u8] = b"stub driver condition\0";
    MSG.as_ptr() as *const c_char
}

unsafe extern "C" fn library_get_version(
    _lib: sys::MtmlLibrary,
    version: *mut c_char,
    length: c_uint,
) -> sys::MtmlReturn {
    fill(version, length, STUB_LIBRARY_VERSION)
}

unsafe extern "C" fn library_count_device(
    _lib: sys::MtmlLibrary,
    count: *mut c_uint,
) -> sys::MtmlReturn {
    unsafe { *count = DEVICES.len() as c_uint };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn library_init_device_by_index(
    _lib: sys::MtmlLibrary,
    index: c_uint,
    dev: *mut sys::MtmlDevice,
) -> sys::MtmlReturn {
    if (index as usize) >= DEVICES.len() {
        return sys::MTML_ERROR_INVALID_ARGUMENT;
    }
    unsafe { *dev = device_handle(index as usize) };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn library_init_device_by_uuid(
    _lib: sys::MtmlLibrary,
    uuid: *const c_char,
    dev: *mut sys::MtmlDevice,
) -> sys::MtmlReturn {
    let wanted = unsafe { CStr::from_ptr(uuid) }.to_string_lossy();
    match DEVICES.iter().position(|d| d.uuid == wanted) {
        Some(i) => {
            unsafe { *dev = device_handle(i) };
            sys::MTML_SUCCESS
        }
        None => sys::MTML_ERROR_NOT_FOUND,
    }
}

unsafe extern "C" fn library_init_system(
    _lib: sys::MtmlLibrary,
    system: *mut sys::MtmlSystem,
) -> sys::MtmlReturn {
    unsafe { *system = &SYSTEM_TOKEN as *const u8 as *mut sys::MtmlSystemOpaque };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn library_free_system(_system: sys::MtmlSystem) -> sys::MtmlReturn {
    sys::MTML_SUCCESS
}

unsafe extern "C" fn library_free_device(dev: sys::MtmlDevice) -> sys::MtmlReturn {
    if device(dev).is_some() {
        sys::MTML_SUCCESS
    } else {
        sys::MTML_ERROR_INVALID_ARGUMENT
    }
}

// --- system scope ---

unsafe extern "C" fn system_get_driver_version(
    _system: sys::MtmlSystem,
    version: *mut c_char,
    length: c_uint,
) -> sys::MtmlReturn {
    fill(version, length, STUB_DRIVER_VERSION)
}

// --- device scope ---

unsafe extern "C" fn device_get_index(
    dev: sys::MtmlDevice,
    index: *mut c_uint,
) -> sys::MtmlReturn {
    match device(dev) {
        Some(d) => {
            unsafe { *index = d.index };
            sys::MTML_SUCCESS
        }
        None => sys::MTML_ERROR_INVALID_ARGUMENT,
    }
}

unsafe extern "C" fn device_get_name(
    dev: sys::MtmlDevice,
    name: *mut c_char,
    length: c_uint,
) -> sys::MtmlReturn {
    match device(dev) {
        Some(d) => fill(name, length, d.name),
        None => sys::MTML_ERROR_INVALID_ARGUMENT,
    }
}

unsafe extern "C" fn device_get_uuid(
    dev: sys::MtmlDevice,
    uuid: *mut c_char,
    length: c_uint,
) -> sys::MtmlReturn {
    match device(dev) {
        Some(d) => fill(uuid, length, d.uuid),
        None => sys::MTML_ERROR_INVALID_ARGUMENT,
    }
}

unsafe extern "C" fn device_get_brand(
    _dev: sys::MtmlDevice,
    brand: *mut c_uint,
) -> sys::MtmlReturn {
    unsafe { *brand = sys::MTML_BRAND_MTT };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn device_get_power_usage(
    _dev: sys::MtmlDevice,
    power: *mut c_uint,
) -> sys::MtmlReturn {
    unsafe { *power = 42_000 };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn device_count_gpu_cores(
    _dev: sys::MtmlDevice,
    count: *mut c_uint,
) -> sys::MtmlReturn {
    unsafe { *count = 4096 };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn device_get_render_path(
    dev: sys::MtmlDevice,
    path: *mut c_char,
    length: c_uint,
) -> sys::MtmlReturn {
    match device(dev) {
        Some(d) => fill(path, length, &format!("/dev/dri/renderD{}", 128 + d.index)),
        None => sys::MTML_ERROR_INVALID_ARGUMENT,
    }
}

unsafe extern "C" fn device_get_pci_info(
    dev: sys::MtmlDevice,
    info: *mut sys::MtmlPciInfo,
) -> sys::MtmlReturn {
    let Some(d) = device(dev) else {
        return sys::MTML_ERROR_INVALID_ARGUMENT;
    };
    let mut out = sys::MtmlPciInfo::default();
    let sbdf = format!("0000:0{}:00.0", d.index + 1);
    let ret = fill(out.sbdf.as_mut_ptr(), out.sbdf.len() as c_uint, &sbdf);
    if ret != sys::MTML_SUCCESS {
        return ret;
    }
    out.segment = 0;
    out.bus = d.index + 1;
    out.device = 0;
    out.pci_device_id = 0x0327_1ed5;
    out.bus_width = 16;
    unsafe { *info = out };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn device_get_serial_number(
    dev: sys::MtmlDevice,
    length: c_uint,
    serial: *mut c_char,
) -> sys::MtmlReturn {
    match device(dev) {
        Some(d) => fill(serial, length, &format!("STUB-SN-{:04}", d.index)),
        None => sys::MTML_ERROR_INVALID_ARGUMENT,
    }
}

unsafe extern "C" fn device_count_fan(
    _dev: sys::MtmlDevice,
    count: *mut c_uint,
) -> sys::MtmlReturn {
    unsafe { *count = 0 };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn device_get_fan_speed(
    _dev: sys::MtmlDevice,
    _index: c_uint,
    _speed: *mut c_uint,
) -> sys::MtmlReturn {
    sys::MTML_ERROR_NOT_SUPPORTED
}

// --- sub-resource handles; each scope reuses the device address ---

unsafe extern "C" fn device_init_memory(
    dev: sys::MtmlDevice,
    mem: *mut sys::MtmlMemory,
) -> sys::MtmlReturn {
    if device(dev).is_none() {
        return sys::MTML_ERROR_INVALID_ARGUMENT;
    }
    unsafe { *mem = dev as *mut sys::MtmlMemoryOpaque };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn device_init_gpu(
    dev: sys::MtmlDevice,
    gpu: *mut sys::MtmlGpu,
) -> sys::MtmlReturn {
    if device(dev).is_none() {
        return sys::MTML_ERROR_INVALID_ARGUMENT;
    }
    unsafe { *gpu = dev as *mut sys::MtmlGpuOpaque };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn device_init_vpu(
    dev: sys::MtmlDevice,
    vpu: *mut sys::MtmlVpu,
) -> sys::MtmlReturn {
    if device(dev).is_none() {
        return sys::MTML_ERROR_INVALID_ARGUMENT;
    }
    unsafe { *vpu = dev as *mut sys::MtmlVpuOpaque };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn device_free_memory(_mem: sys::MtmlMemory) -> sys::MtmlReturn {
    sys::MTML_SUCCESS
}

unsafe extern "C" fn device_free_gpu(_gpu: sys::MtmlGpu) -> sys::MtmlReturn {
    sys::MTML_SUCCESS
}

unsafe extern "C" fn device_free_vpu(_vpu: sys::MtmlVpu) -> sys::MtmlReturn {
    sys::MTML_SUCCESS
}

// --- memory scope ---

unsafe extern "C" fn memory_get_total(
    _mem: sys::MtmlMemory,
    total: *mut c_ulonglong,
) -> sys::MtmlReturn {
    unsafe { *total = 16 * 1024 * 1024 * 1024 };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn memory_get_used(
    _mem: sys::MtmlMemory,
    used: *mut c_ulonglong,
) -> sys::MtmlReturn {
    unsafe { *used = 2 * 1024 * 1024 * 1024 };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn memory_get_clock(
    _mem: sys::MtmlMemory,
    clock: *mut c_uint,
) -> sys::MtmlReturn {
    unsafe { *clock = 7_000 };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn memory_get_max_clock(
    _mem: sys::MtmlMemory,
    clock: *mut c_uint,
) -> sys::MtmlReturn {
    unsafe { *clock = 8_000 };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn memory_get_utilization(
    _mem: sys::MtmlMemory,
    util: *mut c_uint,
) -> sys::MtmlReturn {
    unsafe { *util = 12 };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn memory_get_bus_width(
    _mem: sys::MtmlMemory,
    width: *mut c_uint,
) -> sys::MtmlReturn {
    unsafe { *width = 256 };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn memory_get_ecc_mode(
    _mem: sys::MtmlMemory,
    _current: *mut c_uint,
    _pending: *mut c_uint,
) -> sys::MtmlReturn {
    sys::MTML_ERROR_NOT_SUPPORTED
}

// --- gpu scope ---

unsafe extern "C" fn gpu_get_utilization(
    _gpu: sys::MtmlGpu,
    util: *mut c_uint,
) -> sys::MtmlReturn {
    unsafe { *util = 37 };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn gpu_get_clock(_gpu: sys::MtmlGpu, clock: *mut c_uint) -> sys::MtmlReturn {
    unsafe { *clock = 1_000 };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn gpu_get_max_clock(_gpu: sys::MtmlGpu, clock: *mut c_uint) -> sys::MtmlReturn {
    unsafe { *clock = 1_800 };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn gpu_get_temperature(
    _gpu: sys::MtmlGpu,
    temp: *mut c_uint,
) -> sys::MtmlReturn {
    unsafe { *temp = 55 };
    sys::MTML_SUCCESS
}

// --- vpu scope ---

unsafe extern "C" fn vpu_get_clock(_vpu: sys::MtmlVpu, clock: *mut c_uint) -> sys::MtmlReturn {
    unsafe { *clock = 800 };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn vpu_get_max_clock(_vpu: sys::MtmlVpu, clock: *mut c_uint) -> sys::MtmlReturn {
    unsafe { *clock = 1_200 };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn vpu_get_utilization(
    _vpu: sys::MtmlVpu,
    util: *mut sys::MtmlCodecUtil,
) -> sys::MtmlReturn {
    let mut out = sys::MtmlCodecUtil::default();
    out.encode_util = 5;
    out.decode_util = 9;
    unsafe { *util = out };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn vpu_get_codec_capacity(
    _vpu: sys::MtmlVpu,
    enc: *mut c_uint,
    dec: *mut c_uint,
) -> sys::MtmlReturn {
    unsafe {
        *enc = 2;
        *dec = 4;
    }
    sys::MTML_SUCCESS
}

// --- topology, P2P and MtLink ---

unsafe extern "C" fn device_get_topology_level(
    dev1: sys::MtmlDevice,
    dev2: sys::MtmlDevice,
    level: *mut c_uint,
) -> sys::MtmlReturn {
    if device(dev1).is_none() || device(dev2).is_none() {
        return sys::MTML_ERROR_INVALID_ARGUMENT;
    }
    let value = if dev1 == dev2 {
        sys::MTML_TOPOLOGY_INTERNAL
    } else {
        sys::MTML_TOPOLOGY_HOSTBRIDGE
    };
    unsafe { *level = value };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn device_count_device_by_topology_level(
    dev: sys::MtmlDevice,
    level: c_uint,
    count: *mut c_uint,
) -> sys::MtmlReturn {
    if device(dev).is_none() {
        return sys::MTML_ERROR_INVALID_ARGUMENT;
    }
    let value = if level == sys::MTML_TOPOLOGY_HOSTBRIDGE { 1 } else { 0 };
    unsafe { *count = value };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn device_get_device_by_topology_level(
    dev: sys::MtmlDevice,
    level: c_uint,
    count: c_uint,
    devs: *mut sys::MtmlDevice,
) -> sys::MtmlReturn {
    let Some(d) = device(dev) else {
        return sys::MTML_ERROR_INVALID_ARGUMENT;
    };
    if level != sys::MTML_TOPOLOGY_HOSTBRIDGE || count == 0 {
        return sys::MTML_ERROR_INVALID_ARGUMENT;
    }
    let other = 1 - d.index as usize;
    unsafe { *devs = device_handle(other) };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn device_get_p2p_status(
    dev1: sys::MtmlDevice,
    dev2: sys::MtmlDevice,
    _cap: c_uint,
    status: *mut c_uint,
) -> sys::MtmlReturn {
    if device(dev1).is_none() || device(dev2).is_none() {
        return sys::MTML_ERROR_INVALID_ARGUMENT;
    }
    unsafe { *status = sys::MTML_P2P_STATUS_OK };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn device_get_mtlink_spec(
    dev: sys::MtmlDevice,
    spec: *mut sys::MtmlMtLinkSpec,
) -> sys::MtmlReturn {
    let Some(d) = device(dev) else {
        return sys::MTML_ERROR_INVALID_ARGUMENT;
    };
    let mut out = sys::MtmlMtLinkSpec::default();
    out.version = 1;
    out.band_width = 240;
    out.link_num = d.links.len() as c_uint;
    unsafe { *spec = out };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn device_get_mtlink_state(
    dev: sys::MtmlDevice,
    link: c_uint,
    state: *mut c_uint,
) -> sys::MtmlReturn {
    let Some(d) = device(dev) else {
        return sys::MTML_ERROR_INVALID_ARGUMENT;
    };
    match d.links.get(link as usize) {
        Some(l) => {
            unsafe { *state = l.state };
            sys::MTML_SUCCESS
        }
        None => sys::MTML_ERROR_INVALID_ARGUMENT,
    }
}

unsafe extern "C" fn device_get_mtlink_remote_device(
    dev: sys::MtmlDevice,
    link: c_uint,
    remote: *mut sys::MtmlDevice,
) -> sys::MtmlReturn {
    let Some(d) = device(dev) else {
        return sys::MTML_ERROR_INVALID_ARGUMENT;
    };
    match d.links.get(link as usize) {
        Some(l) => {
            unsafe { *remote = device_handle(l.remote) };
            sys::MTML_SUCCESS
        }
        None => sys::MTML_ERROR_INVALID_ARGUMENT,
    }
}

unsafe extern "C" fn device_count_mtlink_layouts(
    local: sys::MtmlDevice,
    remote: sys::MtmlDevice,
    count: *mut c_uint,
) -> sys::MtmlReturn {
    let (Some(a), Some(b)) = (device(local), device(remote)) else {
        return sys::MTML_ERROR_INVALID_ARGUMENT;
    };
    let n = a.links.iter().filter(|l| l.remote == b.index as usize).count();
    unsafe { *count = n as c_uint };
    sys::MTML_SUCCESS
}

unsafe extern "C" fn device_get_mtlink_layouts(
    local: sys::MtmlDevice,
    remote: sys::MtmlDevice,
    count: c_uint,
    layouts: *mut sys::MtmlMtLinkLayout,
) -> sys::MtmlReturn {
    let (Some(a), Some(b)) = (device(local), device(remote)) else {
        return sys::MTML_ERROR_INVALID_ARGUMENT;
    };
    let pairs: Vec<(usize, &StubLink)> = a
        .links
        .iter()
        .enumerate()
        .filter(|(_, l)| l.remote == b.index as usize)
        .collect();
    for (slot, (local_id, _)) in pairs.iter().take(count as usize).enumerate() {
        let mut layout = sys::MtmlMtLinkLayout::default();
        layout.local_link_id = *local_id as c_uint;
        layout.remote_link_id = 0;
        unsafe { *layouts.add(slot) = layout };
    }
    sys::MTML_SUCCESS
}

/// Address of the stub implementation for one native symbol name.
pub(crate) fn lookup(name: &str) -> Option<usize> {
    let addr = match name {
        "mtmlLibraryInit" => library_init as usize,
        "mtmlLibraryShutDown" => library_shut_down as usize,
        "mtmlErrorString" => error_string as usize,
        "mtmlLibraryGetVersion" => library_get_version as usize,
        "mtmlLibraryCountDevice" => library_count_device as usize,
        "mtmlLibraryInitDeviceByIndex" => library_init_device_by_index as usize,
        "mtmlLibraryInitDeviceByUuid" => library_init_device_by_uuid as usize,
        "mtmlLibraryInitSystem" => library_init_system as usize,
        "mtmlLibraryFreeSystem" => library_free_system as usize,
        "mtmlLibraryFreeDevice" => library_free_device as usize,
        "mtmlSystemGetDriverVersion" => system_get_driver_version as usize,
        "mtmlDeviceGetIndex" => device_get_index as usize,
        "mtmlDeviceGetName" => device_get_name as usize,
        "mtmlDeviceGetUuid" => device_get_uuid as usize,
        "mtmlDeviceGetBrand" => device_get_brand as usize,
        "mtmlDeviceGetPowerUsage" => device_get_power_usage as usize,
        "mtmlDeviceCountGpuCores" => device_count_gpu_cores as usize,
        "mtmlDeviceGetRenderPath" => device_get_render_path as usize,
        "mtmlDeviceGetPciInfo" => device_get_pci_info as usize,
        "mtmlDeviceGetSerialNumber" => device_get_serial_number as usize,
        "mtmlDeviceCountFan" => device_count_fan as usize,
        "mtmlDeviceGetFanSpeed" => device_get_fan_speed as usize,
        "mtmlDeviceInitMemory" => device_init_memory as usize,
        "mtmlDeviceInitGpu" => device_init_gpu as usize,
        "mtmlDeviceInitVpu" => device_init_vpu as usize,
        "mtmlDeviceFreeMemory" => device_free_memory as usize,
        "mtmlDeviceFreeGpu" => device_free_gpu as usize,
        "mtmlDeviceFreeVpu" => device_free_vpu as usize,
        "mtmlMemoryGetTotal" => memory_get_total as usize,
        "mtmlMemoryGetUsed" => memory_get_used as usize,
        "mtmlMemoryGetClock" => memory_get_clock as usize,
        "mtmlMemoryGetMaxClock" => memory_get_max_clock as usize,
        "mtmlMemoryGetUtilization" => memory_get_utilization as usize,
        "mtmlMemoryGetBusWidth" => memory_get_bus_width as usize,
        "mtmlMemoryGetEccMode" => memory_get_ecc_mode as usize,
        "mtmlGpuGetUtilization" => gpu_get_utilization as usize,
        "mtmlGpuGetClock" => gpu_get_clock as usize,
        "mtmlGpuGetMaxClock" => gpu_get_max_clock as usize,
        "mtmlGpuGetTemperature" => gpu_get_temperature as usize,
        "mtmlVpuGetClock" => vpu_get_clock as usize,
        "mtmlVpuGetMaxClock" => vpu_get_max_clock as usize,
        "mtmlVpuGetUtilization" => vpu_get_utilization as usize,
        "mtmlVpuGetCodecCapacity" => vpu_get_codec_capacity as usize,
        "mtmlDeviceGetTopologyLevel" => device_get_topology_level as usize,
        "mtmlDeviceCountDeviceByTopologyLevel" => device_count_device_by_topology_level as usize,
        "mtmlDeviceGetDeviceByTopologyLevel" => device_get_device_by_topology_level as usize,
        "mtmlDeviceGetP2PStatus" => device_get_p2p_status as usize,
        "mtmlDeviceGetMtLinkSpec" => device_get_mtlink_spec as usize,
        "mtmlDeviceGetMtLinkState" => device_get_mtlink_state as usize,
        "mtmlDeviceGetMtLinkRemoteDevice" => device_get_mtlink_remote_device as usize,
        "mtmlDeviceCountMtLinkLayouts" => device_count_mtlink_layouts as usize,
        "mtmlDeviceGetMtLinkLayouts" => device_get_mtlink_layouts as usize,
        _ => return None,
    };
    Some(addr)
}

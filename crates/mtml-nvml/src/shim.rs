//! The legacy call surface.
//!
//! Two failure policies coexist here, following the contract callers of
//! the old surface rely on. Identity and capacity queries (name, UUID,
//! memory info, clocks, temperature, power) propagate errors. The
//! telemetry and capability queries around them are total: any native
//! failure collapses to a documented sentinel (zero, an empty string or
//! list, or an "unsupported" status), because callers poll them
//! opportunistically across wildly different driver generations.

use mtml::{Brand, Device, MtmlError, P2pCap, Result};
use mtml_sys as sys;

use crate::enums::{
    ClockType, P2pCapsIndex, P2pStatus, TemperatureSensor, TopologyAncestor,
};
use crate::p2p::link_connectivity;

/// Device memory occupancy, legacy shape: `free` is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryInfo {
    pub total: u64,
    pub free: u64,
    pub used: u64,
}

/// GPU and memory-controller utilization percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utilization {
    pub gpu: u32,
    pub memory: u32,
}

/// Utilization of one codec direction plus its sampling period. The
/// native library exposes no period, so it reads zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecUtilization {
    pub utilization: u32,
    pub sampling_period_us: u32,
}

// --- lifecycle ---

pub fn init() -> Result<()> {
    init_with_flags(0)
}

/// Flags are accepted for signature compatibility and ignored.
pub fn init_with_flags(_flags: u32) -> Result<()> {
    mtml::init()
}

pub fn shutdown() -> Result<()> {
    mtml::shutdown()
}

// --- system scope ---

pub fn system_driver_version() -> Result<String> {
    let system = mtml::init_system()?;
    let version = system.driver_version();
    let _ = mtml::free_system(system);
    version
}

/// The accelerator runtime version is not surfaced by the driver.
pub fn system_cuda_driver_version() -> u32 {
    0
}

// --- enumeration and identity (fallible) ---

pub fn device_count() -> Result<u32> {
    mtml::device_count()
}

pub fn device_handle_by_index(index: u32) -> Result<Device> {
    mtml::device_by_index(index)
}

pub fn device_handle_by_uuid(uuid: &str) -> Result<Device> {
    mtml::device_by_uuid(uuid)
}

pub fn device_handle_by_pci_bus_id(pci_bus_id: &str) -> Result<Device> {
    mtml::device_by_pci_sbdf(pci_bus_id)
}

pub fn device_index(device: Device) -> Result<u32> {
    device.index()
}

pub fn device_name(device: Device) -> Result<String> {
    device.name()
}

pub fn device_uuid(device: Device) -> Result<String> {
    device.uuid()
}

pub fn device_pci_info(device: Device) -> Result<sys::MtmlPciInfo> {
    device.pci_info()
}

pub fn device_serial(device: Device) -> Result<String> {
    device.serial_number()
}

// --- capacity and telemetry (fallible) ---

pub fn device_memory_info(device: Device) -> Result<MemoryInfo> {
    device.with_memory(|mem| {
        let total = mem.total()?;
        let used = mem.used()?;
        Ok(derive_memory_info(total, used))
    })
}

// A driver reporting more used than total must not wrap the derived
// free figure.
fn derive_memory_info(total: u64, used: u64) -> MemoryInfo {
    MemoryInfo { total, free: total.saturating_sub(used), used }
}

pub fn device_utilization_rates(device: Device) -> Result<Utilization> {
    let gpu = device.with_gpu(|gpu| gpu.utilization())?;
    let memory = device.with_memory(|mem| mem.utilization())?;
    Ok(Utilization { gpu, memory })
}

/// Current clock of one domain. The SM domain has no native
/// counterpart and reads zero.
pub fn device_clock_info(device: Device, clock_type: ClockType) -> Result<u32> {
    match clock_type {
        ClockType::Graphics => device.with_gpu(|gpu| gpu.clock()),
        ClockType::Video => device.with_vpu(|vpu| vpu.clock()),
        ClockType::Mem => device.with_memory(|mem| mem.clock()),
        ClockType::Sm => Ok(0),
    }
}

/// Maximum clock of one domain. The graphics and SM domains have no
/// native maximum and read zero.
pub fn device_max_clock_info(device: Device, clock_type: ClockType) -> Result<u32> {
    match clock_type {
        ClockType::Video => device.with_vpu(|vpu| vpu.max_clock()),
        ClockType::Mem => device.with_memory(|mem| mem.max_clock()),
        ClockType::Graphics | ClockType::Sm => Ok(0),
    }
}

pub fn device_temperature(device: Device, _sensor: TemperatureSensor) -> Result<u32> {
    device.with_gpu(|gpu| gpu.temperature())
}

pub fn device_power_usage(device: Device) -> Result<u32> {
    device.power_usage()
}

// --- total queries with sentinel fallbacks ---

pub fn device_fan_speed(device: Device) -> u32 {
    device.fan_speed(0).unwrap_or(0)
}

pub fn device_fan_speed_v2(device: Device, fan: u32) -> u32 {
    device.fan_speed(fan).unwrap_or(0)
}

pub fn device_encoder_utilization(device: Device) -> CodecUtilization {
    let utilization = device
        .with_vpu(|vpu| vpu.utilization())
        .map(|util| util.encode_util)
        .unwrap_or(0);
    CodecUtilization { utilization, sampling_period_us: 0 }
}

pub fn device_decoder_utilization(device: Device) -> CodecUtilization {
    let utilization = device
        .with_vpu(|vpu| vpu.utilization())
        .map(|util| util.decode_util)
        .unwrap_or(0);
    CodecUtilization { utilization, sampling_period_us: 0 }
}

pub fn device_total_ecc_errors(device: Device, error_type: u32, counter_type: u32) -> u64 {
    device
        .with_memory(|mem| {
            mem.ecc_error_counter(error_type, counter_type, sys::MTML_MEMORY_LOCATION_DRAM)
        })
        .unwrap_or(0)
}

pub fn device_num_gpu_cores(device: Device) -> u32 {
    device.gpu_core_count().unwrap_or(0)
}

pub fn device_memory_bus_width(device: Device) -> u32 {
    device.with_memory(|mem| mem.bus_width()).unwrap_or(0)
}

pub fn device_vbios_version(device: Device) -> String {
    device.vbios_version().unwrap_or_default()
}

pub fn device_brand(device: Device) -> Brand {
    device.brand().unwrap_or(Brand::Unknown)
}

/// Minor number of the render node, parsed from its path
/// (`/dev/dri/renderD128` reads 128). Zero when unparseable.
pub fn device_minor_number(device: Device) -> u32 {
    let Ok(path) = device.render_path() else {
        return 0;
    };
    parse_render_minor(&path).unwrap_or(0)
}

fn parse_render_minor(path: &str) -> Option<u32> {
    let digits = path.rsplit("renderD").next().filter(|rest| *rest != path)?;
    let digits: String = digits.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

pub fn device_cpu_affinity(device: Device, cpu_set_size: u32) -> Vec<u64> {
    device
        .cpu_affinity_within_node(cpu_set_size)
        .unwrap_or_else(|_| vec![0; cpu_set_size as usize])
}

pub fn device_memory_affinity(device: Device, node_set_size: u32, _scope: u32) -> Vec<u64> {
    device
        .memory_affinity_within_node(node_set_size)
        .unwrap_or_else(|_| vec![0; node_set_size as usize])
}

pub fn device_cpu_affinity_within_scope(
    device: Device,
    cpu_set_size: u32,
    _scope: u32,
) -> Vec<u64> {
    device_cpu_affinity(device, cpu_set_size)
}

/// ECC mode as `(current, pend)`; `(0, 0)` when the device has no ECC.
pub fn device_ecc_mode(device: Device) -> (u32, u32) {
    device.with_memory(|mem| mem.ecc_mode()).unwrap_or((0, 0))
}

pub fn device_current_ecc_mode(device: Device) -> u32 {
    device_ecc_mode(device).0
}

pub fn device_pending_ecc_mode(device: Device) -> u32 {
    device_ecc_mode(device).1
}

pub fn device_retired_pages_pending_status(device: Device) -> bool {
    device
        .with_memory(|mem| mem.retired_pages_pending())
        .unwrap_or(false)
}

// --- topology and P2P (total) ---

/// Link status between two devices for one capability index.
///
/// The interconnect index is answered by MtLink emulation; the rest
/// translate to a native P2P query (unmapped indexes fall back to the
/// read capability). Native failures read `NotSupported`.
pub fn device_p2p_status(device1: Device, device2: Device, index: P2pCapsIndex) -> P2pStatus {
    let cap = match index {
        P2pCapsIndex::Read => P2pCap::Read,
        P2pCapsIndex::Write => P2pCap::Write,
        P2pCapsIndex::NvLink => return link_connectivity(&device1, &device2),
        P2pCapsIndex::Atomics | P2pCapsIndex::Prop | P2pCapsIndex::Unknown => P2pCap::Read,
    };
    match device1.p2p_status(device2, cap) {
        Ok(status) => P2pStatus::from_native(status),
        Err(_) => P2pStatus::NotSupported,
    }
}

/// Closest common ancestor of two devices on the legacy scale. Reads
/// `System`, the most distant level, when the driver cannot answer.
pub fn device_topology_common_ancestor(device1: Device, device2: Device) -> TopologyAncestor {
    match device1.topology_level_with(device2) {
        Ok(level) => TopologyAncestor::from_native(level),
        Err(_) => TopologyAncestor::System,
    }
}

/// Devices sitting at or below the given legacy level, nearest first.
/// Arbitrary numeric levels round down; failures read empty.
pub fn device_topology_nearest_gpus(device: Device, level: u32) -> Vec<Device> {
    let level = TopologyAncestor::floor_from_raw(level).to_native();
    device.devices_by_topology_level(level).unwrap_or_default()
}

/// Whether one interconnect port is active: any state other than down
/// counts, a failed query reads inactive.
pub fn device_nvlink_state(device: Device, link: u32) -> u32 {
    match device.link_state(link) {
        Ok(mtml::LinkState::Down) | Err(_) => 0,
        Ok(_) => 1,
    }
}

pub fn device_nvlink_capability(device: Device, link: u32, capability: u32) -> u32 {
    device.link_cap_status(link, capability).unwrap_or(0)
}

pub fn device_nvlink_remote_pci_info(device: Device, link: u32) -> Option<sys::MtmlPciInfo> {
    let remote = device.link_remote_device(link).ok()?;
    remote.pci_info().ok()
}

// --- constant answers for features the driver does not surface ---

pub fn device_bar1_memory_info(_device: Device) -> Option<MemoryInfo> {
    None
}

pub fn device_display_mode(_device: Device) -> u32 {
    0
}

pub fn device_display_active(_device: Device) -> u32 {
    0
}

pub fn device_current_driver_model(_device: Device) -> u32 {
    crate::enums::DRIVER_MODEL_NONE
}

pub fn device_persistence_mode(_device: Device) -> u32 {
    0
}

pub fn device_performance_state(_device: Device) -> Option<u32> {
    None
}

pub fn device_power_management_limit(_device: Device) -> u32 {
    0
}

pub fn device_pcie_throughput(_device: Device, _counter: u32) -> u32 {
    0
}

pub fn device_field_values(_device: Device, _field_ids: &[u32]) -> Vec<u64> {
    Vec::new()
}

pub fn device_compute_mode(_device: Device) -> u32 {
    crate::enums::COMPUTE_MODE_UNSET
}

pub fn device_cuda_compute_capability(_device: Device) -> (u32, u32) {
    (0, 0)
}

pub fn device_is_mig_device_handle(_device: Device) -> bool {
    false
}

/// `(current, pending)`; partitioning is never active on this surface.
pub fn device_mig_mode(_device: Device) -> (u32, u32) {
    (0, 0)
}

pub fn device_max_mig_device_count(_device: Device) -> u32 {
    0
}

pub fn device_mig_device_handle_by_index(_device: Device, _index: u32) -> Option<Device> {
    None
}

pub fn device_from_mig_device_handle(_device: Device) -> Option<Device> {
    None
}

pub fn device_gpu_instance_id(_device: Device) -> u32 {
    0
}

pub fn device_compute_instance_id(_device: Device) -> u32 {
    0
}

pub fn device_compute_running_processes(_device: Device) -> Vec<u32> {
    Vec::new()
}

pub fn device_graphics_running_processes(_device: Device) -> Vec<u32> {
    Vec::new()
}

pub fn device_process_utilization(_device: Device, _timestamp: u64) -> Vec<u32> {
    Vec::new()
}

/// Message for a status code, shared with the native taxonomy.
pub fn error_string(code: u32) -> String {
    mtml::error_string(code)
}

/// The error type for a given status code.
pub fn exception_class(code: u32) -> MtmlError {
    MtmlError::from_code(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_free_memory_never_wraps() {
        let info = derive_memory_info(16, 4);
        assert_eq!(info.free, 12);
        // Overcommitted accounting reads zero free, not u64::MAX.
        let info = derive_memory_info(4, 16);
        assert_eq!(info, MemoryInfo { total: 4, free: 0, used: 16 });
    }

    #[test]
    fn render_minor_parses_standard_paths() {
        assert_eq!(parse_render_minor("/dev/dri/renderD128"), Some(128));
        assert_eq!(parse_render_minor("/dev/dri/renderD129"), Some(129));
        assert_eq!(parse_render_minor("/dev/dri/card0"), None);
        assert_eq!(parse_render_minor("renderD"), None);
        assert_eq!(parse_render_minor(""), None);
    }
}

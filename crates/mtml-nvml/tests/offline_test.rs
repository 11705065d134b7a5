//! Runs in its own process and never initializes the library, so every
//! resolver path below sees a not-loaded state. Total calls must still
//! answer with their sentinels.

use mtml_nvml::{
    ClockType, NvmlError, P2pCapsIndex, P2pStatus, TopologyAncestor,
};

fn dangling_device() -> mtml_nvml::Device {
    // Never dereferenced: the resolver refuses before any native call.
    unsafe { mtml_nvml::Device::from_raw(std::ptr::null_mut()) }
}

#[test]
fn fallible_calls_report_uninitialized() {
    assert_eq!(mtml_nvml::device_count(), Err(NvmlError::Uninitialized));
    assert_eq!(
        mtml_nvml::device_name(dangling_device()),
        Err(NvmlError::Uninitialized)
    );
    assert_eq!(
        mtml_nvml::device_clock_info(dangling_device(), ClockType::Graphics),
        Err(NvmlError::Uninitialized)
    );
    assert_eq!(
        mtml_nvml::system_driver_version(),
        Err(NvmlError::Uninitialized)
    );
}

#[test]
fn total_calls_answer_sentinels_without_the_library() {
    let dev = dangling_device();
    assert_eq!(mtml_nvml::device_fan_speed(dev), 0);
    assert_eq!(mtml_nvml::device_encoder_utilization(dev).utilization, 0);
    assert_eq!(mtml_nvml::device_total_ecc_errors(dev, 0, 0), 0);
    assert_eq!(mtml_nvml::device_vbios_version(dev), "");
    assert_eq!(mtml_nvml::device_minor_number(dev), 0);
    assert_eq!(mtml_nvml::device_cpu_affinity(dev, 2), vec![0, 0]);
    assert_eq!(mtml_nvml::device_ecc_mode(dev), (0, 0));
    assert!(!mtml_nvml::device_retired_pages_pending_status(dev));
}

#[test]
fn topology_and_p2p_degrade_without_the_library() {
    let dev = dangling_device();
    assert_eq!(
        mtml_nvml::device_p2p_status(dev, dev, P2pCapsIndex::Read),
        P2pStatus::NotSupported
    );
    assert_eq!(
        mtml_nvml::device_p2p_status(dev, dev, P2pCapsIndex::NvLink),
        P2pStatus::NotSupported
    );
    assert_eq!(
        mtml_nvml::device_topology_common_ancestor(dev, dev),
        TopologyAncestor::System
    );
    assert!(mtml_nvml::device_topology_nearest_gpus(dev, 40).is_empty());
    assert_eq!(mtml_nvml::device_nvlink_state(dev, 0), 0);
    assert!(mtml_nvml::device_nvlink_remote_pci_info(dev, 0).is_none());
}

#[test]
fn constant_answers_never_touch_the_library() {
    let dev = dangling_device();
    assert!(mtml_nvml::device_bar1_memory_info(dev).is_none());
    assert_eq!(mtml_nvml::device_display_mode(dev), 0);
    assert_eq!(mtml_nvml::device_compute_mode(dev), 5);
    assert_eq!(mtml_nvml::device_current_driver_model(dev), 3);
    assert_eq!(mtml_nvml::device_cuda_compute_capability(dev), (0, 0));
    assert!(!mtml_nvml::device_is_mig_device_handle(dev));
    assert_eq!(mtml_nvml::device_mig_mode(dev), (0, 0));
    assert!(mtml_nvml::device_field_values(dev, &[1, 2]).is_empty());
    assert_eq!(mtml_nvml::system_cuda_driver_version(), 0);
}

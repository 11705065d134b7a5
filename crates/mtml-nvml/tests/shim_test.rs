//! The legacy surface end to end against the in-process stub driver.

use std::sync::Mutex;

use mtml_nvml::{
    ClockType, NvmlError, P2pCapsIndex, P2pStatus, TemperatureSensor, TopologyAncestor,
};

static LOCK: Mutex<()> = Mutex::new(());

fn with_session(body: impl FnOnce()) {
    let _guard = LOCK.lock().unwrap();
    mtml_nvml::init().unwrap();
    body();
    mtml_nvml::shutdown().unwrap();
}

#[test]
fn identity_calls_pass_through() {
    with_session(|| {
        assert_eq!(mtml_nvml::device_count().unwrap(), 2);
        let dev = mtml_nvml::device_handle_by_index(0).unwrap();
        assert_eq!(mtml_nvml::device_index(dev).unwrap(), 0);
        assert_eq!(mtml_nvml::device_name(dev).unwrap(), "MTT S4000");
        let uuid = mtml_nvml::device_uuid(dev).unwrap();
        let same = mtml_nvml::device_handle_by_uuid(&uuid).unwrap();
        assert_eq!(mtml_nvml::device_index(same).unwrap(), 0);
        assert_eq!(
            mtml_nvml::device_handle_by_uuid("MTT-NO-SUCH-DEVICE").unwrap_err(),
            NvmlError::NotFound
        );
        assert_eq!(
            mtml_nvml::system_driver_version().unwrap(),
            mtml::stub::STUB_DRIVER_VERSION
        );
    });
}

#[test]
fn memory_info_derives_free_from_total_and_used() {
    with_session(|| {
        let dev = mtml_nvml::device_handle_by_index(0).unwrap();
        let info = mtml_nvml::device_memory_info(dev).unwrap();
        assert_eq!(info.total, 16 * 1024 * 1024 * 1024);
        assert_eq!(info.used, 2 * 1024 * 1024 * 1024);
        assert_eq!(info.free, info.total - info.used);
    });
}

#[test]
fn clock_queries_dispatch_by_domain() {
    with_session(|| {
        let dev = mtml_nvml::device_handle_by_index(0).unwrap();
        assert_eq!(mtml_nvml::device_clock_info(dev, ClockType::Graphics).unwrap(), 1_000);
        assert_eq!(mtml_nvml::device_clock_info(dev, ClockType::Mem).unwrap(), 7_000);
        assert_eq!(mtml_nvml::device_clock_info(dev, ClockType::Video).unwrap(), 800);
        assert_eq!(mtml_nvml::device_clock_info(dev, ClockType::Sm).unwrap(), 0);
        // No native maximum exists for the graphics domain.
        assert_eq!(mtml_nvml::device_max_clock_info(dev, ClockType::Graphics).unwrap(), 0);
        assert_eq!(mtml_nvml::device_max_clock_info(dev, ClockType::Mem).unwrap(), 8_000);
        assert_eq!(mtml_nvml::device_max_clock_info(dev, ClockType::Video).unwrap(), 1_200);
    });
}

#[test]
fn telemetry_composes_across_sub_handles() {
    with_session(|| {
        let dev = mtml_nvml::device_handle_by_index(0).unwrap();
        let util = mtml_nvml::device_utilization_rates(dev).unwrap();
        assert_eq!(util.gpu, 37);
        assert_eq!(util.memory, 12);
        assert_eq!(
            mtml_nvml::device_temperature(dev, TemperatureSensor::Gpu).unwrap(),
            55
        );
        assert_eq!(mtml_nvml::device_power_usage(dev).unwrap(), 42_000);
        let enc = mtml_nvml::device_encoder_utilization(dev);
        assert_eq!((enc.utilization, enc.sampling_period_us), (5, 0));
        let dec = mtml_nvml::device_decoder_utilization(dev);
        assert_eq!((dec.utilization, dec.sampling_period_us), (9, 0));
    });
}

#[test]
fn unsupported_telemetry_reads_sentinels() {
    with_session(|| {
        let dev = mtml_nvml::device_handle_by_index(0).unwrap();
        // The stub driver rejects fan queries and exports no vbios
        // getter at all; both collapse to sentinels.
        assert_eq!(mtml_nvml::device_fan_speed(dev), 0);
        assert_eq!(mtml_nvml::device_fan_speed_v2(dev, 3), 0);
        assert_eq!(mtml_nvml::device_vbios_version(dev), "");
        assert_eq!(mtml_nvml::device_ecc_mode(dev), (0, 0));
        assert_eq!(mtml_nvml::device_total_ecc_errors(dev, 0, 0), 0);
        assert_eq!(mtml_nvml::device_compute_mode(dev), 5);
        assert_eq!(mtml_nvml::device_current_driver_model(dev), 3);
        assert_eq!(mtml_nvml::device_mig_mode(dev), (0, 0));
        assert!(mtml_nvml::device_bar1_memory_info(dev).is_none());
        assert_eq!(mtml_nvml::device_memory_bus_width(dev), 256);
        assert_eq!(mtml_nvml::device_num_gpu_cores(dev), 4096);
        assert_eq!(mtml_nvml::device_minor_number(dev), 128);
    });
}

#[test]
fn topology_translates_to_the_sparse_scale() {
    with_session(|| {
        let dev0 = mtml_nvml::device_handle_by_index(0).unwrap();
        let dev1 = mtml_nvml::device_handle_by_index(1).unwrap();
        assert_eq!(
            mtml_nvml::device_topology_common_ancestor(dev0, dev0),
            TopologyAncestor::Internal
        );
        let ancestor = mtml_nvml::device_topology_common_ancestor(dev0, dev1);
        assert_eq!(ancestor, TopologyAncestor::HostBridge);
        assert_eq!(ancestor.as_raw(), 30);

        // 35 rounds down to the host-bridge level, where device 1 sits.
        let peers = mtml_nvml::device_topology_nearest_gpus(dev0, 35);
        assert_eq!(peers.len(), 1);
        assert_eq!(mtml_nvml::device_index(peers[0]).unwrap(), 1);
        assert!(mtml_nvml::device_topology_nearest_gpus(dev0, 0).is_empty());
    });
}

#[test]
fn p2p_status_uses_native_caps_and_link_emulation() {
    with_session(|| {
        let dev0 = mtml_nvml::device_handle_by_index(0).unwrap();
        let dev1 = mtml_nvml::device_handle_by_index(1).unwrap();
        assert_eq!(
            mtml_nvml::device_p2p_status(dev0, dev1, P2pCapsIndex::Read),
            P2pStatus::Ok
        );
        // The interconnect index never hits the native P2P entry point;
        // the stub's up link answers it.
        assert_eq!(
            mtml_nvml::device_p2p_status(dev0, dev1, P2pCapsIndex::NvLink),
            P2pStatus::Ok
        );
        assert_eq!(
            mtml_nvml::device_p2p_status(dev0, dev0, P2pCapsIndex::NvLink),
            P2pStatus::Ok
        );
    });
}

#[test]
fn nvlink_queries_follow_port_state() {
    with_session(|| {
        let dev0 = mtml_nvml::device_handle_by_index(0).unwrap();
        let dev1 = mtml_nvml::device_handle_by_index(1).unwrap();
        assert_eq!(mtml_nvml::device_nvlink_state(dev0, 0), 1);
        assert_eq!(mtml_nvml::device_nvlink_state(dev0, 1), 0);
        // Out-of-range ports read inactive, not an error.
        assert_eq!(mtml_nvml::device_nvlink_state(dev0, 7), 0);
        let remote = mtml_nvml::device_nvlink_remote_pci_info(dev0, 0).unwrap();
        let expected = mtml_nvml::device_pci_info(dev1).unwrap();
        assert_eq!(
            mtml_sys::c_buf_to_string(&remote.sbdf),
            mtml_sys::c_buf_to_string(&expected.sbdf)
        );
        assert!(mtml_nvml::device_nvlink_remote_pci_info(dev0, 9).is_none());
    });
}

#[test]
fn affinity_falls_back_to_zero_masks() {
    with_session(|| {
        let dev = mtml_nvml::device_handle_by_index(0).unwrap();
        // The stub exports no affinity entry points.
        assert_eq!(mtml_nvml::device_cpu_affinity(dev, 4), vec![0; 4]);
        assert_eq!(mtml_nvml::device_memory_affinity(dev, 2, 0), vec![0; 2]);
    });
}

//! End-to-end walk over the stub driver's two-device box.

use std::sync::Mutex;

use mtml::{LinkState, MtmlError, P2pCap, P2pStatus, TopologyLevel};

static LOCK: Mutex<()> = Mutex::new(());

fn with_session(body: impl FnOnce()) {
    let _guard = LOCK.lock().unwrap();
    mtml::init().unwrap();
    body();
    mtml::shutdown().unwrap();
}

#[test]
fn enumerates_devices_with_identity() {
    with_session(|| {
        assert_eq!(mtml::device_count().unwrap(), 2);
        let dev0 = mtml::device_by_index(0).unwrap();
        let dev1 = mtml::device_by_index(1).unwrap();
        assert_eq!(dev0.index().unwrap(), 0);
        assert_eq!(dev0.name().unwrap(), "MTT S4000");
        assert_ne!(dev0.uuid().unwrap(), dev1.uuid().unwrap());

        let again = mtml::device_by_uuid(&dev1.uuid().unwrap()).unwrap();
        assert_eq!(again.index().unwrap(), 1);
        assert_eq!(
            mtml::device_by_uuid("MTT-NO-SUCH-DEVICE"),
            Err(MtmlError::NotFound)
        );
        mtml::free_device(dev0).unwrap();
        mtml::free_device(dev1).unwrap();
    });
}

#[test]
fn reads_driver_version_through_the_system_handle() {
    with_session(|| {
        let system = mtml::init_system().unwrap();
        assert_eq!(system.driver_version().unwrap(), mtml::stub::STUB_DRIVER_VERSION);
        mtml::free_system(system).unwrap();
    });
}

#[test]
fn sub_resource_handles_answer_queries() {
    with_session(|| {
        let dev = mtml::device_by_index(0).unwrap();

        let total = dev.with_memory(|mem| mem.total()).unwrap();
        assert_eq!(total, 16 * 1024 * 1024 * 1024);
        let clocks = dev.with_memory(|mem| Ok((mem.clock()?, mem.max_clock()?))).unwrap();
        assert_eq!(clocks, (7_000, 8_000));

        let gpu = dev.init_gpu().unwrap();
        assert_eq!(gpu.utilization().unwrap(), 37);
        assert_eq!(gpu.temperature().unwrap(), 55);
        gpu.free().unwrap();

        let (enc, dec) = dev.with_vpu(|vpu| vpu.codec_capacity()).unwrap();
        assert_eq!((enc, dec), (2, 4));

        mtml::free_device(dev).unwrap();
    });
}

#[test]
fn topology_and_links_describe_the_two_device_box() {
    with_session(|| {
        let dev0 = mtml::device_by_index(0).unwrap();
        let dev1 = mtml::device_by_index(1).unwrap();

        assert_eq!(
            dev0.topology_level_with(dev0).unwrap(),
            TopologyLevel::Internal
        );
        assert_eq!(
            dev0.topology_level_with(dev1).unwrap(),
            TopologyLevel::HostBridge
        );
        let peers = dev0.devices_by_topology_level(TopologyLevel::HostBridge).unwrap();
        assert_eq!(peers.len(), 1);
        assert_eq!(peers[0].index().unwrap(), 1);
        assert!(
            dev0.devices_by_topology_level(TopologyLevel::Node)
                .unwrap()
                .is_empty()
        );

        let spec = dev0.link_spec().unwrap();
        assert_eq!(spec.link_num, 2);
        assert_eq!(dev0.link_state(0).unwrap(), LinkState::Up);
        assert_eq!(dev0.link_state(1).unwrap(), LinkState::Down);
        assert_eq!(
            dev0.link_state(2).unwrap_err(),
            MtmlError::InvalidArgument
        );
        let remote = dev0.link_remote_device(0).unwrap();
        assert_eq!(remote.uuid().unwrap(), dev1.uuid().unwrap());

        assert_eq!(dev0.count_link_layouts(dev1).unwrap(), 2);
        let layouts = dev0.link_layouts(dev1).unwrap();
        assert_eq!(layouts.len(), 2);
        assert_eq!(layouts[0].local_link_id, 0);

        assert_eq!(
            dev0.p2p_status(dev1, P2pCap::Read).unwrap(),
            P2pStatus::Ok
        );

        mtml::free_device(dev0).unwrap();
        mtml::free_device(dev1).unwrap();
    });
}

#[test]
fn missing_entry_points_surface_as_function_not_found() {
    with_session(|| {
        let dev = mtml::device_by_index(0).unwrap();
        // The stub exports no vbios getter, so the symbol is absent even
        // though the image is loaded.
        assert_eq!(dev.vbios_version(), Err(MtmlError::FunctionNotFound));
        // Present but unsupported is a different failure.
        assert_eq!(dev.fan_speed(0), Err(MtmlError::NotSupported));
        mtml::free_device(dev).unwrap();
    });
}

#[test]
fn unknown_codes_pick_up_the_driver_message() {
    with_session(|| {
        // An undeclared code asks the driver; the declared unknown
        // code 999 stays on the static table even with a driver up.
        assert_eq!(mtml::error_string(1001), "stub driver condition");
        assert_eq!(mtml::error_string(999), "Unknown Error");
    });
}

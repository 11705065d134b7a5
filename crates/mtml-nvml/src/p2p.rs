//! MtLink-based emulation of the legacy link-connectivity query.
//!
//! The native library has no single "are these two devices linked"
//! entry point, so the answer is assembled from several: the topology
//! level (same device is trivially connected), a scan of the local
//! MtLink ports comparing each up link's remote UUID against the peer,
//! and the direct-connection count as a last resort. Every native
//! failure along the way degrades the answer instead of escaping.

use mtml::{LinkState, Result, TopologyLevel};

use crate::enums::P2pStatus;

/// The slice of device behavior the emulation consumes. Split out so
/// the algorithm can run against scripted fixtures.
pub(crate) trait LinkQuery {
    fn topology_level_with(&self, other: &Self) -> Result<TopologyLevel>;
    fn uuid(&self) -> Result<String>;
    fn link_count(&self) -> Result<u32>;
    fn link_state(&self, link: u32) -> Result<LinkState>;
    /// UUID of the device behind one port, `None` when the port has no
    /// remote.
    fn link_remote_uuid(&self, link: u32) -> Result<Option<String>>;
    fn direct_link_count(&self, other: &Self) -> Result<u32>;
}

impl LinkQuery for mtml::Device {
    fn topology_level_with(&self, other: &Self) -> Result<TopologyLevel> {
        mtml::Device::topology_level_with(self, *other)
    }

    fn uuid(&self) -> Result<String> {
        mtml::Device::uuid(self)
    }

    fn link_count(&self) -> Result<u32> {
        Ok(self.link_spec()?.link_num)
    }

    fn link_state(&self, link: u32) -> Result<LinkState> {
        mtml::Device::link_state(self, link)
    }

    fn link_remote_uuid(&self, link: u32) -> Result<Option<String>> {
        let remote = self.link_remote_device(link)?;
        if remote.as_raw().is_null() {
            return Ok(None);
        }
        remote.uuid().map(Some)
    }

    fn direct_link_count(&self, other: &Self) -> Result<u32> {
        self.count_link_layouts(*other)
    }
}

/// Whether `local` can reach `remote` over the interconnect. Total:
/// inconclusive evidence yields `NotSupported`, never an error.
pub(crate) fn link_connectivity<D: LinkQuery>(local: &D, remote: &D) -> P2pStatus {
    if local.topology_level_with(remote) == Ok(TopologyLevel::Internal) {
        return P2pStatus::Ok;
    }

    if let (Ok(peer_uuid), Ok(links)) = (remote.uuid(), local.link_count()) {
        for link in 0..links {
            if local.link_state(link) != Ok(LinkState::Up) {
                continue;
            }
            match local.link_remote_uuid(link) {
                Ok(Some(uuid)) if uuid == peer_uuid => return P2pStatus::Ok,
                _ => continue,
            }
        }
    }

    // Port scan found nothing; the layout count still knows about
    // physical connections whose endpoints did not resolve.
    match local.direct_link_count(remote) {
        Ok(count) if count > 0 => P2pStatus::Ok,
        _ => P2pStatus::NotSupported,
    }
}

#[cfg(test)]
mod tests {
    use mtml::MtmlError;

    use super::*;

    struct FakeLink {
        state: Result<LinkState>,
        remote: Result<Option<&'static str>>,
    }

    struct FakeDevice {
        uuid: Result<&'static str>,
        topology: Result<TopologyLevel>,
        link_count: Result<u32>,
        links: Vec<FakeLink>,
        layouts: Result<u32>,
    }

    impl FakeDevice {
        fn reachable(uuid: &'static str) -> Self {
            FakeDevice {
                uuid: Ok(uuid),
                topology: Ok(TopologyLevel::HostBridge),
                link_count: Ok(0),
                links: Vec::new(),
                layouts: Ok(0),
            }
        }
    }

    impl LinkQuery for FakeDevice {
        fn topology_level_with(&self, _other: &Self) -> Result<TopologyLevel> {
            self.topology
        }

        fn uuid(&self) -> Result<String> {
            self.uuid.map(str::to_owned)
        }

        fn link_count(&self) -> Result<u32> {
            self.link_count
        }

        fn link_state(&self, link: u32) -> Result<LinkState> {
            self.links[link as usize].state
        }

        fn link_remote_uuid(&self, link: u32) -> Result<Option<String>> {
            self.links[link as usize]
                .remote
                .map(|r| r.map(str::to_owned))
        }

        fn direct_link_count(&self, _other: &Self) -> Result<u32> {
            self.layouts
        }
    }

    #[test]
    fn internal_topology_short_circuits() {
        let mut a = FakeDevice::reachable("GPU-A");
        a.topology = Ok(TopologyLevel::Internal);
        // A broken link table is never consulted when topology already
        // answers the question.
        a.link_count = Err(MtmlError::DriverFailure);
        let b = FakeDevice::reachable("GPU-B");
        assert_eq!(link_connectivity(&a, &b), P2pStatus::Ok);
    }

    #[test]
    fn up_link_to_matching_peer_connects() {
        let mut a = FakeDevice::reachable("GPU-A");
        a.link_count = Ok(2);
        a.links = vec![
            FakeLink { state: Ok(LinkState::Down), remote: Ok(Some("GPU-B")) },
            FakeLink { state: Ok(LinkState::Up), remote: Ok(Some("GPU-B")) },
        ];
        let b = FakeDevice::reachable("GPU-B");
        assert_eq!(link_connectivity(&a, &b), P2pStatus::Ok);
    }

    #[test]
    fn down_and_downgraded_links_do_not_count() {
        let mut a = FakeDevice::reachable("GPU-A");
        a.link_count = Ok(2);
        a.links = vec![
            FakeLink { state: Ok(LinkState::Down), remote: Ok(Some("GPU-B")) },
            FakeLink { state: Ok(LinkState::Downgrade), remote: Ok(Some("GPU-B")) },
        ];
        let b = FakeDevice::reachable("GPU-B");
        assert_eq!(link_connectivity(&a, &b), P2pStatus::NotSupported);
    }

    #[test]
    fn up_link_to_a_different_peer_does_not_count() {
        let mut a = FakeDevice::reachable("GPU-A");
        a.link_count = Ok(1);
        a.links = vec![FakeLink { state: Ok(LinkState::Up), remote: Ok(Some("GPU-C")) }];
        let b = FakeDevice::reachable("GPU-B");
        assert_eq!(link_connectivity(&a, &b), P2pStatus::NotSupported);
    }

    #[test]
    fn layout_count_answers_when_the_port_scan_cannot() {
        let mut a = FakeDevice::reachable("GPU-A");
        a.link_count = Err(MtmlError::NotSupported);
        a.layouts = Ok(1);
        let b = FakeDevice::reachable("GPU-B");
        assert_eq!(link_connectivity(&a, &b), P2pStatus::Ok);
    }

    #[test]
    fn faulty_links_are_skipped_not_fatal() {
        let mut a = FakeDevice::reachable("GPU-A");
        a.link_count = Ok(3);
        a.links = vec![
            FakeLink { state: Err(MtmlError::GpuIsLost), remote: Ok(None) },
            FakeLink { state: Ok(LinkState::Up), remote: Err(MtmlError::DriverFailure) },
            FakeLink { state: Ok(LinkState::Up), remote: Ok(Some("GPU-B")) },
        ];
        let b = FakeDevice::reachable("GPU-B");
        assert_eq!(link_connectivity(&a, &b), P2pStatus::Ok);
    }

    #[test]
    fn ports_without_a_remote_are_skipped() {
        let mut a = FakeDevice::reachable("GPU-A");
        a.link_count = Ok(1);
        a.links = vec![FakeLink { state: Ok(LinkState::Up), remote: Ok(None) }];
        let b = FakeDevice::reachable("GPU-B");
        assert_eq!(link_connectivity(&a, &b), P2pStatus::NotSupported);
    }

    #[test]
    fn total_even_when_everything_fails() {
        let a = FakeDevice {
            uuid: Err(MtmlError::GpuIsLost),
            topology: Err(MtmlError::GpuIsLost),
            link_count: Err(MtmlError::GpuIsLost),
            links: Vec::new(),
            layouts: Err(MtmlError::GpuIsLost),
        };
        let b = FakeDevice {
            uuid: Err(MtmlError::GpuIsLost),
            topology: Err(MtmlError::GpuIsLost),
            link_count: Err(MtmlError::GpuIsLost),
            links: Vec::new(),
            layouts: Err(MtmlError::GpuIsLost),
        };
        assert_eq!(link_connectivity(&a, &b), P2pStatus::NotSupported);
    }
}

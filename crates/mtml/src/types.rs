//! Typed views of the discrete native enum values.
//!
//! Only the enums the translation and emulation logic branches on get a
//! Rust type; modes and counters the bindings merely relay stay `u32`.

use std::ffi::c_uint;

use mtml_sys as sys;

use crate::error::{MtmlError, Result};

/// Device product brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brand {
    Mtt,
    Unknown,
}

impl Brand {
    pub(crate) fn from_raw(raw: c_uint) -> Self {
        match raw {
            sys::MTML_BRAND_MTT => Self::Mtt,
            _ => Self::Unknown,
        }
    }
}

/// How close two devices sit in the PCI fabric, closest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TopologyLevel {
    Internal,
    Single,
    Multiple,
    HostBridge,
    Node,
    System,
}

impl TopologyLevel {
    pub fn from_raw(raw: c_uint) -> Result<Self> {
        match raw {
            sys::MTML_TOPOLOGY_INTERNAL => Ok(Self::Internal),
            sys::MTML_TOPOLOGY_SINGLE => Ok(Self::Single),
            sys::MTML_TOPOLOGY_MULTIPLE => Ok(Self::Multiple),
            sys::MTML_TOPOLOGY_HOSTBRIDGE => Ok(Self::HostBridge),
            sys::MTML_TOPOLOGY_NODE => Ok(Self::Node),
            sys::MTML_TOPOLOGY_SYSTEM => Ok(Self::System),
            other => Err(MtmlError::Unknown(other)),
        }
    }

    pub fn as_raw(&self) -> c_uint {
        match self {
            Self::Internal => sys::MTML_TOPOLOGY_INTERNAL,
            Self::Single => sys::MTML_TOPOLOGY_SINGLE,
            Self::Multiple => sys::MTML_TOPOLOGY_MULTIPLE,
            Self::HostBridge => sys::MTML_TOPOLOGY_HOSTBRIDGE,
            Self::Node => sys::MTML_TOPOLOGY_NODE,
            Self::System => sys::MTML_TOPOLOGY_SYSTEM,
        }
    }
}

/// Whether a peer-to-peer capability is usable between two devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum P2pStatus {
    Ok,
    ChipsetNotSupported,
    GpuNotSupported,
    Unknown,
}

impl P2pStatus {
    pub fn from_raw(raw: c_uint) -> Self {
        match raw {
            sys::MTML_P2P_STATUS_OK => Self::Ok,
            sys::MTML_P2P_STATUS_CHIPSET_NOT_SUPPORTED => Self::ChipsetNotSupported,
            sys::MTML_P2P_STATUS_GPU_NOT_SUPPORTED => Self::GpuNotSupported,
            _ => Self::Unknown,
        }
    }

    pub fn as_raw(&self) -> c_uint {
        match self {
            Self::Ok => sys::MTML_P2P_STATUS_OK,
            Self::ChipsetNotSupported => sys::MTML_P2P_STATUS_CHIPSET_NOT_SUPPORTED,
            Self::GpuNotSupported => sys::MTML_P2P_STATUS_GPU_NOT_SUPPORTED,
            Self::Unknown => sys::MTML_P2P_STATUS_UNKNOWN,
        }
    }
}

/// Peer-to-peer capability being queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum P2pCap {
    Read,
    Write,
}

impl P2pCap {
    pub fn as_raw(&self) -> c_uint {
        match self {
            Self::Read => sys::MTML_P2P_CAPS_READ,
            Self::Write => sys::MTML_P2P_CAPS_WRITE,
        }
    }
}

/// State of one MtLink port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Down,
    Up,
    Downgrade,
}

impl LinkState {
    pub fn from_raw(raw: c_uint) -> Result<Self> {
        match raw {
            sys::MTML_MTLINK_STATE_DOWN => Ok(Self::Down),
            sys::MTML_MTLINK_STATE_UP => Ok(Self::Up),
            sys::MTML_MTLINK_STATE_DOWNGRADE => Ok(Self::Downgrade),
            other => Err(MtmlError::Unknown(other)),
        }
    }
}

/// GPU engine selector for per-engine utilization queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpuEngine {
    Geometry,
    TwoD,
    ThreeD,
    Compute,
}

impl GpuEngine {
    pub fn as_raw(&self) -> c_uint {
        match self {
            Self::Geometry => sys::MTML_GPU_ENGINE_GEOMETRY,
            Self::TwoD => sys::MTML_GPU_ENGINE_2D,
            Self::ThreeD => sys::MTML_GPU_ENGINE_3D,
            Self::Compute => sys::MTML_GPU_ENGINE_COMPUTE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topology_levels_round_trip_and_order() {
        for raw in 0..=5 {
            let level = TopologyLevel::from_raw(raw).unwrap();
            assert_eq!(level.as_raw(), raw);
        }
        assert!(TopologyLevel::Internal < TopologyLevel::Single);
        assert!(TopologyLevel::Node < TopologyLevel::System);
        assert_eq!(TopologyLevel::from_raw(6), Err(MtmlError::Unknown(6)));
    }

    #[test]
    fn unexpected_p2p_status_degrades_to_unknown() {
        assert_eq!(P2pStatus::from_raw(3), P2pStatus::Unknown);
        assert_eq!(P2pStatus::from_raw(77), P2pStatus::Unknown);
        assert_eq!(P2pStatus::from_raw(0), P2pStatus::Ok);
    }

    #[test]
    fn link_state_rejects_out_of_range_values() {
        assert_eq!(LinkState::from_raw(1), Ok(LinkState::Up));
        assert_eq!(LinkState::from_raw(9), Err(MtmlError::Unknown(9)));
    }
}

//! Legacy enum domains and their mapping onto the native ones.
//!
//! The legacy topology scale is sparse (0, 10, 20, ...) where the
//! native one is dense (0..=5); the two are otherwise order-isomorphic,
//! so distance comparisons survive the translation in both directions.

use mtml::TopologyLevel;

/// Clock domain selector of the legacy surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockType {
    Graphics,
    Sm,
    Mem,
    Video,
}

impl ClockType {
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::Graphics),
            1 => Some(Self::Sm),
            2 => Some(Self::Mem),
            3 => Some(Self::Video),
            _ => None,
        }
    }
}

/// Temperature sensor selector. Only the GPU die sensor exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureSensor {
    Gpu,
}

/// P2P capability index of the legacy surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum P2pCapsIndex {
    Read,
    Write,
    /// Interconnect-link connectivity; answered by MtLink emulation.
    NvLink,
    Atomics,
    Prop,
    Unknown,
}

impl P2pCapsIndex {
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::Read,
            1 => Self::Write,
            2 => Self::NvLink,
            3 => Self::Atomics,
            4 => Self::Prop,
            _ => Self::Unknown,
        }
    }
}

/// P2P status vocabulary of the legacy surface. Wider than the native
/// one; the extra variants never come from translation of a native
/// status, only from emulation outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum P2pStatus {
    Ok,
    ChipsetNotSupported,
    GpuNotSupported,
    IohTopologyNotSupported,
    DisabledByRegkey,
    NotSupported,
    Unknown,
}

impl P2pStatus {
    pub fn as_raw(&self) -> u32 {
        match self {
            Self::Ok => 0,
            Self::ChipsetNotSupported => 1,
            Self::GpuNotSupported => 2,
            Self::IohTopologyNotSupported => 3,
            Self::DisabledByRegkey => 4,
            Self::NotSupported => 5,
            Self::Unknown => 6,
        }
    }

    pub(crate) fn from_native(status: mtml::P2pStatus) -> Self {
        match status {
            mtml::P2pStatus::Ok => Self::Ok,
            mtml::P2pStatus::ChipsetNotSupported => Self::ChipsetNotSupported,
            mtml::P2pStatus::GpuNotSupported => Self::GpuNotSupported,
            mtml::P2pStatus::Unknown => Self::Unknown,
        }
    }
}

/// Topology ancestor levels of the legacy surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TopologyAncestor {
    Internal,
    Single,
    Multiple,
    HostBridge,
    Node,
    System,
}

impl TopologyAncestor {
    /// Sparse numeric value of the legacy scale.
    pub fn as_raw(&self) -> u32 {
        match self {
            Self::Internal => 0,
            Self::Single => 10,
            Self::Multiple => 20,
            Self::HostBridge => 30,
            Self::Node => 40,
            Self::System => 50,
        }
    }

    pub(crate) fn from_native(level: TopologyLevel) -> Self {
        match level {
            TopologyLevel::Internal => Self::Internal,
            TopologyLevel::Single => Self::Single,
            TopologyLevel::Multiple => Self::Multiple,
            TopologyLevel::HostBridge => Self::HostBridge,
            TopologyLevel::Node => Self::Node,
            TopologyLevel::System => Self::System,
        }
    }

    pub(crate) fn to_native(self) -> TopologyLevel {
        match self {
            Self::Internal => TopologyLevel::Internal,
            Self::Single => TopologyLevel::Single,
            Self::Multiple => TopologyLevel::Multiple,
            Self::HostBridge => TopologyLevel::HostBridge,
            Self::Node => TopologyLevel::Node,
            Self::System => TopologyLevel::System,
        }
    }

    /// Widest legacy level not above `raw`: a query for an arbitrary
    /// numeric level rounds down to the level it still contains.
    pub fn floor_from_raw(raw: u32) -> Self {
        if raw >= 50 {
            Self::System
        } else if raw >= 40 {
            Self::Node
        } else if raw >= 30 {
            Self::HostBridge
        } else if raw >= 20 {
            Self::Multiple
        } else if raw >= 10 {
            Self::Single
        } else {
            Self::Internal
        }
    }
}

/// Compute mode reported for every device.
pub const COMPUTE_MODE_UNSET: u32 = 5;
/// Driver model reported for every device.
pub const DRIVER_MODEL_NONE: u32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ancestor_scale_is_order_isomorphic_to_native() {
        let pairs = [
            (TopologyLevel::Internal, 0),
            (TopologyLevel::Single, 10),
            (TopologyLevel::Multiple, 20),
            (TopologyLevel::HostBridge, 30),
            (TopologyLevel::Node, 40),
            (TopologyLevel::System, 50),
        ];
        for (native, raw) in pairs {
            let ancestor = TopologyAncestor::from_native(native);
            assert_eq!(ancestor.as_raw(), raw);
            assert_eq!(ancestor.to_native(), native);
        }
    }

    #[test]
    fn arbitrary_levels_round_down() {
        assert_eq!(TopologyAncestor::floor_from_raw(0), TopologyAncestor::Internal);
        assert_eq!(TopologyAncestor::floor_from_raw(9), TopologyAncestor::Internal);
        assert_eq!(TopologyAncestor::floor_from_raw(10), TopologyAncestor::Single);
        assert_eq!(TopologyAncestor::floor_from_raw(35), TopologyAncestor::HostBridge);
        assert_eq!(TopologyAncestor::floor_from_raw(999), TopologyAncestor::System);
    }

    #[test]
    fn p2p_caps_index_decodes_with_unknown_tail() {
        assert_eq!(P2pCapsIndex::from_raw(2), P2pCapsIndex::NvLink);
        assert_eq!(P2pCapsIndex::from_raw(4), P2pCapsIndex::Prop);
        assert_eq!(P2pCapsIndex::from_raw(17), P2pCapsIndex::Unknown);
    }
}

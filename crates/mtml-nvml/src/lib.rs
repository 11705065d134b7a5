//! # mtml-nvml
//!
//! A compatibility facade that answers the classic NVML-shaped
//! management questions using the MTML bindings underneath.
//!
//! Tooling written against the old surface asks one flat question per
//! call; the native library splits the same information across
//! library, device, memory, GPU and VPU scopes and speaks different
//! enum vocabularies. This crate owns that translation:
//!
//! - enum domain mapping (clock domains, P2P capabilities and statuses,
//!   the sparse topology-ancestor scale),
//! - multi-call composition (memory info, utilization rates, clocks
//!   open the right sub-handle, query it and free it),
//! - interconnect-link connectivity emulated from topology, per-port
//!   MtLink scans and layout counts, degrading on every native error.
//!
//! Errors share [`mtml::MtmlError`]; the legacy surface never grew a
//! taxonomy of its own.

mod enums;
mod p2p;
mod shim;

pub use enums::{
    COMPUTE_MODE_UNSET, ClockType, DRIVER_MODEL_NONE, P2pCapsIndex, P2pStatus,
    TemperatureSensor, TopologyAncestor,
};
pub use mtml::{Brand, Device, MtmlError as NvmlError, Result};
pub use shim::*;

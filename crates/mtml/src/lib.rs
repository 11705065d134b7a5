//! # mtml
//!
//! Safe bindings for the MTML GPU management library.
//!
//! The native library is `dlopen`ed on first use and kept loaded for
//! the life of the process. Callers start a session with [`init`], walk
//! devices through [`device_count`] and [`device_by_index`], open
//! per-concern handles ([`Memory`], [`Gpu`], [`Vpu`]) for detailed
//! queries, and end the session with [`shutdown`].
//!
//! # Architecture
//!
//! ```text
//!          init/shutdown        resolve(name)
//! caller ----------------> lifecycle ----------> symbol cache
//!    |                         |                     |
//!    |  Device/Memory/Gpu/...  v                     v
//!    +----------------> typed call surface ----> libmtml.so
//! ```
//!
//! Every native status code becomes an [`MtmlError`]; every wrapper
//! returns [`Result`]. Handles are plain `Copy` values with no drop
//! glue, mirroring the native free-by-hand contract.

mod device;
mod error;
mod gpu;
mod handles;
mod library;
mod lifecycle;
mod memory;
mod mpc;
mod system;
mod types;
mod virt;
mod vpu;

#[cfg(feature = "stub-driver")]
pub mod stub;

pub use error::{MtmlError, Result, error_string};
pub use handles::{Device, Gpu, Memory, System, VirtDevice, Vpu};
pub use library::{
    device_by_index, device_by_pci_sbdf, device_by_uuid, device_count, free_device, free_system,
    init_system, library_version, log_get_configuration, log_set_configuration,
    set_mpc_configuration_in_batch,
};
pub use lifecycle::{init, refcount, shutdown};
pub use types::{Brand, GpuEngine, LinkState, P2pCap, P2pStatus, TopologyLevel};

#[cfg(feature = "stub-driver")]
pub use lifecycle::native_load_count;

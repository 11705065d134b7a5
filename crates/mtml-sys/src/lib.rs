//! # mtml-sys
//!
//! Raw FFI surface for the MTML GPU management library (`libmtml.so`).
//!
//! This crate mirrors the native C ABI and nothing else: buffer-size
//! constants, numeric error/enum codes, opaque handle pointer types,
//! `#[repr(C)]` structs with their reserved trailing fields, and one
//! function-pointer type alias per native entry point. Loading the
//! library, resolving symbols, and turning status codes into errors all
//! live one layer up in the `mtml` crate.
//!
//! # Architecture
//!
//! ```text
//! caller -> mtml (safe surface) -> mtml-sys fn pointers -> libmtml.so
//! ```
//!
//! Every entry point returns a numeric status ([`MtmlReturn`], 0 =
//! success) and writes results through output pointers. Fixed-size
//! string buffers are NUL-padded; each has a documented maximum byte
//! length below.

use std::ffi::c_uint;

mod fns;
mod handles;
mod structs;

pub use fns::*;
pub use handles::*;
pub use structs::*;

/// Native status code. 0 is success; everything else maps to an error.
pub type MtmlReturn = c_uint;

// String buffer sizes (bytes, including the NUL terminator).
pub const MTML_LIBRARY_VERSION_BUFFER_SIZE: usize = 32;
pub const MTML_DRIVER_VERSION_BUFFER_SIZE: usize = 80;
pub const MTML_DEVICE_NAME_BUFFER_SIZE: usize = 32;
pub const MTML_DEVICE_UUID_BUFFER_SIZE: usize = 48;
pub const MTML_DEVICE_MTBIOS_VERSION_BUFFER_SIZE: usize = 64;
pub const MTML_DEVICE_VBIOS_VERSION_BUFFER_SIZE: usize =
    MTML_DEVICE_MTBIOS_VERSION_BUFFER_SIZE;
pub const MTML_DEVICE_PATH_BUFFER_SIZE: usize = 64;
pub const MTML_DEVICE_PCI_SBDF_BUFFER_SIZE: usize = 32;
pub const MTML_DEVICE_PCI_BUS_ID_BUFFER_SIZE: usize = 32;
pub const MTML_DEVICE_SLOT_NAME_BUFFER_SIZE: usize = 32;
pub const MTML_DEVICE_SERIAL_NUMBER_BUFFER_SIZE: usize = 64;
pub const MTML_MEMORY_VENDOR_BUFFER_SIZE: usize = 64;
pub const MTML_SYSTEM_DRIVER_VERSION_BUFFER_SIZE: usize = 80;
pub const MTML_VIRT_TYPE_ID_BUFFER_SIZE: usize = 16;
pub const MTML_VIRT_TYPE_CLASS_BUFFER_SIZE: usize = 32;
pub const MTML_VIRT_TYPE_NAME_BUFFER_SIZE: usize = 32;
pub const MTML_VIRT_TYPE_API_BUFFER_SIZE: usize = 16;
pub const MTML_LOG_FILE_PATH_BUFFER_SIZE: usize = 200;
pub const MTML_MPC_PROFILE_NAME_BUFFER_SIZE: usize = 32;
pub const MTML_MPC_CONF_NAME_BUFFER_SIZE: usize = 32;
pub const MTML_MPC_CONF_MAX_PROF_NUM: usize = 16;

// Status codes returned by the native library.
pub const MTML_SUCCESS: MtmlReturn = 0;
pub const MTML_ERROR_DRIVER_NOT_LOADED: MtmlReturn = 1;
pub const MTML_ERROR_DRIVER_FAILURE: MtmlReturn = 2;
pub const MTML_ERROR_INVALID_ARGUMENT: MtmlReturn = 3;
pub const MTML_ERROR_NOT_SUPPORTED: MtmlReturn = 4;
pub const MTML_ERROR_NO_PERMISSION: MtmlReturn = 5;
pub const MTML_ERROR_INSUFFICIENT_SIZE: MtmlReturn = 6;
pub const MTML_ERROR_NOT_FOUND: MtmlReturn = 7;
pub const MTML_ERROR_INSUFFICIENT_MEMORY: MtmlReturn = 8;
pub const MTML_ERROR_DRIVER_TOO_OLD: MtmlReturn = 9;
pub const MTML_ERROR_DRIVER_TOO_NEW: MtmlReturn = 10;
pub const MTML_ERROR_TIMEOUT: MtmlReturn = 11;
pub const MTML_ERROR_RESOURCE_IS_BUSY: MtmlReturn = 12;
pub const MTML_ERROR_UNKNOWN: MtmlReturn = 999;

// Codes synthesized by the binding layer, never returned by the native
// library itself. Values picked outside the native range.
pub const MTML_ERROR_UNINITIALIZED: MtmlReturn = 666;
pub const MTML_ERROR_FUNCTION_NOT_FOUND: MtmlReturn = 667;
pub const MTML_ERROR_GPU_IS_LOST: MtmlReturn = 669;
pub const MTML_ERROR_LIBRARY_NOT_FOUND: MtmlReturn = 670;

// MtmlBrandType
pub const MTML_BRAND_MTT: c_uint = 0;
pub const MTML_BRAND_UNKNOWN: c_uint = 1;
pub const MTML_BRAND_COUNT: c_uint = 2;

// MtmlMemoryType
pub const MTML_MEM_TYPE_LPDDR4: c_uint = 0;
pub const MTML_MEM_TYPE_GDDR6: c_uint = 1;

// MtmlCodecType
pub const MTML_CODEC_TYPE_AVC: c_uint = 0;
pub const MTML_CODEC_TYPE_VC1: c_uint = 1;
pub const MTML_CODEC_TYPE_MPEG2: c_uint = 2;
pub const MTML_CODEC_TYPE_MPEG4: c_uint = 3;
pub const MTML_CODEC_TYPE_H263: c_uint = 4;
pub const MTML_CODEC_TYPE_DIV3: c_uint = 5;
pub const MTML_CODEC_TYPE_RV: c_uint = 6;
pub const MTML_CODEC_TYPE_AVS: c_uint = 7;
pub const MTML_CODEC_TYPE_RSVD1: c_uint = 8;
pub const MTML_CODEC_TYPE_THO: c_uint = 9;
pub const MTML_CODEC_TYPE_VP3: c_uint = 10;
pub const MTML_CODEC_TYPE_VP8: c_uint = 11;
pub const MTML_CODEC_TYPE_HEVC: c_uint = 12;
pub const MTML_CODEC_TYPE_VP9: c_uint = 13;
pub const MTML_CODEC_TYPE_AVS2: c_uint = 14;
pub const MTML_CODEC_TYPE_RSVD2: c_uint = 15;
pub const MTML_CODEC_TYPE_AV1: c_uint = 16;
pub const MTML_CODEC_TYPE_COUNT: c_uint = 17;

// MtmlCodecSessionState
pub const MTML_CODEC_SESSION_STATE_IDLE: c_uint = 0;
pub const MTML_CODEC_SESSION_STATE_ACTIVE: c_uint = 1;
pub const MTML_CODEC_SESSION_STATE_COUNT: c_uint = 2;

// MtmlVirtCapability
pub const MTML_DEVICE_NOT_SUPPORT_VIRTUALIZATION: c_uint = 0;
pub const MTML_DEVICE_SUPPORT_VIRTUALIZATION: c_uint = 1;

// MtmlVirtRole
pub const MTML_VIRT_ROLE_NONE: c_uint = 0;
pub const MTML_VIRT_ROLE_HOST_VIRTDEVICE: c_uint = 1;
pub const MTML_VIRT_ROLE_GUEST_VIRTDEVICE: c_uint = 2;
pub const MTML_VIRT_ROLE_COUNT: c_uint = 3;

// MtmlDeviceTopologyLevel — small contiguous integers, closest first.
pub const MTML_TOPOLOGY_INTERNAL: c_uint = 0;
pub const MTML_TOPOLOGY_SINGLE: c_uint = 1;
pub const MTML_TOPOLOGY_MULTIPLE: c_uint = 2;
pub const MTML_TOPOLOGY_HOSTBRIDGE: c_uint = 3;
pub const MTML_TOPOLOGY_NODE: c_uint = 4;
pub const MTML_TOPOLOGY_SYSTEM: c_uint = 5;

// MtmlLogLevel
pub const MTML_LOG_LEVEL_OFF: c_uint = 0;
pub const MTML_LOG_LEVEL_FATAL: c_uint = 1;
pub const MTML_LOG_LEVEL_ERROR: c_uint = 2;
pub const MTML_LOG_LEVEL_WARNING: c_uint = 3;
pub const MTML_LOG_LEVEL_INFO: c_uint = 4;

// MtmlMpcMode / MtmlMpcCapability / MtmlMpcType
pub const MTML_DEVICE_MPC_DISABLE: c_uint = 0;
pub const MTML_DEVICE_MPC_ENABLE: c_uint = 1;
pub const MTML_DEVICE_NOT_SUPPORT_MPC: c_uint = 0;
pub const MTML_DEVICE_SUPPORT_MPC: c_uint = 1;
pub const MTML_MPC_TYPE_NONE: c_uint = 0;
pub const MTML_MPC_TYPE_PARENT: c_uint = 1;
pub const MTML_MPC_TYPE_INSTANCE: c_uint = 2;

// MtmlDeviceP2PStatus
pub const MTML_P2P_STATUS_OK: c_uint = 0;
pub const MTML_P2P_STATUS_CHIPSET_NOT_SUPPORTED: c_uint = 1;
pub const MTML_P2P_STATUS_GPU_NOT_SUPPORTED: c_uint = 2;
pub const MTML_P2P_STATUS_UNKNOWN: c_uint = 3;

// MtmlDeviceP2PCaps
pub const MTML_P2P_CAPS_READ: c_uint = 0;
pub const MTML_P2P_CAPS_WRITE: c_uint = 1;

// MtmlGpuEngine
pub const MTML_GPU_ENGINE_GEOMETRY: c_uint = 0;
pub const MTML_GPU_ENGINE_2D: c_uint = 1;
pub const MTML_GPU_ENGINE_3D: c_uint = 2;
pub const MTML_GPU_ENGINE_COMPUTE: c_uint = 3;
pub const MTML_GPU_ENGINE_MAX: c_uint = 4;

// ECC
pub const MTML_MEMORY_ECC_DISABLE: c_uint = 0;
pub const MTML_MEMORY_ECC_ENABLE: c_uint = 1;
pub const MTML_VOLATILE_ECC: c_uint = 0;
pub const MTML_AGGREGATE_ECC: c_uint = 1;
pub const MTML_ECC_COUNTER_TYPE_COUNT: c_uint = 2;
pub const MTML_MEMORY_ERROR_TYPE_CORRECTED: c_uint = 0;
pub const MTML_MEMORY_ERROR_TYPE_UNCORRECTED: c_uint = 1;
pub const MTML_MEMORY_ERROR_TYPE_COUNT: c_uint = 2;
pub const MTML_MEMORY_LOCATION_DRAM: c_uint = 0x1;

// Page retirement
pub const MTML_PAGE_RETIREMENT_CAUSE_MULTIPLE_SINGLE_BIT_ECC_ERRORS: c_uint = 0;
pub const MTML_PAGE_RETIREMENT_CAUSE_DOUBLE_BIT_ECC_ERROR: c_uint = 1;
pub const MTML_PAGE_RETIREMENT_CAUSE_MAX: c_uint = 2;
pub const MTML_RETIRED_PAGES_PENDING_STATE_FALSE: c_uint = 0;
pub const MTML_RETIRED_PAGES_PENDING_STATE_TRUE: c_uint = 1;

// MtmlDispIntfType
pub const MTML_DISP_INTF_TYPE_DP: c_uint = 0;
pub const MTML_DISP_INTF_TYPE_EDP: c_uint = 1;
pub const MTML_DISP_INTF_TYPE_VGA: c_uint = 2;
pub const MTML_DISP_INTF_TYPE_HDMI: c_uint = 3;
pub const MTML_DISP_INTF_TYPE_LVDS: c_uint = 4;
pub const MTML_DISP_INTF_TYPE_MAX: c_uint = 5;

// MtmlMtLinkState
pub const MTML_MTLINK_STATE_DOWN: c_uint = 0;
pub const MTML_MTLINK_STATE_UP: c_uint = 1;
pub const MTML_MTLINK_STATE_DOWNGRADE: c_uint = 2;

// MtmlMtLinkCap / MtmlMtLinkCapStatus
pub const MTML_MTLINK_CAP_P2P_ACCESS: c_uint = 0;
pub const MTML_MTLINK_CAP_P2P_ATOMICS: c_uint = 1;
pub const MTML_MTLINK_CAP_COUNT: c_uint = 2;
pub const MTML_MTLINK_CAP_STATUS_NOT_SUPPORTED: c_uint = 0;
pub const MTML_MTLINK_CAP_STATUS_OK: c_uint = 1;

//! Error taxonomy for native MTML calls.
//!
//! Every non-zero return code maps onto exactly one variant of
//! [`MtmlError`], so callers can match on outcomes instead of comparing
//! integers. Codes the driver defines but this crate does not name land
//! in [`MtmlError::Unknown`] with the raw code preserved.

use std::collections::HashMap;
use std::ffi::CStr;

use mtml_sys as sys;
use parking_lot::Mutex;

use crate::lifecycle;

pub type Result<T> = std::result::Result<T, MtmlError>;

/// One variant per native return code.
///
/// Equality is code identity: two values compare equal exactly when they
/// carry the same native code, which is what retry and fallback logic
/// keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MtmlError {
    #[error("Driver Not Loaded")]
    DriverNotLoaded,
    #[error("Driver Failure")]
    DriverFailure,
    #[error("Invalid Argument")]
    InvalidArgument,
    #[error("Not Supported")]
    NotSupported,
    #[error("No Permission")]
    NoPermission,
    #[error("Insufficient Size")]
    InsufficientSize,
    #[error("Not Found")]
    NotFound,
    #[error("Insufficient Memory")]
    InsufficientMemory,
    #[error("Driver Too Old")]
    DriverTooOld,
    #[error("Driver Too New")]
    DriverTooNew,
    #[error("Timeout")]
    Timeout,
    #[error("Resource Is Busy")]
    ResourceIsBusy,
    #[error("Uninitialized")]
    Uninitialized,
    #[error("Function Not Found")]
    FunctionNotFound,
    #[error("Gpu Is Lost")]
    GpuIsLost,
    #[error("Library Not Found")]
    LibraryNotFound,
    #[error("Unknown Error")]
    Unknown(u32),
}

impl MtmlError {
    /// Maps a non-zero native return code to its variant.
    pub fn from_code(code: sys::MtmlReturn) -> Self {
        match code {
            sys::MTML_ERROR_DRIVER_NOT_LOADED => Self::DriverNotLoaded,
            sys::MTML_ERROR_DRIVER_FAILURE => Self::DriverFailure,
            sys::MTML_ERROR_INVALID_ARGUMENT => Self::InvalidArgument,
            sys::MTML_ERROR_NOT_SUPPORTED => Self::NotSupported,
            sys::MTML_ERROR_NO_PERMISSION => Self::NoPermission,
            sys::MTML_ERROR_INSUFFICIENT_SIZE => Self::InsufficientSize,
            sys::MTML_ERROR_NOT_FOUND => Self::NotFound,
            sys::MTML_ERROR_INSUFFICIENT_MEMORY => Self::InsufficientMemory,
            sys::MTML_ERROR_DRIVER_TOO_OLD => Self::DriverTooOld,
            sys::MTML_ERROR_DRIVER_TOO_NEW => Self::DriverTooNew,
            sys::MTML_ERROR_TIMEOUT => Self::Timeout,
            sys::MTML_ERROR_RESOURCE_IS_BUSY => Self::ResourceIsBusy,
            sys::MTML_ERROR_UNINITIALIZED => Self::Uninitialized,
            sys::MTML_ERROR_FUNCTION_NOT_FOUND => Self::FunctionNotFound,
            sys::MTML_ERROR_GPU_IS_LOST => Self::GpuIsLost,
            sys::MTML_ERROR_LIBRARY_NOT_FOUND => Self::LibraryNotFound,
            other => Self::Unknown(other),
        }
    }

    /// The native return code this variant stands for.
    pub fn code(&self) -> sys::MtmlReturn {
        match self {
            Self::DriverNotLoaded => sys::MTML_ERROR_DRIVER_NOT_LOADED,
            Self::DriverFailure => sys::MTML_ERROR_DRIVER_FAILURE,
            Self::InvalidArgument => sys::MTML_ERROR_INVALID_ARGUMENT,
            Self::NotSupported => sys::MTML_ERROR_NOT_SUPPORTED,
            Self::NoPermission => sys::MTML_ERROR_NO_PERMISSION,
            Self::InsufficientSize => sys::MTML_ERROR_INSUFFICIENT_SIZE,
            Self::NotFound => sys::MTML_ERROR_NOT_FOUND,
            Self::InsufficientMemory => sys::MTML_ERROR_INSUFFICIENT_MEMORY,
            Self::DriverTooOld => sys::MTML_ERROR_DRIVER_TOO_OLD,
            Self::DriverTooNew => sys::MTML_ERROR_DRIVER_TOO_NEW,
            Self::Timeout => sys::MTML_ERROR_TIMEOUT,
            Self::ResourceIsBusy => sys::MTML_ERROR_RESOURCE_IS_BUSY,
            Self::Uninitialized => sys::MTML_ERROR_UNINITIALIZED,
            Self::FunctionNotFound => sys::MTML_ERROR_FUNCTION_NOT_FOUND,
            Self::GpuIsLost => sys::MTML_ERROR_GPU_IS_LOST,
            Self::LibraryNotFound => sys::MTML_ERROR_LIBRARY_NOT_FOUND,
            Self::Unknown(code) => *code,
        }
    }
}

/// Converts a native return code to `Ok(())` or the matching error.
pub(crate) fn check(ret: sys::MtmlReturn) -> Result<()> {
    if ret == sys::MTML_SUCCESS {
        Ok(())
    } else {
        Err(MtmlError::from_code(ret))
    }
}

static NATIVE_MESSAGES: Mutex<Option<HashMap<u32, String>>> = Mutex::new(None);

/// Human-readable message for an arbitrary native return code.
///
/// Declared codes use the static message table, the declared unknown
/// code included. For undeclared codes the native `mtmlErrorString`
/// entry point is consulted once and the answer cached; when the driver
/// cannot name the code either, a generic message carrying the code is
/// returned.
pub fn error_string(code: sys::MtmlReturn) -> String {
    match MtmlError::from_code(code) {
        MtmlError::Unknown(code) if code != sys::MTML_ERROR_UNKNOWN => native_error_string(code),
        known => known.to_string(),
    }
}

fn native_error_string(code: u32) -> String {
    let mut cache = NATIVE_MESSAGES.lock();
    let cache = cache.get_or_insert_with(HashMap::new);
    if let Some(msg) = cache.get(&code) {
        return msg.clone();
    }
    let msg = query_native_message(code)
        .unwrap_or_else(|| format!("MTML error with code {code}"));
    cache.insert(code, msg.clone());
    msg
}

fn query_native_message(code: u32) -> Option<String> {
    let f: sys::FnMtmlErrorString = lifecycle::resolve("mtmlErrorString").ok()?;
    let ptr = unsafe { f(code) };
    if ptr.is_null() {
        return None;
    }
    let msg = unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned();
    if msg.is_empty() { None } else { Some(msg) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trips_for_every_variant() {
        for code in [1u32, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 666, 667, 669, 670] {
            let err = MtmlError::from_code(code);
            assert!(!matches!(err, MtmlError::Unknown(_)), "code {code} should be named");
            assert_eq!(err.code(), code);
        }
        assert_eq!(MtmlError::from_code(999), MtmlError::Unknown(999));
        assert_eq!(MtmlError::Unknown(4242).code(), 4242);
    }

    #[test]
    fn equality_is_code_identity() {
        assert_eq!(MtmlError::from_code(4), MtmlError::NotSupported);
        assert_ne!(MtmlError::NotSupported, MtmlError::NotFound);
        assert_eq!(MtmlError::Unknown(1000), MtmlError::Unknown(1000));
        assert_ne!(MtmlError::Unknown(1000), MtmlError::Unknown(1001));
    }

    #[test]
    fn check_passes_success_through() {
        assert!(check(sys::MTML_SUCCESS).is_ok());
        assert_eq!(check(6), Err(MtmlError::InsufficientSize));
    }

    #[test]
    fn messages_match_the_driver_wording() {
        assert_eq!(MtmlError::Uninitialized.to_string(), "Uninitialized");
        assert_eq!(MtmlError::FunctionNotFound.to_string(), "Function Not Found");
        assert_eq!(MtmlError::GpuIsLost.to_string(), "Gpu Is Lost");
        assert_eq!(MtmlError::LibraryNotFound.to_string(), "Library Not Found");
    }

    #[test]
    fn declared_unknown_code_uses_the_static_message() {
        // Never consults the driver: the declared code 999 belongs to
        // the static table like every other declared code.
        assert_eq!(error_string(sys::MTML_ERROR_UNKNOWN), "Unknown Error");
    }
}

//! Process-wide driver lifecycle and symbol resolution.
//!
//! The native library is loaded at most once per process. A single mutex
//! guards the check-and-load step and the session bookkeeping, so
//! concurrent first callers cannot race two `dlopen`s. Native entry
//! points are never invoked while that mutex is held.
//!
//! Resolved symbol addresses go into an append-only cache behind a
//! read-write lock. The hit path takes only the shared read lock; a miss
//! re-takes the lifecycle mutex, asks the loaded image once, and
//! publishes the address for every later caller.

use std::collections::HashMap;
use std::mem;
use std::ptr;
use std::sync::LazyLock;

use mtml_sys as sys;
use parking_lot::{Mutex, RwLock};

use crate::error::{MtmlError, Result, check};

/// The loaded driver image symbols are pulled from.
enum NativeImage {
    #[cfg_attr(feature = "stub-driver", allow(dead_code))]
    Loaded(libloading::Library),
    #[cfg(feature = "stub-driver")]
    Stub,
}

impl NativeImage {
    fn open() -> Result<Self> {
        #[cfg(feature = "stub-driver")]
        {
            Ok(Self::Stub)
        }
        #[cfg(not(feature = "stub-driver"))]
        {
            let lib = unsafe { libloading::Library::new("libmtml.so") }
                .map_err(|_| MtmlError::LibraryNotFound)?;
            Ok(Self::Loaded(lib))
        }
    }

    fn lookup(&self, name: &str) -> Option<usize> {
        match self {
            Self::Loaded(lib) => {
                let sym = unsafe { lib.get::<unsafe extern "C" fn()>(name.as_bytes()) }.ok()?;
                Some(*sym as usize)
            }
            #[cfg(feature = "stub-driver")]
            Self::Stub => crate::stub::lookup(name),
        }
    }
}

struct LibState {
    image: Option<NativeImage>,
    handle: sys::MtmlLibrary,
    refcount: u32,
}

// The raw handle is a process-wide token, not thread-affine state.
unsafe impl Send for LibState {}

static STATE: Mutex<LibState> = Mutex::new(LibState {
    image: None,
    handle: ptr::null_mut(),
    refcount: 0,
});

static SYMBOLS: LazyLock<RwLock<HashMap<&'static str, usize>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

#[cfg(feature = "stub-driver")]
static LOAD_ATTEMPTS: std::sync::atomic::AtomicU32 = std::sync::atomic::AtomicU32::new(0);

/// Loads the native image if this process has not loaded it yet.
fn ensure_loaded() -> Result<()> {
    let mut state = STATE.lock();
    if state.image.is_some() {
        return Ok(());
    }
    #[cfg(feature = "stub-driver")]
    LOAD_ATTEMPTS.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
    state.image = Some(NativeImage::open()?);
    SYMBOLS.write().clear();
    Ok(())
}

/// Resolves a native entry point to a typed function pointer.
///
/// `F` must be one of the `Fn*` aliases from `mtml-sys`; the address is
/// reinterpreted as that type, so a mismatched alias is undefined
/// behavior at call time.
pub(crate) fn resolve<F: Copy>(name: &'static str) -> Result<F> {
    debug_assert_eq!(mem::size_of::<F>(), mem::size_of::<usize>());
    if let Some(&addr) = SYMBOLS.read().get(name) {
        return Ok(unsafe { mem::transmute_copy(&addr) });
    }
    let state = STATE.lock();
    let image = state.image.as_ref().ok_or(MtmlError::Uninitialized)?;
    let addr = image.lookup(name).ok_or(MtmlError::FunctionNotFound)?;
    SYMBOLS.write().insert(name, addr);
    Ok(unsafe { mem::transmute_copy(&addr) })
}

/// Starts (or joins) the process-wide driver session.
///
/// The first call loads the native library and every call invokes the
/// native init, which hands back the session token later calls pass in.
/// Each successful `init` must be balanced by one [`shutdown`].
pub fn init() -> Result<()> {
    ensure_loaded()?;
    let f: sys::FnMtmlLibraryInit = resolve("mtmlLibraryInit")?;
    let mut handle: sys::MtmlLibrary = ptr::null_mut();
    check(unsafe { f(&mut handle) })?;
    let mut state = STATE.lock();
    state.handle = handle;
    state.refcount += 1;
    Ok(())
}

/// Ends one joined session. A call without a live session is a no-op.
pub fn shutdown() -> Result<()> {
    let handle = {
        let state = STATE.lock();
        if state.handle.is_null() {
            return Ok(());
        }
        state.handle
    };
    let f: sys::FnMtmlLibraryShutDown = resolve("mtmlLibraryShutDown")?;
    check(unsafe { f(handle) })?;
    let mut state = STATE.lock();
    state.handle = ptr::null_mut();
    state.refcount = state.refcount.saturating_sub(1);
    Ok(())
}

/// Number of `init` calls not yet balanced by a `shutdown`.
pub fn refcount() -> u32 {
    STATE.lock().refcount
}

/// The live session token, for calls that take the library handle.
pub(crate) fn library_handle() -> Result<sys::MtmlLibrary> {
    let state = STATE.lock();
    if state.handle.is_null() {
        return Err(MtmlError::Uninitialized);
    }
    Ok(state.handle)
}

/// How many times the native image was opened in this process.
#[cfg(feature = "stub-driver")]
pub fn native_load_count() -> u32 {
    LOAD_ATTEMPTS.load(std::sync::atomic::Ordering::Relaxed)
}

//! Session lifecycle behavior against the in-process stub driver.

use std::sync::{Barrier, Mutex};
use std::thread;

// Lifecycle state is process-wide, so tests in this binary take turns.
static LOCK: Mutex<()> = Mutex::new(());

#[test]
fn init_and_shutdown_balance_the_refcount() {
    let _guard = LOCK.lock().unwrap();
    assert_eq!(mtml::refcount(), 0);
    mtml::init().unwrap();
    mtml::init().unwrap();
    assert_eq!(mtml::refcount(), 2);
    mtml::shutdown().unwrap();
    mtml::shutdown().unwrap();
    assert_eq!(mtml::refcount(), 0);
}

#[test]
fn shutdown_without_init_is_a_no_op() {
    let _guard = LOCK.lock().unwrap();
    assert_eq!(mtml::shutdown(), Ok(()));
    assert_eq!(mtml::refcount(), 0);
}

#[test]
fn concurrent_first_callers_load_the_image_once() {
    let _guard = LOCK.lock().unwrap();
    let threads = 8;
    let barrier = Barrier::new(threads);
    thread::scope(|scope| {
        for _ in 0..threads {
            scope.spawn(|| {
                barrier.wait();
                mtml::init().unwrap();
            });
        }
    });
    assert_eq!(mtml::refcount(), threads as u32);
    assert_eq!(mtml::native_load_count(), 1);
    for _ in 0..threads {
        mtml::shutdown().unwrap();
    }
    assert_eq!(mtml::refcount(), 0);
}

#[test]
fn sessions_can_restart_after_full_shutdown() {
    let _guard = LOCK.lock().unwrap();
    mtml::init().unwrap();
    mtml::shutdown().unwrap();
    mtml::init().unwrap();
    assert_eq!(mtml::library_version().unwrap(), mtml::stub::STUB_LIBRARY_VERSION);
    mtml::shutdown().unwrap();
    // The image stayed resident across the restart.
    assert_eq!(mtml::native_load_count(), 1);
}

//! Behavior of calls made before any session exists. Nothing in this
//! binary ever calls `mtml::init`, so the image is never loaded here.

use mtml::MtmlError;

#[test]
fn calls_without_a_session_report_uninitialized() {
    assert_eq!(mtml::device_count(), Err(MtmlError::Uninitialized));
    assert_eq!(mtml::library_version().unwrap_err(), MtmlError::Uninitialized);
    assert_eq!(mtml::init_system().unwrap_err(), MtmlError::Uninitialized);
}

#[test]
fn known_codes_have_static_messages_without_a_driver() {
    assert_eq!(mtml::error_string(4), "Not Supported");
    assert_eq!(mtml::error_string(666), "Uninitialized");
    // No loaded image to ask, so unknown codes fall back to a generic
    // message carrying the code.
    assert_eq!(mtml::error_string(12345), "MTML error with code 12345");
}

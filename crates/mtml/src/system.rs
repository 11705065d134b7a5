//! System-scope calls.

use std::ffi::{c_char, c_uint};

use mtml_sys as sys;

use crate::error::{Result, check};
use crate::handles::System;
use crate::lifecycle::resolve;

impl System {
    /// Version string of the kernel driver.
    pub fn driver_version(&self) -> Result<String> {
        let f: sys::FnMtmlSystemGetDriverVersion = resolve("mtmlSystemGetDriverVersion")?;
        let mut buf = [0 as c_char; sys::MTML_SYSTEM_DRIVER_VERSION_BUFFER_SIZE];
        check(unsafe { f(self.raw, buf.as_mut_ptr(), buf.len() as c_uint) })?;
        Ok(sys::c_buf_to_string(&buf))
    }
}

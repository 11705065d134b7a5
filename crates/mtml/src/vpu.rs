//! VPU-scope calls: codec clocks, utilization and session accounting.

use std::ffi::c_uint;

use mtml_sys as sys;

use crate::device::u32_getter;
use crate::error::{Result, check};
use crate::handles::Vpu;
use crate::lifecycle::resolve;

impl Vpu {
    u32_getter!(
        /// Current VPU clock in MHz.
        clock,
        sys::FnMtmlVpuGetClock,
        "mtmlVpuGetClock"
    );

    u32_getter!(
        /// Maximum VPU clock in MHz.
        max_clock,
        sys::FnMtmlVpuGetMaxClock,
        "mtmlVpuGetMaxClock"
    );

    /// Encoder and decoder utilization percentages.
    pub fn utilization(&self) -> Result<sys::MtmlCodecUtil> {
        let f: sys::FnMtmlVpuGetUtilization = resolve("mtmlVpuGetUtilization")?;
        let mut util = sys::MtmlCodecUtil::default();
        check(unsafe { f(self.raw, &mut util) })?;
        Ok(util)
    }

    /// Number of encode and decode sessions the VPU can host.
    pub fn codec_capacity(&self) -> Result<(u32, u32)> {
        let f: sys::FnMtmlVpuGetCodecCapacity = resolve("mtmlVpuGetCodecCapacity")?;
        let mut enc: c_uint = 0;
        let mut dec: c_uint = 0;
        check(unsafe { f(self.raw, &mut enc, &mut dec) })?;
        Ok((enc, dec))
    }

    /// States of up to `length` encoder sessions.
    pub fn encoder_session_states(&self, length: u32) -> Result<Vec<sys::MtmlCodecSessionState>> {
        if length == 0 {
            return Ok(Vec::new());
        }
        let f: sys::FnMtmlVpuGetEncoderSessionStates = resolve("mtmlVpuGetEncoderSessionStates")?;
        let mut states = vec![sys::MtmlCodecSessionState::default(); length as usize];
        check(unsafe { f(self.raw, states.as_mut_ptr(), length) })?;
        Ok(states)
    }

    /// Resolution, codec and frame rate of one encoder session.
    pub fn encoder_session_metrics(&self, session_id: u32) -> Result<sys::MtmlCodecSessionMetrics> {
        let f: sys::FnMtmlVpuGetEncoderSessionMetrics = resolve("mtmlVpuGetEncoderSessionMetrics")?;
        let mut metrics = sys::MtmlCodecSessionMetrics::default();
        check(unsafe { f(self.raw, session_id, &mut metrics) })?;
        Ok(metrics)
    }

    /// States of up to `length` decoder sessions.
    pub fn decoder_session_states(&self, length: u32) -> Result<Vec<sys::MtmlCodecSessionState>> {
        if length == 0 {
            return Ok(Vec::new());
        }
        let f: sys::FnMtmlVpuGetDecoderSessionStates = resolve("mtmlVpuGetDecoderSessionStates")?;
        let mut states = vec![sys::MtmlCodecSessionState::default(); length as usize];
        check(unsafe { f(self.raw, states.as_mut_ptr(), length) })?;
        Ok(states)
    }

    /// Resolution, codec and frame rate of one decoder session.
    pub fn decoder_session_metrics(&self, session_id: u32) -> Result<sys::MtmlCodecSessionMetrics> {
        let f: sys::FnMtmlVpuGetDecoderSessionMetrics = resolve("mtmlVpuGetDecoderSessionMetrics")?;
        let mut metrics = sys::MtmlCodecSessionMetrics::default();
        check(unsafe { f(self.raw, session_id, &mut metrics) })?;
        Ok(metrics)
    }

    /// Releases this VPU handle.
    pub fn free(self) -> Result<()> {
        let f: sys::FnMtmlDeviceFreeVpu = resolve("mtmlDeviceFreeVpu")?;
        check(unsafe { f(self.raw) })
    }
}

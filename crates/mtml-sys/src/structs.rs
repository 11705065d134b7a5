//! Fixed-layout native structs.
//!
//! Field order, widths, and the reserved trailing `rsvd` arrays must
//! match the native header exactly; the library writes these structs
//! through output pointers. All are plain-old-data and start zeroed.
//!
//! `Display` is generated per struct from its field list (skipping
//! reserved fields) instead of runtime introspection; C-string fields
//! are decoded lossily at this boundary only.

use std::ffi::{c_char, c_uint, c_ulonglong};
use std::fmt;

use crate::{
    MTML_DEVICE_PCI_BUS_ID_BUFFER_SIZE, MTML_DEVICE_PCI_SBDF_BUFFER_SIZE,
    MTML_DEVICE_SLOT_NAME_BUFFER_SIZE, MTML_LOG_FILE_PATH_BUFFER_SIZE,
    MTML_MPC_CONF_MAX_PROF_NUM, MTML_MPC_CONF_NAME_BUFFER_SIZE,
    MTML_MPC_PROFILE_NAME_BUFFER_SIZE, MTML_VIRT_TYPE_API_BUFFER_SIZE,
    MTML_VIRT_TYPE_CLASS_BUFFER_SIZE, MTML_VIRT_TYPE_ID_BUFFER_SIZE,
    MTML_VIRT_TYPE_NAME_BUFFER_SIZE,
};

/// Decode a NUL-padded fixed-size C string buffer.
pub fn c_buf_to_string(buf: &[c_char]) -> String {
    let bytes: Vec<u8> = buf
        .iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Field rendering for the generated `Display` impls.
trait FieldFmt {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl FieldFmt for c_uint {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl FieldFmt for c_ulonglong {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl FieldFmt for f32 {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl<const N: usize> FieldFmt for [c_char; N] {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", c_buf_to_string(self))
    }
}

impl<const N: usize> FieldFmt for [c_uint; N] {
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        write!(f, "[")?;
        for v in self {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

// POD structs come back from the library via out-pointers; a zeroed
// value is the valid "empty" state for all of them.
macro_rules! native_struct {
    ($ty:ident { $($field:ident),+ $(,)? }) => {
        impl Default for $ty {
            fn default() -> Self {
                // SAFETY: repr(C) struct of scalars and scalar arrays;
                // all-zero is a valid bit pattern.
                unsafe { std::mem::zeroed() }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($ty), "("))?;
                let mut first = true;
                $(
                    if !first {
                        write!(f, ", ")?;
                    }
                    first = false;
                    write!(f, concat!(stringify!($field), ": "))?;
                    FieldFmt::fmt_field(&self.$field, f)?;
                )+
                write!(f, ")")
            }
        }
    };
}

/// Specification of a device's MtLink interconnect.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MtmlMtLinkSpec {
    /// Combined major/minor/patch link version.
    pub version: c_uint,
    /// Per-link bandwidth in MB/s.
    pub band_width: c_uint,
    /// Number of links the device exposes.
    pub link_num: c_uint,
    pub rsvd: [c_uint; 4],
}
native_struct!(MtmlMtLinkSpec { version, band_width, link_num });

/// PCI identity and link geometry of a device.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MtmlPciInfo {
    pub sbdf: [c_char; MTML_DEVICE_PCI_SBDF_BUFFER_SIZE],
    pub segment: c_uint,
    pub bus: c_uint,
    pub device: c_uint,
    pub pci_device_id: c_uint,
    pub bus_width: c_uint,
    pub pci_max_speed: f32,
    pub pci_cur_speed: f32,
    pub pci_max_width: c_uint,
    pub pci_cur_width: c_uint,
    pub pci_max_gen: c_uint,
    pub pci_cur_gen: c_uint,
    pub bus_id: [c_char; MTML_DEVICE_PCI_BUS_ID_BUFFER_SIZE],
    pub rsvd: [c_uint; 6],
}
native_struct!(MtmlPciInfo {
    sbdf,
    segment,
    bus,
    device,
    pci_device_id,
    bus_width,
    pci_max_speed,
    pci_cur_speed,
    pci_max_width,
    pci_cur_width,
    pci_max_gen,
    pci_cur_gen,
    bus_id,
});

/// Virtualization/MPC capability flags of a device.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MtmlDeviceProperty {
    pub virt_capability: c_uint,
    pub virt_role: c_uint,
    pub mpc_capability: c_uint,
    pub mpc_type: c_uint,
    pub rsvd: [c_uint; 12],
}
native_struct!(MtmlDeviceProperty {
    virt_capability,
    virt_role,
    mpc_capability,
    mpc_type,
});

/// Physical PCIe slot description.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MtmlPciSlotInfo {
    pub slot_type: c_uint,
    pub slot_name: [c_char; MTML_DEVICE_SLOT_NAME_BUFFER_SIZE],
    pub rsvd: [c_uint; 4],
}
native_struct!(MtmlPciSlotInfo { slot_type, slot_name });

/// Display interface capabilities.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MtmlDispIntfSpec {
    pub intf_type: c_uint,
    pub max_res_width: c_uint,
    pub max_res_height: c_uint,
    pub rsvd: [c_uint; 4],
}
native_struct!(MtmlDispIntfSpec {
    intf_type,
    max_res_width,
    max_res_height,
});

/// A supported virtual-device type.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MtmlVirtType {
    pub id: [c_char; MTML_VIRT_TYPE_ID_BUFFER_SIZE],
    pub device_class: [c_char; MTML_VIRT_TYPE_CLASS_BUFFER_SIZE],
    pub name: [c_char; MTML_VIRT_TYPE_NAME_BUFFER_SIZE],
    pub max_instances: c_uint,
    pub mem_size: c_ulonglong,
    pub gpu_cores: c_uint,
    pub max_res_width: c_uint,
    pub max_res_height: c_uint,
    pub api_type: [c_char; MTML_VIRT_TYPE_API_BUFFER_SIZE],
    pub encoder_num: c_uint,
    pub decoder_num: c_uint,
    pub rsvd: [c_uint; 4],
}
native_struct!(MtmlVirtType {
    id,
    device_class,
    name,
    max_instances,
    mem_size,
    gpu_cores,
    max_res_width,
    max_res_height,
    api_type,
    encoder_num,
    decoder_num,
});

/// Encoder/decoder utilization percentages.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MtmlCodecUtil {
    pub encode_util: c_uint,
    pub decode_util: c_uint,
    pub rsvd: [c_uint; 4],
}
native_struct!(MtmlCodecUtil { encode_util, decode_util });

/// One codec session and its activity state.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MtmlCodecSessionState {
    pub session_id: c_uint,
    pub state: c_uint,
    pub rsvd: [c_uint; 4],
}
native_struct!(MtmlCodecSessionState { session_id, state });

/// Stream metrics for one codec session.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MtmlCodecSessionMetrics {
    pub width: c_uint,
    pub height: c_uint,
    pub codec_type: c_uint,
    pub fps: c_uint,
    pub rsvd: [c_uint; 4],
}
native_struct!(MtmlCodecSessionMetrics {
    width,
    height,
    codec_type,
    fps,
});

/// Native log sink configuration.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MtmlLogConfiguration {
    pub file_path: [c_char; MTML_LOG_FILE_PATH_BUFFER_SIZE],
    pub max_size: c_uint,
    pub log_level: c_uint,
    pub rsvd: [c_uint; 4],
}
native_struct!(MtmlLogConfiguration {
    file_path,
    max_size,
    log_level,
});

/// One MPC (multi-process compute) partition profile.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MtmlMpcProfile {
    pub profile_id: c_uint,
    pub name: [c_char; MTML_MPC_PROFILE_NAME_BUFFER_SIZE],
    pub mem_size: c_ulonglong,
    pub gpu_cores: c_uint,
    pub rsvd: [c_uint; 4],
}
native_struct!(MtmlMpcProfile {
    profile_id,
    name,
    mem_size,
    gpu_cores,
});

/// A named set of MPC profiles.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MtmlMpcConfiguration {
    pub id: c_uint,
    pub name: [c_char; MTML_MPC_CONF_NAME_BUFFER_SIZE],
    pub profile_num: c_uint,
    pub profile_ids: [c_uint; MTML_MPC_CONF_MAX_PROF_NUM],
    pub rsvd: [c_uint; 4],
}
native_struct!(MtmlMpcConfiguration {
    id,
    name,
    profile_num,
    profile_ids,
});

/// Local/remote link-id pairing of one MtLink connection.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MtmlMtLinkLayout {
    pub local_link_id: c_uint,
    pub remote_link_id: c_uint,
    pub rsvd: [c_uint; 4],
}
native_struct!(MtmlMtLinkLayout {
    local_link_id,
    remote_link_id,
});

/// Retired-page totals by ECC error class.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MtmlPageRetirementCount {
    pub single_bit_ecc: c_uint,
    pub double_bit_ecc: c_uint,
    pub rsvd: [c_uint; 4],
}
native_struct!(MtmlPageRetirementCount {
    single_bit_ecc,
    double_bit_ecc,
});

/// One retired page record.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MtmlPageRetirement {
    pub address: c_ulonglong,
    pub timestamp: c_ulonglong,
    pub rsvd: [c_uint; 4],
}
native_struct!(MtmlPageRetirement { address, timestamp });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_buf_decodes_to_nul() {
        let mut buf = [0 as c_char; 8];
        for (i, b) in b"mtt".iter().enumerate() {
            buf[i] = *b as c_char;
        }
        assert_eq!(c_buf_to_string(&buf), "mtt");
        assert_eq!(c_buf_to_string(&[0 as c_char; 4]), "");
    }

    #[test]
    fn test_display_skips_reserved_fields() {
        let spec = MtmlMtLinkSpec {
            version: 0x0001_0200,
            link_num: 8,
            ..Default::default()
        };
        let s = spec.to_string();
        assert!(s.starts_with("MtmlMtLinkSpec("));
        assert!(s.contains("link_num: 8"));
        assert!(!s.contains("rsvd"));
    }

    #[test]
    fn test_struct_layout_sizes() {
        // Field order and reserved widths must add up to the header's
        // layout; these sizes are the quickest tripwire for drift.
        assert_eq!(std::mem::size_of::<MtmlMtLinkSpec>(), 28);
        assert_eq!(std::mem::size_of::<MtmlMtLinkLayout>(), 24);
        assert_eq!(std::mem::size_of::<MtmlDeviceProperty>(), 64);
        assert_eq!(std::mem::size_of::<MtmlCodecUtil>(), 24);
        assert_eq!(std::mem::size_of::<MtmlPageRetirementCount>(), 24);
        assert_eq!(
            std::mem::size_of::<MtmlPciInfo>(),
            32 + 4 * 4 + 4 + 4 * 2 + 4 * 4 + 32 + 4 * 6
        );
    }
}

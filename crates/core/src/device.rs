//! Device model: supported hardware and USB discovery.

use crate::error::Result;
use crate::{pids, FANTECH_VID};
use tracing::{debug, info};

/// Supported Fantech mouse models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseModel {
    X9Thor,
}

impl MouseModel {
    /// Look up model from USB product ID.
    pub fn from_pid(pid: u16) -> Option<Self> {
        match pid {
            pids::X9_THOR => Some(Self::X9Thor),
            _ => None,
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::X9Thor => "Fantech X9 Thor",
        }
    }

    /// USB Product ID.
    pub fn pid(&self) -> u16 {
        match self {
            Self::X9Thor => pids::X9_THOR,
        }
    }
}

/// Information about a discovered Fantech device.
///
/// Bus number and address pin down the physical port so the device can be
/// re-located and opened later.
#[derive(Debug, Clone)]
pub struct DeviceInfo {
    pub model: MouseModel,
    pub vid: u16,
    pub pid: u16,
    pub bus_number: u8,
    pub address: u8,
}

/// Discover all connected Fantech mice.
///
/// Enumerates USB devices and returns info for any recognized models.
pub fn discover_devices() -> Result<Vec<DeviceInfo>> {
    debug!("Starting USB device enumeration");
    let devices = rusb::devices()?;

    let mut found = Vec::new();
    for device in devices.iter() {
        let Ok(descriptor) = device.device_descriptor() else {
            continue;
        };
        if descriptor.vendor_id() != FANTECH_VID {
            continue;
        }

        if let Some(model) = MouseModel::from_pid(descriptor.product_id()) {
            info!(
                model = model.name(),
                vid = format_args!("0x{:04X}", descriptor.vendor_id()),
                pid = format_args!("0x{:04X}", descriptor.product_id()),
                bus = device.bus_number(),
                address = device.address(),
                "Found Fantech device"
            );
            found.push(DeviceInfo {
                model,
                vid: descriptor.vendor_id(),
                pid: descriptor.product_id(),
                bus_number: device.bus_number(),
                address: device.address(),
            });
        }
    }

    debug!(count = found.len(), "Device enumeration complete");
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_model_from_known_pid() {
        assert_eq!(MouseModel::from_pid(0x0FC0), Some(MouseModel::X9Thor));
    }

    #[test]
    fn mouse_model_from_unknown_pid() {
        assert_eq!(MouseModel::from_pid(0x1234), None);
        assert_eq!(MouseModel::from_pid(0x0000), None);
    }

    #[test]
    fn mouse_model_roundtrip() {
        assert_eq!(MouseModel::from_pid(MouseModel::X9Thor.pid()), Some(MouseModel::X9Thor));
    }

    #[test]
    fn mouse_model_name_non_empty() {
        assert!(!MouseModel::X9Thor.name().is_empty());
    }
}

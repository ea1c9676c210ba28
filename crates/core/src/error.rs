//! Error types for x9-led-core.

use thiserror::Error;

/// Core library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// No matching device found during enumeration.
    #[error("device not found (vendor 0x{vid:04X}, product 0x{pid:04X})")]
    DeviceNotFound { vid: u16, pid: u16 },

    /// The OS denied raw access to the device node.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Kernel driver detach or interface claim failed.
    #[error("failed to claim interface {interface}: {source}")]
    Claim {
        interface: u8,
        #[source]
        source: rusb::Error,
    },

    /// The control transfer was rejected, timed out, or otherwise failed.
    #[error("control transfer failed: {0}")]
    Transfer(#[source] rusb::Error),

    /// Interface release or kernel driver reattach failed. Logged as a
    /// warning; never propagated as the run's outcome.
    #[error("failed to release interface {interface}: {source}")]
    Release {
        interface: u8,
        #[source]
        source: rusb::Error,
    },

    /// Any other USB I/O failure.
    #[error("USB error: {0}")]
    Usb(#[from] rusb::Error),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, Error>;

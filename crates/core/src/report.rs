//! The LED-off command, expressed as a class-specific HID SET_REPORT.
//!
//! The payload bytes are opaque firmware commands captured from the vendor
//! tool and must reach the device verbatim; there is no documented protocol
//! behind them.

/// USB control transfer parameters (bmRequestType, bRequest, wValue, wIndex).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlRequest {
    /// bmRequestType byte.
    pub request_type: u8,
    /// bRequest byte.
    pub request: u8,
    /// wValue field.
    pub value: u16,
    /// wIndex field.
    pub index: u16,
}

/// HID SET_REPORT (host-to-device, class, interface) carrying the LED
/// report to interface 1.
pub const SET_REPORT: ControlRequest = ControlRequest {
    request_type: 0x21,
    request: 0x09,
    value: 0x0307,
    index: 0x0001,
};

/// Interface the LED report targets. Numerically the same as
/// `SET_REPORT.index`; this is the interface that must be claimed before
/// the transfer.
pub const LED_INTERFACE: u8 = 0x01;

/// Report payload that switches the LED off.
pub const LED_OFF: [u8; 8] = [0x07, 0x13, 0x7F, 0x87, 0x00, 0x00, 0x00, 0x00];

//! The device session: check → claim → transfer → release.
//!
//! `DeviceSession` owns the whole protocol for one run. The interface is
//! claimed at most once, and once claimed it is released exactly once on
//! every exit path; the `Drop` impl covers paths that never reach the
//! explicit release.

use crate::error::{Error, Result};
use crate::report;
use crate::transport::UsbTransport;
use tracing::{debug, info, warn};

/// Whether the session currently holds the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unclaimed,
    Claimed,
}

/// A single acquisition of the mouse's LED interface.
pub struct DeviceSession<'a> {
    transport: &'a mut dyn UsbTransport,
    interface: u8,
    state: SessionState,
    detached_driver: bool,
}

impl<'a> DeviceSession<'a> {
    /// Create a session over an opened device.
    pub fn new(transport: &'a mut dyn UsbTransport) -> Self {
        Self {
            transport,
            interface: report::LED_INTERFACE,
            state: SessionState::Unclaimed,
            detached_driver: false,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Probe the interface to confirm the process may talk to the device
    /// at all.
    ///
    /// The driver-active answer itself is irrelevant; the probe exists to
    /// surface EACCES before anything is detached or claimed.
    pub fn check_access(&mut self) -> Result<()> {
        match self.transport.kernel_driver_active(self.interface) {
            Ok(_) => Ok(()),
            Err(rusb::Error::Access) => Err(Error::PermissionDenied(
                "raw access to the device was denied".to_string(),
            )),
            Err(e) => Err(Error::Usb(e)),
        }
    }

    /// Detach the kernel driver if one is bound, then claim the interface.
    ///
    /// On any failure the session stays `Unclaimed` and no release will run.
    pub fn claim(&mut self) -> Result<()> {
        let interface = self.interface;

        match self.transport.kernel_driver_active(interface) {
            Ok(true) => {
                self.transport
                    .detach_kernel_driver(interface)
                    .map_err(|e| Error::Claim {
                        interface,
                        source: e,
                    })?;
                self.detached_driver = true;
                debug!(interface, "Detached kernel driver");
            }
            Ok(false) => {}
            Err(e) => {
                return Err(Error::Claim {
                    interface,
                    source: e,
                })
            }
        }

        self.transport
            .claim_interface(interface)
            .map_err(|e| Error::Claim {
                interface,
                source: e,
            })?;
        self.state = SessionState::Claimed;
        debug!(interface, "Claimed interface");
        Ok(())
    }

    /// Send the fixed LED-off report to the claimed interface.
    pub fn send_led_off(&mut self) -> Result<()> {
        let req = report::SET_REPORT;
        self.transport
            .write_control(
                req.request_type,
                req.request,
                req.value,
                req.index,
                &report::LED_OFF,
            )
            .map_err(Error::Transfer)?;
        debug!("LED-off report sent");
        Ok(())
    }

    /// Release the interface and reattach the kernel driver detached during
    /// `claim`, if any.
    ///
    /// A no-op unless the session is `Claimed`. Failures are logged as
    /// warnings and never change the run's outcome.
    pub fn release(&mut self) {
        if self.state != SessionState::Claimed {
            return;
        }
        self.state = SessionState::Unclaimed;

        let interface = self.interface;
        if let Err(e) = self.transport.release_interface(interface) {
            warn!(
                "{}",
                Error::Release {
                    interface,
                    source: e,
                }
            );
        }

        if self.detached_driver {
            self.detached_driver = false;
            if let Err(e) = self.transport.attach_kernel_driver(interface) {
                warn!(interface, error = %e, "Failed to reattach kernel driver");
            }
        }
    }

    /// Run the full protocol: access check, claim, LED-off transfer,
    /// release.
    ///
    /// The release always runs once the interface is claimed, whether or
    /// not the transfer succeeded; the returned result reflects the
    /// transfer outcome alone.
    pub fn turn_off_led(&mut self) -> Result<()> {
        self.check_access()?;
        self.claim()?;

        info!("Sending LED-off report");
        let outcome = self.send_led_off();
        self.release();
        outcome
    }
}

impl Drop for DeviceSession<'_> {
    fn drop(&mut self) {
        self.release();
    }
}

//! USB transport abstraction for device communication.
//!
//! Provides a trait-based transport layer so that the real libusb-backed
//! device handle and mock devices share the same interface.

/// Abstraction over the USB host-controller primitives the session needs.
///
/// Errors are surfaced as raw [`rusb::Error`] values; classification into
/// the crate's error taxonomy happens in the session layer.
pub trait UsbTransport {
    /// Whether a kernel driver is currently bound to the interface.
    fn kernel_driver_active(&mut self, interface: u8) -> Result<bool, rusb::Error>;

    /// Unbind the kernel driver from the interface.
    fn detach_kernel_driver(&mut self, interface: u8) -> Result<(), rusb::Error>;

    /// Rebind the kernel driver to the interface.
    fn attach_kernel_driver(&mut self, interface: u8) -> Result<(), rusb::Error>;

    /// Take exclusive ownership of the interface.
    fn claim_interface(&mut self, interface: u8) -> Result<(), rusb::Error>;

    /// Give up exclusive ownership of the interface.
    fn release_interface(&mut self, interface: u8) -> Result<(), rusb::Error>;

    /// Issue a host-to-device control transfer, returning the number of
    /// bytes written.
    fn write_control(
        &mut self,
        request_type: u8,
        request: u8,
        value: u16,
        index: u16,
        data: &[u8],
    ) -> Result<usize, rusb::Error>;
}

/// A mock USB transport for testing.
///
/// Records every call for later inspection and injects failures per
/// operation.
#[cfg(test)]
pub mod mock {
    use super::UsbTransport;

    /// A captured control transfer.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ControlWrite {
        pub request_type: u8,
        pub request: u8,
        pub value: u16,
        pub index: u16,
        pub data: Vec<u8>,
    }

    /// Mock transport that counts calls and returns preconfigured failures.
    #[derive(Default)]
    pub struct MockTransport {
        /// Whether the simulated kernel driver is currently bound.
        pub driver_active: bool,

        pub probe_error: Option<rusb::Error>,
        pub detach_error: Option<rusb::Error>,
        pub attach_error: Option<rusb::Error>,
        pub claim_error: Option<rusb::Error>,
        pub release_error: Option<rusb::Error>,
        pub write_error: Option<rusb::Error>,

        pub detach_calls: usize,
        pub attach_calls: usize,
        pub claim_calls: usize,
        pub release_calls: usize,

        /// Every control transfer that reached the device.
        pub writes: Vec<ControlWrite>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// A device whose interface is currently bound to a kernel driver,
        /// the common state for an attached mouse.
        pub fn with_kernel_driver() -> Self {
            Self {
                driver_active: true,
                ..Self::default()
            }
        }
    }

    impl UsbTransport for MockTransport {
        fn kernel_driver_active(&mut self, _interface: u8) -> Result<bool, rusb::Error> {
            match self.probe_error {
                Some(e) => Err(e),
                None => Ok(self.driver_active),
            }
        }

        fn detach_kernel_driver(&mut self, _interface: u8) -> Result<(), rusb::Error> {
            self.detach_calls += 1;
            if let Some(e) = self.detach_error {
                return Err(e);
            }
            self.driver_active = false;
            Ok(())
        }

        fn attach_kernel_driver(&mut self, _interface: u8) -> Result<(), rusb::Error> {
            self.attach_calls += 1;
            if let Some(e) = self.attach_error {
                return Err(e);
            }
            self.driver_active = true;
            Ok(())
        }

        fn claim_interface(&mut self, _interface: u8) -> Result<(), rusb::Error> {
            self.claim_calls += 1;
            match self.claim_error {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }

        fn release_interface(&mut self, _interface: u8) -> Result<(), rusb::Error> {
            self.release_calls += 1;
            match self.release_error {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }

        fn write_control(
            &mut self,
            request_type: u8,
            request: u8,
            value: u16,
            index: u16,
            data: &[u8],
        ) -> Result<usize, rusb::Error> {
            if let Some(e) = self.write_error {
                return Err(e);
            }
            self.writes.push(ControlWrite {
                request_type,
                request,
                value,
                index,
                data: data.to_vec(),
            });
            Ok(data.len())
        }
    }
}

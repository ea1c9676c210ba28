//! x9-led-off: turn off the Fantech X9 Thor mouse LED.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use rusb::{DeviceHandle, GlobalContext};
use x9_led_core::device::{self, DeviceInfo};
use x9_led_core::error::Error;
use x9_led_core::session::DeviceSession;
use x9_led_core::transport::UsbTransport;
use x9_led_core::{pids, FANTECH_VID};

/// libusb transport over an opened device handle.
struct RusbTransport {
    handle: DeviceHandle<GlobalContext>,
    timeout: Duration,
}

impl RusbTransport {
    /// Re-locate a discovered device by bus/address and open it.
    fn open(info: &DeviceInfo) -> Result<Self, Error> {
        let devices = rusb::devices()?;
        for device in devices.iter() {
            if device.bus_number() != info.bus_number || device.address() != info.address {
                continue;
            }

            let handle = device.open().map_err(|e| match e {
                rusb::Error::Access => Error::PermissionDenied(
                    "opening the device node was denied".to_string(),
                ),
                other => Error::Usb(other),
            })?;

            return Ok(Self {
                handle,
                timeout: Duration::from_secs(1),
            });
        }

        Err(Error::DeviceNotFound {
            vid: info.vid,
            pid: info.pid,
        })
    }
}

impl UsbTransport for RusbTransport {
    fn kernel_driver_active(&mut self, interface: u8) -> Result<bool, rusb::Error> {
        self.handle.kernel_driver_active(interface)
    }

    fn detach_kernel_driver(&mut self, interface: u8) -> Result<(), rusb::Error> {
        self.handle.detach_kernel_driver(interface)
    }

    fn attach_kernel_driver(&mut self, interface: u8) -> Result<(), rusb::Error> {
        self.handle.attach_kernel_driver(interface)
    }

    fn claim_interface(&mut self, interface: u8) -> Result<(), rusb::Error> {
        self.handle.claim_interface(interface)
    }

    fn release_interface(&mut self, interface: u8) -> Result<(), rusb::Error> {
        self.handle.release_interface(interface)
    }

    fn write_control(
        &mut self,
        request_type: u8,
        request: u8,
        value: u16,
        index: u16,
        data: &[u8],
    ) -> Result<usize, rusb::Error> {
        self.handle
            .write_control(request_type, request, value, index, data, self.timeout)
    }
}

#[derive(Parser)]
#[command(
    name = "x9-led-off",
    version,
    about = "Turn off the Fantech X9 Thor mouse LED"
)]
struct Cli {}

fn run() -> Result<(), Error> {
    println!("Looking for Fantech X9 Thor mouse...");
    let devices = device::discover_devices()?;
    let Some(target) = devices.first() else {
        return Err(Error::DeviceNotFound {
            vid: FANTECH_VID,
            pid: pids::X9_THOR,
        });
    };
    println!("Found {}.", target.model.name());

    let mut transport = RusbTransport::open(target)?;
    let mut session = DeviceSession::new(&mut transport);

    println!("Turning off LED...");
    session.turn_off_led()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let _cli = Cli::parse();

    match run() {
        Ok(()) => {
            println!("LED turned off successfully.");
            Ok(())
        }
        Err(err) => {
            match &err {
                Error::DeviceNotFound { .. } => {
                    eprintln!("Device not found. Please check:");
                    eprintln!("  - the mouse is plugged in");
                    eprintln!("  - the USB connection is working");
                }
                Error::PermissionDenied(_) => {
                    eprintln!("Insufficient permissions to access the device.");
                    eprintln!("Try running with sudo, or add a udev rule:");
                    eprintln!("  https://wiki.archlinux.org/index.php/udev");
                }
                _ => {}
            }
            Err(err.into())
        }
    }
}

//! SH1106 OLED Display Driver
//!
//! Driver for 128x64 SH1106-based OLED displays via I2C.
//!
//! The controller's RAM is split into 8-row pages. A refresh selects each
//! page in turn, resets the column pointer and streams one byte per column.
//! Page auto-wrap is not used because it is unreliable across controller
//! revisions. Every bus block is at most 32 payload bytes, so a 128-byte
//! page goes out as four data blocks.

use horologe_hal::{I2cBus, Mode, MAX_BLOCK_LEN};

use crate::command::{self, cmd};
use crate::config::{DisplayConfig, MAX_WIDTH};
use crate::error::Error;
use crate::packing::{pack_page, PixelSource};

/// Panel power state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Power {
    /// Panel lit
    On,
    /// Panel dark, RAM still writable
    Off,
}

/// SH1106 OLED driver
///
/// Only obtainable through a successful initialization, so every method
/// can assume the controller has been configured. Pass `&mut bus` to keep
/// ownership of a bus shared with other devices.
pub struct Sh1106<B> {
    bus: B,
    config: DisplayConfig,
    power: Power,
}

impl<B: I2cBus> Sh1106<B> {
    /// Initialize a 128x64 panel at `address`
    pub fn new(bus: B, address: u8) -> Result<Self, Error<B::Error>> {
        Self::with_config(bus, DisplayConfig::new().with_address(address))
    }

    /// Initialize a panel described by `config`
    ///
    /// Sends the power-up sequence as a single command block. On failure
    /// the bus is dropped along with the driver.
    pub fn with_config(bus: B, config: DisplayConfig) -> Result<Self, Error<B::Error>> {
        config.validate()?;

        let mut display = Self {
            bus,
            config,
            power: Power::Off,
        };

        let multiplex = (config.height - 1) as u8;
        display.command(&command::init_sequence(config.contrast, multiplex))?;
        display.power = Power::On;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "SH1106 at {=u8:#x} initialized ({=u16}x{=u16})",
            config.address,
            config.width,
            config.height
        );

        Ok(display)
    }

    /// Device address
    pub fn address(&self) -> u8 {
        self.config.address
    }

    /// Width in pixels
    pub fn width(&self) -> u16 {
        self.config.width
    }

    /// Height in pixels
    pub fn height(&self) -> u16 {
        self.config.height
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> u8 {
        self.config.pages()
    }

    /// Current panel power state
    pub fn power(&self) -> Power {
        self.power
    }

    /// Send a command block
    ///
    /// Commands longer than one block are rejected, never split: the
    /// controller would see the second block as a fresh command stream.
    pub fn command(&mut self, bytes: &[u8]) -> Result<(), Error<B::Error>> {
        if bytes.len() > MAX_BLOCK_LEN {
            return Err(Error::PayloadTooLarge { len: bytes.len() });
        }
        self.bus
            .write_block(self.config.address, Mode::Command, bytes)
            .map_err(Error::Transport)
    }

    /// Stream display RAM data in blocks of at most 32 bytes
    fn data(&mut self, bytes: &[u8]) -> Result<(), B::Error> {
        for chunk in bytes.chunks(MAX_BLOCK_LEN) {
            self.bus.write_block(self.config.address, Mode::Data, chunk)?;
        }
        Ok(())
    }

    /// Select a page, reset its column pointer and write its bytes
    fn write_page(&mut self, page: u8, row: &[u8]) -> Result<(), B::Error> {
        self.bus.write_block(
            self.config.address,
            Mode::Command,
            &command::page_select(page),
        )?;
        self.data(row)
    }

    /// Copy the whole of `frame` into display RAM
    ///
    /// `frame` is borrowed for the entire call, so every page comes from
    /// the same snapshot. Works with the panel powered off; the new frame
    /// shows once it is switched back on.
    ///
    /// A bus failure before page 0 is complete yields [`Error::Transport`],
    /// even if part of page 0 already went out. Once one or more whole
    /// pages have been sent the failure is [`Error::PartialFrame`]. Nothing is rolled back; the next successful
    /// refresh overwrites the mixed frame.
    pub fn refresh<S: PixelSource + ?Sized>(&mut self, frame: &S) -> Result<(), Error<B::Error>> {
        let actual = (frame.width(), frame.height());
        let expected = (self.config.width, self.config.height);
        if actual != expected {
            return Err(Error::DimensionMismatch { expected, actual });
        }

        let pages = self.pages();
        self.command(&command::address_window(self.config.width, pages))?;

        let mut row = [0u8; MAX_WIDTH as usize];
        let row = &mut row[..self.config.width as usize];

        for page in 0..pages {
            pack_page(frame, page, row);
            self.write_page(page, row).map_err(|source| {
                if page == 0 {
                    Error::Transport(source)
                } else {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("SH1106 refresh failed after {=u8} pages", page);

                    Error::PartialFrame {
                        pages_written: page,
                        source,
                    }
                }
            })?;
        }

        Ok(())
    }

    /// Turn the panel on or off without touching display RAM
    pub fn set_power(&mut self, on: bool) -> Result<(), Error<B::Error>> {
        let (opcode, power) = if on {
            (cmd::DISPLAY_ON, Power::On)
        } else {
            (cmd::DISPLAY_OFF, Power::Off)
        };
        self.command(&[opcode])?;
        self.power = power;

        #[cfg(feature = "defmt")]
        defmt::debug!("SH1106 power {}", power);

        Ok(())
    }

    /// Set display contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Error<B::Error>> {
        self.command(&[cmd::SET_CONTRAST, contrast])
    }

    /// Invert display colors
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), Error<B::Error>> {
        if inverted {
            self.command(&[cmd::SET_INVERSE])
        } else {
            self.command(&[cmd::SET_NORMAL])
        }
    }

    /// Give the bus back without touching the panel
    pub fn release(self) -> B {
        self.bus
    }

    /// Switch the panel off and give the bus back
    pub fn shutdown(mut self) -> Result<B, Error<B::Error>> {
        self.set_power(false)?;
        Ok(self.bus)
    }
}

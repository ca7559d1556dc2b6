//! I2C bus abstractions
//!
//! The display controller accepts addressed block writes. Every block
//! starts with a control byte telling the controller whether the rest
//! of the block is a command stream or display RAM data, and a block
//! carries at most [`MAX_BLOCK_LEN`] payload bytes.

use embedded_hal::i2c::{Error as _, ErrorKind, I2c, NoAcknowledgeSource};
use heapless::Vec;

/// Maximum payload bytes per block write (not counting the mode byte)
pub const MAX_BLOCK_LEN: usize = 32;

/// Control byte sent ahead of each block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    /// Command stream follows
    Command = 0x00,
    /// Display RAM data follows
    Data = 0x40,
}

impl Mode {
    /// Raw control byte
    pub const fn byte(self) -> u8 {
        self as u8
    }
}

/// I2C bus master
///
/// Provides the single operation the display driver needs. Implementors
/// must send the whole block in one bus transaction and must reject
/// payloads longer than [`MAX_BLOCK_LEN`]; splitting is the caller's job.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write a mode-tagged block to a device
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `mode` - Command or data discriminator
    /// * `data` - Payload, at most [`MAX_BLOCK_LEN`] bytes
    fn write_block(&mut self, address: u8, mode: Mode, data: &[u8]) -> Result<(), Self::Error>;
}

/// A borrowed bus is still a bus, so one physical bus can be lent to a
/// driver while the caller keeps ownership.
impl<B: I2cBus + ?Sized> I2cBus for &mut B {
    type Error = B::Error;

    fn write_block(&mut self, address: u8, mode: Mode, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write_block(address, mode, data)
    }
}

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Device did not acknowledge its address
    AddressNack,
    /// Device did not acknowledge a data byte
    DataNack,
    /// Arbitration lost
    ArbitrationLost,
    /// Bus error (misplaced START/STOP)
    Bus,
    /// Overrun
    Overrun,
    /// Payload longer than [`MAX_BLOCK_LEN`]
    BlockTooLong,
    /// Other error
    Other,
}

impl From<ErrorKind> for BusError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address) => BusError::AddressNack,
            ErrorKind::NoAcknowledge(_) => BusError::DataNack,
            ErrorKind::ArbitrationLoss => BusError::ArbitrationLost,
            ErrorKind::Bus => BusError::Bus,
            ErrorKind::Overrun => BusError::Overrun,
            _ => BusError::Other,
        }
    }
}

impl core::fmt::Display for BusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            BusError::AddressNack => "device did not acknowledge its address",
            BusError::DataNack => "device did not acknowledge data",
            BusError::ArbitrationLost => "bus arbitration lost",
            BusError::Bus => "bus error",
            BusError::Overrun => "bus overrun",
            BusError::BlockTooLong => "block exceeds 32 payload bytes",
            BusError::Other => "bus failure",
        };
        f.write_str(msg)
    }
}

/// [`I2cBus`] over any blocking `embedded-hal` I2C master
///
/// Each block becomes one I2C write: the mode byte followed by the
/// payload, staged in a fixed buffer so no allocation is needed.
pub struct BlockingI2c<T> {
    i2c: T,
}

impl<T> BlockingI2c<T> {
    /// Wrap an I2C master
    pub fn new(i2c: T) -> Self {
        Self { i2c }
    }

    /// Give back the wrapped I2C master
    pub fn release(self) -> T {
        self.i2c
    }
}

impl<T: I2c> I2cBus for BlockingI2c<T> {
    type Error = BusError;

    fn write_block(&mut self, address: u8, mode: Mode, data: &[u8]) -> Result<(), BusError> {
        let mut block: Vec<u8, { MAX_BLOCK_LEN + 1 }> = Vec::new();
        block
            .push(mode.byte())
            .map_err(|_| BusError::BlockTooLong)?;
        block
            .extend_from_slice(data)
            .map_err(|_| BusError::BlockTooLong)?;

        self.i2c
            .write(address, &block)
            .map_err(|e| BusError::from(e.kind()))
    }
}

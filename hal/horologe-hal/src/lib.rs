//! Horologe Hardware Abstraction Layer
//!
//! This crate defines the bus trait the display driver writes through.
//! Chip HALs plug in either by implementing [`I2cBus`] directly or by
//! wrapping an `embedded-hal` I2C master in [`BlockingI2c`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  horologe-display (SH1106 driver)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  horologe-hal (this crate - I2cBus)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  any embedded_hal::i2c::I2c master      │
//! └─────────────────────────────────────────┘
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod i2c;

pub use i2c::{BlockingI2c, BusError, I2cBus, Mode, MAX_BLOCK_LEN};

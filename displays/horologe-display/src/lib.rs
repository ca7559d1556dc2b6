//! SH1106 display driver and drawing surface for Horologe
//!
//! This crate provides:
//! - [`Sh1106`] driver: init sequence, page-addressed refresh, power control
//! - [`PixelBuffer`] 1-bit canvas implementing embedded-graphics `DrawTarget`
//! - [`packing`] pure functions turning canvas pixels into page bytes
//! - [`ClockFace`] renderer for the time/date layout
//!
//! # Data flow
//!
//! ```text
//! ┌──────────────┐  draw   ┌─────────────┐ refresh ┌─────────┐ block ┌─────┐
//! │ ClockFace /  │ ──────▶ │ PixelBuffer │ ──────▶ │ Sh1106  │ ────▶ │ I2C │
//! │ any drawing  │         │ (row-major) │  read   │ (pages) │ ≤32 B │     │
//! └──────────────┘         └─────────────┘         └─────────┘       └─────┘
//! ```
//!
//! The driver never draws; it only reads the buffer when asked to refresh.
//! Nothing here locks. A caller sharing the buffer and driver across
//! threads must hold one lock for the whole of [`Sh1106::refresh`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod buffer;
pub mod canvas;
pub mod clock;
pub mod command;
pub mod config;
pub mod driver;
pub mod error;
pub mod packing;

// Re-export key types
pub use buffer::PixelBuffer;
pub use canvas::Canvas;
pub use clock::{ClockFace, WallTime};
pub use config::{ConfigError, DisplayConfig};
pub use driver::{Power, Sh1106};
pub use error::Error;
pub use packing::PixelSource;

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};
    use horologe_hal::BlockingI2c;

    /// Raw I2C writes as they would appear on the wire
    #[derive(Default)]
    struct WireLog {
        writes: Vec<(u8, Vec<u8>)>,
    }

    impl ErrorType for WireLog {
        type Error = ErrorKind;
    }

    impl I2c for WireLog {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            for op in operations {
                if let Operation::Write(bytes) = op {
                    self.writes.push((address, bytes.to_vec()));
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_clock_frame_over_i2c() {
        let mut frame = PixelBuffer::default();
        let now = WallTime {
            year: 2026,
            month: 10,
            day: 17,
            weekday: 5,
            hour: 14,
            minute: 7,
            second: 30,
        };
        ClockFace::new().render(&mut frame, &now).unwrap();

        let mut display = Sh1106::new(BlockingI2c::new(WireLog::default()), 0x3C).unwrap();
        display.refresh(&frame).unwrap();
        let wire = display.release().release();

        // init + window + 8 pages of (select + 4 data)
        assert_eq!(wire.writes.len(), 2 + 8 * 5);
        assert!(wire.writes.iter().all(|(addr, _)| *addr == 0x3C));
        // Control byte plus at most 32 payload bytes
        assert!(wire.writes.iter().all(|(_, bytes)| bytes.len() <= 33));

        let data: Vec<u8> = wire
            .writes
            .iter()
            .filter(|(_, bytes)| bytes[0] == 0x40)
            .flat_map(|(_, bytes)| bytes[1..].to_vec())
            .collect();
        assert_eq!(data.len(), 1024);

        // Pages 0 and 6..8 lie outside the text rows
        assert!(data[..128].iter().all(|&b| b == 0));
        assert!(data[6 * 128..].iter().all(|&b| b == 0));
        assert!(data[128..6 * 128].iter().any(|&b| b != 0));
    }
}

//! 1-bit pixel buffer
//!
//! A row-major monochrome canvas that embedded-graphics can draw into.
//! The driver reads it through [`PixelSource`] at refresh time and never
//! writes to it.

use core::convert::Infallible;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::Pixel;

use crate::packing::PixelSource;

/// Default panel width in pixels
pub const WIDTH: u16 = 128;

/// Default panel height in pixels
pub const HEIGHT: u16 = 64;

/// Largest grid a buffer can hold, in pixels
pub const CAPACITY: usize = WIDTH as usize * HEIGHT as usize;

const STORAGE_LEN: usize = CAPACITY / 8;

/// Row-major 1-bit canvas
///
/// Pixel (x, y) lives at bit index `y * width + x`, most significant
/// bit first within each storage byte.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u16,
    height: u16,
    bits: [u8; STORAGE_LEN],
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            bits: [0; STORAGE_LEN],
        }
    }
}

impl core::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PixelBuffer {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "PixelBuffer[{=u16}x{=u16}, {=usize} lit]",
            self.width,
            self.height,
            self.lit_count()
        );
    }
}

impl PixelBuffer {
    /// Create a blank buffer
    ///
    /// Returns `None` for an empty grid or one larger than [`CAPACITY`].
    pub fn new(width: u16, height: u16) -> Option<Self> {
        let pixels = width as usize * height as usize;
        if pixels == 0 || pixels > CAPACITY {
            return None;
        }
        Some(Self {
            width,
            height,
            bits: [0; STORAGE_LEN],
        })
    }

    /// Width in pixels
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u16 {
        self.height
    }

    fn locate(&self, x: u16, y: u16) -> Option<(usize, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = y as usize * self.width as usize + x as usize;
        Some((index / 8, 0x80 >> (index % 8)))
    }

    /// Read a pixel; out-of-bounds reads are dark
    pub fn get(&self, x: u16, y: u16) -> bool {
        self.locate(x, y)
            .map(|(byte, mask)| self.bits[byte] & mask != 0)
            .unwrap_or(false)
    }

    /// Write a pixel; out-of-bounds writes are clipped
    pub fn set(&mut self, x: u16, y: u16, on: bool) {
        if let Some((byte, mask)) = self.locate(x, y) {
            if on {
                self.bits[byte] |= mask;
            } else {
                self.bits[byte] &= !mask;
            }
        }
    }

    /// Set every pixel to `on`
    pub fn fill(&mut self, on: bool) {
        self.bits.fill(if on { 0xFF } else { 0x00 });
    }

    /// Clear to background (all dark)
    pub fn clear(&mut self) {
        self.fill(false);
    }

    /// Number of lit pixels
    pub fn lit_count(&self) -> usize {
        let used = self.width as usize * self.height as usize;
        (0..used)
            .filter(|i| self.bits[i / 8] & (0x80 >> (i % 8)) != 0)
            .count()
    }
}

impl PixelSource for PixelBuffer {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn pixel(&self, x: u16, y: u16) -> bool {
        self.get(x, y)
    }
}

impl OriginDimensions for PixelBuffer {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl DrawTarget for PixelBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (u16::try_from(point.x), u16::try_from(point.y)) {
                self.set(x, y, color.is_on());
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.is_on());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::{Line, PrimitiveStyle};

    #[test]
    fn test_default_is_blank_128x64() {
        let buf = PixelBuffer::default();
        assert_eq!((buf.width(), buf.height()), (128, 64));
        assert_eq!(buf.lit_count(), 0);
    }

    #[test]
    fn test_new_rejects_bad_sizes() {
        assert!(PixelBuffer::new(0, 64).is_none());
        assert!(PixelBuffer::new(128, 0).is_none());
        assert!(PixelBuffer::new(128, 72).is_none());
        assert!(PixelBuffer::new(64, 32).is_some());
    }

    #[test]
    fn test_set_and_get() {
        let mut buf = PixelBuffer::default();
        buf.set(3, 9, true);
        assert!(buf.get(3, 9));
        assert!(!buf.get(9, 3));
        buf.set(3, 9, false);
        assert!(!buf.get(3, 9));
    }

    #[test]
    fn test_out_of_bounds_is_clipped() {
        let mut buf = PixelBuffer::default();
        buf.set(128, 0, true);
        buf.set(0, 64, true);
        assert_eq!(buf.lit_count(), 0);
        assert!(!buf.get(500, 500));
    }

    #[test]
    fn test_fill_counts_only_used_area() {
        let mut buf = PixelBuffer::new(10, 8).unwrap();
        buf.fill(true);
        assert_eq!(buf.lit_count(), 80);
        buf.clear();
        assert_eq!(buf.lit_count(), 0);
    }

    #[test]
    fn test_draw_target_clips_negative_points() {
        let mut buf = PixelBuffer::default();
        Line::new(Point::new(-5, 0), Point::new(4, 0))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut buf)
            .unwrap();
        assert_eq!(buf.lit_count(), 5);
        assert!(buf.get(0, 0));
        assert!(buf.get(4, 0));
    }

    #[test]
    fn test_draw_target_clear() {
        let mut buf = PixelBuffer::default();
        DrawTarget::clear(&mut buf, BinaryColor::On).unwrap();
        assert_eq!(buf.lit_count(), CAPACITY);
        assert_eq!(buf.size(), Size::new(128, 64));
    }

    #[cfg(feature = "defmt")]
    #[test]
    fn test_buffer_is_defmt_format() {
        fn assert_format<T: defmt::Format>() {}
        assert_format::<PixelBuffer>();
    }
}

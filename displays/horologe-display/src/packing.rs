//! Pixel-to-page byte packing
//!
//! The SH1106 stores its RAM as pages: 8-pixel-tall strips where one
//! byte is one column of the strip. Bit 0 of that byte is the top row
//! of the strip and bit 7 the bottom row. Getting this backwards mirrors
//! every strip vertically.
//!
//! These functions work on coordinates only, so any [`PixelSource`]
//! can be packed without knowing how it stores its pixels.

/// Rows per page
pub const PAGE_HEIGHT: u16 = 8;

/// Read-only view of a 1-bit image
pub trait PixelSource {
    /// Width in pixels
    fn width(&self) -> u16;

    /// Height in pixels
    fn height(&self) -> u16;

    /// Whether the pixel at (x, y) is lit
    ///
    /// Callers stay within `width() x height()`.
    fn pixel(&self, x: u16, y: u16) -> bool;
}

impl<T: PixelSource + ?Sized> PixelSource for &T {
    fn width(&self) -> u16 {
        (**self).width()
    }

    fn height(&self) -> u16 {
        (**self).height()
    }

    fn pixel(&self, x: u16, y: u16) -> bool {
        (**self).pixel(x, y)
    }
}

/// Compute the RAM byte for one column of one page
///
/// Bit `n` holds the pixel at `(column, page * 8 + n)`.
pub fn page_byte<S: PixelSource + ?Sized>(src: &S, page: u8, column: u16) -> u8 {
    let top = page as u16 * PAGE_HEIGHT;
    (0..PAGE_HEIGHT).fold(0u8, |byte, n| {
        if src.pixel(column, top + n) {
            byte | (1 << n)
        } else {
            byte
        }
    })
}

/// Fill `out` with the bytes of one page, column 0 first
///
/// Packs `min(out.len(), src.width())` columns.
pub fn pack_page<S: PixelSource + ?Sized>(src: &S, page: u8, out: &mut [u8]) {
    for (column, byte) in (0..src.width()).zip(out.iter_mut()) {
        *byte = page_byte(src, page, column);
    }
}

/// Inverse of [`page_byte`]: whether row `row` (0 = top) of a page byte is lit
pub const fn unpack_byte(byte: u8, row: u8) -> bool {
    (byte >> row) & 0x01 != 0
}

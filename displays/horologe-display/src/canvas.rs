//! Drawing surface operations
//!
//! The handful of operations the clock face needs, available on any
//! embedded-graphics target with binary color, [`PixelBuffer`] included.
//!
//! [`PixelBuffer`]: crate::PixelBuffer

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::primitives::{Primitive, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics::Drawable;

/// Monochrome drawing surface
pub trait Canvas: DrawTarget<Color = BinaryColor> + Sized {
    /// Set every pixel to `color`
    fn clear_to(&mut self, color: BinaryColor) -> Result<(), Self::Error> {
        self.clear(color)
    }

    /// Draw text with its top-left corner at (x, y)
    ///
    /// Returns the position just after the last glyph.
    fn draw_text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        style: MonoTextStyle<'_, BinaryColor>,
    ) -> Result<Point, Self::Error> {
        Text::with_baseline(text, Point::new(x, y), style, Baseline::Top).draw(self)
    }

    /// Draw a 1-pixel rectangle outline
    fn draw_rect(&mut self, x: i32, y: i32, width: u32, height: u32) -> Result<(), Self::Error> {
        Rectangle::new(Point::new(x, y), Size::new(width, height))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(self)
    }

    /// Fill a rectangle with `color`
    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: BinaryColor,
    ) -> Result<(), Self::Error> {
        Rectangle::new(Point::new(x, y), Size::new(width, height))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(self)
    }
}

impl<T: DrawTarget<Color = BinaryColor>> Canvas for T {}

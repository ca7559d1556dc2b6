//! Clock face layout
//!
//! Two lines of text: a 12-hour time at (0, 14) and the date at (0, 30).
//! Fonts and styles are chosen once when the face is built and reused for
//! every frame.

use core::fmt::Write;

use embedded_graphics::mono_font::ascii::{FONT_7X13, FONT_9X15_BOLD};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use heapless::String;

use crate::canvas::Canvas;

/// Top-left of the time line
pub const TIME_ORIGIN: (i32, i32) = (0, 14);

/// Top-left of the date line
pub const DATE_ORIGIN: (i32, i32) = (0, 30);

/// Longest formatted line ("Wed, Sep 30 2026")
pub const LINE_LEN: usize = 16;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Broken-down local time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallTime {
    pub year: u16,
    /// 1-12
    pub month: u8,
    /// 1-31
    pub day: u8,
    /// 0 = Monday .. 6 = Sunday
    pub weekday: u8,
    /// 0-23
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl WallTime {
    /// `hh:mm:ss AM`, 12-hour with leading zeros
    pub fn format_time(&self) -> String<LINE_LEN> {
        let mut out = String::new();
        if self.hour > 23 || self.minute > 59 || self.second > 59 {
            let _ = out.push_str("??:??:?? ??");
            return out;
        }

        let meridiem = if self.hour < 12 { "AM" } else { "PM" };
        let hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        let _ = write!(
            out,
            "{:02}:{:02}:{:02} {}",
            hour, self.minute, self.second, meridiem
        );
        out
    }

    /// `Www, Mmm dd yyyy`
    pub fn format_date(&self) -> String<LINE_LEN> {
        let weekday = WEEKDAYS.get(self.weekday as usize).unwrap_or(&"???");
        let month = self
            .month
            .checked_sub(1)
            .and_then(|m| MONTHS.get(m as usize))
            .unwrap_or(&"???");

        let year = self.year % 10000;

        let mut out = String::new();
        if (1..=31).contains(&self.day) {
            let _ = write!(out, "{}, {} {:02} {}", weekday, month, self.day, year);
        } else {
            let _ = write!(out, "{}, {} ?? {}", weekday, month, year);
        }
        out
    }
}

/// Renders a [`WallTime`] onto a canvas
#[derive(Clone, Copy)]
pub struct ClockFace {
    time_style: MonoTextStyle<'static, BinaryColor>,
    date_style: MonoTextStyle<'static, BinaryColor>,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ClockFace {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "ClockFace");
    }
}

impl Default for ClockFace {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockFace {
    /// Bold 9x15 time over a 7x13 date
    pub fn new() -> Self {
        Self::with_fonts(&FONT_9X15_BOLD, &FONT_7X13)
    }

    /// Use custom fonts for the two lines
    pub fn with_fonts(
        time_font: &'static MonoFont<'static>,
        date_font: &'static MonoFont<'static>,
    ) -> Self {
        Self {
            time_style: MonoTextStyle::new(time_font, BinaryColor::On),
            date_style: MonoTextStyle::new(date_font, BinaryColor::On),
        }
    }

    /// Clear the canvas and draw `now`
    pub fn render<C: Canvas>(&self, canvas: &mut C, now: &WallTime) -> Result<(), C::Error> {
        canvas.clear_to(BinaryColor::Off)?;

        let (x, y) = TIME_ORIGIN;
        canvas.draw_text(x, y, &now.format_time(), self.time_style)?;

        let (x, y) = DATE_ORIGIN;
        canvas.draw_text(x, y, &now.format_date(), self.date_style)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PixelBuffer;

    fn at(hour: u8, minute: u8, second: u8) -> WallTime {
        WallTime {
            year: 2026,
            month: 10,
            day: 17,
            weekday: 5,
            hour,
            minute,
            second,
        }
    }

    #[test]
    fn test_format_time_twelve_hour() {
        assert_eq!(at(0, 0, 0).format_time(), "12:00:00 AM");
        assert_eq!(at(9, 5, 7).format_time(), "09:05:07 AM");
        assert_eq!(at(12, 30, 0).format_time(), "12:30:00 PM");
        assert_eq!(at(23, 59, 59).format_time(), "11:59:59 PM");
    }

    #[test]
    fn test_format_time_out_of_range() {
        assert_eq!(at(24, 0, 0).format_time(), "??:??:?? ??");
        assert_eq!(at(1, 60, 0).format_time(), "??:??:?? ??");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(at(0, 0, 0).format_date(), "Sat, Oct 17 2026");

        let new_year = WallTime {
            year: 2027,
            month: 1,
            day: 1,
            weekday: 4,
            ..Default::default()
        };
        assert_eq!(new_year.format_date(), "Fri, Jan 01 2027");
    }

    #[test]
    fn test_format_date_out_of_range() {
        let bad = WallTime {
            year: 2026,
            month: 13,
            day: 0,
            weekday: 9,
            ..Default::default()
        };
        assert_eq!(bad.format_date(), "???, ??? ?? 2026");
    }

    #[test]
    fn test_render_stays_in_layout() {
        let mut buf = PixelBuffer::default();
        ClockFace::new().render(&mut buf, &at(10, 8, 42)).unwrap();

        assert!(buf.lit_count() > 0);
        for x in 0..128 {
            for y in (0..14).chain(43..64) {
                assert!(!buf.get(x, y), "stray pixel at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_render_clears_previous_frame() {
        let mut buf = PixelBuffer::default();
        buf.fill(true);
        ClockFace::new().render(&mut buf, &at(1, 2, 3)).unwrap();
        assert!(!buf.get(127, 63));
        assert!(!buf.get(0, 0));
    }

    #[test]
    fn test_render_changes_with_time() {
        let face = ClockFace::new();
        let mut a = PixelBuffer::default();
        let mut b = PixelBuffer::default();
        face.render(&mut a, &at(10, 8, 42)).unwrap();
        face.render(&mut b, &at(10, 8, 43)).unwrap();
        assert_ne!(a, b);
    }

    #[cfg(feature = "defmt")]
    #[test]
    fn test_face_types_are_defmt_format() {
        fn assert_format<T: defmt::Format>() {}
        assert_format::<ClockFace>();
        assert_format::<WallTime>();
    }
}

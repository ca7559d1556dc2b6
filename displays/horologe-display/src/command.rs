//! SH1106 command set
//!
//! Single-byte opcodes, some followed by one operand byte. Values are
//! fixed by the controller and must not be reinterpreted.

/// SH1106 commands
pub mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SET_COLUMN_ADDR: u8 = 0x21;
    pub const SET_PAGE_RANGE: u8 = 0x22;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    /// Page select, OR'd with the page index (0xB0..=0xB7)
    pub const SET_PAGE_ADDR: u8 = 0xB0;
}

/// Default contrast operand
pub const DEFAULT_CONTRAST: u8 = 0x7F;

/// Length of the power-up command sequence
pub const INIT_SEQUENCE_LEN: usize = 28;

/// Build the power-up command sequence
///
/// Sent as one command block. The operands after `SET_HIGH_COLUMN` and
/// `SET_LOW_COLUMN` (0xB0 0xC8, 0x10 0x40) are kept exactly as the
/// working hardware expects them; some controller revisions misbehave
/// without them.
///
/// `multiplex` is the number of active rows minus one (0x3F for 64 rows).
pub const fn init_sequence(contrast: u8, multiplex: u8) -> [u8; INIT_SEQUENCE_LEN] {
    [
        cmd::DISPLAY_OFF,
        cmd::SET_MEMORY_MODE,
        cmd::SET_HIGH_COLUMN,
        0xB0,
        0xC8,
        cmd::SET_LOW_COLUMN,
        0x10,
        0x40,
        cmd::SET_CONTRAST,
        contrast,
        cmd::SET_SEG_REMAP,
        cmd::SET_NORMAL,
        cmd::SET_MUX_RATIO,
        multiplex,
        cmd::DISPLAY_ALL_ON_RESUME,
        cmd::SET_DISPLAY_OFFSET,
        0x00,
        cmd::SET_CLOCK_DIV,
        0xF0,
        cmd::SET_PRECHARGE,
        0x22,
        cmd::SET_COM_PINS,
        0x12,
        cmd::SET_VCOM_DETECT,
        0x20,
        cmd::SET_CHARGE_PUMP,
        0x14, // Enable charge pump
        cmd::DISPLAY_ON,
    ]
}

/// Column start written after every page select: low nibble 2, high nibble 0
pub const COLUMN_RESET: [u8; 2] = [0x02, 0x10];

/// Page-select command for page `page`
pub const fn page_select(page: u8) -> [u8; 3] {
    [cmd::SET_PAGE_ADDR | page, COLUMN_RESET[0], COLUMN_RESET[1]]
}

/// Column and page window covering the whole panel
pub const fn address_window(width: u16, pages: u8) -> [u8; 6] {
    [
        cmd::SET_COLUMN_ADDR,
        0x00,
        (width - 1) as u8,
        cmd::SET_PAGE_RANGE,
        0x00,
        pages - 1,
    ]
}

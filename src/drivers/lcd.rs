//! HD44780 character LCD driver, 4-bit parallel bus.
//!
//! ## Wiring
//!
//! RS, E and D4–D7 on plain GPIO outputs; R/W tied to ground, so the busy
//! flag is never read and every command is followed by its worst-case
//! execution delay instead.
//!
//! ## DDRAM layout (2 × 16)
//!
//! ```text
//!   col  0 1 2 ... 15
//!  row0 00 01 02 ... 0F
//!  row1 40 41 42 ... 4F
//! ```

use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

pub const LCD_COLS: u8 = 16;
pub const LCD_ROWS: u8 = 2;

const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE_INC: u8 = 0x06;
const CMD_DISPLAY_OFF: u8 = 0x08;
const CMD_DISPLAY_ON: u8 = 0x0C;
/// Function set: 4-bit bus, 2 lines, 5x8 font.
const CMD_FUNCTION_4BIT_2LINE: u8 = 0x28;
const CMD_SET_DDRAM: u8 = 0x80;

const ROW_OFFSETS: [u8; 4] = [0x00, 0x40, 0x14, 0x54];

/// Errors from the LCD bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LcdError {
    /// A control or data line could not be driven.
    Pin,
}

impl fmt::Display for LcdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pin => write!(f, "LCD pin write failed"),
        }
    }
}

/// DDRAM address for a cursor position.  Rows and columns beyond the
/// panel are clamped to the last visible cell.
pub fn ddram_address(col: u8, row: u8) -> u8 {
    let row = row.min(LCD_ROWS - 1);
    let col = col.min(LCD_COLS - 1);
    ROW_OFFSETS[row as usize] + col
}

pub struct Hd44780<P, D> {
    rs: P,
    en: P,
    /// D4, D5, D6, D7 in bit order.
    data: [P; 4],
    delay: D,
}

impl<P: OutputPin, D: DelayNs> Hd44780<P, D> {
    pub fn new(rs: P, en: P, data: [P; 4], delay: D) -> Self {
        Self { rs, en, data, delay }
    }

    /// Power-on initialisation by instruction (datasheet figure 24).
    pub fn init(&mut self) -> Result<(), LcdError> {
        self.delay.delay_ms(50);
        set(&mut self.rs, false)?;
        set(&mut self.en, false)?;

        // Three 8-bit function sets force a known state, then switch to 4-bit.
        self.write_nibble(0x03)?;
        self.delay.delay_us(4_500);
        self.write_nibble(0x03)?;
        self.delay.delay_us(4_500);
        self.write_nibble(0x03)?;
        self.delay.delay_us(150);
        self.write_nibble(0x02)?;

        self.command(CMD_FUNCTION_4BIT_2LINE)?;
        self.command(CMD_DISPLAY_OFF)?;
        self.clear()?;
        self.command(CMD_ENTRY_MODE_INC)?;
        self.command(CMD_DISPLAY_ON)?;
        log::info!("lcd: HD44780 initialised ({}x{})", LCD_COLS, LCD_ROWS);
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), LcdError> {
        self.command(CMD_CLEAR)?;
        self.delay.delay_us(2_000);
        Ok(())
    }

    pub fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), LcdError> {
        self.command(CMD_SET_DDRAM | ddram_address(col, row))
    }

    /// Write raw character codes at the cursor.  Non-ASCII input is sent
    /// byte-for-byte; the panel ROM decides how it renders.
    pub fn write_str(&mut self, text: &str) -> Result<(), LcdError> {
        for &b in text.as_bytes() {
            self.write_byte(b, true)?;
        }
        Ok(())
    }

    fn command(&mut self, cmd: u8) -> Result<(), LcdError> {
        self.write_byte(cmd, false)
    }

    fn write_byte(&mut self, value: u8, is_data: bool) -> Result<(), LcdError> {
        set(&mut self.rs, is_data)?;
        self.write_nibble(value >> 4)?;
        self.write_nibble(value & 0x0F)
    }

    fn write_nibble(&mut self, nibble: u8) -> Result<(), LcdError> {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            set(pin, nibble & (1 << bit) != 0)?;
        }
        set(&mut self.en, true)?;
        self.delay.delay_us(1);
        set(&mut self.en, false)?;
        // Longest non-clear instruction takes 37 µs.
        self.delay.delay_us(50);
        Ok(())
    }
}

fn set<P: OutputPin>(pin: &mut P, high: bool) -> Result<(), LcdError> {
    pin.set_state(PinState::from(high)).map_err(|_| LcdError::Pin)
}

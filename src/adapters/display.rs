//! LCD adapter implementing [`DisplayPort`] over the HD44780 driver.
//!
//! Bus errors are logged and swallowed: a dead display must never stop
//! the interlock.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use log::warn;

use crate::app::ports::DisplayPort;
use crate::drivers::lcd::{Hd44780, LCD_COLS};

pub struct LcdDisplay<P, D> {
    lcd: Hd44780<P, D>,
}

impl<P: OutputPin, D: DelayNs> LcdDisplay<P, D> {
    /// Wrap an already initialised driver.
    pub fn new(lcd: Hd44780<P, D>) -> Self {
        Self { lcd }
    }
}

impl<P: OutputPin, D: DelayNs> DisplayPort for LcdDisplay<P, D> {
    fn clear(&mut self) {
        if let Err(e) = self.lcd.clear() {
            warn!("lcd: clear failed: {}", e);
        }
    }

    fn write_at(&mut self, col: u8, row: u8, text: &str) {
        let room = usize::from(LCD_COLS.saturating_sub(col));
        let visible = cells(text, room);
        let result = self
            .lcd
            .set_cursor(col, row)
            .and_then(|()| self.lcd.write_str(&visible));
        if let Err(e) = result {
            warn!("lcd: write at ({}, {}) failed: {}", col, row, e);
        }
    }
}

/// One byte per cell: the first `room` characters of `text`, with
/// anything outside printable ASCII shown as `?`.
fn cells(text: &str, room: usize) -> heapless::String<{ LCD_COLS as usize }> {
    let mut out = heapless::String::new();
    for c in text.chars().take(room) {
        let c = if c.is_ascii_graphic() || c == ' ' { c } else { '?' };
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn cells_respect_room() {
        assert_eq!(cells("Hello, World!", 16).as_str(), "Hello, World!");
        assert_eq!(cells("1234567890", 4).as_str(), "1234");
        assert_eq!(cells("abc", 0).as_str(), "");
        assert_eq!(cells("0123456789abcdefXYZ", 99).as_str(), "0123456789abcdef");
    }

    #[test]
    fn non_ascii_takes_one_cell_each() {
        assert_eq!(cells("ééé", 2).as_str(), "??");
        assert_eq!(cells("a\u{1}b", 16).as_str(), "a?b");
    }

    /// Counts data-byte writes: RS high on each E falling edge, halved
    /// because every byte is two nibbles.
    #[derive(Default)]
    struct Bus {
        rs: bool,
        en: bool,
        data_nibbles: usize,
    }

    #[derive(Clone)]
    struct BusPin(Rc<RefCell<Bus>>, u8);

    impl ErrorType for BusPin {
        type Error = Infallible;
    }

    impl OutputPin for BusPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            let mut bus = self.0.borrow_mut();
            match self.1 {
                0 => bus.rs = false,
                1 => {
                    if bus.en && bus.rs {
                        bus.data_nibbles += 1;
                    }
                    bus.en = false;
                }
                _ => {}
            }
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            let mut bus = self.0.borrow_mut();
            match self.1 {
                0 => bus.rs = true,
                1 => bus.en = true,
                _ => {}
            }
            Ok(())
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    #[test]
    fn text_past_right_edge_is_dropped() {
        let bus = Rc::new(RefCell::new(Bus::default()));
        let pin = |line| BusPin(bus.clone(), line);
        let lcd = Hd44780::new(pin(0), pin(1), [pin(2), pin(3), pin(4), pin(5)], NoDelay);
        let mut display = LcdDisplay::new(lcd);

        display.write_at(12, 0, "abcdefgh");
        assert_eq!(bus.borrow().data_nibbles / 2, 4);
    }

    #[test]
    fn multibyte_text_stays_within_the_row() {
        let bus = Rc::new(RefCell::new(Bus::default()));
        let pin = |line| BusPin(bus.clone(), line);
        let lcd = Hd44780::new(pin(0), pin(1), [pin(2), pin(3), pin(4), pin(5)], NoDelay);
        let mut display = LcdDisplay::new(lcd);

        display.write_at(14, 0, "ééé");
        assert_eq!(bus.borrow().data_nibbles / 2, 2);
    }
}

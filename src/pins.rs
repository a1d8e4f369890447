//! GPIO / peripheral pin assignments for the interlock controller board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Occupancy and seatbelt sensors (active-low, internal pull-up)
// ---------------------------------------------------------------------------

/// Driver seat pressure switch.  LOW = seat occupied.
pub const DRIVER_SEAT_GPIO: i32 = 37;
/// Driver seatbelt buckle switch.  LOW = belt fastened.
pub const DRIVER_BELT_GPIO: i32 = 16;
/// Passenger seat pressure switch.  LOW = seat occupied.
pub const PASSENGER_SEAT_GPIO: i32 = 36;
/// Passenger seatbelt buckle switch.  LOW = belt fastened.
pub const PASSENGER_BELT_GPIO: i32 = 17;

// ---------------------------------------------------------------------------
// User input
// ---------------------------------------------------------------------------

/// Momentary ignition push-button (active-low with pull-up).
pub const IGNITION_BUTTON_GPIO: i32 = 1;

// ---------------------------------------------------------------------------
// Indicators (active-high)
// ---------------------------------------------------------------------------

/// Green LED: all occupancy conditions met, ignition permitted.
pub const GREEN_LED_GPIO: i32 = 5;
/// Red LED: engine running.
pub const RED_LED_GPIO: i32 = 4;
/// Buzzer / alarm output: refused ignition attempt.
pub const ALARM_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// HD44780 character LCD (4-bit bus)
// ---------------------------------------------------------------------------

pub const LCD_RS_GPIO: i32 = 8;
pub const LCD_E_GPIO: i32 = 3;
pub const LCD_D4_GPIO: i32 = 9;
pub const LCD_D5_GPIO: i32 = 10;
pub const LCD_D6_GPIO: i32 = 11;
pub const LCD_D7_GPIO: i32 = 12;

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// Mode selector potentiometer.  Configured at boot, not sampled yet.
pub const MODE_ADC_CHANNEL: u32 = 6;
/// Timer potentiometer.  Configured at boot, not sampled yet.
pub const TIMER_ADC_CHANNEL: u32 = 5;

/// Highest GPIO number on the ESP32-S3.
pub const GPIO_MAX: i32 = 48;

//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements     | Connects to              |
//! |------------|----------------|--------------------------|
//! | `display`  | DisplayPort    | HD44780 over GPIO        |
//! | `hardware` | SensorPort     | Seat/belt/ignition GPIO  |
//! |            | IndicatorPort  | LED and alarm GPIO       |
//! | `log_sink` | EventSink      | Serial log output        |
//! | `time`     | ClockPort      | ESP32 system timer       |

pub mod display;
pub mod hardware;
pub mod log_sink;
pub mod time;

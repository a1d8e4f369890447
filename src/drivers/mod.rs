//! Peripheral drivers, hardware initialisation, and task helpers.

pub mod gpio;
pub mod hw_init;
pub mod ignition;
pub mod indicators;
pub mod lcd;
pub mod task_pin;

//! One-shot hardware peripheral initialization.
//!
//! Configures GPIO directions and pulls and the reserved ADC channels
//! using raw ESP-IDF sys calls. Called once from `main()` before the
//! control loop starts.
//!
//! On host targets the GPIO matrix is simulated by one atomic per pin so
//! the sensor, indicator, and LCD drivers run unchanged in tests.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    AdcInitFailed(i32),
    GpioConfigFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AdcInitFailed(rc)    => write!(f, "ADC1 init failed (rc={})", rc),
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
        }
    }
}

/// Pull-up inputs: ignition button plus the four occupancy switches.
pub const INPUT_PINS: [i32; 5] = [
    pins::IGNITION_BUTTON_GPIO,
    pins::DRIVER_SEAT_GPIO,
    pins::DRIVER_BELT_GPIO,
    pins::PASSENGER_SEAT_GPIO,
    pins::PASSENGER_BELT_GPIO,
];

/// Push-pull outputs, driven LOW at boot.
pub const OUTPUT_PINS: [i32; 9] = [
    pins::GREEN_LED_GPIO,
    pins::RED_LED_GPIO,
    pins::ALARM_GPIO,
    pins::LCD_RS_GPIO,
    pins::LCD_E_GPIO,
    pins::LCD_D4_GPIO,
    pins::LCD_D5_GPIO,
    pins::LCD_D6_GPIO,
    pins::LCD_D7_GPIO,
];

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the control loop; single-threaded.
    unsafe {
        init_gpio_inputs()?;
        init_gpio_outputs()?;
        init_adc()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    for &pin in &OUTPUT_PINS {
        gpio_write(pin, false);
    }
    log::info!("hw_init(sim): outputs driven low, ADC skipped");
    Ok(())
}

// ── ADC (oneshot) ─────────────────────────────────────────────

/// Bring up ADC1 with the mode and timer channels.  Nothing samples them
/// yet; the unit stays allocated for the lifetime of the firmware.
#[cfg(target_os = "espidf")]
unsafe fn init_adc() -> Result<(), HwInitError> {
    let init_cfg = adc_oneshot_unit_init_cfg_t {
        unit_id: adc_unit_t_ADC_UNIT_1,
        ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
        ..Default::default()
    };
    let mut handle: adc_oneshot_unit_handle_t = core::ptr::null_mut();
    let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &mut handle) };
    if ret != ESP_OK as i32 { return Err(HwInitError::AdcInitFailed(ret)); }

    let chan_cfg = adc_oneshot_chan_cfg_t {
        atten: adc_atten_t_ADC_ATTEN_DB_12,
        bitwidth: adc_bitwidth_t_ADC_BITWIDTH_12,
    };

    for channel in [pins::MODE_ADC_CHANNEL, pins::TIMER_ADC_CHANNEL] {
        let ret = unsafe { adc_oneshot_config_channel(handle, channel, &chan_cfg) };
        if ret != ESP_OK as i32 { return Err(HwInitError::AdcInitFailed(ret)); }
    }

    info!(
        "hw_init: ADC1 configured (CH{}=mode, CH{}=timer)",
        pins::MODE_ADC_CHANNEL, pins::TIMER_ADC_CHANNEL
    );
    Ok(())
}

// ── GPIO Inputs ───────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_inputs() -> Result<(), HwInitError> {
    for &pin in &INPUT_PINS {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_INPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_ENABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 { return Err(HwInitError::GpioConfigFailed(ret)); }
    }

    info!("hw_init: GPIO inputs configured (pull-up, polled)");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_read(pin: i32) -> bool {
    // SAFETY: gpio_get_level is a read-only register access on an
    // already-configured input pin; safe to call from main context.
    (unsafe { gpio_get_level(pin) }) != 0
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_read(pin: i32) -> bool {
    sim::level(pin)
}

// ── GPIO Outputs ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_gpio_outputs() -> Result<(), HwInitError> {
    for &pin in &OUTPUT_PINS {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 { return Err(HwInitError::GpioConfigFailed(ret)); }
        unsafe { gpio_set_level(pin, 0) };
    }

    info!("hw_init: GPIO outputs configured");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level writes to an already-configured output pin.
    // Indicators are driven from the control loop only; the LCD bus from
    // whichever thread holds the display mutex.
    unsafe { gpio_set_level(pin, u32::from(high)); }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(pin: i32, high: bool) {
    sim::set_level(pin, high);
}

// ── Host simulation ───────────────────────────────────────────

/// Simulated GPIO matrix.  Every pin idles HIGH, like a pulled-up input.
#[cfg(not(target_os = "espidf"))]
pub mod sim {
    use core::sync::atomic::{AtomicBool, Ordering};

    use crate::pins::GPIO_MAX;

    const PIN_COUNT: usize = GPIO_MAX as usize + 1;

    static LEVELS: [AtomicBool; PIN_COUNT] = [const { AtomicBool::new(true) }; PIN_COUNT];

    fn slot(pin: i32) -> Option<&'static AtomicBool> {
        usize::try_from(pin).ok().and_then(|idx| LEVELS.get(idx))
    }

    /// Current simulated level.  Unknown pins read HIGH.
    pub fn level(pin: i32) -> bool {
        slot(pin).is_none_or(|l| l.load(Ordering::Acquire))
    }

    /// Drive a simulated pin (test stimulus or output write).
    pub fn set_level(pin: i32, high: bool) {
        if let Some(l) = slot(pin) {
            l.store(high, Ordering::Release);
        }
    }
}

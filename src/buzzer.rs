//! A device abstraction for piezo buzzers on a PWM output.
//!
//! The buzzer is either silent (0% duty) or sounding at 50% duty on a fixed
//! carrier frequency. It shares nothing with the panel's output channel and
//! can run concurrently with it.

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pwm::{Config, Pwm};

/// Duty level while sounding, as a fraction of the PWM period.
const ON_DUTY_DIVISOR: u16 = 2; // 50%

/// A piezo buzzer driven by a PWM slice.
///
/// # Example
///
/// ```rust,no_run
/// # #![no_std]
/// # #![no_main]
/// use embassy_rp::pwm::{Config, Pwm};
/// use ws2812_panel::buzzer::Buzzer;
/// # #[panic_handler]
/// # fn panic(_info: &core::panic::PanicInfo) -> ! { loop {} }
///
/// fn example(p: embassy_rp::Peripherals) {
///     // GPIO21 is output B of PWM slice 2.
///     let pwm = Pwm::new_output_b(p.PWM_SLICE2, p.PIN_21, Config::default());
///     let mut buzzer = Buzzer::new_output_b(pwm, 100);
///     buzzer.on();
///     // ...
///     buzzer.off();
/// }
/// ```
pub struct Buzzer<'d> {
    pwm: Pwm<'d>,
    cfg: Config, // Store config to avoid recreating default (which resets divider)
    top: u16,
    channel: BuzzerChannel, // Track which channel (A or B) this buzzer uses
}

#[derive(Debug, Clone, Copy)]
enum BuzzerChannel {
    A,
    B,
}

impl<'d> Buzzer<'d> {
    /// Creates a buzzer on a PWM output A channel at `frequency_hz`.
    pub fn new_output_a(pwm: Pwm<'d>, frequency_hz: u32) -> Self {
        Self::init(pwm, BuzzerChannel::A, frequency_hz)
    }

    /// Creates a buzzer on a PWM output B channel at `frequency_hz`.
    pub fn new_output_b(pwm: Pwm<'d>, frequency_hz: u32) -> Self {
        Self::init(pwm, BuzzerChannel::B, frequency_hz)
    }

    /// Configure PWM and start silent. Internal shared logic.
    fn init(mut pwm: Pwm<'d>, channel: BuzzerChannel, frequency_hz: u32) -> Self {
        assert!(frequency_hz > 0, "frequency must be positive");
        let period_us = 1_000_000 / frequency_hz;
        assert!(
            (1..=u32::from(u16::MAX)).contains(&period_us),
            "frequency must fit in a 16-bit PWM frame at 1 µs ticks"
        );

        // Aim for tick ≈ 1 µs: divider = clk_sys / 1_000_000
        let clk = u64::from(clk_sys_freq());
        let div_int = (clk / 1_000_000).clamp(1, 255) as u8;

        let top = (period_us - 1) as u16;

        let mut cfg = Config::default();
        cfg.top = top;
        cfg.phase_correct = false; // edge-aligned => exact 1 µs steps
        cfg.divider = div_int.into();
        cfg.compare_a = 0; // start silent
        cfg.compare_b = 0;
        cfg.enable = true;
        pwm.set_config(&cfg);

        Self {
            pwm,
            cfg,
            top,
            channel,
        }
    }

    /// Starts the tone at 50% duty.
    pub fn on(&mut self) {
        self.set_level(self.top / ON_DUTY_DIVISOR);
    }

    /// Silences the buzzer (0% duty). The PWM slice stays configured.
    pub fn off(&mut self) {
        self.set_level(0);
    }

    fn set_level(&mut self, level: u16) {
        match self.channel {
            BuzzerChannel::A => self.cfg.compare_a = level,
            BuzzerChannel::B => self.cfg.compare_b = level,
        }
        self.pwm.set_config(&self.cfg);
    }
}

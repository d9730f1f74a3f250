//! A device abstraction for polled push buttons.
//!
//! Deliberately thin: a pull-configured input pin and a level read. The
//! panel core has no dependency on buttons; applications poll these at their
//! own cadence and handle debouncing themselves if their poll interval is
//! short enough to need it.

use embassy_rp::Peri;
use embassy_rp::gpio::{Input, Level, Pull};

/// Describes how the button is physically wired.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, defmt::Format)]
pub enum PressedTo {
    /// Button connects pin to voltage (3.3V) when pressed.
    /// Uses internal pull-down resistor. Pin reads HIGH when pressed.
    Voltage,

    /// Button connects pin to ground (GND) when pressed.
    /// Uses internal pull-up resistor. Pin reads LOW when pressed.
    Ground,
}

/// A polled push button.
///
/// # Example
///
/// ```rust,no_run
/// # #![no_std]
/// # #![no_main]
/// use ws2812_panel::button::{Button, PressedTo};
/// # #[panic_handler]
/// # fn panic(_info: &core::panic::PanicInfo) -> ! { loop {} }
///
/// fn example(p: embassy_rp::Peripherals) {
///     let button = Button::new(p.PIN_5, PressedTo::Ground);
///     if button.is_pressed() {
///         // Handle press
///     }
/// }
/// ```
pub struct Button<'d> {
    input: Input<'d>,
    pressed_to: PressedTo,
}

impl<'d> Button<'d> {
    /// Creates a new `Button` on a pin, with the pull resistor matching its
    /// wiring.
    #[must_use]
    pub fn new<P: embassy_rp::gpio::Pin>(pin: Peri<'d, P>, pressed_to: PressedTo) -> Self {
        let pull = match pressed_to {
            PressedTo::Voltage => Pull::Down,
            PressedTo::Ground => Pull::Up,
        };
        Self {
            input: Input::new(pin, pull),
            pressed_to,
        }
    }

    /// Current logic level on the pin.
    #[must_use]
    pub fn level(&self) -> Level {
        self.input.get_level()
    }

    /// Returns whether the button is currently pressed.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        match self.pressed_to {
            PressedTo::Voltage => self.input.is_high(),
            PressedTo::Ground => self.input.is_low(),
        }
    }
}

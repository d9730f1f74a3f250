//! 5×5 panel with two buttons and a buzzer.
//!
//! The panel shows all-red at rest. Pressing button A (GPIO5) starts a tone
//! and turns the panel green; pressing button B (GPIO6) silences the tone
//! and turns it red again. Panel data is on GPIO7, the buzzer on GPIO21.
#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::convert::Infallible;
use core::panic;

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::{Duration, Timer};
use ws2812_panel::button::{Button, PressedTo};
use ws2812_panel::buzzer::Buzzer;
use ws2812_panel::engine::{ByteSink, PanelChannel, PioPool};
use ws2812_panel::matrix::{PixelMatrix, Rgb, colors};
use ws2812_panel::pio_irqs::{Pio0Irqs, Pio1Irqs};
use ws2812_panel::Result;
use {defmt_rtt as _, panic_probe as _};

const SIDE: usize = 5;
const LED_COUNT: usize = SIDE * SIDE;

const BUZZER_FREQUENCY_HZ: u32 = 100;
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    let err = inner_main().await.unwrap_err();
    panic!("{err}");
}

async fn inner_main() -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    let button_a = Button::new(p.PIN_5, PressedTo::Ground);
    let button_b = Button::new(p.PIN_6, PressedTo::Ground);

    // GPIO21 is output B of PWM slice 2.
    let pwm = Pwm::new_output_b(p.PWM_SLICE2, p.PIN_21, PwmConfig::default());
    let mut buzzer = Buzzer::new_output_b(pwm, BUZZER_FREQUENCY_HZ);

    // A failed claim is fatal: the panel can never display anything, so the
    // error propagates out of startup and panics above.
    let mut primary = PioPool::new(p.PIO0, Pio0Irqs);
    let mut secondary = PioPool::new(p.PIO1, Pio1Irqs);
    let channel = PanelChannel::claim(&mut primary, &mut secondary, p.PIN_7)?;

    let mut matrix = PixelMatrix::<_, LED_COUNT, SIDE>::new(channel);
    matrix.flush(); // all dark
    fill(&mut matrix, colors::RED)?;
    matrix.flush();
    info!("panel ready");

    loop {
        if button_a.is_pressed() {
            info!("button A pressed");
            buzzer.on();
            fill(&mut matrix, colors::GREEN)?;
            matrix.flush();
        }
        if button_b.is_pressed() {
            info!("button B pressed");
            buzzer.off();
            fill(&mut matrix, colors::RED)?;
            matrix.flush();
        }
        Timer::after(POLL_INTERVAL).await;
    }
}

fn fill<E: ByteSink>(matrix: &mut PixelMatrix<E, LED_COUNT, SIDE>, color: Rgb) -> Result<()> {
    for row in 0..SIDE {
        for column in 0..SIDE {
            matrix.set_at(row, column, color)?;
        }
    }
    Ok(())
}

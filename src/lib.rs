//! Drive a square, serpentine-wired WS2812 ("NeoPixel") LED panel from a
//! Raspberry Pi Pico.
//!
//! The WS2812 one-wire protocol leaves no room for jitter: every bit cell is
//! 1.25 µs at 800 kHz and there is no acknowledgement or checksum, so a late
//! edge is visible only as a wrong color. This crate therefore serializes
//! frames through a [PIO](https://medium.com/data-science/nine-pico-pio-wats-with-rust-part-1-9d062067dc25)
//! state machine, which shifts bits at an exact rate no matter what the cores
//! are doing.
//!
//! # Layers
//!
//! - [`engine`] — claims a PIO state machine (PIO0 first, PIO1 as fallback)
//!   and exposes the blocking byte/latch primitives of the wire protocol.
//! - [`layout`] — the serpentine (row, column) → LED index mapping.
//! - [`matrix`] — the pixel buffer with checked set/clear/flush operations.
//! - [`button`] / [`buzzer`] — thin GPIO / PWM wrappers used by the demos.
//!
//! With the `host` feature (the default) only the platform-independent pieces
//! are compiled, so the buffer, mapping, and claim logic are testable with
//! plain `cargo test`.
#![cfg_attr(not(feature = "host"), no_std)]

// Compile-time checks: exactly one board must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "pico1", feature = "pico2")), not(feature = "host")))]
compile_error!("Must enable exactly one board feature: 'pico1' or 'pico2'");

#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

// These modules require embassy_rp and are excluded when testing on host
#[cfg(not(feature = "host"))]
pub mod button;
#[cfg(not(feature = "host"))]
pub mod buzzer;
pub mod engine;
mod error;
pub mod layout;
pub mod matrix;
#[cfg(not(feature = "host"))]
#[doc(hidden)]
pub mod pio_irqs;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};

//! The WS2812 serial protocol engine.
//!
//! The wire protocol is a continuous 800 kHz bitstream, three bytes per LED
//! in Green-Red-Blue order, with a frame latched into the LEDs by holding
//! the line idle for at least the reset threshold. Timing is the whole
//! contract: there is no acknowledgement and no checksum, so the only
//! defense against corrupted colors is emitting every bit cell exactly.
//!
//! This module defines the platform-independent seams — [`ByteSink`] for
//! emission and [`StateMachinePool`] plus [`claim_state_machine`] for
//! acquiring the hardware unit that does the emitting. The PIO-backed
//! implementation lives in [`pio`] and is compiled only for firmware builds.

use crate::{Error, Result};

#[cfg(not(feature = "host"))]
pub mod pio;
#[cfg(not(feature = "host"))]
pub use pio::{PanelChannel, PioPool, Ws2812Engine};

/// A sink for protocol bytes.
///
/// The hardware engine implements this over a PIO transmit FIFO; tests
/// substitute a recording double to assert on the exact byte stream.
pub trait ByteSink {
    /// Queues one byte for transmission, blocking until queue space is
    /// available.
    ///
    /// The queue drains at the fixed protocol bit rate, so the wait is
    /// bounded and cannot be cancelled mid-emission. Cannot fail once the
    /// channel is initialized.
    fn emit_byte(&mut self, byte: u8);

    /// Holds the line idle long enough for the connected LEDs to latch the
    /// frame.
    ///
    /// Must follow the last byte of every frame; without it the LEDs treat
    /// the next frame as a continuation of this one.
    fn latch(&mut self);
}

/// A pool of hardware state-machine units.
///
/// Each PIO instance is one pool. The firmware implementation hands out its
/// four state machines in order; tests use stub pools with a configurable
/// number of free units.
pub trait StateMachinePool {
    /// A unit claimed out of the pool.
    type Claimed;

    /// Takes one free unit, or `None` when the pool is exhausted.
    fn try_claim(&mut self) -> Option<Self::Claimed>;
}

/// Which pool a state-machine unit was claimed from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Claimed<A, B> {
    /// Claimed from the primary pool.
    Primary(A),
    /// Claimed from the secondary pool.
    Secondary(B),
}

/// Claims one state-machine unit, preferring the primary pool.
///
/// The secondary pool is consulted only once the primary has no free unit.
/// Exhaustion of both is fatal: without a state machine the panel can never
/// produce output and there is no degraded mode, so callers must abort
/// startup.
///
/// # Errors
///
/// [`Error::ResourceExhausted`] when neither pool has a free unit.
pub fn claim_state_machine<P, S>(
    primary: &mut P,
    secondary: &mut S,
) -> Result<Claimed<P::Claimed, S::Claimed>>
where
    P: StateMachinePool,
    S: StateMachinePool,
{
    if let Some(unit) = primary.try_claim() {
        return Ok(Claimed::Primary(unit));
    }
    if let Some(unit) = secondary.try_claim() {
        return Ok(Claimed::Secondary(unit));
    }
    Err(Error::ResourceExhausted)
}

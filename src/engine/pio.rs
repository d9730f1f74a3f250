//! PIO-backed implementation of the protocol engine.
//!
//! Bit-banging the WS2812 waveform from software cannot hold the timing once
//! interrupts or the executor preempt the loop. A PIO state machine runs the
//! tiny side-set program below at a fixed clock, so every bit cell is exact
//! regardless of what the cores are doing.

use embassy_rp::Peri;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::interrupt::typelevel::Binding;
use embassy_rp::pio::{
    Common, Config, Direction, FifoJoin, Instance, InterruptHandler, LoadedProgram, Pin, Pio,
    PioPin, ShiftConfig, ShiftDirection, StateMachine,
};
use embassy_time::Duration;
use fixed::traits::ToFixed;
use fixed::types::U56F8;

use super::{ByteSink, Claimed, StateMachinePool, claim_state_machine};
use crate::{Error, Result};

/// Wire bit rate of the WS2812 family.
const TARGET_BIT_RATE: u32 = 800_000;

/// PIO cycles per wire bit in the program below (T1 + T2 + T3 = 2 + 5 + 3).
const CYCLES_PER_BIT: u32 = 10;

/// Idle time that latches a frame into the LEDs. The datasheet minimum is
/// 50 µs; 100 µs covers the slower thresholds of common clones.
const LATCH_IDLE: Duration = Duration::from_micros(100);

/// One PIO instance treated as a pool of four claimable state machines.
///
/// The WS2812 program is loaded into the instance's shared instruction
/// memory once, at pool construction; every unit claimed from the pool runs
/// that same program.
pub struct PioPool<'d, P: Instance> {
    common: Common<'d, P>,
    program: LoadedProgram<'d, P>,
    sm0: Option<StateMachine<'d, P, 0>>,
    sm1: Option<StateMachine<'d, P, 1>>,
    sm2: Option<StateMachine<'d, P, 2>>,
    sm3: Option<StateMachine<'d, P, 3>>,
}

impl<'d, P: Instance> PioPool<'d, P> {
    /// Takes ownership of a PIO instance and loads the WS2812 program.
    pub fn new(
        pio: Peri<'d, P>,
        irqs: impl Binding<<P as Instance>::Interrupt, InterruptHandler<P>>,
    ) -> Self {
        let Pio {
            mut common,
            sm0,
            sm1,
            sm2,
            sm3,
            ..
        } = Pio::new(pio, irqs);

        let prg = ::pio::pio_asm!(
            ".side_set 1",
            ".wrap_target",
            "bitloop:",
            "    out x, 1       side 0 [2]",
            "    jmp !x do_zero side 1 [1]",
            "    jmp bitloop    side 1 [4]",
            "do_zero:",
            "    nop            side 0 [4]",
            ".wrap",
        );
        let program = common.load_program(&prg.program);

        Self {
            common,
            program,
            sm0: Some(sm0),
            sm1: Some(sm1),
            sm2: Some(sm2),
            sm3: Some(sm3),
        }
    }
}

impl<'d, P: Instance> StateMachinePool for PioPool<'d, P> {
    type Claimed = AnyStateMachine<'d, P>;

    fn try_claim(&mut self) -> Option<Self::Claimed> {
        if let Some(sm) = self.sm0.take() {
            return Some(AnyStateMachine::Sm0(sm));
        }
        if let Some(sm) = self.sm1.take() {
            return Some(AnyStateMachine::Sm1(sm));
        }
        if let Some(sm) = self.sm2.take() {
            return Some(AnyStateMachine::Sm2(sm));
        }
        if let Some(sm) = self.sm3.take() {
            return Some(AnyStateMachine::Sm3(sm));
        }
        None
    }
}

/// A state machine claimed out of a [`PioPool`], erased over its index.
pub enum AnyStateMachine<'d, P: Instance> {
    /// State machine 0.
    Sm0(StateMachine<'d, P, 0>),
    /// State machine 1.
    Sm1(StateMachine<'d, P, 1>),
    /// State machine 2.
    Sm2(StateMachine<'d, P, 2>),
    /// State machine 3.
    Sm3(StateMachine<'d, P, 3>),
}

/// A claimed PIO state machine configured to stream the 800 kHz bitstream
/// on one output pin.
///
/// Owns the state machine for the life of the process; there is no release
/// path. Construction is the only initialization — a second engine needs a
/// second claim.
pub struct Ws2812Engine<'d, P: Instance> {
    sm: AnyStateMachine<'d, P>,
}

impl<'d, P: Instance> Ws2812Engine<'d, P> {
    /// Claims one unit from `pool` and configures it to drive `pin`.
    ///
    /// # Errors
    ///
    /// [`Error::ResourceExhausted`] when the pool has no free unit.
    pub fn new(pool: &mut PioPool<'d, P>, pin: Peri<'d, impl PioPin>) -> Result<Self> {
        let unit = pool.try_claim().ok_or(Error::ResourceExhausted)?;
        Ok(Self::attach(pool, unit, pin))
    }

    fn attach(
        pool: &mut PioPool<'d, P>,
        mut unit: AnyStateMachine<'d, P>,
        pin: Peri<'d, impl PioPin>,
    ) -> Self {
        let pin = pool.common.make_pio_pin(pin);

        let mut cfg = Config::default();
        cfg.use_program(&pool.program, &[&pin]);
        cfg.set_out_pins(&[&pin]);
        cfg.set_set_pins(&[&pin]);
        // Autopull one byte at a time; emit_byte places it in the top bits.
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: 8,
            direction: ShiftDirection::Left,
        };
        cfg.fifo_join = FifoJoin::TxOnly;

        let clock_freq = U56F8::from_num(clk_sys_freq());
        let bit_freq = U56F8::from_num(TARGET_BIT_RATE * CYCLES_PER_BIT);
        cfg.clock_divider = (clock_freq / bit_freq).to_fixed();

        match &mut unit {
            AnyStateMachine::Sm0(sm) => start(sm, &cfg, &pin),
            AnyStateMachine::Sm1(sm) => start(sm, &cfg, &pin),
            AnyStateMachine::Sm2(sm) => start(sm, &cfg, &pin),
            AnyStateMachine::Sm3(sm) => start(sm, &cfg, &pin),
        }

        defmt::info!("ws2812 engine running at {} bit/s", TARGET_BIT_RATE);
        Self { sm: unit }
    }
}

fn start<'d, P: Instance, const SM: usize>(
    sm: &mut StateMachine<'d, P, SM>,
    cfg: &Config<'d, P>,
    pin: &Pin<'d, P>,
) {
    sm.set_config(cfg);
    sm.set_pin_dirs(Direction::Out, &[pin]);
    sm.set_enable(true);
}

/// The FIFO drains at the fixed bit rate, so this wait is bounded.
fn push_blocking<'d, P: Instance, const SM: usize>(sm: &mut StateMachine<'d, P, SM>, word: u32) {
    let tx = sm.tx();
    while !tx.try_push(word) {}
}

impl<'d, P: Instance> ByteSink for Ws2812Engine<'d, P> {
    fn emit_byte(&mut self, byte: u8) {
        // Left-shifting autopull consumes the top 8 bits of each FIFO word.
        let word = u32::from(byte) << 24;
        match &mut self.sm {
            AnyStateMachine::Sm0(sm) => push_blocking(sm, word),
            AnyStateMachine::Sm1(sm) => push_blocking(sm, word),
            AnyStateMachine::Sm2(sm) => push_blocking(sm, word),
            AnyStateMachine::Sm3(sm) => push_blocking(sm, word),
        }
    }

    fn latch(&mut self) {
        embassy_time::block_for(LATCH_IDLE);
    }
}

/// The panel's output channel: a [`Ws2812Engine`] on whichever PIO instance
/// had a free state machine.
pub enum PanelChannel<'d, P0: Instance, P1: Instance> {
    /// Engine claimed from the primary PIO instance.
    Primary(Ws2812Engine<'d, P0>),
    /// Engine claimed from the secondary PIO instance.
    Secondary(Ws2812Engine<'d, P1>),
}

impl<'d, P0: Instance, P1: Instance> PanelChannel<'d, P0, P1> {
    /// Claims a state machine for `pin`, trying `primary` before
    /// `secondary`.
    ///
    /// The claimed unit is reserved for the remainder of the process.
    ///
    /// # Errors
    ///
    /// [`Error::ResourceExhausted`] when both pools are exhausted. Fatal:
    /// the caller must abort startup, there is no degraded mode.
    pub fn claim(
        primary: &mut PioPool<'d, P0>,
        secondary: &mut PioPool<'d, P1>,
        pin: Peri<'d, impl PioPin>,
    ) -> Result<Self> {
        match claim_state_machine(primary, secondary)? {
            Claimed::Primary(unit) => Ok(Self::Primary(Ws2812Engine::attach(primary, unit, pin))),
            Claimed::Secondary(unit) => {
                Ok(Self::Secondary(Ws2812Engine::attach(secondary, unit, pin)))
            }
        }
    }
}

impl<'d, P0: Instance, P1: Instance> ByteSink for PanelChannel<'d, P0, P1> {
    fn emit_byte(&mut self, byte: u8) {
        match self {
            Self::Primary(engine) => engine.emit_byte(byte),
            Self::Secondary(engine) => engine.emit_byte(byte),
        }
    }

    fn latch(&mut self) {
        match self {
            Self::Primary(engine) => engine.latch(),
            Self::Secondary(engine) => engine.latch(),
        }
    }
}

#![allow(missing_docs)]
//! Host-level tests for the state-machine claim policy, using stub pools.

use ws2812_panel::Error;
use ws2812_panel::engine::{Claimed, StateMachinePool, claim_state_machine};

/// A pool with a fixed number of free units. Claims hand out unit ids in
/// order, like the PIO pool hands out state machines 0..3.
struct StubPool {
    free: usize,
    handed_out: usize,
}

impl StubPool {
    fn with_free(free: usize) -> Self {
        Self {
            free,
            handed_out: 0,
        }
    }
}

impl StateMachinePool for StubPool {
    type Claimed = usize;

    fn try_claim(&mut self) -> Option<usize> {
        if self.free == 0 {
            return None;
        }
        self.free -= 1;
        let unit = self.handed_out;
        self.handed_out += 1;
        Some(unit)
    }
}

#[test]
fn primary_pool_is_preferred_while_it_has_free_units() {
    let mut primary = StubPool::with_free(4);
    let mut secondary = StubPool::with_free(4);

    for expected_unit in 0..4 {
        let claimed = claim_state_machine(&mut primary, &mut secondary).unwrap();
        assert_eq!(claimed, Claimed::Primary(expected_unit));
    }
    assert_eq!(secondary.handed_out, 0);
}

#[test]
fn secondary_pool_is_used_only_after_primary_exhaustion() {
    let mut primary = StubPool::with_free(1);
    let mut secondary = StubPool::with_free(2);

    assert_eq!(
        claim_state_machine(&mut primary, &mut secondary).unwrap(),
        Claimed::Primary(0)
    );
    assert_eq!(
        claim_state_machine(&mut primary, &mut secondary).unwrap(),
        Claimed::Secondary(0)
    );
    assert_eq!(
        claim_state_machine(&mut primary, &mut secondary).unwrap(),
        Claimed::Secondary(1)
    );
}

#[test]
fn exhaustion_of_both_pools_is_fatal_and_deterministic() {
    let mut primary = StubPool::with_free(0);
    let mut secondary = StubPool::with_free(0);

    // Never retried internally; every call reports the same fatal error.
    for _ in 0..3 {
        let err = claim_state_machine(&mut primary, &mut secondary).unwrap_err();
        assert_eq!(err, Error::ResourceExhausted);
    }
    assert_eq!(primary.handed_out, 0);
    assert_eq!(secondary.handed_out, 0);
}

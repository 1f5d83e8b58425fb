// Host-side tests for the frame-loop bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod driver {
    include!("../src/core/driver.rs");
}

use driver::DriverState;

#[test]
fn start_requests_one_frame_and_ticks_reschedule() {
    let mut state = DriverState::default();
    assert!(state.on_start());
    state.requested(1);

    for id in 2..6 {
        assert!(state.on_tick());
        assert_eq!(state.pending_request(), None);
        state.requested(id);
    }
    assert!(state.is_running());
    assert_eq!(state.pending_request(), Some(5));
}

#[test]
fn start_while_running_does_not_request_a_second_frame() {
    let mut state = DriverState::default();
    assert!(state.on_start());
    state.requested(1);

    assert!(!state.on_start());
    assert_eq!(state.pending_request(), Some(1));
}

#[test]
fn stop_hands_back_the_queued_request_for_cancellation() {
    let mut state = DriverState::default();
    assert!(state.on_start());
    state.requested(7);

    assert_eq!(state.on_stop(), Some(7));
    assert!(!state.is_running());
    assert_eq!(state.pending_request(), None);

    // stopping again has nothing left to cancel
    assert_eq!(state.on_stop(), None);
}

#[test]
fn callback_firing_after_stop_does_not_run_or_reschedule() {
    let mut state = DriverState::default();
    assert!(state.on_start());
    state.requested(3);
    state.on_stop();

    assert!(!state.on_tick());
    assert_eq!(state.pending_request(), None);
}

#[test]
fn restart_before_queued_frame_keeps_a_single_loop() {
    // stop immediately followed by start, while the first request is
    // still queued: the old request must come back for cancellation and
    // exactly one request may be outstanding afterwards
    let mut state = DriverState::default();
    assert!(state.on_start());
    state.requested(1);

    assert_eq!(state.on_stop(), Some(1));
    assert!(state.on_start());
    state.requested(2);
    assert_eq!(state.pending_request(), Some(2));

    // only the surviving request's callback fires and carries the loop
    assert!(state.on_tick());
    state.requested(3);
    assert_eq!(state.pending_request(), Some(3));
    assert!(state.is_running());
}

#[test]
fn stop_start_cycles_never_accumulate_requests() {
    let mut state = DriverState::default();
    let mut next_id = 0;
    for _ in 0..10 {
        if state.on_start() {
            next_id += 1;
            state.requested(next_id);
        }
        assert_eq!(state.pending_request(), Some(next_id));
        // every stop cancels the one queued request
        assert_eq!(state.on_stop(), Some(next_id));
        assert_eq!(state.pending_request(), None);
    }
}

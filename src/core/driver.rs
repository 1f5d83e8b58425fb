// Pure bookkeeping for the frame loop: whether it is running and which
// animation-frame request is outstanding. Keeping the transitions out of
// the DOM driver lets the start/stop sequencing run host-side in tests.

/// At most one frame request may be outstanding at any time: `on_start`
/// only asks for a new one when none is queued, and `on_stop` hands the
/// queued id back so the caller cancels it. Without the cancellation, a
/// stop immediately followed by a start would leave the old callback
/// queued next to the new one, and each would reschedule itself —
/// integrating twice per display refresh from then on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DriverState {
    running: bool,
    pending: Option<i32>,
}

impl DriverState {
    /// Begin (or resume) the loop. Returns true when a new frame request
    /// is needed; false while already running.
    pub fn on_start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.pending.is_none()
    }

    /// Cease the loop. Returns the queued request id to cancel, if any.
    pub fn on_stop(&mut self) -> Option<i32> {
        self.running = false;
        self.pending.take()
    }

    /// The queued callback fired. Returns true when the frame should run
    /// and reschedule.
    pub fn on_tick(&mut self) -> bool {
        self.pending = None;
        self.running
    }

    /// Record the id handed out by the frame scheduler.
    pub fn requested(&mut self, id: i32) {
        self.pending = Some(id);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pending_request(&self) -> Option<i32> {
        self.pending
    }
}

/// Simulated latency of the availability check; no backend exists.
pub const CHECK_LATENCY_MS: u32 = 2_000;
/// How long the confirmation stays on screen before returning to idle.
pub const CONFIRM_DISPLAY_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvailabilityPhase {
    #[default]
    Idle,
    Checking,
    Confirmed,
}

/// Timed state machine for the availability check. The machine only
/// decides phases and delays; the caller owns the (cancellable) timer that
/// feeds `timer_elapsed`. One timer is live at a time, so replacing it
/// cancels whatever was pending.
#[derive(Clone, Copy, Debug, Default)]
pub struct AvailabilityCheck {
    phase: AvailabilityPhase,
}

impl AvailabilityCheck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> AvailabilityPhase {
        self.phase
    }

    pub fn is_checking(&self) -> bool {
        self.phase == AvailabilityPhase::Checking
    }

    /// Starts a check. Returns the delay to schedule, or `None` when a
    /// check is already running: the triggering control is inert while
    /// checking, so a re-entrant request is ignored rather than restarted.
    /// A request while confirmed restarts the check; the caller replaces
    /// the pending display timer, which cancels it.
    pub fn request(&mut self) -> Option<u32> {
        match self.phase {
            AvailabilityPhase::Checking => None,
            AvailabilityPhase::Idle | AvailabilityPhase::Confirmed => {
                self.phase = AvailabilityPhase::Checking;
                Some(CHECK_LATENCY_MS)
            }
        }
    }

    /// Advances on timer expiry. Returns the next delay to schedule, if any.
    pub fn timer_elapsed(&mut self) -> Option<u32> {
        match self.phase {
            AvailabilityPhase::Checking => {
                self.phase = AvailabilityPhase::Confirmed;
                Some(CONFIRM_DISPLAY_MS)
            }
            AvailabilityPhase::Confirmed => {
                self.phase = AvailabilityPhase::Idle;
                None
            }
            // A timer that outlives its state was not cancelled properly;
            // stay put rather than invent a transition.
            AvailabilityPhase::Idle => None,
        }
    }
}

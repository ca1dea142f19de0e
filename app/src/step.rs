//! State model for the step counter, kept free of any view concerns so
//! the transition logic can be exercised without a browser.

/// The step a freshly created counter starts at.
pub const FIRST_STEP: u32 = 1;

/// Events the counter recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// Move on to the next step.
    Advance,
}

/// The counter's entire state: the current step number.
///
/// The step starts at [`FIRST_STEP`] and only ever grows, one step per
/// [`StepEvent::Advance`]. Nothing outside the owning view can touch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepState {
    step: u32,
}

impl StepState {
    pub fn new() -> Self {
        Self::starting_at(FIRST_STEP)
    }

    /// State for a host that mounts the counter at an explicit step.
    pub fn starting_at(step: u32) -> Self {
        Self { step }
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    /// Applies one event and returns the resulting state.
    ///
    /// Total over all states: `Advance` is an unconditional increment,
    /// so there is no failure case to surface.
    #[must_use]
    pub fn apply(self, event: StepEvent) -> Self {
        match event {
            StepEvent::Advance => Self {
                step: self.step + 1,
            },
        }
    }

    /// The heading text shown for the current step.
    pub fn heading(&self) -> String {
        format!("Test Step {}", self.step)
    }
}

impl Default for StepState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_step_one() {
        let state = StepState::new();
        assert_eq!(state.step(), 1);
        assert_eq!(state.heading(), "Test Step 1");
    }

    #[test]
    fn advance_increments_by_exactly_one() {
        let mut state = StepState::new();
        for n in 1..=50 {
            state = state.apply(StepEvent::Advance);
            assert_eq!(state.step(), 1 + n);
            assert_eq!(state.heading(), format!("Test Step {}", 1 + n));
        }
    }

    #[test]
    fn heading_is_pure() {
        let state = StepState::new().apply(StepEvent::Advance);
        assert_eq!(state.heading(), state.heading());
    }

    #[test]
    fn no_upper_bound_over_a_thousand_advances() {
        let mut state = StepState::new();
        for _ in 0..1000 {
            state = state.apply(StepEvent::Advance);
        }
        assert_eq!(state.step(), 1001);
        assert_eq!(state.heading(), "Test Step 1001");
    }

    #[test]
    fn instances_are_independent() {
        let mut first = StepState::new();
        let second = StepState::new();
        first = first.apply(StepEvent::Advance);
        assert_eq!(first.step(), 2);
        assert_eq!(second.step(), 1);
    }

    #[test]
    fn starting_at_respects_the_given_step() {
        let state = StepState::starting_at(7);
        assert_eq!(state.heading(), "Test Step 7");
        assert_eq!(state.apply(StepEvent::Advance).step(), 8);
    }
}

//! Step pointer of the wizard.

use serde::{Deserialize, Serialize};

use super::WizardStep;

/// Where the user is in the wizard.
///
/// `current` is a `WizardStep`, so the pointer can never leave the six
/// steps; every movement past either end is a no-op. `furthest` remembers
/// the deepest step reached so far, which bounds direct jumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    current: WizardStep,
    furthest: WizardStep,
    preview_requested: bool,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> WizardStep {
        self.current
    }

    /// 0-based index of the current step.
    pub fn current_index(&self) -> usize {
        self.current.order_index()
    }

    pub fn furthest(&self) -> WizardStep {
        self.furthest
    }

    pub fn preview_requested(&self) -> bool {
        self.preview_requested
    }

    /// Moves one step forward. Returns false on the last step.
    pub(crate) fn step_forward(&mut self) -> bool {
        match self.current.next() {
            Some(next) => {
                self.move_to(next);
                true
            }
            None => false,
        }
    }

    /// Moves one step back. Returns false on the first step.
    pub(crate) fn step_back(&mut self) -> bool {
        match self.current.previous() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Jumps to `step` if it was already reached.
    pub(crate) fn jump_to(&mut self, step: WizardStep) -> bool {
        if step > self.furthest {
            return false;
        }
        self.current = step;
        true
    }

    pub(crate) fn request_preview(&mut self) {
        self.preview_requested = true;
    }

    /// Clears the preview signal, returning whether it was set.
    pub(crate) fn take_preview_request(&mut self) -> bool {
        std::mem::take(&mut self.preview_requested)
    }

    fn move_to(&mut self, step: WizardStep) {
        self.current = step;
        if step > self.furthest {
            self.furthest = step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_first_step_without_preview() {
        let state = WizardState::new();
        assert_eq!(state.current(), WizardStep::PersonalInfo);
        assert_eq!(state.current_index(), 0);
        assert!(!state.preview_requested());
    }

    #[test]
    fn step_back_from_first_is_noop() {
        let mut state = WizardState::new();
        assert!(!state.step_back());
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn step_forward_from_last_is_noop() {
        let mut state = WizardState::new();
        while state.step_forward() {}
        assert_eq!(state.current(), WizardStep::Certifications);
        assert!(!state.step_forward());
        assert_eq!(state.current(), WizardStep::Certifications);
    }

    #[test]
    fn furthest_survives_stepping_back() {
        let mut state = WizardState::new();
        state.step_forward();
        state.step_forward();
        state.step_back();
        assert_eq!(state.current(), WizardStep::Education);
        assert_eq!(state.furthest(), WizardStep::Experience);
    }

    #[test]
    fn jump_is_limited_to_reached_steps() {
        let mut state = WizardState::new();
        state.step_forward();
        assert!(!state.jump_to(WizardStep::Skills));
        assert_eq!(state.current(), WizardStep::Education);
        assert!(state.jump_to(WizardStep::PersonalInfo));
        assert_eq!(state.current(), WizardStep::PersonalInfo);
    }

    #[test]
    fn preview_request_is_consumed_once() {
        let mut state = WizardState::new();
        state.request_preview();
        assert!(state.take_preview_request());
        assert!(!state.take_preview_request());
    }
}

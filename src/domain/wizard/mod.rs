//! Wizard module - The ordered editor steps and the controller that walks them.
//!
//! Six steps, a clamped pointer, completion gating on personal info and a
//! one-shot preview signal raised past the last step.

mod controller;
mod drafts;
mod progress;
mod state;
mod step;

pub use controller::{AdvanceOutcome, SubmissionError, WizardController};
pub use drafts::{LanguagesForm, SkillsForm};
pub use progress::WizardProgress;
pub use state::WizardState;
pub use step::WizardStep;

//! WizardStep enum representing the six editor steps.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six wizard steps in the order the user walks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    PersonalInfo,
    Education,
    Experience,
    Skills,
    Languages,
    Certifications,
}

impl WizardStep {
    /// Returns all steps in canonical order.
    pub fn all() -> &'static [WizardStep] {
        &[
            WizardStep::PersonalInfo,
            WizardStep::Education,
            WizardStep::Experience,
            WizardStep::Skills,
            WizardStep::Languages,
            WizardStep::Certifications,
        ]
    }

    /// Number of steps in the wizard.
    pub fn count() -> usize {
        Self::all().len()
    }

    pub fn first() -> WizardStep {
        WizardStep::PersonalInfo
    }

    pub fn last() -> WizardStep {
        WizardStep::Certifications
    }

    /// Returns the step at `index`, if any.
    pub fn from_index(index: usize) -> Option<WizardStep> {
        Self::all().get(index).copied()
    }

    /// Returns the 0-based index of this step in the canonical order.
    pub fn order_index(&self) -> usize {
        match self {
            WizardStep::PersonalInfo => 0,
            WizardStep::Education => 1,
            WizardStep::Experience => 2,
            WizardStep::Skills => 3,
            WizardStep::Languages => 4,
            WizardStep::Certifications => 5,
        }
    }

    /// Returns the next step in order, if any.
    pub fn next(&self) -> Option<WizardStep> {
        Self::from_index(self.order_index() + 1)
    }

    /// Returns the previous step in order, if any.
    pub fn previous(&self) -> Option<WizardStep> {
        self.order_index()
            .checked_sub(1)
            .and_then(Self::from_index)
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    /// Returns the title shown in the step header.
    pub fn display_name(&self) -> &'static str {
        match self {
            WizardStep::PersonalInfo => "Personal Info",
            WizardStep::Education => "Education",
            WizardStep::Experience => "Experience",
            WizardStep::Skills => "Skills",
            WizardStep::Languages => "Languages",
            WizardStep::Certifications => "Certifications",
        }
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::first()
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

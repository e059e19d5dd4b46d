//! Header and button labels for the current step.

use serde::Serialize;

use super::WizardStep;

/// What the wizard chrome shows for one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardProgress {
    pub step: WizardStep,
    /// 1-based.
    pub step_number: usize,
    pub step_count: usize,
    pub title: &'static str,
    /// `current / (count - 1)`, two decimals; 0.0 on the first step, 1.0 on the last.
    pub fraction: f64,
    pub back_label: String,
    pub next_label: String,
}

impl WizardProgress {
    pub fn for_step(step: WizardStep) -> Self {
        let index = step.order_index();
        let count = WizardStep::count();
        let fraction = round2(index as f64 / (count - 1) as f64);

        let back_label = match step.previous() {
            Some(previous) => format!("Back: {}", previous.display_name()),
            None => "Back".to_string(),
        };
        let next_label = match step.next() {
            Some(next) => format!("Next: {}", next.display_name()),
            None => "Preview".to_string(),
        };

        Self {
            step,
            step_number: index + 1,
            step_count: count,
            title: step.display_name(),
            fraction,
            back_label,
            next_label,
        }
    }

    /// "Step n of 6".
    pub fn header(&self) -> String {
        format!("Step {} of {}", self.step_number, self.step_count)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

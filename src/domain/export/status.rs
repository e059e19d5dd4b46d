//! ExportStatus state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Where the session's export currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportStatus {
    #[default]
    Idle,
    Generating,
    Ready,
    Failed,
}

impl ExportStatus {
    pub fn is_busy(&self) -> bool {
        matches!(self, ExportStatus::Generating)
    }
}

impl StateMachine for ExportStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ExportStatus::*;
        matches!(
            (self, target),
            (Idle, Generating)
                | (Generating, Ready)
                | (Generating, Failed)
                | (Ready, Generating)
                | (Failed, Generating)
                | (Ready, Idle)
                | (Failed, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ExportStatus::*;
        match self {
            Idle => vec![Generating],
            Generating => vec![Ready, Failed],
            Ready => vec![Generating, Idle],
            Failed => vec![Generating, Idle],
        }
    }
}

impl fmt::Display for ExportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExportStatus::Idle => "idle",
            ExportStatus::Generating => "generating",
            ExportStatus::Ready => "ready",
            ExportStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        assert_eq!(ExportStatus::default(), ExportStatus::Idle);
    }

    #[test]
    fn happy_path() {
        let status = ExportStatus::Idle
            .transition_to(ExportStatus::Generating)
            .and_then(|s| s.transition_to(ExportStatus::Ready))
            .unwrap();
        assert_eq!(status, ExportStatus::Ready);
    }

    #[test]
    fn failed_export_can_be_retried_or_dismissed() {
        assert!(ExportStatus::Failed.can_transition_to(&ExportStatus::Generating));
        assert!(ExportStatus::Failed.can_transition_to(&ExportStatus::Idle));
    }

    #[test]
    fn cannot_skip_generating() {
        assert!(ExportStatus::Idle.transition_to(ExportStatus::Ready).is_err());
        assert!(ExportStatus::Generating
            .transition_to(ExportStatus::Idle)
            .is_err());
    }

    #[test]
    fn valid_transitions_agree_with_can_transition_to() {
        use ExportStatus::*;
        for from in [Idle, Generating, Ready, Failed] {
            for to in [Idle, Generating, Ready, Failed] {
                assert_eq!(
                    from.can_transition_to(&to),
                    from.valid_transitions().contains(&to),
                    "{:?} -> {:?}",
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn no_status_is_terminal() {
        assert!(!ExportStatus::Ready.is_terminal());
        assert!(!ExportStatus::Failed.is_terminal());
    }
}

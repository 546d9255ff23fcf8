//! Setup workflow state machine
//!
//! The orchestrator walks these stages strictly forward; `Creating` is only
//! entered for brand-new projects, and `Failed` is reachable from any
//! non-terminal stage. The transition table is data so it can be tested
//! apart from the side-effecting steps.

use std::fmt;

/// Stages of the setup run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Detecting,
    Selecting,
    Creating,
    Installing,
    Configuring,
    Completed,
    Failed,
}

impl Stage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Completed | Stage::Failed)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::Detecting => "detecting",
            Stage::Selecting => "selecting",
            Stage::Creating => "creating",
            Stage::Installing => "installing",
            Stage::Configuring => "configuring",
            Stage::Completed => "completed",
            Stage::Failed => "failed",
        };
        write!(f, "{}", label)
    }
}

/// Allowed forward transitions
const TRANSITIONS: &[(Stage, &[Stage])] = &[
    (Stage::Detecting, &[Stage::Selecting]),
    (Stage::Selecting, &[Stage::Creating, Stage::Installing]),
    (Stage::Creating, &[Stage::Installing]),
    (Stage::Installing, &[Stage::Configuring]),
    (Stage::Configuring, &[Stage::Completed]),
];

/// Tracks the current stage and the error that ended a failed run
#[derive(Debug)]
pub struct Workflow {
    stage: Stage,
    error: Option<String>,
}

impl Default for Workflow {
    fn default() -> Self {
        Self::new()
    }
}

impl Workflow {
    pub fn new() -> Self {
        Self {
            stage: Stage::Detecting,
            error: None,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Move to the next stage; invalid transitions are a logic error
    pub fn advance(&mut self, next: Stage) -> anyhow::Result<()> {
        let allowed = TRANSITIONS
            .iter()
            .find(|(from, _)| *from == self.stage)
            .map(|(_, to)| *to)
            .unwrap_or(&[]);

        if !allowed.contains(&next) {
            anyhow::bail!("invalid workflow transition: {} -> {}", self.stage, next);
        }

        self.stage = next;
        Ok(())
    }

    /// Record a failure; valid from any non-terminal stage, terminal after
    pub fn fail(&mut self, message: impl Into<String>) {
        if !self.stage.is_terminal() {
            self.stage = Stage::Failed;
            self.error = Some(message.into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_with_creation() {
        let mut workflow = Workflow::new();
        workflow.advance(Stage::Selecting).unwrap();
        workflow.advance(Stage::Creating).unwrap();
        workflow.advance(Stage::Installing).unwrap();
        workflow.advance(Stage::Configuring).unwrap();
        workflow.advance(Stage::Completed).unwrap();
        assert!(workflow.stage().is_terminal());
    }

    #[test]
    fn test_existing_project_skips_creating() {
        let mut workflow = Workflow::new();
        workflow.advance(Stage::Selecting).unwrap();
        workflow.advance(Stage::Installing).unwrap();
        assert_eq!(workflow.stage(), Stage::Installing);
    }

    #[test]
    fn test_creating_only_reachable_from_selecting() {
        let mut workflow = Workflow::new();
        assert!(workflow.advance(Stage::Creating).is_err());

        workflow.advance(Stage::Selecting).unwrap();
        workflow.advance(Stage::Installing).unwrap();
        assert!(workflow.advance(Stage::Creating).is_err());
    }

    #[test]
    fn test_no_skipping_install() {
        let mut workflow = Workflow::new();
        workflow.advance(Stage::Selecting).unwrap();
        assert!(workflow.advance(Stage::Configuring).is_err());
        assert!(workflow.advance(Stage::Completed).is_err());
    }

    #[test]
    fn test_failure_from_any_non_terminal_stage() {
        for target in [Stage::Detecting, Stage::Selecting, Stage::Installing] {
            let mut workflow = Workflow::new();
            if target != Stage::Detecting {
                workflow.advance(Stage::Selecting).unwrap();
            }
            if target == Stage::Installing {
                workflow.advance(Stage::Installing).unwrap();
            }
            workflow.fail("boom");
            assert_eq!(workflow.stage(), Stage::Failed);
            assert_eq!(workflow.error(), Some("boom"));
        }
    }

    #[test]
    fn test_terminal_stages_do_not_move() {
        let mut workflow = Workflow::new();
        workflow.advance(Stage::Selecting).unwrap();
        workflow.advance(Stage::Installing).unwrap();
        workflow.advance(Stage::Configuring).unwrap();
        workflow.advance(Stage::Completed).unwrap();

        assert!(workflow.advance(Stage::Selecting).is_err());
        workflow.fail("late failure");
        assert_eq!(workflow.stage(), Stage::Completed);
        assert!(workflow.error().is_none());
    }
}

//! Prompt flow transition tables
//!
//! The interactive flow differs by detected kind: a brand-new project asks
//! for framework and name before the feature question, an existing project
//! goes straight to features. Each variant is a declared step sequence
//! rather than branching on a step counter, so the flow can be checked
//! without a terminal.

use crate::detect::ProjectType;

/// One interactive step; a step whose field is covered by a flag is skipped
/// at execution time without affecting the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStep {
    ProjectKind,
    ProjectName,
    ThreeConfirm,
}

const NEW_PROJECT_STEPS: &[PromptStep] = &[
    PromptStep::ProjectKind,
    PromptStep::ProjectName,
    PromptStep::ThreeConfirm,
];

const EXISTING_PROJECT_STEPS: &[PromptStep] = &[PromptStep::ThreeConfirm];

/// The step sequence for a detection result
pub fn prompt_steps(detected: Option<ProjectType>) -> &'static [PromptStep] {
    match detected {
        None => NEW_PROJECT_STEPS,
        Some(_) => EXISTING_PROJECT_STEPS,
    }
}

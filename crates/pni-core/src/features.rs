//! Feature selection
//!
//! The final selection merges explicit CLI flags with interactive answers;
//! a flag that was passed always beats an answer for the same field. The
//! design-token setup is not optional anymore: the stylesheet pipeline is
//! regenerated unconditionally, so `css_vars` resolves to `true` whatever
//! the flag says.

use crate::detect::ProjectType;

/// Explicit CLI flags feeding into feature resolution
#[derive(Debug, Clone, Default)]
pub struct FeatureFlags {
    pub nuxt: bool,
    pub vue: bool,
    pub threejs: bool,
    pub css_vars: bool,
}

/// The resolved plan for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSelection {
    pub project_type: ProjectType,
    pub threejs: bool,
    pub css_vars: bool,
    pub project_name: Option<String>,
}

/// Answers collected interactively (all optional; flags may cover them)
#[derive(Debug, Clone, Default)]
pub struct PromptAnswers {
    pub project_type: Option<ProjectType>,
    pub threejs: Option<bool>,
    pub project_name: Option<String>,
}

/// Resolve the project kind: flags, then detection, then the interactive
/// answer, defaulting to Nuxt for brand-new projects
pub fn resolve_project_type(
    flags: &FeatureFlags,
    detected: Option<ProjectType>,
    answered: Option<ProjectType>,
) -> ProjectType {
    if flags.nuxt {
        ProjectType::Nuxt
    } else if flags.vue {
        ProjectType::Vue
    } else if let Some(detected) = detected {
        detected
    } else {
        answered.unwrap_or(ProjectType::Nuxt)
    }
}

/// Merge flags and answers into the final selection
pub fn resolve_features(
    flags: &FeatureFlags,
    detected: Option<ProjectType>,
    answers: &PromptAnswers,
) -> FeatureSelection {
    FeatureSelection {
        project_type: resolve_project_type(flags, detected, answers.project_type),
        threejs: if flags.threejs {
            true
        } else {
            answers.threejs.unwrap_or(false)
        },
        // Hard-wired on: the stylesheet is regenerated after shadcn setup
        // regardless of what --css-vars said
        css_vars: true,
        project_name: answers.project_name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_flag_beats_detection() {
        let flags = FeatureFlags {
            vue: true,
            ..Default::default()
        };
        let resolved = resolve_project_type(&flags, Some(ProjectType::Nuxt), None);
        assert_eq!(resolved, ProjectType::Vue);
    }

    #[test]
    fn test_nuxt_flag_beats_vue_flag() {
        let flags = FeatureFlags {
            nuxt: true,
            vue: true,
            ..Default::default()
        };
        assert_eq!(
            resolve_project_type(&flags, None, None),
            ProjectType::Nuxt
        );
    }

    #[test]
    fn test_detection_beats_answers() {
        let flags = FeatureFlags::default();
        let resolved =
            resolve_project_type(&flags, Some(ProjectType::Vue), Some(ProjectType::Nuxt));
        assert_eq!(resolved, ProjectType::Vue);
    }

    #[test]
    fn test_unknown_project_defaults_to_nuxt() {
        let flags = FeatureFlags::default();
        assert_eq!(resolve_project_type(&flags, None, None), ProjectType::Nuxt);
    }

    #[test]
    fn test_threejs_flag_is_authoritative() {
        let flags = FeatureFlags {
            threejs: true,
            ..Default::default()
        };
        let answers = PromptAnswers {
            threejs: Some(false),
            ..Default::default()
        };
        let selection = resolve_features(&flags, Some(ProjectType::Vue), &answers);
        assert!(selection.threejs);
    }

    #[test]
    fn test_css_vars_always_enabled() {
        // Even with no flag and no answer, the design-token setup runs
        let selection = resolve_features(
            &FeatureFlags::default(),
            Some(ProjectType::Vue),
            &PromptAnswers::default(),
        );
        assert!(selection.css_vars);

        let flags = FeatureFlags {
            css_vars: false,
            ..Default::default()
        };
        let selection = resolve_features(&flags, Some(ProjectType::Nuxt), &PromptAnswers::default());
        assert!(selection.css_vars);
    }

    #[test]
    fn test_answers_fill_unflagged_fields() {
        let answers = PromptAnswers {
            project_type: Some(ProjectType::Vue),
            threejs: Some(true),
            project_name: Some("demo".to_string()),
        };
        let selection = resolve_features(&FeatureFlags::default(), None, &answers);
        assert_eq!(selection.project_type, ProjectType::Vue);
        assert!(selection.threejs);
        assert_eq!(selection.project_name.as_deref(), Some("demo"));
    }
}

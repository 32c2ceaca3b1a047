use crate::action::Action;
use crate::target::Target;

/// Chooses a selector string for an action's target element.
///
/// Synchronous and pure: identical inputs must yield identical output, or
/// generated scripts lose their determinism. `None` means no selector can be
/// determined, which the engine reports as an error rather than emitting a
/// degenerate literal.
pub trait SelectorResolver {
    fn resolve(&self, action: &Action, target: Target) -> Option<String>;
}

/// Default resolver over the recorded candidate selectors.
///
/// Targets whose emitted helper loops over alternatives get the full
/// de-duplicated candidate set joined with `|`; everything else gets the
/// best single candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct CandidateResolver;

impl SelectorResolver for CandidateResolver {
    fn resolve(&self, action: &Action, target: Target) -> Option<String> {
        let candidates = action.selectors()?.candidates();
        if candidates.is_empty() {
            return None;
        }
        if target.supports_selector_fallback() {
            Some(candidates.join("|"))
        } else {
            Some(candidates[0].to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ElementTarget, Selectors};

    fn click_with(selectors: Selectors) -> Action {
        Action::Click(ElementTarget {
            selectors,
            ..Default::default()
        })
    }

    #[test]
    fn test_single_candidate_for_direct_targets() {
        let action = click_with(Selectors {
            id_selector: Some("#go".into()),
            general_selector: Some("button.go".into()),
            ..Default::default()
        });
        assert_eq!(
            CandidateResolver.resolve(&action, Target::PlaywrightJs),
            Some("#go".to_string())
        );
    }

    #[test]
    fn test_pipe_joined_for_fallback_targets() {
        let action = click_with(Selectors {
            id_selector: Some("#go".into()),
            general_selector: Some("button.go".into()),
            ..Default::default()
        });
        assert_eq!(
            CandidateResolver.resolve(&action, Target::PlaywrightPython),
            Some("#go|button.go".to_string())
        );
    }

    #[test]
    fn test_no_candidates() {
        let action = click_with(Selectors::default());
        assert_eq!(CandidateResolver.resolve(&action, Target::Cypress), None);
    }

    #[test]
    fn test_non_element_action_has_no_selector() {
        let action = Action::Load {
            url: Some("https://example.com".into()),
        };
        assert_eq!(
            CandidateResolver.resolve(&action, Target::PlaywrightJs),
            None
        );
    }
}

pub mod action;
pub mod context;
pub mod emit;
pub mod error;
pub mod selector;
pub mod target;

pub use action::{Action, ElementTarget, Selectors, TagName, FILLABLE_INPUT_TYPES};
pub use context::ActionContext;
pub use error::GenerateError;
pub use selector::{CandidateResolver, SelectorResolver};
pub use target::{LanguageFamily, ScriptConfig, Target};

use emit::{
    run_sequence, CypressBuilder, EventstreamBuilder, PlaywrightJavaBuilder, PlaywrightJsBuilder,
    PlaywrightPythonBuilder, PuppeteerBuilder, ScriptBuilder,
};

/// Generate an automation-test script for `target_id` from a recorded action
/// list, using the built-in candidate resolver.
///
/// Deterministic: identical inputs always yield identical output.
pub fn generate(
    actions: &[Action],
    show_comments: bool,
    target_id: &str,
) -> Result<String, GenerateError> {
    generate_with_resolver(actions, show_comments, target_id, &CandidateResolver)
}

/// Like [`generate`], with a caller-supplied selector resolver.
pub fn generate_with_resolver(
    actions: &[Action],
    show_comments: bool,
    target_id: &str,
    resolver: &dyn SelectorResolver,
) -> Result<String, GenerateError> {
    let target: Target = target_id.parse()?;
    let config = ScriptConfig::new(target, show_comments);

    // Navigation lookahead runs over the raw list: dropping unsupported
    // actions afterwards must not shift the indices it inspected.
    let mut contexts = Vec::new();
    for (index, action) in actions.iter().enumerate() {
        if !action.is_supported() {
            continue;
        }
        action.validate(index)?;
        let causes_navigation = matches!(actions.get(index + 1), Some(Action::Navigate));
        contexts.push(ActionContext::new(
            action,
            target,
            causes_navigation,
            action.is_stateful(),
            index,
        ));
    }

    match target {
        Target::PlaywrightJs => emit_script(PlaywrightJsBuilder::new(config), &contexts, resolver),
        Target::PlaywrightPython => {
            emit_script(PlaywrightPythonBuilder::new(config), &contexts, resolver)
        }
        Target::PlaywrightJava => {
            emit_script(PlaywrightJavaBuilder::new(config), &contexts, resolver)
        }
        Target::Puppeteer => emit_script(PuppeteerBuilder::new(config), &contexts, resolver),
        Target::Cypress => emit_script(CypressBuilder::new(config), &contexts, resolver),
        Target::Eventstream => emit_script(EventstreamBuilder::new(config), &contexts, resolver),
    }
}

fn emit_script<B: ScriptBuilder>(
    mut builder: B,
    contexts: &[ActionContext<'_>],
    resolver: &dyn SelectorResolver,
) -> Result<String, GenerateError> {
    run_sequence(contexts, &mut builder, resolver)?;
    Ok(builder.build_script())
}

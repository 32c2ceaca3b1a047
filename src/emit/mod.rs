mod cypress;
mod eventstream;
mod playwright_java;
mod playwright_js;
mod playwright_python;
mod puppeteer;

pub use cypress::CypressBuilder;
pub use eventstream::EventstreamBuilder;
pub use playwright_java::PlaywrightJavaBuilder;
pub use playwright_js::PlaywrightJsBuilder;
pub use playwright_python::PlaywrightPythonBuilder;
pub use puppeteer::PuppeteerBuilder;

use crate::action::{is_fillable_input, Action, TagName};
use crate::context::ActionContext;
use crate::error::GenerateError;
use crate::selector::SelectorResolver;
use crate::target::ScriptConfig;

/// Ordered buffer of emitted code fragments, private to one builder instance.
pub struct CodeBuffer {
    config: ScriptConfig,
    fragments: Vec<String>,
}

impl CodeBuffer {
    pub fn new(config: ScriptConfig) -> Self {
        Self {
            config,
            fragments: Vec::new(),
        }
    }

    pub fn config(&self) -> &ScriptConfig {
        &self.config
    }

    /// Split on line breaks and append each line indented by one unit,
    /// preserving relative order and embedded blank lines.
    pub fn push_codes(&mut self, code: &str) {
        for line in code.split('\n') {
            self.fragments
                .push(format!("{}{}\n", self.config.indent, line));
        }
    }

    /// Append a comment line (preceded by a blank separator line).
    /// No-op unless comments are enabled.
    pub fn push_comment(&mut self, description: &str) {
        if !self.config.show_comments {
            return;
        }
        self.fragments.push("\n".to_string());
        self.fragments.push(format!(
            "{}{} {}\n",
            self.config.indent, self.config.comment_prefix, description
        ));
    }

    /// Join the buffered fragments into the script body.
    pub fn assemble(&self) -> String {
        self.fragments.concat()
    }
}

/// Per-action codegen contract every concrete emitter implements.
///
/// Each operation appends one or more formatted lines to the builder's buffer
/// and returns the builder for chaining; `build_script` wraps the buffer in
/// the target's fixed prologue/epilogue.
pub trait ScriptBuilder {
    fn buffer_mut(&mut self) -> &mut CodeBuffer;

    fn click(&mut self, selector: &str, causes_navigation: bool) -> &mut Self;
    fn dbl_click(&mut self, selector: &str, causes_navigation: bool) -> &mut Self;
    fn hover(&mut self, selector: &str, causes_navigation: bool) -> &mut Self;
    fn load(&mut self, url: &str) -> &mut Self;
    fn resize(&mut self, width: u32, height: u32) -> &mut Self;
    fn fill(&mut self, selector: &str, value: &str, causes_navigation: bool) -> &mut Self;
    fn type_text(&mut self, selector: &str, value: &str, causes_navigation: bool) -> &mut Self;
    fn select(&mut self, selector: &str, option: &str, causes_navigation: bool) -> &mut Self;
    fn keydown(&mut self, selector: &str, key: &str, causes_navigation: bool) -> &mut Self;
    fn wheel(
        &mut self,
        delta_x: f64,
        delta_y: f64,
        page_x_offset: f64,
        page_y_offset: f64,
    ) -> &mut Self;
    fn drag_and_drop(&mut self, source_x: f64, source_y: f64, target_x: f64, target_y: f64)
        -> &mut Self;
    fn full_screenshot(&mut self) -> &mut Self;
    fn await_text(&mut self, text: &str) -> &mut Self;

    /// Assemble the buffer into the final script document.
    fn build_script(self) -> String;
}

/// Drive the emitter over the retained contexts, collapsing each contiguous
/// run of textarea actions to a single emission of the run's last state.
pub(crate) fn run_sequence<B: ScriptBuilder>(
    contexts: &[ActionContext<'_>],
    builder: &mut B,
    resolver: &dyn SelectorResolver,
) -> Result<(), GenerateError> {
    let mut prev: Option<&ActionContext> = None;
    for ctx in contexts {
        if !ctx.is_stateful() {
            if let Some(pending) = prev {
                if pending.is_stateful() {
                    dispatch(pending, builder, resolver)?;
                }
            }
            dispatch(ctx, builder, resolver)?;
        }
        prev = Some(ctx);
    }
    // A trailing stateful run still emits its final state.
    if let Some(pending) = prev {
        if pending.is_stateful() {
            dispatch(pending, builder, resolver)?;
        }
    }
    Ok(())
}

fn require_selector(
    ctx: &ActionContext<'_>,
    resolver: &dyn SelectorResolver,
) -> Result<String, GenerateError> {
    ctx.best_selector(resolver)
        .ok_or(GenerateError::UnresolvedSelector { index: ctx.index() })
}

/// Map one retained context to its emitter operation.
fn dispatch<B: ScriptBuilder>(
    ctx: &ActionContext<'_>,
    builder: &mut B,
    resolver: &dyn SelectorResolver,
) -> Result<(), GenerateError> {
    if builder.buffer_mut().config().show_comments {
        let description = ctx.description(resolver);
        if !description.is_empty() {
            builder.buffer_mut().push_comment(&description);
        }
    }

    let nav = ctx.causes_navigation();
    match ctx.action() {
        Action::Click(_) => {
            let selector = require_selector(ctx, resolver)?;
            builder.click(&selector, nav);
        }
        Action::DblClick(_) => {
            let selector = require_selector(ctx, resolver)?;
            builder.dbl_click(&selector, nav);
        }
        Action::Hover(_) => {
            let selector = require_selector(ctx, resolver)?;
            builder.hover(&selector, nav);
        }
        Action::Keydown { key, .. } => {
            let selector = require_selector(ctx, resolver)?;
            builder.keydown(&selector, key.as_deref().unwrap_or(""), nav);
        }
        Action::Input(el) => {
            let selector = require_selector(ctx, resolver)?;
            let value = el.value.as_deref().unwrap_or("");
            match el.tag_name {
                TagName::Select => builder.select(&selector, value, nav),
                TagName::Input
                    if el
                        .input_type
                        .as_deref()
                        .is_some_and(is_fillable_input) =>
                {
                    builder.fill(&selector, value, nav)
                }
                TagName::TextArea => builder.fill(&selector, value, nav),
                _ => builder.type_text(&selector, value, nav),
            };
        }
        Action::Load { url } => {
            builder.load(url.as_deref().unwrap_or(""));
        }
        Action::Resize { width, height } => {
            builder.resize(width.unwrap_or(0), height.unwrap_or(0));
        }
        Action::Wheel {
            delta_x,
            delta_y,
            page_x_offset,
            page_y_offset,
        } => {
            builder.wheel(*delta_x, *delta_y, *page_x_offset, *page_y_offset);
        }
        Action::FullScreenshot => {
            builder.full_screenshot();
        }
        Action::AwaitText { text } => {
            builder.await_text(text.as_deref().unwrap_or(""));
        }
        Action::DragAndDrop {
            source_x,
            source_y,
            target_x,
            target_y,
        } => {
            builder.drag_and_drop(
                source_x.unwrap_or(0.0),
                source_y.unwrap_or(0.0),
                target_x.unwrap_or(0.0),
                target_y.unwrap_or(0.0),
            );
        }
        // Voice has a description but no code; Navigate and unrecognized
        // types never reach dispatch.
        Action::Voice { .. } | Action::Navigate | Action::Unsupported => {}
    }
    Ok(())
}

/// Single-quoted string literal (JS selector strings, Python strings).
pub(crate) fn single_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Double-quoted string literal (JS/Java values), JSON-style escaping.
pub(crate) fn double_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Wheel deltas are emitted floored, as the recorder reports fractional
/// pixels some targets reject.
pub(crate) fn floor_num(v: f64) -> i64 {
    v.floor() as i64
}

/// Format a coordinate without a trailing `.0` for whole numbers.
pub(crate) fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ElementTarget, Selectors};
    use crate::selector::CandidateResolver;
    use crate::target::Target;

    fn config(show_comments: bool) -> ScriptConfig {
        ScriptConfig::new(Target::PlaywrightJs, show_comments)
    }

    #[test]
    fn test_push_codes_indents_every_line() {
        let mut buf = CodeBuffer::new(config(false));
        buf.push_codes("a\nb\n\nc");
        assert_eq!(buf.assemble(), "  a\n  b\n  \n  c\n");
    }

    #[test]
    fn test_push_comment_gated_on_show_comments() {
        let mut buf = CodeBuffer::new(config(false));
        buf.push_comment("hidden");
        assert_eq!(buf.assemble(), "");

        let mut buf = CodeBuffer::new(config(true));
        buf.push_comment("visible");
        assert_eq!(buf.assemble(), "\n  // visible\n");
    }

    #[test]
    fn test_single_quoted_escapes() {
        assert_eq!(single_quoted("it's"), "'it\\'s'");
        assert_eq!(single_quoted("a\\b"), "'a\\\\b'");
    }

    #[test]
    fn test_double_quoted_escapes() {
        assert_eq!(double_quoted("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(double_quoted("line1\nline2"), "\"line1\\nline2\"");
    }

    #[test]
    fn test_floor_and_fmt() {
        assert_eq!(floor_num(12.9), 12);
        assert_eq!(floor_num(-0.5), -1);
        assert_eq!(fmt_num(100.0), "100");
        assert_eq!(fmt_num(1.5), "1.5");
    }

    fn textarea(value: &str, selector: &str) -> Action {
        Action::Input(ElementTarget {
            tag_name: TagName::TextArea,
            value: Some(value.to_string()),
            selectors: Selectors {
                id_selector: Some(selector.to_string()),
                ..Default::default()
            },
            ..Default::default()
        })
    }

    fn click(selector: &str) -> Action {
        Action::Click(ElementTarget {
            selectors: Selectors {
                id_selector: Some(selector.to_string()),
                ..Default::default()
            },
            ..Default::default()
        })
    }

    fn contexts(actions: &[Action]) -> Vec<ActionContext<'_>> {
        actions
            .iter()
            .enumerate()
            .map(|(i, a)| {
                ActionContext::new(a, Target::PlaywrightJs, false, a.is_stateful(), i)
            })
            .collect()
    }

    #[test]
    fn test_stateful_run_collapses_to_last_state() {
        let actions = vec![
            textarea("a", "#ta"),
            textarea("ab", "#ta"),
            textarea("abc", "#ta"),
            click("#go"),
        ];
        let ctxs = contexts(&actions);
        let mut builder = PlaywrightJsBuilder::new(config(false));
        run_sequence(&ctxs, &mut builder, &CandidateResolver).unwrap();
        let script = builder.build_script();
        assert!(!script.contains("\"a\""));
        assert!(!script.contains("\"ab\""));
        assert!(script.contains("page.fill('#ta', \"abc\")"));
        let fill_pos = script.find("page.fill").unwrap();
        let click_pos = script.find("page.click('#go')").unwrap();
        assert!(fill_pos < click_pos);
    }

    #[test]
    fn test_trailing_stateful_run_flushes() {
        let actions = vec![click("#go"), textarea("draft", "#ta"), textarea("draft!", "#ta")];
        let ctxs = contexts(&actions);
        let mut builder = PlaywrightJsBuilder::new(config(false));
        run_sequence(&ctxs, &mut builder, &CandidateResolver).unwrap();
        let script = builder.build_script();
        assert!(script.contains("page.fill('#ta', \"draft!\")"));
        assert!(!script.contains("\"draft\","));
    }

    #[test]
    fn test_unresolved_selector_fails_with_raw_index() {
        let actions = vec![Action::Click(ElementTarget::default())];
        let ctxs = vec![ActionContext::new(
            &actions[0],
            Target::PlaywrightJs,
            false,
            false,
            7,
        )];
        let mut builder = PlaywrightJsBuilder::new(config(false));
        let err = run_sequence(&ctxs, &mut builder, &CandidateResolver).unwrap_err();
        assert_eq!(err, GenerateError::UnresolvedSelector { index: 7 });
    }

    #[test]
    fn test_voice_emits_comment_only() {
        let action = Action::Voice {
            value: Some("open settings".into()),
        };
        let ctxs = vec![ActionContext::new(
            &action,
            Target::PlaywrightJs,
            false,
            false,
            0,
        )];
        let mut builder = PlaywrightJsBuilder::new(config(true));
        run_sequence(&ctxs, &mut builder, &CandidateResolver).unwrap();
        let script = builder.build_script();
        assert!(script.contains("// Voice: open settings"));
        assert!(!script.contains("page."));
    }
}

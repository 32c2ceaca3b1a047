use crate::action::{Action, TagName};
use crate::emit::fmt_num;
use crate::selector::SelectorResolver;
use crate::target::Target;

/// Truncate to `max_len` characters, appending `...` when anything was cut.
pub(crate) fn truncate_text(s: &str, max_len: usize) -> String {
    let truncated: String = s.chars().take(max_len).collect();
    if s.chars().count() > max_len {
        format!("{}...", truncated)
    } else {
        truncated
    }
}

/// Collapse runs of whitespace to single spaces, trimming the ends.
pub(crate) fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// One retained action annotated with its derived facts: the chosen target,
/// whether the next raw action was a navigation, whether the action belongs
/// to a textarea run, and the action's index in the raw recorded list.
///
/// Constructed once per retained action, never mutated, discarded after use.
#[derive(Debug, Clone, Copy)]
pub struct ActionContext<'a> {
    action: &'a Action,
    target: Target,
    causes_navigation: bool,
    is_stateful: bool,
    index: usize,
}

impl<'a> ActionContext<'a> {
    pub fn new(
        action: &'a Action,
        target: Target,
        causes_navigation: bool,
        is_stateful: bool,
        index: usize,
    ) -> Self {
        Self {
            action,
            target,
            causes_navigation,
            is_stateful,
            index,
        }
    }

    pub fn action(&self) -> &'a Action {
        self.action
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn causes_navigation(&self) -> bool {
        self.causes_navigation
    }

    pub fn is_stateful(&self) -> bool {
        self.is_stateful
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn tag_name(&self) -> TagName {
        self.action.tag_name()
    }

    pub fn value(&self) -> Option<&str> {
        self.action.value()
    }

    pub fn input_type(&self) -> Option<&str> {
        self.action.input_type()
    }

    /// Delegate selector choice to the resolver. `None` means no resolvable
    /// target element.
    pub fn best_selector(&self, resolver: &dyn SelectorResolver) -> Option<String> {
        resolver.resolve(self.action, self.target)
    }

    /// `<tag> "visible text"` when the recorder extracted text, otherwise the
    /// resolved selector.
    fn element_text(&self, resolver: &dyn SelectorResolver) -> String {
        let tag = self.action.tag_name().as_str();
        let text = self
            .action
            .selectors()
            .and_then(|s| s.text.as_deref())
            .filter(|t| !t.is_empty());
        match text {
            Some(text) => format!(
                "<{}> \"{}\"",
                tag,
                truncate_text(&collapse_whitespace(text), 25)
            ),
            None => format!(
                "<{}> {}",
                tag,
                self.best_selector(resolver).unwrap_or_default()
            ),
        }
    }

    /// Fixed human-readable sentence per action type, used only for emitted
    /// comments. Empty for actions that are never described.
    pub fn description(&self, resolver: &dyn SelectorResolver) -> String {
        match self.action {
            Action::Click(_) => format!("Click on {}", self.element_text(resolver)),
            Action::DblClick(_) => format!("DblClick on {}", self.element_text(resolver)),
            Action::Hover(_) => format!("Hover over {}", self.element_text(resolver)),
            Action::Input(el) => format!(
                "Fill {} on {}",
                truncate_text(&format!("{:?}", el.value.as_deref().unwrap_or("")), 16),
                self.element_text(resolver)
            ),
            Action::Keydown { key, .. } => format!(
                "Press {} on {}",
                key.as_deref().unwrap_or(""),
                self.action.tag_name().as_str()
            ),
            Action::Load { url } => format!("Load \"{}\"", url.as_deref().unwrap_or("")),
            Action::Resize { width, height } => format!(
                "Resize window to {} x {}",
                width.unwrap_or(0),
                height.unwrap_or(0)
            ),
            Action::Wheel {
                delta_x, delta_y, ..
            } => format!("Scroll wheel by X:{}, Y:{}", fmt_num(*delta_x), fmt_num(*delta_y)),
            Action::FullScreenshot => "Take full page screenshot".to_string(),
            Action::AwaitText { text } => format!(
                "Wait for text {} to appear",
                truncate_text(&format!("{:?}", text.as_deref().unwrap_or("")), 25)
            ),
            Action::DragAndDrop {
                source_x,
                source_y,
                target_x,
                target_y,
            } => format!(
                "Drag n drop {} from ({}, {}) to ({}, {})",
                self.element_text(resolver),
                fmt_num(source_x.unwrap_or(0.0)),
                fmt_num(source_y.unwrap_or(0.0)),
                fmt_num(target_x.unwrap_or(0.0)),
                fmt_num(target_y.unwrap_or(0.0))
            ),
            Action::Voice { value } => format!("Voice: {}", value.as_deref().unwrap_or("")),
            Action::Navigate | Action::Unsupported => String::new(),
        }
    }
}

use serde::Deserialize;

use crate::error::GenerateError;

/// Input types that accept `fill` semantics (set-value rather than key-by-key).
pub const FILLABLE_INPUT_TYPES: &[&str] = &[
    "",
    "date",
    "datetime",
    "datetime-local",
    "email",
    "month",
    "number",
    "password",
    "search",
    "tel",
    "text",
    "time",
    "url",
    "week",
];

/// Check if an input's `type` attribute accepts `fill` semantics.
pub fn is_fillable_input(input_type: &str) -> bool {
    FILLABLE_INPUT_TYPES.contains(&input_type)
}

/// Tag name of the recorded element, as captured from the DOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum TagName {
    #[serde(rename = "INPUT")]
    Input,
    #[serde(rename = "SELECT")]
    Select,
    #[serde(rename = "TEXTAREA")]
    TextArea,
    #[default]
    #[serde(other)]
    Other,
}

impl TagName {
    /// Lowercase name used in generated comments.
    pub fn as_str(self) -> &'static str {
        match self {
            TagName::Input => "input",
            TagName::Select => "select",
            TagName::TextArea => "textarea",
            TagName::Other => "element",
        }
    }
}

/// Candidate selectors recorded for an element, best-first by kind,
/// plus the element's extracted visible text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Selectors {
    pub test_id_selector: Option<String>,
    pub id_selector: Option<String>,
    pub general_selector: Option<String>,
    pub attr_selector: Option<String>,
    pub href_selector: Option<String>,
    pub text: Option<String>,
}

impl Selectors {
    /// Non-empty candidate selectors, de-duplicated, recording order preserved.
    pub fn candidates(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for candidate in [
            self.test_id_selector.as_deref(),
            self.id_selector.as_deref(),
            self.general_selector.as_deref(),
            self.attr_selector.as_deref(),
            self.href_selector.as_deref(),
        ]
        .into_iter()
        .flatten()
        {
            if !candidate.is_empty() && !out.contains(&candidate) {
                out.push(candidate);
            }
        }
        out
    }
}

/// The element an action targets: tag, candidate selectors, and (for inputs)
/// the value and `type` attribute at the time of recording.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementTarget {
    pub tag_name: TagName,
    pub selectors: Selectors,
    pub value: Option<String>,
    pub input_type: Option<String>,
}

/// One recorded browser-interaction event.
///
/// Deserializes from the recorder's JSON: the `type` field selects the
/// variant, everything else is camelCase. Unknown `type` values map to
/// `Unsupported` and are dropped by the orchestrator. `Navigate` is a
/// marker used only for navigation lookahead and is never itself emitted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Action {
    Click(ElementTarget),
    DblClick(ElementTarget),
    Hover(ElementTarget),
    Input(ElementTarget),
    Keydown {
        #[serde(flatten)]
        element: ElementTarget,
        key: Option<String>,
    },
    Load {
        url: Option<String>,
    },
    Resize {
        width: Option<u32>,
        height: Option<u32>,
    },
    Wheel {
        #[serde(default)]
        delta_x: f64,
        #[serde(default)]
        delta_y: f64,
        #[serde(default)]
        page_x_offset: f64,
        #[serde(default)]
        page_y_offset: f64,
    },
    FullScreenshot,
    AwaitText {
        text: Option<String>,
    },
    DragAndDrop {
        source_x: Option<f64>,
        source_y: Option<f64>,
        target_x: Option<f64>,
        target_y: Option<f64>,
    },
    Voice {
        value: Option<String>,
    },
    Navigate,
    #[serde(other)]
    Unsupported,
}

impl Action {
    /// The targeted element, for element-bearing variants.
    pub fn element(&self) -> Option<&ElementTarget> {
        match self {
            Action::Click(el)
            | Action::DblClick(el)
            | Action::Hover(el)
            | Action::Input(el) => Some(el),
            Action::Keydown { element, .. } => Some(element),
            _ => None,
        }
    }

    pub fn tag_name(&self) -> TagName {
        self.element().map(|el| el.tag_name).unwrap_or_default()
    }

    pub fn selectors(&self) -> Option<&Selectors> {
        self.element().map(|el| &el.selectors)
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Action::Voice { value } => value.as_deref(),
            _ => self.element().and_then(|el| el.value.as_deref()),
        }
    }

    pub fn input_type(&self) -> Option<&str> {
        self.element().and_then(|el| el.input_type.as_deref())
    }

    /// Whether this action participates in emission at all.
    /// `Navigate` is lookahead-only; unrecognized types are dropped.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Action::Navigate | Action::Unsupported)
    }

    /// A contiguous run of textarea actions collapses to one emission.
    pub fn is_stateful(&self) -> bool {
        self.tag_name() == TagName::TextArea
    }

    /// Check the variant-specific required fields before dispatch.
    /// `index` is the action's position in the raw recorded list.
    pub fn validate(&self, index: usize) -> Result<(), GenerateError> {
        match self {
            Action::Keydown { key, .. } => require(key, index, "key"),
            Action::Load { url } => require(url, index, "url"),
            Action::Resize { width, height } => {
                require(width, index, "width")?;
                require(height, index, "height")
            }
            Action::AwaitText { text } => require(text, index, "text"),
            Action::DragAndDrop {
                source_x,
                source_y,
                target_x,
                target_y,
            } => {
                require(source_x, index, "sourceX")?;
                require(source_y, index, "sourceY")?;
                require(target_x, index, "targetX")?;
                require(target_y, index, "targetY")
            }
            _ => Ok(()),
        }
    }
}

fn require<T>(field: &Option<T>, index: usize, name: &'static str) -> Result<(), GenerateError> {
    if field.is_some() {
        Ok(())
    } else {
        Err(GenerateError::InvalidAction { index, field: name })
    }
}

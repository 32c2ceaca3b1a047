use super::{double_quoted, floor_num, fmt_num, single_quoted, CodeBuffer, ScriptBuilder};
use crate::target::ScriptConfig;

/// Generic event-stream DSL: bare capitalized operations with a
/// `PromiseAll`/`WaitForNavigation` pairing for navigating actions.
pub struct EventstreamBuilder {
    buf: CodeBuffer,
}

impl EventstreamBuilder {
    pub fn new(config: ScriptConfig) -> Self {
        Self {
            buf: CodeBuffer::new(config),
        }
    }

    fn with_navigation(action: &str) -> String {
        format!(
            "PromiseAll([\n    {},\n    WaitForNavigation()\n  ]);",
            action
        )
    }

    fn push_action(&mut self, action: String, causes_navigation: bool) {
        let code = if causes_navigation {
            Self::with_navigation(&action)
        } else {
            format!("{};", action)
        };
        self.buf.push_codes(&code);
    }
}

impl ScriptBuilder for EventstreamBuilder {
    fn buffer_mut(&mut self) -> &mut CodeBuffer {
        &mut self.buf
    }

    fn click(&mut self, selector: &str, causes_navigation: bool) -> &mut Self {
        let action = format!("Click({})", single_quoted(selector));
        self.push_action(action, causes_navigation);
        self
    }

    fn dbl_click(&mut self, selector: &str, causes_navigation: bool) -> &mut Self {
        let action = format!("DblClick({})", single_quoted(selector));
        self.push_action(action, causes_navigation);
        self
    }

    fn hover(&mut self, selector: &str, causes_navigation: bool) -> &mut Self {
        let action = format!("Hover({})", single_quoted(selector));
        self.push_action(action, causes_navigation);
        self
    }

    fn load(&mut self, url: &str) -> &mut Self {
        self.buf
            .push_codes(&format!("Goto({});", single_quoted(url)));
        self
    }

    fn resize(&mut self, width: u32, height: u32) -> &mut Self {
        self.buf.push_codes(&format!(
            "SetViewportSize({{ width: {}, height: {} }});",
            width, height
        ));
        self
    }

    fn fill(&mut self, selector: &str, value: &str, causes_navigation: bool) -> &mut Self {
        let action = format!(
            "Fill({}, {})",
            single_quoted(selector),
            double_quoted(value)
        );
        self.push_action(action, causes_navigation);
        self
    }

    fn type_text(&mut self, selector: &str, value: &str, causes_navigation: bool) -> &mut Self {
        let action = format!(
            "Type({}, {})",
            single_quoted(selector),
            double_quoted(value)
        );
        self.push_action(action, causes_navigation);
        self
    }

    fn select(&mut self, selector: &str, option: &str, causes_navigation: bool) -> &mut Self {
        let action = format!(
            "SelectOption({}, {})",
            single_quoted(selector),
            single_quoted(option)
        );
        self.push_action(action, causes_navigation);
        self
    }

    fn keydown(&mut self, selector: &str, key: &str, causes_navigation: bool) -> &mut Self {
        let action = format!(
            "Press({}, {})",
            single_quoted(selector),
            single_quoted(key)
        );
        self.push_action(action, causes_navigation);
        self
    }

    fn wheel(
        &mut self,
        delta_x: f64,
        delta_y: f64,
        _page_x_offset: f64,
        _page_y_offset: f64,
    ) -> &mut Self {
        self.buf.push_codes(&format!(
            "MouseWheel({}, {});",
            floor_num(delta_x),
            floor_num(delta_y)
        ));
        self
    }

    fn drag_and_drop(
        &mut self,
        source_x: f64,
        source_y: f64,
        target_x: f64,
        target_y: f64,
    ) -> &mut Self {
        let code = [
            format!("MouseMove({}, {});", fmt_num(source_x), fmt_num(source_y)),
            "  MouseDown();".to_string(),
            format!("  MouseMove({}, {});", fmt_num(target_x), fmt_num(target_y)),
            "  MouseUp();".to_string(),
        ]
        .join("\n");
        self.buf.push_codes(&code);
        self
    }

    fn full_screenshot(&mut self) -> &mut Self {
        self.buf
            .push_codes("Screenshot({ path: 'screenshot.png', fullPage: true });");
        self
    }

    fn await_text(&mut self, text: &str) -> &mut Self {
        self.buf.push_codes(&format!(
            "WaitForSelector({});",
            single_quoted(&format!("text={}", text))
        ));
        self
    }

    fn build_script(self) -> String {
        format!(
            "test('Written with Web UI Recorder', async ({{ page }}) => {{{}}});",
            self.buf.assemble()
        )
    }
}

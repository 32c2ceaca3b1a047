use super::{double_quoted, floor_num, single_quoted, CodeBuffer, ScriptBuilder};
use crate::target::ScriptConfig;

/// Cypress spec. Cypress detects and waits for page loads itself, so
/// navigation flags are ignored. There is no drag-and-drop primitive: the
/// operation emits an empty fragment (documented limitation).
pub struct CypressBuilder {
    buf: CodeBuffer,
}

impl CypressBuilder {
    pub fn new(config: ScriptConfig) -> Self {
        Self {
            buf: CodeBuffer::new(config),
        }
    }
}

impl ScriptBuilder for CypressBuilder {
    fn buffer_mut(&mut self) -> &mut CodeBuffer {
        &mut self.buf
    }

    fn click(&mut self, selector: &str, _causes_navigation: bool) -> &mut Self {
        self.buf
            .push_codes(&format!("cy.get({}).click();", single_quoted(selector)));
        self
    }

    fn dbl_click(&mut self, selector: &str, _causes_navigation: bool) -> &mut Self {
        self.buf
            .push_codes(&format!("cy.get({}).dblclick();", single_quoted(selector)));
        self
    }

    fn hover(&mut self, selector: &str, _causes_navigation: bool) -> &mut Self {
        self.buf.push_codes(&format!(
            "cy.get({}).trigger('mouseover');",
            single_quoted(selector)
        ));
        self
    }

    fn load(&mut self, url: &str) -> &mut Self {
        self.buf
            .push_codes(&format!("cy.visit({});", single_quoted(url)));
        self
    }

    fn resize(&mut self, width: u32, height: u32) -> &mut Self {
        self.buf
            .push_codes(&format!("cy.viewport({}, {});", width, height));
        self
    }

    fn fill(&mut self, selector: &str, value: &str, _causes_navigation: bool) -> &mut Self {
        self.buf.push_codes(&format!(
            "cy.get({}).type({});",
            single_quoted(selector),
            double_quoted(value)
        ));
        self
    }

    fn type_text(&mut self, selector: &str, value: &str, _causes_navigation: bool) -> &mut Self {
        self.buf.push_codes(&format!(
            "cy.get({}).type({});",
            single_quoted(selector),
            double_quoted(value)
        ));
        self
    }

    fn select(&mut self, selector: &str, option: &str, _causes_navigation: bool) -> &mut Self {
        self.buf.push_codes(&format!(
            "cy.get({}).select({});",
            single_quoted(selector),
            single_quoted(option)
        ));
        self
    }

    fn keydown(&mut self, selector: &str, key: &str, _causes_navigation: bool) -> &mut Self {
        self.buf.push_codes(&format!(
            "cy.get({}).type({});",
            single_quoted(selector),
            single_quoted(&format!("{{{}}}", key))
        ));
        self
    }

    fn wheel(
        &mut self,
        _delta_x: f64,
        _delta_y: f64,
        page_x_offset: f64,
        page_y_offset: f64,
    ) -> &mut Self {
        self.buf.push_codes(&format!(
            "cy.scrollTo({}, {});",
            floor_num(page_x_offset),
            floor_num(page_y_offset)
        ));
        self
    }

    fn drag_and_drop(
        &mut self,
        _source_x: f64,
        _source_y: f64,
        _target_x: f64,
        _target_y: f64,
    ) -> &mut Self {
        // No native drag-and-drop; emit an empty fragment.
        self.buf.push_codes("");
        self
    }

    fn full_screenshot(&mut self) -> &mut Self {
        self.buf.push_codes("cy.screenshot();");
        self
    }

    fn await_text(&mut self, text: &str) -> &mut Self {
        self.buf
            .push_codes(&format!("cy.contains({});", single_quoted(text)));
        self
    }

    fn build_script(self) -> String {
        format!(
            "it('Written with Web UI Recorder', () => {{{}}});",
            self.buf.assemble()
        )
    }
}

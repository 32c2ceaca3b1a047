use super::{floor_num, fmt_num, single_quoted, CodeBuffer, ScriptBuilder};
use crate::target::ScriptConfig;

/// Selector-fallback helpers shared by every generated Python script.
/// `dict.fromkeys` de-duplicates the pipe-delimited candidates while keeping
/// recording order.
const PROLOGUE: &str = r#"from playwright.async_api import async_playwright
import asyncio

async def read_inner_text(page, selectors):
  for s in dict.fromkeys(selectors.split('|')):
    if s:
      element = await page.query_selector(s)
      if element:
        return await element.inner_text()

async def interact(page, selectors, action, value=None):
  for s in dict.fromkeys(selectors.split('|')):
    if s and await page.query_selector(s):
      await getattr(page, action)(s, value) if value else await getattr(page, action)(s)
      break

async def execute(page):"#;

/// Async Playwright in Python. There is no event-based navigation wait in
/// this style: navigation-causing actions are followed by a fixed 2 s sleep.
pub struct PlaywrightPythonBuilder {
    buf: CodeBuffer,
}

impl PlaywrightPythonBuilder {
    pub fn new(config: ScriptConfig) -> Self {
        Self {
            buf: CodeBuffer::new(config),
        }
    }

    fn push_action(&mut self, action: String, causes_navigation: bool) {
        let code = if causes_navigation {
            format!("{}\nawait asyncio.sleep(2)", action)
        } else {
            action
        };
        self.buf.push_codes(&code);
    }
}

impl ScriptBuilder for PlaywrightPythonBuilder {
    fn buffer_mut(&mut self) -> &mut CodeBuffer {
        &mut self.buf
    }

    fn click(&mut self, selector: &str, causes_navigation: bool) -> &mut Self {
        let action = format!("await interact(page, {}, \"click\")", single_quoted(selector));
        self.push_action(action, causes_navigation);
        self
    }

    fn dbl_click(&mut self, selector: &str, causes_navigation: bool) -> &mut Self {
        let action = format!(
            "await interact(page, {}, \"dblclick\")",
            single_quoted(selector)
        );
        self.push_action(action, causes_navigation);
        self
    }

    fn hover(&mut self, selector: &str, causes_navigation: bool) -> &mut Self {
        let action = format!("await interact(page, {}, \"hover\")", single_quoted(selector));
        self.push_action(action, causes_navigation);
        self
    }

    fn load(&mut self, url: &str) -> &mut Self {
        self.buf
            .push_codes(&format!("await page.goto({})", single_quoted(url)));
        self
    }

    fn resize(&mut self, width: u32, height: u32) -> &mut Self {
        self.buf.push_codes(&format!(
            "await page.set_viewport_size({{ \"width\": {}, \"height\": {} }})",
            width, height
        ));
        self
    }

    fn fill(&mut self, selector: &str, value: &str, causes_navigation: bool) -> &mut Self {
        let action = format!(
            "await interact(page, {}, \"fill\", {})",
            single_quoted(selector),
            single_quoted(value)
        );
        self.push_action(action, causes_navigation);
        self
    }

    fn type_text(&mut self, selector: &str, value: &str, causes_navigation: bool) -> &mut Self {
        let action = format!(
            "await interact(page, {}, \"type\", {})",
            single_quoted(selector),
            single_quoted(value)
        );
        self.push_action(action, causes_navigation);
        self
    }

    fn select(&mut self, selector: &str, option: &str, causes_navigation: bool) -> &mut Self {
        let action = format!(
            "await interact(page, {}, \"select_option\", {})",
            single_quoted(selector),
            single_quoted(option)
        );
        self.push_action(action, causes_navigation);
        self
    }

    fn keydown(&mut self, selector: &str, key: &str, causes_navigation: bool) -> &mut Self {
        // r/R replays the element's text back to the console instead of
        // pressing the key (session-replay value capture).
        let action = if key == "r" || key == "R" {
            format!(
                "v = await read_inner_text(page, {})\nprint(v)",
                single_quoted(selector)
            )
        } else {
            format!(
                "await interact(page, {}, \"press\", {})",
                single_quoted(selector),
                single_quoted(key)
            )
        };
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
            "await page.mouse.wheel({}, {})",
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
            format!(
                "await page.mouse.move({}, {})",
                fmt_num(source_x),
                fmt_num(source_y)
            ),
            "await page.mouse.down()".to_string(),
            format!(
                "await page.mouse.move({}, {})",
                fmt_num(target_x),
                fmt_num(target_y)
            ),
            "await page.mouse.up()".to_string(),
        ]
        .join("\n");
        self.buf.push_codes(&code);
        self
    }

    fn full_screenshot(&mut self) -> &mut Self {
        self.buf
            .push_codes("await page.screenshot(path='screenshot.png', full_page=True)");
        self
    }

    fn await_text(&mut self, text: &str) -> &mut Self {
        self.buf.push_codes(&format!(
            "await page.wait_for_selector({})",
            single_quoted(&format!("text={}", text))
        ));
        self
    }

    fn build_script(self) -> String {
        format!("{}\n{}", PROLOGUE, self.buf.assemble())
    }
}

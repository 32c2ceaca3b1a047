use super::{double_quoted, fmt_num, single_quoted, CodeBuffer, ScriptBuilder};
use crate::target::ScriptConfig;

/// Puppeteer script. Puppeteer has no auto-waiting, so every element action
/// is preceded by an explicit `waitForSelector`; there is no native `fill`,
/// so fills type after waiting on `selector:not([disabled])`.
pub struct PuppeteerBuilder {
    buf: CodeBuffer,
}

impl PuppeteerBuilder {
    pub fn new(config: ScriptConfig) -> Self {
        Self {
            buf: CodeBuffer::new(config),
        }
    }

    fn wait_for_selector(selector: &str) -> String {
        format!("page.waitForSelector({})", single_quoted(selector))
    }

    /// Wait for the selector, then run the action — wrapped with
    /// `waitForNavigation` inside `Promise.all` when it navigates.
    fn push_guarded(&mut self, wait_selector: &str, action: String, causes_navigation: bool) {
        let code = if causes_navigation {
            format!(
                "await {};\n  await Promise.all([\n    {},\n    page.waitForNavigation()\n  ]);",
                Self::wait_for_selector(wait_selector),
                action
            )
        } else {
            format!(
                "await {};\n  await {};",
                Self::wait_for_selector(wait_selector),
                action
            )
        };
        self.buf.push_codes(&code);
    }
}

impl ScriptBuilder for PuppeteerBuilder {
    fn buffer_mut(&mut self) -> &mut CodeBuffer {
        &mut self.buf
    }

    fn click(&mut self, selector: &str, causes_navigation: bool) -> &mut Self {
        let action = format!("page.click({})", single_quoted(selector));
        self.push_guarded(selector, action, causes_navigation);
        self
    }

    fn dbl_click(&mut self, selector: &str, causes_navigation: bool) -> &mut Self {
        let action = format!(
            "page.click({}, {{ clickCount: 2 }})",
            single_quoted(selector)
        );
        self.push_guarded(selector, action, causes_navigation);
        self
    }

    fn hover(&mut self, selector: &str, causes_navigation: bool) -> &mut Self {
        let action = format!("page.hover({})", single_quoted(selector));
        self.push_guarded(selector, action, causes_navigation);
        self
    }

    fn load(&mut self, url: &str) -> &mut Self {
        self.buf
            .push_codes(&format!("await page.goto({});", single_quoted(url)));
        self
    }

    fn resize(&mut self, width: u32, height: u32) -> &mut Self {
        self.buf.push_codes(&format!(
            "await page.setViewport({{ width: {}, height: {} }});",
            width, height
        ));
        self
    }

    fn fill(&mut self, selector: &str, value: &str, causes_navigation: bool) -> &mut Self {
        let action = format!(
            "page.type({}, {})",
            single_quoted(selector),
            double_quoted(value)
        );
        // No native fill: wait until the element is enabled, then type.
        let guard = format!("{}:not([disabled])", selector);
        self.push_guarded(&guard, action, causes_navigation);
        self
    }

    fn type_text(&mut self, selector: &str, value: &str, causes_navigation: bool) -> &mut Self {
        let action = format!(
            "page.type({}, {})",
            single_quoted(selector),
            double_quoted(value)
        );
        self.push_guarded(selector, action, causes_navigation);
        self
    }

    fn select(&mut self, selector: &str, option: &str, causes_navigation: bool) -> &mut Self {
        let action = format!(
            "page.select({}, {})",
            single_quoted(selector),
            single_quoted(option)
        );
        self.push_guarded(selector, action, causes_navigation);
        self
    }

    fn keydown(&mut self, selector: &str, key: &str, causes_navigation: bool) -> &mut Self {
        let action = format!("page.keyboard.press({})", single_quoted(key));
        self.push_guarded(selector, action, causes_navigation);
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
            "await page.evaluate(() => window.scrollBy({}, {}));",
            fmt_num(delta_x),
            fmt_num(delta_y)
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
                "await page.mouse.move({}, {});",
                fmt_num(source_x),
                fmt_num(source_y)
            ),
            "  await page.mouse.down();".to_string(),
            format!(
                "  await page.mouse.move({}, {});",
                fmt_num(target_x),
                fmt_num(target_y)
            ),
            "  await page.mouse.up();".to_string(),
        ]
        .join("\n");
        self.buf.push_codes(&code);
        self
    }

    fn full_screenshot(&mut self) -> &mut Self {
        self.buf
            .push_codes("await page.screenshot({ path: 'screenshot.png', fullPage: true });");
        self
    }

    fn await_text(&mut self, text: &str) -> &mut Self {
        self.buf.push_codes(&format!(
            "await page.waitForFunction({});",
            double_quoted(&format!(
                "document.body.innerText.includes({})",
                single_quoted(text)
            ))
        ));
        self
    }

    fn build_script(self) -> String {
        format!(
            "const puppeteer = require('puppeteer');\n(async () => {{\n  const browser = await puppeteer.launch({{\n    // headless: false, slowMo: 100, // Uncomment to visualize test\n  }});\n  const page = await browser.newPage();\n{}  await browser.close();\n}})();",
            self.buf.assemble()
        )
    }
}

use super::{double_quoted, floor_num, fmt_num, CodeBuffer, ScriptBuilder};
use crate::target::ScriptConfig;

const PROLOGUE: &str = r#"import com.microsoft.playwright.*;
import java.util.Arrays;
import java.util.LinkedHashSet;

public class AutomationScript {
  public static void execute(Page page) {"#;

/// Selector-fallback helpers shared by every generated Java script.
/// `LinkedHashSet` de-duplicates the pipe-delimited candidates while keeping
/// recording order.
const EPILOGUE: &str = r#"  }

  private static String readInnerText(Page page, String selectors) {
    for (String selector : new LinkedHashSet<>(Arrays.asList(selectors.split("\\|")))) {
      if (!selector.isEmpty()) {
        ElementHandle element = page.querySelector(selector);
        if (element != null) {
          return element.innerText();
        }
      }
    }
    return null;
  }

  private static void interact(Page page, String selectorString, String action, String value) {
    for (String selector : new LinkedHashSet<>(Arrays.asList(selectorString.split("\\|")))) {
      if (!selector.isEmpty() && page.querySelector(selector) != null) {
        if ("click".equals(action)) page.click(selector);
        else if ("dblclick".equals(action)) page.dblclick(selector);
        else if ("fill".equals(action)) page.fill(selector, value);
        else if ("type".equals(action)) page.type(selector, value);
        else if ("press".equals(action)) page.press(selector, value);
        else if ("hover".equals(action)) page.hover(selector);
        else if ("selectOption".equals(action)) page.selectOption(selector, value);
        break;
      }
    }
  }
}"#;

/// Playwright for Java. Navigation-causing actions are followed by a fixed
/// 2000 ms `waitForTimeout`.
pub struct PlaywrightJavaBuilder {
    buf: CodeBuffer,
}

impl PlaywrightJavaBuilder {
    pub fn new(config: ScriptConfig) -> Self {
        Self {
            buf: CodeBuffer::new(config),
        }
    }

    fn push_action(&mut self, action: String, causes_navigation: bool) {
        let code = if causes_navigation {
            format!("{}\npage.waitForTimeout(2000);", action)
        } else {
            action
        };
        self.buf.push_codes(&code);
    }
}

impl ScriptBuilder for PlaywrightJavaBuilder {
    fn buffer_mut(&mut self) -> &mut CodeBuffer {
        &mut self.buf
    }

    fn click(&mut self, selector: &str, causes_navigation: bool) -> &mut Self {
        let action = format!(
            "interact(page, {}, \"click\", null);",
            double_quoted(selector)
        );
        self.push_action(action, causes_navigation);
        self
    }

    fn dbl_click(&mut self, selector: &str, causes_navigation: bool) -> &mut Self {
        let action = format!(
            "interact(page, {}, \"dblclick\", null);",
            double_quoted(selector)
        );
        self.push_action(action, causes_navigation);
        self
    }

    fn hover(&mut self, selector: &str, causes_navigation: bool) -> &mut Self {
        let action = format!(
            "interact(page, {}, \"hover\", null);",
            double_quoted(selector)
        );
        self.push_action(action, causes_navigation);
        self
    }

    fn load(&mut self, url: &str) -> &mut Self {
        self.buf
            .push_codes(&format!("page.navigate({});", double_quoted(url)));
        self
    }

    fn resize(&mut self, width: u32, height: u32) -> &mut Self {
        self.buf
            .push_codes(&format!("page.setViewportSize({}, {});", width, height));
        self
    }

    fn fill(&mut self, selector: &str, value: &str, causes_navigation: bool) -> &mut Self {
        let action = format!(
            "interact(page, {}, \"fill\", {});",
            double_quoted(selector),
            double_quoted(value)
        );
        self.push_action(action, causes_navigation);
        self
    }

    fn type_text(&mut self, selector: &str, value: &str, causes_navigation: bool) -> &mut Self {
        let action = format!(
            "interact(page, {}, \"type\", {});",
            double_quoted(selector),
            double_quoted(value)
        );
        self.push_action(action, causes_navigation);
        self
    }

    fn select(&mut self, selector: &str, option: &str, causes_navigation: bool) -> &mut Self {
        let action = format!(
            "interact(page, {}, \"selectOption\", {});",
            double_quoted(selector),
            double_quoted(option)
        );
        self.push_action(action, causes_navigation);
        self
    }

    fn keydown(&mut self, selector: &str, key: &str, causes_navigation: bool) -> &mut Self {
        // r/R replays the element's text back to the console instead of
        // pressing the key (session-replay value capture).
        let action = if key == "r" || key == "R" {
            format!(
                "String v = readInnerText(page, {});\nSystem.out.println(v);",
                double_quoted(selector)
            )
        } else {
            format!(
                "interact(page, {}, \"press\", {});",
                double_quoted(selector),
                double_quoted(key)
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
            "page.mouse().wheel({}, {});",
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
                "page.mouse().move({}, {});",
                fmt_num(source_x),
                fmt_num(source_y)
            ),
            "page.mouse().down();".to_string(),
            format!(
                "page.mouse().move({}, {});",
                fmt_num(target_x),
                fmt_num(target_y)
            ),
            "page.mouse().up();".to_string(),
        ]
        .join("\n");
        self.buf.push_codes(&code);
        self
    }

    fn full_screenshot(&mut self) -> &mut Self {
        self.buf.push_codes(
            "page.screenshot(new Page.ScreenshotOptions().setPath(\"screenshot.png\").setFullPage(true));",
        );
        self
    }

    fn await_text(&mut self, text: &str) -> &mut Self {
        self.buf.push_codes(&format!(
            "page.waitForSelector({});",
            double_quoted(&format!("text={}", text))
        ));
        self
    }

    fn build_script(self) -> String {
        format!("{}\n{}{}", PROLOGUE, self.buf.assemble(), EPILOGUE)
    }
}

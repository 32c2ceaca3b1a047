use replaygen::{
    generate, generate_with_resolver, Action, ElementTarget, GenerateError, Selectors, TagName,
    Target,
};

fn click(selector: &str) -> Action {
    Action::Click(ElementTarget {
        selectors: Selectors {
            id_selector: Some(selector.to_string()),
            ..Default::default()
        },
        ..Default::default()
    })
}

fn click_with_candidates(test_id: &str, id: &str) -> Action {
    Action::Click(ElementTarget {
        selectors: Selectors {
            test_id_selector: Some(test_id.to_string()),
            id_selector: Some(id.to_string()),
            ..Default::default()
        },
        ..Default::default()
    })
}

fn textarea(selector: &str, value: &str) -> Action {
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

fn fill_input(selector: &str, value: &str) -> Action {
    Action::Input(ElementTarget {
        tag_name: TagName::Input,
        input_type: Some("text".to_string()),
        value: Some(value.to_string()),
        selectors: Selectors {
            id_selector: Some(selector.to_string()),
            ..Default::default()
        },
    })
}

#[test]
fn recording_parses_from_json() {
    let source = r##"[
        { "type": "load", "url": "https://example.com" },
        { "type": "click", "tagName": "BUTTON", "selectors": { "idSelector": "#go" } },
        { "type": "navigate" },
        { "type": "somethingNew", "payload": 42 }
    ]"##;
    let actions: Vec<Action> = serde_json::from_str(source).unwrap();
    assert_eq!(actions.len(), 4);
    assert!(matches!(actions[3], Action::Unsupported));

    let script = generate(&actions, false, "playwright-js").unwrap();
    assert!(script.contains("await page.goto('https://example.com');"));
    assert!(script.contains("Promise.all"));
    assert!(script.contains("page.click('#go')"));
}

#[test]
fn stateful_run_collapses_across_targets() {
    let actions = vec![
        textarea("#notes", "d"),
        textarea("#notes", "dr"),
        textarea("#notes", "draft"),
        click("#save"),
    ];
    for target in Target::ALL {
        let script = generate(&actions, false, target.id()).unwrap();
        assert!(
            script.contains("draft"),
            "{}: final state missing",
            target.id()
        );
        assert!(
            !script.contains("\"dr\"") && !script.contains("'dr'"),
            "{}: intermediate state leaked",
            target.id()
        );
    }
}

#[test]
fn trailing_stateful_run_flushes() {
    let actions = vec![click("#go"), textarea("#notes", "unsent"), textarea("#notes", "unsent!")];
    let script = generate(&actions, false, "cypress").unwrap();
    assert!(script.contains("cy.get('#notes').type(\"unsent!\");"));
    assert!(!script.contains("\"unsent\""));
}

#[test]
fn lookahead_inspects_raw_indices() {
    // The dropped action sits between the click and the navigation marker in
    // the retained view, but not in the raw list the lookahead runs over.
    let actions = vec![
        Action::Unsupported,
        click("#go"),
        Action::Navigate,
        Action::FullScreenshot,
    ];
    let script = generate(&actions, false, "puppeteer").unwrap();
    assert!(script.contains("Promise.all"));
    assert!(script.contains("page.waitForNavigation()"));
    assert!(script.contains("page.screenshot"));
}

#[test]
fn navigation_policy_per_family() {
    let actions = vec![click("#go"), Action::Navigate];

    let js = generate(&actions, false, "playwright-js").unwrap();
    assert!(js.contains("Promise.all"));

    let py = generate(&actions, false, "playwright-python").unwrap();
    assert!(py.contains("await interact(page, '#go', \"click\")\n\tawait asyncio.sleep(2)"));
    assert!(!py.contains("Promise.all"));

    let java = generate(&actions, false, "playwright-java").unwrap();
    assert!(java.contains("page.waitForTimeout(2000);"));

    // Cypress auto-waits, so the navigation leaves no trace.
    let cy = generate(&actions, false, "cypress").unwrap();
    assert_eq!(cy, "it('Written with Web UI Recorder', () => {  cy.get('#go').click();\n});");
}

#[test]
fn fallback_targets_join_candidates_with_pipes() {
    let actions = vec![click_with_candidates("[data-testid=go]", "#go")];

    let py = generate(&actions, false, "playwright-python").unwrap();
    assert!(py.contains("await interact(page, '[data-testid=go]|#go', \"click\")"));

    let java = generate(&actions, false, "playwright-java").unwrap();
    assert!(java.contains("interact(page, \"[data-testid=go]|#go\", \"click\", null);"));

    // Non-fallback targets take the first candidate only.
    let js = generate(&actions, false, "playwright-js").unwrap();
    assert!(js.contains("page.click('[data-testid=go]')"));
    assert!(!js.contains("|#go"));
}

#[test]
fn values_with_quotes_survive_escaping() {
    let actions = vec![fill_input("#name", "say \"hi\"")];
    let js = generate(&actions, false, "playwright-js").unwrap();
    assert!(js.contains("page.fill('#name', \"say \\\"hi\\\"\");"));

    let actions = vec![fill_input("#name", "it's")];
    let py = generate(&actions, false, "playwright-python").unwrap();
    assert!(py.contains("await interact(page, '#name', \"fill\", 'it\\'s')"));
}

#[test]
fn output_is_deterministic() {
    let actions = vec![
        Action::Load {
            url: Some("https://example.com".into()),
        },
        click("#go"),
        Action::Navigate,
        textarea("#notes", "memo"),
        Action::FullScreenshot,
    ];
    for target in Target::ALL {
        let a = generate(&actions, true, target.id()).unwrap();
        let b = generate(&actions, true, target.id()).unwrap();
        assert_eq!(a, b, "{}", target.id());
    }
}

#[test]
fn unknown_target_is_rejected() {
    let err = generate(&[click("#go")], false, "selenium").unwrap_err();
    assert_eq!(err, GenerateError::UnsupportedTarget("selenium".to_string()));
}

#[test]
fn missing_field_is_rejected_with_raw_index() {
    let actions = vec![
        Action::Unsupported,
        click("#go"),
        Action::Resize {
            width: Some(800),
            height: None,
        },
    ];
    let err = generate(&actions, false, "playwright-js").unwrap_err();
    assert_eq!(
        err,
        GenerateError::InvalidAction {
            index: 2,
            field: "height"
        }
    );
}

#[test]
fn selectorless_element_action_is_rejected() {
    let actions = vec![click("#go"), Action::Hover(ElementTarget::default())];
    let err = generate(&actions, false, "cypress").unwrap_err();
    assert_eq!(err, GenerateError::UnresolvedSelector { index: 1 });
}

struct FixedResolver;

impl replaygen::SelectorResolver for FixedResolver {
    fn resolve(&self, _action: &Action, _target: Target) -> Option<String> {
        Some("#pinned".to_string())
    }
}

#[test]
fn custom_resolver_overrides_candidates() {
    let actions = vec![click("#go")];
    let script = generate_with_resolver(&actions, false, "playwright-js", &FixedResolver).unwrap();
    assert!(script.contains("page.click('#pinned')"));
    assert!(!script.contains("#go"));
}

#[test]
fn drag_and_drop_is_silent_on_cypress_only() {
    let actions = vec![Action::DragAndDrop {
        source_x: Some(10.0),
        source_y: Some(20.0),
        target_x: Some(30.5),
        target_y: Some(40.0),
    }];

    let cy = generate(&actions, false, "cypress").unwrap();
    assert_eq!(cy, "it('Written with Web UI Recorder', () => {  \n});");

    let js = generate(&actions, false, "playwright-js").unwrap();
    assert!(js.contains("page.mouse.move(10, 20);"));
    assert!(js.contains("page.mouse.down();"));
    assert!(js.contains("page.mouse.move(30.5, 40);"));
    assert!(js.contains("page.mouse.up();"));
}

#[test]
fn keydown_replay_key_reads_text_back() {
    let keydown = |key: &str| Action::Keydown {
        element: ElementTarget {
            selectors: Selectors {
                id_selector: Some("#out".to_string()),
                ..Default::default()
            },
            ..Default::default()
        },
        key: Some(key.to_string()),
    };

    let py = generate(&[keydown("r")], false, "playwright-python").unwrap();
    assert!(py.contains("v = await read_inner_text(page, '#out')"));
    assert!(py.contains("print(v)"));

    let java = generate(&[keydown("R")], false, "playwright-java").unwrap();
    assert!(java.contains("String v = readInnerText(page, \"#out\");"));
    assert!(java.contains("System.out.println(v);"));

    let py_press = generate(&[keydown("Enter")], false, "playwright-python").unwrap();
    assert!(py_press.contains("await interact(page, '#out', \"press\", 'Enter')"));
}

use std::fmt;
use std::str::FromStr;

use crate::error::GenerateError;

/// One of the six supported output frameworks/languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    PlaywrightJs,
    PlaywrightPython,
    PlaywrightJava,
    Puppeteer,
    Cypress,
    Eventstream,
}

impl Target {
    pub const ALL: [Target; 6] = [
        Target::PlaywrightJs,
        Target::PlaywrightPython,
        Target::PlaywrightJava,
        Target::Puppeteer,
        Target::Cypress,
        Target::Eventstream,
    ];

    /// Stable identifier used on the CLI and in the public API.
    pub fn id(self) -> &'static str {
        match self {
            Target::PlaywrightJs => "playwright-js",
            Target::PlaywrightPython => "playwright-python",
            Target::PlaywrightJava => "playwright-java",
            Target::Puppeteer => "puppeteer",
            Target::Cypress => "cypress",
            Target::Eventstream => "eventstream",
        }
    }

    pub fn family(self) -> LanguageFamily {
        match self {
            Target::PlaywrightPython => LanguageFamily::Python,
            Target::PlaywrightJava => LanguageFamily::Java,
            Target::PlaywrightJs | Target::Puppeteer | Target::Cypress | Target::Eventstream => {
                LanguageFamily::Js
            }
        }
    }

    /// File extension for generated scripts.
    pub fn file_extension(self) -> &'static str {
        match self {
            Target::PlaywrightJs => "spec.js",
            Target::PlaywrightPython => "py",
            Target::PlaywrightJava => "java",
            Target::Puppeteer => "js",
            Target::Cypress => "cy.js",
            Target::Eventstream => "events.js",
        }
    }

    /// Targets whose emitted scripts carry an `interact()` helper that walks
    /// a pipe-delimited candidate list and acts on the first selector that
    /// exists. The resolver hands these targets the full candidate set.
    pub fn supports_selector_fallback(self) -> bool {
        matches!(self, Target::PlaywrightPython | Target::PlaywrightJava)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Target {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| GenerateError::UnsupportedTarget(s.to_string()))
    }
}

/// Language family a target's surface syntax belongs to.
/// Determines the formatting triple shared by targets of that family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageFamily {
    Js,
    Python,
    Java,
}

impl LanguageFamily {
    /// (indent unit, comment prefix, statement terminator)
    pub fn formatting(self) -> (&'static str, &'static str, &'static str) {
        match self {
            LanguageFamily::Js => ("  ", "//", ";"),
            LanguageFamily::Python => ("\t", "#", ""),
            LanguageFamily::Java => ("\t", "//", ";"),
        }
    }
}

/// Per-target formatting profile. Built once per `generate` call,
/// never mutated afterwards.
#[derive(Debug, Clone, Copy)]
pub struct ScriptConfig {
    pub target: Target,
    pub show_comments: bool,
    pub indent: &'static str,
    pub comment_prefix: &'static str,
    pub terminator: &'static str,
}

impl ScriptConfig {
    pub fn new(target: Target, show_comments: bool) -> Self {
        let (indent, comment_prefix, terminator) = target.family().formatting();
        Self {
            target,
            show_comments,
            indent,
            comment_prefix,
            terminator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_ids_round_trip() {
        for target in Target::ALL {
            assert_eq!(target.id().parse::<Target>().unwrap(), target);
        }
    }

    #[test]
    fn test_unknown_target_id() {
        let err = "not-a-real-target".parse::<Target>().unwrap_err();
        assert_eq!(
            err,
            GenerateError::UnsupportedTarget("not-a-real-target".to_string())
        );
    }

    #[test]
    fn test_formatting_table() {
        let config = ScriptConfig::new(Target::PlaywrightJs, true);
        assert_eq!(
            (config.indent, config.comment_prefix, config.terminator),
            ("  ", "//", ";")
        );
        let config = ScriptConfig::new(Target::PlaywrightPython, false);
        assert_eq!(
            (config.indent, config.comment_prefix, config.terminator),
            ("\t", "#", "")
        );
        let config = ScriptConfig::new(Target::PlaywrightJava, false);
        assert_eq!(
            (config.indent, config.comment_prefix, config.terminator),
            ("\t", "//", ";")
        );
    }

    #[test]
    fn test_selector_fallback_targets() {
        assert!(Target::PlaywrightPython.supports_selector_fallback());
        assert!(Target::PlaywrightJava.supports_selector_fallback());
        assert!(!Target::PlaywrightJs.supports_selector_fallback());
        assert!(!Target::Cypress.supports_selector_fallback());
    }
}

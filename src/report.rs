//! # Report Rendering
//!
//! Formats tokenizer output for display. A report has two phases: phase 1 lists
//! every token with its type, phase 2 lists the granular breakdown. In text form
//! the phases are separated by a line of tildes:
//!
//! ```text
//! Phase 1 Output:
//! Token: 'hi', Type: WORD
//!
//! ~~~~~
//!
//! Phase 2 Output (Granular Breakdown):
//! Token: 'hi' -> 'h', 'i'
//! ```

use std::fmt;

use serde::Serialize;

use crate::{
    config::{ReportConfig, TokenizerConfig},
    tokenizer::{breakdown_entries, BreakdownEntry, Token, TokenSequence, Tokenizer},
    InternalResult,
};

pub const PHASE_ONE_HEADER: &str = "Phase 1 Output:";
pub const PHASE_TWO_HEADER: &str = "Phase 2 Output (Granular Breakdown):";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    tokens: TokenSequence,
    breakdown: Vec<BreakdownEntry>,
}

impl Report {
    pub fn new(tokens: TokenSequence, min_len: usize) -> Self {
        let breakdown = breakdown_entries(&tokens, min_len);
        Self { tokens, breakdown }
    }

    /// Tokenizes `input` and builds the report, both according to `config`.
    #[tracing::instrument(level = "debug", skip(input, config))]
    pub fn from_input(input: &str, config: &TokenizerConfig) -> Self {
        let tokens = Tokenizer::from_config(config).tokenize(input);
        Self::new(tokens, config.breakdown.min_len)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn breakdown(&self) -> &[BreakdownEntry] {
        &self.breakdown
    }

    pub fn phase_one(&self) -> Vec<String> {
        self.tokens.iter().map(ToString::to_string).collect()
    }

    pub fn phase_two(&self) -> Vec<String> {
        self.breakdown.iter().map(ToString::to_string).collect()
    }

    pub fn render(&self, config: &ReportConfig) -> String {
        self.display(config).to_string()
    }

    pub fn display<'a>(&'a self, config: &'a ReportConfig) -> ReportDisplay<'a> {
        ReportDisplay {
            report: self,
            config,
        }
    }

    pub fn to_json(&self) -> InternalResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub struct ReportDisplay<'a> {
    report: &'a Report,
    config: &'a ReportConfig,
}

impl fmt::Display for ReportDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers = self.config.headers;

        if headers {
            writeln!(f, "{}", PHASE_ONE_HEADER)?;
        }
        for token in &self.report.tokens {
            writeln!(f, "{}", token)?;
        }

        if headers {
            writeln!(f)?;
        }
        writeln!(f, "{}", self.config.separator)?;
        if headers {
            writeln!(f)?;
            writeln!(f, "{}", PHASE_TWO_HEADER)?;
        }

        for entry in &self.report.breakdown {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_with_headers() {
        let report = Report::from_input("hi a", &TokenizerConfig::default());
        let expected = "\
Phase 1 Output:
Token: 'hi', Type: WORD
Token: ' ', Type: WHITESPACE
Token: 'a', Type: WORD

~~~~~

Phase 2 Output (Granular Breakdown):
Token: 'hi' -> 'h', 'i'
";
        assert_eq!(report.render(&ReportConfig::default()), expected);
    }

    #[test]
    fn test_render_without_headers() {
        let report = Report::from_input("ab\n", &TokenizerConfig::default());
        let config = ReportConfig {
            headers: false,
            ..ReportConfig::default()
        };
        let expected = "\
Token: 'ab', Type: WORD
Token: '\\n', Type: END_OF_LINE
~~~~~
Token: 'ab' -> 'a', 'b'
Token: '\\n' -> '\\', 'n'
";
        assert_eq!(report.render(&config), expected);
    }

    #[test]
    fn test_render_empty_input() {
        let report = Report::from_input("", &TokenizerConfig::default());
        assert!(report.tokens().is_empty());
        assert_eq!(
            report.render(&ReportConfig::default()),
            "Phase 1 Output:\n\n~~~~~\n\nPhase 2 Output (Granular Breakdown):\n"
        );
    }

    #[test]
    fn test_phases() {
        let report = Report::from_input("a,bc", &TokenizerConfig::default());
        assert_eq!(
            report.phase_one(),
            vec![
                "Token: 'a', Type: WORD",
                "Token: ',', Type: PUNCTUATION",
                "Token: 'bc', Type: WORD",
            ]
        );
        assert_eq!(report.phase_two(), vec!["Token: 'bc' -> 'b', 'c'"]);
    }

    #[test]
    fn test_config_is_applied() {
        let config = TokenizerConfig::from_json(
            r#"{ "delimiter": "|", "breakdown": { "min_len": 4 } }"#,
        )
        .unwrap();
        let report = Report::from_input("abc|abcd~", &config);
        assert_eq!(report.tokens().len(), 3);
        assert_eq!(report.breakdown().len(), 1);
        assert_eq!(report.breakdown()[0].value, "abcd");
    }

    #[test]
    fn test_to_json() {
        let report = Report::from_input("hi", &TokenizerConfig::default());
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "tokens": [{ "value": "hi", "type": "WORD" }],
                "breakdown": [{ "value": "hi", "chars": ["h", "i"] }]
            })
        );
    }
}
